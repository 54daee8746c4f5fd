use criterion::{Criterion, criterion_group, criterion_main};
use symgraph_convert::{Environment, graph_unit};
use symgraph_core::{AnalyzerOutput, RawDef, RawDoc, RawGraph, RawRef, Requirement, SourceUnit};
use symgraph_resolve::LookupStrategy;

const SITE: &str = "/venv/lib/python2.7/site-packages";

/// Analyzer output for a unit with `modules` modules of ten functions each,
/// referencing a spread of `deps` dependencies.
fn make_output(modules: usize, deps: usize) -> AnalyzerOutput {
    let mut graph = RawGraph::default();
    for m in 0..modules {
        let file = format!("/src/pkg/mod{m}.py");
        for f in 0..10 {
            let path = format!("/src/pkg/mod{m}/func{f}");
            graph.defs.push(RawDef {
                path: path.clone(),
                name: format!("func{f}"),
                file: file.clone(),
                ident_start: f * 100 + 4,
                ident_end: f * 100 + 9,
                def_start: f * 100,
                def_end: f * 100 + 90,
                exported: true,
                kind: "FUNCTION".to_string(),
                func_data: None,
            });
            graph.refs.push(RawRef {
                def: format!("{SITE}/dep{}/api/call", (m * 10 + f) % deps),
                file: file.clone(),
                start: f * 100 + 20,
                end: f * 100 + 24,
                builtin: false,
            });
            graph.docs.push(RawDoc {
                def: path,
                file: file.clone(),
                body: "Summary.\n\n    Details.\n".to_string(),
                start: f * 100 + 10,
                end: f * 100 + 18,
            });
        }
    }
    let reqs = (0..deps)
        .map(|d| Requirement {
            project_name: format!("Dep{d}"),
            repo_url: format!("github.com/org/dep{d}"),
            packages: vec![format!("dep{d}")],
            ..Default::default()
        })
        .collect();
    AnalyzerOutput {
        graph,
        reqs,
        extensions: None,
    }
}

fn bench_graph_unit(c: &mut Criterion) {
    let unit = SourceUnit::new("Pkg", "PipPackage", ".");
    let output = make_output(100, 200);
    let mut group = c.benchmark_group("graph_unit");
    for (name, lookup) in [("linear", LookupStrategy::Linear), ("trie", LookupStrategy::Trie)] {
        let env = Environment {
            lookup,
            ..Default::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| graph_unit(output.clone(), &unit, &env).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_graph_unit);
criterion_main!(benches);
