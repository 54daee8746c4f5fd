use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use symgraph_core::Requirement;
use symgraph_resolve::{LinearScan, PrefixTrie, RequirementLookup};

/// Build `n` requirements, each declaring two packages and one module.
fn make_requirements(n: usize) -> Vec<Requirement> {
    (0..n)
        .map(|i| Requirement {
            project_name: format!("Project{i}"),
            key: format!("project{i}"),
            repo_url: format!("github.com/org/project{i}"),
            packages: vec![format!("project{i}"), format!("project{i}.contrib")],
            modules: vec![format!("project{i}_compat")],
            ..Default::default()
        })
        .collect()
}

/// Relative paths spread across the declared names, plus a miss.
fn make_queries(n: usize) -> Vec<String> {
    let mut queries: Vec<String> = (0..n)
        .step_by((n / 16).max(1))
        .flat_map(|i| {
            [
                format!("project{i}/core/Engine/run"),
                format!("project{i}/contrib/helpers/fmt"),
                format!("project{i}_compat.py"),
            ]
        })
        .collect();
    queries.push("not_declared/module".to_string());
    queries
}

fn run_queries(lookup: &dyn RequirementLookup, queries: &[String]) -> usize {
    queries
        .iter()
        .filter_map(|q| lookup.find_index(black_box(q)))
        .count()
}

/// Compare the linear scan against the prefix trie as the manifest grows.
fn bench_requirement_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("requirement_lookup");
    for n in [10, 100, 1000] {
        let reqs = make_requirements(n);
        let queries = make_queries(n);
        let linear = LinearScan::new(reqs.clone(), ".py");
        let trie = PrefixTrie::new(reqs, ".py");

        group.bench_with_input(BenchmarkId::new("linear", n), &queries, |b, q| {
            b.iter(|| run_queries(&linear, q))
        });
        group.bench_with_input(BenchmarkId::new("trie", n), &queries, |b, q| {
            b.iter(|| run_queries(&trie, q))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_requirement_lookup);
criterion_main!(benches);
