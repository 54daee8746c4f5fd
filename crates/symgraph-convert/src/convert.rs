//! Per-record conversion of analyzer defs, refs and docs.

use serde_json::{Map, Value};
use symgraph_core::{
    Def, DefKind, Doc, FuncData, PLAIN_TEXT_FORMAT, RawDef, RawDoc, RawRef, Ref, normalize_path,
};
use symgraph_resolve::{DefKeyResolver, Origin, ResolveError, strip_root};

use crate::docs::format_doc_body;
use crate::{ConvertError, KindMap};

/// A converted def and the reference marking its definition site, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedDef {
    pub def: Def,
    pub self_ref: Option<Ref>,
}

/// Converts analyzer records for one source unit.
pub struct Converter<'a> {
    resolver: DefKeyResolver<'a>,
    kinds: &'a KindMap,
}

impl<'a> Converter<'a> {
    pub fn new(resolver: DefKeyResolver<'a>, kinds: &'a KindMap) -> Self {
        Self { resolver, kinds }
    }

    /// Map an absolute analyzer file path to a repository-relative one.
    ///
    /// An empty path means the analyzer did not know the file and stays empty.
    pub fn unit_file(&self, file: &str) -> Result<String, ConvertError> {
        if file.is_empty() {
            return Ok(String::new());
        }
        let abs = normalize_path(file);
        let unit_root = self.resolver.unit_root();
        let rel = strip_root(&abs, unit_root).ok_or_else(|| ConvertError::FileOutsideUnit {
            file: abs.clone(),
            unit_root: unit_root.to_string(),
        })?;
        let joined = normalize_path(&format!("{}/{}", self.resolver.unit().dir, rel));
        Ok(joined.trim_start_matches('/').to_string())
    }

    /// Convert a def. Returns `None` for defs this unit does not own.
    pub fn convert_def(&self, raw: &RawDef) -> Result<Option<ConvertedDef>, ConvertError> {
        let file = match self.unit_file(&raw.file) {
            Ok(file) => file,
            Err(ConvertError::FileOutsideUnit { file, .. }) => {
                tracing::debug!(path = %raw.path, %file, "skipping def in file outside unit");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let classification = self
            .resolver
            .classify(&raw.path)
            .map_err(|e| ConvertError::Def {
                path: raw.path.clone(),
                source: e.into(),
            })?;
        if classification.origin != Origin::Current {
            tracing::debug!(
                path = %raw.path,
                origin = classification.origin.as_str(),
                "skipping def not owned by unit"
            );
            return Ok(None);
        }
        let key = self
            .resolver
            .resolve_classified(&raw.path, classification)
            .map_err(|source| match source {
                ResolveError::InvalidDefPath { def_path, .. } => ConvertError::InvalidTreePath {
                    path: raw.path.clone(),
                    tree_path: def_path,
                },
                source => ConvertError::Def {
                    path: raw.path.clone(),
                    source,
                },
            })?
            .key;

        let mapped = self.kinds.map(&raw.kind);
        let mut kind = mapped.kind;
        let mut data_kind = raw.kind.to_lowercase();
        if raw.kind.eq_ignore_ascii_case("module")
            && self.resolver.env().is_package_init(&raw.file)
        {
            kind = Some(DefKind::Package);
            data_kind = DefKind::Package.as_str().to_string();
        }

        let self_ref = (!file.is_empty() && raw.ident_start != raw.ident_end).then(|| Ref {
            def_repo: key.repo.clone(),
            def_unit_type: key.unit_type.clone(),
            def_unit: key.unit.clone(),
            def_path: key.path.clone(),
            def: true,
            repo: key.repo.clone(),
            unit_type: key.unit_type.clone(),
            unit: key.unit.clone(),
            file: file.clone(),
            start: raw.ident_start,
            end: raw.ident_end,
            to_builtin: false,
        });

        let def = Def {
            tree_path: key.path.clone(),
            key,
            name: raw.name.clone(),
            file,
            def_start: raw.def_start,
            def_end: raw.def_end,
            exported: raw.exported,
            callable: mapped.callable,
            kind,
            data: def_data(&data_kind, raw.func_data.as_ref()),
        };
        Ok(Some(ConvertedDef { def, self_ref }))
    }

    /// Convert a reference. Returns `None` when the referencing file is
    /// outside the unit; resolution failures are returned for the caller to
    /// log and skip.
    pub fn convert_ref(&self, raw: &RawRef) -> Result<Option<Ref>, ResolveError> {
        let Ok(file) = self.unit_file(&raw.file) else {
            tracing::debug!(
                def_path = %raw.def,
                file = %raw.file,
                "skipping ref in file outside unit"
            );
            return Ok(None);
        };
        let target = self.resolver.resolve(&raw.def)?.key;
        let unit = self.resolver.unit();
        Ok(Some(Ref {
            def_repo: target.repo,
            def_unit_type: target.unit_type,
            def_unit: target.unit,
            def_path: target.path,
            def: false,
            repo: String::new(),
            unit_type: unit.unit_type.clone(),
            unit: unit.name.clone(),
            file,
            start: raw.start,
            end: raw.end,
            to_builtin: raw.builtin,
        }))
    }

    /// Convert a doc. Returns `None` when the doc's file is outside the unit.
    pub fn convert_doc(&self, raw: &RawDoc) -> Result<Option<Doc>, ConvertError> {
        let file = match self.unit_file(&raw.file) {
            Ok(file) => file,
            Err(ConvertError::FileOutsideUnit { file, .. }) => {
                tracing::debug!(def_path = %raw.def, %file, "skipping doc in file outside unit");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let key = self
            .resolver
            .resolve(&raw.def)
            .map_err(|source| ConvertError::Doc {
                path: raw.def.clone(),
                source,
            })?
            .key;
        Ok(Some(Doc {
            key,
            format: PLAIN_TEXT_FORMAT.to_string(),
            data: format_doc_body(&raw.body),
            file,
            start: raw.start,
            end: raw.end,
        }))
    }
}

/// Opaque per-def metadata: `{"Kind": ..., "FuncSignature": ...}`.
fn def_data(kind: &str, func: Option<&FuncData>) -> Value {
    let mut data = Map::new();
    data.insert("Kind".to_string(), Value::String(kind.to_string()));
    if let Some(func) = func {
        data.insert(
            "FuncSignature".to_string(),
            Value::String(func.signature.clone()),
        );
    }
    Value::Object(data)
}
