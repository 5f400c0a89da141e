//! Document identity and the names derived from it.
//!
//! A document id is the grammar's scope name, e.g. `source.renpy.atl`.
//! The last segment is the document's language (`atl`); the first two
//! segments are its family (`source.renpy`). Documents of one family are
//! generated next to each other and import each other's exports by name.

use std::fmt;

use tokpat_core::utils::{to_camel_case, to_title_case};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an id from a grammar file name when the document has no `scopeName`.
    ///
    /// `renpy.atl.tmLanguage.json` becomes `source.renpy.atl`.
    pub fn from_file_name(file_name: &str) -> Self {
        let base = file_name
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(file_name);
        let stem = base
            .strip_suffix(".tmLanguage.json")
            .or_else(|| base.strip_suffix(".json"))
            .unwrap_or(base);
        if stem.starts_with("source.") {
            Self::new(stem)
        } else {
            Self::new(format!("source.{stem}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lang(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    pub fn family(&self) -> &str {
        match self.0.match_indices('.').nth(1) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    pub fn same_family(&self, other: &DocumentId) -> bool {
        self.family() == other.family()
    }

    /// Module specifier of the generated file, without extension.
    pub fn module_name(&self, artifact_suffix: &str) -> String {
        format!("{}{artifact_suffix}", self.lang())
    }

    /// Identifier of the definition built from the top-level `patterns`.
    pub fn root_ident(&self) -> String {
        format!("{}Root", to_camel_case(self.lang()))
    }

    /// Namespace alias used when another family imports this document.
    pub fn namespace_alias(&self) -> String {
        format!("{}Patterns", to_title_case(self.lang()))
    }

    /// Name of the exported function holding cross-document patches.
    pub fn link_fn(&self) -> String {
        format!("link{}Patterns", to_title_case(self.lang()))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
