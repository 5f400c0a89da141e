//! Configuration for pattern table generation.

use crate::classify::{Classifier, ScopeSelection};
use crate::document::DocumentId;
use crate::emit::Timestamp;
use crate::regex::Translator;

/// Configuration for pattern table generation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Module the token type enums are imported from
    pub(crate) tokens_module: String,
    /// Module the `TokenPattern` type is imported from
    pub(crate) pattern_types_module: String,
    /// Appended to a document's language to name its module
    pub(crate) artifact_suffix: String,
    pub(crate) scope_selection: ScopeSelection,
    /// Trailing scope segments that name a language rather than a token
    pub(crate) language_suffixes: Vec<String>,
    pub(crate) expand_posix_classes: bool,
    /// Documents provided by hand-written modules rather than generated here
    pub(crate) extern_documents: Vec<DocumentId>,
    /// Fixed header timestamp; `None` uses the current time
    pub(crate) timestamp: Option<Timestamp>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tokens_module: "./renpy-tokens".to_string(),
            pattern_types_module: "./token-pattern-types".to_string(),
            artifact_suffix: "-token-patterns.g".to_string(),
            scope_selection: ScopeSelection::default(),
            language_suffixes: vec!["renpy".to_string(), "python".to_string()],
            expand_posix_classes: true,
            extern_documents: Vec::new(),
            timestamp: None,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module specifier of the token type enums.
    pub fn tokens_module(mut self, value: impl Into<String>) -> Self {
        self.tokens_module = value.into();
        self
    }

    /// Set the module specifier of the `TokenPattern` type.
    pub fn pattern_types_module(mut self, value: impl Into<String>) -> Self {
        self.pattern_types_module = value.into();
        self
    }

    /// Set the suffix of generated module names (without `.ts`).
    pub fn artifact_suffix(mut self, value: impl Into<String>) -> Self {
        self.artifact_suffix = value.into();
        self
    }

    /// Choose which entry of a space-separated scope list is classified.
    pub fn scope_selection(mut self, value: ScopeSelection) -> Self {
        self.scope_selection = value;
        self
    }

    /// Replace the list of trailing language segments stripped before classification.
    pub fn language_suffixes<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.language_suffixes = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether POSIX bracket classes are rewritten to ranges.
    pub fn expand_posix_classes(mut self, value: bool) -> Self {
        self.expand_posix_classes = value;
        self
    }

    /// Register a document whose module exists but is not compiled here.
    ///
    /// Includes into it are accepted without checking its keys.
    pub fn extern_document(mut self, id: impl Into<DocumentId>) -> Self {
        self.extern_documents.push(id.into());
        self
    }

    /// Pin the header timestamp.
    pub fn timestamp(mut self, value: Timestamp) -> Self {
        self.timestamp = Some(value);
        self
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.scope_selection, self.language_suffixes.clone())
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.expand_posix_classes)
    }

    /// File name of the artifact generated for `document`.
    pub fn artifact_file_name(&self, document: &DocumentId) -> String {
        format!("{}.ts", document.module_name(&self.artifact_suffix))
    }
}
