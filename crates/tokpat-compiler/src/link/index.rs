use std::collections::{HashMap, HashSet};

use crate::build::{GeneratorState, Target};
use crate::document::DocumentId;

#[derive(Debug, Clone)]
enum Exports {
    Compiled { keys: HashSet<String>, root: bool },
    /// Provided by a hand-written module; its contents are not known.
    Extern,
}

/// What every known document exports, for validating cross-document includes.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    documents: HashMap<DocumentId, Exports>,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_compiled(&mut self, state: &GeneratorState) {
        self.documents.insert(
            state.document().clone(),
            Exports::Compiled {
                keys: state.defined.iter().cloned().collect(),
                root: state.has_root(),
            },
        );
    }

    pub fn insert_extern(&mut self, document: DocumentId) {
        self.documents.entry(document).or_insert(Exports::Extern);
    }

    pub fn contains(&self, document: &DocumentId) -> bool {
        self.documents.contains_key(document)
    }

    /// Check that `document` exports `target`; the error is a human-readable reason.
    pub fn check(&self, document: &DocumentId, target: &Target) -> Result<(), String> {
        match (self.documents.get(document), target) {
            (None, _) => Err(format!("document `{document}` is not available")),
            (Some(Exports::Extern), _) => Ok(()),
            (Some(Exports::Compiled { keys, .. }), Target::Key(key)) if !keys.contains(key) => {
                Err(format!("document `{document}` has no rule `{key}`"))
            }
            (Some(Exports::Compiled { root: false, .. }), Target::Root) => {
                Err(format!("document `{document}` has no top-level patterns"))
            }
            _ => Ok(()),
        }
    }
}
