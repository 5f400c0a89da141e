//! Staged facade over the whole pipeline.
//!
//! ```text
//! Workspace ──build()──▶ WorkspaceBuilt ──link()──▶ WorkspaceLinked ──emit()──▶ Compilation
//! ```
//!
//! Building is independent per document. Linking is a barrier: it needs the
//! exports of every document, so it only exists on a fully built workspace.
//! A failing document keeps its `Err` through the remaining stages without
//! stopping its siblings.

use std::collections::HashMap;

use indexmap::IndexMap;
use tokpat_core::Grammar;

use crate::build::{GeneratorState, build_document};
use crate::classify::TokenTypeRef;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::document::DocumentId;
use crate::emit::{Artifact, Timestamp, emit};
use crate::link::{DocumentIndex, LinkedDocument, link};
use crate::{Error, Result};

struct Slot<T> {
    /// File name or label the document was added under.
    name: String,
    document: DocumentId,
    stage: Result<T>,
}

impl<T> Slot<T> {
    fn advance<U>(self, f: impl FnOnce(T) -> Result<U>) -> Slot<U> {
        Slot {
            name: self.name,
            document: self.document,
            stage: self.stage.and_then(f),
        }
    }
}

pub struct Workspace {
    config: Config,
    sources: Vec<Slot<Grammar>>,
}

impl Workspace {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sources: Vec::new(),
        }
    }

    /// Add a grammar document from JSON text.
    ///
    /// The document id is its `scopeName`, or derived from `name` when absent.
    pub fn document(mut self, name: impl Into<String>, json: &str) -> Self {
        let name = name.into();
        let slot = match Grammar::from_json(json) {
            Ok(grammar) => Slot {
                document: document_id(&name, &grammar),
                name,
                stage: Ok(grammar),
            },
            Err(source) => {
                let document = DocumentId::from_file_name(&name);
                Slot {
                    name,
                    stage: Err(Error::Grammar {
                        document: document.clone(),
                        source,
                    }),
                    document,
                }
            }
        };
        self.sources.push(slot);
        self
    }

    /// Add an already parsed grammar.
    pub fn grammar(mut self, name: impl Into<String>, grammar: Grammar) -> Self {
        let name = name.into();
        self.sources.push(Slot {
            document: document_id(&name, &grammar),
            name,
            stage: Ok(grammar),
        });
        self
    }

    pub fn build(self) -> WorkspaceBuilt {
        let config = self.config;
        let mut seen: HashMap<DocumentId, String> = HashMap::new();
        let mut artifacts: HashMap<String, DocumentId> = HashMap::new();

        let slots = self
            .sources
            .into_iter()
            .map(|slot| {
                let document = slot.document.clone();
                let duplicate = seen.contains_key(&document);
                seen.entry(document.clone()).or_insert_with(|| slot.name.clone());
                let file_name = config.artifact_file_name(&document);
                let other = artifacts.get(&file_name).cloned();

                slot.advance(|grammar| {
                    if duplicate {
                        return Err(Error::DuplicateDocument { document });
                    }
                    if let Some(other) = other {
                        return Err(Error::DuplicateArtifact {
                            document,
                            file_name,
                            other,
                        });
                    }
                    artifacts.insert(file_name, document.clone());
                    build_document(document, &grammar, &config)
                })
            })
            .collect();

        WorkspaceBuilt { config, slots }
    }

    /// Build, link and emit every document.
    pub fn compile(self) -> Compilation {
        self.build().link().emit()
    }
}

fn document_id(name: &str, grammar: &Grammar) -> DocumentId {
    match &grammar.scope_name {
        Some(scope_name) => DocumentId::new(scope_name.as_str()),
        None => DocumentId::from_file_name(name),
    }
}

pub struct WorkspaceBuilt {
    config: Config,
    slots: Vec<Slot<GeneratorState>>,
}

impl WorkspaceBuilt {
    /// Documents that built successfully.
    pub fn states(&self) -> impl Iterator<Item = &GeneratorState> {
        self.slots.iter().filter_map(|slot| slot.stage.as_ref().ok())
    }

    /// Documents that failed to parse or build.
    pub fn errors(&self) -> impl Iterator<Item = &Error> {
        self.slots.iter().filter_map(|slot| slot.stage.as_ref().err())
    }

    pub fn link(self) -> WorkspaceLinked {
        let mut index = DocumentIndex::new();
        for state in self.states() {
            index.insert_compiled(state);
        }
        for document in &self.config.extern_documents {
            index.insert_extern(document.clone());
        }

        let slots = self
            .slots
            .into_iter()
            .map(|slot| slot.advance(|state| link(state, &index)))
            .collect();

        WorkspaceLinked {
            config: self.config,
            slots,
        }
    }
}

pub struct WorkspaceLinked {
    config: Config,
    slots: Vec<Slot<LinkedDocument>>,
}

impl WorkspaceLinked {
    pub fn documents(&self) -> impl Iterator<Item = &LinkedDocument> {
        self.slots.iter().filter_map(|slot| slot.stage.as_ref().ok())
    }

    pub fn emit(self) -> Compilation {
        let timestamp = self.config.timestamp.unwrap_or_else(Timestamp::now);
        let documents = self
            .slots
            .into_iter()
            .map(|slot| {
                let (artifact, mut diagnostics, scopes) = match slot.stage {
                    Ok(linked) => {
                        let artifact = emit(&linked, &self.config, timestamp);
                        let state = linked.state;
                        (Ok(artifact), state.diagnostics, state.scopes)
                    }
                    Err(error) => (Err(error), Diagnostics::new(), IndexMap::new()),
                };
                if let Err(error) = &artifact {
                    log::error!("{error}");
                    diagnostics.fatal(&slot.document, error);
                }
                CompiledDocument {
                    name: slot.name,
                    document: slot.document,
                    artifact,
                    diagnostics,
                    scopes,
                }
            })
            .collect();

        Compilation { documents }
    }
}

/// Outcome for one input document.
#[derive(Debug)]
pub struct CompiledDocument {
    pub name: String,
    pub document: DocumentId,
    pub artifact: Result<Artifact>,
    /// Warnings, plus the fatal error when `artifact` is `Err`.
    pub diagnostics: Diagnostics,
    /// Classification of every scope name met while building.
    pub scopes: IndexMap<String, TokenTypeRef>,
}

#[derive(Debug)]
pub struct Compilation {
    pub documents: Vec<CompiledDocument>,
}

impl Compilation {
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.documents
            .iter()
            .filter_map(|doc| doc.artifact.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &Error> {
        self.documents
            .iter()
            .filter_map(|doc| doc.artifact.as_ref().err())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Artifact of `document`, if it compiled.
    pub fn artifact(&self, document: &str) -> Option<&Artifact> {
        self.artifacts()
            .find(|artifact| artifact.document().as_str() == document)
    }

    /// All diagnostics, document by document.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut all = Diagnostics::new();
        for doc in &self.documents {
            all.extend(doc.diagnostics.clone());
        }
        all
    }
}
