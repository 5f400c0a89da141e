use std::collections::{HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};
use tokpat_core::utils::is_reserved_word;

use super::index::DocumentIndex;
use super::plan::{PatchGroup, PatchStatement, Planner, append};
use crate::build::{GeneratorState, Include, Patch, Target, target_ident};
use crate::document::DocumentId;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Import {
    /// `import { a, b } from "./lang-token-patterns.g";`
    Named {
        document: DocumentId,
        names: Vec<String>,
    },
    /// `import * as LangPatterns from "./lang-token-patterns.g";`
    Namespace {
        document: DocumentId,
        alias: String,
    },
}

/// A built document with every deferred include resolved.
#[derive(Debug)]
pub struct LinkedDocument {
    pub state: GeneratorState,
    pub imports: Vec<Import>,
    /// Runs at module load, after every local definition exists.
    pub local_block: Vec<PatchStatement>,
    /// Runs from the link function, once the other modules are loaded.
    pub external_block: Vec<PatchGroup>,
}

#[derive(Default)]
struct Imports<'a> {
    named: IndexMap<DocumentId, IndexSet<String>>,
    namespaces: IndexSet<DocumentId>,
    /// Imported identifiers and aliases with the document they come from.
    taken: HashMap<String, DocumentId>,
    local: HashSet<&'a str>,
}

impl Imports<'_> {
    fn claim(&mut self, name: &str, from: &DocumentId, document: &DocumentId) -> Result<()> {
        let clash = self.local.contains(name)
            || self.taken.get(name).is_some_and(|owner| owner != from);
        if clash {
            return Err(Error::ImportCollision {
                document: document.clone(),
                ident: name.to_string(),
                from: from.clone(),
            });
        }
        self.taken.insert(name.to_string(), from.clone());
        Ok(())
    }

    fn into_vec(self) -> Vec<Import> {
        let named = self
            .named
            .into_iter()
            .map(|(document, names)| Import::Named {
                document,
                names: names.into_iter().collect(),
            });
        let namespaces = self.namespaces.into_iter().map(|document| Import::Namespace {
            alias: document.namespace_alias(),
            document,
        });
        named.chain(namespaces).collect()
    }
}

fn unresolved(document: &DocumentId, patch: &Patch, reason: String) -> Error {
    Error::UnresolvedInclude {
        document: document.clone(),
        path: patch.origin().to_string(),
        include: patch.spelling.clone(),
        reason,
    }
}

/// Resolve the deferred includes of one document against `index`.
///
/// Local patches are applied first, in the order they were recorded. External
/// patches follow, grouped by the document they point into, groups ordered by
/// first reference.
pub fn link(state: GeneratorState, index: &DocumentIndex) -> Result<LinkedDocument> {
    let document = state.document().clone();
    let mut planner = Planner::new(&state);

    let mut local_block = Vec::new();
    for patch in state.local_patches() {
        let Include::Local(target) = &patch.include else {
            continue;
        };
        if !state.is_defined(target) {
            let reason = match target {
                Target::Key(key) => format!("no rule `{key}` in the repository"),
                Target::Root => "document has no top-level patterns".to_string(),
            };
            return Err(unresolved(&document, patch, reason));
        }
        let statement = planner.apply(patch, target_ident(&document, target));
        append(&mut local_block, statement);
    }

    let mut groups: IndexMap<&DocumentId, Vec<&Patch>> = IndexMap::new();
    for patch in state.external_patches() {
        if let Include::External { document: other, .. } = &patch.include {
            groups.entry(other).or_default().push(patch);
        }
    }

    let mut imports = Imports {
        local: state.definitions().iter().map(|d| d.ident.as_str()).collect(),
        ..Imports::default()
    };
    let mut external_block = Vec::with_capacity(groups.len());
    for (other, patches) in groups {
        let mut statements = Vec::new();
        for patch in patches {
            let Include::External { target, .. } = &patch.include else {
                continue;
            };
            index
                .check(other, target)
                .map_err(|reason| unresolved(&document, patch, reason))?;

            let ident = target_ident(other, target);
            let reference = if other.same_family(&document) {
                if is_reserved_word(&ident) {
                    let reason = format!("`{ident}` is a reserved word and cannot be imported");
                    return Err(unresolved(&document, patch, reason));
                }
                imports.claim(&ident, other, &document)?;
                imports
                    .named
                    .entry(other.clone())
                    .or_default()
                    .insert(ident.clone());
                ident
            } else {
                let alias = other.namespace_alias();
                imports.claim(&alias, other, &document)?;
                imports.namespaces.insert(other.clone());
                format!("{alias}.{ident}")
            };
            append(&mut statements, planner.apply(patch, reference));
        }
        log::debug!(
            "{document}: {} patch statements into `{other}`",
            statements.len()
        );
        external_block.push(PatchGroup {
            document: other.clone(),
            statements,
        });
    }

    let imports = imports.into_vec();
    Ok(LinkedDocument {
        state,
        imports,
        local_block,
        external_block,
    })
}
