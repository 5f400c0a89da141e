use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use tokpat_core::utils::to_camel_case;

use super::include::{Include, Target};
use super::path::AccessPath;
use crate::classify::{TokenCategory, TokenTypeRef};
use crate::diagnostics::Diagnostics;
use crate::document::DocumentId;
use crate::emit::Node;

/// A top-level `export const` of the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub ident: String,
    /// Repository key, `None` for the root definition.
    pub key: Option<String>,
    pub value: Node,
}

/// An include that could not be inlined while building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// The `patterns` array the reference belongs to.
    pub target: AccessPath,
    /// Position of the include in `target` as written in the source.
    pub index: usize,
    pub include: Include,
    /// The include string as written.
    pub spelling: String,
}

impl Patch {
    /// Source path of the include itself.
    pub fn origin(&self) -> AccessPath {
        self.target.index(self.index)
    }
}

/// Everything accumulated while building one document.
#[derive(Debug)]
pub struct GeneratorState {
    pub(crate) document: DocumentId,
    pub(crate) categories: IndexSet<TokenCategory>,
    /// Keys whose definitions are complete, in definition order.
    pub(crate) defined: IndexSet<String>,
    pub(crate) root_defined: bool,
    pub(crate) local_patches: Vec<Patch>,
    pub(crate) external_patches: Vec<Patch>,
    pub(crate) dependencies: IndexSet<DocumentId>,
    /// Source indices of the elements each built `patterns` array holds natively.
    pub(crate) arrays: HashMap<AccessPath, Vec<usize>>,
    pub(crate) definitions: Vec<Definition>,
    pub(crate) scopes: IndexMap<String, TokenTypeRef>,
    pub(crate) diagnostics: Diagnostics,
}

impl GeneratorState {
    pub(crate) fn new(document: DocumentId) -> Self {
        Self {
            document,
            categories: IndexSet::new(),
            defined: IndexSet::new(),
            root_defined: false,
            local_patches: Vec::new(),
            external_patches: Vec::new(),
            dependencies: IndexSet::new(),
            arrays: HashMap::new(),
            definitions: Vec::new(),
            scopes: IndexMap::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    pub fn categories(&self) -> &IndexSet<TokenCategory> {
        &self.categories
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn local_patches(&self) -> &[Patch] {
        &self.local_patches
    }

    pub fn external_patches(&self) -> &[Patch] {
        &self.external_patches
    }

    pub fn dependencies(&self) -> &IndexSet<DocumentId> {
        &self.dependencies
    }

    /// Every scope name met, with its classification, in first-seen order.
    pub fn scopes(&self) -> &IndexMap<String, TokenTypeRef> {
        &self.scopes
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_defined(&self, target: &Target) -> bool {
        match target {
            Target::Key(key) => self.defined.contains(key),
            Target::Root => self.root_defined,
        }
    }

    pub fn has_root(&self) -> bool {
        self.root_defined
    }

    /// Source indices natively present in the array at `path`.
    pub fn native_indices(&self, path: &AccessPath) -> &[usize] {
        self.arrays.get(path).map_or(&[], Vec::as_slice)
    }
}

/// Identifier a target is exported under by `document`.
pub(crate) fn target_ident(document: &DocumentId, target: &Target) -> String {
    match target {
        Target::Key(key) => to_camel_case(key),
        Target::Root => document.root_ident(),
    }
}
