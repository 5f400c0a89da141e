use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::build::{AccessPath, GeneratorState, Patch};
use crate::document::DocumentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOp {
    Push,
    /// Insert before the element currently at this position.
    Splice(usize),
}

/// One `target.push(...)` or `target.splice(n, 0, ...)` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchStatement {
    pub target: String,
    pub op: PatchOp,
    pub references: Vec<String>,
}

impl fmt::Display for PatchStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let references = self.references.join(", ");
        match self.op {
            PatchOp::Push => write!(f, "{}.push({references});", self.target),
            PatchOp::Splice(position) => {
                write!(f, "{}.splice({position}, 0, {references});", self.target)
            }
        }
    }
}

/// Statements resolving includes into one other document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchGroup {
    pub document: DocumentId,
    pub statements: Vec<PatchStatement>,
}

/// Replays patches against the source indices each array holds.
///
/// An array starts with its natively built elements. Applying a patch inserts
/// its source index; the insert position is the number of present indices
/// below it, which keeps every array in source order whatever the order the
/// patches run in.
pub(super) struct Planner {
    present: HashMap<AccessPath, BTreeSet<usize>>,
}

impl Planner {
    pub(super) fn new(state: &GeneratorState) -> Self {
        let present = state
            .arrays
            .iter()
            .map(|(path, indices)| (path.clone(), indices.iter().copied().collect()))
            .collect();
        Self { present }
    }

    fn position(&self, array: &AccessPath, index: usize) -> usize {
        self.present
            .get(array)
            .map_or(index, |present| present.range(..index).count())
    }

    pub(super) fn apply(&mut self, patch: &Patch, reference: String) -> PatchStatement {
        let target = patch
            .target
            .render_with(|array, index| self.position(array, index));

        let present = self.present.entry(patch.target.clone()).or_default();
        let position = present.range(..patch.index).count();
        let op = if position == present.len() {
            PatchOp::Push
        } else {
            PatchOp::Splice(position)
        };
        present.insert(patch.index);

        PatchStatement {
            target,
            op,
            references: vec![reference],
        }
    }
}

/// Append, folding consecutive pushes into the same array.
pub(super) fn append(block: &mut Vec<PatchStatement>, statement: PatchStatement) {
    if let Some(last) = block.last_mut()
        && last.op == PatchOp::Push
        && statement.op == PatchOp::Push
        && last.target == statement.target
    {
        last.references.extend(statement.references);
        return;
    }
    block.push(statement);
}
