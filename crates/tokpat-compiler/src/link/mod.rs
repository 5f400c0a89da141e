//! Include resolution and patch planning.
//!
//! Runs once every document has been built. Deferred includes are checked
//! against the set of known documents, turned into reference expressions, and
//! ordered into `push`/`splice` statements that restore source order.

mod index;
mod plan;
mod resolve;

#[cfg(test)]
mod link_tests;

pub use index::DocumentIndex;
pub use plan::{PatchGroup, PatchOp, PatchStatement};
pub use resolve::{Import, LinkedDocument, link};
