//! Rendering of linked documents into TypeScript modules.

mod artifact;
mod timestamp;
mod tree;


pub use artifact::{Artifact, emit};
pub use timestamp::Timestamp;
pub use tree::{INDENT, Item, Node, quote};
