//! Pattern tree construction.
//!
//! One [`GeneratorState`] is built per grammar document. Includes that can be
//! satisfied immediately are inlined; everything else is recorded as a
//! [`Patch`] for the linker.

mod builder;
mod include;
mod path;
mod state;

#[cfg(test)]
mod builder_tests;

pub use builder::build_document;
pub use include::{Include, Target};
pub use path::{AccessPath, Field, Step};
pub use state::{Definition, GeneratorState, Patch};

pub(crate) use state::target_ident;
