//! Grammar types for TextMate-style grammar documents.
//!
//! This module provides types for representing `*.tmLanguage.json` files.
//! Only the fields the pattern compiler consumes are modelled; everything
//! else in the document is ignored on load.

mod json;
mod types;

#[cfg(test)]
mod json_tests;

pub use json::GrammarError;
pub use types::{Captures, Grammar, Rule};
