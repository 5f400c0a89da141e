#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for tokpat.
//!
//! Two layers:
//! - **Grammar layer**: 1:1 mapping to TextMate-style `*.tmLanguage.json` documents
//! - **Naming layer**: casing helpers shared by the compiler and the CLI

pub mod colors;
pub mod grammar;
pub mod utils;


pub use colors::Colors;
pub use grammar::{Captures, Grammar, GrammarError, Rule};
