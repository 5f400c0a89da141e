//! tokpat compiler: TextMate-style grammars to TypeScript token pattern tables.
//!
//! This crate provides the compilation pipeline:
//! - `classify` - scope name to token type classification
//! - `regex` - grammar regex to JavaScript regex literal translation
//! - `build` - pattern tree construction, one generator state per document
//! - `link` - include resolution and patch planning across documents
//! - `emit` - output tree rendering and artifact assembly
//! - `diagnostics` - non-fatal findings
//! - `workspace` - high-level staged facade

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod build;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod emit;
pub mod link;
pub mod regex;
pub mod workspace;

#[cfg(test)]
pub mod test_utils;


pub use classify::{Classifier, ScopeEntry, ScopeSelection, TokenCategory, TokenTypeRef, classify};
pub use config::Config;
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use document::DocumentId;
pub use emit::{Artifact, Timestamp};
pub use regex::{RegexLiteral, translate};
pub use workspace::{Compilation, CompiledDocument, Workspace};

use tokpat_core::GrammarError;

/// Malformed rules, reported with the offending access path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("rule has both `match` and `begin`")]
    MatchAndBegin,

    #[error("rule has `end` without `begin`")]
    EndWithoutBegin,

    #[error("rule has `begin` without `end`")]
    BeginWithoutEnd,

    #[error("repository key `{0}` does not yield a valid identifier")]
    InvalidKey(String),

    #[error("repository key `{key}` yields the reserved word `{ident}`")]
    ReservedKey { key: String, ident: String },

    #[error("capture key `{0}` is not a unique group number")]
    InvalidCaptureIndex(String),

    #[error("include `{0}` has an unrecognized prefix")]
    UnrecognizedInclude(String),
}

/// Errors that abort compilation of one document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{document}: {source}")]
    Grammar {
        document: DocumentId,
        #[source]
        source: GrammarError,
    },

    #[error("{document}: missing `repository`")]
    MissingRepository { document: DocumentId },

    #[error("{document}: {path}: {kind}")]
    Structural {
        document: DocumentId,
        path: String,
        kind: StructuralError,
    },

    #[error("{document}: keys `{first}` and `{second}` both name `{ident}`")]
    IdentifierCollision {
        document: DocumentId,
        ident: String,
        first: String,
        second: String,
    },

    #[error("{document}: {path}: unresolved include `{include}`: {reason}")]
    UnresolvedInclude {
        document: DocumentId,
        path: String,
        include: String,
        reason: String,
    },

    #[error("{document}: `{ident}` imported from `{from}` collides with another name")]
    ImportCollision {
        document: DocumentId,
        ident: String,
        from: DocumentId,
    },

    #[error("{document}: document is loaded more than once")]
    DuplicateDocument { document: DocumentId },

    #[error("{document}: artifact `{file_name}` is also generated for `{other}`")]
    DuplicateArtifact {
        document: DocumentId,
        file_name: String,
        other: DocumentId,
    },
}

impl Error {
    /// The document whose compilation failed.
    pub fn document(&self) -> &DocumentId {
        match self {
            Self::Grammar { document, .. }
            | Self::MissingRepository { document }
            | Self::Structural { document, .. }
            | Self::IdentifierCollision { document, .. }
            | Self::UnresolvedInclude { document, .. }
            | Self::ImportCollision { document, .. }
            | Self::DuplicateDocument { document }
            | Self::DuplicateArtifact { document, .. } => document,
        }
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
