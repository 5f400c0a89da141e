//! Scope-name classification into token type references.
//!
//! Every scope name maps to exactly one reference: either a member of one of
//! the seven token categories or the unresolved sentinel, which still renders
//! as valid TypeScript so that generation can continue.

mod scope;
mod token_type;


pub use scope::{Classifier, ScopeSelection};
pub use token_type::{TokenCategory, TokenTypeRef};

/// Classify with the default rules (last scope wins, `renpy`/`python` suffixes stripped).
pub fn classify(scope_name: &str) -> TokenTypeRef {
    Classifier::default().classify(scope_name)
}

/// One line of a scope report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScopeEntry {
    pub scope: String,
    pub token: String,
    pub resolved: bool,
}

impl ScopeEntry {
    pub fn new(scope: &str, token: &TokenTypeRef) -> Self {
        Self {
            scope: scope.to_string(),
            token: token.expression(),
            resolved: !token.is_unresolved(),
        }
    }
}
