//! Non-fatal findings collected while compiling a document.
//!
//! Fatal problems travel as [`crate::Error`]; they are folded into the same
//! collection by the workspace so that a front end can print everything
//! through one [`DiagnosticsPrinter`].

mod message;
mod printer;

#[cfg(test)]
mod diagnostics_tests;

pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;

use crate::document::DocumentId;

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Start a diagnostic of `kind` for the rule at `path` in `document`.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        document: &DocumentId,
        path: impl Into<String>,
    ) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::new(kind, document.clone(), path, kind.fallback_message()),
        }
    }

    /// Record a fatal error that stopped compilation of `document`.
    pub fn fatal(&mut self, document: &DocumentId, error: &crate::Error) {
        self.messages.push(DiagnosticMessage::new(
            DiagnosticKind::Fatal,
            document.clone(),
            String::new(),
            error.to_string(),
        ));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl DiagnosticBuilder<'_> {
    /// Provide custom detail, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(&detail);
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
