//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use tokpat_core::Colors;

use super::{Diagnostics, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = Colors::new(self.colored);
        for diag in self.diagnostics {
            let color = match diag.severity() {
                Severity::Error => c.red,
                Severity::Warning => c.yellow,
            };
            write!(w, "{color}{}{}: {}", diag.severity(), c.reset, diag.message)?;
            write!(w, " {}({}", c.dim, diag.document)?;
            if !diag.path.is_empty() {
                write!(w, " at {}", diag.path)?;
            }
            writeln!(w, "){}", c.reset)?;
        }
        Ok(())
    }
}
