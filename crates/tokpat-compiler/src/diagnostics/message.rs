use crate::document::DocumentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// Compilation of the document was abandoned.
    Fatal,
    /// A scope name fell through every classification rule.
    UnclassifiedScope,
    /// A rule has neither a regex nor child patterns.
    EmptyRule,
    /// An include rule also carries fields that are ignored.
    IgnoredIncludeFields,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::Fatal => Severity::Error,
            _ => Severity::Warning,
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Fatal => "compilation failed",
            Self::UnclassifiedScope => "scope name has no token type",
            Self::EmptyRule => "rule matches nothing",
            Self::IgnoredIncludeFields => "fields next to `include` are ignored",
        }
    }

    /// Render the message with `detail` filled into the kind's template.
    pub fn message(&self, detail: &str) -> String {
        match self {
            Self::Fatal => detail.to_string(),
            Self::UnclassifiedScope => format!("scope name `{detail}` has no token type"),
            Self::EmptyRule => format!("rule `{detail}` matches nothing"),
            Self::IgnoredIncludeFields => {
                format!("fields next to `include: {detail}` are ignored")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) document: DocumentId,
    /// Rendered access path of the rule, empty for document-level messages.
    pub(crate) path: String,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn new(
        kind: DiagnosticKind,
        document: DocumentId,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            document,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message)?;
        if self.path.is_empty() {
            write!(f, " ({})", self.document)
        } else {
            write!(f, " ({} at {})", self.document, self.path)
        }
    }
}
