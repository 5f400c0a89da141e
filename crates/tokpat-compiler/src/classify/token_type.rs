use std::fmt;

/// The token enums a generated file can import from the tokens module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    Keyword,
    Entity,
    Literal,
    Operator,
    Character,
    EscapedCharacter,
    Meta,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 7] = [
        Self::Keyword,
        Self::Entity,
        Self::Literal,
        Self::Operator,
        Self::Character,
        Self::EscapedCharacter,
        Self::Meta,
    ];

    /// Name of the TypeScript enum.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Keyword => "KeywordTokenType",
            Self::Entity => "EntityTokenType",
            Self::Literal => "LiteralTokenType",
            Self::Operator => "OperatorTokenType",
            Self::Character => "CharacterTokenType",
            Self::EscapedCharacter => "EscapedCharacterTokenType",
            Self::Meta => "MetaTokenType",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Result of classifying one scope name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenTypeRef {
    Known {
        category: TokenCategory,
        member: String,
    },
    /// No rule matched. Rendered as `MetaTokenType.Invalid` and flagged in a comment.
    Unresolved { scope: String },
}

impl TokenTypeRef {
    pub fn known(category: TokenCategory, member: impl Into<String>) -> Self {
        Self::Known {
            category,
            member: member.into(),
        }
    }

    /// Category that must be imported for [`Self::expression`] to resolve.
    pub fn category(&self) -> TokenCategory {
        match self {
            Self::Known { category, .. } => *category,
            Self::Unresolved { .. } => TokenCategory::Meta,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved { .. })
    }

    /// TypeScript expression, e.g. `KeywordTokenType.Warp`.
    pub fn expression(&self) -> String {
        match self {
            Self::Known { category, member } => format!("{}.{member}", category.type_name()),
            Self::Unresolved { .. } => format!("{}.Invalid", TokenCategory::Meta.type_name()),
        }
    }

    /// Trailing comment written after the expression.
    pub fn annotation(&self, scope_name: &str) -> String {
        match self {
            Self::Known { .. } => format!("/*{}*/", scope_name.replace("*/", "* /")),
            Self::Unresolved { .. } => format!("/*ERROR: {}*/", scope_name.replace("*/", "* /")),
        }
    }
}

impl fmt::Display for TokenTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression())
    }
}
