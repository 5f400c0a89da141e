//! Decision tree over scope-name segments.

use tokpat_core::utils::to_title_case;

use super::token_type::{TokenCategory, TokenTypeRef};

/// Which entry of a space-separated scope list is classified.
///
/// Only one token per rule is supported. The remaining entries are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScopeSelection {
    First,
    #[default]
    Last,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    selection: ScopeSelection,
    language_suffixes: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            selection: ScopeSelection::default(),
            language_suffixes: vec!["renpy".to_string(), "python".to_string()],
        }
    }
}

/// Outcome of walking the decision tree.
#[derive(Debug, PartialEq, Eq)]
enum Decision<'a> {
    Exact(TokenCategory, &'static str),
    /// Member named after the remaining segments, wrapped in a fixed prefix and suffix.
    Generic {
        category: TokenCategory,
        prefix: &'static str,
        rest: &'a [&'a str],
        suffix: &'static str,
    },
    Unresolved,
}

impl Classifier {
    pub fn new(selection: ScopeSelection, language_suffixes: Vec<String>) -> Self {
        Self {
            selection,
            language_suffixes,
        }
    }

    /// Classify a scope name. Never fails: misses yield [`TokenTypeRef::Unresolved`].
    pub fn classify(&self, scope_name: &str) -> TokenTypeRef {
        let unresolved = || TokenTypeRef::Unresolved {
            scope: scope_name.to_string(),
        };

        let Some(scope) = self.select(scope_name) else {
            return unresolved();
        };

        let mut segments: Vec<&str> = scope.split('.').filter(|s| !s.is_empty()).collect();
        if segments.len() < 2 {
            return unresolved();
        }
        if let Some(last) = segments.last()
            && self.language_suffixes.iter().any(|s| s == last)
        {
            segments.pop();
        }

        match decide(&segments) {
            Decision::Exact(category, member) => TokenTypeRef::known(category, member),
            Decision::Generic {
                category,
                prefix,
                rest,
                suffix,
            } => {
                let words = to_title_case(&rest.join("."));
                if words.is_empty() || words.starts_with(|c: char| c.is_ascii_digit()) {
                    return unresolved();
                }
                TokenTypeRef::known(category, format!("{prefix}{words}{suffix}"))
            }
            Decision::Unresolved => unresolved(),
        }
    }

    fn select<'s>(&self, scope_name: &'s str) -> Option<&'s str> {
        let mut scopes = scope_name.split_whitespace();
        match self.selection {
            ScopeSelection::First => scopes.next(),
            ScopeSelection::Last => scopes.next_back(),
        }
    }
}

fn exact(category: TokenCategory, member: &'static str) -> Decision<'static> {
    Decision::Exact(category, member)
}

fn generic<'a>(category: TokenCategory, rest: &'a [&'a str]) -> Decision<'a> {
    Decision::Generic {
        category,
        prefix: "",
        rest,
        suffix: "",
    }
}

fn prefixed<'a>(category: TokenCategory, prefix: &'static str, rest: &'a [&'a str]) -> Decision<'a> {
    Decision::Generic {
        category,
        prefix,
        rest,
        suffix: "",
    }
}

fn suffixed<'a>(category: TokenCategory, rest: &'a [&'a str], suffix: &'static str) -> Decision<'a> {
    Decision::Generic {
        category,
        prefix: "",
        rest,
        suffix,
    }
}


fn one<'a>(segment: &'a &'a str) -> &'a [&'a str] {
    std::slice::from_ref(segment)
}

fn decide<'a>(segments: &'a [&'a str]) -> Decision<'a> {
    match segments {
        ["string", rest @ ..] => string(rest),
        ["variable", rest @ ..] => variable(rest),
        ["storage", rest @ ..] => storage(rest),
        ["constant", rest @ ..] => constant(rest),
        ["invalid", rest @ ..] => invalid(rest),
        ["punctuation", rest @ ..] => punctuation(rest),
        ["support", rest @ ..] => support(rest),
        ["comment", rest @ ..] => comment(rest),
        ["keyword", rest @ ..] => keyword(rest),
        ["entity", rest @ ..] => entity(rest),
        ["meta", rest @ ..] => meta(rest),
        _ => Decision::Unresolved,
    }
}

fn string<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    match rest {
        ["quoted", "docstring", ..] => exact(TokenCategory::Meta, "Docstring"),
        _ => exact(TokenCategory::Literal, "String"),
    }
}

fn variable<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    match rest {
        ["name", ..] => exact(TokenCategory::Entity, "Identifier"),
        _ => exact(TokenCategory::Entity, "VariableName"),
    }
}

fn storage<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    use TokenCategory::*;

    match rest {
        ["type", "string", ..] => exact(Meta, "StringStorageType"),
        ["type", "format", ..] => exact(Meta, "FormatStorageType"),
        ["type", "class", ..] => exact(Keyword, "Class"),
        ["type", "imaginary", ..] => exact(Meta, "ImaginaryNumberStorageType"),
        ["type", "number", ..] => exact(Meta, "NumberStorageType"),
        ["type", "function", "lambda", ..] => exact(Keyword, "Lambda"),
        ["type", "function", "async", ..] => exact(Keyword, "Async"),
        ["type", "function", "label", ..] => exact(Keyword, "Label"),
        ["type", "function", ..] => exact(Keyword, "Def"),
        ["type", "screen", ..] => exact(Keyword, "Screen"),
        ["type", "style", ..] => exact(Keyword, "Style"),
        ["modifier", "declaration", names @ ..] => generic(Keyword, names),
        ["modifier", "flag", ..] => exact(Meta, "ModifierFlagStorageType"),
        _ => Decision::Unresolved,
    }
}

fn constant<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    use TokenCategory::*;

    match rest {
        ["numeric", "integer", ..] => exact(Literal, "Integer"),
        ["numeric", "float", ..] => exact(Literal, "Float"),
        ["numeric", "boolean", ..] => exact(Literal, "Boolean"),
        ["numeric", "character", ..] => exact(Literal, "Character"),
        ["numeric", "escape", ..] => exact(Literal, "Escape"),
        ["numeric", ..] => exact(Meta, "ConstantNumeric"),
        ["language", ..] => exact(Meta, "ConstantLiteral"),
        ["color", ..] => exact(Literal, "Color"),
        ["character", "escape"] | ["character", "escape", "regexp", ..] => {
            exact(Meta, "EscapeSequence")
        }
        ["character", "escape", names @ ..] => prefixed(EscapedCharacter, "Esc", names),
        ["character", "unicode", ..] => exact(Meta, "EscapeSequence"),
        ["character", "set", ..] => exact(Meta, "CharacterSet"),
        ["character", "format", "placeholder", ..] => exact(Meta, "Placeholder"),
        ["other", ..] => exact(Meta, "ConstantCaps"),
        _ => Decision::Unresolved,
    }
}

fn invalid<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    match rest {
        ["deprecated", ..] => exact(TokenCategory::Meta, "Deprecated"),
        _ => exact(TokenCategory::Meta, "Invalid"),
    }
}

/// Block kinds whose `punctuation.section.<kind>.begin` scope marks a colon.
fn opens_block(kind: &str) -> bool {
    matches!(
        kind,
        "python"
            | "block"
            | "class"
            | "function"
            | "atl"
            | "label"
            | "menu"
            | "menu-option"
            | "screen"
            | "style"
    )
}

fn punctuation<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    use TokenCategory::*;

    match rest {
        ["definition", "tag" | "dict" | "inheritance", "begin", ..] => exact(Character, "OpenBracket"),
        ["definition", "tag" | "dict" | "inheritance", "end", ..] => exact(Character, "CloseBracket"),
        ["definition", "tag" | "dict" | "inheritance", "region", ..] => {
            exact(Meta, "CommentRegionTag")
        }
        ["definition", "list", "begin", ..] => exact(Character, "OpenSquareBracket"),
        ["definition", "list", "end", ..] => exact(Character, "CloseSquareBracket"),
        ["definition", "arguments" | "parameters", "begin", ..] => {
            exact(Character, "OpenParentheses")
        }
        ["definition", "arguments" | "parameters", "end", ..] => {
            exact(Character, "CloseParentheses")
        }
        ["definition", "string", "begin", ..] => exact(Meta, "StringBegin"),
        ["definition", "string", "end", ..] => exact(Meta, "StringEnd"),
        ["definition", "comment", ..] => exact(Character, "Hashtag"),
        ["definition", "decorator", ..] => exact(Character, "AtSymbol"),

        ["parenthesis", "begin", ..] => exact(Character, "OpenParentheses"),
        ["parenthesis", "end", ..] => exact(Character, "CloseParentheses"),
        ["bracket", "begin", ..] => exact(Character, "OpenBracket"),
        ["bracket", "end", ..] => exact(Character, "CloseBracket"),
        ["square-bracket", "begin", ..] => exact(Character, "OpenSquareBracket"),
        ["square-bracket", "end", ..] => exact(Character, "CloseSquareBracket"),

        ["section", kind, "begin", ..] | ["section", kind, _, "begin", ..] if opens_block(kind) => {
            exact(Character, "Colon")
        }

        ["separator", "parameters" | "arguments" | "element" | "inheritance", ..] => {
            exact(Character, "Comma")
        }
        ["separator", "dict" | "annotation" | "slice", ..] => exact(Character, "Colon"),
        ["separator", "continuation", ..] => exact(Character, "Backslash"),
        ["separator", "key-value", ..] => exact(Character, "EqualsSymbol"),
        ["separator", kind, ..] => generic(Character, one(kind)),

        ["character", "set", "begin", ..] => exact(Character, "OpenSquareBracket"),
        ["character", "set", "end", ..] => exact(Character, "CloseSquareBracket"),
        ["comment", "begin", ..] => exact(Meta, "CommentBegin"),
        ["comment", "end", ..] => exact(Meta, "CommentEnd"),

        [
            "definition" | "parenthesis" | "bracket" | "square-bracket" | "section" | "separator"
            | "character" | "comment",
            ..,
        ] => Decision::Unresolved,
        [kind, ..] => generic(Character, one(kind)),
        [] => Decision::Unresolved,
    }
}

fn support<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    use TokenCategory::*;

    match rest {
        ["type", "property-name", ..] => exact(Entity, "PropertyName"),
        ["type", "class", ..] => exact(Entity, "ClassName"),
        ["type", "function", ..] => exact(Entity, "FunctionName"),
        ["type", "variable", ..] => exact(Entity, "VariableName"),
        ["type", "namespace", ..] => exact(Entity, "NamespaceName"),
        ["type", "metaclass", ..] => exact(Keyword, "Metaclass"),
        ["type", "exception", ..] => exact(Meta, "BuiltinExceptionType"),
        ["type", ..] => exact(Meta, "BuiltinType"),
        ["variable", ..] => exact(Entity, "VariableName"),
        ["function", "event", ..] => exact(Entity, "EventName"),
        ["function", ..] => exact(Entity, "FunctionName"),
        ["other", "match", "any", ..] => exact(Character, "Period"),
        ["other", "match", "begin", ..] => exact(Character, "Caret"),
        ["other", "match", "end", ..] => exact(Character, "DollarSymbol"),
        ["other", "escape", ..] => exact(Meta, "EscapeSequence"),
        _ => Decision::Unresolved,
    }
}

fn comment<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    match rest {
        ["typehint", kind, ..] => prefixed(TokenCategory::Meta, "Typehint", one(kind)),
        _ => exact(TokenCategory::Meta, "Comment"),
    }
}

fn keyword<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    use TokenCategory::*;

    match rest {
        ["operator"] => exact(Meta, "Operator"),
        ["operator", "arithmetic"] => exact(Meta, "ArithmeticOperator"),
        ["operator", "arithmetic", kind, ..] => generic(Operator, one(kind)),
        ["operator", "logical", ..] => exact(Meta, "LogicalOperatorKeyword"),
        ["operator", "bitwise", ..] => exact(Meta, "BitwiseOperatorKeyword"),
        ["operator", "comparison", ..] => exact(Meta, "ComparisonOperatorKeyword"),
        ["operator", "unpacking", ..] => exact(Operator, "Unpacking"),
        ["operator", names @ ..] => generic(Operator, names),

        ["codetag", ..] => exact(Meta, "CommentCodeTag"),

        ["control", "flow"] => exact(Meta, "ControlFlowKeyword"),
        ["control", "flow", kind, ..] => generic(Keyword, one(kind)),
        ["control", "import", ..] => exact(Keyword, "Import"),
        ["control", "conditional", ..] => exact(Keyword, "If"),
        ["control", ..] => Decision::Unresolved,

        ["illegal", "name", ..] => exact(Meta, "Invalid"),
        names => generic(Keyword, names),
    }
}

fn entity<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    match rest {
        ["name", "type", kind, ..] | ["name", kind, ..] => {
            suffixed(TokenCategory::Entity, one(kind), "Name")
        }
        ["other", "inherited-class", ..] => exact(TokenCategory::Entity, "InheritedClassName"),
        _ => Decision::Unresolved,
    }
}

fn meta<'a>(rest: &'a [&'a str]) -> Decision<'a> {
    use TokenCategory::*;

    match rest {
        ["embedded", "block", ..] => exact(Meta, "PythonBlock"),
        ["embedded", "line", ..] => exact(Meta, "PythonLine"),
        ["embedded", ..] => Decision::Unresolved,

        ["arguments", ..] | [_, "arguments", ..] | [_, _, "arguments", ..] => {
            exact(Meta, "Arguments")
        }

        ["function-call", "label", ..] => exact(Meta, "LabelCall"),
        ["function-call", ..] => exact(Meta, "FunctionCall"),

        ["member", "access", "label", ..] => exact(Meta, "LabelAccess"),
        ["member", "access", ..] => exact(Meta, "MemberAccess"),
        ["member", ..] => Decision::Unresolved,

        ["string", "tag", ..] => exact(Meta, "StringTag"),
        ["string", "character", ..] => exact(Meta, "CharacterNameString"),
        ["string", ..] => Decision::Unresolved,

        ["class" | "function", "inheritance", ..] => generic(Meta, rest),
        [kind @ ("class" | "function"), ..] => suffixed(Meta, one(kind), "Definition"),

        names => generic(Meta, names),
    }
}
