use std::fmt;

use logos::Logos;

use super::lexer::Token;

/// A JavaScript regex literal: `/source/flags`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegexLiteral {
    source: String,
    flags: String,
}

impl RegexLiteral {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }
}

impl fmt::Display for RegexLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Translator {
    expand_posix_classes: bool,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            expand_posix_classes: true,
        }
    }
}

impl Translator {
    pub fn new(expand_posix_classes: bool) -> Self {
        Self {
            expand_posix_classes,
        }
    }

    /// Translate `pattern`. `has_captures` adds the indices flag so that
    /// capture positions are available to the consumer.
    pub fn translate(&self, pattern: &str, has_captures: bool) -> RegexLiteral {
        let tokens: Vec<_> = Token::lexer(pattern).spanned().collect();
        let mut source = String::with_capacity(pattern.len() + 8);
        let mut ignore_case = false;
        let mut multiline = false;
        let mut class_depth = 0usize;

        for (i, (token, span)) in tokens.iter().enumerate() {
            let text = &pattern[span.clone()];
            match token {
                Ok(Token::CaseInsensitive) if span.start == 0 => ignore_case = true,
                Ok(Token::CaseInsensitive) => {
                    log::warn!(
                        "inline `(?i)` at offset {} is kept as is and will not compile in JavaScript: {pattern}",
                        span.start
                    );
                    source.push_str(text);
                }
                Ok(Token::NamedGroup(name)) => {
                    source.push_str("(?<");
                    source.push_str(&group_name(name));
                    source.push('>');
                }
                Ok(Token::NamedBackref(name)) => {
                    source.push_str("\\k<");
                    source.push_str(&group_name(name));
                    source.push('>');
                }
                Ok(Token::PosixClass(class)) if class_depth > 0 && self.expand_posix_classes => {
                    let opened = i
                        .checked_sub(1)
                        .is_some_and(|prev| matches!(tokens[prev].0, Ok(Token::OpenBracket)));
                    let closed = matches!(tokens.get(i + 1), Some((Ok(Token::CloseBracket), _)));
                    let alone = opened && closed;
                    match posix_class(class, alone) {
                        Some(expanded) => source.push_str(&expanded),
                        None => {
                            log::warn!("POSIX class `{text}` is kept as is: {pattern}");
                            source.push_str(text);
                        }
                    }
                }
                Ok(Token::OpenBracket) => {
                    class_depth += 1;
                    source.push('[');
                }
                Ok(Token::CloseBracket) => {
                    class_depth = class_depth.saturating_sub(1);
                    source.push(']');
                }
                Ok(Token::Caret | Token::Dollar) => {
                    if class_depth == 0 {
                        multiline = true;
                    }
                    source.push_str(text);
                }
                Ok(Token::Slash) => source.push_str("\\/"),
                // Escapes, plain text, and a trailing lone backslash pass through.
                _ => source.push_str(text),
            }
        }

        if source.is_empty() {
            source.push_str("(?:)");
        }

        let mut flags = String::with_capacity(4);
        if has_captures {
            flags.push('d');
        }
        flags.push('g');
        if ignore_case {
            flags.push('i');
        }
        if multiline {
            flags.push('m');
        }

        RegexLiteral { source, flags }
    }
}

/// Expansion of `[:name:]` or `[:^name:]` inside a bracket expression.
///
/// A negated class can only be expressed when it is the sole member of its
/// bracket, where it becomes a negated bracket, or for `digit`.
fn posix_class(class: &str, alone: bool) -> Option<String> {
    let Some(name) = class.strip_prefix('^') else {
        return posix_ranges(class).map(str::to_string);
    };
    let ranges = posix_ranges(name)?;
    if alone {
        Some(format!("^{ranges}"))
    } else if name == "digit" {
        Some("\\D".to_string())
    } else {
        None
    }
}

fn posix_ranges(class: &str) -> Option<&'static str> {
    match class {
        "alpha" => Some("a-zA-Z"),
        "alnum" => Some("a-zA-Z0-9"),
        "upper" => Some("A-Z"),
        "lower" => Some("a-z"),
        "digit" => Some("0-9"),
        _ => None,
    }
}

/// Group names must be valid JavaScript identifiers.
fn group_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
