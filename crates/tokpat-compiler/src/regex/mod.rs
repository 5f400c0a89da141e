//! Translation of grammar (Oniguruma-flavoured) regexes into JavaScript regex literals.

mod lexer;
mod translate;


pub use translate::{RegexLiteral, Translator};

/// Translate with the default options (POSIX classes expanded).
pub fn translate(pattern: &str, has_captures: bool) -> RegexLiteral {
    Translator::default().translate(pattern, has_captures)
}
