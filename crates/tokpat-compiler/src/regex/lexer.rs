use logos::Logos;

/// Regex source split at the points the translator cares about.
///
/// Everything else is carried through as `Text`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(super) enum Token<'src> {
    /// Only meaningful at the very start of the pattern.
    #[token("(?i)")]
    CaseInsensitive,

    /// `(?<name>`, but not the lookbehinds `(?<=` and `(?<!`.
    #[regex(r"\(\?<[^=!>][^>]*>", |lex| inner(lex.slice(), 3, 1))]
    NamedGroup(&'src str),

    #[regex(r"\\k<[^>]*>", |lex| inner(lex.slice(), 3, 1))]
    NamedBackref(&'src str),

    #[regex(r"\\(.|\n)")]
    Escape,

    /// `[:name:]` or `[:^name:]`, yielding `name` or `^name`.
    #[regex(r"\[:\^?[a-z]+:\]", |lex| inner(lex.slice(), 2, 2))]
    PosixClass(&'src str),

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token("^")]
    Caret,

    #[token("$")]
    Dollar,

    #[token("/")]
    Slash,

    #[token("(")]
    OpenParen,

    #[regex(r"[^\\\[\]\^\$/(]+")]
    Text,
}

/// Strip an `open`-byte opener and a `close`-byte closer.
fn inner(slice: &str, open: usize, close: usize) -> &str {
    &slice[open..slice.len() - close]
}
