//! Identifier casing for generated TypeScript.
//!
//! Scope names (`meta.atl.block`) and repository keys (`atl-build-in-properties`)
//! are turned into enum members and variable names. Words are separated by any
//! non-alphanumeric character and cased like Python's `str.title()`: a letter is
//! upper-cased when the character before it is not a letter.

/// Words that are written fully upper-case once cased.
const ACRONYMS: &[&str] = &["atl"];

/// Words a strict-mode module cannot bind with `const` or `import`.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Whether `ident` cannot name a binding in generated TypeScript.
pub fn is_reserved_word(ident: &str) -> bool {
    RESERVED_WORDS.iter().any(|word| *word == ident)
}

/// Split into words and title-case each one.
///
/// # Examples
/// ```
/// use tokpat_core::utils::title_words;
/// assert_eq!(title_words("property-name.transform"), ["Property", "Name", "Transform"]);
/// assert_eq!(title_words("corner1x"), ["Corner1X"]);
/// ```
pub fn title_words(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(title_word)
        .collect()
}

fn title_word(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut prev_is_letter = false;
    for c in word.chars() {
        if prev_is_letter {
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c.to_ascii_uppercase());
        }
        prev_is_letter = c.is_ascii_alphabetic();
    }
    result
}

fn apply_acronym(word: String) -> String {
    if ACRONYMS.iter().any(|a| a.eq_ignore_ascii_case(&word)) {
        word.to_ascii_uppercase()
    } else {
        word
    }
}

/// Convert a dotted, kebab or snake name to TitleCase.
///
/// # Examples
/// ```
/// use tokpat_core::utils::to_title_case;
/// assert_eq!(to_title_case("property-name"), "PropertyName");
/// assert_eq!(to_title_case("atl.choice.block"), "ATLChoiceBlock");
/// ```
pub fn to_title_case(s: &str) -> String {
    title_words(s).into_iter().map(apply_acronym).collect()
}

/// Convert a dotted, kebab or snake name to camelCase.
///
/// The first word only has its first letter lowered; acronyms are expanded in
/// the remaining words.
///
/// # Examples
/// ```
/// use tokpat_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("atl-build-in-properties"), "atlBuildInProperties");
/// assert_eq!(to_camel_case("screen-atl"), "screenATL");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut words = title_words(s).into_iter();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(s.len());
    let mut chars = first.chars();
    if let Some(c) = chars.next() {
        result.push(c.to_ascii_lowercase());
        result.push_str(chars.as_str());
    }
    for word in words {
        result.push_str(&apply_acronym(word));
    }
    result
}
