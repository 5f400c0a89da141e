//! Grammar document and rule types.

use indexmap::IndexMap;
use serde::Deserialize;

/// Capture-group rules keyed by the group index as written in the source.
///
/// Keys are kept as strings so that malformed indices can be reported with
/// their original spelling.
pub type Captures = IndexMap<String, Rule>;

/// A TextMate-style grammar document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grammar {
    /// Document id, e.g. `source.renpy.atl`.
    #[serde(default)]
    pub scope_name: Option<String>,
    /// Human-readable language name.
    #[serde(default)]
    pub name: Option<String>,
    /// Top-level pattern list (what `$self` refers to).
    #[serde(default)]
    pub patterns: Option<Vec<Rule>>,
    /// Named rules. `IndexMap` preserves the order the document defines them in.
    #[serde(default)]
    pub repository: Option<IndexMap<String, Rule>>,
}

/// One lexical pattern node.
///
/// A rule is either an include reference, a single-line `match`, a
/// `begin`/`end` span, or a bare container of child `patterns`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default)]
    pub include: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, rename = "match")]
    pub r#match: Option<String>,
    #[serde(default)]
    pub begin: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub captures: Option<Captures>,
    #[serde(default)]
    pub begin_captures: Option<Captures>,
    #[serde(default)]
    pub end_captures: Option<Captures>,
    #[serde(default)]
    pub patterns: Option<Vec<Rule>>,
}

impl Grammar {
    /// Repository keys in declaration order.
    pub fn rule_keys(&self) -> impl Iterator<Item = &str> {
        self.repository
            .iter()
            .flat_map(|repo| repo.keys())
            .map(String::as_str)
    }

    pub fn has_rule(&self, key: &str) -> bool {
        self.repository
            .as_ref()
            .is_some_and(|repo| repo.contains_key(key))
    }

    pub fn has_root_patterns(&self) -> bool {
        self.patterns.is_some()
    }
}

impl Rule {
    /// Whether this rule only points at another rule.
    pub fn is_include(&self) -> bool {
        self.include.is_some()
    }

    /// Whether this rule carries a regex of its own and therefore gets a debug name.
    pub fn has_regex(&self) -> bool {
        self.r#match.is_some() || self.begin.is_some() || self.end.is_some()
    }
}
