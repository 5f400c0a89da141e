use indoc::indoc;

use super::*;

#[test]
fn parse_minimal_grammar() {
    let json = r#"{
        "scopeName": "source.renpy.atl",
        "repository": {
            "atl": { "patterns": [] },
            "atl-keywords": { "match": "\\bwarp\\b", "name": "keyword.warp.renpy" }
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.scope_name.as_deref(), Some("source.renpy.atl"));
    assert_eq!(grammar.rule_keys().count(), 2);
    assert!(grammar.has_rule("atl-keywords"));
    assert!(!grammar.has_root_patterns());
}

#[test]
fn preserves_repository_order() {
    let json = indoc! {r#"
        {
            "repository": {
                "zeta": { "match": "z" },
                "alpha": { "match": "a" },
                "mu": { "match": "m" }
            }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let keys: Vec<_> = grammar.rule_keys().collect();
    assert_eq!(keys, ["zeta", "alpha", "mu"]);
}

#[test]
fn parse_rule_fields() {
    let json = indoc! {r##"
        {
            "repository": {
                "block": {
                    "comment": "A block",
                    "contentName": "meta.atl.block.renpy",
                    "begin": "(:)",
                    "beginCaptures": { "1": { "name": "punctuation.section.atl.begin.renpy" } },
                    "end": "$",
                    "patterns": [
                        { "include": "#atl-keywords" },
                        { "match": "\\d+", "name": "constant.numeric.dec.python" }
                    ],
                    "applyEndPatternLast": 1
                }
            }
        }
    "##};

    let grammar = Grammar::from_json(json).unwrap();
    let rule = &grammar.repository.as_ref().unwrap()["block"];
    assert_eq!(rule.comment.as_deref(), Some("A block"));
    assert_eq!(rule.content_name.as_deref(), Some("meta.atl.block.renpy"));
    assert_eq!(rule.begin.as_deref(), Some("(:)"));
    assert_eq!(rule.end.as_deref(), Some("$"));
    assert!(rule.r#match.is_none());
    assert!(rule.has_regex());

    let begin_captures = rule.begin_captures.as_ref().unwrap();
    assert_eq!(
        begin_captures["1"].name.as_deref(),
        Some("punctuation.section.atl.begin.renpy")
    );

    let patterns = rule.patterns.as_ref().unwrap();
    assert!(patterns[0].is_include());
    assert_eq!(patterns[0].include.as_deref(), Some("#atl-keywords"));
    assert!(!patterns[1].is_include());
}

#[test]
fn preserves_capture_order() {
    let json = r#"{
        "repository": {
            "r": { "match": "(a)(b)", "captures": { "2": { "name": "b" }, "1": { "name": "a" } } }
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    let captures = grammar.repository.unwrap()["r"].captures.clone().unwrap();
    let keys: Vec<_> = captures.keys().map(String::as_str).collect();
    assert_eq!(keys, ["2", "1"]);
}

#[test]
fn missing_repository_is_not_a_parse_error() {
    let grammar = Grammar::from_json(r#"{ "scopeName": "source.x" }"#).unwrap();
    assert!(grammar.repository.is_none());
    assert_eq!(grammar.rule_keys().count(), 0);
}

#[test]
fn rejects_non_object_root() {
    let err = Grammar::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, GrammarError::Json(_)));
}

#[test]
fn rejects_malformed_json() {
    let err = Grammar::from_json(r#"{ "repository": { "a": "#).unwrap_err();
    assert!(err.to_string().starts_with("JSON parse error"));
}
