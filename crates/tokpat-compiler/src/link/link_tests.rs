use indoc::indoc;
use tokpat_core::Grammar;

use super::*;
use crate::build::{GeneratorState, build_document};
use crate::document::DocumentId;
use crate::test_utils::config;
use crate::Error;

fn build(id: &str, json: &str) -> GeneratorState {
    let grammar = Grammar::from_json(json).unwrap();
    build_document(DocumentId::new(id), &grammar, &config()).unwrap()
}

fn link_alone(state: GeneratorState) -> crate::Result<LinkedDocument> {
    let mut index = DocumentIndex::new();
    index.insert_compiled(&state);
    link(state, &index)
}

fn lines(statements: &[PatchStatement]) -> Vec<String> {
    statements.iter().map(ToString::to_string).collect()
}

#[test]
fn forward_reference_is_spliced_before_sibling() {
    let state = build(
        "source.renpy",
        indoc! {r##"
            {
                "repository": {
                    "a": { "patterns": [{ "include": "#b" }, { "match": "c" }] },
                    "b": { "match": "b" }
                }
            }
        "##},
    );
    let linked = link_alone(state).unwrap();
    assert_eq!(lines(&linked.local_block), ["a.patterns!.splice(0, 0, b);"]);
}

#[test]
fn trailing_references_are_pushed_together() {
    let state = build(
        "source.renpy",
        indoc! {r##"
            {
                "repository": {
                    "a": {
                        "patterns": [
                            { "match": "x" },
                            { "include": "#p" },
                            { "include": "#q" }
                        ]
                    },
                    "p": { "match": "p" },
                    "q": { "match": "q" }
                }
            }
        "##},
    );
    let linked = link_alone(state).unwrap();
    assert_eq!(lines(&linked.local_block), ["a.patterns!.push(p, q);"]);
}

#[test]
fn interleaved_references_keep_source_order() {
    let state = build(
        "source.renpy",
        indoc! {r##"
            {
                "repository": {
                    "a": {
                        "patterns": [
                            { "include": "#p" },
                            { "match": "x" },
                            { "include": "#q" },
                            { "match": "y" },
                            { "include": "#r" }
                        ]
                    },
                    "p": { "match": "p" },
                    "q": { "match": "q" },
                    "r": { "match": "r" }
                }
            }
        "##},
    );
    let linked = link_alone(state).unwrap();
    // [x, y] -> [p, x, y] -> [p, x, q, y] -> [p, x, q, y, r]
    assert_eq!(
        lines(&linked.local_block),
        [
            "a.patterns!.splice(0, 0, p);",
            "a.patterns!.splice(2, 0, q);",
            "a.patterns!.push(r);",
        ]
    );
}

#[test]
fn nested_targets_use_runtime_indices() {
    let state = build(
        "source.renpy",
        indoc! {r##"
            {
                "repository": {
                    "a": {
                        "patterns": [
                            { "include": "#x" },
                            { "include": "#inlined" },
                            { "patterns": [{ "include": "#y" }] }
                        ]
                    },
                    "x": { "match": "x" },
                    "y": { "match": "y" }
                }
            }
        "##},
    );
    let err = link_alone(state).unwrap_err();
    assert!(matches!(err, Error::UnresolvedInclude { ref include, .. } if include == "#inlined"));

    let state = build(
        "source.renpy",
        indoc! {r##"
            {
                "repository": {
                    "inlined": { "match": "i" },
                    "a": {
                        "patterns": [
                            { "include": "#x" },
                            { "include": "#inlined" },
                            { "patterns": [{ "include": "#y" }] }
                        ]
                    },
                    "x": { "match": "x" },
                    "y": { "match": "y" }
                }
            }
        "##},
    );
    let linked = link_alone(state).unwrap();
    // `a.patterns![2]` sits at position 2 once `x` has been spliced in front.
    assert_eq!(
        lines(&linked.local_block),
        [
            "a.patterns!.splice(0, 0, x);",
            "a.patterns![2].patterns!.push(y);",
        ]
    );
}

#[test]
fn nested_index_shrinks_when_earlier_reference_is_external() {
    let state = build(
        "source.renpy",
        indoc! {r##"
            {
                "repository": {
                    "a": {
                        "patterns": [
                            { "include": "source.python#expression" },
                            { "patterns": [{ "include": "#y" }] }
                        ]
                    },
                    "y": { "match": "y" }
                }
            }
        "##},
    );
    let mut index = DocumentIndex::new();
    index.insert_compiled(&state);
    index.insert_extern(DocumentId::new("source.python"));
    let linked = link(state, &index).unwrap();

    // Local patches run before the external one, so the container is still at 0.
    assert_eq!(lines(&linked.local_block), ["a.patterns![0].patterns!.push(y);"]);
    assert_eq!(linked.external_block.len(), 1);
    assert_eq!(
        lines(&linked.external_block[0].statements),
        ["a.patterns!.splice(0, 0, PythonPatterns.expression);"]
    );
    assert_eq!(
        linked.imports,
        [Import::Namespace {
            document: DocumentId::new("source.python"),
            alias: "PythonPatterns".into(),
        }]
    );
}

#[test]
fn same_family_documents_import_by_name() {
    let atl = build(
        "source.renpy.atl",
        r#"{ "repository": { "atl": { "patterns": [{ "include": "source.renpy.screen#screen-keywords" }] } } }"#,
    );
    let screen = build(
        "source.renpy.screen",
        r#"{ "repository": { "screen-keywords": { "match": "screen" } } }"#,
    );

    let mut index = DocumentIndex::new();
    index.insert_compiled(&atl);
    index.insert_compiled(&screen);
    let linked = link(atl, &index).unwrap();

    assert_eq!(
        linked.imports,
        [Import::Named {
            document: DocumentId::new("source.renpy.screen"),
            names: vec!["screenKeywords".into()],
        }]
    );
    assert!(linked.local_block.is_empty());
    assert_eq!(
        lines(&linked.external_block[0].statements),
        ["atl.patterns!.push(screenKeywords);"]
    );
}

#[test]
fn groups_follow_first_reference() {
    let state = build(
        "source.renpy",
        indoc! {r#"
            {
                "repository": {
                    "a": {
                        "patterns": [
                            { "include": "source.renpy.style#style" },
                            { "include": "source.renpy.atl#atl" },
                            { "include": "source.renpy.style#style-keywords" }
                        ]
                    }
                }
            }
        "#},
    );
    let mut index = DocumentIndex::new();
    index.insert_extern(DocumentId::new("source.renpy.style"));
    index.insert_extern(DocumentId::new("source.renpy.atl"));
    let linked = link(state, &index).unwrap();

    let groups: Vec<_> = linked
        .external_block
        .iter()
        .map(|g| (g.document.as_str(), lines(&g.statements)))
        .collect();
    assert_eq!(
        groups,
        [
            (
                "source.renpy.style",
                vec!["a.patterns!.push(style, styleKeywords);".to_string()]
            ),
            ("source.renpy.atl", vec!["a.patterns!.splice(1, 0, atl);".to_string()]),
        ]
    );
}

#[test]
fn unresolved_includes() {
    let state = build(
        "source.renpy",
        r##"{ "repository": { "a": { "patterns": [{ "include": "#nope" }] } } }"##,
    );
    let err = link_alone(state).unwrap_err();
    assert_eq!(
        err.to_string(),
        "source.renpy: a.patterns![0]: unresolved include `#nope`: no rule `nope` in the repository"
    );

    let state = build(
        "source.renpy",
        r#"{ "repository": { "a": { "patterns": [{ "include": "$self" }] } } }"#,
    );
    let err = link_alone(state).unwrap_err();
    assert!(err.to_string().ends_with("document has no top-level patterns"));

    let state = build(
        "source.renpy",
        r#"{ "repository": { "a": { "patterns": [{ "include": "source.lua#x" }] } } }"#,
    );
    let err = link_alone(state).unwrap_err();
    assert!(err.to_string().ends_with("document `source.lua` is not available"));
}

#[test]
fn missing_key_in_compiled_document() {
    let atl = build(
        "source.renpy.atl",
        r#"{ "repository": { "atl": { "patterns": [{ "include": "source.renpy.screen#nope" }] } } }"#,
    );
    let screen = build("source.renpy.screen", r#"{ "repository": {} }"#);
    let mut index = DocumentIndex::new();
    index.insert_compiled(&atl);
    index.insert_compiled(&screen);

    let err = link(atl, &index).unwrap_err();
    assert!(err.to_string().ends_with("document `source.renpy.screen` has no rule `nope`"));
}

#[test]
fn import_colliding_with_local_definition() {
    let atl = build(
        "source.renpy.atl",
        r#"{ "repository": { "keywords": { "patterns": [{ "include": "source.renpy.screen#keywords" }] } } }"#,
    );
    let mut index = DocumentIndex::new();
    index.insert_compiled(&atl);
    index.insert_extern(DocumentId::new("source.renpy.screen"));

    let err = link(atl, &index).unwrap_err();
    assert_eq!(
        err.to_string(),
        "source.renpy.atl: `keywords` imported from `source.renpy.screen` collides with another name"
    );
}
