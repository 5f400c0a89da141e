use indoc::indoc;
use tokpat_core::Grammar;

use super::*;
use crate::classify::TokenCategory;
use crate::document::DocumentId;
use crate::test_utils::config;
use crate::{Error, StructuralError};

fn build(json: &str) -> crate::Result<GeneratorState> {
    let grammar = Grammar::from_json(json).unwrap();
    build_document(DocumentId::new("source.renpy.atl"), &grammar, &config())
}

fn structural(json: &str) -> (String, StructuralError) {
    match build(json) {
        Err(Error::Structural { path, kind, .. }) => (path, kind),
        other => panic!("expected structural error, got {other:?}"),
    }
}

#[test]
fn definitions_follow_repository_order() {
    let state = build(indoc! {r#"
        {
            "repository": {
                "zeta": { "match": "z" },
                "atl-keywords": { "match": "a" },
                "mu": { "match": "m" }
            }
        }
    "#})
    .unwrap();

    let idents: Vec<_> = state.definitions().iter().map(|d| d.ident.as_str()).collect();
    assert_eq!(idents, ["zeta", "atlKeywords", "mu"]);
    assert!(state.local_patches().is_empty());
}

#[test]
fn backward_include_is_inlined() {
    let state = build(indoc! {r##"
        {
            "repository": {
                "b": { "match": "b" },
                "a": { "patterns": [{ "include": "#b" }] }
            }
        }
    "##})
    .unwrap();

    assert!(state.local_patches().is_empty());
    assert_eq!(state.definitions()[1].value.render(0), "{ patterns: [b] }");
    assert_eq!(
        state.native_indices(&AccessPath::new("a").field(Field::Patterns)),
        [0]
    );
}

#[test]
fn forward_and_self_includes_are_deferred() {
    let state = build(indoc! {r##"
        {
            "repository": {
                "a": {
                    "patterns": [
                        { "include": "#b" },
                        { "match": "c" },
                        { "include": "#a" }
                    ]
                },
                "b": { "match": "b" }
            }
        }
    "##})
    .unwrap();

    let patches = state.local_patches();
    assert_eq!(patches.len(), 2);
    assert_eq!(patches[0].index, 0);
    assert_eq!(patches[0].include, Include::Local(Target::Key("b".into())));
    assert_eq!(patches[1].index, 2);
    assert_eq!(patches[1].origin().to_string(), "a.patterns![2]");

    let array = AccessPath::new("a").field(Field::Patterns);
    assert_eq!(state.native_indices(&array), [1]);
}

#[test]
fn external_includes_register_dependencies() {
    let state = build(indoc! {r#"
        {
            "repository": {
                "a": {
                    "patterns": [
                        { "include": "source.renpy.python#expression" },
                        { "include": "source.python" },
                        { "include": "source.renpy.python#strings" }
                    ]
                }
            }
        }
    "#})
    .unwrap();

    let deps: Vec<_> = state.dependencies().iter().map(DocumentId::as_str).collect();
    assert_eq!(deps, ["source.renpy.python", "source.python"]);
    assert_eq!(state.external_patches().len(), 3);
    assert!(state.local_patches().is_empty());
}

#[test]
fn debug_names_use_source_indices() {
    let state = build(indoc! {r##"
        {
            "repository": {
                "a": {
                    "patterns": [
                        { "include": "#later" },
                        {
                            "begin": "x",
                            "end": "y",
                            "beginCaptures": { "1": { "match": "z" } }
                        }
                    ]
                },
                "later": { "match": "l" }
            }
        }
    "##})
    .unwrap();

    let rendered = state.definitions()[0].value.render(0);
    assert!(rendered.contains(r#"debugName: "a.patterns![1]","#));
    assert!(rendered.contains(r#"debugName: "a.patterns![1].beginCaptures![1]","#));
}

#[test]
fn token_categories_and_scopes_are_recorded() {
    let state = build(indoc! {r#"
        {
            "repository": {
                "a": {
                    "match": "(warp)",
                    "name": "meta.atl.warp.renpy",
                    "captures": {
                        "1": { "name": "keyword.warp.renpy" }
                    }
                },
                "b": { "match": "x", "name": "keyword.warp.renpy" }
            }
        }
    "#})
    .unwrap();

    let categories: Vec<_> = state.categories().iter().copied().collect();
    assert_eq!(categories, [TokenCategory::Meta, TokenCategory::Keyword]);

    let scopes: Vec<_> = state.scopes().keys().map(String::as_str).collect();
    assert_eq!(scopes, ["meta.atl.warp.renpy", "keyword.warp.renpy"]);
}

#[test]
fn unclassified_scope_is_a_warning() {
    let state = build(r#"{ "repository": { "a": { "match": "x", "name": "markup.bold" } } }"#)
        .unwrap();

    assert_eq!(state.diagnostics().warning_count(), 1);
    assert!(
        state.definitions()[0]
            .value
            .render(0)
            .contains("token: MetaTokenType.Invalid, /*ERROR: markup.bold*/")
    );
}

#[test]
fn missing_repository() {
    let err = build(r#"{ "patterns": [] }"#).unwrap_err();
    assert!(matches!(err, Error::MissingRepository { .. }));
    assert_eq!(err.to_string(), "source.renpy.atl: missing `repository`");
}

#[test]
fn match_and_begin() {
    let (path, kind) = structural(
        r#"{ "repository": { "a": { "patterns": [{ "match": "x", "begin": "y", "end": "z" }] } } }"#,
    );
    assert_eq!(path, "a.patterns![0]");
    assert_eq!(kind, StructuralError::MatchAndBegin);
}

#[test]
fn end_without_begin() {
    let (path, kind) = structural(r#"{ "repository": { "a": { "end": "x" } } }"#);
    assert_eq!(path, "a");
    assert_eq!(kind, StructuralError::EndWithoutBegin);
}

#[test]
fn begin_without_end() {
    let (_, kind) = structural(r#"{ "repository": { "a": { "begin": "x" } } }"#);
    assert_eq!(kind, StructuralError::BeginWithoutEnd);
}

#[test]
fn unrecognized_include() {
    let (path, kind) = structural(
        r#"{ "repository": { "a": { "patterns": [{ "match": "x" }, { "include": "text.html" }] } } }"#,
    );
    assert_eq!(path, "a.patterns![1]");
    assert_eq!(kind, StructuralError::UnrecognizedInclude("text.html".into()));
}

#[test]
fn invalid_capture_keys() {
    let (path, kind) = structural(
        r#"{ "repository": { "a": { "match": "(x)", "captures": { "one": { "name": "x" } } } } }"#,
    );
    assert_eq!(path, "a.captures!");
    assert_eq!(kind, StructuralError::InvalidCaptureIndex("one".into()));

    let (_, kind) = structural(
        r#"{ "repository": { "a": { "match": "(x)", "captures": { "1": {}, "01": {} } } } }"#,
    );
    assert_eq!(kind, StructuralError::InvalidCaptureIndex("01".into()));
}

#[test]
fn identifier_collision() {
    let err = build(r#"{ "repository": { "atl-keywords": {}, "atl_keywords": {} } }"#)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "source.renpy.atl: keys `atl-keywords` and `atl_keywords` both name `atlKeywords`"
    );
}

#[test]
fn key_colliding_with_root() {
    let err = build(r#"{ "patterns": [], "repository": { "atl-root": {} } }"#).unwrap_err();
    assert!(matches!(
        err,
        Error::IdentifierCollision { ref first, ref second, .. } if first == "$self" && second == "atl-root"
    ));
}

#[test]
fn invalid_key() {
    let (_, kind) = structural(r#"{ "repository": { "2d": { "match": "x" } } }"#);
    assert_eq!(kind, StructuralError::InvalidKey("2d".into()));
}

#[test]
fn reserved_word_key() {
    let (path, kind) = structural(indoc! {r##"
        {
            "repository": {
                "imports": { "match": "i" },
                "import": { "match": "i" },
                "class": { "patterns": [{ "include": "#import" }] }
            }
        }
    "##});
    assert_eq!(path, "import");
    assert_eq!(
        kind,
        StructuralError::ReservedKey {
            key: "import".into(),
            ident: "import".into(),
        }
    );
    insta::assert_snapshot!(kind, @"repository key `import` yields the reserved word `import`");
}

#[test]
fn root_patterns_come_last() {
    let state = build(indoc! {r##"
        {
            "patterns": [{ "include": "#atl" }, { "include": "$self" }],
            "repository": { "atl": { "match": "a" } }
        }
    "##})
    .unwrap();

    let last = state.definitions().last().unwrap();
    assert_eq!(last.ident, "atlRoot");
    assert_eq!(last.key, None);
    assert_eq!(last.value.render(0), "{ patterns: [atl] }");
    assert!(state.has_root());
    assert_eq!(state.local_patches()[0].include, Include::Local(Target::Root));
}

#[test]
fn empty_rule_and_ignored_include_fields_warn() {
    let state = build(indoc! {r##"
        {
            "repository": {
                "b": { "match": "b" },
                "a": { "patterns": [{}, { "include": "#b", "name": "keyword.b" }] }
            }
        }
    "##})
    .unwrap();

    let kinds: Vec<_> = state.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [
            crate::diagnostics::DiagnosticKind::IgnoredIncludeFields,
            crate::diagnostics::DiagnosticKind::EmptyRule,
        ]
    );
}
