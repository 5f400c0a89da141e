//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{generate_command, scopes_command};

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn generate_defaults() {
    let m = generate_command()
        .try_get_matches_from(["generate", "syntaxes"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.grammar_path, PathBuf::from("syntaxes"));
    assert_eq!(params.out_dir, None);
    assert!(!params.check);
    assert!(params.externs.is_empty());
    assert!(!params.first_scope);
    assert!(!params.no_posix);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn generate_all_flags() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "syntaxes",
            "-o",
            "out",
            "--check",
            "--tokens-module",
            "@/tokens",
            "--types-module",
            "@/types",
            "--extern",
            "source.python",
            "--extern",
            "source.regexp.python",
            "--first-scope",
            "--no-posix",
            "--color",
            "never",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.out_dir, Some(PathBuf::from("out")));
    assert!(params.check);
    assert_eq!(params.tokens_module.as_deref(), Some("@/tokens"));
    assert_eq!(params.types_module.as_deref(), Some("@/types"));
    assert_eq!(params.externs, ["source.python", "source.regexp.python"]);
    assert!(params.first_scope);
    assert!(params.no_posix);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn generate_requires_path() {
    let result = generate_command().try_get_matches_from(["generate"]);
    assert!(result.is_err());
}

#[test]
fn generate_rejects_unknown_color() {
    let result = generate_command().try_get_matches_from(["generate", "x", "--color", "rainbow"]);
    assert!(result.is_err());
}

#[test]
fn scopes_collects_files_and_names() {
    let m = scopes_command()
        .try_get_matches_from([
            "scopes",
            "a.tmLanguage.json",
            "b.tmLanguage.json",
            "-n",
            "keyword.other",
            "--json",
        ])
        .unwrap();
    let params = ScopesParams::from_matches(&m);

    assert_eq!(
        params.grammar_files,
        [PathBuf::from("a.tmLanguage.json"), PathBuf::from("b.tmLanguage.json")]
    );
    assert_eq!(params.scope_names, ["keyword.other"]);
    assert!(params.json);
    assert!(!params.first_scope);
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    assert!(help.contains("generate"));
    assert!(help.contains("scopes"));
}
