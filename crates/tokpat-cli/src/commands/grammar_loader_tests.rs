use std::fs;

use super::grammar_loader::*;

#[test]
fn discover_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("screen.tmLanguage.json"), "{}").unwrap();
    fs::write(dir.path().join("atl.tmLanguage.json"), "{}").unwrap();
    fs::write(dir.path().join("notes.json"), "{}").unwrap();
    fs::write(dir.path().join("atl-token-patterns.g.ts"), "").unwrap();
    fs::create_dir(dir.path().join("nested.tmLanguage.json")).unwrap();

    let found = discover(dir.path()).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, ["atl.tmLanguage.json", "screen.tmLanguage.json"]);
}

#[test]
fn empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = discover(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::NoGrammars { .. }));
    assert!(err.to_string().starts_with("no *.tmLanguage.json files found in"));
}

#[test]
fn single_file_is_loaded_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("renpy.json");
    fs::write(&path, r#"{ "repository": {} }"#).unwrap();

    let sources = load_path(&path).unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].text, r#"{ "repository": {} }"#);
    assert!(sources[0].name().ends_with("renpy.json"));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.tmLanguage.json");

    let err = load_path(&path).err().unwrap();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("missing.tmLanguage.json"));
}
