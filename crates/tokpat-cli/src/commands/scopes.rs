use std::path::PathBuf;

use tokpat_compiler::{Config, ScopeEntry, ScopeSelection, Workspace};

use super::grammar_loader::{LoadError, load_files};

pub struct ScopesArgs {
    pub grammar_files: Vec<PathBuf>,
    pub scope_names: Vec<String>,
    pub first_scope: bool,
    pub json: bool,
}

pub fn run(args: ScopesArgs) {
    match execute(&args) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Classify the requested scope names, then every scope name in the grammar files.
pub fn execute(args: &ScopesArgs) -> Result<String, LoadError> {
    let mut config = Config::new();
    if args.first_scope {
        config = config.scope_selection(ScopeSelection::First);
    }
    let classifier = config.classifier();

    let mut entries: Vec<ScopeEntry> = args
        .scope_names
        .iter()
        .map(|scope| ScopeEntry::new(scope, &classifier.classify(scope)))
        .collect();

    let sources = load_files(&args.grammar_files)?;
    let built = sources
        .iter()
        .fold(Workspace::new(config), |workspace, source| {
            workspace.document(source.name(), &source.text)
        })
        .build();

    for error in built.errors() {
        log::warn!("skipping {}", error);
    }
    for state in built.states() {
        for (scope, token) in state.scopes() {
            if !entries.iter().any(|entry| entry.scope == *scope) {
                entries.push(ScopeEntry::new(scope, token));
            }
        }
    }

    if args.json {
        return Ok(format!("{}\n", to_json(&entries)));
    }
    Ok(to_table(&entries))
}

fn to_json(entries: &[ScopeEntry]) -> String {
    // Plain data: serialization cannot fail.
    serde_json::to_string_pretty(entries).unwrap_or_default()
}

fn to_table(entries: &[ScopeEntry]) -> String {
    let width = entries.iter().map(|e| e.scope.len()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{:<width$}  {}", entry.scope, entry.token));
        if !entry.resolved {
            out.push_str("  (unresolved)");
        }
        out.push('\n');
    }
    out
}

