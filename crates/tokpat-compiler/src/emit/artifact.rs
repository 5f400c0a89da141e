use std::fmt::Write;

use super::timestamp::Timestamp;
use super::tree::{INDENT, quote};
use crate::TokenCategory;
use crate::config::Config;
use crate::document::DocumentId;
use crate::link::{Import, LinkedDocument};

const LINT_DIRECTIVES: &[&str] = &[
    "/* eslint-disable no-useless-escape */",
    "/* eslint-disable no-useless-backreference */",
    "/* eslint-disable @typescript-eslint/no-non-null-assertion */",
];

const TIMESTAMP_PREFIX: &str = "// Last generated: ";

/// A generated TypeScript module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    document: DocumentId,
    file_name: String,
    contents: String,
}

impl Artifact {
    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Whether `existing` differs from this artifact only in its timestamp.
    pub fn is_unchanged(&self, existing: &str) -> bool {
        significant_lines(&self.contents).eq(significant_lines(existing))
    }
}

fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter(|line| !line.starts_with(TIMESTAMP_PREFIX))
}

/// Assemble the module for `linked`.
pub fn emit(linked: &LinkedDocument, config: &Config, timestamp: Timestamp) -> Artifact {
    let state = &linked.state;
    let document = state.document();
    let mut sections = Vec::new();

    sections.push(LINT_DIRECTIVES.join("\n"));
    sections.push(header(timestamp));

    let imports = imports(linked, config);
    if !imports.is_empty() {
        sections.push(imports);
    }

    for definition in state.definitions() {
        sections.push(format!(
            "export const {}: TokenPattern = {};",
            definition.ident,
            definition.value.render(0)
        ));
    }

    if !linked.local_block.is_empty() {
        let mut block = String::from("// Push pattern references that were not defined on include");
        for statement in &linked.local_block {
            block.push('\n');
            block.push_str(&statement.to_string());
        }
        sections.push(block);
    }

    if !linked.external_block.is_empty() {
        sections.push(link_function(linked));
    }

    let mut contents = sections.join("\n\n");
    contents.push('\n');

    Artifact {
        document: document.clone(),
        file_name: config.artifact_file_name(document),
        contents,
    }
}

fn header(timestamp: Timestamp) -> String {
    [
        "// THIS FILE HAS BEEN GENERATED BY THE `tokpat` GENERATOR".to_string(),
        "// DO NOT EDIT THIS FILE DIRECTLY! INSTEAD RUN `tokpat generate` TO UPDATE IT.".to_string(),
        "// ANY MANUAL EDITS MADE TO THIS FILE WILL BE OVERWRITTEN. YOU HAVE BEEN WARNED.".to_string(),
        format!("{TIMESTAMP_PREFIX}{timestamp} (UTC+0)"),
    ]
    .join("\n")
}

fn imports(linked: &LinkedDocument, config: &Config) -> String {
    let state = &linked.state;
    let mut lines = Vec::new();

    let categories: Vec<&str> = TokenCategory::ALL
        .iter()
        .filter(|category| state.categories().contains(*category))
        .map(|category| category.type_name())
        .collect();
    if !categories.is_empty() {
        lines.push(format!(
            "import {{ {} }} from {};",
            categories.join(", "),
            quote(&config.tokens_module)
        ));
    }

    if !state.definitions().is_empty() {
        lines.push(format!(
            "import {{ TokenPattern }} from {};",
            quote(&config.pattern_types_module)
        ));
    }

    for import in &linked.imports {
        let line = match import {
            Import::Named { document, names } => format!(
                "import {{ {} }} from {};",
                names.join(", "),
                quote(&module_specifier(document, config))
            ),
            Import::Namespace { document, alias } => format!(
                "import * as {alias} from {};",
                quote(&module_specifier(document, config))
            ),
        };
        lines.push(line);
    }

    lines.join("\n")
}

fn module_specifier(document: &DocumentId, config: &Config) -> String {
    format!("./{}", document.module_name(&config.artifact_suffix))
}

fn link_function(linked: &LinkedDocument) -> String {
    let mut out = String::new();
    out.push_str("// Link pattern references from other grammar files.\n");
    out.push_str("// Call once after every token pattern module has been loaded.\n");
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "export function {}(): void {{",
        linked.state.document().link_fn()
    );
    for (i, group) in linked.external_block.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{INDENT}// {}", group.document);
        for statement in &group.statements {
            let _ = writeln!(out, "{INDENT}{statement}");
        }
    }
    out.push('}');
    out
}
