use std::collections::HashMap;

use tokpat_core::utils::{is_reserved_word, to_camel_case};
use tokpat_core::{Captures, Grammar, Rule};

use super::include::Include;
use super::path::{AccessPath, Field};
use super::state::{Definition, GeneratorState, Patch, target_ident};
use crate::classify::Classifier;
use crate::config::Config;
use crate::diagnostics::DiagnosticKind;
use crate::document::DocumentId;
use crate::emit::{Item, Node};
use crate::regex::Translator;
use crate::{Error, Result, StructuralError};

/// Build every repository rule of `grammar`, then its top-level patterns.
///
/// Repository keys are visited in declaration order. A key counts as defined
/// only once its whole rule has been built, so a rule including itself is
/// deferred like any forward reference.
pub fn build_document(
    document: DocumentId,
    grammar: &Grammar,
    config: &Config,
) -> Result<GeneratorState> {
    let repository = grammar
        .repository
        .as_ref()
        .ok_or_else(|| Error::MissingRepository {
            document: document.clone(),
        })?;

    let mut builder = Builder {
        classifier: config.classifier(),
        translator: config.translator(),
        state: GeneratorState::new(document),
    };

    let root = grammar.patterns.is_some().then(|| builder.state.document.root_ident());
    builder.check_identifiers(repository.keys(), root.as_deref())?;

    for (key, rule) in repository {
        let ident = to_camel_case(key);
        let value = builder.rule(rule, &AccessPath::new(ident.as_str()))?;
        log::debug!("{}: built `{key}` as `{ident}`", builder.state.document);
        builder.state.defined.insert(key.clone());
        builder.state.definitions.push(Definition {
            ident,
            key: Some(key.clone()),
            value,
        });
    }

    if let (Some(patterns), Some(ident)) = (&grammar.patterns, root) {
        let path = AccessPath::new(ident.as_str()).field(Field::Patterns);
        let array = builder.patterns(patterns, &path)?;
        builder.state.root_defined = true;
        builder.state.definitions.push(Definition {
            ident,
            key: None,
            value: Node::Object(vec![Item::member("patterns", array)]),
        });
    }

    let state = builder.state;
    log::info!(
        "{}: {} definitions, {} local and {} external patches",
        state.document,
        state.definitions.len(),
        state.local_patches.len(),
        state.external_patches.len()
    );
    Ok(state)
}

struct Builder {
    classifier: Classifier,
    translator: Translator,
    state: GeneratorState,
}

impl Builder {
    fn structural(&self, path: &AccessPath, kind: StructuralError) -> Error {
        Error::Structural {
            document: self.state.document.clone(),
            path: path.to_string(),
            kind,
        }
    }

    fn check_identifiers<'k>(
        &self,
        keys: impl Iterator<Item = &'k String>,
        root: Option<&str>,
    ) -> Result<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        if let Some(root) = root {
            seen.insert(root.to_string(), "$self");
        }
        for key in keys {
            let ident = to_camel_case(key);
            if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(self.structural(
                    &AccessPath::new(key.as_str()),
                    StructuralError::InvalidKey(key.clone()),
                ));
            }
            if is_reserved_word(&ident) {
                return Err(self.structural(
                    &AccessPath::new(key.as_str()),
                    StructuralError::ReservedKey {
                        key: key.clone(),
                        ident,
                    },
                ));
            }
            if let Some(first) = seen.get(&ident) {
                return Err(Error::IdentifierCollision {
                    document: self.state.document.clone(),
                    ident,
                    first: first.to_string(),
                    second: key.clone(),
                });
            }
            seen.insert(ident, key);
        }
        Ok(())
    }

    fn rule(&mut self, rule: &Rule, path: &AccessPath) -> Result<Node> {
        if rule.include.is_some() {
            // A lone include where a rule is expected becomes a one-element container.
            let array = self.patterns(std::slice::from_ref(rule), &path.field(Field::Patterns))?;
            return Ok(Node::Object(vec![Item::member("patterns", array)]));
        }

        match (&rule.r#match, &rule.begin, &rule.end) {
            (Some(_), Some(_), _) => {
                return Err(self.structural(path, StructuralError::MatchAndBegin));
            }
            (_, None, Some(_)) => {
                return Err(self.structural(path, StructuralError::EndWithoutBegin));
            }
            (_, Some(_), None) => {
                return Err(self.structural(path, StructuralError::BeginWithoutEnd));
            }
            _ => {}
        }

        let mut items = Vec::new();

        if rule.has_regex() {
            items.push(Item::member("debugName", Node::str(path.to_string())));
            items.push(Item::Blank);
        }

        if let Some(comment) = &rule.comment {
            items.extend(
                comment
                    .lines()
                    .map(|line| Item::Comment(line.trim_end().to_string())),
            );
        }

        if let Some(scope) = &rule.name {
            items.push(self.token("token", scope, path));
        }
        if let Some(scope) = &rule.content_name {
            items.push(self.token("contentToken", scope, path));
        }

        let shared_captures = rule.captures.is_some();
        if let Some(pattern) = &rule.r#match {
            items.push(self.regex("match", pattern, shared_captures));
        }
        if let Some(pattern) = &rule.begin {
            items.push(self.regex("begin", pattern, shared_captures || rule.begin_captures.is_some()));
        }
        if let Some(pattern) = &rule.end {
            items.push(self.regex("end", pattern, shared_captures || rule.end_captures.is_some()));
        }

        for (field, captures) in [
            (Field::Captures, &rule.captures),
            (Field::BeginCaptures, &rule.begin_captures),
            (Field::EndCaptures, &rule.end_captures),
        ] {
            if let Some(captures) = captures {
                let value = self.captures(captures, &path.field(field))?;
                items.push(Item::member(field.as_str(), value));
            }
        }

        if let Some(patterns) = &rule.patterns {
            let array = self.patterns(patterns, &path.field(Field::Patterns))?;
            items.push(Item::member("patterns", array));
        }

        if items.is_empty() {
            self.state
                .diagnostics
                .report(DiagnosticKind::EmptyRule, &self.state.document, path.to_string())
                .message(path.to_string())
                .emit();
        }

        Ok(Node::Object(items))
    }

    fn token(&mut self, key: &str, scope: &str, path: &AccessPath) -> Item {
        let token = self.classifier.classify(scope);
        if token.is_unresolved() {
            log::warn!(
                "{}: {path}: no token type for scope name `{scope}`",
                self.state.document
            );
            self.state
                .diagnostics
                .report(DiagnosticKind::UnclassifiedScope, &self.state.document, path.to_string())
                .message(scope)
                .emit();
        }
        self.state.categories.insert(token.category());
        let item = Item::annotated(key, Node::raw(token.expression()), token.annotation(scope));
        self.state.scopes.entry(scope.to_string()).or_insert(token);
        item
    }

    fn regex(&self, key: &str, pattern: &str, has_captures: bool) -> Item {
        let literal = self.translator.translate(pattern, has_captures);
        Item::member(key, Node::raw(literal.to_string()))
    }

    /// Captures ordered by ascending group number.
    fn captures(&mut self, captures: &Captures, path: &AccessPath) -> Result<Node> {
        let mut groups = Vec::with_capacity(captures.len());
        for (key, rule) in captures {
            let group: u32 = key.trim().parse().map_err(|_| {
                self.structural(path, StructuralError::InvalidCaptureIndex(key.clone()))
            })?;
            if groups.iter().any(|(g, _, _)| *g == group) {
                return Err(self.structural(path, StructuralError::InvalidCaptureIndex(key.clone())));
            }
            groups.push((group, key, rule));
        }
        groups.sort_by_key(|(group, _, _)| *group);

        let mut items = Vec::with_capacity(groups.len());
        for (group, _, rule) in groups {
            let value = self.rule(rule, &path.capture(group))?;
            items.push(Item::member(group.to_string(), value));
        }
        Ok(Node::Object(items))
    }

    /// Two passes: resolve includes first, then build the remaining children.
    fn patterns(&mut self, patterns: &[Rule], array: &AccessPath) -> Result<Node> {
        let mut inline: Vec<Option<String>> = vec![None; patterns.len()];

        for (index, rule) in patterns.iter().enumerate() {
            let Some(spelling) = &rule.include else {
                continue;
            };
            if carries_more_than_include(rule) {
                self.state
                    .diagnostics
                    .report(
                        DiagnosticKind::IgnoredIncludeFields,
                        &self.state.document,
                        array.index(index).to_string(),
                    )
                    .message(spelling.as_str())
                    .emit();
            }

            let include = Include::parse(spelling, &self.state.document)
                .map_err(|kind| self.structural(&array.index(index), kind))?;

            match include {
                Include::Local(target) if self.state.is_defined(&target) => {
                    inline[index] = Some(target_ident(&self.state.document, &target));
                }
                Include::Local(target) => self.state.local_patches.push(Patch {
                    target: array.clone(),
                    index,
                    include: Include::Local(target),
                    spelling: spelling.clone(),
                }),
                Include::External { document, target } => {
                    self.state.dependencies.insert(document.clone());
                    self.state.external_patches.push(Patch {
                        target: array.clone(),
                        index,
                        include: Include::External { document, target },
                        spelling: spelling.clone(),
                    });
                }
            }
        }

        let mut elements = Vec::with_capacity(patterns.len());
        let mut native = Vec::with_capacity(patterns.len());
        for (index, rule) in patterns.iter().enumerate() {
            if rule.include.is_some() {
                if let Some(ident) = inline[index].take() {
                    elements.push(Node::Raw(ident));
                    native.push(index);
                }
                continue;
            }
            elements.push(self.rule(rule, &array.index(index))?);
            native.push(index);
        }

        self.state.arrays.insert(array.clone(), native);
        Ok(Node::Array(elements))
    }
}

fn carries_more_than_include(rule: &Rule) -> bool {
    rule.name.is_some()
        || rule.content_name.is_some()
        || rule.has_regex()
        || rule.captures.is_some()
        || rule.begin_captures.is_some()
        || rule.end_captures.is_some()
        || rule.patterns.is_some()
}
