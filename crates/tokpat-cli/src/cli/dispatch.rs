//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::generate::GenerateArgs;
use crate::commands::scopes::ScopesArgs;

pub struct GenerateParams {
    pub grammar_path: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub check: bool,
    pub tokens_module: Option<String>,
    pub types_module: Option<String>,
    pub externs: Vec<String>,
    pub first_scope: bool,
    pub no_posix: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m
                .get_one::<PathBuf>("grammar_path")
                .cloned()
                .unwrap_or_default(),
            out_dir: m.get_one::<PathBuf>("out_dir").cloned(),
            check: m.get_flag("check"),
            tokens_module: m.get_one::<String>("tokens_module").cloned(),
            types_module: m.get_one::<String>("types_module").cloned(),
            externs: strings(m, "extern"),
            first_scope: m.get_flag("first_scope"),
            no_posix: m.get_flag("no_posix"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            out_dir: p.out_dir,
            check: p.check,
            tokens_module: p.tokens_module,
            types_module: p.types_module,
            externs: p.externs,
            first_scope: p.first_scope,
            no_posix: p.no_posix,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ScopesParams {
    pub grammar_files: Vec<PathBuf>,
    pub scope_names: Vec<String>,
    pub first_scope: bool,
    pub json: bool,
}

impl ScopesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_files: m
                .get_many::<PathBuf>("grammar_files")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            scope_names: strings(m, "scope_name"),
            first_scope: m.get_flag("first_scope"),
            json: m.get_flag("json"),
        }
    }
}

impl From<ScopesParams> for ScopesArgs {
    fn from(p: ScopesParams) -> Self {
        Self {
            grammar_files: p.grammar_files,
            scope_names: p.scope_names,
            first_scope: p.first_scope,
            json: p.json,
        }
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
