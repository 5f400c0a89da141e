//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar directory or single grammar file (positional).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("PATH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory of *.tmLanguage.json files, or a single grammar file")
}

/// Grammar files to scan (positional, repeatable).
pub fn grammar_files_arg() -> Arg {
    Arg::new("grammar_files")
        .value_name("FILES")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Grammar files whose scope names are reported")
}

/// Inline scope name (-n/--name), repeatable.
pub fn scope_name_arg() -> Arg {
    Arg::new("scope_name")
        .short('n')
        .long("name")
        .value_name("SCOPE")
        .action(ArgAction::Append)
        .help("Classify a scope name directly")
}

/// Output directory (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write artifacts here (default: next to the grammars)")
}

/// Report stale artifacts without writing (--check).
pub fn check_arg() -> Arg {
    Arg::new("check")
        .long("check")
        .action(ArgAction::SetTrue)
        .help("Fail if any artifact is out of date, without writing")
}

/// Module providing the token type enums (--tokens-module).
pub fn tokens_module_arg() -> Arg {
    Arg::new("tokens_module")
        .long("tokens-module")
        .value_name("MODULE")
        .help("Import specifier of the token type enums (default: ./renpy-tokens)")
}

/// Module providing the `TokenPattern` type (--types-module).
pub fn types_module_arg() -> Arg {
    Arg::new("types_module")
        .long("types-module")
        .value_name("MODULE")
        .help("Import specifier of TokenPattern (default: ./token-pattern-types)")
}

/// Documents known to exist outside the compiled set (--extern), repeatable.
pub fn extern_arg() -> Arg {
    Arg::new("extern")
        .long("extern")
        .value_name("SCOPE")
        .action(ArgAction::Append)
        .help("Treat a document id as provided elsewhere (e.g. source.python)")
}

/// Classify multi-scope names by their first scope (--first-scope).
pub fn first_scope_arg() -> Arg {
    Arg::new("first_scope")
        .long("first-scope")
        .action(ArgAction::SetTrue)
        .help("Classify multi-scope names by their first scope instead of the last")
}

/// Keep POSIX bracket classes verbatim (--no-posix).
pub fn no_posix_arg() -> Arg {
    Arg::new("no_posix")
        .long("no-posix")
        .action(ArgAction::SetTrue)
        .help("Do not expand POSIX bracket classes like [:alpha:]")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}
