//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tokpat")
        .about("Generate TypeScript token pattern tables from TextMate grammars")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(scopes_command())
}

/// Compile grammars and write artifacts.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Compile grammars into token pattern modules")
        .override_usage(
            "\
  tokpat generate <PATH> [-o <DIR>]
  tokpat generate <PATH> --check",
        )
        .after_help(
            r#"EXAMPLES:
  tokpat generate syntaxes/                       # write next to the grammars
  tokpat generate syntaxes/ -o src/tokenizer      # write into another directory
  tokpat generate syntaxes/ --check               # CI: fail on stale artifacts
  tokpat generate syntaxes/ --extern source.python"#,
        )
        .arg(grammar_path_arg())
        .arg(out_dir_arg())
        .arg(check_arg())
        .arg(tokens_module_arg())
        .arg(types_module_arg())
        .arg(extern_arg())
        .arg(first_scope_arg())
        .arg(no_posix_arg())
        .arg(color_arg())
}

/// Report scope classification.
pub fn scopes_command() -> Command {
    Command::new("scopes")
        .about("Show the token type of every scope name")
        .override_usage(
            "\
  tokpat scopes <FILES>...
  tokpat scopes -n <SCOPE>...",
        )
        .after_help(
            r#"EXAMPLES:
  tokpat scopes syntaxes/renpy.tmLanguage.json
  tokpat scopes syntaxes/*.tmLanguage.json --json
  tokpat scopes -n keyword.control.flow.renpy -n entity.name.function"#,
        )
        .arg(grammar_files_arg())
        .arg(scope_name_arg())
        .arg(first_scope_arg())
        .arg(json_arg())
}
