mod cli;
mod commands;

use cli::{GenerateParams, ScopesParams, build_cli};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("scopes", m)) => {
            let params = ScopesParams::from_matches(m);
            commands::scopes::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
