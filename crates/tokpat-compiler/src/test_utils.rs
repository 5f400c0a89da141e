use crate::{Artifact, Compilation, Config, Timestamp, Workspace};

/// 01/06/2023 14:57:48 UTC.
pub const FIXED_TIME: u64 = 1_685_631_468;

pub fn config() -> Config {
    Config::new().timestamp(Timestamp::from_unix_secs(FIXED_TIME))
}

pub fn compile_with(config: Config, documents: &[(&str, &str)]) -> Compilation {
    documents
        .iter()
        .fold(Workspace::new(config), |workspace, (name, json)| {
            workspace.document(*name, json)
        })
        .compile()
}

pub fn compile(documents: &[(&str, &str)]) -> Compilation {
    compile_with(config(), documents)
}

pub fn artifact<'c>(compilation: &'c Compilation, document: &str) -> &'c Artifact {
    compilation.artifact(document).unwrap_or_else(|| {
        let errors: Vec<String> = compilation.errors().map(|e| e.to_string()).collect();
        panic!("no artifact for `{document}`: {errors:?}")
    })
}

/// Artifact contents after the provenance header.
pub fn body(compilation: &Compilation, document: &str) -> String {
    let contents = artifact(compilation, document).contents();
    match contents.split_once("(UTC+0)\n\n") {
        Some((_, body)) => body.to_string(),
        None => contents.to_string(),
    }
}

/// Compile one document named `source.renpy` and return its body.
pub fn body_of(json: &str) -> String {
    body(&compile(&[("source.renpy", json)]), "source.renpy")
}
