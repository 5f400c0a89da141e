use std::fs;
use std::path::{Path, PathBuf};

use tokpat_compiler::{Compilation, Config, ScopeSelection, Workspace};

use super::grammar_loader::{LoadError, load_path};

pub struct GenerateArgs {
    pub grammar_path: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub check: bool,
    pub tokens_module: Option<String>,
    pub types_module: Option<String>,
    pub externs: Vec<String>,
    pub first_scope: bool,
    pub no_posix: bool,
    pub color: bool,
}

impl GenerateArgs {
    fn config(&self) -> Config {
        let mut config = Config::new().expand_posix_classes(!self.no_posix);
        if let Some(module) = &self.tokens_module {
            config = config.tokens_module(module.as_str());
        }
        if let Some(module) = &self.types_module {
            config = config.pattern_types_module(module.as_str());
        }
        if self.first_scope {
            config = config.scope_selection(ScopeSelection::First);
        }
        for document in &self.externs {
            config = config.extern_document(document.as_str());
        }
        config
    }

    /// Artifacts land next to the grammars unless `--out-dir` is given.
    fn out_dir(&self) -> PathBuf {
        if let Some(dir) = &self.out_dir {
            return dir.clone();
        }
        if self.grammar_path.is_dir() {
            return self.grammar_path.clone();
        }
        self.grammar_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}

/// What a run did to the output directory.
#[derive(Debug, Default)]
pub struct Summary {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    /// Out of date artifacts found by `--check`.
    pub stale: Vec<PathBuf>,
    /// Documents that produced no artifact.
    pub failed: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.stale.is_empty()
    }
}

pub fn run(args: GenerateArgs) {
    let (compilation, summary) = match execute(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let diagnostics = compilation.diagnostics();
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.printer().colored(args.color).render());
    }

    for path in &summary.written {
        eprintln!("wrote {}", path.display());
    }
    for path in &summary.stale {
        eprintln!("stale {}", path.display());
    }

    if !summary.is_success() {
        std::process::exit(1);
    }
}

/// Compile every grammar under `args.grammar_path` and write changed artifacts.
pub fn execute(args: &GenerateArgs) -> Result<(Compilation, Summary), LoadError> {
    let sources = load_path(&args.grammar_path)?;
    let compilation = sources
        .iter()
        .fold(Workspace::new(args.config()), |workspace, source| {
            workspace.document(source.name(), &source.text)
        })
        .compile();

    let out_dir = args.out_dir();
    let mut summary = Summary {
        failed: compilation.errors().count(),
        ..Summary::default()
    };

    for artifact in compilation.artifacts() {
        let path = out_dir.join(artifact.file_name());
        let existing = fs::read_to_string(&path).ok();
        if existing.is_some_and(|text| artifact.is_unchanged(&text)) {
            log::info!("{} is up to date", path.display());
            summary.unchanged.push(path);
            continue;
        }
        if args.check {
            summary.stale.push(path);
            continue;
        }

        let write_error = |source| LoadError::Write {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&out_dir).map_err(write_error)?;
        fs::write(&path, artifact.contents()).map_err(write_error)?;
        summary.written.push(path);
    }

    Ok((compilation, summary))
}
