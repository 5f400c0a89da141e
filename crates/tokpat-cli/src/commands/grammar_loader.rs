use std::fs;
use std::path::{Path, PathBuf};

/// Suffix of grammar files picked up from a directory.
pub const GRAMMAR_SUFFIX: &str = ".tmLanguage.json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no *.tmLanguage.json files found in '{}'", dir.display())]
    NoGrammars { dir: PathBuf },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A grammar file and its text.
pub struct GrammarSource {
    pub path: PathBuf,
    pub text: String,
}

impl GrammarSource {
    /// Name handed to the compiler; the document id falls back to it.
    pub fn name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Grammar files in `dir`, sorted by path.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_error = |source| LoadError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(read_error)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(GRAMMAR_SUFFIX))
        })
        .collect();

    if paths.is_empty() {
        return Err(LoadError::NoGrammars {
            dir: dir.to_path_buf(),
        });
    }

    // Sort for deterministic ordering
    paths.sort();
    Ok(paths)
}

/// Load a directory of grammars, or a single grammar file.
pub fn load_path(path: &Path) -> Result<Vec<GrammarSource>, LoadError> {
    if path.is_dir() {
        return load_files(&discover(path)?);
    }
    load_files(&[path.to_path_buf()])
}

pub fn load_files(paths: &[PathBuf]) -> Result<Vec<GrammarSource>, LoadError> {
    paths
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
                path: path.clone(),
                source,
            })?;
            log::debug!("loaded {}", path.display());
            Ok(GrammarSource {
                path: path.clone(),
                text,
            })
        })
        .collect()
}
