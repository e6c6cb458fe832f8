use crate::domain::ports::{ArtifactSink, SourceStore};
use crate::utils::error::{GenError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed store used by the binary for both reading test sources
/// and writing runners.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

/// Translates a shell-style file name pattern (`*` and `?` only) into an
/// anchored regex.
fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let mut expr = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            other => expr.push_str(&regex::escape(&other.to_string())),
        }
    }
    expr.push('$');
    Ok(Regex::new(&expr)?)
}

impl SourceStore for LocalStorage {
    fn list_files(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let matcher = glob_to_regex(pattern)?;
        let entries = fs::read_dir(dir).map_err(|source| GenError::ListError {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| GenError::ListError {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| matcher.is_match(name));

            if matches && path.is_file() {
                files.push(path);
            }
        }

        // 排序以免受檔案系統列舉順序影響
        files.sort();
        Ok(files)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| GenError::ReadError {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ArtifactSink for LocalStorage {
    fn create_dir_all(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| GenError::CreateDirError {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|source| GenError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}
