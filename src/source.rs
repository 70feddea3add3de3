//! Input collaborator: locating and reading source files.
//!
//! Everything fallible lives here, before the scanner runs. The scanner
//! itself only ever sees an already-valid in-memory line sequence.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// File extensions the analyzer accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "h", "hpp"];

/// Errors surfaced before any scanning happens.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("unsupported file type {path:?} (expected one of: {})", SUPPORTED_EXTENSIONS.join(", "))]
    UnsupportedExtension { path: PathBuf },
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check whether a path carries a supported extension.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Read a source file into owned lines, trailing terminators stripped.
///
/// Rejects unsupported extensions up front so the caller never scans a
/// file the tool makes no claims about.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    if !has_supported_extension(path) {
        return Err(SourceError::UnsupportedExtension {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Collect supported source files under a directory, recursively.
///
/// Hidden directories are skipped; results are sorted so batch output is
/// deterministic.
pub fn collect_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
        let name = e.file_name().to_string_lossy();
        !(e.file_type().is_dir() && name.starts_with('.') && name.len() > 1)
    }) {
        let entry = entry?;
        if entry.file_type().is_file() && has_supported_extension(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
