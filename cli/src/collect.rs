//! Source file discovery.
//!
//! Lists the regular files directly inside each directory (no recursion)
//! whose extension is accepted, plus any file named explicitly. Results are sorted by path so multipart
//! field numbering is stable between runs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CollectError, CollectResult};
use crate::models::SourceFile;

/// Normalize user supplied extensions to a leading-dot, lowercase form.
pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext))
        .collect()
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
            extensions.iter().any(|e| *e == ext)
        }
        None => false,
    }
}

/// Collect candidate files from directories and explicit file paths.
///
/// Directories contribute their matching files; an explicit file is kept
/// whatever its extension.
pub fn collect_files(paths: &[PathBuf], extensions: &[String]) -> CollectResult<Vec<SourceFile>> {
    let extensions = normalize_extensions(extensions);
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(SourceFile::new(path.clone()));
            continue;
        }
        if !path.is_dir() {
            return Err(CollectError::NotFound(path.clone()));
        }

        let entries = fs::read_dir(path).map_err(|source| CollectError::Io {
            path: path.clone(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| CollectError::Io {
                path: path.clone(),
                source,
            })?;
            let file = entry.path();
            if file.is_file() && has_extension(&file, &extensions) {
                files.push(SourceFile::new(file));
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Keep only the files whose base name is listed. An empty list keeps all.
pub fn select_files(files: Vec<SourceFile>, only: &[String]) -> CollectResult<Vec<SourceFile>> {
    if only.is_empty() {
        return Ok(files);
    }
    if let Some(missing) = only.iter().find(|name| !files.iter().any(|f| f.name == **name)) {
        return Err(CollectError::NotSelected(missing.clone()));
    }
    Ok(files
        .into_iter()
        .filter(|f| only.iter().any(|name| *name == f.name))
        .collect())
}

fn ensure_pair(files: Vec<SourceFile>) -> CollectResult<Vec<SourceFile>> {
    if files.len() < 2 {
        return Err(CollectError::NotEnoughFiles { found: files.len() });
    }
    Ok(files)
}

/// Collect files and require at least one pair.
pub fn collect_comparable(paths: &[PathBuf], extensions: &[String]) -> CollectResult<Vec<SourceFile>> {
    ensure_pair(collect_files(paths, extensions)?)
}

/// Collect, narrow to the `only` selection, and require at least one pair.
pub fn collect_selected(
    paths: &[PathBuf],
    extensions: &[String],
    only: &[String],
) -> CollectResult<Vec<SourceFile>> {
    ensure_pair(select_files(collect_files(paths, extensions)?, only)?)
}
