//! Source file discovery.
//!
//! Walks the root and groups matches by their containing folder relative to
//! the root. Hidden directories are walked; directory symlinks are listed
//! but never descended into, so each file is reached through one path only.

use crate::error::DiscoverError;
use crate::models::FilesByFolder;
use std::path::Path;
use walkdir::WalkDir;

/// Extension of the files handed to the linter.
pub const SOURCE_EXTENSION: &str = "py";

/// Collect every regular `*.{extension}` file under `root`.
///
/// Any unreadable directory aborts the walk.
pub fn gather_source_files(root: &Path, extension: &str) -> Result<FilesByFolder, DiscoverError> {
    let mut by_folder = FilesByFolder::default();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        // Symlinked files count; symlinked directories fail `is_file`.
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        let parent = path.parent().unwrap_or(root);
        let folder = match pathdiff::diff_paths(parent, root) {
            Some(rel) if !rel.as_os_str().is_empty() => rel.to_string_lossy().to_string(),
            _ => ".".to_string(),
        };
        by_folder.insert(folder, name.to_string_lossy().to_string());
    }
    tracing::debug!(
        root = %root.display(),
        folders = by_folder.folders.len(),
        files = by_folder.file_count(),
        "discovered source files"
    );
    Ok(by_folder)
}
