//! Source files found by discovery, grouped by folder.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A discovered source file.
pub struct SourceFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Containing folder relative to the root (`.` for the root itself).
    pub folder: String,
}

impl SourceFile {
    /// Final component of the containing directory; used as the `Path` column.
    pub fn folder_name(&self) -> String {
        self.path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderFiles {
    pub folder: String,
    pub files: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Folder -> file names, in first-seen folder order.
pub struct FilesByFolder {
    pub folders: Vec<FolderFiles>,
}

impl FilesByFolder {
    pub fn insert(&mut self, folder: String, file: String) {
        match self.folders.iter_mut().find(|f| f.folder == folder) {
            Some(entry) => entry.files.push(file),
            None => self.folders.push(FolderFiles {
                folder,
                files: vec![file],
            }),
        }
    }

    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|f| f.files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Flatten into absolute source files under `root`, folder by folder.
    pub fn source_files(&self, root: &Path) -> Vec<SourceFile> {
        let mut out = Vec::with_capacity(self.file_count());
        for entry in &self.folders {
            let dir = if entry.folder == "." {
                root.to_path_buf()
            } else {
                root.join(&entry.folder)
            };
            for name in &entry.files {
                out.push(SourceFile {
                    path: dir.join(name),
                    file_name: name.clone(),
                    folder: entry.folder.clone(),
                });
            }
        }
        out
    }
}
