//! Shared data models for discovered files, per-file analysis, and the report tables.

pub mod source;

pub use source::{FilesByFolder, FolderFiles, SourceFile};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One `Summary` row: a file that was linted successfully.
pub struct AnalysisRecord {
    pub file: String,
    /// Name of the directory holding the file.
    pub path: String,
    pub flags: usize,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One `All Messages` row.
pub struct DiagnosticMessage {
    pub file: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One `Statements Analyzed` row.
pub struct StatementCount {
    pub file: String,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A file whose analysis raised an error and was skipped.
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
/// Report tables built from one run.
pub struct Report {
    pub summary: Vec<AnalysisRecord>,
    pub messages: Vec<DiagnosticMessage>,
    pub statements: Vec<StatementCount>,
    pub failures: Vec<FileFailure>,
}
