//! Per-file linter invocation.
//!
//! Each file is linted twice: a full run for score and messages, then a
//! report-only run for the statement count. Files are processed in order
//! and each yields its own `Result`, so one failing file never stops the
//! rest.

use crate::error::{AnalysisError, ToolError};
use crate::models::{AnalysisRecord, SourceFile};
use crate::parse;
use crate::progress;
use std::path::Path;
use std::process::{Command, Stdio};

/// Arguments for the statement-count run: every check disabled, reports on.
pub const STATEMENT_REPORT_ARGS: [&str; 3] = ["--disable=all", "-ry", "-d RP0401"];

/// The external static-analysis tool.
pub trait Linter {
    /// Stdout of a full analysis of `file`.
    fn lint(&self, file: &Path) -> Result<String, ToolError>;
    /// Stdout of the report-only run for `file`.
    fn statement_report(&self, file: &Path) -> Result<String, ToolError>;
}

/// Linter reached through a blocking subprocess.
#[derive(Debug, Clone)]
pub struct LinterCommand {
    pub program: String,
}

impl LinterCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn capture(&self, args: &[&str], file: &Path) -> Result<String, ToolError> {
        tracing::trace!(program = %self.program, ?args, file = %file.display(), "spawning linter");
        let output = Command::new(&self.program)
            .args(args)
            .arg(file)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        // Exit status is ignored: linters exit non-zero whenever they report anything.
        String::from_utf8(output.stdout).map_err(|_| ToolError::NonUtf8 {
            program: self.program.clone(),
        })
    }
}

impl Linter for LinterCommand {
    fn lint(&self, file: &Path) -> Result<String, ToolError> {
        self.capture(&[], file)
    }

    fn statement_report(&self, file: &Path) -> Result<String, ToolError> {
        self.capture(&STATEMENT_REPORT_ARGS, file)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Everything learned about one file.
pub struct FileAnalysis {
    pub record: AnalysisRecord,
    pub messages: Vec<String>,
    pub statement: Option<String>,
}

/// Outcome of analyzing one file.
pub type FileOutcome = (SourceFile, Result<FileAnalysis, AnalysisError>);

/// Lint a single file and parse both outputs.
pub fn analyze_file(linter: &dyn Linter, file: &SourceFile) -> Result<FileAnalysis, AnalysisError> {
    let out = linter.lint(&file.path)?;
    let score = parse::parse_score(&out)?;
    let messages = parse::parse_messages(&out);
    let record = AnalysisRecord {
        file: file.file_name.clone(),
        path: file.folder_name(),
        flags: messages.len(),
        score,
    };
    let report = linter.statement_report(&file.path)?;
    Ok(FileAnalysis {
        record,
        messages,
        statement: parse::parse_statement_line(&report),
    })
}

/// Analyze `files` in order, logging and keeping each failure.
pub fn run_analysis(linter: &dyn Linter, files: &[SourceFile], show_progress: bool) -> Vec<FileOutcome> {
    let pb = progress::file_bar(files.len(), "Running linter", show_progress);
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let res = analyze_file(linter, file);
        if let Err(e) = &res {
            tracing::error!(file = %file.path.display(), "error processing file: {e}");
        }
        outcomes.push((file.clone(), res));
        pb.inc(1);
    }
    pb.finish_and_clear();
    outcomes
}
