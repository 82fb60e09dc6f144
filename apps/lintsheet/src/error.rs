//! Error types for each stage of a run.
//!
//! Per-file (`AnalysisError`) and diagram (`DiagramError`) failures are
//! absorbed by the driver; everything wrapped in `PipelineError` aborts.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure invoking an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` produced output that is not valid UTF-8")]
    NonUtf8 { program: String },
    #[error("`{program}` exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Linter output that could not be interpreted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("rating line has no `X.Y/10` score: {line}")]
    UnreadableScore { line: String },
}

/// Failure analyzing a single source file.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("cannot open diagram log {}: {source}", path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Tool(#[from] ToolError),
}

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report {}: {source}", path.display())]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// Fatal errors that stop the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot read analysis root {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("analysis root is not a directory: {}", path.display())]
    RootNotDir { path: PathBuf },
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Discover(#[from] DiscoverError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
