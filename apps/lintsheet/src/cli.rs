//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintsheet",
    version,
    about = "Lint a source tree and collect the results in a spreadsheet",
    long_about = "lintsheet — runs the linter over every source file under a root, writes a three-sheet xlsx report, then generates class diagrams.\n\nConfiguration precedence: CLI > lintsheet.toml > defaults.",
    after_help = "Examples:\n  lintsheet run\n  lintsheet run --root src --output json\n  lintsheet run --lint-output-dir reports --report-filename lint.xlsx",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current lintsheet version.")]
    Version,
    /// Lint every source file and write the report
    #[command(
        about = "Run the analysis pipeline",
        long_about = "Discover source files, lint each one, write the xlsx report, then run the diagram tool. Per-file and diagram failures are reported but do not stop the run.",
        after_help = "Examples:\n  lintsheet run --root .\n  lintsheet run --linter pylint --diagram-tool pyreverse"
    )]
    Run {
        #[arg(long, help = "Directory to analyze (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Directory for the report (default: \"Pylint Output\")")]
        lint_output_dir: Option<String>,
        #[arg(long, help = "Directory for diagrams and their log (default: \"Pyreverse Output\")")]
        diagram_output_dir: Option<String>,
        #[arg(long, help = "Report file name (default: pylint_output.xlsx)")]
        report_filename: Option<String>,
        #[arg(long, help = "Linter program (default: pylint)")]
        linter: Option<String>,
        #[arg(long, help = "Diagram program (default: pyreverse)")]
        diagram_tool: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
