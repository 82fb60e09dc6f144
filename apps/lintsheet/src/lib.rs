//! lintsheet core library.
//!
//! Runs an external linter over every source file in a tree, scrapes its
//! console output, and writes the results as a three-sheet xlsx report.
//! A diagram generator is run once afterwards, best-effort.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config file discovery and `Settings` resolution.
//! - `discover`: Source file discovery grouped by folder.
//! - `parse`: Scraping of the linter's text output.
//! - `runner`: Per-file linter invocation.
//! - `aggregate`: Folding outcomes into report tables.
//! - `report`: xlsx writer.
//! - `diagram`: Diagram tool invocation.
//! - `driver`: Stage sequencing and timing.
//! - `output`: Human/JSON completion summary.
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod diagram;
pub mod discover;
pub mod driver;
pub mod error;
pub mod models;
pub mod output;
pub mod parse;
pub mod progress;
pub mod report;
pub mod runner;
pub mod utils;
