//! Scraping of the linter's human-readable output.
//!
//! All knowledge of the text format lives here. A change in the linter's
//! wording makes scores, messages, or statement lines disappear rather than
//! fail, except for a rating line whose score cannot be read.

use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Marks the line carrying the overall score.
pub const RATING_MARKER: &str = "Your code has been rated";
/// Prefix of per-module header lines.
pub const MODULE_HEADER: &str = "Module";
/// Marks the statement summary line of the raw-metrics report.
pub const STATEMENTS_MARKER: &str = "statements analysed";

static SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"at (\d+\.\d+)/10").expect("score regex is valid"));

/// Extract the score from the rating line.
///
/// `Ok(None)` when there is no rating line at all.
pub fn parse_score(text: &str) -> Result<Option<f64>, ParseError> {
    let Some(line) = text.lines().find(|l| l.contains(RATING_MARKER)) else {
        return Ok(None);
    };
    SCORE_RE
        .captures(line)
        .and_then(|c| c[1].parse::<f64>().ok())
        .map(Some)
        .ok_or_else(|| ParseError::UnreadableScore {
            line: line.trim().to_string(),
        })
}

/// Trimmed diagnostic lines in emission order.
///
/// Blank lines, the rating line, and module headers are dropped.
pub fn parse_messages(text: &str) -> Vec<String> {
    text.lines()
        .filter(|l| !l.starts_with(RATING_MARKER) && !l.starts_with(MODULE_HEADER))
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// First line reporting how many statements were analysed.
pub fn parse_statement_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .find(|l| l.contains(STATEMENTS_MARKER))
        .map(str::to_string)
}
