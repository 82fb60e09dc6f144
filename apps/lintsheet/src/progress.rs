//! Terminal progress indicators.
//!
//! Bars are hidden unless enabled, so callers never branch on visibility.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

const TEMPLATE_BAR: &str = "{msg} [{bar:30}] {pos}/{len} ({elapsed})";
const TEMPLATE_SPINNER: &str = "{spinner} {msg}";

/// Show progress only for human output on an interactive stderr.
pub fn should_show(output: &str) -> bool {
    output != "json" && std::io::stderr().is_terminal()
}

/// Bar with one tick per file.
pub fn file_bar(len: usize, msg: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE_BAR) {
        pb.set_style(style.progress_chars("█▓░"));
    }
    pb.set_message(msg.to_string());
    pb
}

/// Spinner for a single long-running task.
pub fn task_spinner(msg: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(TEMPLATE_SPINNER) {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
