//! Completion summary rendering.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! same counts plus the per-file failures.

use crate::driver::RunSummary;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::time::Duration;

/// Online renderer for the generated `.dot` files.
pub const GRAPHVIZ_URL: &str = "https://dreampuf.github.io/GraphvizOnline/";

pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Whole minutes and remaining seconds.
pub fn split_elapsed(elapsed: Duration) -> (u64, f64) {
    let secs = elapsed.as_secs_f64();
    let minutes = (secs / 60.0).floor();
    (minutes as u64, secs - minutes * 60.0)
}

pub fn completion_line(elapsed: Duration) -> String {
    let (m, s) = split_elapsed(elapsed);
    format!("Process completed in {} minutes and {:.2} seconds.", m, s)
}

/// Print the run summary in the requested format.
pub fn print_run(summary: &RunSummary, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_run_json(summary)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            let counts = format!(
                "— Summary — files={} analyzed={} failed={}",
                summary.files_discovered,
                summary.files_analyzed,
                summary.failures.len()
            );
            if color {
                println!("{}", counts.bold());
            } else {
                println!("{}", counts);
            }
            for f in &summary.failures {
                let icon = if color {
                    "✖".red().to_string()
                } else {
                    "✖".to_string()
                };
                println!("{} {} — {}", icon, f.path, f.error);
            }
            if let Some(err) = &summary.diagram_error {
                eprintln!(
                    "{} diagram generation failed: {}",
                    crate::utils::warn_prefix(),
                    err
                );
            }
            println!("report: {}", summary.report_path.display());
            println!("{}", completion_line(summary.elapsed));
            println!("Use this link to generate UML: {}", GRAPHVIZ_URL);
        }
    }
}

/// Compose the run summary JSON object (pure) for testing purposes.
pub fn compose_run_json(summary: &RunSummary) -> JsonVal {
    let (minutes, seconds) = split_elapsed(summary.elapsed);
    json!({
        "report": summary.report_path.to_string_lossy(),
        "summary": {
            "files": summary.files_discovered,
            "analyzed": summary.files_analyzed,
            "failed": summary.failures.len(),
        },
        "failures": summary.failures,
        "diagram": {
            "ok": summary.diagram_error.is_none(),
            "error": summary.diagram_error,
        },
        "elapsed": {
            "minutes": minutes,
            "seconds": (seconds * 100.0).round() / 100.0,
        },
        "graphviz": GRAPHVIZ_URL,
    })
}
