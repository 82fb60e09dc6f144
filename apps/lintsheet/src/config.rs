//! Configuration discovery and effective settings resolution.
//!
//! lintsheet reads `lintsheet.toml|yaml|yml` from the analysis root and
//! merges it with CLI flags to produce `Settings`.
//! Defaults:
//! - `paths.lint_output_dir`: `Pylint Output`
//! - `paths.diagram_output_dir`: `Pyreverse Output`
//! - `paths.report_filename`: `pylint_output.xlsx`
//! - `paths.diagram_log_filename`: `pyreverse_output.log`
//! - `tools.linter`: `pylint`, `tools.diagram`: `pyreverse`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LINT_OUTPUT_DIR: &str = "Pylint Output";
pub const DEFAULT_DIAGRAM_OUTPUT_DIR: &str = "Pyreverse Output";
pub const DEFAULT_REPORT_FILENAME: &str = "pylint_output.xlsx";
pub const DEFAULT_DIAGRAM_LOG_FILENAME: &str = "pyreverse_output.log";
pub const DEFAULT_LINTER: &str = "pylint";
pub const DEFAULT_DIAGRAM_TOOL: &str = "pyreverse";

#[derive(Debug, Default, Deserialize, Clone)]
/// Output locations under `[paths]`.
pub struct PathsCfg {
    pub lint_output_dir: Option<String>,
    pub diagram_output_dir: Option<String>,
    pub report_filename: Option<String>,
    pub diagram_log_filename: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// External programs under `[tools]`.
pub struct ToolsCfg {
    pub linter: Option<String>,
    pub diagram: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintsheet.toml|yaml`.
pub struct LintsheetConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub paths: Option<PathsCfg>,
    #[serde(default)]
    pub tools: Option<ToolsCfg>,
}

/// Values given on the command line; `None` defers to config and defaults.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub root: Option<String>,
    pub lint_output_dir: Option<String>,
    pub diagram_output_dir: Option<String>,
    pub report_filename: Option<String>,
    pub linter: Option<String>,
    pub diagram_tool: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully-resolved configuration passed to every pipeline stage.
pub struct Settings {
    pub root: PathBuf,
    pub lint_output_dir: PathBuf,
    pub diagram_output_dir: PathBuf,
    pub report_filename: String,
    pub diagram_log_filename: String,
    pub linter: String,
    pub diagram_tool: String,
    pub output: String,
}

impl Settings {
    /// Defaults rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Settings {
            lint_output_dir: root.join(DEFAULT_LINT_OUTPUT_DIR),
            diagram_output_dir: root.join(DEFAULT_DIAGRAM_OUTPUT_DIR),
            report_filename: DEFAULT_REPORT_FILENAME.to_string(),
            diagram_log_filename: DEFAULT_DIAGRAM_LOG_FILENAME.to_string(),
            linter: DEFAULT_LINTER.to_string(),
            diagram_tool: DEFAULT_DIAGRAM_TOOL.to_string(),
            output: "human".to_string(),
            root,
        }
    }

    pub fn report_path(&self) -> PathBuf {
        self.lint_output_dir.join(&self.report_filename)
    }

    pub fn diagram_log_path(&self) -> PathBuf {
        self.diagram_output_dir.join(&self.diagram_log_filename)
    }
}

/// Config file found in `root`, if any.
pub fn config_path(root: &Path) -> Option<PathBuf> {
    ["lintsheet.toml", "lintsheet.yaml", "lintsheet.yml"]
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Load `LintsheetConfig` from `lintsheet.toml` or `lintsheet.yaml|yml` if present.
///
/// Unreadable or malformed files are treated as absent.
pub fn load_config(root: &Path) -> Option<LintsheetConfig> {
    let path = config_path(root)?;
    let s = fs::read_to_string(&path).ok()?;
    let parsed = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&s).map_err(|e| e.to_string())
    };
    match parsed {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring malformed config: {e}");
            None
        }
    }
}

/// Resolve `Settings` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides) -> Settings {
    let start = PathBuf::from(cli.root.as_deref().unwrap_or("."));
    let root = fs::canonicalize(&start).unwrap_or(start);
    let cfg = load_config(&root).unwrap_or_default();
    let paths = cfg.paths.unwrap_or_default();
    let tools = cfg.tools.unwrap_or_default();

    let pick = |flag: &Option<String>, file: Option<String>, default: &str| {
        flag.clone().or(file).unwrap_or_else(|| default.to_string())
    };

    let lint_output_dir = pick(&cli.lint_output_dir, paths.lint_output_dir, DEFAULT_LINT_OUTPUT_DIR);
    let diagram_output_dir = pick(
        &cli.diagram_output_dir,
        paths.diagram_output_dir,
        DEFAULT_DIAGRAM_OUTPUT_DIR,
    );

    Settings {
        lint_output_dir: root.join(lint_output_dir),
        diagram_output_dir: root.join(diagram_output_dir),
        report_filename: pick(&cli.report_filename, paths.report_filename, DEFAULT_REPORT_FILENAME),
        diagram_log_filename: paths
            .diagram_log_filename
            .unwrap_or_else(|| DEFAULT_DIAGRAM_LOG_FILENAME.to_string()),
        linter: pick(&cli.linter, tools.linter, DEFAULT_LINTER),
        diagram_tool: pick(&cli.diagram_tool, tools.diagram, DEFAULT_DIAGRAM_TOOL),
        output: pick(&cli.output, cfg.output, "human"),
        root,
    }
}
