//! Class/package diagram generation over the whole root.
//!
//! Best-effort: the caller logs a `DiagramError` and carries on.

use crate::error::{DiagramError, ToolError};
use crate::progress;
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

/// The external diagram generator.
pub trait DiagramGenerator {
    /// Generate diagrams for `root` into `out_dir`, sending all tool output to `log`.
    fn generate(&self, root: &Path, out_dir: &Path, log: &Path) -> Result<(), DiagramError>;
}

#[derive(Debug, Clone)]
pub struct DiagramCommand {
    pub program: String,
    pub show_progress: bool,
}

impl DiagramCommand {
    pub fn new(program: impl Into<String>, show_progress: bool) -> Self {
        Self {
            program: program.into(),
            show_progress,
        }
    }
}

/// Arguments for a dot-format run named after the root folder.
pub fn diagram_args(root: &Path, out_dir: &Path) -> Vec<String> {
    let project = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    vec![
        "--all-ancestors".into(),
        "-o".into(),
        "dot".into(),
        "-d".into(),
        out_dir.to_string_lossy().to_string(),
        "-p".into(),
        project,
        ".".into(),
    ]
}

impl DiagramGenerator for DiagramCommand {
    fn generate(&self, root: &Path, out_dir: &Path, log: &Path) -> Result<(), DiagramError> {
        let log_err = |source: std::io::Error| DiagramError::Log {
            path: log.to_path_buf(),
            source,
        };
        let stdout = File::create(log).map_err(log_err)?;
        let stderr = stdout.try_clone().map_err(log_err)?;
        let args = diagram_args(root, out_dir);
        tracing::debug!(program = %self.program, ?args, cwd = %root.display(), "running diagram tool");

        let pb = progress::task_spinner("Running diagram tool", self.show_progress);
        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status();
        pb.finish_and_clear();

        let status = status.map_err(|source| ToolError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(ToolError::Failed {
                program: self.program.clone(),
                status,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Generator that succeeds or fails without spawning anything.
    pub(crate) struct StubDiagrams {
        pub fail: bool,
    }

    impl DiagramGenerator for StubDiagrams {
        fn generate(&self, _root: &Path, _out_dir: &Path, log: &Path) -> Result<(), DiagramError> {
            fs::write(log, "stub").map_err(|source| DiagramError::Log {
                path: log.to_path_buf(),
                source,
            })?;
            if self.fail {
                return Err(ToolError::Spawn {
                    program: "stub".into(),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
                }
                .into());
            }
            Ok(())
        }
    }

    #[test]
    fn test_diagram_args_name_project_after_root() {
        let args = diagram_args(Path::new("/work/myproj"), Path::new("/work/myproj/out"));
        assert_eq!(
            args,
            vec![
                "--all-ancestors",
                "-o",
                "dot",
                "-d",
                "/work/myproj/out",
                "-p",
                "myproj",
                "."
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_output_goes_to_log_and_replaces_it() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("diagram.log");
        fs::write(&log, "old contents that must vanish").unwrap();
        // `echo` stands in for the tool so the log shows what it was given.
        let cmd = DiagramCommand::new("echo", false);
        cmd.generate(dir.path(), &dir.path().join("out"), &log).unwrap();
        let logged = fs::read_to_string(&log).unwrap();
        assert!(logged.starts_with("--all-ancestors -o dot -d"));
        assert!(!logged.contains("old contents"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_error() {
        let dir = tempdir().unwrap();
        let cmd = DiagramCommand::new("false", false);
        let err = cmd
            .generate(dir.path(), dir.path(), &dir.path().join("d.log"))
            .unwrap_err();
        assert!(matches!(err, DiagramError::Tool(ToolError::Failed { .. })));
    }

    #[test]
    fn test_unwritable_log_is_error() {
        let dir = tempdir().unwrap();
        let cmd = DiagramCommand::new("lintsheet-no-such-tool", false);
        let log = dir.path().join("missing").join("d.log");
        let err = cmd.generate(dir.path(), dir.path(), &log).unwrap_err();
        assert!(matches!(err, DiagramError::Log { .. }));
    }
}
