//! Pipeline driver.
//!
//! Runs the stages strictly in order:
//! `Init → DirectoriesEnsured → FilesDiscovered → Analyzed → ReportWritten →
//! DiagramsGenerated → Done`. Per-file and diagram failures are absorbed;
//! any other error ends the run.

use crate::aggregate::aggregate;
use crate::config::Settings;
use crate::diagram::DiagramGenerator;
use crate::discover::{gather_source_files, SOURCE_EXTENSION};
use crate::error::PipelineError;
use crate::models::FileFailure;
use crate::report::write_report;
use crate::runner::{run_analysis, Linter};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    DirectoriesEnsured,
    FilesDiscovered,
    Analyzed,
    ReportWritten,
    DiagramsGenerated,
    Done,
}

#[derive(Debug, Clone)]
/// What a completed run did.
pub struct RunSummary {
    pub files_discovered: usize,
    pub files_analyzed: usize,
    pub failures: Vec<FileFailure>,
    pub report_path: PathBuf,
    /// Error text when diagram generation failed.
    pub diagram_error: Option<String>,
    pub elapsed: Duration,
}

fn enter(stage: &mut Stage, next: Stage) {
    tracing::debug!(from = ?*stage, to = ?next, "stage");
    *stage = next;
}

/// Run the full pipeline once.
pub fn run(
    settings: &Settings,
    linter: &dyn Linter,
    diagrams: &dyn DiagramGenerator,
    show_progress: bool,
) -> Result<RunSummary, PipelineError> {
    let started = Instant::now();
    let mut stage = Stage::Init;

    let meta = fs::metadata(&settings.root).map_err(|source| PipelineError::Root {
        path: settings.root.clone(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(PipelineError::RootNotDir {
            path: settings.root.clone(),
        });
    }

    for dir in [&settings.lint_output_dir, &settings.diagram_output_dir] {
        fs::create_dir_all(dir).map_err(|source| PipelineError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }
    enter(&mut stage, Stage::DirectoriesEnsured);

    let by_folder = gather_source_files(&settings.root, SOURCE_EXTENSION)?;
    let files = by_folder.source_files(&settings.root);
    enter(&mut stage, Stage::FilesDiscovered);

    let outcomes = run_analysis(linter, &files, show_progress);
    let report = aggregate(outcomes);
    enter(&mut stage, Stage::Analyzed);

    let report_path = settings.report_path();
    write_report(&report, &report_path)?;
    enter(&mut stage, Stage::ReportWritten);

    let diagram_error = match diagrams.generate(
        &settings.root,
        &settings.diagram_output_dir,
        &settings.diagram_log_path(),
    ) {
        Ok(()) => None,
        Err(e) => {
            tracing::error!("error running diagram tool: {e}");
            Some(e.to_string())
        }
    };
    enter(&mut stage, Stage::DiagramsGenerated);

    let summary = RunSummary {
        files_discovered: files.len(),
        files_analyzed: report.summary.len(),
        failures: report.failures,
        report_path,
        diagram_error,
        elapsed: started.elapsed(),
    };
    enter(&mut stage, Stage::Done);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::tests::StubDiagrams;
    use crate::runner::tests::StubLinter;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use std::path::Path;
    use tempfile::tempdir;

    /// Sheet name -> rows as display strings, header included.
    fn read_back(path: &Path) -> Vec<(String, Vec<Vec<String>>)> {
        let mut wb: Xlsx<_> = open_workbook(path).unwrap();
        wb.sheet_names()
            .into_iter()
            .map(|name| {
                let range = wb.worksheet_range(&name).unwrap();
                let rows = range
                    .rows()
                    .map(|r| r.iter().map(Data::to_string).collect())
                    .collect();
                (name, rows)
            })
            .collect()
    }

    fn two_file_tree() -> (tempfile::TempDir, StubLinter) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "").unwrap();
        fs::write(dir.path().join("b.py"), "").unwrap();
        let mut stub = StubLinter::default();
        stub.lint.insert(
            "a.py".into(),
            "Your code has been rated at 10.00/10\n".into(),
        );
        stub.lint.insert(
            "b.py".into(),
            "Module b\nb.py:1:0: C0114\nb.py:2:0: C0116\nb.py:3:0: W0611\nYour code has been rated at 6.00/10\n"
                .into(),
        );
        (dir, stub)
    }

    #[test]
    fn test_two_files_end_to_end() {
        let (dir, stub) = two_file_tree();
        let settings = Settings::with_root(dir.path());
        let files = gather_source_files(dir.path(), SOURCE_EXTENSION)
            .unwrap()
            .source_files(dir.path());
        let report = aggregate(run_analysis(&stub, &files, false));
        assert_eq!(report.summary.len(), 2);
        let a = report.summary.iter().find(|r| r.file == "a.py").unwrap();
        assert_eq!((a.flags, a.score), (0, Some(10.0)));
        let b = report.summary.iter().find(|r| r.file == "b.py").unwrap();
        assert_eq!((b.flags, b.score), (3, Some(6.0)));
        assert_eq!(report.messages.len(), 3);
        assert!(report.messages.iter().all(|m| m.file == "b.py"));

        let summary = run(&settings, &stub, &StubDiagrams { fail: false }, false).unwrap();
        assert_eq!(summary.files_discovered, 2);
        assert_eq!(summary.files_analyzed, 2);
        assert!(summary.failures.is_empty());
        assert!(settings.diagram_log_path().is_file());

        let sheets = read_back(&summary.report_path);
        let names: Vec<_> = sheets.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Summary", "All Messages", "Statements Analyzed"]);
        let rows = &sheets[0].1;
        assert_eq!(rows[0], vec!["File", "Path", "Flags", "Score"]);
        assert_eq!(rows.len(), 3);
        let b_row = rows.iter().find(|r| r[0] == "b.py").unwrap();
        assert_eq!((b_row[2].as_str(), b_row[3].as_str()), ("3", "6"));
        let messages = &sheets[1].1;
        assert_eq!(messages[0], vec!["File", "Message"]);
        assert_eq!(messages.len(), 4);
        assert!(messages[1..].iter().all(|r| r[0] == "b.py"));
        assert_eq!(sheets[2].1, vec![vec!["File", "Statement"]]);
    }

    #[test]
    fn test_diagram_failure_still_completes_with_report() {
        let (dir, stub) = two_file_tree();
        let settings = Settings::with_root(dir.path());
        let summary = run(&settings, &stub, &StubDiagrams { fail: true }, false).unwrap();
        assert!(summary.diagram_error.is_some());
        assert!(summary.report_path.is_file());
        assert_eq!(summary.files_analyzed, 2);
    }

    #[test]
    fn test_empty_tree_writes_header_only_report() {
        let dir = tempdir().unwrap();
        let settings = Settings::with_root(dir.path());
        let summary = run(
            &settings,
            &StubLinter::default(),
            &StubDiagrams { fail: false },
            false,
        )
        .unwrap();
        assert_eq!(summary.files_discovered, 0);
        assert_eq!(summary.files_analyzed, 0);
        assert!(settings.lint_output_dir.is_dir());
        assert!(settings.diagram_output_dir.is_dir());

        let sheets = read_back(&summary.report_path);
        assert_eq!(sheets.len(), 3);
        for (name, rows) in &sheets {
            assert_eq!(rows.len(), 1, "sheet {name} should hold only its header");
        }
        assert_eq!(sheets[1].1[0], vec!["File", "Message"]);
    }

    #[test]
    fn test_missing_root_is_fatal_and_not_created() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("srcc");
        let settings = Settings::with_root(&root);
        let err = run(
            &settings,
            &StubLinter::default(),
            &StubDiagrams { fail: false },
            false,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Root { .. }));
        assert!(!root.exists());
    }

    #[test]
    fn test_root_that_is_a_file_is_fatal() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("main.py");
        fs::write(&root, "").unwrap();
        let err = run(
            &Settings::with_root(&root),
            &StubLinter::default(),
            &StubDiagrams { fail: false },
            false,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::RootNotDir { .. }));
    }

    #[test]
    fn test_failed_files_are_counted_not_reported() {
        let (dir, mut stub) = two_file_tree();
        stub.missing.push("a.py".into());
        let settings = Settings::with_root(dir.path());
        let summary = run(&settings, &stub, &StubDiagrams { fail: false }, false).unwrap();
        assert_eq!(summary.files_discovered, 2);
        assert_eq!(summary.files_analyzed, 1);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].path.ends_with("a.py"));
    }

    #[test]
    fn test_repeated_runs_give_identical_tables() {
        let (dir, stub) = two_file_tree();
        let files = gather_source_files(dir.path(), SOURCE_EXTENSION)
            .unwrap()
            .source_files(dir.path());
        let first = aggregate(run_analysis(&stub, &files, false));
        let again = gather_source_files(dir.path(), SOURCE_EXTENSION)
            .unwrap()
            .source_files(dir.path());
        let second = aggregate(run_analysis(&stub, &again, false));
        assert_eq!(first, second);
    }

    #[test]
    fn test_uncreatable_output_dir_is_fatal() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut settings = Settings::with_root(dir.path());
        settings.lint_output_dir = blocker.join("reports");
        let err = run(
            &settings,
            &StubLinter::default(),
            &StubDiagrams { fail: false },
            false,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::CreateDir { .. }));
    }
}
