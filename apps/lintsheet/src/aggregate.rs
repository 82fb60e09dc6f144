//! Folds per-file outcomes into the report tables.

use crate::models::{DiagnosticMessage, FileFailure, Report, StatementCount};
use crate::runner::FileOutcome;

/// Partition outcomes into table rows and failures, keeping input order.
pub fn aggregate(outcomes: Vec<FileOutcome>) -> Report {
    let mut report = Report::default();
    for (file, res) in outcomes {
        match res {
            Ok(analysis) => {
                let name = analysis.record.file.clone();
                report
                    .messages
                    .extend(analysis.messages.into_iter().map(|message| DiagnosticMessage {
                        file: name.clone(),
                        message,
                    }));
                if let Some(statement) = analysis.statement {
                    report.statements.push(StatementCount {
                        file: name,
                        statement,
                    });
                }
                report.summary.push(analysis.record);
            }
            Err(e) => report.failures.push(FileFailure {
                path: file.path.to_string_lossy().to_string(),
                error: e.to_string(),
            }),
        }
    }
    report
}
