//! Spreadsheet report writer.
//!
//! The report is one xlsx workbook with three sheets. Tables are built as
//! plain rows first so their shape can be checked without reading xlsx back.

use crate::error::ReportError;
use crate::models::Report;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

pub const SUMMARY_SHEET: &str = "Summary";
pub const MESSAGES_SHEET: &str = "All Messages";
pub const STATEMENTS_SHEET: &str = "Statements Analyzed";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
/// One named sheet: a header row plus data rows.
pub struct SheetTable {
    pub name: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

/// Build the three sheets in workbook order.
pub fn build_tables(report: &Report) -> [SheetTable; 3] {
    let summary = SheetTable {
        name: SUMMARY_SHEET,
        headers: &["File", "Path", "Flags", "Score"],
        rows: report
            .summary
            .iter()
            .map(|r| {
                vec![
                    Cell::Text(r.file.clone()),
                    Cell::Text(r.path.clone()),
                    Cell::Number(r.flags as f64),
                    r.score.map(Cell::Number).unwrap_or(Cell::Empty),
                ]
            })
            .collect(),
    };
    let messages = SheetTable {
        name: MESSAGES_SHEET,
        headers: &["File", "Message"],
        rows: report
            .messages
            .iter()
            .map(|m| vec![Cell::Text(m.file.clone()), Cell::Text(m.message.clone())])
            .collect(),
    };
    let statements = SheetTable {
        name: STATEMENTS_SHEET,
        headers: &["File", "Statement"],
        rows: report
            .statements
            .iter()
            .map(|s| vec![Cell::Text(s.file.clone()), Cell::Text(s.statement.clone())])
            .collect(),
    };
    [summary, messages, statements]
}

/// Write `report` to `path`, replacing any existing file.
pub fn write_report(report: &Report, path: &Path) -> Result<(), ReportError> {
    let wrap = |source: XlsxError| ReportError::Xlsx {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    for table in build_tables(report) {
        write_sheet(&mut workbook, &table, &bold).map_err(wrap)?;
    }
    workbook.save(path).map_err(wrap)?;
    tracing::debug!(
        path = %path.display(),
        rows = report.summary.len(),
        messages = report.messages.len(),
        "report written"
    );
    Ok(())
}

fn write_sheet(workbook: &mut Workbook, table: &SheetTable, header: &Format) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(table.name)?;
    for (col, title) in table.headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }
    for (i, row) in table.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            match cell {
                Cell::Text(s) => {
                    sheet.write_string(r, c, s.as_str())?;
                }
                Cell::Number(n) => {
                    sheet.write_number(r, c, *n)?;
                }
                Cell::Empty => {}
            }
        }
    }
    sheet.autofit();
    Ok(())
}
