//! Spreadsheet workbooks: load from `.xlsx`, `.xlsm`, `.xlsb`, `.xls` or
//! `.ods`, write to `.xlsx`.

use super::row::{parse_row, to_cells};
use super::staging::write_atomically;
use super::traits::{AdvisorLoader, AdvisorWriter, LoadedRecords};
use crate::error::{PipelineError, PipelineResult};
use crate::models::{column, Advisor, COLUMN_HEADERS};
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::path::Path;
use tracing::{debug, info, warn};

/// Name of the single sheet in written workbooks.
pub const SHEET_NAME: &str = "Asesores";

/// Reads advisors from the first worksheet of a workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkbookAdvisorLoader;

impl WorkbookAdvisorLoader {
    pub fn new() -> Self {
        Self
    }
}

impl AdvisorLoader for WorkbookAdvisorLoader {
    fn load_records(&self, source: &Path) -> PipelineResult<LoadedRecords> {
        info!(path = %source.display(), "Reading advisors from workbook");

        let spreadsheet_error = |source_err: calamine::Error| PipelineError::Spreadsheet {
            path: source.to_path_buf(),
            source: source_err,
        };

        let mut workbook = open_workbook_auto(source).map_err(spreadsheet_error)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| PipelineError::EmptyWorkbook(source.to_path_buf()))?
            .map_err(spreadsheet_error)?;

        // The range starts at the first used cell, not necessarily A1
        let (first_row, first_col) = range.start().unwrap_or((0, 0));
        let mut loaded = LoadedRecords::default();

        for (offset, cells) in range.rows().enumerate() {
            let row = first_row as usize + offset;
            if row == 0 {
                continue;
            }

            let mut values = vec![String::new(); first_col as usize];
            values.extend(cells.iter().map(cell_to_string));

            match parse_row(row, &values) {
                Ok(Some(advisor)) => {
                    debug!(row, id = ?advisor.id, "Advisor read");
                    loaded.records.push(advisor);
                }
                Ok(None) => {}
                Err(malformed) => {
                    warn!(path = %source.display(), %malformed, "Skipping malformed row");
                    loaded.malformed.push(malformed);
                }
            }
        }

        info!(
            path = %source.display(),
            records = loaded.records.len(),
            malformed = loaded.malformed.len(),
            "Workbook read complete"
        );
        Ok(loaded)
    }
}

/// Writes advisors to a single-sheet `.xlsx` workbook.
///
/// The header row is bold white on dark blue with thin borders. Ids are
/// numeric cells (an absent id is written as 0); every other field is text,
/// so phone numbers keep their leading digits as typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkbookAdvisorWriter;

impl WorkbookAdvisorWriter {
    pub fn new() -> Self {
        Self
    }

    fn build(records: &[Advisor]) -> Result<Workbook, XlsxError> {
        let header = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_font_size(12)
            .set_background_color(Color::RGB(0x00_00_80))
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, title) in COLUMN_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        for (index, advisor) in records.iter().enumerate() {
            let row = index as u32 + 1;
            sheet.write_number(row, column::ID as u16, advisor.id.unwrap_or(0) as f64)?;
            for (col, value) in to_cells(advisor).iter().enumerate().skip(1) {
                sheet.write_string(row, col as u16, value.as_str())?;
            }
        }

        sheet.autofit();
        Ok(workbook)
    }
}

impl AdvisorWriter for WorkbookAdvisorWriter {
    fn write_records(&self, records: &[Advisor], destination: &Path) -> PipelineResult<()> {
        info!(
            path = %destination.display(),
            records = records.len(),
            "Writing advisors to workbook"
        );

        let workbook_error = |source: XlsxError| PipelineError::WorkbookWrite {
            path: destination.to_path_buf(),
            source,
        };

        let mut workbook = Self::build(records).map_err(workbook_error)?;
        write_atomically(destination, |file| {
            workbook
                .save_to_writer(file.as_file_mut())
                .map_err(workbook_error)
        })?;

        info!(path = %destination.display(), "Workbook written");
        Ok(())
    }
}

/// Render a cell as text; integral numbers lose their trailing `.0`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
