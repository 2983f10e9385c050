//! XLSX workbook with one sheet per scheduled category.

use rust_xlsxwriter::{Format, FormatBorder, Workbook};

use crate::error::ExportError;
use crate::models::schedule::ScheduleStore;

/// Sheet added when nothing is scheduled; a workbook needs at least one.
pub const PLACEHOLDER_SHEET: &str = "Escala";

const MIN_COLUMN_WIDTH: usize = 10;
const MAX_COLUMN_WIDTH: usize = 50;

/// Service for rendering the schedule to a spreadsheet
pub struct SpreadsheetExportService;

impl SpreadsheetExportService {
    /// Build the workbook bytes. Sheets are named by category key and appear
    /// in report order; empty categories are skipped.
    pub fn render(schedule: &ScheduleStore) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold().set_border(FormatBorder::Thin);

        for (category, entries) in schedule.populated() {
            let sheet = workbook.add_worksheet();
            sheet.set_name(category.key())?;

            let mut widths: Vec<usize> = Vec::with_capacity(category.column_count());
            for (col, column) in category.columns().iter().enumerate() {
                sheet.write_with_format(0, col as u16, column.label, &header)?;
                widths.push(column.label.chars().count());
            }

            for (row, entry) in entries.iter().enumerate() {
                for (col, value) in entry.values().iter().enumerate() {
                    sheet.write_string(row as u32 + 1, col as u16, value.as_str())?;
                    widths[col] = widths[col].max(value.chars().count());
                }
            }

            for (col, width) in widths.iter().enumerate() {
                let width = (*width + 2).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
                sheet.set_column_width(col as u16, width as f64)?;
            }
        }

        if schedule.is_blank() {
            workbook.add_worksheet().set_name(PLACEHOLDER_SHEET)?;
        }

        let bytes = workbook.save_to_buffer()?;
        log::debug!(
            "Rendered spreadsheet with {} sheets ({} bytes)",
            schedule.populated().count().max(1),
            bytes.len()
        );
        Ok(bytes)
    }
}
