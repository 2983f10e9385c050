//! Document and spreadsheet exports of the whole schedule.
//!
//! Both exports are built fully in memory and handed back as an
//! [`ExportArtifact`] carrying the download name and MIME type.

pub mod layout;
pub mod pdf;
pub mod spreadsheet;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::error::ExportError;
use crate::models::schedule::ScheduleStore;
use crate::models::settings::ReportSettings;

pub use layout::ReportLayout;
pub use pdf::{PdfExportOptions, PdfExportService};
pub use spreadsheet::SpreadsheetExportService;

pub const PDF_MIME: &str = "application/pdf";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// An export ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the bytes into `dir` under the artifact's file name.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create dir {}", dir.display()))?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

fn base_name(settings: &ReportSettings) -> String {
    format!("Escala_RLM_{}", settings.variant.trim())
}

/// Export the schedule as a printable PDF report.
pub fn export_document(
    schedule: &ScheduleStore,
    settings: &ReportSettings,
    issued_on: NaiveDate,
) -> Result<ExportArtifact, ExportError> {
    let layout = ReportLayout::build(schedule, settings, issued_on);
    let options = PdfExportOptions {
        title: settings.report_name.clone(),
        ..PdfExportOptions::default()
    };
    let bytes = PdfExportService::render(&layout, &options)?;

    let file_name = format!("{}.pdf", base_name(settings));
    log::info!("Exported {} ({} sections)", file_name, layout.sections.len());
    Ok(ExportArtifact {
        file_name,
        mime_type: PDF_MIME,
        bytes,
    })
}

/// Export the schedule as a workbook with one sheet per scheduled category.
pub fn export_spreadsheet(
    schedule: &ScheduleStore,
    settings: &ReportSettings,
) -> Result<ExportArtifact, ExportError> {
    let bytes = SpreadsheetExportService::render(schedule)?;

    let file_name = format!("{}.xlsx", base_name(settings));
    log::info!("Exported {}", file_name);
    Ok(ExportArtifact {
        file_name,
        mime_type: XLSX_MIME,
        bytes,
    })
}
