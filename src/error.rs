//! Error types shared by the catalog, form, table and export services.

use thiserror::Error;

use crate::models::catalog::CatalogKind;
use crate::models::category::Category;

/// Failures of catalog, form and schedule operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: CatalogKind, name: String },
    #[error("No entries to remove in {0}")]
    EmptyCategory(Category),
    #[error("Column '{label}' does not exist in {category}")]
    UnknownColumn { category: Category, label: String },
    #[error("'{value}' is not an option for column '{label}'")]
    InvalidOption { label: String, value: String },
    #[error("{category} expects {expected} values, got {found}")]
    ColumnCount {
        category: Category,
        expected: usize,
        found: usize,
    },
}

/// Failures while serializing a schedule export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
    #[error("Failed to write export buffer: {0}")]
    Io(#[from] std::io::Error),
    #[error("Spreadsheet generation failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;
