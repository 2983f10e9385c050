//! Printable report structure, independent of the PDF backend.

use chrono::NaiveDate;

use crate::models::category::Category;
use crate::models::schedule::ScheduleStore;
use crate::models::settings::ReportSettings;
use crate::services::table::TableView;
use crate::utils::date::format_issue_date;

/// Width shared by every section bar and table, in millimetres.
pub const PRINTABLE_WIDTH_MM: f32 = 190.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TitleBlock {
    pub organization: String,
    pub report_name: String,
    pub issue_line: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub category: Category,
    pub title: &'static str,
    pub table: TableView,
    pub column_width_mm: f32,
}

impl Section {
    fn new(table: TableView) -> Self {
        let column_width_mm = PRINTABLE_WIDTH_MM / table.column_count() as f32;
        Self {
            category: table.category,
            title: table.category.display_title(),
            table,
            column_width_mm,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClosingBlock {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Everything the document exporter prints, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub title: TitleBlock,
    pub sections: Vec<Section>,
    pub closing: Option<ClosingBlock>,
}

impl ReportLayout {
    /// Lay out the schedule. Categories without entries get no section.
    pub fn build(schedule: &ScheduleStore, settings: &ReportSettings, issued_on: NaiveDate) -> Self {
        let title = TitleBlock {
            organization: settings.organization.clone(),
            report_name: settings.report_name.clone(),
            issue_line: format!("DATA DE EMISSÃO: {}", format_issue_date(issued_on)),
        };

        let sections = schedule
            .populated()
            .map(|(category, entries)| Section::new(TableView::new(category, entries)))
            .collect();

        let closing = (!settings.closing_notices.is_empty()).then(|| ClosingBlock {
            heading: settings.closing_heading.clone(),
            lines: settings.closing_notices.clone(),
        });

        Self {
            title,
            sections,
            closing,
        }
    }

    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|section| section.category == category)
    }
}
