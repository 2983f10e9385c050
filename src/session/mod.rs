//! Session state: the one object a presentation layer holds on to.
//!
//! A [`Session`] owns the reference catalogs, the schedule, the current
//! region filter and the report settings. It starts from configured defaults
//! and can be reset to them at any time.

use chrono::NaiveDate;

use crate::error::{ExportError, Result};
use crate::models::catalog::ReferenceCatalogs;
use crate::models::category::Category;
use crate::models::entry::Entry;
use crate::models::region::RegionFilter;
use crate::models::schedule::ScheduleStore;
use crate::models::settings::{AppConfig, ReportSettings};
use crate::services::catalog::CatalogEditor;
use crate::services::export::{self, ExportArtifact};
use crate::services::filter::SelectionOptions;
use crate::services::form::EntryForm;
use crate::services::table::{TableRenderer, TableView};
use crate::utils::date::today;

pub struct Session {
    config: AppConfig,
    catalogs: ReferenceCatalogs,
    schedule: ScheduleStore,
    filter: RegionFilter,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Session {
    /// Start a session seeded from `config`.
    pub fn new(config: AppConfig) -> Self {
        Self {
            catalogs: config.catalogs.clone(),
            config,
            schedule: ScheduleStore::new(),
            filter: RegionFilter::default(),
        }
    }

    /// Drop every edit and entry, returning to the configured defaults.
    pub fn reset(&mut self) {
        log::info!(
            "Resetting session ({} entries discarded)",
            self.schedule.total_entries()
        );
        self.catalogs = self.config.catalogs.clone();
        self.schedule.clear_all();
        self.filter = RegionFilter::default();
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.config.report
    }

    pub fn catalogs(&self) -> &ReferenceCatalogs {
        &self.catalogs
    }

    pub fn catalog_editor(&mut self) -> CatalogEditor<'_> {
        CatalogEditor::new(&mut self.catalogs)
    }

    pub fn schedule(&self) -> &ScheduleStore {
        &self.schedule
    }

    pub fn filter(&self) -> RegionFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: RegionFilter) {
        self.filter = filter;
    }

    /// Option lists for the current filter.
    pub fn options(&self) -> SelectionOptions {
        SelectionOptions::for_filter(&self.catalogs, self.filter)
    }

    /// A fresh form for `category` bound to the current options.
    pub fn entry_form(&self, category: Category) -> EntryForm {
        EntryForm::new(category, &self.options())
    }

    pub fn submit(&mut self, form: &EntryForm) -> Result<&Entry> {
        form.submit(&mut self.schedule)
    }

    /// Append an already built entry.
    pub fn add_entry(&mut self, entry: Entry) -> &Entry {
        self.schedule.push(entry)
    }

    pub fn table(&self, category: Category) -> TableView {
        TableView::new(category, self.schedule.entries(category))
    }

    pub fn remove_last(&mut self, category: Category) -> Result<Entry> {
        TableRenderer::new(&mut self.schedule).remove_last(category)
    }

    pub fn clear(&mut self, category: Category) {
        TableRenderer::new(&mut self.schedule).clear(category);
    }

    /// PDF report dated today.
    pub fn export_document(&self) -> Result<ExportArtifact, ExportError> {
        self.export_document_on(today())
    }

    pub fn export_document_on(
        &self,
        issued_on: NaiveDate,
    ) -> Result<ExportArtifact, ExportError> {
        export::export_document(&self.schedule, &self.config.report, issued_on)
    }

    pub fn export_spreadsheet(&self) -> Result<ExportArtifact, ExportError> {
        export::export_spreadsheet(&self.schedule, &self.config.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::models::region::Region;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::default();
        assert!(session.schedule().is_blank());
        assert_eq!(session.filter(), RegionFilter::Only(Region::Jaciara));
        assert_eq!(session.options().localities.len(), 4);
    }

    #[test]
    fn test_filter_changes_form_options() {
        let mut session = Session::default();
        session.set_filter(RegionFilter::All);

        let form = session.entry_form(Category::Evangelization);
        let locality = &form.fields()[1].input;
        match locality {
            crate::services::form::FieldInput::Select { options, .. } => assert_eq!(options.len(), 12),
            other => panic!("expected a selection input, got {:?}", other),
        }
    }

    #[test]
    fn test_reset_restores_catalogs_and_empties_schedule() {
        let mut session = Session::default();
        session.catalog_editor().add_locality(Region::Jaciara, "Central");
        session.set_filter(RegionFilter::All);
        let form = session.entry_form(Category::Youth);
        session.submit(&form).unwrap();

        session.reset();

        assert!(session.schedule().is_blank());
        assert!(!session.catalogs().jaciara.localities.contains(&"Central".to_string()));
        assert_eq!(session.filter(), RegionFilter::default());
    }

    #[test]
    fn test_remove_last_on_empty_is_rejected() {
        let mut session = Session::default();
        assert_eq!(
            session.remove_last(Category::Youth).unwrap_err(),
            ScheduleError::EmptyCategory(Category::Youth)
        );
    }
}
