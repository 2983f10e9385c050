//! Flat table view of a category, plus the two removal operations.

use std::fmt;

use crate::error::{Result, ScheduleError};
use crate::models::category::Category;
use crate::models::entry::Entry;
use crate::models::schedule::ScheduleStore;

/// Rows of one category under its fixed column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub category: Category,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn new(category: Category, entries: &[Entry]) -> Self {
        Self {
            category,
            headers: category.column_labels(),
            rows: entries.iter().map(|entry| entry.values().to_vec()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(f, self.headers.iter().copied(), &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "|-{}-|", rule.join("-|-"))?;
        for row in &self.rows {
            write_row(f, row.iter().map(String::as_str), &widths)?;
        }
        Ok(())
    }
}

fn write_row<'a>(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> fmt::Result {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    writeln!(f, "| {} |", line.join(" | "))
}

/// Review and trim operations over the schedule.
pub struct TableRenderer<'a> {
    schedule: &'a mut ScheduleStore,
}

impl<'a> TableRenderer<'a> {
    pub fn new(schedule: &'a mut ScheduleStore) -> Self {
        Self { schedule }
    }

    pub fn table(&self, category: Category) -> TableView {
        TableView::new(category, self.schedule.entries(category))
    }

    /// Drop the most recent entry of a category.
    pub fn remove_last(&mut self, category: Category) -> Result<Entry> {
        match self.schedule.pop(category) {
            Some(entry) => {
                log::debug!("Removed last entry of {}", category);
                Ok(entry)
            }
            None => {
                log::warn!("Nothing to remove in {}", category);
                Err(ScheduleError::EmptyCategory(category))
            }
        }
    }

    /// Empty a category. Clearing an empty category does nothing.
    pub fn clear(&mut self, category: Category) {
        if !self.schedule.is_empty(category) {
            log::debug!("Clearing {} ({} entries)", category, self.schedule.len(category));
        }
        self.schedule.clear(category);
    }
}
