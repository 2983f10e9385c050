//! Entry forms: one input binding per column of a category.
//!
//! The input kind of each binding comes from the category's column schema.
//! Selection bindings only accept values offered by the current
//! [`SelectionOptions`]; free-text bindings accept anything, empty included.

use crate::error::{Result, ScheduleError};
use crate::models::category::{Category, ColumnKind, ColumnSpec};
use crate::models::entry::Entry;
use crate::models::schedule::ScheduleStore;
use crate::services::filter::SelectionOptions;

/// Current value of one form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

impl FieldInput {
    fn for_kind(kind: ColumnKind, options: &SelectionOptions) -> Self {
        let list = match kind {
            ColumnKind::FreeText => return FieldInput::Text(String::new()),
            ColumnKind::LocalitySelect => &options.localities,
            ColumnKind::PersonSelect => &options.persons,
            ColumnKind::TypeSelect => &options.meeting_types,
        };
        FieldInput::Select {
            options: list.clone(),
            selected: if list.is_empty() { None } else { Some(0) },
        }
    }

    /// The value this input would submit.
    pub fn value(&self) -> &str {
        match self {
            FieldInput::Text(text) => text,
            FieldInput::Select { options, selected } => selected
                .and_then(|index| options.get(index))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }
}

/// A labelled input bound to one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub column: ColumnSpec,
    pub input: FieldInput,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        self.column.label
    }
}

/// Input bindings for a category, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    category: Category,
    fields: Vec<FormField>,
}

impl EntryForm {
    pub fn new(category: Category, options: &SelectionOptions) -> Self {
        let fields = category
            .columns()
            .iter()
            .map(|column| FormField {
                column: *column,
                input: FieldInput::for_kind(column.kind, options),
            })
            .collect();
        Self { category, fields }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn title(&self) -> &'static str {
        self.category.form_title()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn field_mut(&mut self, label: &str) -> Result<&mut FormField> {
        let category = self.category;
        self.fields
            .iter_mut()
            .find(|field| field.column.label == label)
            .ok_or_else(|| ScheduleError::UnknownColumn {
                category,
                label: label.to_string(),
            })
    }

    /// Set a column's value: typed for free text, picked for selections.
    pub fn set(&mut self, label: &str, value: &str) -> Result<()> {
        let field = self.field_mut(label)?;
        match &mut field.input {
            FieldInput::Text(text) => {
                *text = value.to_string();
                Ok(())
            }
            FieldInput::Select { options, selected } => {
                let index = options.iter().position(|option| option == value).ok_or_else(|| {
                    ScheduleError::InvalidOption {
                        label: label.to_string(),
                        value: value.to_string(),
                    }
                })?;
                *selected = Some(index);
                Ok(())
            }
        }
    }

    /// Current values in column order.
    pub fn values(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|field| field.input.value().to_string())
            .collect()
    }

    pub fn to_entry(&self) -> Result<Entry> {
        Entry::new(self.category, self.values())
    }

    /// Append the current values to the schedule.
    ///
    /// Inputs are left as they are so the caller decides whether to reset.
    pub fn submit<'s>(&self, schedule: &'s mut ScheduleStore) -> Result<&'s Entry> {
        let entry = self.to_entry()?;
        log::debug!("Adding entry to {}: {:?}", self.category, entry.values());
        Ok(schedule.push(entry))
    }
}
