//! A single scheduled occurrence within a category.

use serde::Serialize;

use crate::error::{Result, ScheduleError};
use crate::models::category::Category;

/// One row of a category table: a value per column, in column order.
///
/// The number of values always equals the category's column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    category: Category,
    values: Vec<String>,
}

impl Entry {
    /// Build an entry from values given in the category's column order.
    pub fn new<I, S>(category: Category, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let expected = category.column_count();
        if values.len() != expected {
            return Err(ScheduleError::ColumnCount {
                category,
                expected,
                found: values.len(),
            });
        }
        Ok(Self { category, values })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Values in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Value stored under a column label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.category
            .column_index(label)
            .and_then(|index| self.value(index))
    }

    /// `(label, value)` pairs in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.category
            .columns()
            .iter()
            .zip(&self.values)
            .map(|(column, value)| (column.label, value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_keeps_column_order() {
        let entry = Entry::new(
            Category::Evangelization,
            ["10/05 19:00", "Juscimeira", "Irmão Israel"],
        )
        .unwrap();

        let fields: Vec<_> = entry.fields().collect();
        assert_eq!(
            fields,
            vec![
                ("DT/HORA", "10/05 19:00"),
                ("LOCALIDADE", "Juscimeira"),
                ("ATENDENTE", "Irmão Israel"),
            ]
        );
        assert_eq!(entry.get("ATENDENTE"), Some("Irmão Israel"));
        assert_eq!(entry.get("ANCIÃO"), None);
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let err = Entry::new(Category::Youth, ["a", "b", "c"]).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::ColumnCount {
                category: Category::Youth,
                expected: 4,
                found: 3,
            }
        );
    }

    #[test]
    fn test_empty_values_are_accepted() {
        let entry = Entry::new(Category::Evangelization, ["", "", ""]).unwrap();
        assert!(entry.values().iter().all(String::is_empty));
    }
}
