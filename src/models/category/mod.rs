//! Meeting categories and their fixed column schemas.
//!
//! Every category owns a static, ordered list of columns. Each column declares
//! which kind of input feeds it, so forms never have to guess from the label
//! text. [`ColumnKind::from_label`] keeps the label convention available as a
//! cross-check for the declared schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a column value is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Any text, including empty.
    FreeText,
    /// One of the localities offered by the current region filter.
    LocalitySelect,
    /// One of the persons offered by the current region filter.
    PersonSelect,
    /// One of the meeting types.
    TypeSelect,
}

impl ColumnKind {
    /// Classify a column label by substring, case-insensitively.
    ///
    /// Checks run in a fixed order and the first match wins: locality
    /// markers, then person role markers, then type/observation markers.
    pub fn from_label(label: &str) -> Self {
        let upper = label.to_uppercase();
        if upper.contains("LOCAL") {
            ColumnKind::LocalitySelect
        } else if ["ATENDENTE", "ANCIÃO", "REGIONAL"]
            .iter()
            .any(|marker| upper.contains(marker))
        {
            ColumnKind::PersonSelect
        } else if upper.contains("TIPO") || upper.contains("OBS") {
            ColumnKind::TypeSelect
        } else {
            ColumnKind::FreeText
        }
    }

    pub fn is_selection(self) -> bool {
        !matches!(self, ColumnKind::FreeText)
    }
}

/// One column of a category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub kind: ColumnKind,
}

const fn col(label: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { label, kind }
}

const DATE_TIME: ColumnSpec = col("DT/HORA", ColumnKind::FreeText);
const LOCALITY: ColumnSpec = col("LOCALIDADE", ColumnKind::LocalitySelect);
const ATTENDANT: ColumnSpec = col("ATENDENTE", ColumnKind::PersonSelect);
const ELDER: ColumnSpec = col("ANCIÃO", ColumnKind::PersonSelect);
const MEETING_TYPE: ColumnSpec = col("TIPO", ColumnKind::TypeSelect);

static EVANGELIZATION_COLUMNS: [ColumnSpec; 3] = [DATE_TIME, LOCALITY, ATTENDANT];
static BAPTISM_COLUMNS: [ColumnSpec; 4] = [
    DATE_TIME,
    LOCALITY,
    col("LOCALIDADE 2", ColumnKind::LocalitySelect),
    ELDER,
];
static REHEARSAL_COLUMNS: [ColumnSpec; 4] = [DATE_TIME, LOCALITY, MEETING_TYPE, ATTENDANT];
static YOUTH_COLUMNS: [ColumnSpec; 4] = [
    DATE_TIME,
    LOCALITY,
    col("OBS", ColumnKind::TypeSelect),
    ELDER,
];
static REGIONAL_COLUMNS: [ColumnSpec; 4] = [
    DATE_TIME,
    LOCALITY,
    ELDER,
    col("ENC. REGIONAL", ColumnKind::PersonSelect),
];
static MISCELLANEOUS_COLUMNS: [ColumnSpec; 4] = [DATE_TIME, LOCALITY, MEETING_TYPE, ATTENDANT];

/// The six kinds of meeting being scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Evangelization,
    Baptisms,
    Rehearsals,
    Youth,
    Regional,
    Miscellaneous,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 6] = [
        Category::Evangelization,
        Category::Baptisms,
        Category::Rehearsals,
        Category::Youth,
        Category::Regional,
        Category::Miscellaneous,
    ];

    /// Internal tag, also used as the spreadsheet sheet name.
    pub fn key(self) -> &'static str {
        match self {
            Category::Evangelization => "Evangelizacao",
            Category::Baptisms => "Batismos",
            Category::Rehearsals => "Cordas",
            Category::Youth => "Mocidade",
            Category::Regional => "Regionais",
            Category::Miscellaneous => "Diversas",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Section header used in the printed report.
    pub fn display_title(self) -> &'static str {
        match self {
            Category::Evangelization => "REUNIÕES DE EVANGELIZAÇÃO",
            Category::Baptisms => "BATISMOS",
            Category::Rehearsals => "ENSAIO PARA CATEGORIA DAS CORDAS",
            Category::Youth => "REUNIÃO PARA MOCIDADE",
            Category::Regional => "ENSAIOS REGIONAIS",
            Category::Miscellaneous => "REUNIÕES DIVERSAS",
        }
    }

    /// Heading of the entry form.
    pub fn form_title(self) -> &'static str {
        match self {
            Category::Evangelization => "Reuniões de Evangelização",
            Category::Baptisms => "Batismos",
            Category::Rehearsals => "Ensaios de Cordas",
            Category::Youth => "Reunião da Mocidade",
            Category::Regional => "Ensaios Regionais",
            Category::Miscellaneous => "Reuniões Diversas",
        }
    }

    /// Short label for tabs.
    pub fn tab_label(self) -> &'static str {
        match self {
            Category::Evangelization => "Evangelização",
            Category::Baptisms => "Batismos",
            Category::Rehearsals => "Cordas",
            Category::Youth => "Mocidade",
            Category::Regional => "Regionais",
            Category::Miscellaneous => "Diversas",
        }
    }

    pub fn columns(self) -> &'static [ColumnSpec] {
        match self {
            Category::Evangelization => &EVANGELIZATION_COLUMNS,
            Category::Baptisms => &BAPTISM_COLUMNS,
            Category::Rehearsals => &REHEARSAL_COLUMNS,
            Category::Youth => &YOUTH_COLUMNS,
            Category::Regional => &REGIONAL_COLUMNS,
            Category::Miscellaneous => &MISCELLANEOUS_COLUMNS,
        }
    }

    pub fn column_labels(self) -> Vec<&'static str> {
        self.columns().iter().map(|column| column.label).collect()
    }

    pub fn column_count(self) -> usize {
        self.columns().len()
    }

    /// Position of a column label within this category.
    pub fn column_index(self, label: &str) -> Option<usize> {
        self.columns().iter().position(|column| column.label == label)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
