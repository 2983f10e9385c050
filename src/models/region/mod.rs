//! Regions partitioning the locality and person catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic grouping of localities and the people serving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Jaciara,
    Microregion,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Jaciara, Region::Microregion];

    /// Label shown in region pickers.
    pub fn label(self) -> &'static str {
        match self {
            Region::Jaciara => "Jaciara",
            Region::Microregion => "Microrregião - MT",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.label() == label)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which regions feed the selection inputs of the entry forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionFilter {
    Only(Region),
    All,
}

impl Default for RegionFilter {
    fn default() -> Self {
        RegionFilter::Only(Region::Jaciara)
    }
}

impl RegionFilter {
    /// Filter choices in the order the picker offers them.
    pub const CHOICES: [RegionFilter; 3] = [
        RegionFilter::Only(Region::Jaciara),
        RegionFilter::Only(Region::Microregion),
        RegionFilter::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RegionFilter::Only(region) => region.label(),
            RegionFilter::All => "Todos",
        }
    }

    /// Regions included by this filter, Jaciara first.
    pub fn regions(self) -> &'static [Region] {
        match self {
            RegionFilter::Only(Region::Jaciara) => &[Region::Jaciara],
            RegionFilter::Only(Region::Microregion) => &[Region::Microregion],
            RegionFilter::All => &Region::ALL,
        }
    }
}

impl From<Region> for RegionFilter {
    fn from(region: Region) -> Self {
        RegionFilter::Only(region)
    }
}
