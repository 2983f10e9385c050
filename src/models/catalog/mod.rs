//! Reference catalogs offered to the entry forms.
//!
//! Localities and persons are kept per [`Region`]; meeting types form one
//! global list. Lists keep insertion order in storage and are sorted when
//! read for display.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::region::Region;
use crate::utils::text::sort_for_display;

/// The three editable reference lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Locality,
    Person,
    MeetingType,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Locality => write!(f, "Locality"),
            CatalogKind::Person => write!(f, "Person"),
            CatalogKind::MeetingType => write!(f, "Meeting type"),
        }
    }
}

/// Localities and persons belonging to one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionCatalog {
    pub localities: Vec<String>,
    pub persons: Vec<String>,
}

impl RegionCatalog {
    pub fn list(&self, kind: CatalogKind) -> Option<&Vec<String>> {
        match kind {
            CatalogKind::Locality => Some(&self.localities),
            CatalogKind::Person => Some(&self.persons),
            CatalogKind::MeetingType => None,
        }
    }
}

/// All reference data for a session.
///
/// The serialized form doubles as the `[catalogs]` section of the
/// configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceCatalogs {
    pub jaciara: RegionCatalog,
    pub microregion: RegionCatalog,
    pub meeting_types: Vec<String>,
}

impl ReferenceCatalogs {
    /// Catalogs with nothing in them.
    pub fn empty() -> Self {
        Self {
            jaciara: RegionCatalog::default(),
            microregion: RegionCatalog::default(),
            meeting_types: Vec::new(),
        }
    }

    pub fn region(&self, region: Region) -> &RegionCatalog {
        match region {
            Region::Jaciara => &self.jaciara,
            Region::Microregion => &self.microregion,
        }
    }

    pub(crate) fn region_mut(&mut self, region: Region) -> &mut RegionCatalog {
        match region {
            Region::Jaciara => &mut self.jaciara,
            Region::Microregion => &mut self.microregion,
        }
    }

    /// Localities of a region, sorted for display.
    pub fn localities(&self, region: Region) -> Vec<String> {
        sort_for_display(self.region(region).localities.clone())
    }

    /// Persons of a region, sorted for display.
    pub fn persons(&self, region: Region) -> Vec<String> {
        sort_for_display(self.region(region).persons.clone())
    }

    /// Meeting types in the order they were added.
    pub fn meeting_types(&self) -> &[String] {
        &self.meeting_types
    }
}

impl Default for ReferenceCatalogs {
    fn default() -> Self {
        Self {
            jaciara: RegionCatalog {
                localities: to_strings(&[
                    "Jaciara - Central",
                    "Assentamento São Francisco",
                    "Jaciara - Santa Rita",
                    "Reunião Renascer / Usina Pantanal",
                ]),
                persons: to_strings(&[
                    "Irmão Marcos",
                    "Irmão Israel",
                    "Sebastião Leite",
                    "Paulo Casarim",
                    "Robson",
                    "Olegario Muniz",
                    "Irmão Cristiano",
                    "Irmão/Rodizio",
                ]),
            },
            microregion: RegionCatalog {
                localities: to_strings(&[
                    "Irmão Duda - Barroso",
                    "Irmã Marlene - Entre Rios",
                    "Irenópolis",
                    "Assentamento Renascer",
                    "Juscimeira",
                    "Santa Elvira",
                    "Rondonópolis - Central",
                    "Campo Verde - Central",
                ]),
                persons: to_strings(&[
                    "Irmão Ercides",
                    "Irmão Aguinaldo",
                    "Marcos Gomes",
                    "Valmir Silva",
                    "Elias Dourado",
                    "Fabio André",
                    "Dilmar Ferreira",
                ]),
            },
            meeting_types: to_strings(&[
                "Ensaio para Cordas",
                "(Libras)",
                "Acerto Financeiro",
                "Reunião para Porteiros/Som",
                "Admin./Colaboradores",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
