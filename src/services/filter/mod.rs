//! Region filter: which catalog entries the entry forms offer.

use crate::models::catalog::{CatalogKind, ReferenceCatalogs};
use crate::models::region::RegionFilter;
use crate::utils::text::sort_for_display;

/// Option lists for the selection inputs of every entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOptions {
    pub localities: Vec<String>,
    pub persons: Vec<String>,
    pub meeting_types: Vec<String>,
}

impl SelectionOptions {
    /// Gather the lists allowed by `filter`.
    ///
    /// `All` concatenates the regions without de-duplicating names that
    /// happen to exist in both.
    pub fn for_filter(catalogs: &ReferenceCatalogs, filter: RegionFilter) -> Self {
        Self {
            localities: filtered(catalogs, filter, CatalogKind::Locality),
            persons: filtered(catalogs, filter, CatalogKind::Person),
            meeting_types: catalogs.meeting_types().to_vec(),
        }
    }
}

fn filtered(catalogs: &ReferenceCatalogs, filter: RegionFilter, kind: CatalogKind) -> Vec<String> {
    let combined: Vec<String> = filter
        .regions()
        .iter()
        .filter_map(|region| catalogs.region(*region).list(kind))
        .flat_map(|list| list.iter().cloned())
        .collect();
    sort_for_display(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::region::Region;

    #[test]
    fn test_single_region_only() {
        let catalogs = ReferenceCatalogs::default();
        let options = SelectionOptions::for_filter(&catalogs, Region::Microregion.into());

        assert_eq!(options.localities.len(), 8);
        assert!(!options.localities.contains(&"Jaciara - Central".to_string()));
        assert_eq!(options.persons[0], "Dilmar Ferreira");
    }

    #[test]
    fn test_all_keeps_duplicates() {
        let mut catalogs = ReferenceCatalogs::empty();
        catalogs.jaciara.localities = vec!["Central".into(), "Norte".into()];
        catalogs.microregion.localities = vec!["Central".into(), "Bela Vista".into()];

        let options = SelectionOptions::for_filter(&catalogs, RegionFilter::All);
        assert_eq!(
            options.localities,
            vec!["Bela Vista", "Central", "Central", "Norte"]
        );
    }

    #[test]
    fn test_meeting_types_ignore_filter() {
        let catalogs = ReferenceCatalogs::default();
        let jaciara = SelectionOptions::for_filter(&catalogs, Region::Jaciara.into());
        let all = SelectionOptions::for_filter(&catalogs, RegionFilter::All);
        assert_eq!(jaciara.meeting_types, all.meeting_types);
        assert_eq!(jaciara.meeting_types[0], "Ensaio para Cordas");
    }
}
