// Property-based tests for catalog editing, filtering and the schedule store

use proptest::prelude::*;
use rlm_schedule::models::catalog::ReferenceCatalogs;
use rlm_schedule::models::category::Category;
use rlm_schedule::models::entry::Entry;
use rlm_schedule::models::region::{Region, RegionFilter};
use rlm_schedule::services::catalog::CatalogEditor;
use rlm_schedule::services::filter::SelectionOptions;
use rlm_schedule::utils::text::sort_for_display;
use rlm_schedule::Session;

fn region() -> impl Strategy<Value = Region> {
    prop_oneof![Just(Region::Jaciara), Just(Region::Microregion)]
}

fn category() -> impl Strategy<Value = Category> {
    (0..Category::ALL.len()).prop_map(|i| Category::ALL[i])
}

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-zãéí ]{1,12}", 0..8)
}

proptest! {
    /// Property: adding the same locality twice leaves exactly one copy
    #[test]
    fn prop_add_locality_is_idempotent(region in region(), name in "[A-Za-z ]{1,16}") {
        let mut catalogs = ReferenceCatalogs::default();
        let mut editor = CatalogEditor::new(&mut catalogs);
        editor.add_locality(region, &name);
        editor.add_locality(region, &name);

        let count = catalogs
            .region(region)
            .localities
            .iter()
            .filter(|l| **l == name)
            .count();
        prop_assert_eq!(count, 1);
    }

    /// Property: "All" equals the sorted concatenation of both regions
    #[test]
    fn prop_all_filter_is_sorted_union(jaciara in names(), micro in names()) {
        let mut catalogs = ReferenceCatalogs::empty();
        catalogs.jaciara.localities = jaciara.clone();
        catalogs.microregion.localities = micro.clone();

        let options = SelectionOptions::for_filter(&catalogs, RegionFilter::All);
        let expected = sort_for_display(jaciara.into_iter().chain(micro).collect());
        prop_assert_eq!(options.localities, expected);
    }

    /// Property: removing the last entry N times empties a category of N entries
    #[test]
    fn prop_remove_last_drains_category(category in category(), n in 0usize..12) {
        let mut session = Session::default();
        for i in 0..n {
            let values = vec![i.to_string(); category.column_count()];
            session.add_entry(Entry::new(category, values).unwrap());
        }

        for _ in 0..n {
            prop_assert!(session.remove_last(category).is_ok());
        }
        prop_assert!(session.schedule().is_empty(category));
        prop_assert!(session.remove_last(category).is_err());
        prop_assert!(session.schedule().is_empty(category));
    }

    /// Property: a cleared category never shows up as a sheet
    #[test]
    fn prop_clear_hides_category_from_layout(category in category()) {
        let mut session = Session::default();
        for c in Category::ALL {
            let values = vec![String::from("x"); c.column_count()];
            session.add_entry(Entry::new(c, values).unwrap());
        }
        session.clear(category);

        let populated: Vec<Category> = session.schedule().populated().map(|(c, _)| c).collect();
        prop_assert!(!populated.contains(&category));
        prop_assert_eq!(populated.len(), 5);
    }
}
