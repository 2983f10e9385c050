// Test fixtures - reusable test data
// Provides consistent sessions and entries across the integration tests

#![allow(dead_code)]

use std::io::{Cursor, Read};

use chrono::NaiveDate;
use rlm_schedule::models::category::Category;
use rlm_schedule::models::entry::Entry;
use rlm_schedule::Session;

/// Issue date used for every exported document in tests
pub fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()
}

/// Sample entries, one per category
pub mod entries {
    use super::*;

    pub fn evangelization() -> Entry {
        Entry::new(
            Category::Evangelization,
            ["03/05 19:30", "Juscimeira", "Irmão Israel"],
        )
        .unwrap()
    }

    pub fn baptism() -> Entry {
        Entry::new(
            Category::Baptisms,
            ["10/05 19:00", "Jaciara - Central", "Santa Elvira", "Irmão Marcos"],
        )
        .unwrap()
    }

    pub fn rehearsal() -> Entry {
        Entry::new(
            Category::Rehearsals,
            ["17/05 14:00", "Jaciara - Central", "Ensaio para Cordas", "Paulo Casarim"],
        )
        .unwrap()
    }

    pub fn youth() -> Entry {
        Entry::new(
            Category::Youth,
            ["18/05 09:00", "Irenópolis", "(Libras)", "Irmão Ercides"],
        )
        .unwrap()
    }

    pub fn regional() -> Entry {
        Entry::new(
            Category::Regional,
            ["24/05 15:00", "Rondonópolis - Central", "Irmão Aguinaldo", "Valmir Silva"],
        )
        .unwrap()
    }

    pub fn miscellaneous() -> Entry {
        Entry::new(
            Category::Miscellaneous,
            ["31/05 20:00", "Jaciara - Santa Rita", "Acerto Financeiro", "Robson"],
        )
        .unwrap()
    }

    pub fn for_category(category: Category) -> Entry {
        match category {
            Category::Evangelization => evangelization(),
            Category::Baptisms => baptism(),
            Category::Rehearsals => rehearsal(),
            Category::Youth => youth(),
            Category::Regional => regional(),
            Category::Miscellaneous => miscellaneous(),
        }
    }
}

/// Session with one entry in every category
pub fn full_session() -> Session {
    let mut session = Session::default();
    for category in Category::ALL {
        session.add_entry(entries::for_category(category));
    }
    session
}

/// Names of the worksheets inside an xlsx package, in workbook order
pub fn sheet_names(xlsx: &[u8]) -> Vec<String> {
    let workbook = read_part(xlsx, "xl/workbook.xml");
    workbook
        .split("<sheet ")
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find("name=\"")? + "name=\"".len();
            let end = chunk[start..].find('"')? + start;
            Some(chunk[start..end].to_string())
        })
        .collect()
}

/// Raw XML of one part of an xlsx package
pub fn read_part(xlsx: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(xlsx)).expect("xlsx is a zip archive");
    let mut part = archive.by_name(name).expect("part exists");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("part is utf-8");
    xml
}
