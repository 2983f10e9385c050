//! Catalog editor: add and remove localities, persons and meeting types.
//!
//! Adding is forgiving: empty names and duplicates are ignored and reported
//! through the returned flag. Removing a name that is not in the list is an
//! error.

use crate::error::{Result, ScheduleError};
use crate::models::catalog::{CatalogKind, ReferenceCatalogs};
use crate::models::region::Region;

/// Service for editing the reference catalogs of a session.
pub struct CatalogEditor<'a> {
    catalogs: &'a mut ReferenceCatalogs,
}

impl<'a> CatalogEditor<'a> {
    pub fn new(catalogs: &'a mut ReferenceCatalogs) -> Self {
        Self { catalogs }
    }

    /// Add a locality to a region. Returns `false` when nothing was added.
    pub fn add_locality(&mut self, region: Region, name: &str) -> bool {
        add_unique(
            &mut self.catalogs.region_mut(region).localities,
            CatalogKind::Locality,
            name,
        )
    }

    pub fn remove_locality(&mut self, region: Region, name: &str) -> Result<()> {
        remove_one(
            &mut self.catalogs.region_mut(region).localities,
            CatalogKind::Locality,
            name,
        )
    }

    /// Add a person to a region. Returns `false` when nothing was added.
    pub fn add_person(&mut self, region: Region, name: &str) -> bool {
        add_unique(
            &mut self.catalogs.region_mut(region).persons,
            CatalogKind::Person,
            name,
        )
    }

    pub fn remove_person(&mut self, region: Region, name: &str) -> Result<()> {
        remove_one(
            &mut self.catalogs.region_mut(region).persons,
            CatalogKind::Person,
            name,
        )
    }

    /// Add a meeting type. Returns `false` when nothing was added.
    pub fn add_meeting_type(&mut self, name: &str) -> bool {
        add_unique(
            &mut self.catalogs.meeting_types,
            CatalogKind::MeetingType,
            name,
        )
    }

    pub fn remove_meeting_type(&mut self, name: &str) -> Result<()> {
        remove_one(
            &mut self.catalogs.meeting_types,
            CatalogKind::MeetingType,
            name,
        )
    }

    /// Add to whichever list `kind` names. `region` is ignored for meeting types.
    pub fn add(&mut self, kind: CatalogKind, region: Region, name: &str) -> bool {
        match kind {
            CatalogKind::Locality => self.add_locality(region, name),
            CatalogKind::Person => self.add_person(region, name),
            CatalogKind::MeetingType => self.add_meeting_type(name),
        }
    }

    /// Remove from whichever list `kind` names. `region` is ignored for meeting types.
    pub fn remove(&mut self, kind: CatalogKind, region: Region, name: &str) -> Result<()> {
        match kind {
            CatalogKind::Locality => self.remove_locality(region, name),
            CatalogKind::Person => self.remove_person(region, name),
            CatalogKind::MeetingType => self.remove_meeting_type(name),
        }
    }
}

fn add_unique(list: &mut Vec<String>, kind: CatalogKind, name: &str) -> bool {
    if name.is_empty() {
        log::debug!("Ignoring empty {} name", kind);
        return false;
    }
    if list.iter().any(|existing| existing == name) {
        log::debug!("{} '{}' already present", kind, name);
        return false;
    }
    list.push(name.to_string());
    log::debug!("Added {} '{}'", kind, name);
    true
}

fn remove_one(list: &mut Vec<String>, kind: CatalogKind, name: &str) -> Result<()> {
    let Some(index) = list.iter().position(|existing| existing == name) else {
        log::warn!("Cannot remove {} '{}': not found", kind, name);
        return Err(ScheduleError::NotFound {
            kind,
            name: name.to_string(),
        });
    };
    list.remove(index);
    log::debug!("Removed {} '{}'", kind, name);
    Ok(())
}
