//! Display projection of catalog records
//!
//! Pure functions that shape loaded records into what the list and detail
//! screens show. They are total over any input and idempotent: projecting an
//! already projected result yields the same result.

use smallvec::SmallVec;

use crate::collate::compare_names;
use crate::date::format_optional_date;
use crate::model::{Park, RollerCoaster};

pub const OPERATING_SECTION: &str = "Operating Roller Coasters";
pub const DEFUNCT_SECTION: &str = "Defunct Roller Coasters";

/// A titled group of coasters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSection {
    pub title: &'static str,
    pub items: Vec<RollerCoaster>,
}

impl CatalogSection {
    /// Header text including the item count, e.g. "Operating Roller Coasters (2)"
    pub fn header(&self) -> String {
        format!("{} ({})", self.title, self.items.len())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|c| c.name.as_str())
    }
}

/// At most two sections, operating first
pub type Sections = SmallVec<[CatalogSection; 2]>;

/// A labelled fact about a park
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the detail screen shows for one park
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkDetail {
    pub name: String,
    pub info: Vec<InfoRow>,
    pub sections: Sections,
}

impl ParkDetail {
    pub fn coaster_count(&self) -> usize {
        self.sections.iter().map(CatalogSection::len).sum()
    }
}

/// Named parks sorted by name
pub fn project_parks(parks: &[Park]) -> Vec<Park> {
    let mut named: Vec<Park> = parks.iter().filter(|p| !p.name.is_empty()).cloned().collect();
    named.sort_by(|a, b| compare_names(&a.name, &b.name));
    named
}

/// Named coasters sorted by name and split into operating/defunct sections
///
/// Any status other than `operating` (including none) counts as defunct.
/// Empty sections are left out.
pub fn project_coasters(coasters: &[RollerCoaster]) -> Sections {
    let mut named: Vec<&RollerCoaster> = coasters.iter().filter(|c| !c.name.is_empty()).collect();
    named.sort_by(|a, b| compare_names(&a.name, &b.name));

    let (operating, defunct): (Vec<&RollerCoaster>, Vec<&RollerCoaster>) =
        named.into_iter().partition(|c| c.is_operating());

    [(OPERATING_SECTION, operating), (DEFUNCT_SECTION, defunct)]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(title, items)| CatalogSection {
            title,
            items: items.into_iter().cloned().collect(),
        })
        .collect()
}

/// Concatenate section items back into a flat list, in section order
pub fn flatten(sections: &[CatalogSection]) -> Vec<RollerCoaster> {
    sections.iter().flat_map(|s| s.items.iter().cloned()).collect()
}

/// Address, opening date and telephone, skipping absent or empty values
pub fn info_rows(park: &Park) -> Vec<InfoRow> {
    let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
    [
        ("Address", non_empty(&park.address)),
        ("Operating Since", format_optional_date(park.operating_since.as_deref())),
        ("Telephone", non_empty(&park.telephone)),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|value| InfoRow { label, value }))
    .collect()
}

/// Project a park for the detail screen
pub fn project_detail(park: &Park) -> ParkDetail {
    ParkDetail {
        name: park.name.clone(),
        info: info_rows(park),
        sections: project_coasters(&park.roller_coasters),
    }
}
