//! Catalog records and lenient JSON loading
//!
//! The catalog is a bundled document of the form
//! `{ "parks": [ { "name", "address"?, "operating_since"?, "telephone"?,
//! "roller_coasters"?: [ { "name", "status"? } ] } ] }`.
//!
//! Loading never rejects an individual record. Optional fields with the
//! wrong JSON type read as absent, a missing name reads as empty (and is
//! filtered out by the projection), and entries that are not objects are
//! skipped.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::error::CatalogError;

/// Status value marking a coaster as currently running
pub const OPERATING_STATUS: &str = "operating";

const BUNDLED_CATALOG: &str = include_str!("../data/parks.json");

/// A roller coaster inside a park
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RollerCoaster {
    pub name: String,
    pub status: Option<String>,
}

impl RollerCoaster {
    pub fn new(name: impl Into<String>, status: Option<&str>) -> Self {
        Self {
            name: name.into(),
            status: status.map(str::to_string),
        }
    }

    pub fn is_operating(&self) -> bool {
        self.status.as_deref() == Some(OPERATING_STATUS)
    }

    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            name: string_field(obj, "name").unwrap_or_default(),
            status: string_field(obj, "status"),
        })
    }
}

/// A theme park
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Park {
    pub name: String,
    pub address: Option<String>,
    /// ISO date or free text
    pub operating_since: Option<String>,
    pub telephone: Option<String>,
    pub roller_coasters: Vec<RollerCoaster>,
}

impl Park {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_coaster(mut self, name: impl Into<String>, status: Option<&str>) -> Self {
        self.roller_coasters.push(RollerCoaster::new(name, status));
        self
    }

    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let roller_coasters = match obj.get("roller_coasters") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| {
                    let coaster = RollerCoaster::from_value(item);
                    if coaster.is_none() {
                        tracing::warn!(entry = %item, "skipping malformed roller coaster entry");
                    }
                    coaster
                })
                .collect(),
            _ => Vec::new(),
        };

        Some(Self {
            name: string_field(obj, "name").unwrap_or_default(),
            address: string_field(obj, "address"),
            operating_since: string_field(obj, "operating_since"),
            telephone: string_field(obj, "telephone"),
            roller_coasters,
        })
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The loaded park collection, in source order
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    parks: Vec<Park>,
    by_name: FxHashMap<String, usize>,
}

impl Catalog {
    pub fn new(parks: Vec<Park>) -> Self {
        let mut by_name = FxHashMap::default();
        for (idx, park) in parks.iter().enumerate() {
            // First record wins for duplicate names
            by_name.entry(park.name.clone()).or_insert(idx);
        }
        Self { parks, by_name }
    }

    /// Parse a catalog document
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(source)?;
        let Value::Object(root) = root else {
            return Err(CatalogError::InvalidRoot(json_kind(&root)));
        };

        let parks = match root.get("parks") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| {
                    let park = Park::from_value(entry);
                    if park.is_none() {
                        tracing::warn!(entry = %entry, "skipping malformed park entry");
                    }
                    park
                })
                .collect(),
            Some(other) => {
                tracing::warn!(found = json_kind(other), "`parks` is not an array, catalog is empty");
                Vec::new()
            }
            None => Vec::new(),
        };

        tracing::debug!(parks = parks.len(), "catalog loaded");
        Ok(Self::new(parks))
    }

    /// Read and parse a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    /// The catalog shipped with the application
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    pub fn len(&self) -> usize {
        self.parks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    /// Exact-name lookup
    pub fn find(&self, name: &str) -> Option<&Park> {
        self.by_name.get(name).map(|&idx| &self.parks[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::bundled().expect("bundled catalog");
        assert!(!catalog.is_empty());
        let six_flags = catalog.find("Six Flags").expect("Six Flags present");
        assert_eq!(six_flags.roller_coasters.len(), 2);
        assert!(six_flags.roller_coasters[0].is_operating());
    }

    #[test]
    fn test_malformed_fields_read_as_absent() {
        let catalog = Catalog::from_json_str(
            r#"{ "parks": [
                { "name": "Kings Island", "address": 42, "telephone": null,
                  "roller_coasters": [ { "name": "Beast", "status": 7 }, "junk", { "status": "operating" } ] },
                17,
                { "address": "nowhere" }
            ] }"#,
        )
        .expect("valid json");

        assert_eq!(catalog.len(), 2);
        let park = &catalog.parks()[0];
        assert_eq!(park.address, None);
        assert_eq!(park.telephone, None);
        assert_eq!(
            park.roller_coasters,
            vec![RollerCoaster::new("Beast", None), RollerCoaster::new("", Some("operating"))]
        );
        assert_eq!(catalog.parks()[1].name, "");
    }

    #[test]
    fn test_missing_or_mistyped_parks_is_empty() {
        assert!(Catalog::from_json_str("{}").expect("object").is_empty());
        assert!(Catalog::from_json_str(r#"{"parks": "x"}"#).expect("object").is_empty());
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        let err = Catalog::from_json_str("[]").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRoot("an array")));
        assert!(matches!(Catalog::from_json_str("{"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_find_prefers_first_duplicate() {
        let mut first = Park::new("Twin");
        first.telephone = Some("1".into());
        let mut second = Park::new("Twin");
        second.telephone = Some("2".into());
        let catalog = Catalog::new(vec![first, second]);
        assert_eq!(catalog.find("Twin").and_then(|p| p.telephone.as_deref()), Some("1"));
        assert!(catalog.find("twin").is_none());
    }
}
