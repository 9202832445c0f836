//! Parkview catalog
//!
//! Loading the bundled park catalog and shaping it for display:
//!
//! - [`Catalog`]: lenient JSON loading and exact-name lookup
//! - [`project_parks`] / [`project_coasters`] / [`project_detail`]: pure projections
//! - [`format_date`]: long-form dates with raw-text fallback
//! - [`compare_names`]: locale-style name ordering
//!
//! ```rust
//! use parkview_catalog::{project_coasters, RollerCoaster};
//!
//! let sections = project_coasters(&[
//!     RollerCoaster::new("Batman", Some("operating")),
//!     RollerCoaster::new("Apollo's Chariot", Some("closed")),
//! ]);
//! assert_eq!(sections[0].header(), "Operating Roller Coasters (1)");
//! assert_eq!(sections[1].header(), "Defunct Roller Coasters (1)");
//! ```

mod collate;
mod date;
mod error;
mod model;
mod projection;

pub use collate::compare_names;
pub use date::{format_date, format_optional_date, parse_date};
pub use error::CatalogError;
pub use model::{Catalog, Park, RollerCoaster, OPERATING_STATUS};
pub use projection::{
    flatten, info_rows, project_coasters, project_detail, project_parks, CatalogSection,
    InfoRow, ParkDetail, Sections, DEFUNCT_SECTION, OPERATING_SECTION,
};
