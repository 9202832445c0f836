//! Parkview header chrome
//!
//! Scroll-synchronized title reveal for detail screens:
//!
//! - [`ScrollAnchors`]: layout-measured title/info positions
//! - [`HeaderRevealController`]: decides when the compact header title shows
//! - [`NavigationHost`]: the capability used to set the header title
//!
//! ```rust
//! use parkview_header::HeaderRevealController;
//!
//! let mut titles = Vec::new();
//! let mut host = |title: &str| titles.push(title.to_string());
//!
//! let mut header = HeaderRevealController::new(12.0);
//! header.enter("Six Flags");
//! header.record_title_anchor(100.0);
//! header.on_scroll(80.0, &mut host);
//! header.on_scroll(90.0, &mut host);
//! drop(host);
//!
//! assert_eq!(titles, vec!["Six Flags"]);
//! ```

pub mod anchors;
pub mod host;
pub mod reveal;

pub use anchors::ScrollAnchors;
pub use host::NavigationHost;
pub use reveal::{reveal_events, HeaderRevealController, RevealState};
