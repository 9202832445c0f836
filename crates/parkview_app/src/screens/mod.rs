//! Screen models
//!
//! Screens hold display data and interaction state. They receive events
//! from the host and report navigation intents back; they never draw.

pub mod detail;
pub mod list;
pub mod placeholder;

pub use detail::{DetailContent, ParkDetailScreen};
pub use list::{ParkListScreen, ParkRow, PressState};
pub use placeholder::PlaceholderScreen;
