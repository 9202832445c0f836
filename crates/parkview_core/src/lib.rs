//! Parkview Core
//!
//! Foundational primitives shared by the Parkview crates:
//!
//! - **Colors**: RGBA values usable in `const` token tables
//! - **Events**: layout and scroll events delivered by the host UI
//! - **State transitions**: the small FSM trait used by interactive controllers
//!
//! # Example
//!
//! ```rust
//! use parkview_core::{Color, Event};
//!
//! let primary = Color::hex(0x1F5BD8);
//! assert_eq!(primary.to_css(), "#1f5bd8");
//!
//! let event = Event::scroll(42.0);
//! assert_eq!(event.scroll_offset(), Some(42.0));
//! ```

pub mod color;
pub mod events;
pub mod fsm;

pub use color::Color;
pub use events::{event_types, Event, EventData, EventType, WidgetId};
pub use fsm::StateTransitions;
