//! Parkview Theme System
//!
//! Design tokens, light/dark resolution, and token-derived styles.
//!
//! # Overview
//!
//! - **Design tokens**: colors, spacing, typography, radii, opacity
//! - **Token sets**: one frozen [`TokenSet`] per [`ThemeVariant`], stored in statics
//! - **Resolution**: [`ThemeResolver`] merges an explicit choice, the system
//!   preference, and the light default into the active variant
//! - **Styles**: [`styles_for`] derives screen styles; [`StyleCache`] memoizes them
//!
//! # Quick Start
//!
//! ```rust
//! use parkview_theme::{FixedPreference, ThemeOptions, ThemeResolver, ThemeVariant};
//!
//! let system = FixedPreference(Some(ThemeVariant::Dark));
//! let mut theme = ThemeResolver::new(ThemeOptions::default(), &system);
//! assert!(theme.tokens().is_dark);
//!
//! theme.toggle_theme();
//! assert_eq!(theme.variant(), ThemeVariant::Light);
//! ```
//!
//! The resolver is an owned value. Applications create one at the root and
//! pass it (or a shared handle to it) to the screens that need tokens.

pub mod resolver;
pub mod styles;
pub mod system;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use resolver::{
    SubscriptionId, ThemeChange, ThemeListener, ThemeOptions, ThemeResolver, ThemeState,
};
pub use styles::{styles_for, Shadow, StyleCache, StyleSet, TextStyle, ViewStyle};
pub use system::{FixedPreference, SystemPreference};
pub use theme::{ParseVariantError, StatusBarStyle, ThemeBundle, ThemeVariant, TokenSet};
pub use themes::parks::bundle as default_bundle;
pub use tokens::*;
