//! Parkview application layer
//!
//! Screen models, navigation state, and theme wiring for the park browser.
//! Rendering is left to the host: it forwards events into [`App`] and draws
//! from the screen models and chrome styles it exposes.
//!
//! ```rust
//! use parkview_app::{App, AppConfig};
//! use parkview_catalog::{Catalog, Park};
//! use parkview_core::Event;
//! use parkview_theme::FixedPreference;
//!
//! let catalog = Catalog::new(vec![Park::new("Cedar Point")]);
//! let mut app = App::new(&AppConfig::default(), &FixedPreference::unknown(), catalog);
//!
//! app.open_park("Cedar Point");
//! assert_eq!(app.header_title(), "");
//!
//! app.dispatch(&Event::layout(parkview_app::screens::detail::TITLE_ID, 0.0, 48.0));
//! app.dispatch(&Event::scroll(40.0));
//! assert_eq!(app.header_title(), "Cedar Point");
//! ```

pub mod app;
pub mod config;
pub mod navigation;
pub mod screens;

pub use app::App;
pub use config::{AppConfig, ConfigError, ThemeConfig};
pub use navigation::{
    HeaderStyle, NavigationColors, NavigationTheme, ParkStack, Route, StatusBar, Tab,
    TabBarStyle, TabNavigator,
};
pub use screens::{DetailContent, ParkDetailScreen, ParkListScreen, PlaceholderScreen};
