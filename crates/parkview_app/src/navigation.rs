//! Tab and stack navigation state, and the chrome theme
//!
//! The app has three bottom tabs. The park tab hosts a stack of
//! [`Route`]s: the park list at the root and park details pushed on top.
//! The stack owns the header title of each entry and exposes it to screens
//! through [`NavigationHost`].

use parkview_core::Color;
use parkview_header::NavigationHost;
use parkview_theme::{StatusBarStyle, TokenSet};

/// Bottom tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Park,
    RollerCoaster,
    User,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Park, Tab::RollerCoaster, Tab::User];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Park => "Park",
            Tab::RollerCoaster => "Roller Coaster",
            Tab::User => "User",
        }
    }

    /// Header title shown while the tab is active
    pub fn title(self) -> &'static str {
        self.label()
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Park => "🎡",
            Tab::RollerCoaster => "🎢",
            Tab::User => "👤",
        }
    }
}

/// Which tab is selected
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabNavigator {
    active: Tab,
}

impl TabNavigator {
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Returns true if the selection changed
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        tracing::debug!(from = ?self.active, to = ?tab, "tab selected");
        self.active = tab;
        true
    }
}

/// Screens of the park stack
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    ParkList,
    ParkDetail { park_name: String },
}

impl Route {
    /// Title the header shows when the route is pushed
    pub fn initial_title(&self) -> &'static str {
        match self {
            Route::ParkList => "Parks",
            Route::ParkDetail { .. } => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct StackEntry {
    route: Route,
    title: String,
}

/// Stack of park routes; never empty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkStack {
    entries: Vec<StackEntry>,
}

impl Default for ParkStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ParkStack {
    pub fn new() -> Self {
        Self {
            entries: vec![StackEntry {
                title: Route::ParkList.initial_title().to_string(),
                route: Route::ParkList,
            }],
        }
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(?route, depth = self.entries.len() + 1, "push");
        self.entries.push(StackEntry {
            title: route.initial_title().to_string(),
            route,
        });
    }

    /// Pop the top route; the root stays
    pub fn pop(&mut self) -> Option<Route> {
        if self.entries.len() <= 1 {
            return None;
        }
        let entry = self.entries.pop()?;
        tracing::debug!(route = ?entry.route, "pop");
        Some(entry.route)
    }

    pub fn top(&self) -> &Route {
        static ROOT: Route = Route::ParkList;
        self.entries.last().map_or(&ROOT, |entry| &entry.route)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Header title of the top route
    pub fn header_title(&self) -> &str {
        self.entries.last().map(|e| e.title.as_str()).unwrap_or_default()
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }
}

impl NavigationHost for ParkStack {
    fn set_header_title(&mut self, title: &str) {
        if let Some(entry) = self.entries.last_mut() {
            entry.title.clear();
            entry.title.push_str(title);
        }
    }
}

/// Colors the navigation chrome takes from the theme
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationColors {
    pub primary: Color,
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub border: Color,
    pub notification: Color,
}

/// Theme handed to the navigation container
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationTheme {
    pub dark: bool,
    pub colors: NavigationColors,
}

/// Platform notification badge colors (light, dark)
const NOTIFICATION_LIGHT: Color = Color::rgba8(255, 59, 48, 1.0);
const NOTIFICATION_DARK: Color = Color::rgba8(255, 69, 58, 1.0);

impl NavigationTheme {
    pub fn from_tokens(tokens: &TokenSet) -> Self {
        let c = &tokens.colors;
        Self {
            dark: tokens.is_dark,
            colors: NavigationColors {
                primary: c.primary,
                background: c.background,
                card: c.surface,
                text: c.text_primary,
                border: c.border,
                notification: if tokens.is_dark {
                    NOTIFICATION_DARK
                } else {
                    NOTIFICATION_LIGHT
                },
            },
        }
    }
}

/// Bottom tab bar appearance
#[derive(Clone, Debug, PartialEq)]
pub struct TabBarStyle {
    pub active_tint: Color,
    pub inactive_tint: Color,
    pub background: Color,
    pub border_top: Color,
    pub label_size: f32,
}

impl TabBarStyle {
    pub fn from_tokens(tokens: &TokenSet) -> Self {
        let c = &tokens.colors;
        Self {
            active_tint: c.primary,
            inactive_tint: c.text_muted,
            background: c.surface,
            border_top: c.border,
            label_size: tokens.typography.font_sizes.xs,
        }
    }

    pub fn tint(&self, active: bool) -> Color {
        if active {
            self.active_tint
        } else {
            self.inactive_tint
        }
    }
}

/// Stack header appearance
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderStyle {
    pub background: Color,
    pub tint: Color,
}

impl HeaderStyle {
    pub fn from_tokens(tokens: &TokenSet) -> Self {
        Self {
            background: tokens.colors.surface,
            tint: tokens.colors.text_primary,
        }
    }
}

/// Platform status bar appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusBar {
    pub style: StatusBarStyle,
    pub background: Color,
}

impl StatusBar {
    pub fn from_tokens(tokens: &TokenSet) -> Self {
        Self {
            style: tokens.status_bar_style,
            background: tokens.colors.background,
        }
    }
}
