//! Placeholder screens for tabs without content yet

use crate::navigation::Tab;

pub const PLACEHOLDER_SUBTITLE: &str = "More content will arrive here soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderScreen {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl PlaceholderScreen {
    pub fn for_tab(tab: Tab) -> Self {
        let title = match tab {
            Tab::Park => "Park Overview",
            Tab::RollerCoaster => "Roller Coasters",
            Tab::User => "User Profile",
        };
        Self {
            title,
            subtitle: PLACEHOLDER_SUBTITLE,
        }
    }
}
