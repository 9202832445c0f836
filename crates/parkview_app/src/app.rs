//! Application root
//!
//! [`App`] owns the theme resolver, the catalog, and the navigation state.
//! Hosts feed it events and theme changes and read back the screen models
//! and chrome styles to draw.

use std::cell::Cell;
use std::rc::Rc;

use parkview_catalog::Catalog;
use parkview_core::Event;
use parkview_header::RevealState;
use parkview_theme::{
    StyleCache, StyleSet, SystemPreference, ThemeResolver, ThemeVariant, TokenSet,
};

use crate::config::AppConfig;
use crate::navigation::{
    HeaderStyle, NavigationTheme, ParkStack, Route, StatusBar, Tab, TabBarStyle, TabNavigator,
};
use crate::screens::{ParkDetailScreen, ParkListScreen, PlaceholderScreen};

pub struct App {
    theme: ThemeResolver,
    catalog: Catalog,
    tabs: TabNavigator,
    stack: ParkStack,
    list: ParkListScreen,
    detail: Option<ParkDetailScreen>,
    styles: StyleCache,
    status_bar: Rc<Cell<StatusBar>>,
}

impl App {
    pub fn new(config: &AppConfig, system: &dyn SystemPreference, catalog: Catalog) -> Self {
        let mut theme = ThemeResolver::new(config.theme.options(), system);
        let status_bar = Rc::new(Cell::new(StatusBar::from_tokens(theme.tokens())));

        let sink = Rc::clone(&status_bar);
        theme.subscribe(move |change| sink.set(StatusBar::from_tokens(change.tokens)));

        tracing::info!(
            parks = catalog.len(),
            theme = %theme.variant(),
            "app started"
        );

        Self {
            list: ParkListScreen::new(&catalog),
            theme,
            catalog,
            tabs: TabNavigator::default(),
            stack: ParkStack::new(),
            detail: None,
            styles: StyleCache::new(),
            status_bar,
        }
    }

    pub fn theme(&self) -> &ThemeResolver {
        &self.theme
    }

    pub fn tokens(&self) -> &'static TokenSet {
        self.theme.tokens()
    }

    pub fn styles(&mut self) -> &StyleSet {
        self.styles.get(self.theme.tokens())
    }

    pub fn status_bar(&self) -> StatusBar {
        self.status_bar.get()
    }

    pub fn navigation_theme(&self) -> NavigationTheme {
        NavigationTheme::from_tokens(self.tokens())
    }

    pub fn tab_bar_style(&self) -> TabBarStyle {
        TabBarStyle::from_tokens(self.tokens())
    }

    pub fn header_style(&self) -> HeaderStyle {
        HeaderStyle::from_tokens(self.tokens())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // Navigation

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn select_tab(&mut self, tab: Tab) -> bool {
        self.tabs.select(tab)
    }

    /// Placeholder content for tabs other than the park stack
    pub fn placeholder(&self) -> Option<PlaceholderScreen> {
        match self.tabs.active() {
            Tab::Park => None,
            tab => Some(PlaceholderScreen::for_tab(tab)),
        }
    }

    pub fn stack(&self) -> &ParkStack {
        &self.stack
    }

    pub fn list(&self) -> &ParkListScreen {
        &self.list
    }

    /// Detail screen, while it is on top of the park stack
    pub fn detail(&self) -> Option<&ParkDetailScreen> {
        self.detail.as_ref().filter(|_| self.on_detail())
    }

    /// Title the header currently shows
    pub fn header_title(&self) -> &str {
        match self.tabs.active() {
            Tab::Park => self.stack.header_title(),
            tab => tab.title(),
        }
    }

    /// Push the detail screen for `park_name`
    pub fn open_park(&mut self, park_name: &str) {
        self.tabs.select(Tab::Park);
        if self.on_detail() {
            self.unmount_detail();
            self.stack.pop();
        }
        self.stack.push(Route::ParkDetail {
            park_name: park_name.to_string(),
        });

        let tokens = self.theme.tokens();
        match self.detail.as_mut() {
            Some(detail) => {
                detail.open(&self.catalog, park_name);
                detail.apply_tokens(tokens);
            }
            None => self.detail = Some(ParkDetailScreen::new(&self.catalog, park_name, tokens)),
        }
        if let Some(detail) = self.detail.as_mut() {
            detail.mount(&mut self.stack);
        }
    }

    /// Pop the top route; returns false at the root
    pub fn back(&mut self) -> bool {
        if !self.stack.can_go_back() {
            return false;
        }
        self.unmount_detail();
        self.stack.pop().is_some()
    }

    fn on_detail(&self) -> bool {
        matches!(self.stack.top(), Route::ParkDetail { .. })
    }

    fn unmount_detail(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.unmount();
        }
    }

    /// Route an event to the screen on top of the park stack
    ///
    /// Returns the new reveal state when a detail scroll flips the header.
    pub fn dispatch(&mut self, event: &Event) -> Option<RevealState> {
        if self.tabs.active() != Tab::Park {
            return None;
        }
        if self.on_detail() {
            let detail = self.detail.as_mut()?;
            return detail.handle_event(event, &mut self.stack);
        }
        if let Some(Route::ParkDetail { park_name }) = self.list.handle_event(event) {
            self.open_park(&park_name);
        }
        None
    }

    // Theme

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme.set_theme(variant);
        self.sync_tokens();
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle_theme();
        self.sync_tokens();
    }

    pub fn on_system_preference_changed(&mut self, preference: Option<ThemeVariant>) {
        self.theme.on_system_preference_changed(preference);
        self.sync_tokens();
    }

    fn sync_tokens(&mut self) {
        let tokens = self.theme.tokens();
        if let Some(detail) = self.detail.as_mut() {
            detail.apply_tokens(tokens);
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme.variant())
            .field("parks", &self.catalog.len())
            .field("tab", &self.tabs.active())
            .field("route", self.stack.top())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkview_theme::FixedPreference;

    fn app() -> App {
        let catalog = Catalog::new(vec![parkview_catalog::Park::new("Cedar Point")]);
        App::new(&AppConfig::default(), &FixedPreference::unknown(), catalog)
    }

    #[test]
    fn test_back_at_root() {
        let mut app = app();
        assert!(!app.back());
        assert_eq!(app.header_title(), "Parks");
    }

    #[test]
    fn test_placeholder_tabs() {
        let mut app = app();
        assert_eq!(app.placeholder(), None);
        app.select_tab(Tab::User);
        assert_eq!(app.header_title(), "User");
        assert_eq!(app.placeholder().map(|p| p.title), Some("User Profile"));
    }
}
