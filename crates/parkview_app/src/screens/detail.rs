//! Park detail screen
//!
//! Shows one park: a large title, the info block, and the coaster sections.
//! Layout measurements of the title and info block anchor the compact header
//! reveal; scroll offsets drive it.

use parkview_catalog::{project_detail, Catalog, ParkDetail};
use parkview_core::event_types::{LAYOUT, MOUNT, SCROLL, UNMOUNT};
use parkview_core::{Event, WidgetId};
use parkview_header::{HeaderRevealController, NavigationHost, RevealState};
use parkview_theme::{SpacingToken, TokenSet};

/// Large title element
pub const TITLE_ID: WidgetId = 1;
/// Info block element (address, opening date, telephone)
pub const INFO_BLOCK_ID: WidgetId = 2;

pub const NOT_FOUND_TITLE: &str = "Park not found";
pub const NOT_FOUND_MESSAGE: &str = "Please go back and try again.";
pub const NO_COASTERS_MESSAGE: &str = "No coasters listed for this park.";

/// What the screen shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailContent {
    /// The requested name is not in the catalog
    NotFound,
    Park(ParkDetail),
}

#[derive(Clone, Debug)]
pub struct ParkDetailScreen {
    park_name: String,
    content: DetailContent,
    header: HeaderRevealController,
}

impl ParkDetailScreen {
    pub fn new(catalog: &Catalog, park_name: &str, tokens: &TokenSet) -> Self {
        let mut screen = Self {
            park_name: String::new(),
            content: DetailContent::NotFound,
            header: HeaderRevealController::for_tokens(tokens),
        };
        screen.open(catalog, park_name);
        screen
    }

    /// Show `park_name`, re-arming the header if the park changed
    pub fn open(&mut self, catalog: &Catalog, park_name: &str) {
        if !self.header.enter(park_name) {
            return;
        }
        self.park_name = park_name.to_string();
        self.content = match catalog.find(park_name) {
            Some(park) => DetailContent::Park(project_detail(park)),
            None => {
                tracing::warn!(park = park_name, "park not found in catalog");
                DetailContent::NotFound
            }
        };
    }

    pub fn park_name(&self) -> &str {
        &self.park_name
    }

    pub fn content(&self) -> &DetailContent {
        &self.content
    }

    pub fn detail(&self) -> Option<&ParkDetail> {
        match &self.content {
            DetailContent::Park(detail) => Some(detail),
            DetailContent::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.content, DetailContent::NotFound)
    }

    /// Message shown in place of the sections, if any
    pub fn empty_message(&self) -> Option<&'static str> {
        match &self.content {
            DetailContent::Park(detail) if detail.sections.is_empty() => Some(NO_COASTERS_MESSAGE),
            DetailContent::Park(_) => None,
            DetailContent::NotFound => Some(NOT_FOUND_MESSAGE),
        }
    }

    pub fn header(&self) -> &HeaderRevealController {
        &self.header
    }

    pub fn reveal_state(&self) -> RevealState {
        self.header.state()
    }

    /// Follow a theme change; the lead-in is the medium spacing token
    pub fn apply_tokens(&mut self, tokens: &TokenSet) {
        self.header.set_lead_in(tokens.space(SpacingToken::Md));
    }

    /// The large title owns the header until it scrolls away
    pub fn mount(&mut self, host: &mut dyn NavigationHost) {
        tracing::debug!(park = %self.park_name, "detail mounted");
        host.set_header_title("");
    }

    pub fn unmount(&mut self) {
        tracing::debug!(park = %self.park_name, "detail unmounted");
        self.header.reset();
    }

    /// Route a host event; returns the reveal state when it flips
    pub fn handle_event(
        &mut self,
        event: &Event,
        host: &mut dyn NavigationHost,
    ) -> Option<RevealState> {
        match event.event_type {
            LAYOUT => {
                let (y, height) = event.layout_frame()?;
                match event.target {
                    TITLE_ID => self.header.record_title_anchor(y + height),
                    INFO_BLOCK_ID => self.header.record_info_anchor(y),
                    _ => {}
                }
                None
            }
            SCROLL => self.header.on_scroll(event.scroll_offset()?, host),
            MOUNT => {
                self.mount(host);
                None
            }
            UNMOUNT => {
                self.unmount();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkview_catalog::Park;
    use parkview_theme::themes::LIGHT;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Park::new("Six Flags")
                .with_coaster("Batman", Some("operating"))
                .with_coaster("Apollo's Chariot", Some("closed")),
            Park::new("Kennywood"),
        ])
    }

    #[test]
    fn test_not_found() {
        let screen = ParkDetailScreen::new(&catalog(), "Nowhere", &LIGHT);
        assert!(screen.is_not_found());
        assert_eq!(screen.empty_message(), Some(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_empty_park_message() {
        let screen = ParkDetailScreen::new(&catalog(), "Kennywood", &LIGHT);
        assert_eq!(screen.empty_message(), Some(NO_COASTERS_MESSAGE));

        let screen = ParkDetailScreen::new(&catalog(), "Six Flags", &LIGHT);
        assert_eq!(screen.empty_message(), None);
        assert_eq!(screen.detail().map(ParkDetail::coaster_count), Some(2));
    }

    #[test]
    fn test_layout_then_scroll_reveals() {
        let mut titles: Vec<String> = Vec::new();
        let mut host = |t: &str| titles.push(t.to_string());

        let mut screen = ParkDetailScreen::new(&catalog(), "Six Flags", &LIGHT);
        screen.handle_event(&Event::mount(0), &mut host);
        screen.handle_event(&Event::layout(TITLE_ID, 60.0, 40.0), &mut host);
        assert_eq!(screen.header().threshold(), Some(88.0));

        screen.handle_event(&Event::scroll(50.0), &mut host);
        assert_eq!(
            screen.handle_event(&Event::scroll(90.0), &mut host),
            Some(RevealState::Shown)
        );
        drop(host);
        assert_eq!(titles, vec!["", "Six Flags"]);
    }

    #[test]
    fn test_info_block_wins() {
        let mut host = |_: &str| {};
        let mut screen = ParkDetailScreen::new(&catalog(), "Six Flags", &LIGHT);
        screen.handle_event(&Event::layout(INFO_BLOCK_ID, 120.0, 80.0), &mut host);
        screen.handle_event(&Event::layout(TITLE_ID, 60.0, 40.0), &mut host);
        assert_eq!(screen.header().threshold(), Some(108.0));
    }

    #[test]
    fn test_unmount_resets() {
        let mut host = |_: &str| {};
        let mut screen = ParkDetailScreen::new(&catalog(), "Six Flags", &LIGHT);
        screen.handle_event(&Event::layout(TITLE_ID, 0.0, 20.0), &mut host);
        screen.handle_event(&Event::scroll(100.0), &mut host);
        assert_eq!(screen.reveal_state(), RevealState::Shown);

        screen.handle_event(&Event::unmount(0), &mut host);
        assert_eq!(screen.reveal_state(), RevealState::Hidden);
        assert_eq!(screen.header().threshold(), None);
    }
}
