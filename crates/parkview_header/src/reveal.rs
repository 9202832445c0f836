//! Compact header title reveal
//!
//! The detail screen shows the entity name as a large title at the top of
//! its scroll content. Once that title scrolls out of view, the navigation
//! header takes over and shows the name in compact form.
//!
//! ```text
//! threshold = max(anchor - lead_in, 0)
//!
//!   Hidden --(offset >= threshold)--> Shown
//!   Shown  --(offset <  threshold)--> Hidden
//! ```
//!
//! `lead_in` is the medium spacing token, so the compact title appears just
//! before the large one is fully gone. There is a single threshold and no
//! hysteresis band: oscillating around the boundary toggles the title on
//! every crossing.

use parkview_core::{EventType, StateTransitions};
use parkview_theme::{SpacingToken, TokenSet};

use crate::anchors::ScrollAnchors;
use crate::host::NavigationHost;

/// Scroll position relative to the reveal threshold
pub mod reveal_events {
    use parkview_core::EventType;

    /// Offset at or past the threshold
    pub const SCROLLED_PAST: EventType = 1;
    /// Offset above the threshold
    pub const SCROLLED_ABOVE: EventType = 2;
}

/// Whether the header shows the compact title
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
    #[default]
    Hidden,
    Shown,
}

impl StateTransitions for RevealState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use reveal_events::*;
        match (self, event) {
            (RevealState::Hidden, SCROLLED_PAST) => Some(RevealState::Shown),
            (RevealState::Shown, SCROLLED_ABOVE) => Some(RevealState::Hidden),
            _ => None,
        }
    }
}

/// Drives the header title from scroll offsets and layout anchors
#[derive(Clone, Debug)]
pub struct HeaderRevealController {
    entity: Option<String>,
    anchors: ScrollAnchors,
    state: RevealState,
    lead_in: f32,
    last_offset: Option<f32>,
}

impl HeaderRevealController {
    pub fn new(lead_in: f32) -> Self {
        Self {
            entity: None,
            anchors: ScrollAnchors::new(),
            state: RevealState::Hidden,
            lead_in,
            last_offset: None,
        }
    }

    /// Controller whose lead-in is the medium spacing of `tokens`
    pub fn for_tokens(tokens: &TokenSet) -> Self {
        Self::new(tokens.space(SpacingToken::Md))
    }

    /// Point the controller at `entity`
    ///
    /// Entering a different entity re-arms the controller: state returns to
    /// `Hidden` and anchors are cleared. Returns whether that happened.
    pub fn enter(&mut self, entity: &str) -> bool {
        if self.entity.as_deref() == Some(entity) {
            return false;
        }
        tracing::debug!(entity, "header reveal re-armed");
        self.entity = Some(entity.to_string());
        self.reset();
        true
    }

    /// Back to `Hidden` with no anchors, keeping the entity
    pub fn reset(&mut self) {
        self.anchors.clear();
        self.state = RevealState::Hidden;
        self.last_offset = None;
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn set_lead_in(&mut self, lead_in: f32) {
        self.lead_in = lead_in;
    }

    pub fn lead_in(&self) -> f32 {
        self.lead_in
    }

    pub fn record_title_anchor(&mut self, bottom_y: f32) {
        self.anchors.record_title_anchor(bottom_y);
    }

    pub fn record_info_anchor(&mut self, top_y: f32) {
        self.anchors.record_info_anchor(top_y);
    }

    pub fn anchors(&self) -> &ScrollAnchors {
        &self.anchors
    }

    /// Offset at which the compact title appears, once an anchor is known
    pub fn threshold(&self) -> Option<f32> {
        self.anchors
            .effective_anchor()
            .map(|anchor| (anchor - self.lead_in).max(0.0))
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == RevealState::Shown
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.last_offset
    }

    /// Title text the header should currently show
    pub fn compact_title(&self) -> &str {
        match self.state {
            RevealState::Shown => self.entity.as_deref().unwrap_or_default(),
            RevealState::Hidden => "",
        }
    }

    /// Feed a scroll offset; updates the host title only when the state flips
    pub fn on_scroll(&mut self, offset_y: f32, host: &mut dyn NavigationHost) -> Option<RevealState> {
        self.last_offset = Some(offset_y);
        let threshold = self.threshold()?;

        let event = if offset_y >= threshold {
            reveal_events::SCROLLED_PAST
        } else {
            reveal_events::SCROLLED_ABOVE
        };
        tracing::trace!(offset_y, threshold, state = ?self.state, "header reveal check");

        let next = RevealState::apply(&mut self.state, event)?;
        tracing::debug!(state = ?next, offset_y, threshold, "header title reveal changed");
        host.set_header_title(self.compact_title());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(titles: &mut Vec<String>) -> impl FnMut(&str) + '_ {
        move |t: &str| titles.push(t.to_string())
    }

    #[test]
    fn test_threshold_subtracts_lead_in_and_clamps() {
        let mut ctl = HeaderRevealController::new(12.0);
        assert_eq!(ctl.threshold(), None);
        ctl.record_title_anchor(100.0);
        assert_eq!(ctl.threshold(), Some(88.0));
        ctl.record_info_anchor(4.0);
        assert_eq!(ctl.threshold(), Some(0.0));
    }

    #[test]
    fn test_zero_threshold_shows_at_rest() {
        let mut titles = Vec::new();
        let mut ctl = HeaderRevealController::new(12.0);
        ctl.enter("Tiny");
        ctl.record_title_anchor(10.0);
        ctl.on_scroll(0.0, &mut collect(&mut titles));
        assert_eq!(titles, vec!["Tiny"]);
    }

    #[test]
    fn test_enter_same_entity_keeps_state() {
        let mut titles = Vec::new();
        let mut ctl = HeaderRevealController::new(12.0);
        assert!(ctl.enter("Six Flags"));
        ctl.record_title_anchor(100.0);
        ctl.on_scroll(95.0, &mut collect(&mut titles));
        assert!(ctl.is_shown());

        assert!(!ctl.enter("Six Flags"));
        assert!(ctl.is_shown());
        assert_eq!(ctl.threshold(), Some(88.0));

        assert!(ctl.enter("Cedar Point"));
        assert!(!ctl.is_shown());
        assert_eq!(ctl.threshold(), None);
        assert_eq!(ctl.last_offset(), None);
    }

    #[test]
    fn test_for_tokens_uses_medium_spacing() {
        let ctl = HeaderRevealController::for_tokens(&parkview_theme::themes::LIGHT);
        assert_eq!(ctl.lead_in(), 12.0);
    }
}
