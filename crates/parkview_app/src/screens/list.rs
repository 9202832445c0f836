//! Park list screen

use parkview_catalog::{project_parks, Catalog, Park};
use parkview_core::events::event_types::{POINTER_DOWN, POINTER_LEAVE, POINTER_UP};
use parkview_core::{Event, EventType, StateTransitions, WidgetId};
use parkview_theme::TokenSet;

use crate::navigation::Route;

/// Row widget ids start here; row `i` is `ROW_ID_BASE + i`
pub const ROW_ID_BASE: WidgetId = 100;

/// Press feedback for a list row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PressState {
    #[default]
    Idle,
    Pressed,
}

impl StateTransitions for PressState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (PressState::Idle, POINTER_DOWN) => Some(PressState::Pressed),
            (PressState::Pressed, POINTER_UP) => Some(PressState::Idle),
            (PressState::Pressed, POINTER_LEAVE) => Some(PressState::Idle),
            _ => None,
        }
    }
}

/// One rendered row
#[derive(Clone, Debug, PartialEq)]
pub struct ParkRow<'a> {
    pub id: WidgetId,
    pub name: &'a str,
    pub opacity: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ParkListScreen {
    parks: Vec<Park>,
    press: Vec<PressState>,
}

impl ParkListScreen {
    pub fn new(catalog: &Catalog) -> Self {
        let parks = project_parks(catalog.parks());
        tracing::debug!(count = parks.len(), "park list projected");
        Self {
            press: vec![PressState::Idle; parks.len()],
            parks,
        }
    }

    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    pub fn len(&self) -> usize {
        self.parks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    pub fn row_id(index: usize) -> WidgetId {
        ROW_ID_BASE + index as WidgetId
    }

    fn row_index(&self, id: WidgetId) -> Option<usize> {
        let index = usize::try_from(id.checked_sub(ROW_ID_BASE)?).ok()?;
        (index < self.parks.len()).then_some(index)
    }

    pub fn press_state(&self, index: usize) -> PressState {
        self.press.get(index).copied().unwrap_or_default()
    }

    /// Rows in display order; pressed rows are dimmed
    pub fn rows(&self, tokens: &TokenSet) -> Vec<ParkRow<'_>> {
        self.parks
            .iter()
            .zip(&self.press)
            .enumerate()
            .map(|(i, (park, press))| ParkRow {
                id: Self::row_id(i),
                name: &park.name,
                opacity: match press {
                    PressState::Pressed => tokens.opacity.disabled,
                    PressState::Idle => 1.0,
                },
            })
            .collect()
    }

    /// Route to push for the park at `index`
    pub fn select(&self, index: usize) -> Option<Route> {
        let park = self.parks.get(index)?;
        Some(Route::ParkDetail {
            park_name: park.name.clone(),
        })
    }

    /// Handle a pointer event; a completed press yields the detail route
    pub fn handle_event(&mut self, event: &Event) -> Option<Route> {
        let index = self.row_index(event.target)?;
        let state = self.press.get_mut(index)?;
        PressState::apply(state, event.event_type)?;

        if event.event_type == POINTER_UP {
            tracing::debug!(park = %self.parks[index].name, "park row pressed");
            return self.select(index);
        }
        None
    }
}
