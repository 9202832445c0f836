//! State transitions for interactive controllers
//!
//! Controllers model their interaction state as a small `Copy` enum and
//! describe the transition table in [`StateTransitions::on_event`]. Returning
//! `None` means the event does not move the machine, so callers can skip any
//! side effects tied to state changes.

use std::fmt::Debug;
use std::hash::Hash;

use crate::events::EventType;

/// A flat state machine expressed on the state type itself
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;

    /// Apply `event` to `state` in place, returning the new state on a change
    fn apply(state: &mut Self, event: EventType) -> Option<Self> {
        let next = state.on_event(event)?;
        if next == *state {
            return None;
        }
        tracing::trace!(from = ?state, to = ?next, event, "state transition");
        *state = next;
        Some(next)
    }
}
