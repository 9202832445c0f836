//! Event types delivered by the host UI
//!
//! The host (a native view tree or a headless driver) translates its own
//! callbacks into these events. Layout events carry the measured frame of an
//! element in scroll-content coordinates; scroll events carry the absolute
//! content offset.

/// Event type identifier
pub type EventType = u32;

/// Identifier of the element an event targets
pub type WidgetId = u64;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_LEAVE: EventType = 5;
    pub const SCROLL: EventType = 30;
    /// Scroll gesture ended
    pub const SCROLL_END: EventType = 31;
    /// An element finished a layout pass
    pub const LAYOUT: EventType = 40;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub target: WidgetId,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    /// Absolute vertical content offset of a scroll container
    Scroll { offset_y: f32 },
    /// Measured frame of an element
    Layout { y: f32, height: f32 },
    None,
}

impl Event {
    pub fn new(event_type: EventType, target: WidgetId, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
        }
    }

    /// Scroll event for the root scroll container
    pub fn scroll(offset_y: f32) -> Self {
        Self::new(event_types::SCROLL, 0, EventData::Scroll { offset_y })
    }

    /// Layout-complete event for `target`
    pub fn layout(target: WidgetId, y: f32, height: f32) -> Self {
        Self::new(event_types::LAYOUT, target, EventData::Layout { y, height })
    }

    pub fn pointer(event_type: EventType, target: WidgetId) -> Self {
        Self::new(event_type, target, EventData::None)
    }

    pub fn mount(target: WidgetId) -> Self {
        Self::new(event_types::MOUNT, target, EventData::None)
    }

    pub fn unmount(target: WidgetId) -> Self {
        Self::new(event_types::UNMOUNT, target, EventData::None)
    }

    /// Scroll offset if this is a scroll event
    pub fn scroll_offset(&self) -> Option<f32> {
        match self.data {
            EventData::Scroll { offset_y } if self.event_type == event_types::SCROLL => {
                Some(offset_y)
            }
            _ => None,
        }
    }

    /// `(y, height)` if this is a layout event
    pub fn layout_frame(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Layout { y, height } if self.event_type == event_types::LAYOUT => {
                Some((y, height))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_event_kind() {
        let scroll = Event::scroll(12.5);
        assert_eq!(scroll.scroll_offset(), Some(12.5));
        assert_eq!(scroll.layout_frame(), None);

        let layout = Event::layout(7, 40.0, 32.0);
        assert_eq!(layout.target, 7);
        assert_eq!(layout.layout_frame(), Some((40.0, 32.0)));
        assert_eq!(layout.scroll_offset(), None);
    }

    #[test]
    fn test_mismatched_type_and_data_is_ignored() {
        let odd = Event::new(event_types::MOUNT, 1, EventData::Scroll { offset_y: 3.0 });
        assert_eq!(odd.scroll_offset(), None);
    }
}
