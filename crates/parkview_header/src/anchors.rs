//! Layout anchors for scroll-driven header changes
//!
//! Two elements report their measured position independently: the large
//! title (its bottom edge) and the info block below it (its top edge). Either
//! may arrive first, arrive again after a re-layout, or never arrive.

/// Vertical anchors in scroll-content coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollAnchors {
    title_bottom_y: Option<f32>,
    info_block_top_y: Option<f32>,
}

impl ScrollAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the title's bottom edge, replacing any earlier measurement
    pub fn record_title_anchor(&mut self, bottom_y: f32) {
        self.title_bottom_y = Some(bottom_y);
    }

    /// Store the info block's top edge, replacing any earlier measurement
    pub fn record_info_anchor(&mut self, top_y: f32) {
        self.info_block_top_y = Some(top_y);
    }

    pub fn title_anchor(&self) -> Option<f32> {
        self.title_bottom_y
    }

    pub fn info_anchor(&self) -> Option<f32> {
        self.info_block_top_y
    }

    /// The info block's top if measured, else the title's bottom
    pub fn effective_anchor(&self) -> Option<f32> {
        self.info_block_top_y.or(self.title_bottom_y)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_anchor() {
        assert_eq!(ScrollAnchors::new().effective_anchor(), None);
    }

    #[test]
    fn test_info_anchor_wins_in_either_order() {
        let mut title_first = ScrollAnchors::new();
        title_first.record_title_anchor(56.0);
        assert_eq!(title_first.effective_anchor(), Some(56.0));
        title_first.record_info_anchor(68.0);
        assert_eq!(title_first.effective_anchor(), Some(68.0));

        let mut info_first = ScrollAnchors::new();
        info_first.record_info_anchor(68.0);
        info_first.record_title_anchor(56.0);
        assert_eq!(info_first.effective_anchor(), Some(68.0));
    }

    #[test]
    fn test_remeasure_overwrites() {
        let mut anchors = ScrollAnchors::new();
        anchors.record_title_anchor(56.0);
        anchors.record_title_anchor(80.0);
        assert_eq!(anchors.effective_anchor(), Some(80.0));

        anchors.clear();
        assert_eq!(anchors, ScrollAnchors::default());
    }
}
