//! Product carousel paging.
//!
//! The track is translated by `current_index * stride` where `stride` is one
//! card's width plus its horizontal margins, measured by the component.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Below this viewport width one card is visible.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Below this viewport width two cards are visible; three otherwise.
pub const TABLET_BREAKPOINT_PX: f64 = 992.0;

/// Cards visible at a given viewport width.
pub fn visible_count_for_width(width: f64) -> usize {
    if width < MOBILE_BREAKPOINT_PX {
        1
    } else if width < TABLET_BREAKPOINT_PX {
        2
    } else {
        3
    }
}

/// Pager over a fixed list of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub visible_count: usize,
    pub item_count: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self { current_index: 0, visible_count: 3, item_count: 0 }
    }
}

impl CarouselState {
    pub fn new(item_count: usize, viewport_width: f64) -> Self {
        Self { current_index: 0, visible_count: visible_count_for_width(viewport_width), item_count }
    }

    /// Largest valid index; zero when every card fits.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1).min(self.max_index());
    }

    pub fn prev(&mut self) {
        self.current_index = self.current_index.saturating_sub(1).min(self.max_index());
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index()
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_index > 0
    }

    /// Auto-advance step, wrapping back to the first page.
    ///
    /// Does nothing while the page is hidden or with fewer than two cards.
    /// Returns whether the index moved.
    pub fn tick(&mut self, page_visible: bool) -> bool {
        if !page_visible || self.item_count <= 1 {
            return false;
        }
        let before = self.current_index;
        self.current_index = (self.current_index + 1) % (self.max_index() + 1);
        self.current_index != before
    }

    /// React to a viewport resize. A change in visible cards resets to the
    /// first page; returns whether that happened.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let visible = visible_count_for_width(viewport_width);
        if visible == self.visible_count {
            return false;
        }
        self.visible_count = visible;
        self.current_index = 0;
        true
    }

    /// Horizontal translation of the track in pixels (negative = left).
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_px(&self, stride_px: f64) -> f64 {
        -(self.current_index as f64) * stride_px
    }
}
