//! Scroll-driven header and back-to-top effects.
//!
//! Both flags are a pure function of the vertical offset and are recomputed
//! on every scroll event. Thresholds are strict: an offset equal to a
//! threshold leaves the flag off.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollThresholds;

/// Derived visual state for one scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    /// Header carries the `scrolled` class.
    pub header_scrolled: bool,
    /// Back-to-top button carries the `visible` class.
    pub back_to_top_visible: bool,
}

impl ScrollFlags {
    #[must_use]
    pub fn for_offset(offset: f64, thresholds: ScrollThresholds) -> Self {
        Self {
            header_scrolled: offset > thresholds.header_offset,
            back_to_top_visible: offset > thresholds.back_to_top_offset,
        }
    }
}

/// Tracks the last offset seen and the flags derived from it.
#[derive(Clone, Debug, Default)]
pub struct ScrollController {
    thresholds: ScrollThresholds,
    last_offset: f64,
    flags: ScrollFlags,
}

impl ScrollController {
    #[must_use]
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self { thresholds, last_offset: 0.0, flags: ScrollFlags::default() }
    }

    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    #[must_use]
    pub fn flags(&self) -> ScrollFlags {
        self.flags
    }

    /// Record a scroll event and return the flags for the new offset.
    pub fn on_scroll(&mut self, offset: f64) -> ScrollFlags {
        self.last_offset = offset;
        self.flags = ScrollFlags::for_offset(offset, self.thresholds);
        self.flags
    }
}

/// Keys that activate the back-to-top button when it has focus.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub const HEADER_SCROLLED_CLASS: &str = "scrolled";
pub const BACK_TO_TOP_CLASS: &str = "back-to-top";
pub const BACK_TO_TOP_VISIBLE_CLASS: &str = "visible";
pub const BACK_TO_TOP_LABEL: &str = "Back to top";
pub const BACK_TO_TOP_GLYPH: &str = "\u{2191}";
