//! Vertical scroll position of the page view and the back-to-top control.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

#[derive(Debug, Clone)]
pub struct Viewport {
    offset: u16,
    /// Largest reachable offset, known once the adapter has laid out the page.
    max_offset: Option<u16>,
    back_to_top_threshold: u16,
    last_behavior: ScrollBehavior,
}

impl Viewport {
    pub fn new(back_to_top_threshold: u16) -> Self {
        Self {
            offset: 0,
            max_offset: None,
            back_to_top_threshold,
            last_behavior: ScrollBehavior::Instant,
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn last_behavior(&self) -> ScrollBehavior {
        self.last_behavior
    }

    pub fn scroll_to(&mut self, offset: u16, behavior: ScrollBehavior) {
        self.offset = match self.max_offset {
            Some(max) => offset.min(max),
            None => offset,
        };
        self.last_behavior = behavior;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.offset as i32 + delta).clamp(0, u16::MAX as i32) as u16;
        self.scroll_to(target, ScrollBehavior::Instant);
    }

    pub fn set_max_offset(&mut self, max_offset: u16) {
        self.max_offset = Some(max_offset);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.offset > self.back_to_top_threshold
    }

    pub fn back_to_top(&mut self) {
        debug!("Back to top from offset {}", self.offset);
        self.scroll_to(0, ScrollBehavior::Smooth);
    }
}
