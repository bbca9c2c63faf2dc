//! # Carousel Controller
//!
//! Cycles a fixed, ordered set of slides. Timed auto-advance runs on top of
//! manual controls (prev/next, indicators, arrow keys, swipe gestures).
//!
//! ```text
//!            next (i+1 mod N)
//!   ┌──────────────────────────────┐
//!   ▼                              │
//! slide 0 ◄──── prev ────► ... slide N-1
//!      ▲
//!      └─ jump(i) from indicator i
//!
//! auto-advance: repeating timer → next
//! ```
//!
//! Every transition re-bases the auto-advance timer: the pending timer is
//! cancelled and a fresh one scheduled. At most one timer handle is ever
//! live, so manual and automatic advances never stack.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::timer::{TimerId, TimerQueue};

pub const DEFAULT_INTERVAL_MS: u64 = 8000;
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 50;

/// Which arrow-key presses drive the carousel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardScope {
    /// Arrow keys anywhere drive the carousel.
    #[default]
    Global,
    /// Only while the page hosting the carousel is shown.
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy)]
pub struct CarouselConfig {
    pub interval_ms: u64,
    pub swipe_threshold: i32,
    pub keyboard_scope: KeyboardScope,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            keyboard_scope: KeyboardScope::default(),
        }
    }
}

#[derive(Debug)]
pub struct Carousel {
    slides: Vec<bool>,
    indicators: Vec<bool>,
    current: usize,
    timer: Option<TimerId>,
    touch_start_x: Option<i32>,
    config: CarouselConfig,
}

impl Carousel {
    /// `None` for an empty slide set. The carousel starts idle; call
    /// [`Carousel::start`] to show the first slide and begin auto-advance.
    pub fn new(slide_count: usize, indicator_count: usize, config: CarouselConfig) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        if indicator_count != slide_count {
            debug!(
                "Carousel has {} slides but {} indicators",
                slide_count, indicator_count
            );
        }
        Some(Self {
            slides: vec![false; slide_count],
            indicators: vec![false; indicator_count],
            current: 0,
            timer: None,
            touch_start_x: None,
            config,
        })
    }

    pub fn start(&mut self, timers: &mut TimerQueue) {
        self.show_slide(0);
        self.start_auto(timers);
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide_active(&self, index: usize) -> bool {
        self.slides.get(index).copied().unwrap_or(false)
    }

    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    pub fn auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Activates one slide and its indicator. Out-of-range indices are
    /// ignored.
    pub fn show_slide(&mut self, index: usize) {
        if index >= self.slides.len() {
            debug!("Ignoring slide index {} (count {})", index, self.slides.len());
            return;
        }
        self.slides.iter_mut().for_each(|s| *s = false);
        self.indicators.iter_mut().for_each(|i| *i = false);

        self.slides[index] = true;
        if let Some(indicator) = self.indicators.get_mut(index) {
            *indicator = true;
        }
        self.current = index;
        debug!("Carousel showing slide {}", index);
    }

    pub fn next_slide(&mut self, timers: &mut TimerQueue) {
        let next = (self.current + 1) % self.slides.len();
        self.show_slide(next);
        self.reset_auto(timers);
    }

    pub fn prev_slide(&mut self, timers: &mut TimerQueue) {
        let prev = if self.current == 0 {
            self.slides.len() - 1
        } else {
            self.current - 1
        };
        self.show_slide(prev);
        self.reset_auto(timers);
    }

    /// Indicator click.
    pub fn jump(&mut self, index: usize, timers: &mut TimerQueue) {
        if index >= self.slides.len() {
            return;
        }
        self.show_slide(index);
        self.reset_auto(timers);
    }

    /// Starts auto-advance, replacing any live timer.
    pub fn start_auto(&mut self, timers: &mut TimerQueue) {
        self.stop_auto(timers);
        self.timer = Some(timers.start_repeating(self.config.interval_ms));
    }

    pub fn stop_auto(&mut self, timers: &mut TimerQueue) {
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
        }
    }

    pub fn reset_auto(&mut self, timers: &mut TimerQueue) {
        self.start_auto(timers);
    }

    /// Handles a fired timer. Returns `false` if the timer is not ours.
    pub fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.next_slide(timers);
        true
    }

    pub fn pointer_enter(&mut self, timers: &mut TimerQueue) {
        self.stop_auto(timers);
    }

    pub fn pointer_leave(&mut self, timers: &mut TimerQueue) {
        self.start_auto(timers);
    }

    /// Backgrounding pauses; foregrounding resumes.
    pub fn set_hidden(&mut self, hidden: bool, timers: &mut TimerQueue) {
        if hidden {
            self.stop_auto(timers);
        } else {
            self.start_auto(timers);
        }
        info!("Carousel {}", if hidden { "paused" } else { "resumed" });
    }

    pub fn touch_start(&mut self, x: i32, timers: &mut TimerQueue) {
        self.touch_start_x = Some(x);
        self.stop_auto(timers);
    }

    /// Ends a gesture. Auto-advance restarts whether or not the gesture
    /// produced a transition.
    pub fn touch_end(&mut self, x: i32, timers: &mut TimerQueue) -> Option<SlideDirection> {
        let direction = self
            .touch_start_x
            .take()
            .and_then(|start| swipe_direction(start, x, self.config.swipe_threshold));

        match direction {
            Some(SlideDirection::Next) => self.next_slide(timers),
            Some(SlideDirection::Prev) => self.prev_slide(timers),
            None => {}
        }
        self.start_auto(timers);
        direction
    }

    /// Arrow keys. `host_visible` is whether the carousel's page is shown.
    /// Returns `true` if the key moved the carousel.
    pub fn key(&mut self, key: ArrowKey, host_visible: bool, timers: &mut TimerQueue) -> bool {
        if self.config.keyboard_scope == KeyboardScope::Visible && !host_visible {
            return false;
        }
        match key {
            ArrowKey::Left => self.prev_slide(timers),
            ArrowKey::Right => self.next_slide(timers),
        }
        true
    }
}

/// Left swipe (end left of start) goes forward, right swipe goes back.
/// Movement within the threshold is not a swipe.
pub fn swipe_direction(start_x: i32, end_x: i32, threshold: i32) -> Option<SlideDirection> {
    if end_x < start_x - threshold {
        Some(SlideDirection::Next)
    } else if end_x > start_x + threshold {
        Some(SlideDirection::Prev)
    } else {
        None
    }
}
