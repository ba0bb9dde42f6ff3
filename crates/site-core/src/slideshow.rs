//! Services carousel state.
//!
//! The track renders the card list twice back to back. The index walks
//! through both copies; once it enters the second copy, it snaps back by one
//! copy length with the slide transition switched off, which reads as an
//! endless loop. Time is fed in explicitly through [`Slideshow::advance`].

use crate::constants::{SLIDE_AUTO_ADVANCE_MS, SLIDE_CARD_WIDTH_PX, SLIDE_SETTLE_MS};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Slideshow {
    len: usize,
    index: usize,
    paused: bool,
    transitioning: bool,
    reenable_transition: bool,
    auto_elapsed: Duration,
    settle_elapsed: Duration,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            paused: false,
            transitioning: true,
            reenable_transition: false,
            auto_elapsed: Duration::ZERO,
            settle_elapsed: Duration::ZERO,
        }
    }

    #[inline]
    fn span(&self) -> usize {
        (self.len * 2).max(1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the track should animate its transform right now.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Card highlighted in the dot indicator.
    pub fn active_dot(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.index % self.len
        }
    }

    /// Horizontal track offset in CSS pixels.
    pub fn translate_x(&self) -> f32 {
        -(self.index as f32) * SLIDE_CARD_WIDTH_PX
    }

    fn set_index(&mut self, index: usize) {
        if index != self.index {
            self.index = index;
            self.auto_elapsed = Duration::ZERO;
            self.settle_elapsed = Duration::ZERO;
        }
    }

    pub fn next(&mut self) {
        self.set_index((self.index + 1) % self.span());
    }

    pub fn prev(&mut self) {
        let span = self.span();
        self.set_index((self.index + span - 1) % span);
    }

    pub fn go_to(&mut self, index: usize) {
        self.set_index(index.min(self.span() - 1));
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.auto_elapsed = Duration::ZERO;
        log::debug!("[slideshow] paused={}", self.paused);
    }

    /// Let `dt` pass. Returns true when the rendered state changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.len == 0 {
            return false;
        }
        let mut changed = false;
        if self.reenable_transition {
            self.reenable_transition = false;
            self.transitioning = true;
            changed = true;
        }

        self.auto_elapsed += dt;
        self.settle_elapsed += dt;

        if self.index >= self.len && self.settle_elapsed >= Duration::from_millis(SLIDE_SETTLE_MS) {
            self.transitioning = false;
            self.reenable_transition = true;
            self.set_index(self.index - self.len);
            return true;
        }

        if !self.paused && self.auto_elapsed >= Duration::from_millis(SLIDE_AUTO_ADVANCE_MS) {
            self.next();
            changed = true;
        }
        changed
    }
}
