//! Scroll-triggered reveal of page sections.
//!
//! The host observes elements entering the viewport and asks [`Reveal`] what
//! to do with each intersection report. Sections start hidden, are shown with
//! an entrance animation the first time they intersect and, in trigger-once
//! mode, are no longer observed afterwards.

use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLD};

/// Entrance animations the stylesheet provides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealAnimation {
    #[default]
    FadeIn,
    SlideInUp,
    SlideInLeft,
    SlideInRight,
    ScaleUp,
}

impl RevealAnimation {
    /// Parse a `data-reveal` value; unknown or empty values fall back to a fade.
    pub fn parse(name: &str) -> Self {
        match name {
            "slide-in-up" => Self::SlideInUp,
            "slide-in-left" => Self::SlideInLeft,
            "slide-in-right" => Self::SlideInRight,
            "scale-up" => Self::ScaleUp,
            _ => Self::FadeIn,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::FadeIn => "animate-fade-in",
            Self::SlideInUp => "animate-slide-in-up",
            Self::SlideInLeft => "animate-slide-in-left",
            Self::SlideInRight => "animate-slide-in-right",
            Self::ScaleUp => "animate-scale-up",
        }
    }
}

/// Delay class for a section-level delay in ms; none for zero.
pub fn delay_class(delay_ms: u32) -> Option<String> {
    (delay_ms > 0).then(|| format!("animate-delay-{}", delay_ms))
}

/// Start offset of the `index`-th item of a staggered group.
#[inline]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub trigger_once: bool,
    pub stagger_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
            trigger_once: true,
            stagger_ms: REVEAL_STAGGER_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the animation class; stop observing when `unobserve` is set.
    Show { unobserve: bool },
    /// Back to hidden (only when not trigger-once).
    Hide,
    Nothing,
}

#[derive(Clone, Debug, Default)]
pub struct Reveal {
    pub options: RevealOptions,
}

impl Reveal {
    pub fn new(options: RevealOptions) -> Self {
        Self { options }
    }

    /// Decide what an intersection report means for a section currently
    /// shown (`visible`) or hidden.
    pub fn on_intersection(&self, visible: bool, intersecting: bool) -> RevealAction {
        if intersecting {
            RevealAction::Show {
                unobserve: self.options.trigger_once,
            }
        } else if visible && !self.options.trigger_once {
            RevealAction::Hide
        } else {
            RevealAction::Nothing
        }
    }

    /// With reduced motion everything is shown up front and nothing observed.
    #[inline]
    pub fn needs_observer(&self, prefers_reduced_motion: bool) -> bool {
        !prefers_reduced_motion
    }
}
