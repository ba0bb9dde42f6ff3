use crate::constants::{RIPPLE_ALPHA_EPSILON, RIPPLE_ALPHA_STEP, RIPPLE_GROWTH, RIPPLE_START_ALPHA};
use glam::Vec2;

/// One point of the field, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Sampled at creation but not enforced against `vel`.
    pub max_speed: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: Option<Vec2>,
    pub last: Option<Vec2>,
    /// Displacement since the previous move sample.
    pub vel: Vec2,
    pub inside: bool,
}

impl PointerState {
    pub fn moved_to(&mut self, p: Vec2) {
        let last = self.last.unwrap_or(p);
        self.vel = p - last;
        self.last = Some(p);
        self.pos = Some(p);
        self.inside = true;
    }

    pub fn left(&mut self) {
        self.inside = false;
        self.pos = None;
    }

    /// Position the field should react to, if any.
    #[inline]
    pub fn active(&self) -> Option<Vec2> {
        if self.inside {
            self.pos
        } else {
            None
        }
    }
}

/// Expanding, fading ring left by a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Ripple {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            radius: 0.0,
            alpha: RIPPLE_START_ALPHA,
        }
    }

    /// Grow and fade one frame. Returns false once the ripple is spent.
    #[inline]
    pub fn age(&mut self) -> bool {
        self.radius += RIPPLE_GROWTH;
        self.alpha -= RIPPLE_ALPHA_STEP;
        !self.is_spent()
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.alpha <= RIPPLE_ALPHA_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_has_zero_velocity() {
        let mut p = PointerState::default();
        p.moved_to(Vec2::new(10.0, 20.0));
        assert_eq!(p.vel, Vec2::ZERO);
        p.moved_to(Vec2::new(13.0, 16.0));
        assert_eq!(p.vel, Vec2::new(3.0, -4.0));
        assert_eq!(p.active(), Some(Vec2::new(13.0, 16.0)));
    }

    #[test]
    fn leaving_clears_position() {
        let mut p = PointerState::default();
        p.moved_to(Vec2::new(1.0, 1.0));
        p.left();
        assert!(!p.inside);
        assert_eq!(p.active(), None);
    }

    #[test]
    fn ripple_grows_while_fading() {
        let mut r = Ripple::new(Vec2::ZERO);
        assert!(r.age());
        assert_eq!(r.radius, RIPPLE_GROWTH);
        assert!(r.alpha < RIPPLE_START_ALPHA);
    }
}
