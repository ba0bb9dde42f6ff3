//! Shared visual and timing constants for the site effects.
//!
//! Distances and speeds are expressed in CSS pixels per frame; the particle
//! field scales them by the device pixel ratio where it needs surface pixels.

// Device pixel ratio clamp
pub const MIN_PIXEL_RATIO: f32 = 1.0;
pub const MAX_PIXEL_RATIO: f32 = 2.0;

// Below this pointer distance no impulse is applied (direction is undefined)
pub const MIN_POINTER_DISTANCE: f32 = 0.001;

// Ripple dynamics
pub const RIPPLE_START_ALPHA: f32 = 0.6;
pub const RIPPLE_ALPHA_STEP: f32 = 0.01; // alpha lost per frame
pub const RIPPLE_GROWTH: f32 = 8.0; // radius gained per frame (surface px)
pub const RIPPLE_ALPHA_EPSILON: f32 = 1e-4; // absorbs float drift in the decay

// Stroke widths (surface px)
pub const LINK_LINE_WIDTH: f64 = 1.0;
pub const RIPPLE_LINE_WIDTH: f64 = 2.0;

// Palette
pub const LINK_RGB: [u8; 3] = [180, 220, 255];
pub const PARTICLE_RGB: [u8; 3] = [200, 240, 255];
pub const PARTICLE_ALPHA: f32 = 0.9;
pub const RIPPLE_RGB: [u8; 3] = [0, 200, 255];

// Services slideshow
pub const SLIDE_CARD_WIDTH_PX: f32 = 308.0; // card width including gap
pub const SLIDE_AUTO_ADVANCE_MS: u64 = 1500;
pub const SLIDE_SETTLE_MS: u64 = 500; // matches the CSS transition length

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // visible fraction that counts as "in view"
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;
