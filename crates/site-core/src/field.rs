//! Decorative particle field: drifting points joined by faint links, pushed
//! and pulled by the pointer, with click ripples layered on top.
//!
//! All coordinates are surface pixels (CSS pixels × clamped device pixel
//! ratio). The field owns every piece of per-instance state so that a host
//! only has to forward input events and call [`ParticleField::frame`] once per
//! display refresh.

use crate::config::{ConfigError, FieldConfig};
use crate::constants::*;
use crate::particle::{Particle, PointerState, Ripple};
use crate::surface::{rgba, Surface2d};
use glam::Vec2;
use rand::prelude::*;
use std::f64::consts::TAU;

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    pointer: PointerState,
    ripples: Vec<Ripple>,
    size: Vec2,
    dpr: f32,
    rng: StdRng,
}

/// Clamp a reported device pixel ratio to the range the field renders at.
#[inline]
pub fn clamp_pixel_ratio(dpr: f64) -> f32 {
    let dpr = dpr as f32;
    if dpr.is_finite() {
        dpr.clamp(MIN_PIXEL_RATIO, MAX_PIXEL_RATIO)
    } else {
        MIN_PIXEL_RATIO
    }
}

impl ParticleField {
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Build a field from a validated config; rejected configs never reach
    /// the sampling in [`ParticleField::resize`].
    pub fn with_rng(config: FieldConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            particles: Vec::with_capacity(config.count),
            config,
            pointer: PointerState::default(),
            ripples: Vec::new(),
            size: Vec2::ZERO,
            dpr: MIN_PIXEL_RATIO,
            rng,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Backing surface size in pixels.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.dpr
    }

    /// Adopt a new layout size. Returns the backing pixel size the host
    /// should give its drawing surface.
    ///
    /// The pool is populated on the first call with a non-empty surface and
    /// kept as-is afterwards.
    pub fn resize(&mut self, css_width: f32, css_height: f32, device_pixel_ratio: f64) -> (u32, u32) {
        self.dpr = clamp_pixel_ratio(device_pixel_ratio);
        let w = (css_width.max(0.0) * self.dpr).floor();
        let h = (css_height.max(0.0) * self.dpr).floor();
        self.size = Vec2::new(w, h);
        if self.particles.is_empty() && w > 0.0 && h > 0.0 {
            self.populate();
        }
        log::debug!(
            "[field] resize {}x{} dpr={:.2} particles={}",
            w,
            h,
            self.dpr,
            self.particles.len()
        );
        (w as u32, h as u32)
    }

    fn populate(&mut self) {
        let c = &self.config;
        let (w, h, dpr) = (self.size.x, self.size.y, self.dpr);
        let rng = &mut self.rng;
        self.particles = (0..c.count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                vel: Vec2::new(
                    rng.gen_range(-c.base_speed..=c.base_speed),
                    rng.gen_range(-c.base_speed..=c.base_speed),
                ),
                radius: rng.gen_range(c.radius[0] * dpr..=c.radius[1] * dpr),
                max_speed: rng.gen_range(c.base_speed..=c.max_speed.max(c.base_speed)),
            })
            .collect();
    }

    /// Pointer moved; coordinates are CSS pixels relative to the surface origin.
    pub fn pointer_move(&mut self, local_x: f32, local_y: f32) {
        let p = Vec2::new(local_x, local_y) * self.dpr;
        self.pointer.moved_to(p);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.left();
    }

    /// Click or tap; coordinates are CSS pixels relative to the surface origin.
    pub fn click(&mut self, local_x: f32, local_y: f32) {
        let origin = Vec2::new(local_x, local_y) * self.dpr;
        self.ripples.push(Ripple::new(origin));
    }

    /// Velocity change the pointer applies to a particle at `pos`.
    ///
    /// Repulsion wins inside the repel radius; attraction applies in the
    /// remaining band out to the attraction range.
    pub fn pointer_impulse(&self, pos: Vec2, pointer: Vec2) -> Vec2 {
        let c = &self.config;
        let delta = pos - pointer;
        let dist = delta.length();
        if dist <= MIN_POINTER_DISTANCE {
            return Vec2::ZERO;
        }
        let dir = delta / dist;
        let repel_dist = c.repel_dist * self.dpr;
        let attract_range = c.attract_range * self.dpr;
        if dist < repel_dist {
            dir * (c.repel_power * self.dpr / dist)
        } else if dist < attract_range {
            -dir * ((1.0 - dist / attract_range) * c.attract_power * self.dpr)
        } else {
            Vec2::ZERO
        }
    }

    /// Advance the simulation by one frame without drawing.
    pub fn update(&mut self) {
        let pointer = self.pointer.active();
        let friction = self.config.friction;
        let (w, h) = (self.size.x, self.size.y);

        for i in 0..self.particles.len() {
            if let Some(ptr) = pointer {
                let kick = self.pointer_impulse(self.particles[i].pos, ptr);
                self.particles[i].vel += kick;
            }
            let p = &mut self.particles[i];
            p.vel *= friction;
            p.pos += p.vel;
            p.pos = wrap(p.pos, w, h);
        }

        self.ripples.retain_mut(Ripple::age);
    }

    /// Paint links, particles and ripples in that order.
    pub fn draw<S: Surface2d>(&self, surface: &mut S) {
        let link_dist = self.config.link_dist * self.dpr;

        surface.set_line_width(LINK_LINE_WIDTH);
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.pos.distance(b.pos);
                if d < link_dist {
                    surface.set_stroke_style(&rgba(LINK_RGB, 1.0 - d / link_dist));
                    surface.begin_path();
                    surface.move_to(a.pos.x as f64, a.pos.y as f64);
                    surface.line_to(b.pos.x as f64, b.pos.y as f64);
                    surface.stroke();
                }
            }
        }

        let fill = rgba(PARTICLE_RGB, PARTICLE_ALPHA);
        for p in &self.particles {
            surface.set_fill_style(&fill);
            surface.begin_path();
            surface.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            surface.fill();
        }

        for r in &self.ripples {
            surface.set_stroke_style(&rgba(RIPPLE_RGB, r.alpha));
            surface.set_line_width(RIPPLE_LINE_WIDTH);
            surface.begin_path();
            surface.arc(r.origin.x as f64, r.origin.y as f64, r.radius as f64, 0.0, TAU);
            surface.stroke();
        }
    }

    /// One full animation frame: clear, step, paint.
    pub fn frame<S: Surface2d>(&mut self, surface: &mut S) {
        surface.clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
        self.update();
        self.draw(surface);
    }
}

/// Toroidal wrap: leaving one edge re-enters at the opposite one.
#[inline]
pub fn wrap(mut p: Vec2, w: f32, h: f32) -> Vec2 {
    if p.x < 0.0 {
        p.x = w;
    }
    if p.x > w {
        p.x = 0.0;
    }
    if p.y < 0.0 {
        p.y = h;
    }
    if p.y > h {
        p.y = 0.0;
    }
    p
}
