// Host-side tests for the particle field simulation and drawing order.

use site_core::constants::{RIPPLE_ALPHA_STEP, RIPPLE_START_ALPHA};
use site_core::{ConfigError, FieldConfig, ParticleField, Surface2d, Vec2};

fn field(config: FieldConfig, w: f32, h: f32) -> ParticleField {
    let mut f = ParticleField::new(config, 42).unwrap();
    f.resize(w, h, 1.0);
    f
}

fn freeze(f: &mut ParticleField) {
    for p in f.particles_mut() {
        p.vel = Vec2::ZERO;
    }
}

#[derive(Default)]
struct Recorder {
    clears: usize,
    lines: usize,
    fills: usize,
    strokes: usize,
    stroke_styles: Vec<String>,
}

impl Surface2d for Recorder {
    fn clear_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {
        self.clears += 1;
    }
    fn set_stroke_style(&mut self, style: &str) {
        self.stroke_styles.push(style.to_string());
    }
    fn set_fill_style(&mut self, _style: &str) {}
    fn set_line_width(&mut self, _width: f64) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn line_to(&mut self, _x: f64, _y: f64) {
        self.lines += 1;
    }
    fn arc(&mut self, _x: f64, _y: f64, _r: f64, _s: f64, _e: f64) {}
    fn stroke(&mut self) {
        self.strokes += 1;
    }
    fn fill(&mut self) {
        self.fills += 1;
    }
}

#[test]
fn particle_count_survives_resizes() {
    let mut f = ParticleField::new(FieldConfig::hero(), 7).unwrap();
    assert!(f.particles().is_empty());
    f.resize(800.0, 600.0, 1.0);
    assert_eq!(f.particles().len(), 90);
    for (w, h, dpr) in [(400.0, 300.0, 2.0), (1920.0, 1080.0, 1.25), (0.0, 0.0, 1.0)] {
        f.resize(w, h, dpr);
        assert_eq!(f.particles().len(), 90);
    }
}

#[test]
fn rejected_configs_never_build_a_field() {
    let inverted = FieldConfig {
        radius: [3.0, 1.0],
        ..FieldConfig::compact()
    };
    assert_eq!(
        ParticleField::new(inverted, 1).err(),
        Some(ConfigError::RadiusRange(3.0, 1.0))
    );

    let negative_speed = FieldConfig {
        base_speed: -0.5,
        ..FieldConfig::hero()
    };
    assert!(matches!(
        ParticleField::new(negative_speed, 1),
        Err(ConfigError::NonPositive { name: "base_speed", .. })
    ));
}

#[test]
fn pool_waits_for_a_laid_out_surface() {
    let mut f = ParticleField::new(FieldConfig::compact(), 9).unwrap();
    f.resize(0.0, 0.0, 2.0);
    assert!(f.particles().is_empty());
    f.resize(0.0, 300.0, 2.0);
    assert!(f.particles().is_empty());

    f.resize(400.0, 300.0, 2.0);
    assert_eq!(f.particles().len(), 60);
    let at_origin = f.particles().iter().filter(|p| p.pos == Vec2::ZERO).count();
    assert!(at_origin < 60);
}

#[test]
fn resize_keeps_positions() {
    let mut f = field(FieldConfig::compact(), 640.0, 480.0);
    let before: Vec<Vec2> = f.particles().iter().map(|p| p.pos).collect();
    f.resize(320.0, 240.0, 2.0);
    let after: Vec<Vec2> = f.particles().iter().map(|p| p.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn initial_particles_respect_config() {
    let cfg = FieldConfig::hero();
    let mut f = ParticleField::new(cfg.clone(), 3).unwrap();
    f.resize(500.0, 400.0, 2.0);
    let size = f.size();
    for p in f.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= size.x);
        assert!(p.pos.y >= 0.0 && p.pos.y <= size.y);
        assert!(p.vel.x.abs() <= cfg.base_speed && p.vel.y.abs() <= cfg.base_speed);
        assert!(p.radius >= cfg.radius[0] * 2.0 && p.radius <= cfg.radius[1] * 2.0);
        assert!(p.max_speed >= cfg.base_speed && p.max_speed <= cfg.max_speed);
    }
}

#[test]
fn particles_past_an_edge_wrap_to_the_opposite_one() {
    let mut f = field(FieldConfig::compact(), 200.0, 100.0);
    freeze(&mut f);
    f.particles_mut()[0].pos = Vec2::new(205.0, 50.0);
    f.particles_mut()[1].pos = Vec2::new(-3.0, 50.0);
    f.particles_mut()[2].pos = Vec2::new(20.0, 104.0);
    f.particles_mut()[3].pos = Vec2::new(20.0, -0.5);
    f.update();
    let ps = f.particles();
    assert_eq!(ps[0].pos, Vec2::new(0.0, 50.0));
    assert_eq!(ps[1].pos, Vec2::new(200.0, 50.0));
    assert_eq!(ps[2].pos, Vec2::new(20.0, 0.0));
    assert_eq!(ps[3].pos, Vec2::new(20.0, 100.0));
}

#[test]
fn ripple_is_removed_after_exactly_sixty_frames() {
    let expected = (RIPPLE_START_ALPHA / RIPPLE_ALPHA_STEP).round() as usize;
    assert_eq!(expected, 60);

    let mut f = field(FieldConfig::compact(), 300.0, 300.0);
    f.click(10.0, 20.0);
    assert_eq!(f.ripples().len(), 1);
    assert_eq!(f.ripples()[0].radius, 0.0);
    assert_eq!(f.ripples()[0].alpha, RIPPLE_START_ALPHA);

    for frame in 1..expected {
        f.update();
        assert_eq!(f.ripples().len(), 1, "ripple vanished early at frame {frame}");
    }
    f.update();
    assert!(f.ripples().is_empty());
}

#[test]
fn click_is_scaled_to_surface_pixels() {
    let mut f = ParticleField::new(FieldConfig::compact(), 1).unwrap();
    f.resize(300.0, 300.0, 2.0);
    f.click(10.0, 20.0);
    assert_eq!(f.ripples()[0].origin, Vec2::new(20.0, 40.0));
}

#[test]
fn repulsion_wins_when_both_ranges_apply() {
    let cfg = FieldConfig::hero();
    let mut f = field(cfg.clone(), 1000.0, 1000.0);
    freeze(&mut f);
    // 50 px: inside both the repel (130) and attract (280) radii
    f.particles_mut()[0].pos = Vec2::new(550.0, 500.0);
    f.pointer_move(500.0, 500.0);
    f.update();
    let v = f.particles()[0].vel;
    assert!(v.x > 0.0, "velocity should point away from the pointer, got {v:?}");
    assert!(v.y.abs() < 1e-6);
    let expected = cfg.repel_power / 50.0 * cfg.friction;
    assert!((v.x - expected).abs() < 1e-5);
}

#[test]
fn leaving_the_surface_stops_pointer_forces() {
    let mut f = field(FieldConfig::hero(), 1000.0, 1000.0);
    freeze(&mut f);
    f.particles_mut()[0].pos = Vec2::new(550.0, 500.0);
    f.pointer_move(500.0, 500.0);
    f.pointer_leave();
    f.update();
    assert_eq!(f.particles()[0].vel, Vec2::ZERO);
    assert!(f.pointer().pos.is_none());
}

#[test]
fn speed_decays_monotonically_without_pointer() {
    let mut f = field(FieldConfig::hero(), 800.0, 600.0);
    let mut speeds: Vec<f32> = f.particles().iter().map(|p| p.vel.length()).collect();
    for _ in 0..200 {
        f.update();
        for (p, prev) in f.particles().iter().zip(speeds.iter_mut()) {
            let s = p.vel.length();
            assert!(s <= *prev);
            *prev = s;
        }
    }
    let initial_max = FieldConfig::hero().base_speed * 2f32.sqrt();
    assert!(speeds.iter().all(|s| *s < initial_max * 0.03));
}

#[test]
fn frame_clears_then_draws_every_particle() {
    let mut f = field(FieldConfig::compact(), 400.0, 400.0);
    let mut rec = Recorder::default();
    f.frame(&mut rec);
    assert_eq!(rec.clears, 1);
    assert_eq!(rec.fills, 60);
}

#[test]
fn links_only_join_close_pairs() {
    let mut cfg = FieldConfig::compact();
    cfg.count = 3;
    let mut f = field(cfg, 1000.0, 1000.0);
    f.particles_mut()[0].pos = Vec2::new(100.0, 100.0);
    f.particles_mut()[1].pos = Vec2::new(160.0, 100.0);
    f.particles_mut()[2].pos = Vec2::new(900.0, 900.0);

    let mut rec = Recorder::default();
    f.draw(&mut rec);
    assert_eq!(rec.lines, 1);
    // 60 px apart over a 120 px link distance
    assert_eq!(rec.stroke_styles[0], "rgba(180, 220, 255, 0.5)");
}

#[test]
fn ripples_are_stroked_after_particles() {
    let mut cfg = FieldConfig::compact();
    cfg.count = 1;
    let mut f = field(cfg, 100.0, 100.0);
    f.click(50.0, 50.0);
    let mut rec = Recorder::default();
    f.draw(&mut rec);
    assert_eq!(rec.fills, 1);
    assert_eq!(rec.strokes, 1);
    assert_eq!(rec.stroke_styles.last().map(String::as_str), Some("rgba(0, 200, 255, 0.6)"));
}
