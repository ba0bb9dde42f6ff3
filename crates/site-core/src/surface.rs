//! Minimal 2D drawing surface consumed by the particle field.
//!
//! The method set mirrors the subset of the canvas 2D context the field
//! actually uses, so the web front-end can forward each call one-to-one while
//! tests record them.

pub trait Surface2d {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_stroke_style(&mut self, style: &str);
    fn set_fill_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn stroke(&mut self);
    fn fill(&mut self);
}

/// CSS `rgba()` string for a colour and an alpha in \[0, 1\].
#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_formats_and_clamps() {
        assert_eq!(rgba([0, 200, 255], 0.5), "rgba(0, 200, 255, 0.5)");
        assert_eq!(rgba([1, 2, 3], -0.2), "rgba(1, 2, 3, 0)");
        assert_eq!(rgba([1, 2, 3], 4.0), "rgba(1, 2, 3, 1)");
    }
}
