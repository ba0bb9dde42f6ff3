use site_core::Surface2d;
use web_sys as web;

/// Canvas 2d context as a particle-field drawing surface.
pub struct Canvas2d(pub web::CanvasRenderingContext2d);

impl Surface2d for Canvas2d {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.0.clear_rect(x, y, w, h);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.0.set_stroke_style_str(style);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.0.set_fill_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        self.0.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.0.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        // Only fails on a negative radius, which the field never produces.
        _ = self.0.arc(x, y, radius, start, end);
    }

    fn stroke(&mut self) {
        self.0.stroke();
    }

    fn fill(&mut self) {
        self.0.fill();
    }
}
