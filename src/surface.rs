// Drawing target for the particle field. The browser implementation draws
// on a 2d canvas context, tests record the calls instead.

use crate::color::Color;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: Color);
}

// Canvas calls are fire and forget, a broken context is not guarded against
impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) {
        self.begin_path();
        let _ = self.arc(center[0], center[1], radius, 0.0, PI * 2.0);
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill();
        self.close_path();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: Color) {
        self.begin_path();
        self.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.set_line_width(width);
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
        self.close_path();
    }
}
