//! Browser canvas backed by `CanvasRenderingContext2d`

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Canvas, Color};

pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl Canvas2d {
    /// Grab the 2D context of `canvas`. The surface size is fixed at
    /// whatever the element's pixel size is now.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }

    fn report(result: Result<(), JsValue>, what: &str) {
        if let Err(e) = result {
            log::warn!("canvas {} failed: {:?}", what, e);
        }
    }
}

impl Canvas for Canvas2d {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.stroke_path(&[from, to], color);
    }

    fn stroke_path(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_stroke_style_str(color.as_css());
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(color.as_css());
        Self::report(
            self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            ),
            "arc",
        );
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_text(&mut self, pos: Vec2, text: &str, font: &str, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.set_font(font);
        Self::report(
            self.ctx.fill_text(text, pos.x as f64, pos.y as f64),
            "fill_text",
        );
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, offset: Vec2) {
        Self::report(
            self.ctx.translate(offset.x as f64, offset.y as f64),
            "translate",
        );
    }

    fn rotate(&mut self, angle: f32) {
        Self::report(self.ctx.rotate(angle as f64), "rotate");
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
