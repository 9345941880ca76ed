//! 2D canvas rendering
//!
//! Everything is drawn through the `Canvas` trait so the same scene code runs
//! against the browser's 2D context and against an in-memory recorder.

pub mod color;
pub mod painter;
pub mod recorder;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use color::Color;
pub use painter::Painter;
pub use recorder::{DrawCommand, RecordingCanvas};
pub use scene::draw_frame;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;

use glam::Vec2;

/// A drawing surface with a transform stack.
///
/// Coordinates are in surface pixels, y pointing down. `save`/`restore`
/// bracket `translate`/`rotate` the same way the HTML canvas does.
pub trait Canvas {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (f32, f32);

    /// Erase the whole surface
    fn clear(&mut self);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color);

    /// Stroke a connected path through `points`
    fn stroke_path(&mut self, points: &[Vec2], color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Fill `text` with its baseline-left at `pos`
    fn fill_text(&mut self, pos: Vec2, text: &str, font: &str, color: Color);

    fn save(&mut self);

    fn translate(&mut self, offset: Vec2);

    fn rotate(&mut self, angle: f32);

    fn restore(&mut self);
}
