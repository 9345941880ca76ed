//! Drawing primitives bound to one canvas
//!
//! Each primitive takes plain geometry plus an optional color and issues the
//! matching paint calls. Nothing is retained between calls.

use glam::Vec2;

use super::{Canvas, Color};

/// Default label size (pixels)
pub const LABEL_SIZE: u32 = 16;
/// Default dot size (radius, pixels)
pub const DOT_SIZE: f32 = 2.0;
/// Default circle radius (pixels)
pub const CIRCLE_RADIUS: f32 = 10.0;

pub struct Painter<C: Canvas> {
    canvas: C,
}

impl<C: Canvas> Painter<C> {
    pub fn new(canvas: C) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_inner(self) -> C {
        self.canvas
    }

    /// Right-pointing arrow with its tip at (x, y)
    pub fn draw_arrow(&mut self, x: f32, y: f32, color: Option<Color>) {
        let color = color.unwrap_or(Color::Gray);
        self.draw_line(x - 50.0, y, x, y, Some(color));
        self.draw_line(x, y, x - 15.0, y - 10.0, Some(color));
        self.draw_line(x, y, x - 15.0, y + 10.0, Some(color));
    }

    /// Text label, nudged 5px right of (x, y)
    pub fn add_label(&mut self, x: f32, y: f32, text: &str, color: Option<Color>, size: Option<u32>) {
        let font = format!("{}px Arial", size.unwrap_or(LABEL_SIZE));
        self.canvas.fill_text(
            Vec2::new(x + 5.0, y),
            text,
            &font,
            color.unwrap_or(Color::Blue),
        );
    }

    pub fn draw_dot(&mut self, x: f32, y: f32, size: Option<f32>, color: Option<Color>) {
        self.canvas.fill_circle(
            Vec2::new(x, y),
            size.unwrap_or(DOT_SIZE),
            color.unwrap_or(Color::Black),
        );
    }

    pub fn draw_line(&mut self, x: f32, y: f32, end_x: f32, end_y: f32, color: Option<Color>) {
        self.canvas.stroke_line(
            Vec2::new(x, y),
            Vec2::new(end_x, end_y),
            color.unwrap_or(Color::Black),
        );
    }

    pub fn draw_circle(&mut self, x: f32, y: f32, radius: Option<f32>, color: Option<Color>) {
        self.canvas.fill_circle(
            Vec2::new(x, y),
            radius.unwrap_or(CIRCLE_RADIUS),
            color.unwrap_or(Color::Blue),
        );
    }

    pub fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Option<Color>) {
        self.canvas.fill_rect(
            Vec2::new(x, y),
            Vec2::new(width, height),
            color.unwrap_or(Color::Blue),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingCanvas};

    fn painter() -> Painter<RecordingCanvas> {
        Painter::new(RecordingCanvas::new(800.0, 600.0))
    }

    #[test]
    fn test_default_colors() {
        let mut p = painter();
        p.draw_line(0.0, 0.0, 1.0, 1.0, None);
        p.draw_dot(1.0, 1.0, None, None);
        p.draw_circle(2.0, 2.0, None, None);
        p.draw_rect(0.0, 0.0, 4.0, 4.0, None);
        p.add_label(0.0, 0.0, "hi", None, None);

        let cmds = p.canvas().commands();
        assert!(matches!(cmds[0], DrawCommand::Line { color: Color::Black, .. }));
        assert!(matches!(
            cmds[1],
            DrawCommand::Circle { radius, color: Color::Black, .. } if radius == DOT_SIZE
        ));
        assert!(matches!(
            cmds[2],
            DrawCommand::Circle { radius, color: Color::Blue, .. } if radius == CIRCLE_RADIUS
        ));
        assert!(matches!(cmds[3], DrawCommand::Rect { color: Color::Blue, .. }));
        match &cmds[4] {
            DrawCommand::Text { pos, text, font, color } => {
                assert_eq!(*pos, Vec2::new(5.0, 0.0));
                assert_eq!(text, "hi");
                assert_eq!(font, "16px Arial");
                assert_eq!(*color, Color::Blue);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_arrow_uses_one_color() {
        let mut p = painter();
        p.draw_arrow(100.0, 50.0, None);
        let cmds = p.canvas().commands();
        assert_eq!(cmds.len(), 3);
        assert!(cmds.iter().all(|c| matches!(c, DrawCommand::Line { color: Color::Gray, .. })));

        p.canvas_mut().clear();
        p.draw_arrow(100.0, 50.0, Some(Color::Red));
        assert!(
            p.canvas()
                .commands()
                .iter()
                .skip(1)
                .all(|c| matches!(c, DrawCommand::Line { color: Color::Red, .. }))
        );
    }
}
