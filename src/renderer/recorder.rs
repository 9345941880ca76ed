//! In-memory canvas that records paint calls
//!
//! Used by the native runner and by tests to inspect what a frame drew.

use glam::Vec2;

use super::{Canvas, Color};

/// One recorded paint or transform call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line { from: Vec2, to: Vec2, color: Color },
    Path { points: Vec<Vec2>, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Rect { origin: Vec2, size: Vec2, color: Color },
    Text { pos: Vec2, text: String, font: String, color: Color },
    Save,
    Translate(Vec2),
    Rotate(f32),
    Restore,
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
    /// Open save() calls
    depth: usize,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            depth: 0,
        }
    }

    /// Commands issued since the last `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Unbalanced `save` calls outstanding
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Starts a new frame, dropping any save() left open by the last one
    fn clear(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn stroke_path(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_text(&mut self, pos: Vec2, text: &str, font: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            font: font.to_string(),
            color,
        });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            log::warn!("restore() without matching save()");
        } else {
            self.depth -= 1;
        }
        self.commands.push(DrawCommand::Restore);
    }
}
