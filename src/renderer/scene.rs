//! Full-frame scene drawing
//!
//! Redraws everything from scratch each frame: gauge pivot, needle, ship and
//! (while thrusting) its exhaust flame.

use glam::Vec2;

use super::color::colors;
use super::{Canvas, Color, Painter};
use crate::sim::{Frame, NeedleZone};

/// Gauge pivot dot radius
const PIVOT_RADIUS: f32 = 5.0;
/// Needle tip marker radius
const TIP_RADIUS: f32 = 2.0;

/// Ship outline in ship space, nose along +x
const SHIP_OUTLINE: [Vec2; 4] = [
    Vec2::new(10.0, 0.0),
    Vec2::new(-10.0, -7.0),
    Vec2::new(-10.0, 7.0),
    Vec2::new(10.0, 0.0),
];
/// Flame starts at the ship's tail
const EXHAUST_ORIGIN: f32 = -10.0;

pub fn zone_color(zone: NeedleZone) -> Color {
    match zone {
        NeedleZone::Normal => Color::Green,
        NeedleZone::Warning => Color::Orange,
        NeedleZone::Danger => Color::Red,
    }
}

/// Paint one frame. `show_speed` adds a numeric readout beside the gauge.
pub fn draw_frame<C: Canvas>(painter: &mut Painter<C>, frame: &Frame, show_speed: bool) {
    painter.canvas_mut().clear();

    let needle = &frame.needle;
    painter.draw_circle(
        needle.pivot.x,
        needle.pivot.y,
        Some(PIVOT_RADIUS),
        Some(colors::PIVOT),
    );
    painter.draw_line(
        needle.pivot.x,
        needle.pivot.y,
        needle.tip.x,
        needle.tip.y,
        Some(colors::NEEDLE),
    );
    painter.draw_circle(
        needle.tip.x,
        needle.tip.y,
        Some(TIP_RADIUS),
        Some(zone_color(needle.zone)),
    );

    let canvas = painter.canvas_mut();
    canvas.save();
    canvas.translate(frame.ship_pos);
    canvas.rotate(frame.heading);
    canvas.stroke_path(&SHIP_OUTLINE, colors::SHIP);
    if let Some(len) = frame.exhaust {
        canvas.stroke_line(
            Vec2::new(EXHAUST_ORIGIN, 0.0),
            Vec2::new(-len, 0.0),
            colors::EXHAUST,
        );
    }
    canvas.restore();

    if show_speed {
        let reach = (needle.pivot - needle.tip).length().max(PIVOT_RADIUS);
        painter.add_label(
            needle.pivot.x + reach,
            needle.pivot.y - PIVOT_RADIUS,
            &format!("{:.1}", frame.speed),
            Some(colors::HUD_TEXT),
            None,
        );
    }
}
