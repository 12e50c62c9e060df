//! Visual treatment for class-driven animation.
//!
//! A triggered class renders at full intensity and decays toward the resting
//! color as its removal timer runs out. Under reduced motion the highlight
//! holds steady until the class is removed.

use ratatui::style::Color;

/// Highlight intensity for a class whose removal timer reports `progress`.
///
/// `None` means no removal is pending (a toggled class, for example), which
/// renders at full intensity.
#[must_use]
pub fn highlight_intensity(progress: Option<f32>, reduced_motion: bool) -> f32 {
    match progress {
        Some(p) if !reduced_motion => 1.0 - ease_out_cubic(p),
        _ => 1.0,
    }
}

/// Blend from `rest` toward `highlight` by `intensity`.
///
/// Only RGB colors can be mixed; named terminal colors (the high-contrast
/// palette) snap to the highlight while any intensity remains.
#[must_use]
pub fn blend(rest: Color, highlight: Color, intensity: f32) -> Color {
    let t = intensity.clamp(0.0, 1.0);
    match (rest, highlight) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
            lerp_channel(r0, r1, t),
            lerp_channel(g0, g1, t),
            lerp_channel(b0, b1, t),
        ),
        _ if t > 0.0 => highlight,
        _ => rest,
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
