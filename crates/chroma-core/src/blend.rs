use crate::color::Rgb;
use crate::constants::{COLOR_BLEND_RATE, INTENSITY_BLEND_RATE};

/// Per-frame smoothing of the backdrop color and intensity.
///
/// Note events only move the targets; `advance` eases the rendered values a
/// fixed fraction of the remaining distance each frame, so the field keeps
/// gliding between events at whatever rate frames arrive.
#[derive(Clone, Debug)]
pub struct Blender {
    pub current_color: Rgb,
    pub target_color: Rgb,
    pub current_intensity: f32,
    pub target_intensity: f32,
}

impl Blender {
    pub fn new(color: Rgb, intensity: f32) -> Self {
        let intensity = intensity.clamp(0.0, 1.0);
        Self {
            current_color: color,
            target_color: color,
            current_intensity: intensity,
            target_intensity: intensity,
        }
    }

    pub fn set_target(&mut self, color: Rgb, intensity: f32) {
        self.target_color = color;
        self.target_intensity = intensity.clamp(0.0, 1.0);
    }

    pub fn advance(&mut self) {
        self.current_color = self
            .current_color
            .lerp(self.target_color, COLOR_BLEND_RATE);
        self.current_intensity +=
            (self.target_intensity - self.current_intensity) * INTENSITY_BLEND_RATE;
    }
}
