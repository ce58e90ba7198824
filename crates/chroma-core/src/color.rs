//! Normalized RGB colors.
//!
//! Every [`Rgb`] holds channels in `[0, 1]`; constructors clamp, so a color
//! that reaches the renderer is always a valid triple regardless of how it was
//! produced (hex input, shading, or blending).

use crate::error::{ChromaError, Result};
use glam::Vec3;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(Vec3);

impl Rgb {
    pub const BLACK: Rgb = Rgb(Vec3::ZERO);
    pub const WHITE: Rgb = Rgb(Vec3::ONE);

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self::from_vec3(Vec3::new(r, g, b))
    }

    pub fn from_vec3(v: Vec3) -> Self {
        // f32::max drops NaN, so NaN channels land on 0
        Self(v.max(Vec3::ZERO).min(Vec3::ONE))
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
    }

    /// Parse `#RGB` or `#RRGGBB`. Shorter six-digit forms are right-padded
    /// with `0`, so `#12` reads as `#120000`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.is_empty() || digits.len() > 6 || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ChromaError::InvalidHex(hex.to_string()));
        }
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            format!("{digits:0<6}")
        };
        let value = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ChromaError::InvalidHex(hex.to_string()))?;
        Ok(Self::from_rgb8(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0.x
    }
    #[inline]
    pub fn g(&self) -> f32 {
        self.0.y
    }
    #[inline]
    pub fn b(&self) -> f32 {
        self.0.z
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        self.0
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let c = (self.0 * 255.0).round();
        [c.x as u8, c.y as u8, c.z as u8]
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// CSS `rgba()` string for canvas fill and stroke styles.
    pub fn css_rgba(self, alpha: f32) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgba({},{},{},{})", r, g, b, alpha.clamp(0.0, 1.0))
    }

    /// Multiply every channel by `factor`, clamping to the valid range.
    pub fn shade(self, factor: f32) -> Self {
        Self::from_vec3(self.0 * factor)
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        Self::from_vec3(self.0.lerp(other.0, t))
    }

    pub fn distance(self, other: Rgb) -> f32 {
        self.0.distance(other.0)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
