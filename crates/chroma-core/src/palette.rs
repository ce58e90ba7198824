//! Pitch to color mapping.

use crate::color::Rgb;
use crate::constants::{LOWER_OCTAVE, LOWER_OCTAVE_SHADE, UPPER_OCTAVE, UPPER_OCTAVE_SHADE};
use crate::error::Result;

pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

// Vivid spectrum, C through B
pub const SPECTRUM_HEX: [&str; 12] = [
    "#FF0000", "#FF6600", "#FF8800", "#FFC400", "#E1FF00", "#00FF00", "#00DBC2", "#00C8FA",
    "#0073FD", "#001EFF", "#5E0FFF", "#BB00FF",
];

/// Pure pitch lookups. Implementations must return the same answer for the
/// same pitch until the palette itself is swapped out.
pub trait Palette {
    fn color_for_pitch(&self, pitch: i32) -> Rgb;
    fn label_for_pitch(&self, pitch: i32) -> String {
        note_label(pitch)
    }
}

/// Scientific octave number (`60` is octave 4).
#[inline]
pub fn octave_of(pitch: i32) -> i32 {
    pitch.div_euclid(12) - 1
}

#[inline]
pub fn pitch_class(pitch: i32) -> usize {
    pitch.rem_euclid(12) as usize
}

pub fn note_label(pitch: i32) -> String {
    format!("{}{}", NOTE_NAMES[pitch_class(pitch)], octave_of(pitch))
}

/// Twelve base colors with darker and brighter variants for the octaves
/// around middle C.
#[derive(Clone, Debug)]
pub struct SpectrumPalette {
    base: [Rgb; 12],
    lower: [Rgb; 12],
    upper: [Rgb; 12],
}

impl SpectrumPalette {
    pub fn new(base: [Rgb; 12]) -> Self {
        Self {
            base,
            lower: base.map(|c| c.shade(LOWER_OCTAVE_SHADE)),
            upper: base.map(|c| c.shade(UPPER_OCTAVE_SHADE)),
        }
    }

    pub fn from_hex(colors: &[&str; 12]) -> Result<Self> {
        let mut base = [Rgb::BLACK; 12];
        for (slot, hex) in base.iter_mut().zip(colors) {
            *slot = Rgb::from_hex(hex)?;
        }
        Ok(Self::new(base))
    }

    pub fn base_colors(&self) -> &[Rgb; 12] {
        &self.base
    }
}

impl Default for SpectrumPalette {
    fn default() -> Self {
        Self::new(SPECTRUM_HEX.map(|hex| Rgb::from_hex(hex).unwrap_or(Rgb::BLACK)))
    }
}

impl Palette for SpectrumPalette {
    fn color_for_pitch(&self, pitch: i32) -> Rgb {
        let idx = pitch_class(pitch);
        match octave_of(pitch) {
            LOWER_OCTAVE => self.lower[idx],
            UPPER_OCTAVE => self.upper[idx],
            _ => self.base[idx],
        }
    }
}
