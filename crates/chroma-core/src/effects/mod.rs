//! Transient visual effects triggered by notes.

pub mod firework;
pub mod ripple;
pub mod swirl;

pub use firework::{FireworkBurst, FireworkSystem, Particle, Spark};
pub use ripple::{Ripple, RipplePool};
pub use swirl::{Swirl, SwirlPool, SwirlPose};

use crate::constants::{MIDI_VELOCITY_MAX, VELOCITY_DURATION_SPAN_MS, VELOCITY_FACTOR_MIN};

/// Map a MIDI velocity to the visual intensity factor in `[0.25, 1]`.
#[inline]
pub fn normalize_velocity(velocity: i32) -> f32 {
    (velocity as f32 / MIDI_VELOCITY_MAX).clamp(VELOCITY_FACTOR_MIN, 1.0)
}

/// Lifetime of a note-triggered transition; soft strikes linger longer.
#[inline]
pub fn transition_duration_ms(decay_ms: u32, velocity_factor: f32) -> f64 {
    decay_ms as f64 + (1.0 - velocity_factor as f64) * VELOCITY_DURATION_SPAN_MS
}
