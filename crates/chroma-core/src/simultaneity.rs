//! Detection of near-simultaneous note-ons.
//!
//! Two notes of different pitch struck within [`SIMULTANEOUS_WINDOW_MS`] form
//! a pair. Pairing is pairwise and last-match only: the newest note pairs
//! with the most recently seen partner, and after a pairing the detector
//! stays quiet for one window. A three- or four-note chord therefore yields a
//! single pairing per cluster, which keeps the visual load bounded.

use crate::constants::{MIDI_VELOCITY_MAX, SIMULTANEOUS_WINDOW_MS, SWIRL_INTENSITY_MIN};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteHit {
    pub pitch: i32,
    pub velocity: i32,
    pub at: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pairing {
    pub current: NoteHit,
    pub partner: NoteHit,
}

impl Pairing {
    /// Combined intensity in `[0.35, 1]`.
    pub fn intensity(&self) -> f32 {
        let sum = (self.current.velocity + self.partner.velocity) as f32;
        (sum / (2.0 * MIDI_VELOCITY_MAX)).clamp(SWIRL_INTENSITY_MIN, 1.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SimultaneityDetector {
    window: SmallVec<[NoteHit; 8]>,
    last_pairing_at: Option<f64>,
}

impl SimultaneityDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop hits that have aged out of the window; re-arm when it empties.
    pub fn prune(&mut self, now: f64) {
        self.window.retain(|hit| now - hit.at < SIMULTANEOUS_WINDOW_MS);
        if self.window.is_empty() {
            self.last_pairing_at = None;
        }
    }

    pub fn note_on(&mut self, pitch: i32, velocity: i32, now: f64) -> Option<Pairing> {
        self.prune(now);
        let current = NoteHit {
            pitch,
            velocity: velocity.clamp(0, MIDI_VELOCITY_MAX as i32),
            at: now,
        };
        self.window.push(current);

        if self.in_cooldown(now) {
            return None;
        }

        let earlier = &self.window[..self.window.len() - 1];
        let partner = earlier
            .iter()
            .rev()
            .find(|hit| hit.pitch != pitch && now - hit.at < SIMULTANEOUS_WINDOW_MS)
            .copied()?;

        self.last_pairing_at = Some(now);
        log::debug!("[simultaneity] paired {} with {}", pitch, partner.pitch);
        Some(Pairing { current, partner })
    }

    pub fn note_off(&mut self, pitch: i32, now: f64) {
        self.prune(now);
        self.window.retain(|hit| hit.pitch != pitch);
        if self.window.is_empty() {
            self.last_pairing_at = None;
        }
    }

    fn in_cooldown(&self, now: f64) -> bool {
        self.last_pairing_at
            .is_some_and(|at| now - at < SIMULTANEOUS_WINDOW_MS)
    }

    /// `true` while at least one recent note is inside the window at `now`.
    pub fn is_armed(&self, now: f64) -> bool {
        self.window
            .iter()
            .any(|hit| now - hit.at < SIMULTANEOUS_WINDOW_MS)
    }

    /// Window as of the last note event or `prune`; may still hold hits
    /// that have since aged out.
    pub fn recent(&self) -> &[NoteHit] {
        &self.window
    }

    pub fn last_pairing_at(&self) -> Option<f64> {
        self.last_pairing_at
    }
}
