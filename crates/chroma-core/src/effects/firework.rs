//! Firework bursts: fixed particle sets radiating from the viewport center.
//!
//! Every particle's parameters are drawn once at spawn. Its position and
//! brightness at any later instant are a pure function of the burst's
//! elapsed time, so frames can be skipped or repeated without drift.

use crate::color::Rgb;
use crate::constants::{
    FIREWORK_DECAY_RANGE, FIREWORK_DURATION_MS, FIREWORK_GLOW_FALLOFF, FIREWORK_GLOW_RADIUS,
    FIREWORK_GRAVITY, FIREWORK_INTENSITY_MIN, FIREWORK_PARTICLES, FIREWORK_SIZE_RANGE,
    FIREWORK_SPEED_RANGE, FIREWORK_SPREAD_RANGE, FIREWORK_TWINKLE_RATE, FIREWORK_VISIBLE_ALPHA,
};
use crate::draw::{DrawCmd, DrawList};
use crate::easing::{ease_out_cubic, lerp, progress};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub angle: f32,
    pub speed: f32,
    pub size: f32,
    pub twinkle_phase: f32,
    pub decay: f32,
    pub spread: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, intensity: f32) -> Self {
        let (speed_lo, speed_hi) = FIREWORK_SPEED_RANGE;
        let (size_lo, size_hi) = FIREWORK_SIZE_RANGE;
        let (decay_lo, decay_hi) = FIREWORK_DECAY_RANGE;
        let (spread_lo, spread_hi) = FIREWORK_SPREAD_RANGE;
        Self {
            angle: rng.gen::<f32>() * TAU,
            speed: lerp(speed_lo, speed_hi, rng.gen()) * intensity,
            size: lerp(size_lo, size_hi, rng.gen()),
            twinkle_phase: rng.gen::<f32>() * TAU,
            decay: lerp(decay_lo, decay_hi, rng.gen()),
            spread: lerp(spread_lo, spread_hi, rng.gen()),
        }
    }

    /// Offset from the burst origin at `progress` in `[0, 1]`.
    pub fn offset(&self, progress: f32) -> Vec2 {
        let travel = ease_out_cubic((progress * (0.7 + self.decay * 0.5)).min(1.0));
        let distance = self.speed * travel;
        Vec2::new(
            self.angle.cos() * distance,
            self.angle.sin() * distance + FIREWORK_GRAVITY * progress * progress * self.spread,
        )
    }

    pub fn twinkle(&self, elapsed_ms: f32) -> f32 {
        0.6 + 0.4 * (elapsed_ms * FIREWORK_TWINKLE_RATE + self.twinkle_phase * 6.0).sin()
    }

    pub fn alpha(&self, progress: f32, elapsed_ms: f32, burst_intensity: f32) -> f32 {
        let fade = 1.0 - progress.clamp(0.0, 1.0);
        (fade * self.twinkle(elapsed_ms) * burst_intensity * self.decay).max(0.0)
    }
}

/// One drawable particle sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub offset: Vec2,
    pub size: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug)]
pub struct FireworkBurst {
    pub color: Rgb,
    pub intensity: f32,
    pub start: f64,
    pub duration: f64,
    pub particles: Box<[Particle; FIREWORK_PARTICLES]>,
}

impl FireworkBurst {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, color: Rgb, intensity: f32, now: f64) -> Self {
        let intensity = intensity.clamp(FIREWORK_INTENSITY_MIN, 1.0);
        Self {
            color,
            intensity,
            start: now,
            duration: FIREWORK_DURATION_MS,
            particles: Box::new(std::array::from_fn(|_| Particle::random(rng, intensity))),
        }
    }

    pub fn progress(&self, now: f64) -> f32 {
        progress(self.start, self.duration, now)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Visible sparks at `now`; particles below the visibility floor are
    /// skipped for this frame only.
    pub fn sparks(&self, now: f64) -> impl Iterator<Item = Spark> + '_ {
        let progress = self.progress(now);
        let elapsed_ms = (now - self.start).max(0.0) as f32;
        let fade = 1.0 - progress;
        self.particles.iter().filter_map(move |p| {
            let alpha = p.alpha(progress, elapsed_ms, self.intensity);
            (alpha > FIREWORK_VISIBLE_ALPHA).then(|| Spark {
                offset: p.offset(progress),
                size: p.size * (0.6 + fade * 0.6),
                alpha,
            })
        })
    }

    /// Emit glows for every visible spark; returns `false` once expired.
    pub fn render(&self, now: f64, list: &mut DrawList) -> bool {
        if self.is_expired(now) {
            return false;
        }
        let origin = list.viewport().center();
        for spark in self.sparks(now) {
            list.push(DrawCmd::Glow {
                center: origin + spark.offset,
                radius: spark.size * FIREWORK_GLOW_RADIUS,
                falloff: spark.size * FIREWORK_GLOW_FALLOFF,
                color: self.color,
                alpha: spark.alpha,
            });
        }
        true
    }
}

/// Live bursts, oldest first. Bounded only by burst lifetime.
#[derive(Debug, Default)]
pub struct FireworkSystem {
    bursts: Vec<FireworkBurst>,
}

impl FireworkSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expired bursts are dropped here too, so the list stays bounded when
    /// no frames are being rendered.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, color: Rgb, intensity: f32, now: f64) {
        self.bursts.retain(|burst| !burst.is_expired(now));
        self.bursts
            .push(FireworkBurst::spawn(rng, color, intensity, now));
    }

    pub fn render(&mut self, now: f64, list: &mut DrawList) {
        self.bursts.retain(|burst| burst.render(now, list));
    }

    pub fn clear(&mut self) {
        self.bursts.clear();
    }

    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    pub fn bursts(&self) -> &[FireworkBurst] {
        &self.bursts
    }
}
