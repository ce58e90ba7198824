//! The engine context: every piece of mutable visual state for one session.
//!
//! The caller owns a [`VisualEngine`] and drives it with two kinds of calls:
//! note events (`paint`, `handle_note_on`, `handle_note_off`, mode and
//! settings setters) and one frame callback (`render_frame`). Both take a
//! monotonic timestamp in milliseconds. The caller must never run them
//! concurrently; on the web they are serialized by the event loop.

use crate::blend::Blender;
use crate::color::Rgb;
use crate::constants::{
    AMBIENT_COLOR_HEX, AMBIENT_INTENSITY, FIREWORK_TARGET_INTENSITY, MANUAL_SWIRL_SPIN_BASE,
    MANUAL_SWIRL_SPIN_SPAN, OVERLAY_LIGHT_ALPHA, OVERLAY_SHADE_ALPHA, PAIRED_SWIRL_DURATION_MS,
    PAIRED_SWIRL_SPIN_BASE, PAIRED_SWIRL_SPIN_SPAN, SWIRL_INTENSITY_MIN,
};
use crate::draw::{Composite, DrawCmd, DrawList, GradientStop, Viewport};
use crate::effects::{
    normalize_velocity, transition_duration_ms, FireworkSystem, Ripple, RipplePool, Swirl,
    SwirlPool,
};
use crate::palette::Palette;
use crate::settings::{clamp_decay, parse_decay_input, EffectKind, SettingsStore, TransitionSettings};
use crate::simultaneity::{Pairing, SimultaneityDetector};
use glam::Vec2;
use rand::prelude::*;
use smallvec::smallvec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Normal,
    Firework,
}

pub fn ambient_color() -> Rgb {
    Rgb::from_hex(AMBIENT_COLOR_HEX).unwrap_or(Rgb::BLACK)
}

pub struct VisualEngine {
    palette: Box<dyn Palette>,
    store: Box<dyn SettingsStore>,
    settings: TransitionSettings,
    viewport: Viewport,
    mode: RenderMode,
    blender: Blender,
    ripples: RipplePool,
    swirls: SwirlPool,
    fireworks: FireworkSystem,
    detector: SimultaneityDetector,
    last_transition_color: Rgb,
    rng: StdRng,
}

impl VisualEngine {
    /// Build an engine, loading settings from `store` (defaults when absent
    /// or malformed). `seed` drives particle and spin randomness.
    pub fn new(palette: Box<dyn Palette>, store: Box<dyn SettingsStore>, seed: u64) -> Self {
        let settings = store.load().unwrap_or_default();
        log::info!(
            "[engine] settings decay={}ms effect={}",
            settings.decay_ms,
            settings.effect.as_str()
        );
        let ambient = ambient_color();
        Self {
            palette,
            store,
            settings,
            viewport: Viewport::default(),
            mode: RenderMode::Normal,
            blender: Blender::new(ambient, AMBIENT_INTENSITY),
            ripples: RipplePool::new(),
            swirls: SwirlPool::new(),
            fireworks: FireworkSystem::new(),
            detector: SimultaneityDetector::new(),
            last_transition_color: ambient,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // ---------------- viewport ----------------

    /// Set the drawing area in CSS pixels. Must run before the first frame
    /// and only between frames.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ---------------- note events ----------------

    /// Paint `color` with a MIDI `velocity`: a firework burst in firework
    /// mode, otherwise a new backdrop target plus a ripple or swirl.
    pub fn paint(&mut self, color: Rgb, velocity: i32, now: f64) {
        let factor = normalize_velocity(velocity);
        if self.mode == RenderMode::Firework {
            self.blender
                .set_target(Rgb::BLACK, FIREWORK_TARGET_INTENSITY);
            self.fireworks.spawn(&mut self.rng, color, factor, now);
            return;
        }
        self.blender.set_target(color, factor);
        self.apply_transition(color, factor, now);
    }

    pub fn handle_note_on(&mut self, pitch: i32, velocity: i32, now: f64) {
        self.detector.prune(now);
        let color = self.palette.color_for_pitch(pitch);
        self.paint(color, velocity, now);
        if let Some(pairing) = self.detector.note_on(pitch, velocity, now) {
            if self.mode == RenderMode::Normal {
                self.trigger_paired_swirl(&pairing, now);
            }
        }
    }

    pub fn handle_note_off(&mut self, pitch: i32, now: f64) {
        self.detector.note_off(pitch, now);
    }

    fn apply_transition(&mut self, color: Rgb, factor: f32, now: f64) {
        let duration = transition_duration_ms(self.settings.decay_ms, factor);
        match self.settings.effect {
            EffectKind::Swirl => {
                let spin = MANUAL_SWIRL_SPIN_BASE + self.rng.gen::<f32>() * MANUAL_SWIRL_SPIN_SPAN;
                self.swirls.push(Swirl {
                    color_a: color,
                    color_b: self.last_transition_color,
                    intensity: factor.clamp(SWIRL_INTENSITY_MIN, 1.0),
                    start: now,
                    duration,
                    spin,
                });
            }
            EffectKind::Ripple => {
                self.ripples.push(Ripple {
                    color,
                    velocity_factor: factor,
                    start: now,
                    duration,
                });
            }
        }
        self.last_transition_color = color;
    }

    fn trigger_paired_swirl(&mut self, pairing: &Pairing, now: f64) {
        let spin = PAIRED_SWIRL_SPIN_BASE + self.rng.gen::<f32>() * PAIRED_SWIRL_SPIN_SPAN;
        self.swirls.push(Swirl {
            color_a: self.palette.color_for_pitch(pairing.current.pitch),
            color_b: self.palette.color_for_pitch(pairing.partner.pitch),
            intensity: pairing.intensity(),
            start: now,
            duration: PAIRED_SWIRL_DURATION_MS,
            spin,
        });
    }

    // ---------------- mode ----------------

    pub fn set_firework_mode(&mut self, enabled: bool) {
        if enabled {
            self.ripples.clear();
            self.swirls.clear();
            self.blender
                .set_target(Rgb::BLACK, FIREWORK_TARGET_INTENSITY);
            self.mode = RenderMode::Firework;
        } else {
            self.fireworks.clear();
            self.blender.set_target(ambient_color(), AMBIENT_INTENSITY);
            self.mode = RenderMode::Normal;
        }
        log::info!("[engine] mode={:?}", self.mode);
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn is_firework_mode(&self) -> bool {
        self.mode == RenderMode::Firework
    }

    // ---------------- settings ----------------

    pub fn settings(&self) -> TransitionSettings {
        self.settings
    }

    pub fn set_decay_ms(&mut self, decay_ms: f64) {
        self.settings.decay_ms = clamp_decay(decay_ms);
        self.persist_settings();
    }

    pub fn set_decay_input(&mut self, text: &str) {
        self.settings.decay_ms = parse_decay_input(text);
        self.persist_settings();
    }

    pub fn set_effect(&mut self, effect: EffectKind) {
        self.settings.effect = effect;
        self.persist_settings();
    }

    pub fn set_effect_input(&mut self, text: &str) {
        self.set_effect(EffectKind::from_input(text));
    }

    fn persist_settings(&mut self) {
        if let Err(e) = self.store.save(&self.settings) {
            log::warn!("[engine] could not persist settings: {e}");
        }
    }

    // ---------------- palette ----------------

    pub fn palette(&self) -> &dyn Palette {
        self.palette.as_ref()
    }

    pub fn set_palette(&mut self, palette: Box<dyn Palette>) {
        self.palette = palette;
    }

    // ---------------- frame ----------------

    /// Advance all state to `now` and describe the frame into `list`.
    pub fn render_frame(&mut self, now: f64, list: &mut DrawList) {
        list.begin(self.viewport);
        self.blender.advance();
        match self.mode {
            RenderMode::Firework => self.render_firework_sky(now, list),
            RenderMode::Normal => self.render_color_field(now, list),
        }
    }

    fn render_firework_sky(&mut self, now: f64, list: &mut DrawList) {
        list.push(DrawCmd::Clear);
        list.push(DrawCmd::Composite(Composite::SourceOver));
        list.push(DrawCmd::Fill {
            color: Rgb::BLACK,
            alpha: 1.0,
        });
        list.push(DrawCmd::Composite(Composite::Lighter));
        self.fireworks.render(now, list);
    }

    fn render_color_field(&mut self, now: f64, list: &mut DrawList) {
        let intensity = self.blender.current_intensity;
        list.push(DrawCmd::Clear);
        list.push(DrawCmd::Composite(Composite::SourceOver));
        list.push(DrawCmd::Fill {
            color: self.blender.current_color,
            alpha: 1.0,
        });
        list.push(DrawCmd::LinearFill {
            from: Vec2::ZERO,
            to: Vec2::new(self.viewport.width, self.viewport.height),
            stops: smallvec![
                GradientStop {
                    offset: 0.0,
                    color: Rgb::WHITE,
                    alpha: OVERLAY_LIGHT_ALPHA * intensity,
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgb::BLACK,
                    alpha: OVERLAY_SHADE_ALPHA * intensity,
                },
            ],
        });
        list.push(DrawCmd::Composite(Composite::Lighter));
        self.ripples.retain(|ripple| ripple.render(now, list));
        self.swirls.retain(|swirl| swirl.render(now, list));
    }

    // ---------------- inspection ----------------

    pub fn blender(&self) -> &Blender {
        &self.blender
    }

    pub fn ripples(&self) -> &RipplePool {
        &self.ripples
    }

    pub fn swirls(&self) -> &SwirlPool {
        &self.swirls
    }

    pub fn fireworks(&self) -> &FireworkSystem {
        &self.fireworks
    }

    pub fn detector(&self) -> &SimultaneityDetector {
        &self.detector
    }
}
