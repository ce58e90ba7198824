//! Transition settings: the single persisted record.
//!
//! Decoding is deliberately forgiving. A stored record that is not valid JSON
//! (or not an object) yields `None` from [`SettingsStore::load`]; individual
//! bad fields fall back to their defaults instead of failing the whole record.

use crate::constants::{DECAY_MS_MAX, DECAY_MS_MIN, DEFAULT_DECAY_MS};
use crate::error::Result;
use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    #[default]
    Ripple,
    Swirl,
}

impl EffectKind {
    /// Anything other than `"swirl"` is treated as the ripple default.
    pub fn from_input(text: &str) -> Self {
        match text.trim() {
            "swirl" => EffectKind::Swirl,
            _ => EffectKind::Ripple,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Ripple => "ripple",
            EffectKind::Swirl => "swirl",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSettings {
    #[serde(default = "default_decay_ms", deserialize_with = "lenient_decay")]
    pub decay_ms: u32,
    #[serde(default, deserialize_with = "lenient_effect")]
    pub effect: EffectKind,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            decay_ms: DEFAULT_DECAY_MS,
            effect: EffectKind::Ripple,
        }
    }
}

impl TransitionSettings {
    pub fn new(decay_ms: f64, effect: EffectKind) -> Self {
        Self {
            decay_ms: clamp_decay(decay_ms),
            effect,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Clamp a requested decay into `[DECAY_MS_MIN, DECAY_MS_MAX]`.
/// Non-finite input falls back to the default.
pub fn clamp_decay(value: f64) -> u32 {
    let safe = if value.is_finite() {
        value
    } else {
        DEFAULT_DECAY_MS as f64
    };
    safe.round()
        .clamp(DECAY_MS_MIN as f64, DECAY_MS_MAX as f64) as u32
}

/// Decay from free-form control input (slider values arrive as text).
pub fn parse_decay_input(text: &str) -> u32 {
    let value = text
        .trim()
        .parse::<f64>()
        .unwrap_or(DEFAULT_DECAY_MS as f64);
    clamp_decay(value)
}

fn default_decay_ms() -> u32 {
    DEFAULT_DECAY_MS
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecayField {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EffectField {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_decay<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    Ok(match DecayField::deserialize(deserializer)? {
        DecayField::Number(n) => clamp_decay(n),
        DecayField::Text(s) => parse_decay_input(&s),
        DecayField::Other(_) => DEFAULT_DECAY_MS,
    })
}

fn lenient_effect<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<EffectKind, D::Error> {
    Ok(match EffectField::deserialize(deserializer)? {
        EffectField::Text(s) => EffectKind::from_input(&s),
        EffectField::Other(_) => EffectKind::Ripple,
    })
}

/// Persistence seam for [`TransitionSettings`].
///
/// Implementors only move raw JSON text; decoding and its fallbacks live in
/// the provided `load`/`save` methods so every backend behaves the same.
pub trait SettingsStore {
    fn read_raw(&self) -> Option<String>;
    fn write_raw(&mut self, json: &str) -> Result<()>;

    fn load(&self) -> Option<TransitionSettings> {
        let raw = self.read_raw()?;
        match TransitionSettings::from_json(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("[settings] ignoring stored record: {e}");
                None
            }
        }
    }

    fn save(&mut self, settings: &TransitionSettings) -> Result<()> {
        let json = settings.to_json()?;
        self.write_raw(&json)
    }
}

/// In-memory store. Clones share the same slot, so a caller can keep a handle
/// after moving a clone into an engine.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(json: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(json.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SettingsStore for MemoryStore {
    fn read_raw(&self) -> Option<String> {
        self.raw()
    }

    fn write_raw(&mut self, json: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(json.to_string());
        Ok(())
    }
}
