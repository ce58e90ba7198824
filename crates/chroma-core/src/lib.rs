pub mod blend;
pub mod color;
pub mod constants;
pub mod draw;
pub mod easing;
pub mod effects;
pub mod engine;
pub mod error;
pub mod palette;
pub mod pool;
pub mod settings;
pub mod simultaneity;

pub use blend::Blender;
pub use color::Rgb;
pub use draw::{Composite, DrawCmd, DrawList, GradientStop, Viewport};
pub use effects::{normalize_velocity, transition_duration_ms};
pub use engine::{ambient_color, RenderMode, VisualEngine};
pub use error::{ChromaError, Result};
pub use palette::{note_label, Palette, SpectrumPalette};
pub use settings::{EffectKind, MemoryStore, SettingsStore, TransitionSettings};
pub use simultaneity::{NoteHit, Pairing, SimultaneityDetector};
