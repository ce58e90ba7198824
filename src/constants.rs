// Front-end wiring constants: DOM ids, storage keys, and input defaults.

// Elements
pub const CANVAS_ID: &str = "viz";
pub const NOTE_PILL_ID: &str = "note-pill";
pub const MODE_PILL_ID: &str = "mode-pill";
pub const INFO_ID: &str = "info";
pub const PIANO_ID: &str = "piano";

// Body classes
pub const UI_HIDDEN_CLASS: &str = "ui-hidden";
pub const FIREWORK_CLASS: &str = "firework-mode";

// Visibility on mount; performers reveal them with keys 2 and 3
pub const PIANO_VISIBLE_ON_MOUNT: bool = false;
pub const UI_VISIBLE_ON_MOUNT: bool = false;

// Persistence
pub const SETTINGS_STORAGE_KEY: &str = "transitionSettings";

// Input
pub const KEYBOARD_VELOCITY: i32 = 110; // computer keys carry no velocity
pub const STARTUP_PAINT_VELOCITY: i32 = 40; // soft ambient wash on mount
pub const DECAY_STEP_MS: f64 = 100.0;

// Labels
pub const MODE_LABEL_NORMAL: &str = "Velocity reactive";
pub const MODE_LABEL_FIREWORK: &str = "Firework sky";
pub const INFO_FIREWORK: &str = "Firework mode: black backdrop with glittering bursts.";
