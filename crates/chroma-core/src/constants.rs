// Shared visual tuning constants for the color field engine.

// Ambient backdrop
pub const AMBIENT_COLOR_HEX: &str = "#0b1021";
pub const AMBIENT_INTENSITY: f32 = 0.4;

// Firework backdrop
pub const FIREWORK_TARGET_INTENSITY: f32 = 0.9;

// Blender convergence (fraction of remaining distance per frame)
pub const COLOR_BLEND_RATE: f32 = 0.065;
pub const INTENSITY_BLEND_RATE: f32 = 0.05;

// Velocity normalization
pub const MIDI_VELOCITY_MAX: f32 = 127.0;
pub const VELOCITY_FACTOR_MIN: f32 = 0.25;

// Transition settings
pub const DECAY_MS_MIN: u32 = 400;
pub const DECAY_MS_MAX: u32 = 2200;
pub const DEFAULT_DECAY_MS: u32 = 1100;
pub const VELOCITY_DURATION_SPAN_MS: f64 = 320.0; // extra lifetime for soft strikes

// Effect pools
pub const RIPPLE_POOL_CAPACITY: usize = 8;
pub const SWIRL_POOL_CAPACITY: usize = 6;

// Ripple geometry (fractions of the viewport diagonal)
pub const RIPPLE_START_RADIUS: f32 = 0.04;
pub const RIPPLE_END_RADIUS: f32 = 0.55;
pub const RIPPLE_INNER_FRACTION: f32 = 0.2; // gradient starts at 20% of the radius
pub const RIPPLE_ALPHA_SCALE: f32 = 0.75;

// Swirl geometry
pub const SWIRL_OUTER_RADIUS: f32 = 0.55; // of the viewport diagonal
pub const SWIRL_INNER_RADIUS: f32 = 0.05; // of the smaller viewport side
pub const SWIRL_ALPHA_SCALE: f32 = 0.9;
pub const SWIRL_SECOND_STROKE_ALPHA: f32 = 0.9;
pub const SWIRL_ROTATION_TURNS: f32 = 3.0; // in units of pi
pub const SWIRL_SEGMENTS: usize = 64;
pub const SWIRL_BASE_TURNS: f32 = 2.2;
pub const SWIRL_TURNS_PER_SPIN: f32 = 0.5;
pub const SWIRL_WIDTH_WIDE: f32 = 0.08; // of the viewport width
pub const SWIRL_WIDTH_NARROW: f32 = 0.015;
pub const SWIRL_INTENSITY_MIN: f32 = 0.35;
pub const MANUAL_SWIRL_SPIN_BASE: f32 = 1.1;
pub const MANUAL_SWIRL_SPIN_SPAN: f32 = 1.6;

// Simultaneity detection
pub const SIMULTANEOUS_WINDOW_MS: f64 = 80.0;
pub const PAIRED_SWIRL_DURATION_MS: f64 = 1200.0;
pub const PAIRED_SWIRL_SPIN_BASE: f32 = 1.5;
pub const PAIRED_SWIRL_SPIN_SPAN: f32 = 1.8;

// Fireworks
pub const FIREWORK_DURATION_MS: f64 = 10_000.0;
pub const FIREWORK_PARTICLES: usize = 130;
pub const FIREWORK_INTENSITY_MIN: f32 = 0.35;
pub const FIREWORK_SPEED_RANGE: (f32, f32) = (90.0, 240.0); // px at full travel
pub const FIREWORK_SIZE_RANGE: (f32, f32) = (1.2, 3.8);
pub const FIREWORK_DECAY_RANGE: (f32, f32) = (0.45, 0.95);
pub const FIREWORK_SPREAD_RANGE: (f32, f32) = (0.6, 1.1);
pub const FIREWORK_GRAVITY: f32 = 60.0; // px of droop at the end of a burst
pub const FIREWORK_VISIBLE_ALPHA: f32 = 0.01;
pub const FIREWORK_TWINKLE_RATE: f32 = 0.02; // radians per elapsed ms
pub const FIREWORK_GLOW_RADIUS: f32 = 2.6; // disc radius in particle sizes
pub const FIREWORK_GLOW_FALLOFF: f32 = 3.2; // gradient radius in particle sizes

// Backdrop overlay
pub const OVERLAY_LIGHT_ALPHA: f32 = 0.16;
pub const OVERLAY_SHADE_ALPHA: f32 = 0.22;

// Palette octave shading
pub const LOWER_OCTAVE: i32 = 3;
pub const UPPER_OCTAVE: i32 = 5;
pub const LOWER_OCTAVE_SHADE: f32 = 0.68;
pub const UPPER_OCTAVE_SHADE: f32 = 1.22;
