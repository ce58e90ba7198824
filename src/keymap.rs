// Computer-keyboard layout for playing notes and toggling modes.
// Pure functions only, so host tests can include this file directly.

pub const BASE_PITCH: i32 = 60; // 'a' plays C4 with no octave shift
pub const OCTAVE_SHIFT_MIN: i32 = -4;
pub const OCTAVE_SHIFT_MAX: i32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleFireworks,
    TogglePiano,
    ToggleUi,
    CycleEffect,
    OctaveDown,
    OctaveUp,
    DecayDown,
    DecayUp,
}

/// Semitone offset for the two-row piano layout (home row = white keys,
/// top row = black keys).
#[inline]
pub fn semitone_for_key(key: &str) -> Option<i32> {
    match key.to_ascii_lowercase().as_str() {
        "a" => Some(0),  // C
        "w" => Some(1),  // C#
        "s" => Some(2),  // D
        "e" => Some(3),  // D#
        "d" => Some(4),  // E
        "f" => Some(5),  // F
        "t" => Some(6),  // F#
        "g" => Some(7),  // G
        "y" => Some(8),  // G#
        "h" => Some(9),  // A
        "u" => Some(10), // A#
        "j" => Some(11), // B
        "k" => Some(12), // C
        "o" => Some(13), // C#
        "l" => Some(14), // D
        "p" => Some(15), // D#
        ";" => Some(16), // E
        _ => None,
    }
}

/// MIDI pitch for `key` at the given octave shift, if it lands in 0..=127.
#[inline]
pub fn pitch_for_key(key: &str, octave_shift: i32) -> Option<i32> {
    let pitch = BASE_PITCH + 12 * octave_shift + semitone_for_key(key)?;
    (0..=127).contains(&pitch).then_some(pitch)
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key.to_ascii_lowercase().as_str() {
        "1" => Some(KeyCommand::ToggleFireworks),
        "2" => Some(KeyCommand::TogglePiano),
        "3" => Some(KeyCommand::ToggleUi),
        "4" => Some(KeyCommand::CycleEffect),
        "z" => Some(KeyCommand::OctaveDown),
        "x" => Some(KeyCommand::OctaveUp),
        "[" => Some(KeyCommand::DecayDown),
        "]" => Some(KeyCommand::DecayUp),
        _ => None,
    }
}

#[inline]
pub fn shift_octave(current: i32, delta: i32) -> i32 {
    (current + delta).clamp(OCTAVE_SHIFT_MIN, OCTAVE_SHIFT_MAX)
}
