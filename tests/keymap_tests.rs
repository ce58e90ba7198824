// Host-side tests for the computer-keyboard layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keymap {
    include!("../src/keymap.rs");
}

use keymap::*;

#[test]
fn home_row_plays_c_major_from_middle_c() {
    let white: Vec<_> = ["a", "s", "d", "f", "g", "h", "j", "k"]
        .iter()
        .map(|k| pitch_for_key(k, 0).unwrap())
        .collect();
    assert_eq!(white, vec![60, 62, 64, 65, 67, 69, 71, 72]);
}

#[test]
fn top_row_fills_in_sharps() {
    for (key, pitch) in [("w", 61), ("e", 63), ("t", 66), ("y", 68), ("u", 70), ("o", 73), ("p", 75)] {
        assert_eq!(pitch_for_key(key, 0), Some(pitch), "key {key}");
    }
}

#[test]
fn letter_case_does_not_matter() {
    assert_eq!(pitch_for_key("A", 0), pitch_for_key("a", 0));
    assert_eq!(command_for_key("Z"), Some(KeyCommand::OctaveDown));
}

#[test]
fn octave_shift_moves_by_twelve_and_is_bounded() {
    assert_eq!(pitch_for_key("a", 1), Some(72));
    assert_eq!(pitch_for_key("a", -2), Some(36));
    assert_eq!(shift_octave(OCTAVE_SHIFT_MAX, 1), OCTAVE_SHIFT_MAX);
    assert_eq!(shift_octave(OCTAVE_SHIFT_MIN, -1), OCTAVE_SHIFT_MIN);
    assert_eq!(shift_octave(0, -1), -1);
}

#[test]
fn pitches_stay_in_midi_range() {
    for shift in OCTAVE_SHIFT_MIN..=OCTAVE_SHIFT_MAX {
        for key in ["a", "w", "k", ";"] {
            if let Some(p) = pitch_for_key(key, shift) {
                assert!((0..=127).contains(&p));
            }
        }
    }
    // E at the top shift would be 64 + 48 = 112, still valid; nothing maps above 127.
    assert_eq!(pitch_for_key(";", OCTAVE_SHIFT_MAX), Some(112));
}

#[test]
fn unmapped_keys_play_nothing() {
    for key in ["q", "Enter", " ", "ArrowUp", ""] {
        assert_eq!(pitch_for_key(key, 0), None);
    }
}

#[test]
fn digits_toggle_modes_without_playing() {
    assert_eq!(command_for_key("1"), Some(KeyCommand::ToggleFireworks));
    assert_eq!(command_for_key("2"), Some(KeyCommand::TogglePiano));
    assert_eq!(command_for_key("3"), Some(KeyCommand::ToggleUi));
    assert_eq!(command_for_key("4"), Some(KeyCommand::CycleEffect));
    for key in ["1", "2", "3", "4", "z", "x", "[", "]"] {
        assert_eq!(pitch_for_key(key, 0), None, "command key {key} must not play");
    }
}
