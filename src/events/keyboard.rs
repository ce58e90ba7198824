use crate::constants::{DECAY_STEP_MS, KEYBOARD_VELOCITY};
use crate::keymap::{command_for_key, pitch_for_key, shift_octave, KeyCommand};
use crate::App;
use chroma_core::EffectKind;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Held computer keys, each mapped to the pitch it started so that an octave
/// shift mid-press still releases the right note.
#[derive(Default)]
pub struct KeyboardState {
    held: FnvHashMap<String, i32>,
    octave_shift: i32,
}

fn is_editing(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "SELECT" | "TEXTAREA"))
        .unwrap_or(false)
}

pub fn handle_keydown(ev: &web::KeyboardEvent, app: &App, state: &Rc<RefCell<KeyboardState>>) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() || is_editing(ev) {
        return;
    }
    let key = ev.key().to_ascii_lowercase();

    if let Some(cmd) = command_for_key(&key) {
        run_command(cmd, app, state);
        return;
    }

    let mut st = state.borrow_mut();
    if st.held.contains_key(&key) {
        return;
    }
    if let Some(pitch) = pitch_for_key(&key, st.octave_shift) {
        st.held.insert(key, pitch);
        drop(st);
        app.note_on(pitch, KEYBOARD_VELOCITY);
        ev.prevent_default();
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, app: &App, state: &Rc<RefCell<KeyboardState>>) {
    let key = ev.key().to_ascii_lowercase();
    let released = state.borrow_mut().held.remove(&key);
    if let Some(pitch) = released {
        app.note_off(pitch);
    }
}

fn run_command(cmd: KeyCommand, app: &App, state: &Rc<RefCell<KeyboardState>>) {
    match cmd {
        KeyCommand::ToggleFireworks => app.set_firework_mode(!app.is_firework_mode()),
        KeyCommand::TogglePiano => app.set_piano_visible(!app.piano_visible()),
        KeyCommand::ToggleUi => app.set_ui_visible(!app.ui_visible()),
        KeyCommand::CycleEffect => {
            let next = match app.settings().effect {
                EffectKind::Ripple => EffectKind::Swirl,
                EffectKind::Swirl => EffectKind::Ripple,
            };
            app.set_effect(next);
        }
        KeyCommand::OctaveDown | KeyCommand::OctaveUp => {
            let delta = if cmd == KeyCommand::OctaveUp { 1 } else { -1 };
            let mut st = state.borrow_mut();
            st.octave_shift = shift_octave(st.octave_shift, delta);
            log::info!("[keys] octave shift={}", st.octave_shift);
        }
        KeyCommand::DecayDown | KeyCommand::DecayUp => {
            let step = if cmd == KeyCommand::DecayUp {
                DECAY_STEP_MS
            } else {
                -DECAY_STEP_MS
            };
            app.set_decay_ms(app.settings().decay_ms as f64 + step);
        }
    }
}
