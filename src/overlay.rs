use crate::constants::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
fn toggle_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        _ = body.class_list().toggle_with_force(class, on);
    }
}

/// "C4 · velocity 100"
pub fn note_pill_text(label: &str, velocity: i32) -> String {
    format!("{label} · velocity {}", velocity.clamp(0, 127))
}

#[inline]
pub fn show_note(document: &web::Document, label: &str, velocity: i32) {
    set_text(document, NOTE_PILL_ID, &note_pill_text(label, velocity));
}

pub fn show_mode(document: &web::Document, firework: bool, effect: &str) {
    toggle_body_class(document, FIREWORK_CLASS, firework);
    if firework {
        set_text(document, MODE_PILL_ID, MODE_LABEL_FIREWORK);
        set_text(document, INFO_ID, INFO_FIREWORK);
    } else {
        set_text(document, MODE_PILL_ID, MODE_LABEL_NORMAL);
        set_text(
            document,
            INFO_ID,
            &format!("Effect: {effect}. Play notes to paint the backdrop."),
        );
    }
}

#[inline]
pub fn set_ui_visible(document: &web::Document, visible: bool) {
    toggle_body_class(document, UI_HIDDEN_CLASS, !visible);
}

pub fn set_piano_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document
        .get_element_by_id(PIANO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        el.set_hidden(!visible);
    }
}
