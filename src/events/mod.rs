pub mod keyboard;

use crate::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn add_key_listener(
    window: &web::Window,
    event: &str,
    handler: impl Fn(&web::KeyboardEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handler(&ev);
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Route window key events into the app for the page's lifetime.
pub fn wire_keyboard(app: Rc<App>) {
    let Some(window) = web::window() else {
        return;
    };
    let state = Rc::new(RefCell::new(keyboard::KeyboardState::default()));

    let (app_down, state_down) = (app.clone(), state.clone());
    add_key_listener(&window, "keydown", move |ev| {
        keyboard::handle_keydown(ev, &app_down, &state_down);
    });
    add_key_listener(&window, "keyup", move |ev| {
        keyboard::handle_keyup(ev, &app, &state);
    });
}
