#![cfg(target_arch = "wasm32")]
use chroma_core::{ambient_color, Rgb, SpectrumPalette, TransitionSettings, VisualEngine};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod keymap;
mod overlay;
mod render;
mod storage;

use constants::*;
use frame::{AnimationLoop, Clock, FrameContext};

/// Page-lifetime state shared by the exported handle, input listeners and
/// the frame loop. Everything runs on the browser's single event loop.
pub(crate) struct App {
    engine: Rc<RefCell<VisualEngine>>,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    clock: Clock,
    animation: AnimationLoop,
    piano_visible: Cell<bool>,
    ui_visible: Cell<bool>,
}

impl App {
    fn build(document: web::Document, canvas_id: &str) -> anyhow::Result<Self> {
        let canvas = dom::find_canvas(&document, canvas_id)?;
        let painter = render::CanvasPainter::new(&canvas)?;
        let engine = Rc::new(RefCell::new(VisualEngine::new(
            Box::new(SpectrumPalette::default()),
            Box::new(storage::LocalStorageStore::new(SETTINGS_STORAGE_KEY)),
            rand::random::<u64>(),
        )));
        let clock = Clock::new();
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            engine: engine.clone(),
            painter,
            list: chroma_core::DrawList::new(),
            clock,
        }));
        Ok(Self {
            engine,
            document,
            canvas,
            clock,
            animation: AnimationLoop::new(frame_ctx),
            piano_visible: Cell::new(PIANO_VISIBLE_ON_MOUNT),
            ui_visible: Cell::new(UI_VISIBLE_ON_MOUNT),
        })
    }

    pub(crate) fn note_on(&self, pitch: i32, velocity: i32) {
        let now = self.clock.now_ms();
        let label = {
            let mut engine = self.engine.borrow_mut();
            engine.handle_note_on(pitch, velocity, now);
            engine.palette().label_for_pitch(pitch)
        };
        overlay::show_note(&self.document, &label, velocity);
    }

    pub(crate) fn note_off(&self, pitch: i32) {
        let now = self.clock.now_ms();
        self.engine.borrow_mut().handle_note_off(pitch, now);
    }

    fn paint(&self, color: Rgb, velocity: i32) {
        let now = self.clock.now_ms();
        self.engine.borrow_mut().paint(color, velocity, now);
    }

    pub(crate) fn is_firework_mode(&self) -> bool {
        self.engine.borrow().is_firework_mode()
    }

    pub(crate) fn set_firework_mode(&self, enabled: bool) {
        self.engine.borrow_mut().set_firework_mode(enabled);
        self.refresh_mode();
    }

    fn refresh_mode(&self) {
        let (firework, effect) = {
            let engine = self.engine.borrow();
            (engine.is_firework_mode(), engine.settings().effect)
        };
        overlay::show_mode(&self.document, firework, effect.as_str());
    }

    pub(crate) fn piano_visible(&self) -> bool {
        self.piano_visible.get()
    }

    pub(crate) fn set_piano_visible(&self, visible: bool) {
        self.piano_visible.set(visible);
        overlay::set_piano_visible(&self.document, visible);
    }

    pub(crate) fn ui_visible(&self) -> bool {
        self.ui_visible.get()
    }

    pub(crate) fn set_ui_visible(&self, visible: bool) {
        self.ui_visible.set(visible);
        overlay::set_ui_visible(&self.document, visible);
    }

    pub(crate) fn settings(&self) -> TransitionSettings {
        self.engine.borrow().settings()
    }

    pub(crate) fn set_decay_ms(&self, decay_ms: f64) {
        self.engine.borrow_mut().set_decay_ms(decay_ms);
        log::info!("[settings] decay={}ms", self.settings().decay_ms);
    }

    pub(crate) fn set_effect(&self, effect: chroma_core::EffectKind) {
        self.engine.borrow_mut().set_effect(effect);
        self.refresh_mode();
    }

    fn resize(&self) {
        if let Some(size) = dom::sync_canvas_backing_size(&self.canvas) {
            self.engine
                .borrow_mut()
                .resize(size.css_width, size.css_height);
            self.animation
                .frame_ctx()
                .borrow_mut()
                .painter
                .set_pixel_ratio(size.pixel_ratio);
        }
    }
}

/// Handle returned to JavaScript. Clones share one mounted visualizer.
#[wasm_bindgen]
#[derive(Clone)]
pub struct Visuals {
    app: Rc<App>,
}

#[wasm_bindgen]
impl Visuals {
    /// Mount onto the canvas with id `canvas_id`, wire keyboard and resize
    /// listeners, paint the ambient wash and start the frame loop.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<Visuals, JsValue> {
        let document =
            dom::window_document().ok_or_else(|| JsValue::from_str("no window document"))?;
        let app = App::build(document, canvas_id)
            .map_err(|e| JsValue::from_str(&format!("mount failed: {e}")))?;
        let app = Rc::new(app);

        app.resize();
        let app_resize = app.clone();
        dom::add_window_listener("resize", move || app_resize.resize());
        events::wire_keyboard(app.clone());

        app.set_piano_visible(PIANO_VISIBLE_ON_MOUNT);
        app.set_ui_visible(UI_VISIBLE_ON_MOUNT);
        app.refresh_mode();
        app.paint(ambient_color(), STARTUP_PAINT_VELOCITY);
        app.animation.start();
        log::info!("[mount] visualizer attached to #{canvas_id}");
        Ok(Visuals { app })
    }

    #[wasm_bindgen(js_name = noteOn)]
    pub fn note_on(&self, pitch: i32, velocity: i32) {
        self.app.note_on(pitch, velocity);
    }

    #[wasm_bindgen(js_name = noteOff)]
    pub fn note_off(&self, pitch: i32) {
        self.app.note_off(pitch);
    }

    /// Paint an arbitrary `#RRGGBB` / `#RGB` color.
    pub fn paint(&self, hex: &str, velocity: i32) -> Result<(), JsValue> {
        let color = Rgb::from_hex(hex).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.app.paint(color, velocity);
        Ok(())
    }

    #[wasm_bindgen(js_name = setFireworkMode)]
    pub fn set_firework_mode(&self, enabled: bool) {
        self.app.set_firework_mode(enabled);
    }

    #[wasm_bindgen(js_name = fireworkMode)]
    pub fn firework_mode(&self) -> bool {
        self.app.is_firework_mode()
    }

    #[wasm_bindgen(js_name = setPianoVisibility)]
    pub fn set_piano_visibility(&self, visible: bool) {
        self.app.set_piano_visible(visible);
    }

    #[wasm_bindgen(js_name = setUiVisibility)]
    pub fn set_ui_visibility(&self, visible: bool) {
        self.app.set_ui_visible(visible);
    }

    /// Decay text from an input field; unparsable text falls back to the default.
    #[wasm_bindgen(js_name = setDecay)]
    pub fn set_decay(&self, text: &str) {
        self.app.engine.borrow_mut().set_decay_input(text);
    }

    #[wasm_bindgen(js_name = setEffect)]
    pub fn set_effect(&self, text: &str) {
        self.app.engine.borrow_mut().set_effect_input(text);
        self.app.refresh_mode();
    }

    #[wasm_bindgen(js_name = decayMs)]
    pub fn decay_ms(&self) -> u32 {
        self.app.settings().decay_ms
    }

    pub fn effect(&self) -> String {
        self.app.settings().effect.as_str().to_string()
    }

    #[wasm_bindgen(js_name = startLoop)]
    pub fn start_loop(&self) {
        self.app.animation.start();
    }

    #[wasm_bindgen(js_name = stopLoop)]
    pub fn stop_loop(&self) {
        self.app.animation.stop();
    }

    pub fn resize(&self) {
        self.app.resize();
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Visuals>> = const { RefCell::new(None) };
}

/// The visualizer auto-mounted at startup, if the page had a default canvas.
#[wasm_bindgen]
pub fn mounted() -> Option<Visuals> {
    MOUNTED.with(|m| m.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chroma-web starting");

    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .is_some();
    if has_canvas {
        let visuals = Visuals::new(CANVAS_ID)?;
        MOUNTED.with(|m| *m.borrow_mut() = Some(visuals));
    } else {
        log::info!("[mount] no #{CANVAS_ID}; waiting for an explicit mount");
    }
    Ok(())
}
