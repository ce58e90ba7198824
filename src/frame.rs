use crate::render::CanvasPainter;
use chroma_core::{DrawList, VisualEngine};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic millisecond clock shared by input handlers and the frame loop.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub engine: Rc<RefCell<VisualEngine>>,
    pub painter: CanvasPainter,
    pub list: DrawList,
    pub clock: Clock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        self.engine.borrow_mut().render_frame(now, &mut self.list);
        self.painter.paint(&self.list);
    }
}

/// requestAnimationFrame driver. Starting twice keeps a single loop;
/// stopping cancels the pending frame.
pub struct AnimationLoop {
    frame_ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        Self {
            frame_ctx,
            tick: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn frame_ctx(&self) -> &Rc<RefCell<FrameContext>> {
        &self.frame_ctx
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        if self.tick.borrow().is_none() {
            let tick_clone = self.tick.clone();
            let pending = self.pending.clone();
            let frame_ctx = self.frame_ctx.clone();
            *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                // Cancelled between frames: a stale callback must not re-arm.
                if pending.get().is_none() {
                    return;
                }
                frame_ctx.borrow_mut().frame();
                pending.set(request_frame(&tick_clone));
            }) as Box<dyn FnMut()>));
        }
        self.pending.set(request_frame(&self.tick));
        log::info!("[frame] loop started");
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::info!("[frame] loop stopped");
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
