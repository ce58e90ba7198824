use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{id} is not a canvas: {:?}", e)))
}

/// Canvas size in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug)]
pub struct CanvasSize {
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_ratio: f64,
}

/// Match the canvas backing store to its CSS box times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<CanvasSize> {
    let w = web::window()?;
    let dpr = w.device_pixel_ratio().max(1.0);
    let rect = canvas.get_bounding_client_rect();
    let (css_w, css_h) = if rect.width() > 0.0 && rect.height() > 0.0 {
        (rect.width(), rect.height())
    } else {
        let iw = w.inner_width().ok()?.as_f64()?;
        let ih = w.inner_height().ok()?.as_f64()?;
        (iw, ih)
    };
    canvas.set_width(((css_w * dpr) as u32).max(1));
    canvas.set_height(((css_h * dpr) as u32).max(1));
    Some(CanvasSize {
        css_width: css_w as f32,
        css_height: css_h as f32,
        pixel_ratio: dpr,
    })
}
