use crate::constants::{CANVAS_ID, CANVAS_STYLE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener_by_id(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            add_click_listener(&el, handler);
            true
        }
        None => false,
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Create the full-viewport background canvas and append it to `<body>`.
pub fn create_backdrop_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    canvas
        .set_attribute("style", CANVAS_STYLE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Run `handler` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, handler: impl FnOnce() + 'static) {
    let closure = Closure::once(handler);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
    }
    closure.forget();
}

/// Run `handler` when the page has finished loading (immediately if it already has).
pub fn on_page_load(handler: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let loaded = w
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        handler();
        return;
    }
    let closure = Closure::once(handler);
    _ = w.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn location_search() -> Option<String> {
    web::window().and_then(|w| w.location().search().ok())
}
