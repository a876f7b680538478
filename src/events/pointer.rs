use crate::core::OrbitControls;
use crate::input::PointerDrag;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub drag: Rc<RefCell<PointerDrag>>,
}

pub fn wire_orbit_handlers(w: OrbitWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

fn listen(w: &OrbitWiring, event: &str, mut handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::PointerEvent| handler(ev)) as Box<dyn FnMut(_)>,
    );
    _ = w
        .canvas
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &OrbitWiring) {
    let wc = w.clone();
    listen(w, "pointerdown", move |ev| {
        if ev.button() != 0 {
            return;
        }
        wc.drag
            .borrow_mut()
            .begin(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
        wc.controls.borrow_mut().set_dragging(true);
        _ = wc.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointermove(w: &OrbitWiring) {
    let wc = w.clone();
    listen(w, "pointermove", move |ev| {
        let delta =
            wc.drag
                .borrow_mut()
                .step(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
        if let Some((dx, dy)) = delta {
            let height = wc.canvas.client_height() as f32;
            wc.controls.borrow_mut().drag_by_pixels(dx, dy, height);
        }
    });
}

fn wire_pointerup(w: &OrbitWiring, event: &str) {
    let wc = w.clone();
    listen(w, event, move |ev| {
        if wc.drag.borrow_mut().end(ev.pointer_id()) {
            wc.controls.borrow_mut().set_dragging(false);
            _ = wc.canvas.release_pointer_capture(ev.pointer_id());
        }
    });
}
