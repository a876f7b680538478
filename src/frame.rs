use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{InstanceField, OrbitControls};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the backdrop needs per frame. Owned by the frame loop.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub field: InstanceField,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // Canvas backing size is kept current by the resize listener
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);

        let camera = {
            let mut controls = self.controls.borrow_mut();
            controls.set_viewport(w, h);
            controls.update(dt_sec);
            controls.camera()
        };
        self.field.update();

        match self.gpu.render(&camera, &mut self.field) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost/outdated; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
