#![cfg(target_arch = "wasm32")]
use crate::core::{FieldParams, InstanceField, OrbitControls};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Entropy-seeded unless the page URL pins a layout with `?seed=N`.
fn field_rng() -> StdRng {
    match dom::location_search().and_then(|s| input::query_u64(&s, constants::SEED_QUERY_KEY)) {
        Some(seed) => {
            log::info!("[scene] using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-backdrop starting");

    dom::on_page_load(|| {
        if let Some(document) = dom::window_document() {
            carousel::wire(&document);
        }
    });

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::create_backdrop_canvas(&document)?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let mut rng = field_rng();
    let field = InstanceField::new(&FieldParams::default(), &mut rng);
    log::info!(
        "[scene] {} groups, {} instances",
        field.groups.len(),
        field.total_instances()
    );

    let gpu = render::GpuState::new(&canvas, &field).await?;

    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let controls = Rc::new(RefCell::new(OrbitControls::new(aspect)));
    events::wire_orbit_handlers(events::OrbitWiring {
        canvas: canvas.clone(),
        controls: controls.clone(),
        drag: Rc::new(RefCell::new(input::PointerDrag::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        gpu,
        controls,
        field,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
