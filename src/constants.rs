/// Page wiring and frame-loop constants for the web frontend.
///
/// DOM hooks are kept here so the markup contract is visible in one place.
// Backdrop canvas
pub const CANVAS_ID: &str = "backdrop-canvas";
pub const CANVAS_STYLE: &str =
    "position:fixed;inset:0;width:100vw;height:100vh;z-index:-1;display:block;touch-action:none";

// Carousel markup
pub const TRACK_SELECTOR: &str = ".carousel-track";
pub const CONTAINER_SELECTOR: &str = ".carousel-container";
pub const NEXT_BUTTON_ID: &str = "nextBtn";
pub const PREV_BUTTON_ID: &str = "prevBtn";
pub const ACTIVE_CLASS: &str = "active";

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches so auto-rotate doesn't jump

// Query parameter that pins the shape layout, e.g. `?seed=42`
pub const SEED_QUERY_KEY: &str = "seed";
