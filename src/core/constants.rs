// Shared scene/carousel tuning constants used by the web frontend.

// Instance field
pub const OBJECT_COUNT_PER_TYPE: usize = 2000; // instances per geometry kind
pub const DYNAMIC_COUNT_PER_TYPE: usize = 500; // leading instances rotated every frame
pub const FIELD_EXTENT: f32 = 40.0; // side of the cube positions are drawn from
pub const SCALE_MIN: f32 = 0.2;
pub const SCALE_MAX: f32 = 1.0;
pub const ROTATION_SPEED_MAX: f32 = 0.01; // radians per frame, per axis

// Camera
pub const CAMERA_FOV_DEG: f32 = 70.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_DISTANCE: f32 = 30.0; // initial eye sits on +Z at this distance

// Rendering
pub const MSAA_SAMPLE_COUNT: u32 = 4; // WebGPU guarantees 1 and 4

// Orbit controls
pub const AUTO_ROTATE_SPEED: f32 = 0.2; // full turns per minute
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Carousel
pub const CARD_MARGIN_PX: f64 = 15.0; // horizontal margin on each side of a card
pub const CAROUSEL_SETTLE_DELAY_MS: i32 = 100; // initial positioning waits for layout
