// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn instance_counts_are_consistent() {
    assert_eq!(OBJECT_COUNT_PER_TYPE, 2000);
    assert_eq!(DYNAMIC_COUNT_PER_TYPE, 500);
    assert!(DYNAMIC_COUNT_PER_TYPE <= OBJECT_COUNT_PER_TYPE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_ranges_are_sane() {
    assert_eq!(FIELD_EXTENT, 40.0);
    assert!(SCALE_MIN > 0.0 && SCALE_MIN < SCALE_MAX);
    assert!(ROTATION_SPEED_MAX > 0.0 && ROTATION_SPEED_MAX < 0.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_contains_the_field() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    // farthest corner of the field as seen from the orbit
    let corner = (3.0f32).sqrt() * FIELD_EXTENT / 2.0;
    assert!(CAMERA_DISTANCE + corner < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_and_frame_tuning_are_positive() {
    assert!(ORBIT_DAMPING_FACTOR > 0.0 && ORBIT_DAMPING_FACTOR < 1.0);
    assert!(AUTO_ROTATE_SPEED > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn carousel_markup_contract() {
    assert_eq!(CARD_MARGIN_PX, 15.0);
    assert_eq!(CAROUSEL_SETTLE_DELAY_MS, 100);
    assert!(TRACK_SELECTOR.starts_with('.'));
    assert!(CONTAINER_SELECTOR.starts_with('.'));
    assert!(!NEXT_BUTTON_ID.starts_with('#') && !PREV_BUTTON_ID.starts_with('#'));
    assert!(CANVAS_STYLE.contains("position:fixed"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_is_multisampled() {
    // 4 is the only multisample count WebGPU guarantees besides 1
    assert_eq!(MSAA_SAMPLE_COUNT, 4);
}
