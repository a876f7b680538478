// Host-side tests for the instance field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod instances {
    include!("../src/core/instances.rs");
}

use constants::*;
use instances::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

fn make_field(seed: u64) -> InstanceField {
    let mut rng = StdRng::seed_from_u64(seed);
    InstanceField::new(&FieldParams::default(), &mut rng)
}

fn small_params() -> FieldParams {
    FieldParams {
        count_per_type: 40,
        dynamic_per_type: 10,
        ..FieldParams::default()
    }
}

#[test]
fn field_has_one_full_group_per_shape() {
    let field = make_field(1);
    assert_eq!(field.groups.len(), 3);
    let kinds: Vec<ShapeKind> = field.groups.iter().map(|g| g.kind).collect();
    assert_eq!(kinds, ShapeKind::ALL.to_vec());
    for g in &field.groups {
        assert_eq!(g.len(), OBJECT_COUNT_PER_TYPE);
        assert_eq!(g.matrices().len(), OBJECT_COUNT_PER_TYPE);
        assert_eq!(g.dynamic_count(), DYNAMIC_COUNT_PER_TYPE);
    }
    assert_eq!(field.total_instances(), 3 * OBJECT_COUNT_PER_TYPE);
}

#[test]
fn initial_transforms_are_within_bounds() {
    let field = make_field(7);
    for g in &field.groups {
        for i in 0..g.len() {
            let t = g.transform(i).unwrap();
            assert!(t.scale >= 0.2 && t.scale <= 1.0, "scale {} out of range", t.scale);
            for c in t.position.to_array() {
                assert!((-20.0..=20.0).contains(&c), "coordinate {c} out of range");
            }
            for a in t.rotation.to_array() {
                assert!((0.0..=TAU).contains(&a), "angle {a} out of range");
            }
            // speeds are never negative: every shape spins the same way per axis
            let speed = g.rotation_speed(i).unwrap();
            for s in speed.to_array() {
                assert!((0.0..=ROTATION_SPEED_MAX).contains(&s), "speed {s} out of range");
            }
        }
    }
}

#[test]
fn stored_matrix_matches_components() {
    let field = make_field(3);
    let g = &field.groups[1];
    for i in [0, 1, DYNAMIC_COUNT_PER_TYPE, OBJECT_COUNT_PER_TYPE - 1] {
        let t = g.transform(i).unwrap();
        let m = g.matrix_at(i).unwrap();
        assert_eq!(m.w_axis.truncate(), t.position);
        let (scale, rot, pos) = m.to_scale_rotation_translation();
        assert!((pos - t.position).length() < 1e-5);
        assert!((scale - glam::Vec3::splat(t.scale)).abs().max_element() < 1e-5);
        assert!(rot.dot(t.quat()).abs() > 1.0 - 1e-5);
    }
}

#[test]
fn same_seed_gives_same_layout() {
    let a = make_field(42);
    let b = make_field(42);
    for (ga, gb) in a.groups.iter().zip(&b.groups) {
        assert_eq!(ga.matrices(), gb.matrices());
    }
    let c = make_field(43);
    assert_ne!(a.groups[0].matrices(), c.groups[0].matrices());
}

#[test]
fn update_spins_by_exactly_the_stored_speed() {
    let mut field = make_field(11);
    let before: Vec<Vec<InstanceTransform>> = field
        .groups
        .iter()
        .map(|g| (0..g.len()).map(|i| *g.transform(i).unwrap()).collect())
        .collect();
    field.update();
    for (g, prev) in field.groups.iter().zip(&before) {
        for i in 0..DYNAMIC_COUNT_PER_TYPE {
            let now = g.transform(i).unwrap();
            let speed = g.rotation_speed(i).unwrap();
            assert_eq!(now.position, prev[i].position);
            assert_eq!(now.scale, prev[i].scale);
            assert_eq!(now.rotation.x, wrap_angle(prev[i].rotation.x + speed.x));
            assert_eq!(now.rotation.y, wrap_angle(prev[i].rotation.y + speed.y));
            assert_eq!(now.rotation.z, wrap_angle(prev[i].rotation.z + speed.z));
            assert_eq!(g.matrix_at(i).unwrap(), now.matrix());
        }
    }
}

#[test]
fn static_instances_never_change() {
    let mut field = make_field(5);
    let before: Vec<Vec<glam::Mat4>> = field
        .groups
        .iter()
        .map(|g| g.matrices()[DYNAMIC_COUNT_PER_TYPE..].to_vec())
        .collect();
    for _ in 0..120 {
        field.update();
    }
    for (g, prev) in field.groups.iter().zip(&before) {
        assert_eq!(&g.matrices()[DYNAMIC_COUNT_PER_TYPE..], prev.as_slice());
    }
}

#[test]
fn long_sessions_keep_angles_wrapped() {
    let mut rng = StdRng::seed_from_u64(9);
    let params = FieldParams {
        rotation_speed_max: 1.5,
        ..small_params()
    };
    let mut group = InstanceGroup::randomized(ShapeKind::Sphere, &params, &mut rng);
    let pos0 = group.transform(0).unwrap().position;
    for _ in 0..10_000 {
        group.animate();
    }
    for i in 0..group.dynamic_count() {
        for a in group.transform(i).unwrap().rotation.to_array() {
            assert!((0.0..TAU).contains(&a), "angle {a} escaped [0, 2π)");
        }
    }
    assert_eq!(group.transform(0).unwrap().position, pos0);
}

#[test]
fn dirty_range_covers_full_group_then_dynamic_prefix() {
    let mut rng = StdRng::seed_from_u64(2);
    let params = small_params();
    let mut group = InstanceGroup::randomized(ShapeKind::Cone, &params, &mut rng);
    assert_eq!(group.take_dirty(), Some(0..40));
    assert_eq!(group.take_dirty(), None);
    group.animate();
    assert_eq!(group.take_dirty(), Some(0..10));
    group.animate();
    group.animate();
    assert_eq!(group.take_dirty(), Some(0..10));
}

#[test]
fn dynamic_count_is_capped_by_group_size() {
    let mut rng = StdRng::seed_from_u64(4);
    let params = FieldParams {
        count_per_type: 5,
        dynamic_per_type: 50,
        ..FieldParams::default()
    };
    let mut group = InstanceGroup::randomized(ShapeKind::Box, &params, &mut rng);
    assert_eq!(group.dynamic_count(), 5);
    group.animate();
    assert_eq!(group.len(), 5);
}

#[test]
fn empty_group_is_inert() {
    let mut rng = StdRng::seed_from_u64(4);
    let params = FieldParams {
        count_per_type: 0,
        ..FieldParams::default()
    };
    let mut group = InstanceGroup::randomized(ShapeKind::Box, &params, &mut rng);
    assert!(group.is_empty());
    _ = group.take_dirty();
    group.animate();
    assert_eq!(group.take_dirty(), None);
}

#[test]
fn wrap_angle_handles_edges() {
    assert_eq!(wrap_angle(0.0), 0.0);
    assert_eq!(wrap_angle(TAU), 0.0);
    assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < 1e-5);
    assert!((wrap_angle(-0.25) - (TAU - 0.25)).abs() < 1e-5);
    assert!(wrap_angle(-1e-9) < TAU);
}
