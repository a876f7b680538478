// Host-side tests for generated shape meshes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod instances {
    include!("../src/core/instances.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::Vec3;
use instances::ShapeKind;

fn assert_well_formed(mesh: &MeshData) {
    assert!(!mesh.vertices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n), "index out of range");
    for v in &mesh.vertices {
        let len = Vec3::from_array(v.normal).length();
        assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
    }
}

fn extent(mesh: &MeshData) -> (Vec3, Vec3) {
    mesh.vertices.iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(lo, hi), v| {
            let p = Vec3::from_array(v.position);
            (lo.min(p), hi.max(p))
        },
    )
}

#[test]
fn every_shape_kind_has_a_well_formed_mesh() {
    for kind in ShapeKind::ALL {
        assert_well_formed(&mesh_for(kind));
    }
}

#[test]
fn box_has_six_flat_faces() {
    let m = cuboid(BOX_SIZE);
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.index_count(), 36);
    let (lo, hi) = extent(&m);
    assert!((lo - Vec3::splat(-0.4)).abs().max_element() < 1e-6);
    assert!((hi - Vec3::splat(0.4)).abs().max_element() < 1e-6);
}

#[test]
fn cone_spans_its_height_and_radius() {
    let m = cone(CONE_RADIUS, CONE_HEIGHT, CONE_SEGMENTS);
    let (lo, hi) = extent(&m);
    assert!((lo.y + 0.4).abs() < 1e-6);
    assert!((hi.y - 0.4).abs() < 1e-6);
    assert!((hi.x - CONE_RADIUS).abs() < 1e-5);
    // side and cap triangles
    assert_eq!(m.index_count(), CONE_SEGMENTS * 3 * 2);
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let m = uv_sphere(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
    assert_eq!(
        m.vertices.len() as u32,
        (SPHERE_WIDTH_SEGMENTS + 1) * (SPHERE_HEIGHT_SEGMENTS + 1)
    );
    for v in &m.vertices {
        let r = Vec3::from_array(v.position).length();
        assert!((r - SPHERE_RADIUS).abs() < 1e-5);
    }
}

#[test]
fn vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    let m = cuboid(1.0);
    let bytes: &[u8] = bytemuck::cast_slice(&m.vertices);
    assert_eq!(bytes.len(), 24 * m.vertices.len());
}
