use super::instances::ShapeKind;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Indexed triangle list.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

// Shape sizes
pub const CONE_RADIUS: f32 = 0.4;
pub const CONE_HEIGHT: f32 = 0.8;
pub const CONE_SEGMENTS: u32 = 8;
pub const BOX_SIZE: f32 = 0.8;
pub const SPHERE_RADIUS: f32 = 0.6;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 16;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 8;

pub fn mesh_for(kind: ShapeKind) -> MeshData {
    match kind {
        ShapeKind::Cone => cone(CONE_RADIUS, CONE_HEIGHT, CONE_SEGMENTS),
        ShapeKind::Box => cuboid(BOX_SIZE),
        ShapeKind::Sphere => uv_sphere(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS),
    }
}

/// Axis-aligned cube of edge `size` centered at the origin, flat normals.
pub fn cuboid(size: f32) -> MeshData {
    let h = size * 0.5;
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (-Vec3::X, Vec3::Y, -Vec3::Z),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (-Vec3::Y, Vec3::Z, -Vec3::X),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (-Vec3::Z, Vec3::X, -Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        let c = n * h;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            mesh.vertices.push(Vertex::new(c + u * (su * h) + v * (sv * h), n));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Cone along +Y centered at the origin, apex at `height / 2`, closed base.
pub fn cone(radius: f32, height: f32, segments: u32) -> MeshData {
    let seg = segments.max(3);
    let half = height * 0.5;
    let slope = radius / height;
    let mut mesh = MeshData::default();

    // side: one apex vertex per segment so each gets its own normal
    for x in 0..=seg {
        let t = x as f32 / seg as f32 * TAU;
        let (s, c) = t.sin_cos();
        let n = Vec3::new(s, slope, c).normalize();
        mesh.vertices.push(Vertex::new(Vec3::new(0.0, half, 0.0), n));
        mesh.vertices
            .push(Vertex::new(Vec3::new(radius * s, -half, radius * c), n));
    }
    for x in 0..seg {
        let apex = x * 2;
        let b0 = apex + 1;
        let b1 = apex + 3;
        mesh.indices.extend_from_slice(&[apex, b0, b1]);
    }

    // base cap
    let center = mesh.vertices.len() as u32;
    mesh.vertices
        .push(Vertex::new(Vec3::new(0.0, -half, 0.0), -Vec3::Y));
    for x in 0..=seg {
        let t = x as f32 / seg as f32 * TAU;
        let (s, c) = t.sin_cos();
        mesh.vertices
            .push(Vertex::new(Vec3::new(radius * s, -half, radius * c), -Vec3::Y));
    }
    for x in 0..seg {
        let a = center + 1 + x;
        mesh.indices.extend_from_slice(&[center, a + 1, a]);
    }
    mesh
}

/// Latitude/longitude sphere centered at the origin.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let seg = width_segments.max(3);
    let rings = height_segments.max(2);
    let mut mesh = MeshData::default();
    for y in 0..=rings {
        let phi = y as f32 / rings as f32 * PI;
        for x in 0..=seg {
            let theta = x as f32 / seg as f32 * TAU;
            let n = Vec3::new(theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
            mesh.vertices.push(Vertex::new(n * radius, n));
        }
    }
    let stride = seg + 1;
    for y in 0..rings {
        for x in 0..seg {
            let a = y * stride + x;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            mesh.indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }
    mesh
}
