// Instanced shape field: random placement and per-frame spin.
//
// Each [`InstanceGroup`] owns the transforms of every copy of one shape and a
// GPU-ready matrix array. Only the leading `dynamic_count` instances are
// animated; the renderer re-uploads the range reported by
// [`InstanceGroup::take_dirty`].

use super::constants::{
    DYNAMIC_COUNT_PER_TYPE, FIELD_EXTENT, OBJECT_COUNT_PER_TYPE, ROTATION_SPEED_MAX, SCALE_MAX,
    SCALE_MIN,
};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Cone,
    Box,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cone, ShapeKind::Box, ShapeKind::Sphere];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Cone => "cone",
            ShapeKind::Box => "box",
            ShapeKind::Sphere => "sphere",
        }
    }
}

/// Build parameters for an [`InstanceField`].
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count_per_type: usize,
    pub dynamic_per_type: usize,
    pub extent: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub rotation_speed_max: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count_per_type: OBJECT_COUNT_PER_TYPE,
            dynamic_per_type: DYNAMIC_COUNT_PER_TYPE,
            extent: FIELD_EXTENT,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            rotation_speed_max: ROTATION_SPEED_MAX,
        }
    }
}

/// Position, XYZ Euler rotation (radians) and uniform scale of one instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl InstanceTransform {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &FieldParams) -> Self {
        let half = params.extent * 0.5;
        let mut coord = || rng.gen::<f32>() * params.extent - half;
        let position = Vec3::new(coord(), coord(), coord());
        let rotation = Vec3::new(
            rng.gen::<f32>() * TAU,
            rng.gen::<f32>() * TAU,
            rng.gen::<f32>() * TAU,
        );
        let scale = params.scale_min + rng.gen::<f32>() * (params.scale_max - params.scale_min);
        Self {
            position,
            rotation,
            scale,
        }
    }

    #[inline]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.quat(), self.position)
    }

    /// Add `delta` to each rotation axis, keeping every angle in `[0, 2π)`.
    #[inline]
    pub fn spin(&mut self, delta: Vec3) {
        self.rotation = Vec3::new(
            wrap_angle(self.rotation.x + delta.x),
            wrap_angle(self.rotation.y + delta.y),
            wrap_angle(self.rotation.z + delta.z),
        );
    }
}

#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let w = a.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if w >= TAU {
        0.0
    } else {
        w
    }
}

pub struct InstanceGroup {
    pub kind: ShapeKind,
    transforms: Vec<InstanceTransform>,
    rotation_speeds: Vec<Vec3>,
    matrices: Vec<Mat4>,
    dynamic_count: usize,
    dirty: Option<Range<usize>>,
}

impl InstanceGroup {
    pub fn randomized<R: Rng + ?Sized>(kind: ShapeKind, params: &FieldParams, rng: &mut R) -> Self {
        let n = params.count_per_type;
        let mut transforms = Vec::with_capacity(n);
        let mut rotation_speeds = Vec::with_capacity(n);
        for _ in 0..n {
            transforms.push(InstanceTransform::random(rng, params));
            rotation_speeds.push(Vec3::new(
                rng.gen::<f32>() * params.rotation_speed_max,
                rng.gen::<f32>() * params.rotation_speed_max,
                rng.gen::<f32>() * params.rotation_speed_max,
            ));
        }
        let matrices = transforms.iter().map(InstanceTransform::matrix).collect();
        Self {
            kind,
            transforms,
            rotation_speeds,
            matrices,
            dynamic_count: params.dynamic_per_type.min(n),
            // fresh groups need a full upload
            dirty: Some(0..n),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    #[inline]
    pub fn dynamic_count(&self) -> usize {
        self.dynamic_count
    }

    pub fn transform(&self, index: usize) -> Option<&InstanceTransform> {
        self.transforms.get(index)
    }

    pub fn rotation_speed(&self, index: usize) -> Option<Vec3> {
        self.rotation_speeds.get(index).copied()
    }

    pub fn matrix_at(&self, index: usize) -> Option<Mat4> {
        self.matrices.get(index).copied()
    }

    pub fn matrices(&self) -> &[Mat4] {
        &self.matrices
    }

    /// Advance the rotating subset by one step and mark it for upload.
    pub fn animate(&mut self) {
        let n = self.dynamic_count;
        for ((t, speed), m) in self.transforms[..n]
            .iter_mut()
            .zip(&self.rotation_speeds[..n])
            .zip(&mut self.matrices[..n])
        {
            t.spin(*speed);
            *m = t.matrix();
        }
        if n > 0 {
            self.mark_dirty(0..n);
        }
    }

    fn mark_dirty(&mut self, range: Range<usize>) {
        self.dirty = Some(match self.dirty.take() {
            Some(d) => d.start.min(range.start)..d.end.max(range.end),
            None => range,
        });
    }

    /// Range of matrices changed since the last call, if any.
    pub fn take_dirty(&mut self) -> Option<Range<usize>> {
        self.dirty.take()
    }
}

/// All three shape groups of the backdrop.
pub struct InstanceField {
    pub groups: Vec<InstanceGroup>,
}

impl InstanceField {
    pub fn new<R: Rng + ?Sized>(params: &FieldParams, rng: &mut R) -> Self {
        let groups = ShapeKind::ALL
            .iter()
            .map(|&kind| InstanceGroup::randomized(kind, params, rng))
            .collect();
        Self { groups }
    }

    pub fn update(&mut self) {
        for g in &mut self.groups {
            g.animate();
        }
    }

    pub fn total_instances(&self) -> usize {
        self.groups.iter().map(InstanceGroup::len).sum()
    }
}
