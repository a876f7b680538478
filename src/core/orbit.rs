// Camera description and damped orbit controls.
//
// The controls keep the eye on a sphere around `target`. Azimuth (`theta`)
// turns around +Y and is measured from +Z; polar (`phi`) is measured from +Y.
// Auto-rotation and pointer drags feed pending deltas which are applied with
// damping on every [`OrbitControls::update`].

use super::constants::{
    AUTO_ROTATE_SPEED, CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR,
    ORBIT_DAMPING_FACTOR, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED,
};
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-4), self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    delta_theta: f32,
    delta_phi: f32,
    dragging: bool,
    aspect: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: CAMERA_DISTANCE,
            theta: 0.0,
            phi: PI / 2.0,
            auto_rotate: true,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            delta_theta: 0.0,
            delta_phi: 0.0,
            dragging: false,
            aspect: 1.0,
        }
    }
}

impl OrbitControls {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            ..Self::default()
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    #[inline]
    pub fn pending(&self) -> (f32, f32) {
        (self.delta_theta, self.delta_phi)
    }

    /// Auto-rotation pauses while a pointer drag is in progress.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Feed a pointer drag of `(dx, dy)` pixels over an element `height` px tall.
    pub fn drag_by_pixels(&mut self, dx: f32, dy: f32, height: f32) {
        let h = height.max(1.0);
        self.rotate_left(TAU * dx / h * self.rotate_speed);
        self.rotate_up(TAU * dy / h * self.rotate_speed);
    }

    /// Azimuth step auto-rotation contributes for a frame of `dt_sec`.
    #[inline]
    pub fn auto_rotation_angle(&self, dt_sec: f32) -> f32 {
        TAU / 60.0 * self.auto_rotate_speed * dt_sec
    }

    pub fn update(&mut self, dt_sec: f32) {
        if self.auto_rotate && !self.dragging {
            // auto-rotation bypasses damping so its speed stays constant
            self.theta -= self.auto_rotation_angle(dt_sec.max(0.0));
        }
        let k = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        self.theta = (self.theta + self.delta_theta * k).rem_euclid(TAU);
        if self.theta >= TAU {
            self.theta = 0.0;
        }
        self.phi = (self.phi + self.delta_phi * k)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.target
            + self.radius * Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: self.aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}
