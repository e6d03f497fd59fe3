//! Orbit camera for the Bloch sphere viewport

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use bloch_core::constants::{CAMERA_DISTANCE, CAMERA_PITCH, CAMERA_YAW};

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix
    pub view_proj: [[f32; 4]; 4],
    /// View matrix
    pub view: [[f32; 4]; 4],
    /// Projection matrix
    pub proj: [[f32; 4]; 4],
    /// Camera eye position (w = 1)
    pub eye: [f32; 4],
}

/// Orbit camera parameterized by yaw/pitch/distance around the origin.
///
/// Angles are stored in degrees, matching the pointer-delta input the
/// UI feeds in. The camera always looks at the origin with +Y up.
pub struct OrbitCamera {
    /// Yaw angle in degrees
    pub yaw: f32,
    /// Pitch angle in degrees, clamped to (-90, 90) when constrained
    pub pitch: f32,
    /// Distance from the origin
    pub distance: f32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Viewport aspect ratio
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CAMERA_DISTANCE, 800.0 / 600.0)
    }
}

impl OrbitCamera {
    /// Create a camera at the default orbit angles
    pub fn new(distance: f32, aspect: f32) -> Self {
        Self {
            yaw: CAMERA_YAW,
            pitch: CAMERA_PITCH,
            distance,
            fov: 45.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Apply a pointer delta to the orbit angles.
    ///
    /// `constrain_pitch` clamps pitch to [-89, 89] degrees to stay
    /// clear of the gimbal singularity at the poles.
    pub fn process_mouse_movement(
        &mut self,
        dx: f32,
        dy: f32,
        sensitivity: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += dx * sensitivity;
        self.pitch += dy * sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-89.0, 89.0);
        }
    }

    /// Camera position on the orbit sphere
    pub fn position(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        Vec3::new(
            self.distance * yaw.cos() * pitch.cos(),
            self.distance * pitch.sin(),
            self.distance * yaw.sin() * pitch.cos(),
        )
    }

    /// View matrix looking from the orbit position at the origin
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }

    /// Perspective projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Camera uniform data for GPU upload
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        let view_proj = proj * view;
        let eye = self.position();

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-4;

    #[test]
    fn test_default_position_behind_z() {
        // yaw = -90: sin(-90) = -1, so the camera sits on -Z
        let camera = OrbitCamera::new(5.0, 1.0);
        let pos = camera.position();
        assert!(pos.x.abs() < TOL);
        assert!(pos.y.abs() < TOL);
        assert!((pos.z + 5.0).abs() < TOL);
    }

    #[test]
    fn test_positive_yaw_position() {
        let mut camera = OrbitCamera::new(5.0, 1.0);
        camera.yaw = 90.0;
        let pos = camera.position();
        assert!((pos - Vec3::new(0.0, 0.0, 5.0)).length() < TOL);
    }

    #[test]
    fn test_pitch_clamps_at_89() {
        let mut camera = OrbitCamera::new(5.0, 1.0);
        camera.process_mouse_movement(0.0, 1000.0, 1.0, true);
        assert_eq!(camera.pitch, 89.0);
        camera.process_mouse_movement(0.0, -10000.0, 1.0, true);
        assert_eq!(camera.pitch, -89.0);
    }

    #[test]
    fn test_unconstrained_pitch_accumulates() {
        let mut camera = OrbitCamera::new(5.0, 1.0);
        camera.process_mouse_movement(0.0, 1000.0, 1.0, false);
        assert_eq!(camera.pitch, 1000.0);
    }

    #[test]
    fn test_sensitivity_scales_deltas() {
        let mut camera = OrbitCamera::new(5.0, 1.0);
        camera.process_mouse_movement(100.0, 40.0, 0.25, true);
        assert!((camera.yaw - (-90.0 + 25.0)).abs() < TOL);
        assert!((camera.pitch - 10.0).abs() < TOL);
    }

    #[test]
    fn test_orbit_preserves_distance() {
        let mut camera = OrbitCamera::new(5.0, 1.0);
        camera.process_mouse_movement(37.0, -12.0, 0.25, true);
        assert!((camera.position().length() - 5.0).abs() < TOL);
    }

    #[test]
    fn test_view_matrix_centers_origin() {
        let camera = OrbitCamera::new(5.0, 1.0);
        let view_origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        // The look-at target lands on the -Z view axis at the orbit distance
        assert!((view_origin - Vec3::new(0.0, 0.0, -5.0)).length() < TOL);
    }

    #[test]
    fn test_uniform_eye_matches_position() {
        let camera = OrbitCamera::new(5.0, 1.0);
        let uniform = camera.uniform();
        let pos = camera.position();
        assert_eq!(uniform.eye, [pos.x, pos.y, pos.z, 1.0]);
    }
}
