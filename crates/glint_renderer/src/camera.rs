//! Primary ray generation from eye / look-at / vertical FOV.

use glam::Vec3;
use glint_core::Scene;
use glint_math::Ray;

/// Camera basis for generating per-pixel rays.
///
/// Built once per render from the scene's camera parameters and the image
/// dimensions. The basis follows the reference convention: `forward`
/// towards the look-at target, `right = cross(forward, world_up)`,
/// `up = cross(forward, right)` with world up at +Y.
#[derive(Clone, Copy)]
pub struct Camera {
    eye: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    tan_half_fov: f32,
    width: f32,
    height: f32,
}

impl Camera {
    /// Build the camera basis for a scene and output resolution.
    ///
    /// The eye and look-at positions must differ; a degenerate forward
    /// vector cannot be normalized.
    pub fn from_scene(scene: &Scene, width: u32, height: u32) -> Self {
        let forward = scene.look_at - scene.eye;
        debug_assert!(forward.length_squared() > 0.0, "eye and look_at coincide");

        let world_up = Vec3::Y;
        let right = forward.cross(world_up);
        let up = forward.cross(right);

        Self {
            eye: scene.eye,
            forward: forward.normalize(),
            right: right.normalize(),
            up: up.normalize(),
            tan_half_fov: (scene.vfov_degrees.to_radians() / 2.0).tan(),
            width: width as f32,
            height: height as f32,
        }
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner. NDC:
    /// `ndc_x = -(2(x+0.5)/W - 1) * W/H`, `ndc_y = 2(y+0.5)/H - 1`.
    /// The direction is left unnormalized; the intersector copes.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let ndc_x = -(2.0 * (x as f32 + 0.5) / self.width - 1.0) * (self.width / self.height);
        let ndc_y = 2.0 * (y as f32 + 0.5) / self.height - 1.0;

        let direction = self.forward
            + self.tan_half_fov * ndc_y * self.up
            + self.tan_half_fov * ndc_x * self.right;

        Ray::new(self.eye, direction)
    }
}
