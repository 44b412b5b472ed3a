//! Scene model: analytic spheres and camera parameters.
//!
//! A `Scene` is built once per image and is read-only while rendering, so it
//! can be shared freely across worker threads without locking.

use std::sync::Arc;

use glam::Vec3;

use crate::texture::Texture;

/// A sphere primitive with material parameters.
///
/// All colors are linear-space. `diffuse` components are in [0, 1] by
/// convention (unclamped), `emission` is radiance and may exceed 1.
/// For textured spheres the per-hit diffuse value is derived locally during
/// shading; the sphere itself is never mutated.
#[derive(Clone, Debug)]
pub struct Sphere {
    /// Sphere center in world space
    pub center: Vec3,

    /// Radius, strictly positive
    pub radius: f32,

    /// Linear diffuse reflectance
    pub diffuse: Vec3,

    /// Linear emitted radiance (zero for non-lights)
    pub emission: Vec3,

    /// Specular weight in [0, 1]: 0 = pure diffuse, 1 = perfect mirror,
    /// fractional values add a highlight on top of the diffuse term
    pub specular: f32,

    /// Optional diffuse texture, shared read-only
    pub texture: Option<Arc<Texture>>,
}

impl Sphere {
    /// Create a diffuse, non-emissive sphere.
    pub fn new(center: Vec3, radius: f32, diffuse: Vec3) -> Self {
        Self {
            center,
            radius,
            diffuse,
            emission: Vec3::ZERO,
            specular: 0.0,
            texture: None,
        }
    }

    /// Set the emitted radiance.
    pub fn with_emission(mut self, emission: Vec3) -> Self {
        self.emission = emission;
        self
    }

    /// Set the specular weight.
    pub fn with_specular(mut self, specular: f32) -> Self {
        self.specular = specular;
        self
    }

    /// Attach a diffuse texture.
    pub fn with_texture(mut self, texture: Arc<Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    /// True for perfect mirrors (specular weight saturated).
    pub fn is_mirror(&self) -> bool {
        self.specular >= 1.0
    }

    /// True if the sphere emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission.length_squared() > 0.0
    }
}

/// A renderable scene: an ordered list of spheres plus camera parameters.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene primitives, searched brute-force by the intersector
    pub objects: Vec<Sphere>,

    /// Camera position
    pub eye: Vec3,

    /// Camera target
    pub look_at: Vec3,

    /// Vertical field of view in degrees
    pub vfov_degrees: f32,
}

impl Scene {
    /// Create a scene from parts.
    pub fn new(objects: Vec<Sphere>, eye: Vec3, look_at: Vec3, vfov_degrees: f32) -> Self {
        Self {
            objects,
            eye,
            look_at,
            vfov_degrees,
        }
    }

    /// Create a scene with camera parameters and no objects yet.
    pub fn empty(eye: Vec3, look_at: Vec3, vfov_degrees: f32) -> Self {
        Self::new(Vec::new(), eye, look_at, vfov_degrees)
    }

    /// Add a sphere.
    pub fn add(&mut self, sphere: Sphere) {
        self.objects.push(sphere);
    }
}
