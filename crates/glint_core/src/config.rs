//! Serde scene description.
//!
//! A `SceneConfig` mirrors the renderer's external input: image dimensions,
//! samples per pixel, camera parameters and an ordered sphere list. Texture
//! references are file paths, resolved through a `TextureCache` when the
//! config is built into a `Scene`.

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::scene::{Scene, Sphere};
use crate::texture::{TextureCache, TextureError};

/// Errors produced while building a `Scene` from its description.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("sphere {index}: radius must be > 0, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("sphere {index}: specular weight must be in [0, 1], got {specular}")]
    InvalidSpecular { index: usize, specular: f32 },

    #[error("sphere {index}: {source}")]
    Texture {
        index: usize,
        source: TextureError,
    },
}

/// Image and sampling parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderParams {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Independent estimator samples per pixel, averaged in linear space
    #[serde(default = "default_samples")]
    pub samples_per_pixel: u32,

    /// Base seed for per-task generators; a fixed seed reproduces the image
    #[serde(default)]
    pub seed: u64,
}

fn default_samples() -> u32 {
    64
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            samples_per_pixel: default_samples(),
            seed: 0,
        }
    }
}

/// Camera description.
#[derive(Debug, Clone, Deserialize)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub look_at: [f32; 3],

    /// Vertical field of view in degrees
    #[serde(default = "default_vfov")]
    pub vfov: f32,
}

fn default_vfov() -> f32 {
    36.0
}

/// A single sphere entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SphereConfig {
    pub center: [f32; 3],
    pub radius: f32,

    /// Linear diffuse reflectance; ignored for display when a texture is set
    #[serde(default)]
    pub diffuse: [f32; 3],

    /// Linear emitted radiance
    #[serde(default)]
    pub emission: [f32; 3],

    /// 0 = diffuse, 1 = mirror, fractional = highlight blend
    #[serde(default)]
    pub specular: f32,

    /// Optional texture path, resolved against the cache base directory
    #[serde(default)]
    pub texture: Option<String>,
}

/// Complete scene description.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub render: RenderParams,

    pub camera: CameraConfig,

    pub spheres: Vec<SphereConfig>,
}

impl SceneConfig {
    /// Validate the description and build a renderable `Scene`.
    ///
    /// Texture paths are loaded through the cache so repeated references
    /// share one decoded image.
    pub fn build(&self, textures: &mut TextureCache) -> Result<Scene, ConfigError> {
        let mut scene = Scene::empty(
            Vec3::from_array(self.camera.eye),
            Vec3::from_array(self.camera.look_at),
            self.camera.vfov,
        );

        for (index, entry) in self.spheres.iter().enumerate() {
            if !(entry.radius > 0.0) {
                return Err(ConfigError::InvalidRadius {
                    index,
                    radius: entry.radius,
                });
            }
            if !(0.0..=1.0).contains(&entry.specular) {
                return Err(ConfigError::InvalidSpecular {
                    index,
                    specular: entry.specular,
                });
            }

            let mut sphere = Sphere::new(
                Vec3::from_array(entry.center),
                entry.radius,
                Vec3::from_array(entry.diffuse),
            )
            .with_emission(Vec3::from_array(entry.emission))
            .with_specular(entry.specular);

            if let Some(path) = &entry.texture {
                let texture = textures
                    .load(path)
                    .map_err(|source| ConfigError::Texture { index, source })?;
                sphere = sphere.with_texture(texture);
            }

            scene.add(sphere);
        }

        log::debug!(
            "Built scene: {} spheres, eye {:?}, vfov {} deg",
            scene.objects.len(),
            scene.eye,
            scene.vfov_degrees
        );

        Ok(scene)
    }
}
