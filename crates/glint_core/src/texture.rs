//! Texture loading and caching for textured spheres.
//!
//! Textures are decoded once from sRGB-encoded images into linear RGB floats
//! and shared read-only (`Arc`) across render threads.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec3;
use thiserror::Error;

use crate::color::srgb_channel_to_linear;

/// Errors that can occur during texture loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A decoded texture.
///
/// Pixels are linear RGB in [0, 1], row-major, row 0 at the top of the
/// image. Sampling addresses the texture by normalized UV with (0, 0) at the
/// bottom-left; UV values wrap modulo 1.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Texture width in pixels
    pub width: u32,

    /// Texture height in pixels
    pub height: u32,

    /// Linear RGB pixel data, row-major
    pub pixels: Vec<[f32; 3]>,
}

impl Texture {
    /// Create a new texture from linear pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a solid color texture (1x1).
    pub fn solid_color(color: Vec3) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![[color.x, color.y, color.z]],
        }
    }

    /// Sample with nearest-neighbor filtering.
    pub fn sample_nearest(&self, u: f32, v: f32) -> Vec3 {
        let (u, v) = (u.rem_euclid(1.0), v.rem_euclid(1.0));

        let x = (u * (self.width as f32 - 1.0)) as u32;
        let y = ((1.0 - v) * (self.height as f32 - 1.0)) as u32;

        let p = self.get_pixel(x.min(self.width - 1), y.min(self.height - 1));
        Vec3::from_array(p)
    }

    /// Sample with bilinear filtering.
    pub fn sample_bilinear(&self, u: f32, v: f32) -> Vec3 {
        let (u, v) = (u.rem_euclid(1.0), v.rem_euclid(1.0));

        // Convert to pixel coordinates, V flipped for image row order
        let x = u * (self.width as f32 - 1.0);
        let y = (1.0 - v) * (self.height as f32 - 1.0);

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x.fract();
        let fy = y.fract();

        let p00 = Vec3::from_array(self.get_pixel(x0, y0));
        let p10 = Vec3::from_array(self.get_pixel(x1, y0));
        let p01 = Vec3::from_array(self.get_pixel(x0, y1));
        let p11 = Vec3::from_array(self.get_pixel(x1, y1));

        let top = p00.lerp(p10, fx);
        let bottom = p01.lerp(p11, fx);
        top.lerp(bottom, fy)
    }

    /// Get pixel at integer coordinates.
    fn get_pixel(&self, x: u32, y: u32) -> [f32; 3] {
        let idx = (y * self.width + x) as usize;
        self.pixels.get(idx).copied().unwrap_or([0.0, 0.0, 0.0])
    }

    /// Get total size in bytes (approximate).
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<[f32; 3]>()
    }
}

/// Cache for loaded textures.
///
/// Textures are loaded on-demand and cached for reuse.
pub struct TextureCache {
    /// Cached textures by file path
    textures: HashMap<String, Arc<Texture>>,

    /// Base directory for resolving relative paths
    base_dir: Option<PathBuf>,
}

impl TextureCache {
    /// Create a new empty texture cache.
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            base_dir: None,
        }
    }

    /// Create a texture cache with a base directory for relative paths.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            textures: HashMap::new(),
            base_dir: Some(base_dir.into()),
        }
    }

    /// Load a texture from file, using cache if available.
    pub fn load(&mut self, path: &str) -> TextureResult<Arc<Texture>> {
        if let Some(texture) = self.textures.get(path) {
            return Ok(texture.clone());
        }

        let full_path = self.resolve_path(path);
        let texture = Arc::new(load_texture_file(&full_path)?);
        self.textures.insert(path.to_string(), texture.clone());

        log::debug!(
            "Loaded texture: {} ({}x{}, {:.1} KB)",
            path,
            texture.width,
            texture.height,
            texture.size_bytes() as f32 / 1024.0
        );

        Ok(texture)
    }

    /// Get a cached texture without loading.
    pub fn get(&self, path: &str) -> Option<Arc<Texture>> {
        self.textures.get(path).cloned()
    }

    /// Get the number of cached textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Clear all cached textures.
    pub fn clear(&mut self) {
        self.textures.clear();
    }

    /// Resolve a path relative to the base directory.
    fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);

        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(base) = &self.base_dir {
            base.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a texture from a file path, decoding sRGB to linear.
fn load_texture_file(path: &Path) -> TextureResult<Texture> {
    let img = image::open(path)
        .map_err(|e| TextureError::LoadError(format!("Failed to open {}: {}", path.display(), e)))?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let pixels: Vec<[f32; 3]> = rgb
        .pixels()
        .map(|p| {
            [
                srgb_channel_to_linear(p[0] as f32 / 255.0),
                srgb_channel_to_linear(p[1] as f32 / 255.0),
                srgb_channel_to_linear(p[2] as f32 / 255.0),
            ]
        })
        .collect();

    Ok(Texture::new(width, height, pixels))
}
