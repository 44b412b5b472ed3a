//! Frame driver: per-pixel sampling loop and parallel dispatch.
//!
//! Rows are distributed over a rayon worker pool. Each row task owns a
//! seeded generator of its own, so no generator is shared across threads and
//! a fixed base seed reproduces the image bit-for-bit regardless of thread
//! count.

use std::time::Instant;

use glam::Vec3;
use glint_core::color::{bgra8_to_rgba_bytes, pack_bgra8};
use glint_core::{RenderParams, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::tracer::compute_color;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Independent radiance estimates per pixel
    pub samples_per_pixel: u32,
    /// Base seed for the per-row generators
    pub seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            samples_per_pixel: 64,
            seed: 0,
        }
    }
}

impl From<&RenderParams> for RenderSettings {
    fn from(params: &RenderParams) -> Self {
        Self {
            width: params.width,
            height: params.height,
            samples_per_pixel: params.samples_per_pixel,
            seed: params.seed,
        }
    }
}

/// Render the scene into a caller-supplied packed pixel buffer.
///
/// `frame` holds one BGRA8 pixel per `u32`, row-major with `stride` elements
/// per row; the stride may exceed the image width (padded rows), and pixels
/// are addressed as `row * stride + col`. Padding elements are left
/// untouched. Samples are averaged in linear space and gamma-encoded once
/// per pixel.
///
/// # Panics
///
/// Panics if `stride` is smaller than the image width or `frame` is shorter
/// than `stride * height`.
pub fn render_into(scene: &Scene, settings: &RenderSettings, frame: &mut [u32], stride: usize) {
    let width = settings.width as usize;
    let height = settings.height as usize;
    assert!(stride >= width, "row stride {} < image width {}", stride, width);
    assert!(
        frame.len() >= stride * height,
        "framebuffer too small: {} < {}",
        frame.len(),
        stride * height
    );

    let camera = Camera::from_scene(scene, settings.width, settings.height);
    let sample_scale = 1.0 / settings.samples_per_pixel.max(1) as f32;

    log::info!(
        "Rendering {}x{} @ {} spp on {} threads",
        settings.width,
        settings.height,
        settings.samples_per_pixel,
        rayon::current_num_threads()
    );
    let start = Instant::now();

    frame[..stride * height]
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let mut rng = StdRng::seed_from_u64(row_seed(settings.seed, y));

            for x in 0..width {
                let ray = camera.primary_ray(x as u32, y as u32);

                let mut sum = Vec3::ZERO;
                for _ in 0..settings.samples_per_pixel {
                    sum += compute_color(scene, ray.origin(), ray.direction(), 0, &mut rng);
                }

                row[x] = pack_bgra8(sum * sample_scale);
            }
        });

    log::info!("Rendered in {:.2?}", start.elapsed());
}

/// Derive an independent stream seed for a row task.
///
/// SplitMix64 finalizer over base seed and row index, so adjacent rows get
/// uncorrelated generator states even for small consecutive seeds.
fn row_seed(base: u64, row: usize) -> u64 {
    let mut z = base ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// An owned packed framebuffer, stride equal to width.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a framebuffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xFF00_0000; (width * height) as usize],
        }
    }

    /// Packed BGRA8 pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw little-endian byte view (B, G, R, A per pixel), suitable for
    /// blitting into a BGRA8888 surface.
    pub fn as_bgra_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Convert to RGBA8 bytes for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &pixel in &self.pixels {
            bytes.extend_from_slice(&bgra8_to_rgba_bytes(pixel));
        }
        bytes
    }
}

/// Render the scene into a freshly allocated framebuffer.
pub fn render(scene: &Scene, settings: &RenderSettings) -> Framebuffer {
    let mut frame = Framebuffer::new(settings.width, settings.height);
    let stride = settings.width as usize;
    render_into(scene, settings, &mut frame.pixels, stride);
    frame
}
