//! Glint renderer - CPU path tracing.
//!
//! A recursive Monte Carlo estimator of the rendering equation over scenes
//! of analytic spheres:
//!
//! - Brute-force nearest-hit intersection (no acceleration structure)
//! - Lambertian BRDF with an ad-hoc thresholded specular boost
//! - Uniform hemisphere sampling and fixed-probability russian roulette
//! - Linear-space multi-sample averaging, sRGB-encoded BGRA8 output
//! - Rayon-parallel frame driver over image rows

mod brdf;
mod camera;
mod frame;
mod intersect;
mod tracer;

pub use brdf::{brdf, effective_diffuse, spherical_uv};
pub use camera::Camera;
pub use frame::{render, render_into, Framebuffer, RenderSettings};
pub use intersect::{find_closest_hit, HitRecord};
pub use tracer::{compute_color, sample_hemisphere, MAX_DEPTH};

/// Re-export math and scene types used in the public API
pub use glint_core::{Scene, Sphere};
pub use glint_math::{Ray, Vec3};
