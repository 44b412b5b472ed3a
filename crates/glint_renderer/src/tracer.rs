//! Recursive Monte Carlo radiance estimator.
//!
//! Single-sample path estimator of the rendering equation: each non-terminal
//! bounce recurses exactly once, so a path is a chain, not a tree. There is
//! no explicit light sampling; paths find emitters by chance.

use std::f32::consts::PI;

use glam::Vec3;
use glint_core::Scene;
use glint_math::{reflect, Ray};
use rand::{Rng, RngCore};

use crate::brdf::{brdf, effective_diffuse};
use crate::intersect::find_closest_hit;

/// Hard recursion cap: bounces beyond this return black.
pub const MAX_DEPTH: u32 = 5;

/// Fixed russian-roulette termination probability.
const ROULETTE_P: f32 = 0.2;

/// Offset along the normal applied to secondary ray origins so they do not
/// re-intersect the surface they left.
const SELF_INTERSECT_BIAS: f32 = 0.001;

/// Iteration cap for hemisphere rejection sampling. Expected ~2 iterations;
/// the cap only guards against a pathological generator.
const MAX_REJECTS: u32 = 10_000;

/// Estimate the radiance arriving at `origin` from `direction`.
///
/// Returns linear radiance. Misses return black (the background carries no
/// light). Perfect mirrors (`specular >= 1`) reflect deterministically
/// without roulette or BRDF weighting. All other surfaces terminate with
/// probability 0.2 returning only their emission; the continuing branch is
/// intentionally not divided by the survival probability, matching the
/// reference renderer's brightness calibration (biased estimator).
pub fn compute_color(
    scene: &Scene,
    origin: Vec3,
    direction: Vec3,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Vec3 {
    if depth > MAX_DEPTH {
        return Vec3::ZERO;
    }

    let ray = Ray::new(origin, direction);
    let hit = match find_closest_hit(&scene.objects, &ray) {
        Some(hit) => hit,
        None => return Vec3::ZERO,
    };

    let sphere = hit.sphere;
    let n = hit.normal;
    let emission = sphere.emission;

    if sphere.is_mirror() {
        let reflected = reflect(direction.normalize(), n);
        let li = compute_color(
            scene,
            hit.position + n * SELF_INTERSECT_BIAS,
            reflected,
            depth + 1,
            rng,
        );
        return emission + li;
    }

    if rng.gen::<f32>() < ROULETTE_P {
        return emission;
    }

    let r = sample_hemisphere(n, rng);
    let li = compute_color(
        scene,
        hit.position + n * SELF_INTERSECT_BIAS,
        r,
        depth + 1,
        rng,
    );

    let diffuse = effective_diffuse(sphere, n);
    let fr = brdf(direction, r, n, sphere, diffuse);
    let pdf = 1.0 / (2.0 * PI);

    emission + fr * (r.dot(n) / pdf) * li
}

/// Sample a direction uniformly over the hemisphere about `n`.
///
/// Rejection sampling in the unit ball: draw from [-1, 1]^3, reject points
/// outside the ball (and degenerate near-zero draws, which would not
/// normalize), flip below-surface samples to the upper hemisphere. An
/// explicit loop, not recursion, so a bad generator cannot overflow the
/// stack.
pub fn sample_hemisphere(n: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTS {
        let v = Vec3::new(
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
        );

        let len_sq = v.length_squared();
        if len_sq > 1.0 || len_sq < 1e-8 {
            continue;
        }

        let v = if v.dot(n) < 0.0 { -v } else { v };
        return v / len_sq.sqrt();
    }

    // Unreachable with any sane generator
    n
}
