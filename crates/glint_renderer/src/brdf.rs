//! Surface reflectance: Lambertian term plus a thresholded specular boost.

use std::f32::consts::PI;

use glam::Vec3;
use glint_core::Sphere;
use glint_math::reflect;

/// Alignment threshold between the sampled direction and the mirror
/// reflection above which the specular boost applies.
const SPECULAR_ALIGN_THRESHOLD: f32 = 1.0 - 0.01;

/// Magnitude of the uniform white specular boost, scaled by the sphere's
/// specular weight. Deliberately energy-non-conserving; changing it would
/// recalibrate the brightness of every scene.
const SPECULAR_BOOST: f32 = 10.0;

/// Map a unit normal to UV coordinates by spherical projection.
///
/// `u = 0.5 + atan2(n.z, n.x) / 2pi`, `v = 0.5 - acos(n.y) / pi`.
pub fn spherical_uv(n: Vec3) -> (f32, f32) {
    let u = 0.5 + n.z.atan2(n.x) / (2.0 * PI);
    let v = 0.5 - n.y.clamp(-1.0, 1.0).acos() / PI;
    (u, v)
}

/// Effective diffuse reflectance for a hit.
///
/// Textured spheres derive their reflectance per hit from the texture; this
/// is a local value, the sphere itself is never mutated.
pub fn effective_diffuse(sphere: &Sphere, n: Vec3) -> Vec3 {
    match &sphere.texture {
        Some(texture) => {
            let (u, v) = spherical_uv(n);
            texture.sample_bilinear(u, v)
        }
        None => sphere.diffuse,
    }
}

/// Evaluate the BRDF for incoming direction `d`, sampled outgoing direction
/// `wo` and surface normal `n`.
///
/// The base term is the normalized Lambertian lobe `diffuse / pi`. Spheres
/// with a positive specular weight additionally get a fixed white boost when
/// `wo` is nearly aligned with the mirror reflection of `d`.
pub fn brdf(d: Vec3, wo: Vec3, n: Vec3, sphere: &Sphere, diffuse: Vec3) -> Vec3 {
    let lambert = diffuse * (1.0 / PI);

    if sphere.specular > 0.0 {
        let r = reflect(d.normalize(), n.normalize());
        if wo.normalize().dot(r) > SPECULAR_ALIGN_THRESHOLD {
            return lambert + Vec3::ONE * SPECULAR_BOOST * sphere.specular;
        }
    }

    lambert
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Texture;
    use std::sync::Arc;

    #[test]
    fn test_lambertian_normalization() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Vec3::ONE);
        let fr = brdf(-Vec3::Z, Vec3::Z, Vec3::Z, &sphere, sphere.diffuse);
        assert!((fr.x - 1.0 / PI).abs() < 1e-6);
        assert_eq!(fr.x, fr.y);
        assert_eq!(fr.y, fr.z);
    }

    #[test]
    fn test_specular_boost_when_aligned() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Vec3::ZERO).with_specular(0.5);

        // Incoming straight down the normal reflects straight back
        let d = -Vec3::Z;
        let mirror = Vec3::Z;
        let fr = brdf(d, mirror, Vec3::Z, &sphere, sphere.diffuse);
        assert!((fr.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_boost_off_mirror() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Vec3::ONE).with_specular(0.5);

        // 45 degrees off the mirror direction: diffuse only
        let wo = Vec3::new(1.0, 0.0, 1.0);
        let fr = brdf(-Vec3::Z, wo, Vec3::Z, &sphere, sphere.diffuse);
        assert!((fr.x - 1.0 / PI).abs() < 1e-6);
    }

    #[test]
    fn test_spherical_uv_poles_and_equator() {
        // North pole: v = 0.5
        let (_, v) = spherical_uv(Vec3::Y);
        assert!((v - 0.5).abs() < 1e-6);

        // South pole: v = -0.5
        let (_, v) = spherical_uv(-Vec3::Y);
        assert!((v + 0.5).abs() < 1e-6);

        // +X on the equator: u = 0.5, v = 0
        let (u, v) = spherical_uv(Vec3::X);
        assert!((u - 0.5).abs() < 1e-6);
        assert!(v.abs() < 1e-6);
    }

    #[test]
    fn test_textured_sphere_uses_texture() {
        let texture = Arc::new(Texture::solid_color(Vec3::new(0.25, 0.5, 0.75)));
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Vec3::ONE).with_texture(texture);

        let diffuse = effective_diffuse(&sphere, Vec3::X);
        assert!((diffuse - Vec3::new(0.25, 0.5, 0.75)).length() < 1e-6);

        // The sphere's own reflectance is untouched
        assert_eq!(sphere.diffuse, Vec3::ONE);
    }
}
