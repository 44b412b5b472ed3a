//! Nearest-hit intersection query against the sphere list.

use glam::Vec3;
use glint_core::Sphere;
use glint_math::Ray;

/// Record of a ray-sphere intersection.
///
/// Ephemeral: produced per query, never stored. The normal is the outward
/// unit normal, `normalize(position - center)`.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub position: Vec3,
    /// Outward unit normal at the intersection
    pub normal: Vec3,
    /// The sphere that was hit
    pub sphere: &'a Sphere,
}

/// Find the closest intersection of `ray` with any sphere in `objects`.
///
/// Solves the ray-sphere quadratic per sphere and keeps the globally
/// smallest non-negative parameter t. Of the two roots the smaller one is
/// preferred when it lies in front of the origin; intersections behind the
/// origin are rejected. A strictly smaller t wins; equal-t ties resolve by
/// iteration order.
pub fn find_closest_hit<'a>(objects: &'a [Sphere], ray: &Ray) -> Option<HitRecord<'a>> {
    let o = ray.origin();
    let d = ray.direction();

    let a = d.dot(d);
    // Zero-length direction: no hit, and no division by zero below
    if a == 0.0 {
        return None;
    }

    let mut closest_t = f32::MAX;
    let mut closest: Option<&Sphere> = None;

    for sphere in objects {
        let co = o - sphere.center;
        let b = 2.0 * co.dot(d);
        let c = co.dot(co) - sphere.radius * sphere.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            continue;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);

        let t = if t1 >= 0.0 { t1 } else { t2 };
        if t >= 0.0 && t < closest_t {
            closest_t = t;
            closest = Some(sphere);
        }
    }

    closest.map(|sphere| {
        let position = o + closest_t * d;
        HitRecord {
            position,
            normal: (position - sphere.center).normalize(),
            sphere,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at_origin() -> Vec<Sphere> {
        vec![Sphere::new(Vec3::ZERO, 1.0, Vec3::splat(0.5))]
    }

    #[test]
    fn test_hit_through_center() {
        let objects = unit_sphere_at_origin();
        let origin = Vec3::new(0.0, 0.0, -3.0);
        let ray = Ray::new(origin, Vec3::Z);

        let hit = find_closest_hit(&objects, &ray).expect("should hit");

        // Entry point is |origin| - radius in front of the origin
        let distance = (hit.position - origin).length();
        assert!((distance - 2.0).abs() < 1e-4);

        // Normal at the entry point is anti-parallel to the ray direction
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn test_no_false_hit() {
        let objects = unit_sphere_at_origin();
        // Closest approach to the center is 2, radius is 1
        let ray = Ray::new(Vec3::new(0.0, 2.0, -5.0), Vec3::Z);
        assert!(find_closest_hit(&objects, &ray).is_none());
    }

    #[test]
    fn test_behind_origin_rejected() {
        let objects = unit_sphere_at_origin();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(find_closest_hit(&objects, &ray).is_none());
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let objects = unit_sphere_at_origin();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = find_closest_hit(&objects, &ray).expect("should hit");
        assert!((hit.position - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_closest_of_two_wins() {
        let objects = vec![
            Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, Vec3::ONE),
            Sphere::new(Vec3::new(0.0, 0.0, 4.0), 1.0, Vec3::ONE),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = find_closest_hit(&objects, &ray).expect("should hit");
        assert!((hit.position.z - 3.0).abs() < 1e-4);
        assert_eq!(hit.sphere.center.z, 4.0);
    }

    #[test]
    fn test_zero_length_direction_is_no_hit() {
        let objects = unit_sphere_at_origin();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO);
        assert!(find_closest_hit(&objects, &ray).is_none());
    }

    #[test]
    fn test_unnormalized_direction() {
        // Direction length 10: same surface point, t scales accordingly
        let objects = unit_sphere_at_origin();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 0.0, 10.0));

        let hit = find_closest_hit(&objects, &ray).expect("should hit");
        assert!((hit.position - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
    }
}
