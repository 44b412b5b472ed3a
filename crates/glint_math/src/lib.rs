// Re-export glam for convenience
pub use glam::*;

mod ray;
pub use ray::Ray;

/// Reflect a direction about a normal.
///
/// `reflect(d, n) = d - 2 * dot(d, n) * n`. The normal is expected to be
/// unit length; the incoming direction does not have to be.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - 2.0 * d.dot(n) * n
}
