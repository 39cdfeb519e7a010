//! Vector math needed to compute facet normals.
//!
//! All functions are pure and work on `f64` [`cgmath`] types. None of them
//! special-cases degenerate input: the normal of a zero-area triangle has
//! NaN components (the norm of the cross product is 0). Use
//! [`is_degenerate_normal`] to detect that.

use cgmath::{InnerSpace, Point3, Vector3};


/// Cross product `u × v` (right-hand rule).
pub fn cross(u: Vector3<f64>, v: Vector3<f64>) -> Vector3<f64> {
    u.cross(v)
}

/// Dot product `u · v`.
pub fn dot(u: Vector3<f64>, v: Vector3<f64>) -> f64 {
    u.dot(v)
}

/// Euclidean length of `v`, i.e. `sqrt(v · v)`.
pub fn norm(v: Vector3<f64>) -> f64 {
    dot(v, v).sqrt()
}

/// Returns the unit normal of the triangle `a`, `b`, `c`.
///
/// The direction follows the winding order: for counter clockwise vertices
/// (seen from the outside) the normal points outwards. Each component of
/// `(b - a) × (c - a)` is divided by its norm, so collinear or coincident
/// points result in NaN components.
pub fn facet_normal(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Vector3<f64> {
    let n = cross(b - a, c - a);
    n / norm(n)
}

/// Returns `true` if `n` is not a usable normal, i.e. it contains NaN or
/// infinite components or has length 0.
pub fn is_degenerate_normal(n: Vector3<f64>) -> bool {
    let finite = n.x.is_finite() && n.y.is_finite() && n.z.is_finite();
    !finite || norm(n) == 0.0
}
