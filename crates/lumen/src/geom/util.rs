//! Vector/point helpers shared by the ray and polygon code.
//!
//! Points and free vectors share the `Vector2<f64>` representation; only
//! vectors are meaningful arguments to `cross`, `angle_of`, `is_collinear`.

use nalgebra::Vector2;

/// Dot product.
#[inline]
pub fn dot(v1: Vector2<f64>, v2: Vector2<f64>) -> f64 {
    v1.dot(&v2)
}

/// Euclidean distance between two points.
#[inline]
pub fn length(p1: Vector2<f64>, p2: Vector2<f64>) -> f64 {
    (p2 - p1).norm()
}

/// Euclidean norm of a vector.
#[inline]
pub fn norm(v: Vector2<f64>) -> f64 {
    v.norm()
}

/// Signed scalar cross product (z-component of the 3D cross product).
/// Positive for v1→v2 counterclockwise.
#[inline]
pub fn cross(v1: Vector2<f64>, v2: Vector2<f64>) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Polar angle of `v`, normalized into `[0, 2π)`.
#[inline]
pub fn angle_of(v: Vector2<f64>) -> f64 {
    let angle = v.y.atan2(v.x);
    if angle < 0.0 {
        angle + std::f64::consts::TAU
    } else {
        angle
    }
}

/// Degeneracy gate for the ray/segment solver: near-zero cross product
/// means the parametric system has a near-singular determinant.
#[inline]
pub fn is_collinear(v1: Vector2<f64>, v2: Vector2<f64>, eps: f64) -> bool {
    cross(v1, v2).abs() < eps
}
