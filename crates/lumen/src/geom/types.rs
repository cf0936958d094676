//! Tolerances and the `Ray` value type.
//!
//! - `VisCfg`: centralizes the epsilons and the stretch factor of the
//!   visibility pipeline; no tolerance appears inline anywhere else.
//! - `Ray`: directed segment with a cached polar angle, immutable by
//!   construction.

use nalgebra::Vector2;

use super::util;

/// Visibility tolerances.
///
/// The relative scale is load-bearing: `eps_corner` (angular perturbation
/// for silhouette sampling) must stay far below `eps_dedupe` (endpoint
/// coalescing distance), which in turn is negligible against `stretch`
/// (the pseudo-infinite ray length). Collinearity and corner sampling
/// share the 1e-9 scale.
#[derive(Clone, Copy, Debug)]
pub struct VisCfg {
    /// Reject ray/segment pairs with `|cross| < eps_collinear`.
    pub eps_collinear: f64,
    /// Angular offset of the two perturbed sibling rays per vertex.
    pub eps_corner: f64,
    /// Minimum endpoint distance between two kept rays after sorting.
    pub eps_dedupe: f64,
    /// Scale factor stretching a ray to effectively infinite length.
    pub stretch: f64,
}

impl Default for VisCfg {
    fn default() -> Self {
        Self {
            eps_collinear: 1e-9,
            eps_corner: 1e-9,
            eps_dedupe: 1e-4,
            stretch: 1e6,
        }
    }
}

/// Directed segment from `begin` to `end` with the polar angle of
/// `end - begin` cached for angular sorting.
///
/// Invariants:
/// - `angle` is normalized into `[0, 2π)` at construction.
/// - Every operation returns a new, internally consistent value; there are
///   no setters, so the cached angle cannot drift from the endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    begin: Vector2<f64>,
    end: Vector2<f64>,
    angle: f64,
}

impl Ray {
    /// Ray from `begin` aimed at `end`.
    #[inline]
    pub fn to_point(begin: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self {
            begin,
            end,
            angle: util::angle_of(end - begin),
        }
    }

    #[inline]
    pub fn begin(&self) -> Vector2<f64> {
        self.begin
    }

    #[inline]
    pub fn end(&self) -> Vector2<f64> {
        self.end
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Segment length `|end - begin|`.
    #[inline]
    pub fn length(&self) -> f64 {
        util::length(self.begin, self.end)
    }

    /// Same origin and length, angle shifted by `delta`.
    ///
    /// The cached angle is not re-normalized: for the ±1e-9 silhouette
    /// perturbation this keeps siblings adjacent to their direct ray in the
    /// angular sort even across the 0/2π seam.
    pub fn rotate(&self, delta: f64) -> Ray {
        let angle = self.angle + delta;
        let len = self.length();
        let end = self.begin + Vector2::new(len * angle.cos(), len * angle.sin());
        Ray {
            begin: self.begin,
            end,
            angle,
        }
    }

    /// Same origin and angle, `end` moved to `begin + factor * (end - begin)`.
    pub fn scale(&self, factor: f64) -> Ray {
        Ray {
            begin: self.begin,
            end: self.begin + (self.end - self.begin) * factor,
            angle: self.angle,
        }
    }

    /// Replace the endpoint with a hit point lying on the ray; begin and
    /// cached angle are unchanged.
    #[inline]
    pub(crate) fn clip(&self, hit: Vector2<f64>) -> Ray {
        Ray {
            begin: self.begin,
            end: hit,
            angle: self.angle,
        }
    }
}
