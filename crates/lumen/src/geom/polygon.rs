//! Ordered-vertex polygon with a nearest ray-intersection query.
//!
//! A polygon is *open* while it is being drawn (no implicit closing edge)
//! and becomes *closed* when its first vertex is appended again, so the
//! edge iteration over consecutive vertex pairs covers the closing edge
//! explicitly and never has to guess the lifecycle phase.

use nalgebra::Vector2;

use super::types::{Ray, VisCfg};
use super::util;

/// Insertion-ordered vertex list; `closed` marks the explicit closure
/// (`vertices.first() == vertices.last()`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2<f64>>,
    closed: bool,
}

impl Polygon {
    /// Open polygon from an initial vertex list.
    pub fn from_vertices(vertices: Vec<Vector2<f64>>) -> Self {
        Self {
            vertices,
            closed: false,
        }
    }

    /// Closed polygon from an outline; re-appends the first point when the
    /// list does not already end on it.
    pub fn ring(mut points: Vec<Vector2<f64>>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self {
            vertices: points,
            closed: true,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a vertex. No effect on closedness.
    pub fn add_vertex(&mut self, vertex: Vector2<f64>) {
        self.vertices.push(vertex);
    }

    /// Replace the last vertex (rubber-banding). No-op on an empty polygon.
    pub fn update_last_vertex(&mut self, vertex: Vector2<f64>) {
        if let Some(last) = self.vertices.last_mut() {
            *last = vertex;
        }
    }

    /// Close the loop by re-appending the first vertex. No-op with fewer
    /// than 2 vertices (callers discard those).
    pub fn close(&mut self) {
        if self.vertices.len() >= 2 {
            let first = self.vertices[0];
            self.vertices.push(first);
        }
        self.closed = true;
    }

    /// Nearest intersection of `ray` with any explicit edge, measured from
    /// the ray's begin. `None` with fewer than 2 vertices or no hit.
    pub fn intersect_ray(&self, ray: &Ray, cfg: &VisCfg) -> Option<Vector2<f64>> {
        if self.vertices.len() < 2 {
            return None;
        }
        let mut best: Option<(f64, Vector2<f64>)> = None;
        for edge in self.vertices.windows(2) {
            if let Some(hit) = ray_segment_intersection(edge[0], edge[1], ray, cfg.eps_collinear) {
                let dist = util::length(ray.begin(), hit);
                if best.map_or(true, |(d, _)| dist < d) {
                    best = Some((dist, hit));
                }
            }
        }
        best.map(|(_, hit)| hit)
    }

    /// Even-odd containment test over the explicit edges. Meaningful for
    /// closed polygons; open outlines are treated as if the closing edge
    /// were absent.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        let mut inside = false;
        for edge in self.vertices.windows(2) {
            let (a, b) = (edge[0], edge[1]);
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// Solve `ray.begin + t1·rd = seg.begin + t2·sd` for the parametric pair;
/// a hit needs `t2 ∈ [0,1]` along the segment and `t1 ≥ 0` along the
/// (half-line) ray. Collinear pairs are rejected before the division.
fn ray_segment_intersection(
    seg_begin: Vector2<f64>,
    seg_end: Vector2<f64>,
    ray: &Ray,
    eps_collinear: f64,
) -> Option<Vector2<f64>> {
    let sd = seg_end - seg_begin;
    let rd = ray.end() - ray.begin();
    if util::is_collinear(sd, rd, eps_collinear) {
        return None;
    }
    let rb = ray.begin();
    let t2 = (rd.x * (seg_begin.y - rb.y) + rd.y * (rb.x - seg_begin.x)) / util::cross(sd, rd);
    // Recover t1 from the better-conditioned coordinate equation.
    let t1 = if rd.x.abs() > rd.y.abs() {
        (seg_begin.x + sd.x * t2 - rb.x) / rd.x
    } else {
        (seg_begin.y + sd.y * t2 - rb.y) / rd.y
    };
    if !(0.0..=1.0).contains(&t2) || t1 < 0.0 {
        return None;
    }
    Some(rb + rd * t1)
}
