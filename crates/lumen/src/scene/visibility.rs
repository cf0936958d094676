//! The cast → clip → sort/dedupe → close pipeline.
//!
//! Three rays per obstacle vertex: the direct ray ending on the vertex and
//! two siblings rotated by ±`eps_corner` and stretched to pseudo-infinite
//! length. The stretch lets one code path cover both the unobstructed case
//! (endpoint stays far away until the border clips it) and the obstructed
//! one (a nearer hit pulls the endpoint in). The perturbed siblings make
//! the lit region wrap around silhouette vertices instead of terminating
//! on them.
//!
//! Each step is a free function over slices so it can be tested and
//! benchmarked in isolation; `Scene::light_areas` glues them together.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::geom::{util, Polygon, Ray, VisCfg};

use super::{LightArea, LightKind, Scene};

/// Per-polygon vertex-count guess for the ray buffer reservation.
const VERTICES_PER_POLYGON_HINT: usize = 10;

/// Cast the three sampling rays per vertex of every polygon (border
/// included). Empty input produces an empty ray set.
pub fn cast_rays(polygons: &[Polygon], light: Vector2<f64>, cfg: &VisCfg) -> Vec<Ray> {
    if polygons.is_empty() {
        return Vec::new();
    }
    let mut rays = Vec::with_capacity(polygons.len() * 3 * VERTICES_PER_POLYGON_HINT);
    for polygon in polygons {
        for &vertex in polygon.vertices() {
            let direct = Ray::to_point(light, vertex);
            rays.push(direct);
            rays.push(direct.rotate(cfg.eps_corner).scale(cfg.stretch));
            rays.push(direct.rotate(-cfg.eps_corner).scale(cfg.stretch));
        }
    }
    rays
}

/// Clip every ray to its nearest intersection across all polygons; rays
/// that hit nothing keep their current endpoint.
pub fn clip_rays(polygons: &[Polygon], rays: &mut [Ray], cfg: &VisCfg) {
    for ray in rays.iter_mut() {
        for polygon in polygons {
            if let Some(hit) = polygon.intersect_ray(ray, cfg) {
                if util::length(ray.begin(), hit) < ray.length() {
                    *ray = ray.clip(hit);
                }
            }
        }
    }
}

/// Sort by cached angle, then keep a ray only when its endpoint lies
/// farther than `eps_dedupe` from the most recently kept endpoint. This
/// collapses the near-duplicate clusters the three-ray sampling produces.
pub fn dedupe_rays(rays: &mut Vec<Ray>, cfg: &VisCfg) {
    if rays.is_empty() {
        return;
    }
    rays.sort_by(|a, b| a.angle().partial_cmp(&b.angle()).unwrap_or(Ordering::Equal));
    let mut kept: Vec<Ray> = Vec::with_capacity(rays.len());
    kept.push(rays[0]);
    for &ray in &rays[1..] {
        let prev = kept[kept.len() - 1];
        if util::length(ray.end(), prev.end()) > cfg.eps_dedupe {
            kept.push(ray);
        }
    }
    *rays = kept;
}

/// Visibility polygon of a single light over `polygons`. Empty when there
/// is nothing to cast against.
pub fn light_area(polygons: &[Polygon], light: Vector2<f64>, cfg: &VisCfg) -> Polygon {
    let mut rays = cast_rays(polygons, light, cfg);
    if rays.is_empty() {
        return Polygon::default();
    }
    clip_rays(polygons, &mut rays, cfg);
    dedupe_rays(&mut rays, cfg);
    Polygon::ring(rays.iter().map(|ray| ray.end()).collect())
}

impl Scene {
    /// Compute one visibility polygon per light: static lights first, then
    /// the primary light (if set), then its satellites. An unset primary
    /// contributes neither itself nor satellites.
    pub fn light_areas(&self) -> Vec<LightArea> {
        let mut areas =
            Vec::with_capacity(self.static_lights().len() + 1 + self.satellite_lights().len());
        for &light in self.static_lights() {
            areas.push(LightArea {
                position: light,
                area: light_area(self.polygons(), light, self.cfg()),
                kind: LightKind::Static,
            });
        }
        if let Some(light) = self.primary_light() {
            areas.push(LightArea {
                position: light,
                area: light_area(self.polygons(), light, self.cfg()),
                kind: LightKind::Primary,
            });
        }
        for &light in self.satellite_lights() {
            areas.push(LightArea {
                position: light,
                area: light_area(self.polygons(), light, self.cfg()),
                kind: LightKind::Satellite,
            });
        }
        areas
    }
}
