//! Random scenes (radial-jitter obstacles + replay tokens).
//!
//! Purpose
//! - A small deterministic sampler for benchmark and stress scenes: one
//!   border rectangle, the centered primary light, and `n` star-shaped
//!   obstacles drawn by radial jitter around random centers.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.
//!
//! The obstacles are fed through the regular scene commands (add vertex,
//! finish), so the sampler also exercises the interaction path.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Polygon;

use super::{Rect, Scene};

/// Vertex count distribution per obstacle.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Shape parameters for one obstacle.
#[derive(Clone, Copy, Debug)]
pub struct ObstacleCfg {
    pub vertex_count: VertexCount,
    /// Base radius before jitter, in scene units.
    pub radius: f64,
    /// Radial jitter (relative amplitude): radii are `radius * (1 + u)`
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
}

impl Default for ObstacleCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 8 },
            radius: 40.0,
            radial_jitter: 0.4,
        }
    }
}

/// Scene sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    pub bounds: Rect,
    pub obstacle_count: usize,
    pub obstacle: ObstacleCfg,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            bounds: Rect::new(Vector2::new(0.0, 0.0), Vector2::new(800.0, 600.0)),
            obstacle_count: 5,
            obstacle: ObstacleCfg::default(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a reproducible scene: border, centered light, `obstacle_count`
/// star-shaped obstacles inside the bounds.
pub fn draw_scene(cfg: SceneCfg, tok: ReplayToken) -> Scene {
    let mut rng = tok.to_std_rng();
    let mut scene = Scene::default();
    scene.update_border(cfg.bounds);

    let span = cfg.bounds.max - cfg.bounds.min;
    for _ in 0..cfg.obstacle_count {
        let margin = cfg.obstacle.radius * (1.0 + cfg.obstacle.radial_jitter);
        let cx = cfg.bounds.min.x + margin + rng.gen::<f64>() * (span.x - 2.0 * margin).max(0.0);
        let cy = cfg.bounds.min.y + margin + rng.gen::<f64>() * (span.y - 2.0 * margin).max(0.0);
        let center = Vector2::new(cx, cy);

        let n = cfg.obstacle.vertex_count.sample(&mut rng);
        let phase = rng.gen::<f64>() * std::f64::consts::TAU;

        scene.add_polygon(Polygon::default());
        scene.set_complete(false);
        for k in 0..n {
            let angle = phase + std::f64::consts::TAU * k as f64 / n as f64;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.obstacle.radial_jitter;
            let r = cfg.obstacle.radius * (1.0 + u);
            scene.add_vertex_to_last_polygon(center + Vector2::new(r * angle.cos(), r * angle.sin()));
        }
        scene.finish_polygon();
    }
    scene
}
