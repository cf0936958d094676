//! Curated internal API (UNSTABLE).
//!
//! Convenience surface for project-internal callers (the CLI driver and
//! benches). Not a stable public API; breaking changes are expected.

// Geometry
pub use crate::geom::{util, Polygon, Ray, VisCfg};
// Scene aggregate and pipeline
pub use crate::scene::visibility::{cast_rays, clip_rays, dedupe_rays, light_area};
pub use crate::scene::{
    LightArea, LightKind, Rect, Scene, SATELLITE_COUNT, SATELLITE_RADIUS,
};
// Random scenes
pub use crate::scene::rand::{draw_scene, ObstacleCfg, ReplayToken, SceneCfg, VertexCount};
