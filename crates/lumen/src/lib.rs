//! 2D visibility-polygon engine.
//!
//! Given a set of opaque obstacle polygons and one or more point lights,
//! compute for each light the polygon bounding the region it illuminates.
//! The crate owns no window and draws nothing: an interaction layer feeds
//! obstacle/light edits into [`scene::Scene`], and a renderer reads the
//! computed [`scene::LightArea`] values back out.
//!
//! Layout
//! - `geom`: vector helpers, the [`geom::Ray`] value type, [`geom::Polygon`]
//!   with its nearest ray-intersection query, and the [`geom::VisCfg`]
//!   tolerance set.
//! - `scene`: the mutable scene aggregate (border, obstacles, lights) and
//!   the cast → clip → dedupe → close pipeline in [`scene::visibility`].

pub mod api;
pub mod geom;
pub mod scene;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports; all coordinates are plain f64 pairs.
pub use geom::{Polygon, Ray, VisCfg};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{util, Polygon, Ray, VisCfg};
    pub use crate::scene::rand::{draw_scene, ObstacleCfg, ReplayToken, SceneCfg, VertexCount};
    pub use crate::scene::visibility::{cast_rays, clip_rays, dedupe_rays, light_area};
    pub use crate::scene::{LightArea, LightKind, Rect, Scene};
    pub use nalgebra::Vector2 as Vec2;
}
