//! 2D geometry for visibility casting.
//!
//! Purpose
//! - Provide the small, numerically explicit vocabulary the pipeline needs:
//!   vector helpers (`util`), an immutable directed-segment `Ray` with a
//!   cached polar angle, and an ordered-vertex `Polygon` with a nearest
//!   ray-intersection query.
//!
//! Why immutable `Ray`
//! - The cached angle must stay consistent with `end - begin`. The only
//!   mutators are `rotate` and `scale`, both returning a fresh value, so the
//!   invariant cannot be broken from outside.
//!
//! Code cross-refs: `scene::visibility` (the pipeline), `types::VisCfg`.

pub mod polygon;
pub mod types;
pub mod util;

pub use polygon::Polygon;
pub use types::{Ray, VisCfg};
