//! JSON scene/result files for the driver.
//!
//! The core crate keeps no persistence format; these DTOs replay a scene
//! file through the regular scene commands and flatten pipeline results
//! back to plain coordinate lists.

use anyhow::{Context, Result};
use lumen::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RectFile {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneFile {
    pub border: RectFile,
    /// Primary light; omitted means "centered in the border".
    #[serde(default)]
    pub light: Option<[f64; 2]>,
    #[serde(default)]
    pub static_lights: Vec<[f64; 2]>,
    /// Open obstacle outlines; closed on load.
    #[serde(default)]
    pub obstacles: Vec<Vec<[f64; 2]>>,
}

impl SceneFile {
    /// Replay the file through the scene commands.
    pub fn to_scene(&self) -> Scene {
        let mut scene = Scene::default();
        scene.update_border(Rect::new(
            Vec2::new(self.border.min[0], self.border.min[1]),
            Vec2::new(self.border.max[0], self.border.max[1]),
        ));
        if let Some([x, y]) = self.light {
            scene.set_light_source(Vec2::new(x, y));
        }
        for &[x, y] in &self.static_lights {
            scene.add_static_light(Vec2::new(x, y));
        }
        for outline in &self.obstacles {
            scene.add_polygon(Polygon::default());
            scene.set_complete(false);
            for &[x, y] in outline {
                scene.add_vertex_to_last_polygon(Vec2::new(x, y));
            }
            scene.finish_polygon();
        }
        scene
    }

    /// Flatten a scene back to a file; obstacle outlines lose the explicit
    /// closing vertex so they round-trip through `to_scene`.
    pub fn from_scene(scene: &Scene) -> SceneFile {
        let border = scene
            .polygons()
            .first()
            .map(|b| {
                let v = b.vertices();
                RectFile {
                    min: [v[0].x, v[0].y],
                    max: [v[2].x, v[2].y],
                }
            })
            .unwrap_or(RectFile {
                min: [0.0, 0.0],
                max: [0.0, 0.0],
            });
        let obstacles = scene
            .polygons()
            .iter()
            .skip(1)
            .map(|p| {
                let v = p.vertices();
                let open = if p.is_closed() && v.len() >= 2 {
                    &v[..v.len() - 1]
                } else {
                    v
                };
                open.iter().map(|p| [p.x, p.y]).collect()
            })
            .collect();
        SceneFile {
            border,
            light: scene.primary_light().map(|l| [l.x, l.y]),
            static_lights: scene.static_lights().iter().map(|l| [l.x, l.y]).collect(),
            obstacles,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaFile {
    pub light: [f64; 2],
    pub kind: String,
    pub outline: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreasFile {
    pub areas: Vec<AreaFile>,
}

impl AreasFile {
    pub fn from_areas(areas: &[LightArea]) -> AreasFile {
        AreasFile {
            areas: areas
                .iter()
                .map(|a| AreaFile {
                    light: [a.position.x, a.position.y],
                    kind: kind_label(a.kind).to_string(),
                    outline: a.area.vertices().iter().map(|p| [p.x, p.y]).collect(),
                })
                .collect(),
        }
    }
}

pub fn kind_label(kind: LightKind) -> &'static str {
    match kind {
        LightKind::Primary => "primary",
        LightKind::Static => "static",
        LightKind::Satellite => "satellite",
    }
}

pub fn load_scene(path: &Path) -> Result<SceneFile> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
