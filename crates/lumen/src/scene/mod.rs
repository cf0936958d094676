//! Scene aggregate: border, obstacles, lights, interaction flags.
//!
//! One `Scene` lives per session/canvas. Slot 0 of the polygon list is the
//! synthetic border rectangle mirroring the viewport; slots 1.. are user
//! obstacles. All mutation goes through explicit commands driven by the
//! interaction layer; the visibility computation in [`visibility`] is a
//! pure query over the current state.

pub mod rand;
pub mod visibility;

#[cfg(test)]
mod tests;

use nalgebra::Vector2;

use crate::geom::{Polygon, VisCfg};

/// Number of satellite lights orbiting the primary light.
pub const SATELLITE_COUNT: usize = 6;
/// Orbit radius of the satellite lights.
pub const SATELLITE_RADIUS: f64 = 8.0;

/// Which light a computed area belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Primary,
    Static,
    Satellite,
}

/// One pipeline result: a light position, the polygon it illuminates, and
/// the light's kind. Result order is static lights, then primary, then
/// satellites.
#[derive(Clone, Debug)]
pub struct LightArea {
    pub position: Vector2<f64>,
    pub area: Polygon,
    pub kind: LightKind,
}

/// Axis-aligned viewport bounds for the border polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Rect {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }
}

/// The visibility scene. See the module docs for the slot-0 convention.
#[derive(Clone, Debug)]
pub struct Scene {
    polygons: Vec<Polygon>,
    primary_light: Option<Vector2<f64>>,
    static_lights: Vec<Vector2<f64>>,
    satellite_lights: Vec<Vector2<f64>>,
    dragging: bool,
    complete: bool,
    cfg: VisCfg,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(VisCfg::default())
    }
}

impl Scene {
    pub fn new(cfg: VisCfg) -> Self {
        Self {
            polygons: Vec::new(),
            primary_light: None,
            static_lights: Vec::new(),
            satellite_lights: Vec::new(),
            dragging: false,
            complete: true,
            cfg,
        }
    }

    // Read surface for the renderer boundary.

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[inline]
    pub fn primary_light(&self) -> Option<Vector2<f64>> {
        self.primary_light
    }

    #[inline]
    pub fn static_lights(&self) -> &[Vector2<f64>] {
        &self.static_lights
    }

    #[inline]
    pub fn satellite_lights(&self) -> &[Vector2<f64>] {
        &self.satellite_lights
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    pub fn cfg(&self) -> &VisCfg {
        &self.cfg
    }

    // Obstacle commands.

    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Append a vertex to the in-progress polygon. No-op with no polygons.
    pub fn add_vertex_to_last_polygon(&mut self, vertex: Vector2<f64>) {
        if let Some(last) = self.polygons.last_mut() {
            last.add_vertex(vertex);
        }
    }

    /// Rubber-band the in-progress edge. No-op with no polygons.
    pub fn update_last_polygon(&mut self, vertex: Vector2<f64>) {
        if let Some(last) = self.polygons.last_mut() {
            last.update_last_vertex(vertex);
        }
    }

    /// Close the in-progress polygon by re-appending its first vertex.
    /// A polygon with a single vertex is discarded; the border slot is
    /// never touched; calling with nothing in progress is a no-op.
    pub fn finish_polygon(&mut self) {
        if self.complete {
            return;
        }
        self.complete = true;
        if self.polygons.len() <= 1 {
            return;
        }
        match self.polygons.last().map(|p| p.vertices().len()) {
            None | Some(0) => {}
            Some(1) => {
                self.polygons.pop();
            }
            Some(_) => {
                if let Some(last) = self.polygons.last_mut() {
                    last.close();
                }
            }
        }
    }

    // Light commands.

    /// Move the primary light; recomputes the satellites iff the position
    /// actually changed.
    pub fn set_light_source(&mut self, light: Vector2<f64>) {
        if self.primary_light != Some(light) {
            self.primary_light = Some(light);
            self.setup_satellite_lights(light);
        }
    }

    pub fn add_static_light(&mut self, light: Vector2<f64>) {
        self.static_lights.push(light);
    }

    /// Drag the most recently placed static light. No-op with none placed.
    pub fn update_last_static_light(&mut self, light: Vector2<f64>) {
        if let Some(last) = self.static_lights.last_mut() {
            *last = light;
        }
    }

    fn setup_satellite_lights(&mut self, center: Vector2<f64>) {
        self.satellite_lights.clear();
        for i in 0..SATELLITE_COUNT {
            let angle = std::f64::consts::TAU * i as f64 / SATELLITE_COUNT as f64;
            let offset = Vector2::new(angle.cos(), angle.sin()) * SATELLITE_RADIUS;
            self.satellite_lights.push(center + offset);
        }
    }

    // Interaction flags.

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn set_complete(&mut self, complete: bool) {
        self.complete = complete;
    }

    // Viewport lifecycle.

    /// Rewrite the border polygon (slot 0) as the closed rectangle of
    /// `rect`. Establishing the very first border also centers the primary
    /// light in it.
    pub fn update_border(&mut self, rect: Rect) {
        let mut border = Polygon::from_vertices(vec![
            Vector2::new(rect.min.x, rect.min.y),
            Vector2::new(rect.max.x, rect.min.y),
            Vector2::new(rect.max.x, rect.max.y),
            Vector2::new(rect.min.x, rect.max.y),
        ]);
        border.close();
        if self.polygons.is_empty() {
            self.set_light_source(rect.center());
            self.polygons.push(border);
        } else {
            self.polygons[0] = border;
        }
    }

    /// Drop all obstacles and static lights, keep the border, recenter the
    /// primary light.
    pub fn reset(&mut self, rect: Rect) {
        self.polygons.truncate(1);
        self.static_lights.clear();
        self.complete = true;
        self.dragging = false;
        self.set_light_source(rect.center());
    }
}
