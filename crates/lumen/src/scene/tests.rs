use super::rand::{draw_scene, ReplayToken, SceneCfg};
use super::visibility::{dedupe_rays, light_area};
use super::*;
use crate::geom::{Ray, VisCfg};
use nalgebra::vector;

fn unit_border() -> Rect {
    Rect::new(vector![0.0, 0.0], vector![100.0, 100.0])
}

/// Scene with the 100×100 border and the light auto-centered at (50,50).
fn bordered_scene() -> Scene {
    let mut scene = Scene::default();
    scene.update_border(unit_border());
    scene
}

fn primary_area(scene: &Scene) -> Polygon {
    scene
        .light_areas()
        .into_iter()
        .find(|a| a.kind == LightKind::Primary)
        .expect("primary light set")
        .area
}

/// Draw an obstacle through the regular command path.
fn add_obstacle(scene: &mut Scene, outline: &[Vector2<f64>]) {
    scene.add_polygon(Polygon::default());
    scene.set_complete(false);
    for &v in outline {
        scene.add_vertex_to_last_polygon(v);
    }
    scene.finish_polygon();
}

#[test]
fn empty_scene_yields_no_light_areas() {
    assert!(Scene::default().light_areas().is_empty());
}

#[test]
fn light_without_polygons_yields_empty_areas() {
    let mut scene = Scene::default();
    scene.set_light_source(vector![10.0, 10.0]);
    let areas = scene.light_areas();
    // Primary plus six satellites, all with nothing to cast against.
    assert_eq!(areas.len(), 1 + SATELLITE_COUNT);
    assert!(areas.iter().all(|a| a.area.is_empty()));
}

#[test]
fn first_border_centers_the_light() {
    let scene = bordered_scene();
    assert_eq!(scene.primary_light(), Some(vector![50.0, 50.0]));
    assert_eq!(scene.polygons().len(), 1);
    assert_eq!(scene.polygons()[0].vertices().len(), 5);
    assert!(scene.polygons()[0].is_closed());
}

#[test]
fn later_border_updates_keep_the_light() {
    let mut scene = bordered_scene();
    scene.update_border(Rect::new(vector![0.0, 0.0], vector![200.0, 100.0]));
    assert_eq!(scene.primary_light(), Some(vector![50.0, 50.0]));
    assert_eq!(scene.polygons()[0].vertices()[2], vector![200.0, 100.0]);
}

#[test]
fn border_only_scene_reproduces_the_border() {
    // Border (0,0)-(100,0)-(100,100)-(0,100)-(0,0), light at (50,50):
    // the lit region is the whole rectangle.
    let scene = bordered_scene();
    let area = primary_area(&scene);
    let verts = area.vertices();
    assert_eq!(verts.len(), 5);
    assert_eq!(verts[0], verts[4]);
    for corner in [
        vector![0.0, 0.0],
        vector![100.0, 0.0],
        vector![100.0, 100.0],
        vector![0.0, 100.0],
    ] {
        let nearest = verts
            .iter()
            .map(|v| (v - corner).norm())
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 1e-3, "corner {corner:?} missing ({nearest})");
    }
}

#[test]
fn hanging_wall_casts_a_shadow() {
    // Wall hanging from the top edge; light below it.
    let mut scene = bordered_scene();
    scene.set_light_source(vector![50.0, 80.0]);
    add_obstacle(
        &mut scene,
        &[
            vector![40.0, 0.0],
            vector![60.0, 0.0],
            vector![60.0, 30.0],
            vector![40.0, 30.0],
        ],
    );
    let area = primary_area(&scene);

    // The wall's near corners sit on the outline.
    for corner in [vector![40.0, 30.0], vector![60.0, 30.0]] {
        let nearest = area
            .vertices()
            .iter()
            .map(|v| (v - corner).norm())
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 1e-3, "corner {corner:?} missing ({nearest})");
    }

    // The region directly behind the wall (y < 30, 40 < x < 60) is dark.
    for shadow in [
        vector![41.0, 29.0],
        vector![50.0, 15.0],
        vector![59.0, 1.0],
    ] {
        assert!(!area.contains(shadow), "{shadow:?} should be occluded");
    }

    // Sanity: points with a clear line to the light are lit.
    assert!(area.contains(vector![50.0, 50.0]));
    assert!(area.contains(vector![10.0, 90.0]));
}

#[test]
fn recomputation_is_idempotent() {
    let scene = draw_scene(SceneCfg::default(), ReplayToken { seed: 7, index: 0 });
    let first = scene.light_areas();
    let second = scene.light_areas();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.position, b.position);
        assert_eq!(a.area, b.area);
    }
}

#[test]
fn dedupe_collapses_near_duplicate_endpoints() {
    let cfg = VisCfg::default();
    let origin = vector![0.0, 0.0];
    let mut rays = vec![
        Ray::to_point(origin, vector![10.0, 0.0]),
        Ray::to_point(origin, vector![10.0, 1e-5]),
        Ray::to_point(origin, vector![0.0, 10.0]),
    ];
    dedupe_rays(&mut rays, &cfg);
    assert_eq!(rays.len(), 2);
    assert_eq!(rays[0].end(), vector![10.0, 0.0]);
    assert_eq!(rays[1].end(), vector![0.0, 10.0]);
}

#[test]
fn dedupe_compares_against_previous_kept_ray() {
    // A chain of endpoints each 6e-5 apart: every other one survives
    // because the gap to the last *kept* endpoint governs, not the gap
    // to the immediate predecessor.
    let cfg = VisCfg::default();
    let origin = vector![-100.0, 0.0];
    let mut rays: Vec<Ray> = (0..4)
        .map(|i| Ray::to_point(origin, vector![0.0, i as f64 * 6e-5]))
        .collect();
    dedupe_rays(&mut rays, &cfg);
    assert_eq!(rays.len(), 2);
    assert_eq!(rays[0].end(), vector![0.0, 0.0]);
    assert_eq!(rays[1].end(), vector![0.0, 1.2e-4]);
}

#[test]
fn satellites_orbit_the_primary_light() {
    let mut scene = Scene::default();
    scene.set_light_source(vector![10.0, 20.0]);
    assert_eq!(scene.satellite_lights().len(), SATELLITE_COUNT);
    for sat in scene.satellite_lights() {
        let d = (sat - vector![10.0, 20.0]).norm();
        assert!((d - SATELLITE_RADIUS).abs() < 1e-9);
    }
    // Satellites follow the light.
    scene.set_light_source(vector![-5.0, 3.0]);
    for sat in scene.satellite_lights() {
        let d = (sat - vector![-5.0, 3.0]).norm();
        assert!((d - SATELLITE_RADIUS).abs() < 1e-9);
    }
}

#[test]
fn finish_polygon_discards_single_vertex() {
    let mut scene = bordered_scene();
    scene.add_polygon(Polygon::default());
    scene.set_complete(false);
    scene.add_vertex_to_last_polygon(vector![10.0, 10.0]);
    scene.finish_polygon();
    assert_eq!(scene.polygons().len(), 1);
    assert!(scene.is_complete());
}

#[test]
fn finish_polygon_closes_the_loop() {
    let mut scene = bordered_scene();
    add_obstacle(
        &mut scene,
        &[vector![10.0, 10.0], vector![20.0, 10.0], vector![20.0, 20.0]],
    );
    let obstacle = &scene.polygons()[1];
    assert!(obstacle.is_closed());
    assert_eq!(obstacle.vertices().len(), 4);
    assert_eq!(obstacle.vertices()[0], obstacle.vertices()[3]);
}

#[test]
fn finish_polygon_is_idempotent_when_complete() {
    let mut scene = bordered_scene();
    add_obstacle(
        &mut scene,
        &[vector![10.0, 10.0], vector![20.0, 10.0], vector![20.0, 20.0]],
    );
    let before = scene.polygons().to_vec();
    scene.finish_polygon();
    assert_eq!(scene.polygons(), &before[..]);
}

#[test]
fn static_light_commands() {
    let mut scene = Scene::default();
    scene.update_last_static_light(vector![1.0, 1.0]); // no-op, none placed
    assert!(scene.static_lights().is_empty());
    scene.add_static_light(vector![5.0, 5.0]);
    scene.update_last_static_light(vector![6.0, 6.0]);
    assert_eq!(scene.static_lights(), &[vector![6.0, 6.0]]);
}

#[test]
fn result_order_is_static_primary_satellites() {
    let mut scene = bordered_scene();
    scene.add_static_light(vector![20.0, 20.0]);
    scene.add_static_light(vector![80.0, 20.0]);
    let kinds: Vec<LightKind> = scene.light_areas().iter().map(|a| a.kind).collect();
    let mut expected = vec![LightKind::Static, LightKind::Static, LightKind::Primary];
    expected.extend(std::iter::repeat(LightKind::Satellite).take(SATELLITE_COUNT));
    assert_eq!(kinds, expected);
}

#[test]
fn reset_keeps_only_the_border() {
    let mut scene = bordered_scene();
    add_obstacle(
        &mut scene,
        &[vector![10.0, 10.0], vector![20.0, 10.0], vector![20.0, 20.0]],
    );
    scene.add_static_light(vector![70.0, 70.0]);
    scene.set_light_source(vector![30.0, 30.0]);
    scene.reset(unit_border());
    assert_eq!(scene.polygons().len(), 1);
    assert!(scene.static_lights().is_empty());
    assert_eq!(scene.primary_light(), Some(vector![50.0, 50.0]));
    assert!(scene.is_complete());
    assert!(!scene.is_dragging());
}

#[test]
fn static_lights_see_around_obstacles_independently() {
    let mut scene = bordered_scene();
    add_obstacle(
        &mut scene,
        &[
            vector![45.0, 45.0],
            vector![55.0, 45.0],
            vector![55.0, 55.0],
            vector![45.0, 55.0],
        ],
    );
    scene.add_static_light(vector![10.0, 50.0]);
    let areas = scene.light_areas();
    let static_area = &areas[0];
    assert_eq!(static_area.kind, LightKind::Static);
    // The block hides the far side from the static light but not the
    // region between light and block.
    assert!(static_area.area.contains(vector![30.0, 50.0]));
    assert!(!static_area.area.contains(vector![70.0, 50.0]));
}

#[test]
fn draw_scene_is_reproducible() {
    let cfg = SceneCfg::default();
    let tok = ReplayToken { seed: 42, index: 3 };
    let a = draw_scene(cfg, tok);
    let b = draw_scene(cfg, tok);
    assert_eq!(a.polygons(), b.polygons());
    assert_eq!(a.polygons().len(), 1 + cfg.obstacle_count);
    for obstacle in &a.polygons()[1..] {
        assert!(obstacle.is_closed());
        assert!(obstacle.vertices().len() >= 4);
    }
}

#[test]
fn light_area_matches_pipeline_composition() {
    let scene = bordered_scene();
    let direct = light_area(
        scene.polygons(),
        vector![50.0, 50.0],
        scene.cfg(),
    );
    assert_eq!(direct, primary_area(&scene));
}
