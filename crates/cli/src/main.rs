use anyhow::Result;
use clap::{Parser, Subcommand};
use lumen::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod model;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Visibility-polygon driver: compute, generate, query scenes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one visibility polygon per light and write them as JSON
    Compute {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Generate a reproducible random scene file
    Gen {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 5)]
        obstacles: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Report, per light, whether a point is lit
    Query {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Compute { input, out } => compute(&input, &out),
        Action::Gen {
            seed,
            obstacles,
            out,
        } => gen(seed, obstacles, &out),
        Action::Query { input, x, y } => query(&input, x, y),
    }
}

fn compute(input: &Path, out: &Path) -> Result<()> {
    let scene = model::load_scene(input)?.to_scene();
    let areas = scene.light_areas();
    tracing::info!(
        polygons = scene.polygons().len(),
        lights = areas.len(),
        "computed visibility"
    );
    model::write_json(out, &model::AreasFile::from_areas(&areas))
}

fn gen(seed: u64, obstacles: usize, out: &Path) -> Result<()> {
    let cfg = SceneCfg {
        obstacle_count: obstacles,
        ..SceneCfg::default()
    };
    let scene = draw_scene(cfg, ReplayToken { seed, index: 0 });
    tracing::info!(seed, obstacles, "generated scene");
    model::write_json(out, &model::SceneFile::from_scene(&scene))
}

fn query(input: &Path, x: f64, y: f64) -> Result<()> {
    let scene = model::load_scene(input)?.to_scene();
    let point = Vec2::new(x, y);
    for area in scene.light_areas() {
        let lit = area.area.contains(point);
        println!(
            "{} ({:.1}, {:.1}): {}",
            model::kind_label(area.kind),
            area.position.x,
            area.position.y,
            if lit { "lit" } else { "dark" }
        );
    }
    Ok(())
}
