mod cli;
mod config;
mod preview;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use terraforge_core::{
    NoiseConfig, NoiseKind, PermutationTable, TerrainGenerator, WaterSurface, perlin2, perlin3,
    simplex2,
};
use terraforge_storage::TerrainStore;
use terraforge_storage::models::TerrainDoc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command, SampleKind};
use crate::config::{StorageConfig, WorldConfig};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// Single-threaded runtime for the one-shot database calls
fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")?;
    Ok(rt.block_on(future))
}

async fn open_store(storage: &StorageConfig) -> Result<TerrainStore> {
    TerrainStore::init(&storage.uri, &storage.database, &storage.collection)
        .await
        .with_context(|| format!("failed to open terrain store at {}", storage.uri))
}

fn run_terrain(
    world: &WorldConfig,
    seed: Option<i32>,
    simplex: bool,
    preview_path: Option<&std::path::Path>,
    save: Option<&str>,
) -> Result<()> {
    let mut settings = world.terrain;
    if let Some(seed) = seed {
        settings.seed = seed;
    }
    if simplex {
        settings.noise_kind = NoiseKind::Simplex;
    }

    let start = Instant::now();
    let mesh = TerrainGenerator::new(settings).generate();
    info!(
        seed = settings.seed,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "terrain ready"
    );

    if let Some(path) = preview_path {
        preview::save(&mesh, &settings, path)?;
    }

    if let Some(name) = save {
        let doc = TerrainDoc::from_mesh(name, &settings, &mesh);
        block_on(async {
            let store = open_store(&world.storage).await?;
            store.create(doc).await.context("failed to store terrain")
        })??;
        info!(name, "terrain saved");
    }
    Ok(())
}

fn run_water(world: &WorldConfig, seconds: f32, step: f32) -> Result<()> {
    anyhow::ensure!(step > 0.0, "time step must be positive, got {step}");

    let mut water = WaterSurface::new(world.water);
    let mesh = water.build_mesh();
    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        level = world.water.level,
        "water plane ready"
    );
    if !world.water.enable_waves {
        warn!("waves are disabled, the shading clock will not move");
    }

    let steps = (seconds.max(0.0) / step).ceil() as u32;
    for i in 1..=steps {
        let t = (i as f32 * step).min(seconds);
        let dt = t - ((i - 1) as f32 * step).min(seconds);
        water.advance(dt);
        let shading = water.shading();
        info!(
            elapsed = t,
            time = shading.time,
            wave_height = shading.wave_height,
            wave_speed = shading.wave_speed,
            "wave shading"
        );
    }
    Ok(())
}

fn run_load(world: &WorldConfig, name: &str, preview_path: &std::path::Path) -> Result<()> {
    let doc = block_on(async {
        let store = open_store(&world.storage).await?;
        store
            .read_by_name(name)
            .await
            .context("failed to read terrain")
    })??;
    let Some(doc) = doc else {
        anyhow::bail!("no stored terrain named {name:?}");
    };
    info!(name, seed = doc.seed, heights = doc.heights.len(), "terrain loaded");

    let mesh = preview::mesh_from_doc(&doc)?;
    preview::save(&mesh, &doc.settings, preview_path)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let world = WorldConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Terrain {
            seed,
            simplex,
            preview,
            save,
        } => run_terrain(&world, seed, simplex, preview.as_deref(), save.as_deref()),
        Command::Water { seconds, step } => run_water(&world, seconds, step),
        Command::Sample {
            kind,
            x,
            y,
            z,
            scale,
            octaves,
            persistence,
            lacunarity,
            seed,
        } => {
            let perm = seed.map(PermutationTable::seeded).unwrap_or_default();
            let value = match kind {
                SampleKind::Perlin2 => {
                    anyhow::ensure!(octaves >= 1, "octaves must be at least 1");
                    let config = NoiseConfig::new(scale, octaves, persistence, lacunarity);
                    perlin2(&perm, x, y, &config)
                }
                SampleKind::Perlin3 => perlin3(&perm, x, y, z, scale),
                SampleKind::Simplex2 => simplex2(&perm, x, y, scale),
            };
            println!("{value}");
            Ok(())
        }
        Command::Load { name, preview } => run_load(&world, &name, &preview),
    }
}
