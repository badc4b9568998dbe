use std::time::Instant;

use tracing::{debug, info};

use crate::PermutationTable;
use crate::mesh::{GridOrigin, MeshBuffers, generate_grid};
use crate::settings::TerrainSettings;
use crate::utils::height_to_gray;

// Builds terrain meshes from a settings snapshot.
// Owns the permutation table it samples, so a build can never race a reseed.
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    settings: TerrainSettings,
    perm: PermutationTable,
}

impl TerrainGenerator {
    pub fn new(settings: TerrainSettings) -> Self {
        Self {
            settings,
            perm: PermutationTable::seeded(settings.seed),
        }
    }

    pub fn settings(&self) -> &TerrainSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: TerrainSettings) {
        self.settings = settings;
    }

    pub fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    // Elevation of one vertex under the current table
    pub fn sample_height(&self, column: u32, row: u32) -> f32 {
        self.settings.sampler().sample(&self.perm, column, row)
    }

    // Full rebuild: reseed, sample every vertex, triangulate, smooth normals,
    // then grayscale colors. Nothing from a previous build is reused.
    pub fn generate(&mut self) -> MeshBuffers {
        let start = Instant::now();
        let settings = self.settings;
        debug!(
            seed = settings.seed,
            columns = settings.columns,
            rows = settings.rows,
            kind = ?settings.noise_kind,
            "generating terrain"
        );

        self.perm.reseed(settings.seed);

        let sampler = settings.sampler();
        let perm = &self.perm;
        let mut mesh = generate_grid(
            &settings.grid(),
            GridOrigin::Corner,
            |column, row| sampler.sample(perm, column, row),
            true,
        );

        mesh.colors = mesh
            .positions
            .iter()
            .map(|p| height_to_gray(p.z, settings.max_height))
            .collect();

        info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "terrain generated"
        );
        mesh
    }
}
