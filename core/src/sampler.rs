use crate::config::{NoiseConfig, NoiseKind};
use crate::{PermutationTable, perlin2, simplex2};

// Turns a grid vertex (column, row) into an elevation.
// This is the only place where the noise kind and octave setup are chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightSampler {
    pub kind: NoiseKind,
    pub noise: NoiseConfig,
    pub cell_size: f32,  // world distance between neighbouring vertices
    pub max_height: f32, // elevation of a unit noise sample
}

impl HeightSampler {
    pub fn new(kind: NoiseKind, noise: NoiseConfig, cell_size: f32, max_height: f32) -> Self {
        Self {
            kind,
            noise,
            cell_size,
            max_height,
        }
    }

    // Noise in [0, 1] at a world-space point.
    // Simplex is remapped from [-1, 1]; it may overshoot slightly.
    pub fn normalized(&self, perm: &PermutationTable, world_x: f64, world_y: f64) -> f64 {
        match self.kind {
            NoiseKind::Perlin => perlin2(perm, world_x, world_y, &self.noise),
            NoiseKind::Simplex => (simplex2(perm, world_x, world_y, self.noise.scale) + 1.0) * 0.5,
        }
    }

    // Elevation of grid vertex (column, row), sampled origin-anchored
    pub fn sample(&self, perm: &PermutationTable, column: u32, row: u32) -> f32 {
        let world_x = column as f64 * self.cell_size as f64;
        let world_y = row as f64 * self.cell_size as f64;
        self.normalized(perm, world_x, world_y) as f32 * self.max_height
    }
}
