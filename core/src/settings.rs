use serde::{Deserialize, Serialize};

use crate::config::{NoiseConfig, NoiseKind};
use crate::error::SettingsError;
use crate::mesh::GridDescriptor;
use crate::sampler::HeightSampler;

const MAX_GRID: u32 = 500;
const MAX_TERRAIN_HEIGHT: f32 = 10_000.0;
const MAX_SUBDIVISIONS: u32 = 100;

/// Everything needed to rebuild a terrain mesh bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Quads along x.
    pub columns: u32,
    /// Quads along y.
    pub rows: u32,
    /// World size of one quad.
    pub cell_size: f32,
    /// Elevation of a noise sample of 1.0.
    pub max_height: f32,
    pub noise_scale: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
    pub seed: i32,
    pub noise_kind: NoiseKind,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            columns: 100,
            rows: 100,
            cell_size: 100.0,
            max_height: 2000.0,
            noise_scale: 100.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: 12345,
            noise_kind: NoiseKind::Perlin,
        }
    }
}

impl TerrainSettings {
    pub fn noise_config(&self) -> NoiseConfig {
        NoiseConfig::new(
            self.noise_scale,
            self.octaves,
            self.persistence,
            self.lacunarity,
        )
    }

    pub fn grid(&self) -> GridDescriptor {
        GridDescriptor::square(self.columns, self.rows, self.cell_size)
    }

    pub fn sampler(&self) -> HeightSampler {
        HeightSampler::new(
            self.noise_kind,
            self.noise_config(),
            self.cell_size,
            self.max_height,
        )
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=MAX_GRID).contains(&self.columns) || !(1..=MAX_GRID).contains(&self.rows) {
            return Err(SettingsError::GridSize {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(SettingsError::CellSize(self.cell_size));
        }
        if !(0.0..=MAX_TERRAIN_HEIGHT).contains(&self.max_height) {
            return Err(SettingsError::MaxHeight(self.max_height));
        }
        if !(self.noise_scale.is_finite() && self.noise_scale > 0.0) {
            return Err(SettingsError::NoiseScale(self.noise_scale));
        }
        if !(1..=8).contains(&self.octaves) {
            return Err(SettingsError::Octaves(self.octaves));
        }
        if !(0.0..=1.0).contains(&self.persistence) {
            return Err(SettingsError::Persistence(self.persistence));
        }
        if !(1.0..=4.0).contains(&self.lacunarity) {
            return Err(SettingsError::Lacunarity(self.lacunarity));
        }
        Ok(())
    }
}

/// A flat water plane centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterSettings {
    pub width: f32,
    pub length: f32,
    /// Constant elevation of the plane.
    pub level: f32,
    /// Quads per side.
    pub subdivisions: u32,
    pub enable_waves: bool,
    pub wave_speed: f32,
    pub wave_height: f32,
}

impl Default for WaterSettings {
    fn default() -> Self {
        Self {
            width: 10_000.0,
            length: 10_000.0,
            level: 0.0,
            subdivisions: 20,
            enable_waves: true,
            wave_speed: 1.0,
            wave_height: 50.0,
        }
    }
}

impl WaterSettings {
    pub fn grid(&self) -> GridDescriptor {
        let n = self.subdivisions as f32;
        GridDescriptor::new(
            self.subdivisions,
            self.subdivisions,
            self.width / n,
            self.length / n,
        )
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.length) {
            return Err(SettingsError::WaterExtent {
                width: self.width,
                length: self.length,
            });
        }
        if !(1..=MAX_SUBDIVISIONS).contains(&self.subdivisions) {
            return Err(SettingsError::Subdivisions(self.subdivisions));
        }
        for (name, value) in [("speed", self.wave_speed), ("height", self.wave_height)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::Wave { name, value });
            }
        }
        Ok(())
    }
}
