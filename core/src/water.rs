use tracing::debug;

use crate::mesh::{GridOrigin, MeshBuffers, generate_grid};
use crate::settings::WaterSettings;

/// Scalar inputs of the animated water shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveShading {
    pub time: f32,
    pub wave_height: f32,
    pub wave_speed: f32,
}

/// A static water plane plus the clock that drives its ripple shading.
///
/// The geometry never changes after [`WaterSurface::build_mesh`]; animation
/// lives entirely in [`WaveShading`], advanced by whichever scheduler the
/// host uses.
#[derive(Debug, Clone)]
pub struct WaterSurface {
    settings: WaterSettings,
    elapsed: f32,
}

impl WaterSurface {
    pub fn new(settings: WaterSettings) -> Self {
        Self {
            settings,
            elapsed: 0.0,
        }
    }

    pub fn settings(&self) -> &WaterSettings {
        &self.settings
    }

    /// Flat centered grid at the water level. Normals stay up and colors
    /// white; no normal recomputation happens.
    pub fn build_mesh(&self) -> MeshBuffers {
        let level = self.settings.level;
        let mesh = generate_grid(&self.settings.grid(), GridOrigin::Centered, |_, _| level, false);
        debug!(
            subdivisions = self.settings.subdivisions,
            vertices = mesh.vertex_count(),
            "water mesh built"
        );
        mesh
    }

    /// Moves the shading clock forward by `delta_seconds`, scaled by the wave
    /// speed. Does nothing while waves are disabled.
    pub fn advance(&mut self, delta_seconds: f32) {
        if self.settings.enable_waves {
            self.elapsed += delta_seconds * self.settings.wave_speed;
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn shading(&self) -> WaveShading {
        WaveShading {
            time: self.elapsed,
            wave_height: self.settings.wave_height,
            wave_speed: self.settings.wave_speed,
        }
    }
}
