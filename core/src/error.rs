use thiserror::Error;

// A settings value outside the range the generators accept
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("grid must have 1..=500 quads per axis, got {columns}×{rows}")]
    GridSize { columns: u32, rows: u32 },

    #[error("cell size must be positive and finite, got {0}")]
    CellSize(f32),

    #[error("max height must be within 0..=10000, got {0}")]
    MaxHeight(f32),

    #[error("octaves must be within 1..=8, got {0}")]
    Octaves(u32),

    #[error("persistence must be within 0..=1, got {0}")]
    Persistence(f64),

    #[error("lacunarity must be within 1..=4, got {0}")]
    Lacunarity(f64),

    #[error("noise scale must be positive and finite, got {0}")]
    NoiseScale(f64),

    #[error("water extent must be positive and finite, got {width}×{length}")]
    WaterExtent { width: f32, length: f32 },

    #[error("water subdivisions must be within 1..=100, got {0}")]
    Subdivisions(u32),

    #[error("wave {name} must be non-negative and finite, got {value}")]
    Wave { name: &'static str, value: f32 },
}

// A mesh whose parallel buffers disagree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("{channel} has {found} entries, expected {expected}")]
    ChannelLength {
        channel: &'static str,
        found: usize,
        expected: usize,
    },

    #[error("triangle {triangle} references vertex {index}, mesh has {vertex_count}")]
    IndexOutOfBounds {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}
