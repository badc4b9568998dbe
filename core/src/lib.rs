// core holds the noise functions and the grid mesh builder
pub mod config;
pub mod error;
pub mod mesh;
pub mod perlin2;
pub mod perlin3;
pub mod permutation;
pub mod sampler;
pub mod settings;
pub mod simplex2;
pub mod terrain;
pub mod utils;
pub mod water;

pub use config::{NoiseConfig, NoiseKind};
pub use error::{MeshError, SettingsError};
pub use mesh::{
    GridDescriptor, GridOrigin, MeshBuffers, Vertex, build_grid, build_triangles, generate_grid,
    recompute_smooth_normals,
};
pub use perlin2::perlin2;
pub use perlin3::perlin3;
pub use permutation::PermutationTable;
pub use sampler::HeightSampler;
pub use settings::{TerrainSettings, WaterSettings};
pub use simplex2::simplex2;
pub use terrain::TerrainGenerator;
pub use utils::height_to_gray;
pub use water::{WaterSurface, WaveShading};
