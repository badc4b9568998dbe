use serde::{Deserialize, Serialize};

// Stand-in for a non-positive scale so sampling never divides by zero
pub const MIN_SCALE: f64 = 0.0001;

// Which noise function drives a height field
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    #[default]
    Perlin,
    Simplex,
}

// Shape parameters of one fractal noise sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub scale: f64,       // world units per lattice cell at the first octave
    pub octaves: u32,     // number of octaves to sum, at least 1
    pub persistence: f64, // amplitude multiplier per octave
    pub lacunarity: f64,  // frequency multiplier per octave
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl NoiseConfig {
    pub fn new(scale: f64, octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        Self {
            scale,
            octaves,
            persistence,
            lacunarity,
        }
    }

    // Single octave at the given scale
    pub fn single(scale: f64) -> Self {
        Self {
            scale,
            octaves: 1,
            ..Self::default()
        }
    }

    #[inline]
    pub fn effective_scale(&self) -> f64 {
        effective_scale(self.scale)
    }
}

#[inline]
pub(crate) fn effective_scale(scale: f64) -> f64 {
    if scale <= 0.0 { MIN_SCALE } else { scale }
}
