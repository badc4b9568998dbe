use crate::PermutationTable;
use crate::config::NoiseConfig;

// Fade function as defined by Ken Perlin: 6t^5 − 15t^4 + 10t^3
// Its first and second derivatives are zero at t=0 and t=1, which hides
// the lattice grid in the interpolated result
#[inline]
pub(crate) fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

// Linear interpolation
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

// 2D gradient: bit 1 picks which axis is `u`, bits 0 and 1 flip the signs.
// Gives the dot product of the corner gradient with the offset (x, y)
#[inline]
pub fn grad2(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 3;
    let u = if h < 2 { x } else { y };
    let v = if h < 2 { y } else { x };
    let sign_u = if (h & 1) == 0 { u } else { -u };
    let sign_v = if (h & 2) == 0 { v } else { -v };
    sign_u + sign_v
}

// Raw single-octave Perlin noise at (x, y), roughly in [−1, 1]
fn noise(perm: &PermutationTable, x: f64, y: f64) -> f64 {
    // Find unit square that contains point
    let xi = (x.floor() as i32 & 255) as usize;
    let yi = (y.floor() as i32 & 255) as usize;
    // Relative x/y within the square
    let xf = x - x.floor();
    let yf = y - y.floor();
    let u = fade(xf);
    let v = fade(yf);

    // Hash the four corners through two nested lookups
    let a = perm.get(xi);
    let b = perm.get(xi + 1);
    let aa = perm.get(a + yi);
    let ab = perm.get(a + yi + 1);
    let ba = perm.get(b + yi);
    let bb = perm.get(b + yi + 1);

    let x1 = lerp(grad2(aa, xf, yf), grad2(ba, xf - 1.0, yf), u);
    let x2 = lerp(grad2(ab, xf, yf - 1.0), grad2(bb, xf - 1.0, yf - 1.0), u);
    lerp(x1, x2, v)
}

// Multi-octave Perlin noise at (x, y), remapped into [0, 1].
// Each octave samples at `frequency / scale`; amplitude decays by
// `persistence` and frequency grows by `lacunarity`
pub fn perlin2(perm: &PermutationTable, x: f64, y: f64, config: &NoiseConfig) -> f64 {
    debug_assert!(config.octaves >= 1, "perlin2 needs at least one octave");
    let scale = config.effective_scale();
    let mut amplitude = 1.0; // Weight of the current octave
    let mut freq = 1.0;
    let mut total = 0.0;
    let mut max_amp = 0.0; // Sum of weights, to normalize the result

    for _ in 0..config.octaves {
        total += noise(perm, x / scale * freq, y / scale * freq) * amplitude;
        max_amp += amplitude;
        amplitude *= config.persistence;
        freq *= config.lacunarity;
    }

    ((total / max_amp + 1.0) * 0.5).clamp(0.0, 1.0)
}
