use crate::PermutationTable;
use crate::config::effective_scale;
use crate::perlin2::{fade, lerp};

// This is similar to perlin2 but extended to 3D, single octave

// Gradient function for 3D: the low 4 bits pick one of the 12 cube-edge
// directions (16 buckets, four repeated), then bits 0 and 1 flip the signs
#[inline]
pub fn grad3(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let sign_u = if (h & 1) == 0 { u } else { -u };
    let sign_v = if (h & 2) == 0 { v } else { -v };
    sign_u + sign_v
}

// Perlin noise at (x, y, z), remapped into [0, 1]
pub fn perlin3(perm: &PermutationTable, x: f64, y: f64, z: f64, scale: f64) -> f64 {
    let scale = effective_scale(scale);
    let (x, y, z) = (x / scale, y / scale, z / scale);

    // Find unit cube that contains point
    let xi = (x.floor() as i32 & 255) as usize;
    let yi = (y.floor() as i32 & 255) as usize;
    let zi = (z.floor() as i32 & 255) as usize;
    // Relative coordinates within cube
    let xf = x - x.floor();
    let yf = y - y.floor();
    let zf = z - z.floor();
    let u = fade(xf);
    let v = fade(yf);
    let w = fade(zf);

    // Hash corners of the cube
    let a = perm.get(xi) + yi;
    let aa = perm.get(a) + zi;
    let ab = perm.get(a + 1) + zi;
    let b = perm.get(xi + 1) + yi;
    let ba = perm.get(b) + zi;
    let bb = perm.get(b + 1) + zi;

    // Near face (z = zi)
    let x1 = lerp(
        grad3(perm.get(aa), xf, yf, zf),
        grad3(perm.get(ba), xf - 1.0, yf, zf),
        u,
    );
    let x2 = lerp(
        grad3(perm.get(ab), xf, yf - 1.0, zf),
        grad3(perm.get(bb), xf - 1.0, yf - 1.0, zf),
        u,
    );
    let y1 = lerp(x1, x2, v);

    // Far face (z = zi + 1)
    let x3 = lerp(
        grad3(perm.get(aa + 1), xf, yf, zf - 1.0),
        grad3(perm.get(ba + 1), xf - 1.0, yf, zf - 1.0),
        u,
    );
    let x4 = lerp(
        grad3(perm.get(ab + 1), xf, yf - 1.0, zf - 1.0),
        grad3(perm.get(bb + 1), xf - 1.0, yf - 1.0, zf - 1.0),
        u,
    );
    let y2 = lerp(x3, x4, v);

    ((lerp(y1, y2, w) + 1.0) * 0.5).clamp(0.0, 1.0)
}
