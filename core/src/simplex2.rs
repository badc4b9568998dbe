use crate::PermutationTable;
use crate::config::effective_scale;

// Approximate value of sqrt(3)
const SQRT_3: f64 = 1.732_050_807_568_877_293_5;
// Skewing/Unskewing factors for 2D simplex
const F2: f64 = 0.5 * (SQRT_3 - 1.0); // squashes the square grid into equilateral triangles
const G2: f64 = (3.0 - SQRT_3) / 6.0; // reverses the skewing

// Simplex gradient: the low 3 bits pick the axis and the signs, the
// secondary axis carries twice the weight
#[inline]
pub fn simplex_grad(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 7;
    let u = if h < 4 { x } else { y };
    let v = if h < 4 { y } else { x };
    let sign_u = if (h & 1) == 0 { u } else { -u };
    let sign_v = if (h & 2) == 0 { 2.0 * v } else { -2.0 * v };
    sign_u + sign_v
}

// Attenuated contribution of one simplex corner at offset (x, y)
#[inline]
fn corner(hash: usize, x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y; // Circular radius of influence
    if t < 0.0 {
        0.0
    } else {
        let t_sq = t * t;
        t_sq * t_sq * simplex_grad(hash, x, y)
    }
}

// 2D Simplex noise at (x, y), approximately in [−1, 1]
pub fn simplex2(perm: &PermutationTable, x: f64, y: f64, scale: f64) -> f64 {
    let scale = effective_scale(scale);
    let (xin, yin) = (x / scale, y / scale);

    // Skew input space to determine simplex cell
    let s = (xin + yin) * F2;
    let i = (xin + s).floor() as i32;
    let j = (yin + s).floor() as i32;

    // Unskew back to get the offset from the cell origin
    // Summed in f64: the cell indices can sit near i32::MAX
    let t = (i as f64 + j as f64) * G2;
    let x0 = xin - (i as f64 - t);
    let y0 = yin - (j as f64 - t);

    // Lower-right or upper-left triangle of the cell
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    // Offsets for remaining corners
    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    // Hash the three simplex corners
    let ii = (i & 255) as usize;
    let jj = (j & 255) as usize;
    let gi0 = perm.get(ii + perm.get(jj));
    let gi1 = perm.get(ii + i1 + perm.get(jj + j1));
    let gi2 = perm.get(ii + 1 + perm.get(jj + 1));

    // The sum is scaled to return roughly [-1, 1]
    70.0 * (corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2))
}

#[cfg(test)]
mod tests {
    use super::{simplex_grad, simplex2};
    use crate::PermutationTable;

    #[test]
    fn simplex2_origin_is_zero() {
        let perm = PermutationTable::default();
        assert_eq!(simplex2(&perm, 0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn simplex2_determinism() {
        let a = simplex2(&PermutationTable::seeded(9999), 1.23, 4.56, 0.5);
        let b = simplex2(&PermutationTable::seeded(9999), 1.23, 4.56, 0.5);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn simplex2_range() {
        let perm = PermutationTable::seeded(0);
        let mut seen_nonzero = false;
        for i in 0..2000 {
            let t = i as f64;
            let v = simplex2(&perm, t * 0.137 - 40.0, t * 0.291 + 3.0, 1.0);
            assert!(v.abs() <= 2.0, "{v} far outside [-1, 1]");
            seen_nonzero |= v.abs() > 1e-3;
        }
        assert!(seen_nonzero);
    }

    #[test]
    fn simplex2_scale_stretches_pattern() {
        let perm = PermutationTable::default();
        let a = simplex2(&perm, 3.3, 1.7, 1.0);
        let b = simplex2(&perm, 33.0, 17.0, 10.0);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn simplex2_is_defined_far_from_origin() {
        let perm = PermutationTable::default();
        for &(x, y, scale) in &[
            (1.0e10, 1.0e10, 1.0),
            (-1.0e10, -1.0e10, 1.0),
            (150_000.0, 150_000.0, 0.0),
            (-150_000.0, 214_748.0, -3.0),
        ] {
            let v = simplex2(&perm, x, y, scale);
            assert!(v.is_finite() && v.abs() <= 2.0, "{v} at ({x}, {y}) scale {scale}");
        }
    }

    #[test]
    fn simplex_grad_weights_secondary_axis() {
        assert_eq!(simplex_grad(0, 1.0, 1.0), 3.0);
        assert_eq!(simplex_grad(3, 1.0, 1.0), -3.0);
        assert_eq!(simplex_grad(4, 1.0, 0.5), 2.5);
        assert_eq!(simplex_grad(8, 1.0, 1.0), simplex_grad(0, 1.0, 1.0));
    }
}
