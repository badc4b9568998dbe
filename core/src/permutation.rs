// Ken Perlin's reference permutation (Improved Noise, 2002)
const REFERENCE: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

// Lattice hash table shared by every noise function.
// 256 values duplicated into 512 entries so that `perm[perm[x] + y + 1]`
// never needs a wrap.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; 512],
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::mirrored(&REFERENCE)
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

impl PermutationTable {
    // Fresh table shuffled from `seed`
    pub fn seeded(seed: i32) -> Self {
        let mut table = Self::default();
        table.reseed(seed);
        table
    }

    // Replace the whole table with a Fisher–Yates shuffle of 0..=255.
    // Same seed ⇒ same table, on every platform.
    pub fn reseed(&mut self, seed: i32) {
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);

        // xorshift64* seeded from the raw seed bits; the constant keeps the
        // state non-zero for every i32
        let mut x = (seed as u32 as u64) ^ 0x9E37_79B9_7F4A_7C15_u64;
        let mut rng = || {
            x ^= x >> 12;
            x ^= x << 25;
            x ^= x >> 27;
            x.wrapping_mul(0x2545_F491_4F6C_DD1D)
        };

        for i in (1..256).rev() {
            // uniform draw in [0, i]
            let j = (rng() % (i as u64 + 1)) as usize;
            p.swap(i, j);
        }

        *self = Self::mirrored(&p);
    }

    fn mirrored(p: &[u8; 256]) -> Self {
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = p[i & 255];
        }
        Self { perm }
    }

    // Lookup with any index below 512.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

#[cfg(test)]
mod tests {
    use super::PermutationTable;

    fn assert_permutation(table: &PermutationTable) {
        let values = table.as_slice();
        assert_eq!(values.len(), 512);
        for i in 0..256 {
            assert_eq!(values[i], values[i + 256], "mirror broken at {i}");
        }
        let mut seen = [false; 256];
        for &v in &values[..256] {
            assert!(!seen[v as usize], "duplicate value {v}");
            seen[v as usize] = true;
        }
    }

    #[test]
    fn default_is_reference_table() {
        let table = PermutationTable::default();
        assert_eq!(&table.as_slice()[..4], &[151, 160, 137, 91]);
        assert_eq!(table.get(255), 180);
        assert_eq!(table.get(256), 151);
        assert_permutation(&table);
    }

    #[test]
    fn reseed_keeps_permutation_invariant() {
        for seed in [0, 1, 42, -1, i32::MIN, i32::MAX, 12345] {
            assert_permutation(&PermutationTable::seeded(seed));
        }
    }

    #[test]
    fn reseed_is_deterministic() {
        let mut table = PermutationTable::default();
        table.reseed(42);
        let first = table.clone();
        table.reseed(7);
        table.reseed(42);
        assert_eq!(table, first);
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        let a = PermutationTable::seeded(42);
        let b = PermutationTable::seeded(43);
        assert_ne!(a, b);
        assert_ne!(a, PermutationTable::default());
    }
}
