use image::{GrayImage, Luma};
use std::path::Path;
use terraforge_core::{NoiseConfig, PermutationTable, perlin2, perlin3, simplex2};

// Samples `f` over a size×size grid and writes it as an 8-bit grayscale PNG.
// `f` must return values in [0, 1].
fn save_noise<F>(size: u32, filename: &str, f: F) -> image::ImageResult<()>
where
    F: Fn(f64, f64) -> f64,
{
    let mut img = GrayImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let v = f(x as f64, y as f64).clamp(0.0, 1.0);
            img.put_pixel(x, y, Luma([(v * 255.0).round() as u8]));
        }
    }
    img.save(Path::new(filename))?;
    println!("Saved {}", filename);
    Ok(())
}

fn main() -> image::ImageResult<()> {
    let size = 256;
    let perm = PermutationTable::seeded(42);

    // 2D Perlin, four octaves
    let config = NoiseConfig::new(64.0, 4, 0.5, 2.0);
    save_noise(size, "perlin2d.png", |x, y| perlin2(&perm, x, y, &config))?;

    // 2D Simplex, remapped from [-1, 1]
    save_noise(size, "simplex2d.png", |x, y| {
        (simplex2(&perm, x, y, 32.0) + 1.0) * 0.5
    })?;

    // 3D Perlin slice halfway through the volume
    let z = size as f64 / 2.0;
    save_noise(size, "perlin3d_slice.png", |x, y| perlin3(&perm, x, y, z, 32.0))?;

    Ok(())
}
