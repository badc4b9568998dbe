use image::{GrayImage, Luma};
use std::path::Path;
use terraforge_core::{TerrainGenerator, TerrainSettings};

fn main() -> image::ImageResult<()> {
    let settings = TerrainSettings {
        columns: 256,
        rows: 256,
        cell_size: 10.0,
        max_height: 1000.0,
        noise_scale: 600.0,
        octaves: 6,
        seed: 2025,
        ..TerrainSettings::default()
    };
    let mesh = TerrainGenerator::new(settings).generate();

    let width = settings.columns + 1;
    let height = settings.rows + 1;
    let mut img = GrayImage::new(width, height);
    for (i, (color, n)) in mesh.colors.iter().zip(&mesh.normals).enumerate() {
        let x = i as u32 % width;
        let y = height - 1 - i as u32 / width;
        // Vertex tint darkened on steep slopes (sun overhead)
        let shade = n.z.clamp(0.0, 1.0) * 0.6 + 0.4;
        img.put_pixel(x, y, Luma([(color[0] as f32 * shade) as u8]));
    }

    let path = Path::new("terrain_final.png");
    img.save(path)?;
    println!("Saved final terrain image to {:?}", path);
    Ok(())
}
