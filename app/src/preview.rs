use std::path::Path;

use anyhow::{Context, Result, ensure};
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use terraforge_core::{GridOrigin, MeshBuffers, TerrainSettings, generate_grid};
use terraforge_storage::models::TerrainDoc;

// Light from the north-east, 45° above the horizon
fn light_direction() -> [f32; 3] {
    let azimuth = std::f32::consts::FRAC_PI_4;
    let altitude = std::f32::consts::FRAC_PI_4;
    let (sin_alt, cos_alt) = altitude.sin_cos();
    [azimuth.cos() * cos_alt, azimuth.sin() * cos_alt, sin_alt]
}

// One pixel per vertex, colored by elevation and lit by the vertex normal.
// Row 0 of the grid ends up at the bottom of the image
pub fn render(mesh: &MeshBuffers, settings: &TerrainSettings) -> Result<RgbImage> {
    let width = settings.columns + 1;
    let height = settings.rows + 1;
    ensure!(
        mesh.vertex_count() == (width * height) as usize,
        "mesh has {} vertices, expected {}×{}",
        mesh.vertex_count(),
        width,
        height
    );

    // deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)),
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)),
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)),
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)),
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
    ]);
    let [lx, ly, lz] = light_direction();
    let max_height = settings.max_height.max(f32::EPSILON);

    let mut img = RgbImage::new(width, height);
    for (i, (p, n)) in mesh.positions.iter().zip(&mesh.normals).enumerate() {
        let x = i as u32 % width;
        let y = height - 1 - i as u32 / width;
        let norm = (p.z / max_height).clamp(0.0, 1.0);
        let col: LinSrgb = gradient.get(norm);
        let rgb = col.into_format::<u8>();
        let light = ((n.x * lx + n.y * ly + n.z * lz).max(0.0) * 0.5 + 0.5).clamp(0.0, 1.0);
        img.put_pixel(
            x,
            y,
            Rgb([
                (rgb.red as f32 * light) as u8,
                (rgb.green as f32 * light) as u8,
                (rgb.blue as f32 * light) as u8,
            ]),
        );
    }
    Ok(img)
}

// Rebuilds a mesh (with smooth normals) from a height field
pub fn mesh_from_heights(settings: &TerrainSettings, heights: &[f32]) -> Result<MeshBuffers> {
    settings
        .validate()
        .context("stored terrain has invalid settings")?;
    let grid = settings.grid();
    ensure!(
        heights.len() == grid.vertex_count(),
        "stored terrain has {} heights, expected {}",
        heights.len(),
        grid.vertex_count()
    );
    let stride = settings.columns as usize + 1;
    Ok(generate_grid(
        &grid,
        GridOrigin::Corner,
        |column, row| heights[row as usize * stride + column as usize],
        true,
    ))
}

// Stored documents repeat the grid size next to the settings snapshot
pub fn mesh_from_doc(doc: &TerrainDoc) -> Result<MeshBuffers> {
    ensure!(
        doc.columns == doc.settings.columns && doc.rows == doc.settings.rows,
        "stored terrain is {}×{} but its settings say {}×{}",
        doc.columns,
        doc.rows,
        doc.settings.columns,
        doc.settings.rows
    );
    mesh_from_heights(&doc.settings, &doc.heights)
}

pub fn save(mesh: &MeshBuffers, settings: &TerrainSettings, path: &Path) -> Result<()> {
    let img = render(mesh, settings)?;
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "preview written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{mesh_from_doc, mesh_from_heights, render};
    use terraforge_core::{TerrainGenerator, TerrainSettings};
    use terraforge_storage::models::TerrainDoc;

    fn settings() -> TerrainSettings {
        TerrainSettings {
            columns: 10,
            rows: 6,
            seed: 3,
            ..TerrainSettings::default()
        }
    }

    #[test]
    fn preview_has_one_pixel_per_vertex() {
        let mesh = TerrainGenerator::new(settings()).generate();
        let img = render(&mesh, &settings()).unwrap();
        assert_eq!(img.dimensions(), (11, 7));
    }

    #[test]
    fn stored_heights_rebuild_the_same_mesh() {
        let mut generator = TerrainGenerator::new(settings());
        let mesh = generator.generate();
        let rebuilt = mesh_from_heights(&settings(), &mesh.heights()).unwrap();
        assert_eq!(rebuilt.positions, mesh.positions);
        assert_eq!(rebuilt.normals, mesh.normals);
        assert_eq!(rebuilt.triangles, mesh.triangles);
    }

    #[test]
    fn mismatched_sizes_are_errors() {
        let mesh = TerrainGenerator::new(settings()).generate();
        let other = TerrainSettings {
            columns: 4,
            ..settings()
        };
        assert!(render(&mesh, &other).is_err());
        assert!(mesh_from_heights(&other, &mesh.heights()).is_err());
    }

    #[test]
    fn zero_column_snapshot_is_an_error() {
        let broken = TerrainSettings {
            columns: 0,
            ..settings()
        };
        assert!(mesh_from_heights(&broken, &[0.0; 7]).is_err());

        let mut generator = TerrainGenerator::new(settings());
        let mut doc = TerrainDoc::from_mesh("flat", &settings(), &generator.generate());
        doc.settings.columns = 0;
        doc.columns = 0;
        assert!(mesh_from_doc(&doc).is_err());
    }

    #[test]
    fn doc_grid_size_must_match_its_settings() {
        let mut generator = TerrainGenerator::new(settings());
        let mut doc = TerrainDoc::from_mesh("ridge", &settings(), &generator.generate());
        assert!(mesh_from_doc(&doc).is_ok());
        doc.rows = 3;
        assert!(mesh_from_doc(&doc).is_err());
    }
}
