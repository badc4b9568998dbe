use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::error::MeshError;

pub const WHITE: [u8; 4] = [255, 255, 255, 255];

// Rectangular grid of `columns × rows` quads; the vertex grid is one larger
// on each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDescriptor {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: f32,  // quad size along x
    pub cell_length: f32, // quad size along y
}

impl GridDescriptor {
    pub fn new(columns: u32, rows: u32, cell_width: f32, cell_length: f32) -> Self {
        assert!(columns >= 1 && rows >= 1, "grid needs at least one quad per axis");
        Self {
            columns,
            rows,
            cell_width,
            cell_length,
        }
    }

    pub fn square(columns: u32, rows: u32, cell_size: f32) -> Self {
        Self::new(columns, rows, cell_size, cell_size)
    }

    pub fn vertex_count(&self) -> usize {
        (self.columns as usize + 1) * (self.rows as usize + 1)
    }

    pub fn triangle_count(&self) -> usize {
        2 * self.columns as usize * self.rows as usize
    }

    // World-space size of the whole grid
    pub fn extent(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * self.cell_width,
            self.rows as f32 * self.cell_length,
        )
    }
}

// Where vertex (0, 0) lands in world space
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GridOrigin {
    // (0, 0) at the world origin, grid grows along +x/+y
    #[default]
    Corner,
    // grid center at the world origin
    Centered,
}

/// Interleaved vertex layout for upload to a GPU vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub color: [u8; 4],
}

/// Parallel per-vertex channels plus the triangle list of a grid mesh.
///
/// `positions`, `normals`, `uvs` and `colors` always have the same length;
/// every triangle index is below that length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub triangles: Vec<[u32; 3]>,
    pub colors: Vec<[u8; 4]>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // Flat index buffer, three entries per triangle
    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    // Vertical component of every position, row-major
    pub fn heights(&self) -> Vec<f32> {
        self.positions.iter().map(|p| p.z).collect()
    }

    pub fn interleaved(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .zip(&self.colors)
            .map(|(((p, n), uv), color)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
                color: *color,
            })
            .collect()
    }

    pub fn check_invariants(&self) -> Result<(), MeshError> {
        let expected = self.positions.len();
        for (channel, found) in [
            ("normals", self.normals.len()),
            ("uvs", self.uvs.len()),
            ("colors", self.colors.len()),
        ] {
            if found != expected {
                return Err(MeshError::ChannelLength {
                    channel,
                    found,
                    expected,
                });
            }
        }
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= expected) {
                return Err(MeshError::IndexOutOfBounds {
                    triangle,
                    index,
                    vertex_count: expected,
                });
            }
        }
        Ok(())
    }
}

// Vertices of the grid, row by row. Normals start as the up vector and
// colors as white; triangles are left empty.
pub fn build_grid<F>(desc: &GridDescriptor, origin: GridOrigin, mut height_fn: F) -> MeshBuffers
where
    F: FnMut(u32, u32) -> f32,
{
    let count = desc.vertex_count();
    let mut mesh = MeshBuffers {
        positions: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
        uvs: Vec::with_capacity(count),
        triangles: Vec::new(),
        colors: Vec::with_capacity(count),
    };

    let offset = match origin {
        GridOrigin::Corner => Vec2::ZERO,
        GridOrigin::Centered => desc.extent() * 0.5,
    };

    for row in 0..=desc.rows {
        for column in 0..=desc.columns {
            let x = column as f32 * desc.cell_width - offset.x;
            let y = row as f32 * desc.cell_length - offset.y;
            mesh.positions.push(Vec3::new(x, y, height_fn(column, row)));
            mesh.normals.push(Vec3::Z);
            mesh.uvs.push(Vec2::new(
                column as f32 / desc.columns as f32,
                row as f32 / desc.rows as f32,
            ));
            mesh.colors.push(WHITE);
        }
    }
    mesh
}

// Two triangles per quad, (bl, tl, tr) then (bl, tr, br)
pub fn build_triangles(columns: u32, rows: u32) -> Vec<[u32; 3]> {
    let mut triangles = Vec::with_capacity(2 * columns as usize * rows as usize);
    for y in 0..rows {
        for x in 0..columns {
            let bottom_left = y * (columns + 1) + x;
            let bottom_right = bottom_left + 1;
            let top_left = bottom_left + columns + 1;
            let top_right = top_left + 1;

            triangles.push([bottom_left, top_left, top_right]);
            triangles.push([bottom_left, top_right, bottom_right]);
        }
    }
    triangles
}

// Per-vertex normals as the normalized sum of unit face normals.
// Every adjacent face counts equally, whatever its area. Vertices that no
// triangle touches keep a zero vector.
pub fn recompute_smooth_normals(positions: &[Vec3], triangles: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for &[i0, i1, i2] in triangles {
        let v0 = positions[i0 as usize];
        let v1 = positions[i1 as usize];
        let v2 = positions[i2 as usize];
        // (v2 - v0) × (v1 - v0) faces +Z for the grid winding
        let face = (v2 - v0).cross(v1 - v0).normalize_or_zero();

        normals[i0 as usize] += face;
        normals[i1 as usize] += face;
        normals[i2 as usize] += face;
    }

    for n in normals.iter_mut() {
        *n = n.normalize_or_zero();
    }
    normals
}

// Complete grid mesh: vertices, triangles and, when asked, smooth normals
pub fn generate_grid<F>(
    desc: &GridDescriptor,
    origin: GridOrigin,
    height_fn: F,
    recompute_normals: bool,
) -> MeshBuffers
where
    F: FnMut(u32, u32) -> f32,
{
    let mut mesh = build_grid(desc, origin, height_fn);
    mesh.triangles = build_triangles(desc.columns, desc.rows);
    if recompute_normals {
        mesh.normals = recompute_smooth_normals(&mesh.positions, &mesh.triangles);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn flat_two_by_two_grid() {
        let desc = GridDescriptor::square(2, 2, 1.0);
        let mesh = generate_grid(&desc, GridOrigin::Centered, |_, _| 0.0, true);
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.triangle_count(), 8);
        for n in &mesh.normals {
            assert!((*n - Vec3::Z).length() < EPS, "normal {n} is not up");
        }
        assert!(mesh.check_invariants().is_ok());
    }

    #[test]
    fn sizes_follow_grid() {
        let desc = GridDescriptor::new(7, 3, 2.0, 0.5);
        let mesh = generate_grid(&desc, GridOrigin::Corner, |c, r| (c + r) as f32, true);
        assert_eq!(mesh.vertex_count(), 8 * 4);
        assert_eq!(mesh.triangle_count(), 2 * 7 * 3);
        assert_eq!(mesh.flat_indices().len(), 6 * 7 * 3);
        assert_eq!(mesh.vertex_count(), desc.vertex_count());
        assert_eq!(mesh.triangle_count(), desc.triangle_count());
        assert!(mesh.check_invariants().is_ok());
    }

    #[test]
    fn centered_and_corner_positions() {
        let desc = GridDescriptor::new(4, 2, 10.0, 5.0);
        let corner = build_grid(&desc, GridOrigin::Corner, |_, _| 1.5);
        assert_eq!(corner.positions[0], Vec3::new(0.0, 0.0, 1.5));
        assert_eq!(corner.positions[14], Vec3::new(40.0, 10.0, 1.5));

        let centered = build_grid(&desc, GridOrigin::Centered, |_, _| 0.0);
        assert_eq!(centered.positions[0], Vec3::new(-20.0, -5.0, 0.0));
        assert_eq!(centered.positions[14], Vec3::new(20.0, 5.0, 0.0));
    }

    #[test]
    fn uvs_span_unit_square() {
        let desc = GridDescriptor::square(4, 2, 1.0);
        let mesh = build_grid(&desc, GridOrigin::Corner, |_, _| 0.0);
        assert_eq!(mesh.uvs[0], Vec2::ZERO);
        assert_eq!(mesh.uvs[2], Vec2::new(0.5, 0.0));
        assert_eq!(mesh.uvs[5], Vec2::new(0.0, 0.5));
        assert_eq!(*mesh.uvs.last().unwrap(), Vec2::ONE);
    }

    #[test]
    fn height_fn_sees_every_vertex_once() {
        let desc = GridDescriptor::square(3, 2, 1.0);
        let mut calls = Vec::new();
        let mesh = build_grid(&desc, GridOrigin::Corner, |c, r| {
            calls.push((c, r));
            (r * 10 + c) as f32
        });
        assert_eq!(calls.len(), 12);
        assert_eq!(calls[0], (0, 0));
        assert_eq!(calls[4], (0, 1));
        assert_eq!(mesh.positions[6].z, 12.0);
    }

    #[test]
    fn triangle_winding() {
        let tris = build_triangles(2, 1);
        assert_eq!(tris, vec![[0, 3, 4], [0, 4, 1], [1, 4, 5], [1, 5, 2]]);
    }

    #[test]
    fn slope_normals_tilt_against_gradient() {
        // z = x, so the surface faces (-1, 0, 1) / √2
        let desc = GridDescriptor::square(3, 3, 1.0);
        let mesh = generate_grid(&desc, GridOrigin::Corner, |c, _| c as f32, true);
        let expected = Vec3::new(-1.0, 0.0, 1.0).normalize();
        for n in &mesh.normals {
            assert!((*n - expected).length() < EPS, "normal {n}");
        }
    }

    #[test]
    fn normals_are_unit_length() {
        let desc = GridDescriptor::square(6, 5, 1.0);
        let mesh = generate_grid(
            &desc,
            GridOrigin::Corner,
            |c, r| ((c * 7 + r * 3) % 5) as f32 * 0.8,
            true,
        );
        for n in &mesh.normals {
            assert!((n.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn faces_count_equally_regardless_of_area() {
        // A tiny +Z face and a huge -X face share vertex 0: the result is
        // their plain bisector
        let positions = vec![
            Vec3::ZERO,
            Vec3::new(0.0, 0.01, 0.0),
            Vec3::new(0.01, 0.01, 0.0),
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::new(0.0, 100.0, 100.0),
        ];
        let triangles = vec![[0, 1, 2], [0, 3, 4]];
        let normals = recompute_smooth_normals(&positions, &triangles);
        let expected = (Vec3::Z - Vec3::X).normalize();
        assert!((normals[0] - expected).length() < EPS, "{}", normals[0]);
    }

    #[test]
    fn unused_vertex_keeps_zero_normal() {
        let positions = vec![Vec3::ZERO, Vec3::Y, Vec3::ONE, Vec3::splat(9.0)];
        let normals = recompute_smooth_normals(&positions, &[[0, 1, 2]]);
        assert_eq!(normals[3], Vec3::ZERO);
        assert!((normals[0].length() - 1.0).abs() < EPS);
    }

    #[test]
    fn without_recompute_normals_stay_up() {
        let desc = GridDescriptor::square(2, 2, 1.0);
        let mesh = generate_grid(&desc, GridOrigin::Corner, |c, _| c as f32, false);
        assert!(mesh.normals.iter().all(|n| *n == Vec3::Z));
    }

    #[test]
    fn invariant_check_catches_bad_buffers() {
        let desc = GridDescriptor::square(1, 1, 1.0);
        let mut mesh = generate_grid(&desc, GridOrigin::Corner, |_, _| 0.0, true);
        mesh.triangles.push([0, 1, 4]);
        assert_eq!(
            mesh.check_invariants(),
            Err(MeshError::IndexOutOfBounds {
                triangle: 2,
                index: 4,
                vertex_count: 4
            })
        );
        mesh.triangles.pop();
        mesh.colors.pop();
        assert!(matches!(
            mesh.check_invariants(),
            Err(MeshError::ChannelLength { channel: "colors", .. })
        ));
    }

    #[test]
    fn interleaved_matches_channels() {
        let desc = GridDescriptor::square(1, 1, 2.0);
        let mesh = generate_grid(&desc, GridOrigin::Corner, |c, r| (c + r) as f32, true);
        let verts = mesh.interleaved();
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[3].position, [2.0, 2.0, 2.0]);
        assert_eq!(verts[3].uv, [1.0, 1.0]);
        assert_eq!(verts[3].color, WHITE);
        assert_eq!(std::mem::size_of::<Vertex>(), 36);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&verts).len(), 4 * 36);
    }

    #[test]
    #[should_panic]
    fn empty_grid_is_rejected() {
        let _ = GridDescriptor::square(0, 3, 1.0);
    }
}
