use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use terraforge_core::{MeshBuffers, TerrainSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub seed: i32,
    pub settings: TerrainSettings,
    pub columns: u32,
    pub rows: u32,
    // Flattened row-major: length = (columns + 1) × (rows + 1)
    pub heights: Vec<f32>,
}

impl TerrainDoc {
    // Snapshot of a generated terrain mesh
    pub fn from_mesh(name: &str, settings: &TerrainSettings, mesh: &MeshBuffers) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            seed: settings.seed,
            settings: *settings,
            columns: settings.columns,
            rows: settings.rows,
            heights: mesh.heights(),
        }
    }

    // Height at vertex (column, row), if inside the stored grid
    pub fn height_at(&self, column: u32, row: u32) -> Option<f32> {
        if column > self.columns || row > self.rows {
            return None;
        }
        let idx = row as usize * (self.columns as usize + 1) + column as usize;
        self.heights.get(idx).copied()
    }
}
