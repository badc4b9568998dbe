//storage holds the MongoDB schema & async CRUD for generated terrain

pub mod models;

use crate::models::TerrainDoc;
use bson::doc;
use futures_util::stream::TryStreamExt;
use mongodb::{Client, Collection, IndexModel, options::ClientOptions};
use tracing::{debug, info};

pub struct TerrainStore {
    col: Collection<TerrainDoc>,
}

impl TerrainStore {
    // Initialize the MongoDB collection
    pub async fn init(uri: &str, db_name: &str, col_name: &str) -> mongodb::error::Result<Self> {
        let mut opts = ClientOptions::parse(uri).await?;
        opts.app_name = Some("TerraForge".to_string());
        let client = Client::with_options(opts)?;
        let col = client.database(db_name).collection(col_name);

        // Index on (name, seed), the key of a stored terrain
        let index_model = IndexModel::builder()
            .keys(doc! { "name": 1, "seed": 1 })
            .build();
        col.create_index(index_model).await?;
        debug!(db = db_name, collection = col_name, "terrain store ready");

        Ok(Self { col })
    }

    pub async fn list_names(&self) -> mongodb::error::Result<Vec<String>> {
        let mut cursor = self.col.find(doc! {}).await?;
        let mut names = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            names.push(doc.name);
        }
        Ok(names)
    }

    pub async fn read_by_name(&self, name: &str) -> mongodb::error::Result<Option<TerrainDoc>> {
        self.col.find_one(doc! { "name": name }).await
    }

    // Insert a terrain document, replacing any with the same name and seed
    pub async fn create(&self, doc_obj: TerrainDoc) -> mongodb::error::Result<()> {
        let filter = doc! {
            "name": &doc_obj.name,
            "seed": doc_obj.seed,
        };
        let removed = self.col.delete_one(filter).await?;
        if removed.deleted_count > 0 {
            debug!(name = %doc_obj.name, seed = doc_obj.seed, "replacing stored terrain");
        }

        info!(
            name = %doc_obj.name,
            seed = doc_obj.seed,
            vertices = doc_obj.heights.len(),
            "storing terrain"
        );
        self.col.insert_one(doc_obj).await?;
        Ok(())
    }

    // Read a terrain by seed.
    pub async fn read_by_seed(&self, seed: i32) -> mongodb::error::Result<Option<TerrainDoc>> {
        self.col.find_one(doc! { "seed": seed }).await
    }

    // Delete by seed (for clean-up).
    pub async fn delete_by_seed(&self, seed: i32) -> mongodb::error::Result<()> {
        self.col.delete_one(doc! { "seed": seed }).await?;
        Ok(())
    }
}
