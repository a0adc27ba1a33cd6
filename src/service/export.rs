//! Export of canonical pack records for secondary consumers.
//!
//! Admin tooling and other systems read these records instead of keeping their own
//! copy of the schema.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use sea_orm::DatabaseConnection;

use crate::{
    data::pack_resource::PackResourceRepository, error::AppError,
    model::pack_resource::PackResource,
};

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every pack resource, ordered by owner.
    pub async fn export_pack_resources(&self) -> Result<Vec<PackResource>, AppError> {
        let resources = PackResourceRepository::new(self.db).get_all().await?;
        Ok(resources)
    }

    /// Writes every pack resource to `path` as a pretty-printed JSON array.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of records written
    /// - `Err(AppError::IoErr)` - File could not be created or written
    /// - `Err(AppError::DbErr)` - Database error while reading records
    pub async fn write_json(&self, path: &Path) -> Result<usize, AppError> {
        let resources = self.export_pack_resources().await?;

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &resources)?;
        writer.flush()?;

        tracing::info!(
            "Exported {} pack resources to {}",
            resources.len(),
            path.display()
        );

        Ok(resources.len())
    }
}
