//! Layer repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use layerhub_core::error::{AppError, ErrorKind};
use layerhub_core::result::AppResult;
use layerhub_core::types::ListQuery;
use layerhub_entity::layer::model::{CreateLayer, Layer};
use layerhub_entity::layer::store::LayerStore;

/// Repository for layer CRUD and lookups.
#[derive(Debug, Clone)]
pub struct LayerRepository {
    pool: PgPool,
}

impl LayerRepository {
    /// Create a new layer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LayerStore for LayerRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Layer>> {
        sqlx::query_as::<_, Layer>("SELECT * FROM layers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find layer", e))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Layer>> {
        sqlx::query_as::<_, Layer>("SELECT * FROM layers WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find layer by name", e)
            })
    }

    async fn list(&self, query: &ListQuery) -> AppResult<Vec<Layer>> {
        sqlx::query_as::<_, Layer>("SELECT * FROM layers ORDER BY id ASC LIMIT $1 OFFSET $2")
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list layers", e))
    }

    async fn list_by_folder(
        &self,
        folder_id: Option<i64>,
        query: &ListQuery,
    ) -> AppResult<Vec<Layer>> {
        sqlx::query_as::<_, Layer>(
            "SELECT * FROM layers WHERE folder_id IS NOT DISTINCT FROM $1 \
             ORDER BY id ASC LIMIT $2 OFFSET $3",
        )
        .bind(folder_id)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list layers by folder", e)
        })
    }

    async fn create(&self, data: &CreateLayer) -> AppResult<Layer> {
        sqlx::query_as::<_, Layer>(
            "INSERT INTO layers (name, folder_id, file_link, created_by, modified_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.folder_id)
        .bind(&data.file_link)
        .bind(&data.created_by)
        .bind(&data.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("layers_name_key") =>
            {
                AppError::already_exists(format!(
                    "Layer with name {} already exists",
                    data.name
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create layer", e),
        })
    }

    async fn set_folder(
        &self,
        id: i64,
        folder_id: Option<i64>,
        modified_by: &str,
    ) -> AppResult<Layer> {
        sqlx::query_as::<_, Layer>(
            "UPDATE layers SET folder_id = $2, modified_by = $3, modification_date = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(folder_id)
        .bind(modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update layer", e))?
        .ok_or_else(|| AppError::not_found(format!("Layer with id {id} does not exist")))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM layers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete layer", e))?;
        Ok(result.rows_affected() > 0)
    }
}
