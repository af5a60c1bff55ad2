//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use layerhub_core::error::{AppError, ErrorKind};
use layerhub_core::result::AppResult;
use layerhub_core::types::ListQuery;
use layerhub_entity::folder::model::{CreateFolder, Folder, FolderPatch};
use layerhub_entity::folder::store::FolderStore;

/// Repository for folder CRUD and lookups.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find folder by name", e)
            })
    }

    async fn list(&self, query: &ListQuery) -> AppResult<Vec<Folder>> {
        // A null LIMIT/OFFSET bind means "no bound" in PostgreSQL.
        sqlx::query_as::<_, Folder>("SELECT * FROM folders ORDER BY id ASC LIMIT $1 OFFSET $2")
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn list_by_parent(
        &self,
        parent_id: Option<i64>,
        query: &ListQuery,
    ) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id IS NOT DISTINCT FROM $1 \
             ORDER BY id ASC LIMIT $2 OFFSET $3",
        )
        .bind(parent_id)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list folders by parent", e)
        })
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name, parent_id, created_by, modified_by) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.parent_id)
        .bind(&data.created_by)
        .bind(&data.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_name_key") =>
            {
                AppError::already_exists(format!(
                    "Folder with name {} already exists.",
                    data.name
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    async fn update(
        &self,
        id: i64,
        patch: &FolderPatch,
        modified_by: &str,
    ) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = COALESCE($2, name), \
             parent_id = COALESCE($3, parent_id), \
             modified_by = $4, modification_date = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(patch.parent_id)
        .bind(modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_name_key") =>
            {
                AppError::already_exists(format!(
                    "Folder with name {} already exists.",
                    patch.name.as_deref().unwrap_or_default()
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update folder", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Folder with id {id} does not exist")))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
