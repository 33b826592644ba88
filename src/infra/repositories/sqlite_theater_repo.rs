use crate::domain::{models::theater::Theater, ports::TheaterRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTheaterRepo {
    pool: SqlitePool,
}

impl SqliteTheaterRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TheaterRepository for SqliteTheaterRepo {
    async fn create(&self, theater: &Theater) -> Result<Theater, AppError> {
        sqlx::query_as::<_, Theater>(
            "INSERT INTO theaters (id, name, location, created_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&theater.id).bind(&theater.name).bind(&theater.location).bind(theater.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Theater>, AppError> {
        sqlx::query_as::<_, Theater>("SELECT * FROM theaters WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Theater>, AppError> {
        sqlx::query_as::<_, Theater>("SELECT * FROM theaters ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
