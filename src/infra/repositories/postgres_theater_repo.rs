use crate::domain::{models::theater::Theater, ports::TheaterRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresTheaterRepo {
    pool: PgPool,
}

impl PostgresTheaterRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TheaterRepository for PostgresTheaterRepo {
    async fn create(&self, theater: &Theater) -> Result<Theater, AppError> {
        sqlx::query_as::<_, Theater>(
            "INSERT INTO theaters (id, name, location, created_at) VALUES ($1, $2, $3, $4) RETURNING *"
        )
            .bind(&theater.id).bind(&theater.name).bind(&theater.location).bind(theater.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Theater>, AppError> {
        sqlx::query_as::<_, Theater>("SELECT * FROM theaters WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Theater>, AppError> {
        sqlx::query_as::<_, Theater>("SELECT * FROM theaters ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
