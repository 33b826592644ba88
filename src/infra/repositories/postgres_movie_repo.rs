use crate::domain::{models::movie::Movie, ports::MovieRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresMovieRepo {
    pool: PgPool,
}

impl PostgresMovieRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepo {
    async fn create(&self, movie: &Movie) -> Result<Movie, AppError> {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (id, title, poster_url, rating, votes, genres, language, duration, available_seats, availability_status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *"
        )
            .bind(&movie.id).bind(&movie.title).bind(&movie.poster_url).bind(movie.rating)
            .bind(&movie.votes).bind(&movie.genres).bind(&movie.language).bind(&movie.duration)
            .bind(movie.available_seats).bind(&movie.availability_status).bind(movie.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, AppError> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY title ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update_available_seats(&self, id: &str, available_seats: i32) -> Result<Movie, AppError> {
        sqlx::query_as::<_, Movie>("UPDATE movies SET available_seats = $1 WHERE id = $2 RETURNING *")
            .bind(available_seats).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Movie not found".into()))
    }
    async fn update_availability_status(&self, id: &str, status: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE movies SET availability_status = $1 WHERE id = $2")
            .bind(status).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Movie not found".into())); }
        Ok(())
    }
}
