use crate::domain::{models::showtime::Showtime, ports::ShowtimeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresShowtimeRepo {
    pool: PgPool,
}

impl PostgresShowtimeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShowtimeRepository for PostgresShowtimeRepo {
    async fn create(&self, showtime: &Showtime) -> Result<Showtime, AppError> {
        sqlx::query_as::<_, Showtime>(
            "INSERT INTO showtimes (id, movie_id, theater_id, showtime, price, available_seats, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&showtime.id).bind(&showtime.movie_id).bind(&showtime.theater_id)
            .bind(&showtime.showtime).bind(showtime.price).bind(showtime.available_seats)
            .bind(showtime.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Showtime>, AppError> {
        sqlx::query_as::<_, Showtime>("SELECT * FROM showtimes WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_movie(&self, movie_id: &str) -> Result<Vec<Showtime>, AppError> {
        sqlx::query_as::<_, Showtime>("SELECT * FROM showtimes WHERE movie_id = $1 ORDER BY showtime ASC").bind(movie_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
