use crate::domain::{models::showtime::Showtime, ports::ShowtimeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteShowtimeRepo {
    pool: SqlitePool,
}

impl SqliteShowtimeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShowtimeRepository for SqliteShowtimeRepo {
    async fn create(&self, showtime: &Showtime) -> Result<Showtime, AppError> {
        sqlx::query_as::<_, Showtime>(
            "INSERT INTO showtimes (id, movie_id, theater_id, showtime, price, available_seats, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&showtime.id).bind(&showtime.movie_id).bind(&showtime.theater_id)
            .bind(&showtime.showtime).bind(showtime.price).bind(showtime.available_seats)
            .bind(showtime.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Showtime>, AppError> {
        sqlx::query_as::<_, Showtime>("SELECT * FROM showtimes WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_movie(&self, movie_id: &str) -> Result<Vec<Showtime>, AppError> {
        sqlx::query_as::<_, Showtime>("SELECT * FROM showtimes WHERE movie_id = ? ORDER BY showtime ASC").bind(movie_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
