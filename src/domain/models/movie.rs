use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_SOLD_OUT: &str = "sold_out";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub poster_url: String,
    pub rating: f64,
    pub votes: String,
    pub genres: Json<Vec<String>>,
    pub language: String,
    pub duration: String,
    pub available_seats: i32,
    pub availability_status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewMovieParams {
    pub title: String,
    pub poster_url: String,
    pub rating: f64,
    pub votes: String,
    pub genres: Vec<String>,
    pub language: String,
    pub duration: String,
    pub available_seats: i32,
}

impl Movie {
    pub fn new(params: NewMovieParams) -> Self {
        let status = if params.available_seats > 0 {
            STATUS_AVAILABLE
        } else {
            STATUS_SOLD_OUT
        };

        Self {
            id: Uuid::new_v4().to_string(),
            title: params.title,
            poster_url: params.poster_url,
            rating: params.rating,
            votes: params.votes,
            genres: Json(params.genres),
            language: params.language,
            duration: params.duration,
            available_seats: params.available_seats,
            availability_status: status.to_string(),
            created_at: Utc::now(),
        }
    }
}
