use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Paid,
    Cancelled,
    Expired,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Paid => "paid",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Expired => "expired",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub movie_id: String,
    pub theater_id: String,
    pub showtime: String,
    pub seats: i32,
    pub total_amount: f64,
    pub status: String,
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub user_id: String,
    pub movie_id: String,
    pub theater_id: String,
    pub showtime: String,
    pub seats: i32,
    pub total_amount: f64,
}

impl Booking {
    /// A new booking always starts out pending; payment flips it to paid.
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            movie_id: params.movie_id,
            theater_id: params.theater_id,
            showtime: params.showtime,
            seats: params.seats,
            total_amount: params.total_amount,
            status: BookingStatus::Pending.as_str().to_string(),
            payment_id: None,
            created_at: Utc::now(),
        }
    }
}
