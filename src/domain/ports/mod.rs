use crate::domain::models::{
    booking::{Booking, BookingStatus},
    movie::Movie,
    showtime::Showtime,
    theater::Theater,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, movie: &Movie) -> Result<Movie, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, AppError>;
    async fn list(&self) -> Result<Vec<Movie>, AppError>;
    async fn update_available_seats(&self, id: &str, available_seats: i32) -> Result<Movie, AppError>;
    async fn update_availability_status(&self, id: &str, status: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait TheaterRepository: Send + Sync {
    async fn create(&self, theater: &Theater) -> Result<Theater, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Theater>, AppError>;
    async fn list(&self) -> Result<Vec<Theater>, AppError>;
}

#[async_trait]
pub trait ShowtimeRepository: Send + Sync {
    async fn create(&self, showtime: &Showtime) -> Result<Showtime, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Showtime>, AppError>;
    async fn list_by_movie(&self, movie_id: &str) -> Result<Vec<Showtime>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
        payment_id: Option<&str>,
    ) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}

/// The payment provider seam. The shipped adapter is a mock that fabricates
/// payment ids after a fixed delay; tests substitute failing doubles.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, booking_id: &str, amount: f64) -> Result<String, AppError>;
}
