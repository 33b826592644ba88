pub mod auth;
pub mod booking;
pub mod health;
pub mod movie;
pub mod showtime;
pub mod theater;
pub mod wizard;
