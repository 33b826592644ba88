pub mod auth_service;
pub mod availability;
pub mod seating;
pub mod wizard;
