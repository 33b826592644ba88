use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::booking::BookingStatus;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_my_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_by_user(&user.id).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&user.id, &booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

/// Cancels a pending or paid booking and returns its seats to the movie's
/// pool.
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&user.id, &booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.status != BookingStatus::Pending.as_str()
        && booking.status != BookingStatus::Paid.as_str()
    {
        return Err(AppError::Conflict(format!(
            "Booking cannot be cancelled (current status: {})",
            booking.status
        )));
    }

    let cancelled = state.booking_repo
        .update_status(&booking.id, BookingStatus::Cancelled, None)
        .await?;

    if let Some(movie) = state.movie_repo.find_by_id(&booking.movie_id).await? {
        state.movie_repo
            .update_available_seats(&movie.id, movie.available_seats + booking.seats)
            .await?;
    }

    info!("Booking cancelled: {}", cancelled.id);

    Ok(Json(cancelled))
}
