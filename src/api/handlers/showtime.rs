use axum::{extract::{State, Path}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::CreateShowtimeRequest;
use crate::domain::models::showtime::{group_showtimes_by_theater, NewShowtimeParams, Showtime};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_showtime(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Json(payload): Json<CreateShowtimeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.price <= 0.0 {
        return Err(AppError::Validation("Price must be positive".into()));
    }
    if payload.available_seats < 0 {
        return Err(AppError::Validation("Available seats cannot be negative".into()));
    }

    state.movie_repo.find_by_id(&payload.movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;
    state.theater_repo.find_by_id(&payload.theater_id).await?
        .ok_or(AppError::NotFound("Theater not found".into()))?;

    let showtime = state.showtime_repo.create(&Showtime::new(NewShowtimeParams {
        movie_id: payload.movie_id,
        theater_id: payload.theater_id,
        showtime: payload.showtime,
        price: payload.price,
        available_seats: payload.available_seats,
    })).await?;

    info!("Showtime created: {} for movie {}", showtime.id, showtime.movie_id);

    Ok((StatusCode::CREATED, Json(showtime)))
}

/// The theaters-step view: a movie's showtimes grouped by theater.
pub async fn list_movie_showtimes(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.movie_repo.find_by_id(&movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;

    let showtimes = state.showtime_repo.list_by_movie(&movie_id).await?;
    let theaters = state.theater_repo.list().await?;

    Ok(Json(group_showtimes_by_theater(showtimes, &theaters)))
}
