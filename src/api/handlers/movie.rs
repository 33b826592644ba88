use axum::{extract::{State, Path}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateMovieRequest, UpdateSeatsRequest};
use crate::domain::models::movie::{Movie, NewMovieParams};
use crate::domain::services::availability::next_availability_status;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let movies = state.movie_repo.list().await?;
    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let movie = state.movie_repo.find_by_id(&movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;
    Ok(Json(movie))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Json(payload): Json<CreateMovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if payload.available_seats < 0 {
        return Err(AppError::Validation("Available seats cannot be negative".into()));
    }

    let movie = state.movie_repo.create(&Movie::new(NewMovieParams {
        title: payload.title,
        poster_url: payload.poster_url,
        rating: payload.rating,
        votes: payload.votes,
        genres: payload.genres,
        language: payload.language,
        duration: payload.duration,
        available_seats: payload.available_seats,
    })).await?;

    info!("Movie created: {}", movie.id);

    Ok((StatusCode::CREATED, Json(movie)))
}

/// Admin seat adjustment. The status is reconciled inline as well, so the
/// catalog never shows a stale status for longer than one request even when
/// the scheduler is idle.
pub async fn update_seats(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Path(movie_id): Path<String>,
    Json(payload): Json<UpdateSeatsRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.available_seats < 0 {
        return Err(AppError::Validation("Available seats cannot be negative".into()));
    }

    state.movie_repo.find_by_id(&movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;

    let mut movie = state.movie_repo
        .update_available_seats(&movie_id, payload.available_seats)
        .await?;

    if let Some(status) = next_availability_status(movie.available_seats, &movie.availability_status) {
        state.movie_repo.update_availability_status(&movie_id, status).await?;
        movie.availability_status = status.to_string();
    }

    Ok(Json(movie))
}
