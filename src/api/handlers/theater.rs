use axum::{extract::State, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::CreateTheaterRequest;
use crate::domain::models::theater::Theater;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_theaters(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let theaters = state.theater_repo.list().await?;
    Ok(Json(theaters))
}

pub async fn create_theater(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Json(payload): Json<CreateTheaterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Theater name is required".into()));
    }

    let theater = state.theater_repo
        .create(&Theater::new(payload.name, payload.location))
        .await?;

    info!("Theater created: {}", theater.id);

    Ok((StatusCode::CREATED, Json(theater)))
}
