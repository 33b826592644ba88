use axum::{extract::{State, Path}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::api::dtos::requests::{
    SeatCountRequest, SelectShowtimeRequest, StartWizardRequest, ToggleSeatRequest,
};
use crate::api::dtos::responses::WizardStateResponse;
use crate::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
use crate::domain::services::seating::generate_layout;
use crate::domain::services::wizard::{BookingWizard, ShowtimeChoice};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Extra seats rendered beyond the bookable pool, so the picker grid always
/// shows some occupied neighbors.
const LAYOUT_PADDING_SEATS: u32 = 20;

pub async fn start_wizard(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StartWizardRequest>,
) -> Result<impl IntoResponse, AppError> {
    let movie = state.movie_repo.find_by_id(&payload.movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;

    let wizard = BookingWizard::new(movie.id.clone());
    let session_id = state.wizard_sessions.insert(wizard)?;

    info!("Wizard session {} started for movie {}", session_id, movie.id);

    let snapshot = state.wizard_sessions
        .with(&session_id, |w| Ok(WizardStateResponse::snapshot(&session_id, w)))?;

    Ok((StatusCode::CREATED, Json(snapshot)))
}

pub async fn get_wizard(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.wizard_sessions
        .with(&session_id, |w| Ok(WizardStateResponse::snapshot(&session_id, w)))?;
    Ok(Json(snapshot))
}

pub async fn select_showtime(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<SelectShowtimeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let showtime = state.showtime_repo.find_by_id(&payload.showtime_id).await?
        .ok_or(AppError::NotFound("Showtime not found".into()))?;

    let choice = ShowtimeChoice {
        showtime_id: showtime.id,
        theater_id: showtime.theater_id,
        showtime: showtime.showtime,
        price: showtime.price,
        available_seats: showtime.available_seats,
    };

    let snapshot = state.wizard_sessions.with(&session_id, |w| {
        if w.movie_id() != showtime.movie_id {
            return Err(AppError::Validation(
                "Showtime does not belong to this wizard's movie".into(),
            ));
        }
        w.select_showtime(choice)?;
        Ok(WizardStateResponse::snapshot(&session_id, w))
    })?;

    Ok(Json(snapshot))
}

/// Theaters -> Seats. Requires a signed-in user; guests get a 401 and the
/// wizard stays on the theaters step.
pub async fn proceed_to_seats(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = user.map(|u| u.id);

    let snapshot = state.wizard_sessions.with(&session_id, |w| {
        w.proceed_to_seats(user_id.as_deref())?;
        Ok(WizardStateResponse::snapshot(&session_id, w))
    })?;

    Ok(Json(snapshot))
}

pub async fn set_seat_count(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<SeatCountRequest>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.wizard_sessions.with(&session_id, |w| {
        w.set_seat_count(payload.seat_count)?;
        Ok(WizardStateResponse::snapshot(&session_id, w))
    })?;

    Ok(Json(snapshot))
}

/// Seats -> SeatSelection. Generates a fresh auditorium grid sized from the
/// chosen showtime's availability; re-entering always reshuffles.
pub async fn open_seat_selection(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.wizard_sessions.with(&session_id, |w| {
        let available = w.showtime()
            .map(|st| st.available_seats.max(0) as u32)
            .ok_or(AppError::Validation("Please select a theater and showtime to continue".into()))?;

        let layout = generate_layout(available + LAYOUT_PADDING_SEATS, available);
        w.proceed_to_seat_selection(layout)?;
        Ok(WizardStateResponse::snapshot(&session_id, w))
    })?;

    Ok(Json(snapshot))
}

pub async fn toggle_seat(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<ToggleSeatRequest>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.wizard_sessions.with(&session_id, |w| {
        w.toggle_seat(&payload.seat_id)?;
        Ok(WizardStateResponse::snapshot(&session_id, w))
    })?;

    Ok(Json(snapshot))
}

/// SeatSelection -> Payment. Creates the pending booking and takes the seats
/// out of the movie's pool. The wizard only advances once the booking row
/// exists, so a rejected create leaves the draft editable.
pub async fn confirm_seats(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let checkout = state.wizard_sessions.with(&session_id, |w| Ok(w.checkout()?))?;

    let movie = state.movie_repo.find_by_id(&checkout.movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;

    if movie.available_seats < checkout.seats {
        return Err(AppError::Conflict("Not enough seats available".into()));
    }

    let booking = state.booking_repo.create(&Booking::new(NewBookingParams {
        user_id: checkout.user_id,
        movie_id: checkout.movie_id,
        theater_id: checkout.theater_id,
        showtime: checkout.showtime,
        seats: checkout.seats,
        total_amount: checkout.total_amount,
    })).await?;

    state.movie_repo
        .update_available_seats(&movie.id, movie.available_seats - checkout.seats)
        .await?;

    info!("Booking {} created from wizard session {}", booking.id, session_id);

    let snapshot = state.wizard_sessions.with(&session_id, |w| {
        w.booking_created(booking.id.clone())?;
        Ok(WizardStateResponse::snapshot(&session_id, w))
    })?;

    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// Payment -> Processing -> Success, or back to Payment if the charge fails.
pub async fn pay(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let request = state.wizard_sessions.with(&session_id, |w| Ok(w.begin_processing()?))?;

    // A charge that lands but cannot be recorded is treated like a declined
    // charge: the wizard must never be left on the processing step.
    let outcome = match state.payment_gateway.charge(&request.booking_id, request.amount).await {
        Ok(payment_id) => state.booking_repo
            .update_status(&request.booking_id, BookingStatus::Paid, Some(&payment_id))
            .await
            .map(|_| payment_id),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(payment_id) => {
            info!("Payment {} captured for booking {}", payment_id, request.booking_id);

            let snapshot = state.wizard_sessions.with(&session_id, |w| {
                w.payment_succeeded(payment_id.clone())?;
                Ok(WizardStateResponse::snapshot(&session_id, w))
            })?;

            Ok(Json(snapshot))
        }
        Err(e) => {
            warn!("Payment failed for booking {}: {:?}", request.booking_id, e);

            // The wizard returns to the payment step so the user can retry.
            state.wizard_sessions.with(&session_id, |w| {
                w.payment_failed()?;
                Ok(())
            })?;

            Err(e)
        }
    }
}

pub async fn go_back(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.wizard_sessions.with(&session_id, |w| {
        w.back()?;
        Ok(WizardStateResponse::snapshot(&session_id, w))
    })?;

    Ok(Json(snapshot))
}

/// Discards the draft. Closing is always allowed; an unpaid booking left
/// behind stays pending in the store.
pub async fn close_wizard(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.wizard_sessions.remove(&session_id)?;
    info!("Wizard session {} closed", session_id);
    Ok(StatusCode::NO_CONTENT)
}
