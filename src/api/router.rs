use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, booking, health, movie, showtime, theater, wizard};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/signup", post(auth::signup))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Catalog
        .route("/api/v1/movies", get(movie::list_movies).post(movie::create_movie))
        .route("/api/v1/movies/{movie_id}", get(movie::get_movie))
        .route("/api/v1/movies/{movie_id}/seats", put(movie::update_seats))
        .route("/api/v1/movies/{movie_id}/showtimes", get(showtime::list_movie_showtimes))
        .route("/api/v1/theaters", get(theater::list_theaters).post(theater::create_theater))
        .route("/api/v1/showtimes", post(showtime::create_showtime))

        // Booking wizard
        .route("/api/v1/wizard", post(wizard::start_wizard))
        .route("/api/v1/wizard/{session_id}", get(wizard::get_wizard).delete(wizard::close_wizard))
        .route("/api/v1/wizard/{session_id}/showtime", post(wizard::select_showtime))
        .route("/api/v1/wizard/{session_id}/seats", post(wizard::proceed_to_seats))
        .route("/api/v1/wizard/{session_id}/seat-count", put(wizard::set_seat_count))
        .route("/api/v1/wizard/{session_id}/seat-selection", post(wizard::open_seat_selection))
        .route("/api/v1/wizard/{session_id}/seats/toggle", post(wizard::toggle_seat))
        .route("/api/v1/wizard/{session_id}/confirm", post(wizard::confirm_seats))
        .route("/api/v1/wizard/{session_id}/pay", post(wizard::pay))
        .route("/api/v1/wizard/{session_id}/back", post(wizard::go_back))

        // Bookings
        .route("/api/v1/bookings", get(booking::list_my_bookings))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking))
        .route("/api/v1/bookings/{booking_id}/cancel", post(booking::cancel_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
