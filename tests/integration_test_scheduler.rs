mod common;

use axum::{
    body::Body,
    http::Request,
};
use cinema_backend::background::{sweep_availability, AvailabilityScheduler};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_sweep_marks_empty_movies_sold_out() {
    let app = TestApp::new().await;
    let auth = app.signup("admin@example.com", "supersecret").await;
    let (movie_id, _, _) = app.seed_catalog(&auth, 40, 250.0, 40).await;

    // Drain the pool behind the scheduler's back.
    sqlx::query("UPDATE movies SET available_seats = 0 WHERE id = ?")
        .bind(&movie_id)
        .execute(&app.pool).await.unwrap();

    let updated = sweep_availability(&app.state).await.unwrap();
    assert_eq!(updated, 1);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/movies/{}", movie_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(res).await["availability_status"], "sold_out");
}

#[tokio::test]
async fn test_sweep_restores_availability_when_seats_return() {
    let app = TestApp::new().await;
    let auth = app.signup("admin@example.com", "supersecret").await;
    let (movie_id, _, _) = app.seed_catalog(&auth, 40, 250.0, 40).await;

    sqlx::query("UPDATE movies SET available_seats = 0, availability_status = 'sold_out' WHERE id = ?")
        .bind(&movie_id)
        .execute(&app.pool).await.unwrap();
    sqlx::query("UPDATE movies SET available_seats = 5 WHERE id = ?")
        .bind(&movie_id)
        .execute(&app.pool).await.unwrap();

    let updated = sweep_availability(&app.state).await.unwrap();
    assert_eq!(updated, 1);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/movies/{}", movie_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(res).await["availability_status"], "available");
}

#[tokio::test]
async fn test_scheduler_sweeps_on_start() {
    let app = TestApp::new().await;
    let auth = app.signup("admin@example.com", "supersecret").await;
    let (movie_id, _, _) = app.seed_catalog(&auth, 40, 250.0, 40).await;

    sqlx::query("UPDATE movies SET available_seats = 0 WHERE id = ?")
        .bind(&movie_id)
        .execute(&app.pool).await.unwrap();

    // Long interval: only the sweep that runs on startup matters here.
    let scheduler = AvailabilityScheduler::new(
        app.state.clone(),
        std::time::Duration::from_secs(3600),
    );
    scheduler.start().await;
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    scheduler.stop().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/movies/{}", movie_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(res).await["availability_status"], "sold_out");
}

#[tokio::test]
async fn test_sweep_is_idempotent_when_nothing_changed() {
    let app = TestApp::new().await;
    let auth = app.signup("admin@example.com", "supersecret").await;
    app.post_json(&auth, "/api/v1/movies", json!({
        "title": "Dune", "poster_url": ".", "rating": 8.0, "votes": "900K",
        "genres": ["Sci-Fi"], "language": "English", "duration": "2h 35m",
        "available_seats": 50
    })).await;

    assert_eq!(sweep_availability(&app.state).await.unwrap(), 0);
    assert_eq!(sweep_availability(&app.state).await.unwrap(), 0);
}
