mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_movie_requires_auth() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/movies")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "title": "Dune", "poster_url": ".", "rating": 8.0, "votes": "900K",
                "genres": ["Sci-Fi"], "language": "English", "duration": "2h 35m",
                "available_seats": 50
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_movie_status_derives_from_seats() {
    let app = TestApp::new().await;
    let auth = app.signup("admin@example.com", "supersecret").await;

    let with_seats = app.post_json(&auth, "/api/v1/movies", json!({
        "title": "Dune", "poster_url": ".", "rating": 8.0, "votes": "900K",
        "genres": ["Sci-Fi"], "language": "English", "duration": "2h 35m",
        "available_seats": 50
    })).await;
    assert_eq!(with_seats["availability_status"], "available");

    let sold_out = app.post_json(&auth, "/api/v1/movies", json!({
        "title": "Oppenheimer", "poster_url": ".", "rating": 8.4, "votes": "1.1M",
        "genres": ["Drama"], "language": "English", "duration": "3h",
        "available_seats": 0
    })).await;
    assert_eq!(sold_out["availability_status"], "sold_out");
}

#[tokio::test]
async fn test_movies_list_is_ordered_by_title() {
    let app = TestApp::new().await;
    let auth = app.signup("admin@example.com", "supersecret").await;

    for title in ["Zodiac", "Arrival", "Memento"] {
        app.post_json(&auth, "/api/v1/movies", json!({
            "title": title, "poster_url": ".", "rating": 8.0, "votes": "500K",
            "genres": ["Thriller"], "language": "English", "duration": "2h",
            "available_seats": 40
        })).await;
    }

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/movies")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let titles: Vec<&str> = body.as_array().unwrap()
        .iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Arrival", "Memento", "Zodiac"]);
}

#[tokio::test]
async fn test_showtimes_grouped_by_theater() {
    let app = TestApp::new().await;
    let auth = app.signup("admin@example.com", "supersecret").await;
    let (movie_id, theater_id, _) = app.seed_catalog(&auth, 40, 250.0, 40).await;

    let second = app.post_json(&auth, "/api/v1/theaters", json!({
        "name": "INOX Megaplex", "location": "Malad"
    })).await;
    let second_id = second["id"].as_str().unwrap().to_string();

    app.post_json(&auth, "/api/v1/showtimes", json!({
        "movie_id": movie_id, "theater_id": theater_id,
        "showtime": "10:00 PM", "price": 300.0, "available_seats": 30
    })).await;
    app.post_json(&auth, "/api/v1/showtimes", json!({
        "movie_id": movie_id, "theater_id": second_id,
        "showtime": "01:15 PM", "price": 200.0, "available_seats": 50
    })).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/movies/{}/showtimes", movie_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let groups = parse_body(res).await;
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 2);

    let pvr = groups.iter().find(|g| g["theater"]["name"] == "PVR Phoenix").unwrap();
    assert_eq!(pvr["showtimes"].as_array().unwrap().len(), 2);
    // Within a group showtimes come back ordered by label.
    assert_eq!(pvr["showtimes"][0]["showtime"], "06:30 PM");

    let inox = groups.iter().find(|g| g["theater"]["name"] == "INOX Megaplex").unwrap();
    assert_eq!(inox["showtimes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_showtime_for_unknown_movie_is_not_found() {
    let app = TestApp::new().await;
    let auth = app.signup("admin@example.com", "supersecret").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/showtimes")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "movie_id": "ghost", "theater_id": "ghost",
                "showtime": "06:30 PM", "price": 250.0, "available_seats": 40
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_seats_reconciles_status_inline() {
    let app = TestApp::new().await;
    let auth = app.signup("admin@example.com", "supersecret").await;
    let (movie_id, _, _) = app.seed_catalog(&auth, 40, 250.0, 40).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/movies/{}/seats", movie_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"available_seats": 0}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["available_seats"], 0);
    assert_eq!(body["availability_status"], "sold_out");
}
