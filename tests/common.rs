use cinema_backend::{
    api::router::create_router,
    state::{AppState, WizardSessions},
    config::Config,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_movie_repo::SqliteMovieRepo,
        sqlite_showtime_repo::SqliteShowtimeRepo,
        sqlite_theater_repo::SqliteTheaterRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    infra::payments::mock_gateway::MockPaymentGateway,
    domain::models::booking::{Booking, BookingStatus},
    domain::ports::{BookingRepository, PaymentGateway},
    domain::services::auth_service::AuthService,
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use async_trait::async_trait;
use tower::ServiceExt;
use serde_json::{json, Value};

/// Gateway double that always declines. Swapped in to exercise the
/// payment-failure path.
pub struct FailingPaymentGateway;

#[async_trait]
impl PaymentGateway for FailingPaymentGateway {
    async fn charge(&self, _booking_id: &str, _amount: f64) -> Result<String, AppError> {
        Err(AppError::InternalWithMsg("Card declined".to_string()))
    }
}

/// Booking store double whose status writes always fail while reads and
/// inserts go through to SQLite. Exercises the charge-landed-but-unrecorded
/// path.
pub struct BrokenStatusBookingRepo {
    inner: SqliteBookingRepo,
}

#[async_trait]
impl BookingRepository for BrokenStatusBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        self.inner.create(booking).await
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Booking>, AppError> {
        self.inner.find_by_id(user_id, id).await
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        self.inner.list_by_user(user_id).await
    }

    async fn update_status(
        &self,
        _id: &str,
        _status: BookingStatus,
        _payment_id: Option<&str>,
    ) -> Result<Booking, AppError> {
        Err(AppError::InternalWithMsg("Booking store unavailable".to_string()))
    }
}

pub struct AuthHeaders {
    pub access_token: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        // Zero processing delay keeps the payment step instant in tests.
        Self::with_gateway(Arc::new(MockPaymentGateway::new(Duration::ZERO))).await
    }

    pub async fn with_gateway(payment_gateway: Arc<dyn PaymentGateway>) -> Self {
        Self::build(payment_gateway, false).await
    }

    /// Same as `new`, but booking status writes fail.
    #[allow(dead_code)]
    pub async fn with_broken_booking_store() -> Self {
        Self::build(Arc::new(MockPaymentGateway::new(Duration::ZERO)), true).await
    }

    async fn build(payment_gateway: Arc<dyn PaymentGateway>, broken_status: bool) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret".to_string(),
            scheduler_interval_secs: 30,
            payment_processing_ms: 0,
        };

        let auth_service = Arc::new(AuthService::new(&config));

        let booking_repo: Arc<dyn BookingRepository> = if broken_status {
            Arc::new(BrokenStatusBookingRepo {
                inner: SqliteBookingRepo::new(pool.clone()),
            })
        } else {
            Arc::new(SqliteBookingRepo::new(pool.clone()))
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            movie_repo: Arc::new(SqliteMovieRepo::new(pool.clone())),
            theater_repo: Arc::new(SqliteTheaterRepo::new(pool.clone())),
            showtime_repo: Arc::new(SqliteShowtimeRepo::new(pool.clone())),
            booking_repo,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            auth_service,
            payment_gateway,
            wizard_sessions: Arc::new(WizardSessions::new()),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn signup(&self, email: &str, password: &str) -> AuthHeaders {
        let payload = json!({
            "email": email,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/signup")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Signup failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let access_token_cookie = cookies.iter()
            .find(|c| c.contains("access_token="))
            .expect("No access_token cookie returned");

        let start = access_token_cookie.find("access_token=").unwrap() + 13;
        let end = access_token_cookie[start..].find(';').unwrap_or(access_token_cookie.len() - start);
        let access_token = access_token_cookie[start..start+end].to_string();

        AuthHeaders { access_token }
    }

    /// Seeds a movie, a theater and one showtime; returns their ids.
    #[allow(dead_code)]
    pub async fn seed_catalog(
        &self,
        auth: &AuthHeaders,
        movie_seats: i32,
        showtime_price: f64,
        showtime_seats: i32,
    ) -> (String, String, String) {
        let movie = self.post_json(auth, "/api/v1/movies", json!({
            "title": "Interstellar",
            "poster_url": "https://example.com/interstellar.jpg",
            "rating": 8.6,
            "votes": "1.2M",
            "genres": ["Sci-Fi", "Drama"],
            "language": "English",
            "duration": "2h 49m",
            "available_seats": movie_seats
        })).await;
        let movie_id = movie["id"].as_str().unwrap().to_string();

        let theater = self.post_json(auth, "/api/v1/theaters", json!({
            "name": "PVR Phoenix",
            "location": "Lower Parel"
        })).await;
        let theater_id = theater["id"].as_str().unwrap().to_string();

        let showtime = self.post_json(auth, "/api/v1/showtimes", json!({
            "movie_id": movie_id,
            "theater_id": theater_id,
            "showtime": "06:30 PM",
            "price": showtime_price,
            "available_seats": showtime_seats
        })).await;
        let showtime_id = showtime["id"].as_str().unwrap().to_string();

        (movie_id, theater_id, showtime_id)
    }

    #[allow(dead_code)]
    pub async fn post_json(&self, auth: &AuthHeaders, uri: &str, payload: Value) -> Value {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::COOKIE, format!("access_token={}", auth.access_token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        if !status.is_success() {
            panic!("POST {} failed: {} {}", uri, status, String::from_utf8_lossy(&bytes));
        }
        serde_json::from_slice(&bytes).unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
