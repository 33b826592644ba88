use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::{AppState, WizardSessions};
use crate::domain::services::auth_service::AuthService;
use crate::infra::payments::mock_gateway::MockPaymentGateway;
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_movie_repo::PostgresMovieRepo,
    postgres_showtime_repo::PostgresShowtimeRepo, postgres_theater_repo::PostgresTheaterRepo,
    postgres_user_repo::PostgresUserRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_movie_repo::SqliteMovieRepo,
    sqlite_showtime_repo::SqliteShowtimeRepo, sqlite_theater_repo::SqliteTheaterRepo,
    sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let auth_service = Arc::new(AuthService::new(config));
    let payment_gateway = Arc::new(MockPaymentGateway::new(Duration::from_millis(
        config.payment_processing_ms,
    )));
    let wizard_sessions = Arc::new(WizardSessions::new());

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            movie_repo: Arc::new(PostgresMovieRepo::new(pool.clone())),
            theater_repo: Arc::new(PostgresTheaterRepo::new(pool.clone())),
            showtime_repo: Arc::new(PostgresShowtimeRepo::new(pool.clone())),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            auth_service,
            payment_gateway,
            wizard_sessions,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            movie_repo: Arc::new(SqliteMovieRepo::new(pool.clone())),
            theater_repo: Arc::new(SqliteTheaterRepo::new(pool.clone())),
            showtime_repo: Arc::new(SqliteShowtimeRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            auth_service,
            payment_gateway,
            wizard_sessions,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
