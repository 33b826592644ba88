use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub scheduler_interval_secs: u64,
    pub payment_processing_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            scheduler_interval_secs: env::var("SCHEDULER_INTERVAL_SECS")
                .unwrap_or_else(|_| "30".to_string()).parse().expect("SCHEDULER_INTERVAL_SECS must be a number"),
            payment_processing_ms: env::var("PAYMENT_PROCESSING_MS")
                .unwrap_or_else(|_| "2000".to_string()).parse().expect("PAYMENT_PROCESSING_MS must be a number"),
        }
    }
}
