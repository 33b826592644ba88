use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Theater {
    pub id: String,
    pub name: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl Theater {
    pub fn new(name: String, location: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            location,
            created_at: Utc::now(),
        }
    }
}
