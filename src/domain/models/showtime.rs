use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::theater::Theater;

/// One screening of a movie at a theater. The showtime itself is an opaque
/// display label ("06:30 PM"); the storefront never does arithmetic on it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Showtime {
    pub id: String,
    pub movie_id: String,
    pub theater_id: String,
    pub showtime: String,
    pub price: f64,
    pub available_seats: i32,
    pub created_at: DateTime<Utc>,
}

pub struct NewShowtimeParams {
    pub movie_id: String,
    pub theater_id: String,
    pub showtime: String,
    pub price: f64,
    pub available_seats: i32,
}

impl Showtime {
    pub fn new(params: NewShowtimeParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            movie_id: params.movie_id,
            theater_id: params.theater_id,
            showtime: params.showtime,
            price: params.price,
            available_seats: params.available_seats,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct TheaterShowtimes {
    pub theater: Theater,
    pub showtimes: Vec<Showtime>,
}

/// Groups a movie's showtimes by theater, preserving the incoming showtime
/// order within each group. Theaters appear in first-seen order; showtimes
/// whose theater is unknown are dropped.
pub fn group_showtimes_by_theater(
    showtimes: Vec<Showtime>,
    theaters: &[Theater],
) -> Vec<TheaterShowtimes> {
    let mut grouped: Vec<TheaterShowtimes> = Vec::new();

    for st in showtimes {
        if let Some(group) = grouped.iter_mut().find(|g| g.theater.id == st.theater_id) {
            group.showtimes.push(st);
        } else if let Some(theater) = theaters.iter().find(|t| t.id == st.theater_id) {
            grouped.push(TheaterShowtimes {
                theater: theater.clone(),
                showtimes: vec![st],
            });
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showtime(theater_id: &str, label: &str) -> Showtime {
        Showtime::new(NewShowtimeParams {
            movie_id: "m1".to_string(),
            theater_id: theater_id.to_string(),
            showtime: label.to_string(),
            price: 250.0,
            available_seats: 40,
        })
    }

    #[test]
    fn groups_by_theater_preserving_order() {
        let theaters = vec![
            Theater::new("PVR Phoenix".to_string(), "Lower Parel".to_string()),
            Theater::new("INOX Megaplex".to_string(), "Malad".to_string()),
        ];
        let t1 = theaters[0].id.clone();
        let t2 = theaters[1].id.clone();

        let grouped = group_showtimes_by_theater(
            vec![showtime(&t1, "10:00 AM"), showtime(&t2, "01:15 PM"), showtime(&t1, "06:30 PM")],
            &theaters,
        );

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].theater.id, t1);
        assert_eq!(grouped[0].showtimes.len(), 2);
        assert_eq!(grouped[0].showtimes[1].showtime, "06:30 PM");
        assert_eq!(grouped[1].showtimes.len(), 1);
    }

    #[test]
    fn drops_showtimes_with_unknown_theater() {
        let theaters = vec![Theater::new("PVR".to_string(), "Pune".to_string())];
        let grouped = group_showtimes_by_theater(vec![showtime("ghost", "10:00 AM")], &theaters);
        assert!(grouped.is_empty());
    }
}
