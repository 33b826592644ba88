use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::auth::UserProfile;
use crate::domain::services::seating::SeatLayout;
use crate::domain::services::wizard::{BookingWizard, ShowtimeChoice};

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserProfile,
}

/// Snapshot of a wizard session, returned by every wizard endpoint so the
/// client always sees the full draft after a transition.
#[derive(Serialize)]
pub struct WizardStateResponse {
    pub session_id: String,
    pub step: &'static str,
    pub movie_id: String,
    pub showtime: Option<ShowtimeChoice>,
    pub seat_count: u32,
    pub selected_seats: Vec<String>,
    pub layout: Option<SeatLayout>,
    pub booking_id: Option<String>,
    pub payment_id: Option<String>,
    pub total_amount: f64,
}

impl WizardStateResponse {
    pub fn snapshot(session_id: &Uuid, wizard: &BookingWizard) -> Self {
        Self {
            session_id: session_id.to_string(),
            step: wizard.step().as_str(),
            movie_id: wizard.movie_id().to_string(),
            showtime: wizard.showtime().cloned(),
            seat_count: wizard.seat_count(),
            selected_seats: wizard.selected_seats().to_vec(),
            layout: wizard.layout().cloned(),
            booking_id: wizard.booking_id().map(str::to_string),
            payment_id: wizard.payment_id().map(str::to_string),
            total_amount: wizard.total_amount(),
        }
    }
}
