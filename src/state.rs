use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, MovieRepository, PaymentGateway, ShowtimeRepository,
    TheaterRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::wizard::BookingWizard;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub movie_repo: Arc<dyn MovieRepository>,
    pub theater_repo: Arc<dyn TheaterRepository>,
    pub showtime_repo: Arc<dyn ShowtimeRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_service: Arc<AuthService>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub wizard_sessions: Arc<WizardSessions>,
}

/// In-process wizard session store. Drafts live only in memory for the
/// duration of a session, exactly as the storefront kept them in component
/// state; a restart discards them all.
///
/// The lock is only ever held inside a synchronous closure, never across an
/// await, so handlers interleave store calls between wizard transitions.
#[derive(Default)]
pub struct WizardSessions {
    sessions: Mutex<HashMap<Uuid, BookingWizard>>,
}

impl WizardSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, wizard: BookingWizard) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.lock().map_err(|_| AppError::Internal)?;
        sessions.insert(id, wizard);
        Ok(id)
    }

    /// Runs `f` against the session, propagating its result. Missing sessions
    /// are a 404.
    pub fn with<T>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut BookingWizard) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.sessions.lock().map_err(|_| AppError::Internal)?;
        let wizard = sessions
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound("Wizard session not found".into()))?;
        f(wizard)
    }

    pub fn remove(&self, id: &Uuid) -> Result<(), AppError> {
        let mut sessions = self.sessions.lock().map_err(|_| AppError::Internal)?;
        sessions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Wizard session not found".into()))
    }
}
