use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, info_span, Instrument};

use crate::domain::services::availability::next_availability_status;
use crate::error::AppError;
use crate::state::AppState;

/// Periodically reconciles each movie's availability status against its
/// remaining seat count. Replaces the storefront's client-side interval
/// timer with a server-side worker that can be started and stopped.
pub struct AvailabilityScheduler {
    state: Arc<AppState>,
    interval: Duration,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl AvailabilityScheduler {
    pub fn new(state: Arc<AppState>, interval: Duration) -> Self {
        Self {
            state,
            interval,
            handle: Mutex::new(None),
        }
    }

    /// Spawns the sweep loop. Calling start on a running scheduler is a no-op.
    pub async fn start(&self) {
        let mut handle = self.handle.lock().await;
        if handle.is_some() {
            return;
        }

        info!(interval_secs = self.interval.as_secs(), "Starting availability scheduler");

        let state = self.state.clone();
        let interval = self.interval;

        *handle = Some(tokio::spawn(async move {
            loop {
                let span = info_span!("availability_sweep");
                async {
                    match sweep_availability(&state).await {
                        Ok(0) => {}
                        Ok(updated) => info!("Updated availability status for {} movies", updated),
                        Err(e) => error!("Availability sweep failed: {:?}", e),
                    }
                }
                .instrument(span)
                .await;

                tokio::time::sleep(interval).await;
            }
        }));
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.lock().await;
        if let Some(handle) = handle.take() {
            handle.abort();
            info!("Stopped availability scheduler");
        }
    }
}

/// Runs one reconciliation pass and returns how many movies changed status.
pub async fn sweep_availability(state: &AppState) -> Result<usize, AppError> {
    let movies = state.movie_repo.list().await?;
    let mut updated = 0;

    for movie in movies {
        if let Some(status) = next_availability_status(movie.available_seats, &movie.availability_status) {
            state
                .movie_repo
                .update_availability_status(&movie.id, status)
                .await?;
            info!(
                movie_id = %movie.id,
                from = %movie.availability_status,
                to = %status,
                "Movie availability changed"
            );
            updated += 1;
        }
    }

    Ok(updated)
}
