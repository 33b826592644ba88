use std::time::Duration;

use async_trait::async_trait;
use rand::{distributions::Alphanumeric, Rng};
use tokio::time::sleep;
use tracing::info;

use crate::domain::ports::PaymentGateway;
use crate::error::AppError;

/// Simulated payment provider. Sleeps a fixed processing delay, then fabricates
/// a payment id of the form `PAY_{unix_millis}_{9 alphanumeric}`. The id is not
/// cryptographically meaningful and a retried charge produces a new one.
pub struct MockPaymentGateway {
    processing_delay: Duration,
}

impl MockPaymentGateway {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(&self, booking_id: &str, amount: f64) -> Result<String, AppError> {
        sleep(self.processing_delay).await;

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(9)
            .map(char::from)
            .collect();
        let payment_id = format!("PAY_{}_{}", chrono::Utc::now().timestamp_millis(), suffix);

        info!("Mock payment captured: {} for booking {} ({})", payment_id, booking_id, amount);
        Ok(payment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fabricates_prefixed_payment_ids() {
        let gateway = MockPaymentGateway::new(Duration::from_millis(0));
        let id = gateway.charge("b1", 500.0).await.unwrap();
        assert!(id.starts_with("PAY_"));
        assert_eq!(id.rsplit('_').next().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn retried_charge_mints_a_new_id() {
        let gateway = MockPaymentGateway::new(Duration::from_millis(0));
        let first = gateway.charge("b1", 500.0).await.unwrap();
        let second = gateway.charge("b1", 500.0).await.unwrap();
        assert_ne!(first, second);
    }
}
