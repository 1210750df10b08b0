//! Submission gateways for the contact form
//!
//! The form never talks to a transport directly; it hands a validated
//! [`ContactSubmission`] to whatever [`SubmissionGateway`] the site provides.

use async_trait::async_trait;
use std::rc::Rc;
use thiserror::Error;

use super::types::ContactSubmission;
use crate::console_info;
use crate::utils::platform::delay_ms;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Submission rejected: {reason}")]
    Rejected { reason: String },
}

impl SubmissionError {
    /// Transport failures may succeed on a resubmit; rejections will not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::Transport { .. })
    }
}

/// Capability to deliver a contact message somewhere.
#[async_trait(?Send)]
pub trait SubmissionGateway {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmissionError>;

    fn name(&self) -> &'static str;
}

pub type SharedGateway = Rc<dyn SubmissionGateway>;

/// Gateway with no backend: waits out a fixed latency and reports success.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency_ms: u32,
}

impl SimulatedGateway {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

#[async_trait(?Send)]
impl SubmissionGateway for SimulatedGateway {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        console_info!(
            "[SimulatedGateway] Holding message from {} {} for {}ms",
            submission.first_name,
            submission.last_name,
            self.latency_ms
        );
        delay_ms(self.latency_ms).await;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: "647-971-6235".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, I would like to connect.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_simulated_gateway_always_succeeds() {
        let gateway = SimulatedGateway::new(0);
        assert_eq!(gateway.send(&submission()).await, Ok(()));
        assert_eq!(gateway.name(), "simulated");
    }

    #[tokio::test]
    async fn test_simulated_gateway_waits_for_latency() {
        let gateway = SimulatedGateway::new(20);
        let started = std::time::Instant::now();
        gateway.send(&submission()).await.unwrap();
        assert!(started.elapsed() >= std::time::Duration::from_millis(20));
    }

    #[test]
    fn test_retryable_classification() {
        assert!(SubmissionError::Transport {
            message: "offline".to_string()
        }
        .is_retryable());
        assert!(!SubmissionError::Rejected {
            reason: "spam".to_string()
        }
        .is_retryable());
    }
}
