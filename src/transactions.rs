use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::sleep;
use crate::constants::{OG_SUBMIT_LATENCY_MILLIS, SUBMIT_LATENCY_MILLIS};
use crate::mint::{MintError, MintRequest, MintVariant};

/// Outcome the simulated chain resolves every submission to.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulatedOutcome {
    Success,
    Failure(String),
}

/// Stand-in for the transaction submission collaborator. The reviewed
/// site never builds a real transaction: a submission is a delay followed
/// by a success or failure, so this executor sleeps for the configured
/// latency and resolves to the configured outcome, handing back a
/// synthetic digest in place of the quorum driver's.
#[derive(Clone)]
pub struct MintSubmitter {
    latency: Duration,
    og_latency: Duration,
    outcome: SimulatedOutcome,
    sequence: Arc<AtomicU64>,
}

impl MintSubmitter {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(SUBMIT_LATENCY_MILLIS),
            og_latency: Duration::from_millis(OG_SUBMIT_LATENCY_MILLIS),
            outcome: SimulatedOutcome::Success,
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self.og_latency = latency;
        self
    }

    pub fn with_outcome(mut self, outcome: SimulatedOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Submissions started so far; also seeds the synthetic digests.
    pub fn submissions(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, request: &MintRequest) -> Result<String, MintError> {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        let latency = match request.variant() {
            MintVariant::Custom => self.og_latency,
            _ => self.latency,
        };
        sleep(latency).await;

        match &self.outcome {
            SimulatedOutcome::Success => Ok(format!("SIMTX{:08}", sequence)),
            SimulatedOutcome::Failure(reason) => Err(MintError::Submission(reason.clone())),
        }
    }
}

impl Default for MintSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_returns_unique_digests() {
        let submitter = MintSubmitter::new().with_latency(Duration::from_millis(1));
        let first = submitter
            .submit(&MintRequest::Standard { quantity: 1 })
            .await
            .unwrap();
        let second = submitter
            .submit(&MintRequest::Standard { quantity: 2 })
            .await
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(submitter.submissions(), 2);
    }

    #[tokio::test]
    async fn test_submit_reports_configured_failure() {
        let submitter = MintSubmitter::new()
            .with_latency(Duration::from_millis(1))
            .with_outcome(SimulatedOutcome::Failure("out of gas".to_string()));
        let result = submitter
            .submit(&MintRequest::Named { name: "Nova".to_string() })
            .await;
        assert_eq!(result, Err(MintError::Submission("out of gas".to_string())));
    }

    #[tokio::test]
    async fn test_clones_share_the_digest_sequence() {
        let submitter = MintSubmitter::new().with_latency(Duration::from_millis(1));
        let clone = submitter.clone();
        clone
            .submit(&MintRequest::Standard { quantity: 1 })
            .await
            .unwrap();
        assert_eq!(submitter.submissions(), 1);
    }
}
