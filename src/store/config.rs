use std::time::Duration;

// ============================================================================
// Order Store Configuration
// ============================================================================

/// Which status changes `update_status` accepts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Any status is written as requested
    #[default]
    Unrestricted,
    /// Only forward moves and cancellation of non-terminal orders
    ForwardOnly,
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Simulated backend latency applied to every operation
    pub latency: Duration,
    pub transition_policy: TransitionPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(300),
            transition_policy: TransitionPolicy::Unrestricted,
        }
    }
}

impl StoreConfig {
    /// No artificial delay; operations still yield once
    pub fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.transition_policy = policy;
        self
    }
}
