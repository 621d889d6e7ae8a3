use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

// ============================================================================
// Failure Injection
// ============================================================================
//
// Chaos hook for the Transaction Logger. When enabled, every call has a fixed
// chance of failing before any processing happens. The toggle is a value
// handed to the service at construction, so each test owns its own injector.
//
// ============================================================================

/// Probability that an enabled injector fails a call.
pub const FAILURE_PROBABILITY: f64 = 0.5;

#[derive(Debug)]
pub struct FailureInjector {
    enabled: bool,
    rng: Mutex<StdRng>,
}

impl FailureInjector {
    /// Injector seeded from OS entropy.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Injector with a fixed seed, for reproducible chaos runs.
    pub fn seeded(enabled: bool, seed: u64) -> Self {
        Self {
            enabled,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the coin. Always false when disabled.
    pub fn should_fail(&self) -> bool {
        if !self.enabled {
            return false;
        }

        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_bool(FAILURE_PROBABILITY)
    }
}

impl Default for FailureInjector {
    fn default() -> Self {
        Self::disabled()
    }
}
