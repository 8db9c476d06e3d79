// Scan simulation - perturbs expiry day counts to exercise the pipeline
//
// There is no real network scanning here (and none in scope). The
// simulator produces a fresh certificate sequence with statuses already
// recomputed; callers swap it in whole, replace-on-complete.

use crate::certificates::{AlertThresholds, Certificate, recompute_all};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Chance that an individual certificate is touched by a scan pass
const PERTURB_PROBABILITY: f64 = 0.5;

/// Simulated certificate scan
///
/// Each pass gives every certificate a coin-flip chance of shifting its
/// remaining days by a small random amount (never below one day), then
/// reclassifies the whole sequence against the thresholds in force.
pub struct ScanSimulator {
    thresholds: AlertThresholds,
    rng: StdRng,
    delay: Duration,
}

impl ScanSimulator {
    /// Create a simulator with an OS-seeded generator
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self {
            thresholds,
            rng: StdRng::from_entropy(),
            delay: Duration::from_secs(2),
        }
    }

    /// Create a simulator with a fixed seed for reproducible runs
    pub fn with_seed(thresholds: AlertThresholds, seed: u64) -> Self {
        Self {
            thresholds,
            rng: StdRng::seed_from_u64(seed),
            delay: Duration::from_secs(2),
        }
    }

    /// Override the simulated scan delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Run one scan pass and return the fresh, fully classified sequence
    ///
    /// The input is never mutated; partial results are never observable.
    pub async fn scan(&mut self, certificates: &[Certificate]) -> Vec<Certificate> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let perturbed = self.perturb(certificates);
        recompute_all(&perturbed, &self.thresholds)
    }

    fn perturb(&mut self, certificates: &[Certificate]) -> Vec<Certificate> {
        certificates
            .iter()
            .map(|cert| {
                let mut cert = cert.clone();
                if self.rng.gen_bool(PERTURB_PROBABILITY) {
                    let shift = self.rng.gen_range(-5..5);
                    cert.days_until_expiry = (cert.days_until_expiry + shift).max(1);
                }
                cert
            })
            .collect()
    }
}
