//! Simulation configuration.

use crate::config::Tuning;

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs; run `i` is seeded with `seed + i`.
    pub num_runs: u32,
    pub seed: u64,
    /// A run that survives this many ticks is stopped and counted as timed out.
    pub max_ticks_per_run: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 10,
            seed: 42,
            // Ten minutes of play at 60 ticks/s
            max_ticks_per_run: 36_000,
            tuning: Tuning::default(),
        }
    }
}
