//! Runs the autopilot against the real simulation and collects statistics
//! from each tick's events.

use super::config::SimConfig;
use super::report::SimReport;
use crate::clock::{Clock, TickClock};
use crate::config::Tuning;
use crate::sim::{Autopilot, Command, CrashCause, Simulation, TickEvent};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    pub flaps: u64,
    pub pipes_spawned: u64,
    /// `None` if the run hit the tick limit.
    pub crash: Option<CrashCause>,
}

/// Run every configured seed and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let runs = (0..config.num_runs)
        .map(|i| {
            simulate_single_run(
                &config.tuning,
                config.seed.wrapping_add(i as u64),
                config.max_ticks_per_run,
            )
        })
        .collect();
    SimReport::from_runs(runs)
}

/// Play one game with the autopilot until it crashes or `max_ticks` pass.
pub fn simulate_single_run(tuning: &Tuning, seed: u64, max_ticks: u64) -> RunStats {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut clock = TickClock::new(tuning.tick_rate);
    let autopilot = Autopilot::new(tuning);
    let mut sim = Simulation::new(tuning.clone(), clock.now_ms());

    let mut stats = RunStats {
        seed,
        score: 0,
        ticks: 0,
        flaps: 0,
        pipes_spawned: 0,
        crash: None,
    };

    while stats.ticks < max_ticks {
        if autopilot.decide(&sim.view()) {
            sim.apply(Command::Flap, clock.now_ms());
            stats.flaps += 1;
        }

        clock.advance();
        let result = sim.tick(clock.now_ms(), &mut rng);
        stats.ticks += 1;

        for event in &result.events {
            match event {
                TickEvent::ObstacleSpawned { .. } => stats.pipes_spawned += 1,
                TickEvent::Crashed { cause } => stats.crash = Some(*cause),
                TickEvent::Scored { .. } | TickEvent::ObstacleRemoved => {}
            }
        }
        if stats.crash.is_some() {
            break;
        }
    }

    stats.score = sim.score;
    debug!(
        "run seed={} score={} ticks={} crash={:?}",
        seed, stats.score, stats.ticks, stats.crash
    );
    stats
}
