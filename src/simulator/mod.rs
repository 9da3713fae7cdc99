//! Headless autopilot runs for tuning analysis.
//!
//! Drives the same [`Simulation::tick`](crate::sim::Simulation::tick) the
//! interactive game uses, with a [`TickClock`](crate::clock::TickClock) and a
//! seeded RNG so every run is reproducible.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
