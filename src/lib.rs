//! Flappy - a terminal arcade game library.
//!
//! The simulation (`sim`) is pure and deterministic given a random source
//! and timestamps; `ui` and `input` are the thin terminal layer around it.

pub mod build_info;
pub mod clock;
pub mod config;
pub mod constants;
pub mod input;
pub mod sim;
pub mod simulator;
pub mod ui;

pub use clock::{Clock, FrameLimiter, SystemClock, TickClock};
pub use config::{ConfigError, Tuning};
pub use sim::{
    Autopilot, Command, Control, CrashCause, Obstacle, Phase, Player, Simulation, TickEvent,
    TickResult, WorldView,
};
