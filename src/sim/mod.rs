//! Deterministic game simulation.
//!
//! Pure state and rules only: no terminal, no clock reads, no ambient
//! randomness. Time and the random source are passed in by the caller.

pub mod autopilot;
pub mod geometry;
pub mod obstacle;
pub mod player;
pub mod world;

pub use autopilot::Autopilot;
pub use geometry::Rect;
pub use obstacle::Obstacle;
pub use player::Player;
pub use world::{
    Command, Control, CrashCause, ObstacleView, Phase, Simulation, TickEvent, TickResult,
    WorldView,
};
