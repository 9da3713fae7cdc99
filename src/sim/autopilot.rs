//! A simple flap policy used by the headless simulator and demo mode.
//!
//! It aims for the opening of the nearest pipe still ahead of the player and
//! flaps when the bird is about to sink onto the lower pipe.

use super::world::WorldView;
use crate::config::Tuning;

/// How far above the lower pipe the bird's bottom edge is allowed to sink.
const FLOOR_CLEARANCE: f64 = 8.0;

/// Fraction of the screen height used as the floor when no pipe is ahead.
const IDLE_FLOOR: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct Autopilot {
    gravity: f64,
}

impl Autopilot {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            gravity: tuning.gravity,
        }
    }

    /// Top of the lower pipe the bird must stay above right now.
    pub fn floor(&self, view: &WorldView) -> f64 {
        view.obstacles
            .iter()
            .find(|o| o.lower.right() > view.player.left())
            .map(|o| o.lower.top())
            .unwrap_or(view.screen_height * IDLE_FLOOR)
    }

    /// Whether to flap this tick.
    pub fn decide(&self, view: &WorldView) -> bool {
        if view.game_over || view.player_velocity < 0.0 {
            return false;
        }
        let next_bottom = view.player.bottom() + view.player_velocity + self.gravity;
        next_bottom >= self.floor(view) - FLOOR_CLEARANCE
    }
}
