//! The player-controlled bird.

use super::geometry::Rect;
use crate::config::Tuning;
use serde::{Deserialize, Serialize};

/// Player position, velocity and size.
///
/// Velocity only changes through [`Player::apply_gravity_step`] (additive)
/// or [`Player::flap`] (absolute overwrite).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Fixed horizontal position (left edge).
    pub x: f64,
    /// Vertical position of the top edge. Not clamped: leaving
    /// `[0, screen_height]` is how a crash is detected.
    pub y: f64,
    /// Vertical velocity (positive = downward).
    pub velocity: f64,
    pub size: f64,
    gravity: f64,
    flap_velocity: f64,
}

impl Player {
    /// A player at one third of the screen width, mid-screen, at rest.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: (tuning.screen_width / 3.0).floor(),
            y: (tuning.screen_height / 2.0).floor(),
            velocity: 0.0,
            size: tuning.player_size,
            gravity: tuning.gravity,
            flap_velocity: tuning.flap_velocity,
        }
    }

    /// Accrue gravity, then integrate position.
    pub fn apply_gravity_step(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;
    }

    /// Overwrite velocity with the upward impulse.
    pub fn flap(&mut self) {
        self.velocity = self.flap_velocity;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.size / 2.0
    }
}
