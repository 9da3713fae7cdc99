//! Game tuning.
//!
//! All gameplay constants live in [`Tuning`]. Defaults reproduce the
//! reference game; a TOML file may override any subset of keys at startup.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a tuning file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable constants, fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f64,
    pub screen_height: f64,
    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity the player is set to on flap. Must be negative (upward).
    pub flap_velocity: f64,
    pub player_size: f64,
    /// Horizontal distance a pipe moves left each tick.
    pub pipe_speed: f64,
    /// Height of the passable opening.
    pub pipe_gap: f64,
    pub pipe_width: f64,
    /// Gap centers are drawn from `[gap_margin, screen_height - gap_margin]`.
    pub gap_margin: f64,
    pub spawn_interval_ms: u64,
    pub tick_rate: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            player_size: PLAYER_SIZE,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            gap_margin: GAP_MARGIN,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            tick_rate: TICK_RATE,
        }
    }
}

impl Tuning {
    /// Load and validate a TOML tuning file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = toml::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every constraint the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("player_size", self.player_size)?;
        positive("pipe_width", self.pipe_width)?;
        positive("pipe_gap", self.pipe_gap)?;
        // Pipes only ever scroll left; removal depends on it.
        positive("pipe_speed", self.pipe_speed)?;

        if !self.gravity.is_finite() {
            return Err(invalid("gravity", "must be a finite number"));
        }
        if self.flap_velocity.is_nan() || self.flap_velocity >= 0.0 {
            return Err(invalid(
                "flap_velocity",
                format!("must be negative (upward), got {}", self.flap_velocity),
            ));
        }
        if self.spawn_interval_ms == 0 {
            return Err(invalid("spawn_interval_ms", "must be greater than zero"));
        }
        if self.tick_rate == 0 {
            return Err(invalid("tick_rate", "must be greater than zero"));
        }

        // Both collision volumes of every pipe need a non-negative height.
        let half_gap = self.pipe_gap / 2.0;
        if self.gap_margin.is_nan() || self.gap_margin < half_gap {
            return Err(invalid(
                "gap_margin",
                format!(
                    "must be at least half of pipe_gap ({}), got {}",
                    half_gap, self.gap_margin
                ),
            ));
        }
        if self.gap_margin > self.screen_height / 2.0 {
            return Err(invalid(
                "gap_margin",
                format!(
                    "must be at most half of screen_height ({}), got {}",
                    self.screen_height / 2.0,
                    self.gap_margin
                ),
            ));
        }

        Ok(())
    }

    /// Inclusive range gap centers are drawn from.
    pub fn gap_center_range(&self) -> (f64, f64) {
        (self.gap_margin, self.screen_height - self.gap_margin)
    }

}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {}", value)))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
