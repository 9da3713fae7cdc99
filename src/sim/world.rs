//! The simulation: owns the player, the pipes and the score, and advances
//! them one fixed tick at a time.
//!
//! `tick()` returns a [`TickResult`] describing what happened so the
//! presentation layer can react without the simulation knowing about it.

use super::geometry::Rect;
use super::obstacle::Obstacle;
use super::player::Player;
use crate::config::Tuning;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Commands forwarded from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flap while running, restart while game over.
    Flap,
    /// Terminate the process.
    Quit,
}

/// What the caller's loop should do after applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// The player left `[0, screen_height]` vertically.
    OutOfBounds,
    /// The player overlapped a pipe.
    HitObstacle,
}

/// A single event produced by a tick, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    ObstacleSpawned { gap_center: f64 },
    /// A pipe was passed; `score` is the new total.
    Scored { score: u32 },
    ObstacleRemoved,
    Crashed { cause: CrashCause },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
}

impl TickResult {
    pub fn crashed(&self) -> Option<CrashCause> {
        self.events.iter().find_map(|e| match e {
            TickEvent::Crashed { cause } => Some(*cause),
            _ => None,
        })
    }

    pub fn points_scored(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TickEvent::Scored { .. }))
            .count()
    }
}

/// Read model of one pipe for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleView {
    pub upper: Rect,
    pub lower: Rect,
    pub passed: bool,
}

/// Everything the presentation layer needs to draw a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldView {
    pub screen_width: f64,
    pub screen_height: f64,
    pub player: Rect,
    pub player_velocity: f64,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub game_over: bool,
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub player: Player,
    /// Active pipes in spawn order (left to right).
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: Phase,
    /// Timestamp of the most recent spawn (or of construction).
    pub last_spawn_ms: u64,
    /// Ticks advanced while running.
    pub ticks_survived: u64,
    tuning: Tuning,
}

impl Simulation {
    /// A fresh run. `now_ms` starts the spawn timer.
    pub fn new(tuning: Tuning, now_ms: u64) -> Self {
        Self {
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            score: 0,
            phase: Phase::Running,
            last_spawn_ms: now_ms,
            ticks_survived: 0,
            tuning,
        }
    }

    /// A fresh run with the same tuning, independent of this one.
    pub fn reset(&self, now_ms: u64) -> Simulation {
        Simulation::new(self.tuning.clone(), now_ms)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Apply one input command.
    pub fn apply(&mut self, command: Command, now_ms: u64) -> Control {
        match command {
            Command::Flap => {
                if self.is_game_over() {
                    debug!("restart after score {}", self.score);
                    *self = self.reset(now_ms);
                } else {
                    self.player.flap();
                }
                Control::Continue
            }
            Command::Quit => Control::Quit,
        }
    }

    /// Advance one tick. A game-over simulation is frozen and returns no events.
    pub fn tick<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> TickResult {
        let mut result = TickResult::default();
        if self.is_game_over() {
            return result;
        }
        self.ticks_survived += 1;

        self.player.apply_gravity_step();

        if now_ms.saturating_sub(self.last_spawn_ms) > self.tuning.spawn_interval_ms {
            let obstacle = Obstacle::spawn(&self.tuning, rng);
            debug!("spawned pipe with gap center {}", obstacle.gap_center);
            result.events.push(TickEvent::ObstacleSpawned {
                gap_center: obstacle.gap_center,
            });
            self.obstacles.push(obstacle);
            self.last_spawn_ms = now_ms;
        }

        self.advance_obstacles(&mut result);

        if let Some(cause) = self.detect_crash() {
            debug!(
                "crash ({:?}) at y={:.2} with score {}",
                cause, self.player.y, self.score
            );
            self.phase = Phase::GameOver;
            result.events.push(TickEvent::Crashed { cause });
        }

        result
    }

    /// Scroll every pipe, score the ones that just crossed the player, then
    /// drop those fully off screen.
    fn advance_obstacles(&mut self, result: &mut TickResult) {
        let player_x = self.player.x;
        for obstacle in &mut self.obstacles {
            obstacle.advance();
            if !obstacle.passed && obstacle.x < player_x {
                obstacle.passed = true;
                self.score += 1;
                debug!("score {}", self.score);
                result.events.push(TickEvent::Scored { score: self.score });
            }
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        for _ in self.obstacles.len()..before {
            result.events.push(TickEvent::ObstacleRemoved);
        }
    }

    fn detect_crash(&self) -> Option<CrashCause> {
        if self.player.y < 0.0 || self.player.y > self.tuning.screen_height {
            return Some(CrashCause::OutOfBounds);
        }
        let bounds = self.player.bounds();
        if self.obstacles.iter().any(|o| o.collides_with(&bounds)) {
            return Some(CrashCause::HitObstacle);
        }
        None
    }

    pub fn view(&self) -> WorldView {
        WorldView {
            screen_width: self.tuning.screen_width,
            screen_height: self.tuning.screen_height,
            player: self.player.bounds(),
            player_velocity: self.player.velocity,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    upper: o.upper(),
                    lower: o.lower(),
                    passed: o.passed,
                })
                .collect(),
            score: self.score,
            game_over: self.is_game_over(),
        }
    }
}
