//! Pipe obstacles: a gated barrier scrolling leftward.

use super::geometry::Rect;
use crate::config::Tuning;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A pipe pair with a single vertical opening.
///
/// The two collision volumes are computed from the current state on every
/// call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    pub width: f64,
    /// Vertical midpoint of the opening.
    pub gap_center: f64,
    pub gap_height: f64,
    /// Set once the pipe has been scored.
    pub passed: bool,
    speed: f64,
    screen_height: f64,
}

impl Obstacle {
    /// A new pipe at the right screen edge with a random gap center.
    ///
    /// The center is a whole pixel row drawn uniformly from
    /// [`Tuning::gap_center_range`], which a validated tuning keeps far
    /// enough from both edges for each volume to have non-negative height.
    pub fn spawn<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let (lo, hi) = tuning.gap_center_range();
        let (min_row, max_row) = (lo.ceil(), hi.floor());
        let gap_center = if max_row >= min_row {
            rng.gen_range(min_row as i64..=max_row as i64) as f64
        } else {
            (lo + hi) / 2.0
        };
        Self::with_gap(tuning, tuning.screen_width, gap_center)
    }

    /// A pipe at `x` with a chosen gap center.
    pub fn with_gap(tuning: &Tuning, x: f64, gap_center: f64) -> Self {
        Self {
            x,
            width: tuning.pipe_width,
            gap_center,
            gap_height: tuning.pipe_gap,
            passed: false,
            speed: tuning.pipe_speed,
            screen_height: tuning.screen_height,
        }
    }

    /// Scroll one tick to the left.
    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    fn half_gap(&self) -> f64 {
        self.gap_height / 2.0
    }

    /// Volume from the top of the screen down to the opening.
    pub fn upper(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_center - self.half_gap())
    }

    /// Volume from the bottom of the opening down to the screen bottom.
    pub fn lower(&self) -> Rect {
        let top = self.gap_center + self.half_gap();
        Rect::new(self.x, top, self.width, self.screen_height - top)
    }

    pub fn collides_with(&self, bounds: &Rect) -> bool {
        self.upper().intersects(bounds) || self.lower().intersects(bounds)
    }

    /// True once the whole pipe has scrolled past the left screen edge.
    pub fn is_off_screen(&self) -> bool {
        self.x < -self.width
    }
}
