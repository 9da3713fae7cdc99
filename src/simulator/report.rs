//! Simulation report generation.

use super::runner::RunStats;
use crate::sim::CrashCause;
use std::fmt;

/// Aggregated results from multiple runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        Self { runs }
    }

    pub fn avg_score(&self) -> f64 {
        mean(self.runs.iter().map(|r| r.score as f64))
    }

    pub fn avg_ticks(&self) -> f64 {
        mean(self.runs.iter().map(|r| r.ticks as f64))
    }

    pub fn best_score(&self) -> u32 {
        self.runs.iter().map(|r| r.score).max().unwrap_or(0)
    }

    pub fn count_crashes(&self, cause: CrashCause) -> usize {
        self.runs.iter().filter(|r| r.crash == Some(cause)).count()
    }

    pub fn timed_out(&self) -> usize {
        self.runs.iter().filter(|r| r.crash.is_none()).count()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Summary ({} runs) ===", self.runs.len())?;
        writeln!(f, "Average score:   {:.2}", self.avg_score())?;
        writeln!(f, "Best score:      {}", self.best_score())?;
        writeln!(f, "Average ticks:   {:.1}", self.avg_ticks())?;
        writeln!(
            f,
            "Crashes:         {} pipe, {} bounds",
            self.count_crashes(CrashCause::HitObstacle),
            self.count_crashes(CrashCause::OutOfBounds)
        )?;
        write!(f, "Timed out:       {}", self.timed_out())
    }
}
