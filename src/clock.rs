//! Time sources and the fixed-rate frame limiter.
//!
//! The simulation never reads time on its own. Callers sample a [`Clock`]
//! and pass the millisecond timestamp into each tick.

use std::time::{Duration, Instant};

/// A monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds elapsed since this clock's origin.
    fn now_ms(&self) -> u64;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Time derived from a tick counter, for headless runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    ticks: u64,
    tick_rate: u32,
}

impl TickClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            ticks: 0,
            tick_rate: tick_rate.max(1),
        }
    }

    /// Move time forward by one tick.
    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Clock for TickClock {
    fn now_ms(&self) -> u64 {
        self.ticks * 1000 / self.tick_rate as u64
    }
}

/// Sleeps until the next tick boundary at a fixed rate.
///
/// A late frame does not trigger catch-up: the next boundary is scheduled
/// one period after the moment the late wait returned.
#[derive(Debug)]
pub struct FrameLimiter {
    period: Duration,
    next_frame: Instant,
}

impl FrameLimiter {
    pub fn new(tick_rate: u32) -> Self {
        let period = Duration::from_secs(1) / tick_rate.max(1);
        Self {
            period,
            next_frame: Instant::now() + period,
        }
    }

    /// Block until the next tick boundary.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
            self.next_frame += self.period;
        } else {
            self.next_frame = now + self.period;
        }
    }
}
