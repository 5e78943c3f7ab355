//! The once-a-second "sample, record, redraw" cycle.
//!
//! Nothing here owns a timer or a window. The caller asks a [`Scheduler`]
//! whether a tick is due and, if so, hands [`tick`] everything it touches.

use super::{to_sample, CpuHistory, CpuSource, Sample};
use log::debug;
use std::time::{Duration, Instant};

/// Decides when the next tick should run.
pub trait Scheduler {
    /// Returns `true` if a tick should run at `now`. A `true` answer starts
    /// the next period.
    fn is_due(&mut self, now: Instant) -> bool;

    /// Time left until the next tick is due, measured from `now`.
    fn remaining(&self, now: Instant) -> Duration;
}

/// Fires once every `interval`. The first period starts when the scheduler
/// is created, so the first tick comes one interval later.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    interval: Duration,
    last_tick: Instant,
}

impl IntervalScheduler {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_tick: start,
        }
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(super::SAMPLE_INTERVAL)
    }
}

impl Scheduler for IntervalScheduler {
    fn is_due(&mut self, now: Instant) -> bool {
        let due = now.saturating_duration_since(self.last_tick) >= self.interval;
        if due {
            self.last_tick = now;
        }
        due
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}

/// Where the recorded samples get drawn.
pub trait ChartSurface {
    /// Removes every displayed point.
    fn clear(&mut self);

    /// Adds a point after the ones already displayed.
    fn append(&mut self, index: usize, value: Sample);
}

/// Replaces everything on `surface` with the samples in `history`.
///
/// Every point is appended with index 0; positioning is left to the surface.
pub fn redraw(history: &CpuHistory, surface: &mut dyn ChartSurface) {
    surface.clear();
    for value in history.snapshot() {
        surface.append(0, value);
    }
}

/// Runs one tick: reads the source, records the reading and redraws.
///
/// Returns the recorded sample.
pub fn tick(
    source: &mut dyn CpuSource,
    history: &mut CpuHistory,
    surface: &mut dyn ChartSurface,
) -> Sample {
    let sample = to_sample(source.total_usage());
    history.record(sample);
    debug!("cpu {sample}%");

    redraw(history, surface);
    sample
}
