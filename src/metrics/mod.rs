use log::{info, warn};
use std::time::Duration;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::error::{MonitorError, Result};

mod history;
pub mod sampler;

pub use history::*;

/// One processor-utilization reading, in whole percent.
pub type Sample = i32;

/// Number of samples kept on screen.
pub const HISTORY_LEN: usize = 40;

/// Time between two samples.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(1000);

/// Something that can report how busy the processors are right now.
pub trait CpuSource {
    /// Current total processor utilization, in percent.
    fn total_usage(&mut self) -> f32;
}

/// Drops the fractional part of a raw reading.
///
/// Out-of-range readings are passed through unchanged; NaN becomes 0.
pub fn to_sample(raw: f32) -> Sample {
    if !(0.0..=100.0).contains(&raw) {
        warn!("cpu reading {raw} is outside 0..=100, storing it as-is");
    }
    raw as Sample
}

/// [`CpuSource`] backed by the operating system counters exposed by `sysinfo`.
///
/// `sysinfo` takes its first cpu refresh in [`SystemCpu::new`]. Each reading
/// is the usage since the previous refresh, so the first one covers the time
/// since construction and is only meaningful once at least
/// [`sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`] has passed.
#[derive(Debug)]
pub struct SystemCpu {
    system: System,
}

impl SystemCpu {
    pub fn new() -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MonitorError::Unsupported(std::env::consts::OS));
        }

        let system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );
        info!("reading cpu usage from {} logical cpus", system.cpus().len());

        Ok(Self { system })
    }
}

impl CpuSource for SystemCpu {
    fn total_usage(&mut self) -> f32 {
        self.system.refresh_cpu_usage();
        self.system.global_cpu_usage()
    }
}
