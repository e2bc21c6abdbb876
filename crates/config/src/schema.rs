use avgbuf_core::{AvgBufError, QuarterStepping, Result, SampleSource};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `avgbuf.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AvgBufConfig {
    /// Window shape and threshold.
    pub buffer: BufferConfig,
    /// Where samples come from and how often.
    pub monitor: MonitorConfig,
}

impl AvgBufConfig {
    /// Reject settings that would only fail later, once samples arrive.
    pub fn validate(&self) -> Result<()> {
        if self.buffer.capacity == 0 {
            return Err(AvgBufError::Config("buffer.capacity must be at least 1".into()));
        }
        if self.monitor.interval_ms == 0 {
            return Err(AvgBufError::Config("monitor.interval_ms must be at least 1".into()));
        }
        if self.buffer.capacity < 4 {
            tracing::warn!(
                capacity = self.buffer.capacity,
                "capacity below 4; quarter averages will be unavailable"
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Number of samples in the window.
    pub capacity: usize,
    /// Window average above which a notification is logged.
    pub threshold: i64,
    /// `"exact"` or `"legacy"` quarter walking.
    pub quarter_stepping: QuarterStepping,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: 60,
            threshold: 80,
            quarter_stepping: QuarterStepping::Exact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub source: SampleSource,
    /// Polling interval in milliseconds.
    pub interval_ms: u64,
    /// Log a stats line every N samples; 0 disables it.
    pub report_every: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            source: SampleSource::Cpu,
            interval_ms: 1000,
            report_every: 10,
        }
    }
}
