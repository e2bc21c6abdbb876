pub mod cpu;
pub mod memory;

use avgbuf_core::{Sample, SampleSource};
use std::time::Duration;
use sysinfo::System;
use tokio::sync::mpsc;
use tokio::time;

/// Spawn a background Tokio task that reads `source` every `interval_ms`
/// milliseconds and forwards integer percent [`Sample`]s through the
/// returned channel.
///
/// `interval_ms` is not assumed to be validated: 0 is treated as 1 ms.
/// The task stops automatically when the receiver is dropped.
pub fn spawn_sampler(source: SampleSource, interval_ms: u64) -> mpsc::Receiver<Sample> {
    let (tx, rx) = mpsc::channel(4);
    let interval = Duration::from_millis(interval_ms.max(1));

    tokio::spawn(async move {
        let mut sys    = System::new();
        let mut ticker = time::interval(interval);

        // CPU usage is a delta between two refreshes; prime the first one.
        sys.refresh_cpu_usage();

        loop {
            ticker.tick().await;
            let sample = take_sample(&mut sys, source);
            tracing::trace!(%source, sample, "sampled");

            if tx.send(sample).await.is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}

/// Refresh only what `source` needs and convert it to a percent sample.
pub fn take_sample(sys: &mut System, source: SampleSource) -> Sample {
    match source {
        SampleSource::Cpu => {
            sys.refresh_cpu_usage();
            let per_core: Vec<f32> = sys.cpus().iter().map(|c| c.cpu_usage()).collect();
            cpu::usage_percent(&per_core)
        }
        SampleSource::Memory => {
            sys.refresh_memory();
            memory::used_percent(sys.used_memory(), sys.total_memory())
        }
    }
}

/// Total RAM, for the startup banner.
pub fn total_memory() -> u64 {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.total_memory()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_interval_still_samples() {
        let mut rx = spawn_sampler(SampleSource::Memory, 0);
        let sample = rx.recv().await.unwrap();
        assert!((0..=100).contains(&sample));
    }

    #[test]
    fn memory_sample_is_a_percent() {
        let mut sys = System::new();
        let sample = take_sample(&mut sys, SampleSource::Memory);
        assert!((0..=100).contains(&sample));
    }
}
