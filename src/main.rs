//! avgbuf — feeds periodic system readings into a sample ring buffer and
//! reports when the window average crosses a threshold.
//!
//! Run with:  `RUST_LOG=info avgbuf [CONFIG_PATH]`

use anyhow::{Context, Result};
use avgbuf_core::{BufferBuilder, LogHandler, SampleRingBuffer};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("avgbuf v{} starting", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(avgbuf_config::default_path);
    let config = avgbuf_config::load(&path)?;

    let source = config.monitor.source;
    let mut buffer = BufferBuilder::new(config.buffer.capacity, config.buffer.threshold)
        .quarter_stepping(config.buffer.quarter_stepping)
        .build(LogHandler::new(source.to_string()))?;

    tracing::info!(
        %source,
        capacity = buffer.capacity(),
        threshold = buffer.threshold(),
        interval_ms = config.monitor.interval_ms,
        total_memory = %avgbuf_system::memory::format_bytes(avgbuf_system::total_memory()),
        "monitoring"
    );

    let mut samples = avgbuf_system::spawn_sampler(source, config.monitor.interval_ms);
    let mut received: u64 = 0;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            sample = samples.recv() => {
                let Some(sample) = sample else {
                    tracing::warn!("sampler stopped");
                    break;
                };
                buffer.add_sample(sample);
                received += 1;

                let every = config.monitor.report_every;
                if every > 0 && received % every == 0 {
                    report(&buffer)?;
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("interrupted");
                break;
            }
        }
    }

    report(&buffer)?;
    tracing::info!(
        notifications = buffer.handler().fired(),
        samples = received,
        "shutting down"
    );
    Ok(())
}

fn report(buffer: &SampleRingBuffer<LogHandler>) -> Result<()> {
    let stats = buffer.stats();
    let json = serde_json::to_string(&stats).context("serialising stats")?;
    tracing::info!(
        fill = %format!("{:.0}%", stats.fill_fraction() * 100.0),
        above_threshold = stats.is_above_threshold(),
        stats = %json,
        "window"
    );
    Ok(())
}
