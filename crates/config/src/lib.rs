pub mod schema;

pub use schema::{AvgBufConfig, BufferConfig, MonitorConfig};

use avgbuf_core::{AvgBufError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `AvgBufConfig::default()` if
/// the file doesn't exist so the monitor always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<AvgBufConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(AvgBufConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| AvgBufError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate configuration text.
pub fn parse(raw: &str) -> Result<AvgBufConfig> {
    let config: AvgBufConfig =
        toml::from_str(raw).map_err(|e| AvgBufError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Return the default config path: `$AVGBUF_CONFIG` if set, otherwise under
/// `$XDG_CONFIG_HOME` (falling back to `~/.config`).
pub fn default_path() -> PathBuf {
    if let Ok(explicit) = std::env::var("AVGBUF_CONFIG") {
        return PathBuf::from(explicit);
    }
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("avgbuf").join("avgbuf.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use avgbuf_core::{QuarterStepping, SampleSource};

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, AvgBufConfig::default());
        assert_eq!(config.buffer.capacity, 60);
    }

    #[test]
    fn parses_full_config() {
        let config = parse(
            r#"
            [buffer]
            capacity = 16
            threshold = 40
            quarter_stepping = "legacy"

            [monitor]
            source = "memory"
            interval_ms = 250
            report_every = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.buffer.capacity, 16);
        assert_eq!(config.buffer.threshold, 40);
        assert_eq!(config.buffer.quarter_stepping, QuarterStepping::Legacy);
        assert_eq!(config.monitor.source, SampleSource::Memory);
        assert_eq!(config.monitor.interval_ms, 250);
        assert_eq!(config.monitor.report_every, 0);
    }

    #[test]
    fn zero_capacity_is_a_config_error() {
        let err = parse("[buffer]\ncapacity = 0").unwrap_err();
        assert!(matches!(err, AvgBufError::Config(_)));
    }

    #[test]
    fn negative_capacity_is_a_parse_error() {
        let err = parse("[buffer]\ncapacity = -4").unwrap_err();
        assert!(matches!(err, AvgBufError::Config(_)));
    }

    #[test]
    fn zero_interval_is_a_config_error() {
        assert!(parse("[monitor]\ninterval_ms = 0").is_err());
    }

    #[test]
    fn unknown_stepping_is_rejected() {
        assert!(parse("[buffer]\nquarter_stepping = \"sideways\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AvgBufConfig::default());
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avgbuf.toml");
        std::fs::write(&path, "[buffer]\nthreshold = 5\n").unwrap();
        let config = load(&path).unwrap();
        assert_eq!(config.buffer.threshold, 5);
        assert_eq!(config.buffer.capacity, 60);
    }
}
