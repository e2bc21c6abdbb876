use serde::{Deserialize, Serialize};
use std::fmt;

/// Which system reading feeds the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SampleSource {
    /// Average CPU usage across all cores, in percent.
    #[default]
    Cpu,
    /// RAM in use, in percent of total.
    Memory,
}

impl fmt::Display for SampleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => f.write_str("cpu"),
            Self::Memory => f.write_str("memory"),
        }
    }
}
