use serde::{Deserialize, Serialize};

/// A point-in-time view of a buffer's averages.
///
/// Averages that cannot be computed yet (no samples, window too small for a
/// quarter) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferStats {
    /// Number of slots in the window.
    pub capacity: usize,
    /// Average above which the threshold handler fires.
    pub threshold: i64,
    /// Slots written at least once.
    pub filled: usize,
    /// Index of the next slot to be written.
    pub cursor: usize,
    /// Window average, zero-filled slots included.
    pub average: f64,
    pub lifetime_average: Option<f64>,
    pub most_recent_quarter: Option<f64>,
    pub oldest_quarter: Option<f64>,
}

impl BufferStats {
    #[must_use]
    pub fn is_above_threshold(&self) -> bool {
        self.average > self.threshold as f64
    }

    /// Fraction of the window that holds written samples, in `[0, 1]`.
    #[must_use]
    pub fn fill_fraction(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.filled as f64 / self.capacity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> BufferStats {
        BufferStats {
            capacity: 8,
            threshold: 50,
            filled: 2,
            cursor: 2,
            average: 12.5,
            lifetime_average: Some(50.0),
            most_recent_quarter: Some(50.0),
            oldest_quarter: None,
        }
    }

    #[test]
    fn fill_fraction_of_partial_window() {
        assert_eq!(sample_stats().fill_fraction(), 0.25);
    }

    #[test]
    fn diluted_average_is_below_threshold() {
        assert!(!sample_stats().is_above_threshold());
    }

    #[test]
    fn serializes_missing_averages_as_null() {
        let json = serde_json::to_value(sample_stats()).unwrap();
        assert_eq!(json["capacity"], 8);
        assert!(json["oldest_quarter"].is_null());
    }
}
