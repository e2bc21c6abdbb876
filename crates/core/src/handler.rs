/// Receives a notification whenever the window average rises above the
/// configured threshold right after a write.
///
/// Called synchronously from [`SampleRingBuffer::add_sample`]; the write that
/// triggered it has already been applied. Implementations should return
/// promptly, since `add_sample` does not return until they do.
///
/// [`SampleRingBuffer::add_sample`]: crate::SampleRingBuffer::add_sample
pub trait ThresholdHandler {
    /// `average` is the window average rounded to the nearest integer.
    fn on_threshold_exceeded(&mut self, average: i64, threshold: i64);
}

impl<F> ThresholdHandler for F
where
    F: FnMut(i64, i64),
{
    fn on_threshold_exceeded(&mut self, average: i64, threshold: i64) {
        self(average, threshold)
    }
}

/// Ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHandler;

impl ThresholdHandler for NoopHandler {
    fn on_threshold_exceeded(&mut self, _average: i64, _threshold: i64) {}
}

/// Emits a `tracing` warning for each notification and counts them.
#[derive(Debug, Default, Clone)]
pub struct LogHandler {
    label: String,
    fired: u64,
}

impl LogHandler {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fired: 0,
        }
    }

    /// Number of notifications received so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }
}

impl ThresholdHandler for LogHandler {
    fn on_threshold_exceeded(&mut self, average: i64, threshold: i64) {
        self.fired += 1;
        tracing::warn!(
            source = %self.label,
            average,
            threshold,
            "window average above threshold"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_handlers() {
        let mut seen = Vec::new();
        {
            let mut handler = |avg: i64, thr: i64| seen.push((avg, thr));
            handler.on_threshold_exceeded(12, 10);
        }
        assert_eq!(seen, vec![(12, 10)]);
    }

    #[test]
    fn log_handler_counts_notifications() {
        let mut handler = LogHandler::new("cpu");
        handler.on_threshold_exceeded(90, 80);
        handler.on_threshold_exceeded(95, 80);
        assert_eq!(handler.fired(), 2);
    }
}
