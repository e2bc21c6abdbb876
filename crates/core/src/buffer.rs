use crate::{
    error::{AvgBufError, Result},
    handler::ThresholdHandler,
    ring::RingIndex,
    stats::BufferStats,
};
use serde::{Deserialize, Serialize};
use std::iter;

/// A single measurement stored in the buffer.
pub type Sample = i32;

/// How the quarter averages pick their first slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuarterStepping {
    /// Most-recent quarter starts at the slot just before the cursor and
    /// walks backward; oldest quarter starts at the cursor and walks forward.
    #[default]
    Exact,
    /// Both walks step once before their first read and that first step is
    /// always forward, so the first slot read is the one just after the
    /// cursor. Kept for compatibility with readings taken by older tooling.
    Legacy,
}

/// Fixed-capacity ring of integer samples with running averages.
///
/// The window average always divides by `capacity`, so slots that were never
/// written (or were cleared) count as zero. A separate lifetime sum/count pair
/// covers every sample ever added and is unaffected by eviction.
#[derive(Debug)]
pub struct SampleRingBuffer<H> {
    samples: Vec<Sample>,
    cursor: RingIndex,
    filled: usize,
    lifetime_sum: i128,
    lifetime_count: u64,
    threshold: i64,
    stepping: QuarterStepping,
    handler: H,
}

/// Collects optional settings before a [`SampleRingBuffer`] is built.
#[derive(Debug, Clone, Copy)]
pub struct BufferBuilder {
    capacity: usize,
    threshold: i64,
    stepping: QuarterStepping,
}

impl BufferBuilder {
    pub fn new(capacity: usize, threshold: i64) -> Self {
        Self {
            capacity,
            threshold,
            stepping: QuarterStepping::default(),
        }
    }

    pub fn quarter_stepping(mut self, stepping: QuarterStepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// Validate the capacity, allocate the zeroed slots and attach `handler`.
    pub fn build<H: ThresholdHandler>(self, handler: H) -> Result<SampleRingBuffer<H>> {
        let capacity = self.capacity;
        let cursor = RingIndex::new(capacity).ok_or(AvgBufError::InvalidCapacity(capacity))?;

        let mut samples = Vec::new();
        samples
            .try_reserve_exact(capacity)
            .map_err(|_| AvgBufError::Allocation { capacity })?;
        samples.resize(capacity, 0);

        Ok(SampleRingBuffer {
            samples,
            cursor,
            filled: 0,
            lifetime_sum: 0,
            lifetime_count: 0,
            threshold: self.threshold,
            stepping: self.stepping,
            handler,
        })
    }
}

impl<H: ThresholdHandler> SampleRingBuffer<H> {
    /// Create a zero-filled buffer using [`QuarterStepping::Exact`].
    ///
    /// Fails with [`AvgBufError::InvalidCapacity`] for `capacity == 0` and
    /// with [`AvgBufError::Allocation`] if the slots cannot be reserved.
    pub fn new(capacity: usize, threshold: i64, handler: H) -> Result<Self> {
        BufferBuilder::new(capacity, threshold).build(handler)
    }

    /// Write `value` at the cursor, advance, update the lifetime totals, then
    /// notify the handler if the window average is now strictly above the
    /// threshold.
    pub fn add_sample(&mut self, value: Sample) {
        self.samples[self.cursor.get()] = value;
        self.cursor = self.cursor.next();

        self.lifetime_sum += i128::from(value);
        self.lifetime_count += 1;
        if self.filled < self.samples.len() {
            self.filled += 1;
        }

        let average = self.average();
        if average > self.threshold as f64 {
            tracing::debug!(average, threshold = self.threshold, "threshold exceeded");
            self.handler
                .on_threshold_exceeded(average.round() as i64, self.threshold);
        }
    }

    /// Mean over every slot, unwritten ones included.
    pub fn average(&self) -> f64 {
        let sum: i64 = self.samples.iter().map(|&s| i64::from(s)).sum();
        sum as f64 / self.samples.len() as f64
    }

    /// Mean over every sample ever added (since construction or [`reset`]).
    ///
    /// [`reset`]: Self::reset
    pub fn lifetime_average(&self) -> Result<f64> {
        if self.lifetime_count == 0 {
            return Err(AvgBufError::NoSamplesYet);
        }
        Ok(self.lifetime_sum as f64 / self.lifetime_count as f64)
    }

    /// Mean of the `capacity / 4` most recently written slots.
    pub fn most_recent_quarter_average(&self) -> Result<f64> {
        let quarter = self.checked_quarter()?;
        let start = match self.stepping {
            QuarterStepping::Exact => self.cursor.prev(),
            QuarterStepping::Legacy => self.cursor.next(),
        };
        Ok(self.walk_average(start, quarter, RingIndex::prev))
    }

    /// Mean of the `capacity / 4` least recently written slots.
    pub fn oldest_quarter_average(&self) -> Result<f64> {
        let quarter = self.checked_quarter()?;
        let start = match self.stepping {
            QuarterStepping::Exact => self.cursor,
            QuarterStepping::Legacy => self.cursor.next(),
        };
        Ok(self.walk_average(start, quarter, RingIndex::next))
    }

    /// Zero every slot. The cursor, fill count and lifetime totals are kept,
    /// so [`lifetime_average`](Self::lifetime_average) is unchanged.
    pub fn clear(&mut self) {
        self.samples.fill(0);
        tracing::trace!(capacity = self.samples.len(), "samples cleared");
    }

    /// Zero every slot and return the cursor, fill count and lifetime totals
    /// to their freshly-constructed state.
    pub fn reset(&mut self) {
        self.samples.fill(0);
        self.cursor = self.cursor.rewind();
        self.filled = 0;
        self.lifetime_sum = 0;
        self.lifetime_count = 0;
        tracing::trace!(capacity = self.samples.len(), "buffer reset");
    }

    /// Point-in-time snapshot of every average, for reporting.
    pub fn stats(&self) -> BufferStats {
        BufferStats {
            capacity: self.capacity(),
            threshold: self.threshold,
            filled: self.filled,
            cursor: self.cursor.get(),
            average: self.average(),
            lifetime_average: self.lifetime_average().ok(),
            most_recent_quarter: self.most_recent_quarter_average().ok(),
            oldest_quarter: self.oldest_quarter_average().ok(),
        }
    }

    fn checked_quarter(&self) -> Result<usize> {
        match self.quarter_size() {
            0 => Err(AvgBufError::WindowTooSmall {
                capacity: self.capacity(),
            }),
            q => Ok(q),
        }
    }

    fn walk_average(&self, start: RingIndex, count: usize, step: fn(RingIndex) -> RingIndex) -> f64 {
        let sum: i64 = iter::successors(Some(start), |&idx| Some(step(idx)))
            .take(count)
            .map(|idx| i64::from(self.samples[idx.get()]))
            .sum();
        sum as f64 / count as f64
    }
}

impl<H> SampleRingBuffer<H> {
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn quarter_stepping(&self) -> QuarterStepping {
        self.stepping
    }

    /// `capacity / 4`, truncated.
    pub fn quarter_size(&self) -> usize {
        self.samples.len() / 4
    }

    /// Index of the next slot to be written.
    pub fn write_cursor(&self) -> usize {
        self.cursor.get()
    }

    /// Slots written at least once, capped at `capacity`.
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.samples.len()
    }

    /// Sum of every sample ever added. Wide enough that `u64::MAX` adds of
    /// `i32::MAX` cannot overflow it.
    pub fn lifetime_sum(&self) -> i128 {
        self.lifetime_sum
    }

    pub fn lifetime_count(&self) -> u64 {
        self.lifetime_count
    }

    /// Raw slot contents in storage order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Slot contents in write order, oldest first, starting at the cursor.
    pub fn iter_chronological(&self) -> impl Iterator<Item = Sample> + '_ {
        let (newer, older) = self.samples.split_at(self.cursor.get());
        older.iter().chain(newer).copied()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}
