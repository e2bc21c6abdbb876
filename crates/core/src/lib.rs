pub mod buffer;
pub mod error;
pub mod handler;
pub mod ring;
pub mod source;
pub mod stats;

pub use buffer::{BufferBuilder, QuarterStepping, Sample, SampleRingBuffer};
pub use error::{AvgBufError, Result};
pub use handler::{LogHandler, NoopHandler, ThresholdHandler};
pub use source::SampleSource;
pub use stats::BufferStats;
