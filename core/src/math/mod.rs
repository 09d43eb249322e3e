pub mod axis;
pub mod fft;
pub mod stats;

pub use axis::{sample_count, SampleAxis};
pub use fft::FftHelper;
pub use stats::StatsHelper;
