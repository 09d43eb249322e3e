//! Waveform core for the industrial-instrumentation class demo.
//!
//! Builds an evenly spaced sample axis, evaluates the cosine/sine pair over it
//! with a shared period, and provides the small spectral check the front-ends
//! report alongside the plot.

pub mod math;
pub mod prelude;
pub mod telemetry;
pub mod waveform;

pub use prelude::{WaveConfig, WaveError, WaveResult, WaveformGenerator};
pub use waveform::{build_wave_set, Series, TraceColor, WaveSet};
