use crate::math::axis::SampleAxis;
use crate::math::stats::StatsHelper;
use crate::prelude::{WaveConfig, WaveError, WaveResult, WaveformGenerator};
use crate::telemetry::log::LogManager;
use crate::waveform::trig::{Cosine, Sine};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Stroke color of a plotted trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceColor {
    Blue,
    Red,
}

/// One labelled trace evaluated over the sample axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: TraceColor,
    pub values: Array1<f64>,
}

impl Series {
    pub fn from_generator<G: WaveformGenerator>(
        generator: &G,
        axis: &SampleAxis,
        color: TraceColor,
    ) -> Self {
        Self {
            label: generator.label().to_string(),
            color,
            values: generator.evaluate(axis),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrows the samples as a contiguous slice.
    pub fn samples(&self) -> WaveResult<&[f64]> {
        self.values.as_slice().ok_or_else(|| {
            WaveError::InvalidInput(format!("trace {} is not contiguous", self.label))
        })
    }
}

/// The sample axis together with the cosine and sine traces computed over it.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveSet {
    pub config: WaveConfig,
    pub time: SampleAxis,
    pub cosine: Series,
    pub sine: Series,
}

impl WaveSet {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Both traces in legend order.
    pub fn series(&self) -> [&Series; 2] {
        [&self.cosine, &self.sine]
    }

    /// Joint min/max over both traces.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let cos = self.cosine.samples().ok().and_then(StatsHelper::bounds);
        let sin = self.sine.samples().ok().and_then(StatsHelper::bounds);
        match (cos, sin) {
            (Some((a_min, a_max)), Some((b_min, b_max))) => {
                Some((a_min.min(b_min), a_max.max(b_max)))
            }
            (one, None) | (None, one) => one,
        }
    }
}

pub fn build_wave_set(config: &WaveConfig) -> WaveResult<WaveSet> {
    config.validate()?;
    let logger = LogManager::new("waveform");

    let time = SampleAxis::from_config(config)?;
    let omega = config.angular_frequency();
    let cosine = Series::from_generator(&Cosine::new(omega), &time, TraceColor::Blue);
    let sine = Series::from_generator(&Sine::new(omega), &time, TraceColor::Red);

    logger.record(&format!(
        "generated {} samples per trace over [{}, {}) step {} period {}",
        time.len(),
        config.start,
        config.stop,
        config.step,
        config.period
    ));
    logger.detail(&format!("angular frequency {:.6} rad/s", omega));

    Ok(WaveSet {
        config: *config,
        time,
        cosine,
        sine,
    })
}
