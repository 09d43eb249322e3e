use crate::math::axis::{validate_axis, SampleAxis};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const DEFAULT_PERIOD: f64 = 20.0;
pub const DEFAULT_START: f64 = 0.0;
pub const DEFAULT_STOP: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 0.1;

pub const DEMO_TITLE: &str = "Aula 01 de Instrumentação Industrial";
pub const COSINE_LABEL: &str = "COS";
pub const SINE_LABEL: &str = "SIN";

/// Sample axis and shared period for both waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub period: f64,
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            step: DEFAULT_STEP,
        }
    }
}

impl WaveConfig {
    pub fn validate(&self) -> WaveResult<()> {
        if !self.period.is_finite() || self.period == 0.0 {
            return Err(WaveError::InvalidConfig(format!(
                "period must be finite and non-zero, got {}",
                self.period
            )));
        }
        if !self.angular_frequency().is_finite() {
            return Err(WaveError::InvalidConfig(format!(
                "period {:e} is too small to give a finite angular frequency",
                self.period
            )));
        }
        validate_axis(self.start, self.stop, self.step)
    }

    pub fn frequency(&self) -> f64 {
        1.0 / self.period
    }

    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI * self.frequency()
    }
}

/// Common error type for waveform generation and analysis.
#[derive(thiserror::Error, Debug)]
pub enum WaveError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("length mismatch: {0}")]
    LengthMismatch(String),
}

pub type WaveResult<T> = Result<T, WaveError>;

/// A waveform evaluated elementwise over a sample axis.
pub trait WaveformGenerator {
    fn label(&self) -> &str;

    fn value_at(&self, t: f64) -> f64;

    fn evaluate(&self, axis: &SampleAxis) -> Array1<f64> {
        axis.values().mapv(|t| self.value_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_class_example() {
        let config = WaveConfig::default();
        assert_eq!(config.period, 20.0);
        assert_eq!(config.start, 0.0);
        assert_eq!(config.stop, 100.0);
        assert_eq!(config.step, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn angular_frequency_follows_period() {
        let config = WaveConfig::default();
        assert!((config.frequency() - 0.05).abs() < 1e-15);
        assert!((config.angular_frequency() - PI / 10.0).abs() < 1e-15);
    }

    #[test]
    fn validate_rejects_zero_period() {
        let config = WaveConfig {
            period: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WaveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_subnormal_period() {
        let config = WaveConfig {
            period: 1e-320,
            ..Default::default()
        };
        assert!(config.period != 0.0 && config.period.is_finite());
        assert!(matches!(
            config.validate(),
            Err(WaveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_non_positive_step_and_empty_range() {
        let negative_step = WaveConfig {
            step: -0.1,
            ..Default::default()
        };
        assert!(negative_step.validate().is_err());

        let inverted = WaveConfig {
            start: 10.0,
            stop: 10.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let nan_stop = WaveConfig {
            stop: f64::NAN,
            ..Default::default()
        };
        assert!(nan_stop.validate().is_err());
    }
}
