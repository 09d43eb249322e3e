use crate::prelude::{WaveConfig, WaveError, WaveResult};
use ndarray::Array1;

/// Relative distance from an integer below which a sample-count quotient snaps to it.
const COUNT_SNAP_TOLERANCE: f64 = 1e-9;

/// Largest sample axis a config may request.
pub const MAX_SAMPLES: usize = 10_000_000;

pub(crate) fn validate_axis(start: f64, stop: f64, step: f64) -> WaveResult<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(WaveError::InvalidConfig(format!(
            "step must be finite and positive, got {}",
            step
        )));
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(WaveError::InvalidConfig(format!(
            "axis bounds must be finite, got [{}, {})",
            start, stop
        )));
    }
    if stop <= start {
        return Err(WaveError::InvalidConfig(format!(
            "stop ({}) must be greater than start ({})",
            stop, start
        )));
    }
    let quotient = (stop - start) / step;
    if !quotient.is_finite() {
        return Err(WaveError::InvalidConfig(format!(
            "axis [{}, {}) at step {} does not yield a finite sample count",
            start, stop, step
        )));
    }
    let count = sample_count(start, stop, step);
    if count > MAX_SAMPLES {
        return Err(WaveError::InvalidConfig(format!(
            "axis would hold {} samples, limit is {}",
            count, MAX_SAMPLES
        )));
    }
    Ok(())
}

/// Number of samples in `[start, stop)` spaced by `step`.
pub fn sample_count(start: f64, stop: f64, step: f64) -> usize {
    let raw = (stop - start) / step;
    if raw <= 0.0 {
        return 0;
    }
    let nearest = raw.round();
    if (raw - nearest).abs() <= COUNT_SNAP_TOLERANCE * nearest.max(1.0) {
        nearest as usize
    } else {
        raw.ceil() as usize
    }
}

/// Evenly spaced time samples over the half-open interval `[start, stop)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleAxis {
    values: Array1<f64>,
    step: f64,
}

impl SampleAxis {
    pub fn new(start: f64, stop: f64, step: f64) -> WaveResult<Self> {
        validate_axis(start, stop, step)?;
        let count = sample_count(start, stop, step);
        // Index-based so the last sample carries no accumulated drift.
        let values = Array1::from_shape_fn(count, |i| start + i as f64 * step);
        Ok(Self { values, step })
    }

    pub fn from_config(config: &WaveConfig) -> WaveResult<Self> {
        Self::new(config.start, config.stop, config.step)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn first(&self) -> Option<f64> {
        self.values.get(0).copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values
            .len()
            .checked_sub(1)
            .and_then(|idx| self.values.get(idx))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_example_has_exactly_one_thousand_samples() {
        assert_eq!(sample_count(0.0, 100.0, 0.1), 1000);
        let axis = SampleAxis::new(0.0, 100.0, 0.1).unwrap();
        assert_eq!(axis.len(), 1000);
    }

    #[test]
    fn partial_final_step_rounds_up() {
        assert_eq!(sample_count(0.0, 1.0, 0.3), 4);
        let axis = SampleAxis::new(0.0, 1.0, 0.3).unwrap();
        assert!(axis.last().unwrap() < 1.0);
    }

    #[test]
    fn axis_values_stay_inside_half_open_range() {
        let axis = SampleAxis::new(0.0, 100.0, 0.1).unwrap();
        assert_eq!(axis.first(), Some(0.0));
        assert!((axis.last().unwrap() - 99.9).abs() < 1e-9);
        assert!((axis.values()[50] - 5.0).abs() < 1e-12);
        assert!(axis.values().iter().all(|&t| (0.0..100.0).contains(&t)));
    }

    #[test]
    fn axis_is_evenly_spaced() {
        let axis = SampleAxis::new(-2.0, 2.0, 0.25).unwrap();
        assert_eq!(axis.len(), 16);
        for pair in axis.values().windows(2) {
            assert!((pair[1] - pair[0] - axis.step()).abs() < 1e-12);
        }
    }

    #[test]
    fn overflowing_sample_count_is_rejected() {
        let err = SampleAxis::new(0.0, 1e300, 1e-300).unwrap_err();
        assert!(matches!(err, WaveError::InvalidConfig(_)));

        let config = WaveConfig {
            start: -1e308,
            stop: 1e308,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn sample_count_above_limit_is_rejected() {
        let stop = (MAX_SAMPLES as f64 + 1.0) * 0.5;
        assert!(matches!(
            SampleAxis::new(0.0, stop, 0.5),
            Err(WaveError::InvalidConfig(_))
        ));
        let at_limit = MAX_SAMPLES as f64 * 0.5;
        assert!(validate_axis(0.0, at_limit, 0.5).is_ok());
    }

    #[test]
    fn invalid_axis_is_rejected() {
        assert!(SampleAxis::new(0.0, 100.0, 0.0).is_err());
        assert!(SampleAxis::new(0.0, 100.0, f64::INFINITY).is_err());
        assert!(SampleAxis::new(5.0, 1.0, 0.1).is_err());
    }
}
