use crate::math::fft::FftHelper;
use crate::prelude::{WaveError, WaveResult};
use crate::telemetry::log::LogManager;
use crate::waveform::set::WaveSet;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Dominant frequency of the pair and the phase by which the cosine leads the sine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralSummary {
    pub dominant_bin: usize,
    pub frequency: f64,
    pub phase_lead: f64,
}

/// Wraps an angle into `(-π, π]`.
pub fn wrap_phase(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

pub fn analyze(set: &WaveSet) -> WaveResult<SpectralSummary> {
    let n = set.len();
    if n < 2 {
        return Err(WaveError::InvalidInput(format!(
            "spectral check needs at least two samples, got {}",
            n
        )));
    }
    if set.cosine.len() != n || set.sine.len() != n {
        return Err(WaveError::LengthMismatch(format!(
            "axis has {} samples but traces have {} and {}",
            n,
            set.cosine.len(),
            set.sine.len()
        )));
    }

    let fft = FftHelper::new(n);
    let cosine_spectrum = fft.forward(set.cosine.samples()?);
    let sine_spectrum = fft.forward(set.sine.samples()?);

    let dominant_bin = FftHelper::dominant_bin(&cosine_spectrum).ok_or_else(|| {
        WaveError::InvalidInput("spectrum has no non-DC bins".to_string())
    })?;
    let frequency = dominant_bin as f64 / (n as f64 * set.time.step());
    let phase_lead =
        wrap_phase(cosine_spectrum[dominant_bin].arg() - sine_spectrum[dominant_bin].arg());

    LogManager::new("analysis").record(&format!(
        "dominant bin {} -> {:.4} Hz, cosine leads sine by {:.4} rad",
        dominant_bin, frequency, phase_lead
    ));

    Ok(SpectralSummary {
        dominant_bin,
        frequency,
        phase_lead,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::WaveConfig;
    use crate::waveform::set::build_wave_set;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn class_example_peaks_at_period_frequency() {
        let set = build_wave_set(&WaveConfig::default()).unwrap();
        let summary = analyze(&set).unwrap();
        assert_eq!(summary.dominant_bin, 5);
        assert!((summary.frequency - 0.05).abs() < 1e-12);
    }

    #[test]
    fn cosine_leads_sine_by_quarter_turn() {
        let set = build_wave_set(&WaveConfig::default()).unwrap();
        let summary = analyze(&set).unwrap();
        assert!((summary.phase_lead - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn other_periods_move_the_peak() {
        let config = WaveConfig {
            period: 10.0,
            ..Default::default()
        };
        let set = build_wave_set(&config).unwrap();
        let summary = analyze(&set).unwrap();
        assert_eq!(summary.dominant_bin, 10);
        assert!((summary.frequency - 0.1).abs() < 1e-12);
    }

    #[test]
    fn single_sample_is_rejected() {
        let config = WaveConfig {
            stop: 0.1,
            ..Default::default()
        };
        let set = build_wave_set(&config).unwrap();
        assert_eq!(set.len(), 1);
        assert!(matches!(analyze(&set), Err(WaveError::InvalidInput(_))));
    }

    #[test]
    fn mismatched_traces_are_rejected() {
        let mut set = build_wave_set(&WaveConfig::default()).unwrap();
        set.sine.values = set.sine.values.slice(ndarray::s![..10]).to_owned();
        assert!(matches!(analyze(&set), Err(WaveError::LengthMismatch(_))));
    }

    #[test]
    fn wrap_phase_stays_in_half_open_interval() {
        assert!((wrap_phase(3.0 * PI) - PI).abs() < 1e-12);
        assert!((wrap_phase(-PI) - PI).abs() < 1e-12);
        assert!((wrap_phase(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-12);
        assert!(wrap_phase(0.0).abs() < 1e-12);
    }
}
