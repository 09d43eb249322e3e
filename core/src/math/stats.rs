pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Smallest and largest finite value, or `None` when there is none.
    pub fn bounds(samples: &[f64]) -> Option<(f64, f64)> {
        samples
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn rms_zero_sequence_yields_zero() {
        assert_eq!(StatsHelper::rms(&[]), 0.0);
        assert_eq!(StatsHelper::rms(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn rms_handles_single_value() {
        assert_eq!(StatsHelper::rms(&[4.0]), 4.0);
    }

    #[test]
    fn rms_of_whole_cycles_is_inverse_root_two() {
        let samples: Vec<f64> = (0..1000)
            .map(|i| (2.0 * PI * 5.0 * i as f64 / 1000.0).cos())
            .collect();
        assert!((StatsHelper::rms(&samples) - 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn bounds_skip_non_finite_values() {
        assert_eq!(StatsHelper::bounds(&[]), None);
        assert_eq!(StatsHelper::bounds(&[f64::NAN]), None);
        assert_eq!(
            StatsHelper::bounds(&[0.5, -2.0, f64::NAN, 3.0]),
            Some((-2.0, 3.0))
        );
    }
}
