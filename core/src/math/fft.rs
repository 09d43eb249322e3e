use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftPlanner};
use std::sync::Arc;

/// Helper that wraps a `rustfft` forward plan of a fixed length.
pub struct FftHelper {
    fft: Arc<dyn Fft<f64>>,
    size: usize,
}

impl FftHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Forward transform of a real sequence, zero-padded or truncated to the plan length.
    pub fn forward(&self, input: &[f64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = input
            .iter()
            .take(self.size)
            .map(|&value| Complex64::new(value, 0.0))
            .collect();
        buffer.resize(self.size, Complex64::zero());

        self.fft.process(&mut buffer);
        buffer
    }

    /// Strongest non-DC bin in the lower half of the spectrum.
    pub fn dominant_bin(spectrum: &[Complex64]) -> Option<usize> {
        let half = spectrum.len() / 2;
        if half == 0 {
            return None;
        }
        spectrum[1..=half]
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
            .map(|(idx, _)| idx + 1)
    }
}
