//! 8-bit sine lookup table for a DAC-driven signal generator.

use crate::prelude::{WaveError, WaveResult};
use std::f64::consts::PI;

/// Points per period used by the bench signal generator.
pub const DEFAULT_DAC_SAMPLES: usize = 100;

/// Mid-scale factor mapping `[-1, 1]` onto `[0, 255]`.
const DAC_HALF_SCALE: f64 = 127.5;

/// One period of `sin` mapped by `(s + 1) * 127.5` and truncated to a DAC code.
pub fn dac_table(samples_per_period: usize) -> Vec<u8> {
    (0..samples_per_period)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / samples_per_period as f64;
            let code = (angle.sin() + 1.0) * DAC_HALF_SCALE;
            code.clamp(0.0, u8::MAX as f64) as u8
        })
        .collect()
}

/// Time between table updates, in microseconds, for a tone of `frequency_hz`.
pub fn dac_update_interval_us(frequency_hz: f64, samples_per_period: usize) -> WaveResult<f64> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return Err(WaveError::InvalidConfig(format!(
            "tone frequency must be finite and positive, got {}",
            frequency_hz
        )));
    }
    if samples_per_period == 0 {
        return Err(WaveError::InvalidConfig(
            "DAC table needs at least one sample per period".to_string(),
        ));
    }
    Ok(1e6 / (frequency_hz * samples_per_period as f64))
}

/// Steps through a DAC table one code per tick, wrapping at the end of the period.
#[derive(Debug, Clone)]
pub struct DacPlayer {
    table: Vec<u8>,
    index: usize,
}

impl DacPlayer {
    pub fn new(table: Vec<u8>) -> WaveResult<Self> {
        if table.is_empty() {
            return Err(WaveError::InvalidInput("DAC table is empty".to_string()));
        }
        Ok(Self { table, index: 0 })
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn tick(&mut self) -> u8 {
        let code = self.table[self.index];
        self.index = (self.index + 1) % self.table.len();
        code
    }
}
