pub mod analysis;
pub mod dac;
pub mod set;
pub mod trig;

pub use analysis::{analyze, SpectralSummary};
pub use dac::{dac_table, dac_update_interval_us, DacPlayer, DEFAULT_DAC_SAMPLES};
pub use set::{build_wave_set, Series, TraceColor, WaveSet};
pub use trig::{Cosine, Sine};
