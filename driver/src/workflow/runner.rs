use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use wavecore::math::StatsHelper;
use wavecore::waveform::{analyze, build_wave_set, SpectralSummary, WaveSet};

pub struct WorkflowResult {
    pub wave_set: WaveSet,
    pub spectrum: SpectralSummary,
    pub cosine_rms: f64,
    pub sine_rms: f64,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let wave_config = self.config.to_wave_config();

        let wave_set = build_wave_set(&wave_config).context("generating waveforms")?;
        let spectrum = analyze(&wave_set).context("running spectral check")?;

        let cosine_rms =
            StatsHelper::rms(wave_set.cosine.samples().context("reading COS trace")?);
        let sine_rms = StatsHelper::rms(wave_set.sine.samples().context("reading SIN trace")?);
        log::debug!("trace RMS cos {:.6} sin {:.6}", cosine_rms, sine_rms);

        Ok(WorkflowResult {
            wave_set,
            spectrum,
            cosine_rms,
            sine_rms,
        })
    }
}
