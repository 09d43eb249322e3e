use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wavecore::prelude::{WaveConfig, DEFAULT_PERIOD, DEFAULT_START, DEFAULT_STEP, DEFAULT_STOP};

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub period: f64,
    pub start: f64,
    pub stop: f64,
    pub step: f64,
    pub preview_rows: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            step: DEFAULT_STEP,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading waveform config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing waveform config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(period: f64, start: f64, stop: f64, step: f64, preview_rows: usize) -> Self {
        Self {
            period,
            start,
            stop,
            step,
            preview_rows,
        }
    }

    pub fn to_wave_config(&self) -> WaveConfig {
        WaveConfig {
            period: self.period,
            start: self.start,
            stop: self.stop,
            step: self.step,
        }
    }
}
