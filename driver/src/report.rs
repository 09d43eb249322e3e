use crate::workflow::runner::WorkflowResult;
use serde::Serialize;
use std::fmt::{self, Write};
use wavecore::prelude::DEMO_TITLE;
use wavecore::waveform::dac_table;

/// DAC codes printed per line.
const DAC_CODES_PER_LINE: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct PreviewRow {
    pub t: f64,
    pub cos: f64,
    pub sin: f64,
}

/// Printable summary of one headless run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub title: String,
    pub samples: usize,
    pub period: f64,
    pub step: f64,
    pub first_time: Option<f64>,
    pub last_time: Option<f64>,
    pub dominant_bin: usize,
    pub dominant_frequency: f64,
    pub phase_lead: f64,
    pub cosine_rms: f64,
    pub sine_rms: f64,
    pub preview: Vec<PreviewRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dac_table: Option<Vec<u8>>,
}

pub fn summarize(
    result: &WorkflowResult,
    preview_rows: usize,
    dac_samples: Option<usize>,
) -> RunSummary {
    let set = &result.wave_set;
    let preview = set
        .time
        .values()
        .iter()
        .zip(set.cosine.values.iter())
        .zip(set.sine.values.iter())
        .take(preview_rows)
        .map(|((&t, &cos), &sin)| PreviewRow { t, cos, sin })
        .collect();

    RunSummary {
        title: DEMO_TITLE.to_string(),
        samples: set.len(),
        period: set.config.period,
        step: set.time.step(),
        first_time: set.time.first(),
        last_time: set.time.last(),
        dominant_bin: result.spectrum.dominant_bin,
        dominant_frequency: result.spectrum.frequency,
        phase_lead: result.spectrum.phase_lead,
        cosine_rms: result.cosine_rms,
        sine_rms: result.sine_rms,
        preview,
        dac_table: dac_samples.map(dac_table),
    }
}

pub fn render_text(summary: &RunSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", summary.title)?;
    writeln!(
        out,
        "samples {} | period {} | step {} | t in [{}, {}]",
        summary.samples,
        summary.period,
        summary.step,
        fmt_time(summary.first_time),
        fmt_time(summary.last_time)
    )?;
    writeln!(
        out,
        "dominant {:.4} Hz (bin {}) | COS leads SIN by {:.4} rad ({:.1} deg)",
        summary.dominant_frequency,
        summary.dominant_bin,
        summary.phase_lead,
        summary.phase_lead.to_degrees()
    )?;
    writeln!(
        out,
        "rms COS {:.4} | rms SIN {:.4}",
        summary.cosine_rms, summary.sine_rms
    )?;
    if !summary.preview.is_empty() {
        writeln!(out, "{:>10} {:>10} {:>10}", "t", "COS", "SIN")?;
        for row in &summary.preview {
            writeln!(out, "{:>10.3} {:>10.4} {:>10.4}", row.t, row.cos, row.sin)?;
        }
    }
    if let Some(table) = &summary.dac_table {
        writeln!(out, "DAC table ({} codes per period)", table.len())?;
        for chunk in table.chunks(DAC_CODES_PER_LINE) {
            let codes: Vec<String> = chunk.iter().map(|code| format!("{:>3}", code)).collect();
            writeln!(out, "{}", codes.join(" "))?;
        }
    }
    Ok(out)
}

fn fmt_time(value: Option<f64>) -> String {
    value
        .map(|t| format!("{:.3}", t))
        .unwrap_or_else(|| "n/a".to_string())
}
