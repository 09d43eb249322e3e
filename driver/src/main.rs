use anyhow::Context;
use clap::Parser;
use report::{render_text, summarize};
use std::path::PathBuf;
use wavecore::math::axis::MAX_SAMPLES;
use wavecore::prelude::{DEFAULT_PERIOD, DEFAULT_START, DEFAULT_STEP, DEFAULT_STOP};
use workflow::config::{WorkflowConfig, DEFAULT_PREVIEW_ROWS};
use workflow::runner::Runner;

mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Headless driver for the sine/cosine class demo")]
struct Args {
    /// Load the waveform config from YAML (overrides the flags below)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Period shared by both waveforms
    #[arg(long, default_value_t = DEFAULT_PERIOD, allow_negative_numbers = true)]
    period: f64,
    #[arg(long, default_value_t = DEFAULT_START, allow_negative_numbers = true)]
    start: f64,
    #[arg(long, default_value_t = DEFAULT_STOP, allow_negative_numbers = true)]
    stop: f64,
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f64,
    /// Number of leading samples to print
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview: usize,
    /// Append an 8-bit DAC sine table with this many codes per period
    #[arg(long, value_name = "SAMPLES")]
    dac_table: Option<usize>,
    /// Print the summary as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.config {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.period, args.start, args.stop, args.step, args.preview)
    };

    if let Some(samples) = args.dac_table {
        if samples == 0 || samples > MAX_SAMPLES {
            anyhow::bail!(
                "--dac-table must be between 1 and {} codes, got {}",
                MAX_SAMPLES,
                samples
            );
        }
    }

    let runner = Runner::new(workflow_config);
    let result = runner.execute()?;
    let summary = summarize(&result, runner.config().preview_rows, args.dac_table);

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("serializing run summary")?;
        println!("{}", json);
    } else {
        print!(
            "{}",
            render_text(&summary).context("rendering run summary")?
        );
    }

    Ok(())
}
