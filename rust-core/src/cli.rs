//! Command-line argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    PipelineConfig, TraceConfig, DEFAULT_INPUT, DEFAULT_MAX_COMPONENTS, DEFAULT_OUTPUT,
    DEFAULT_TRACE_FRAMES,
};
use crate::spectrum::{AnalyzerConfig, Execution};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "epicycle-dft")]
#[command(about = "Direct DFT of a CSV point sequence, components sorted by amplitude", long_about = None)]
pub struct Args {
    /// Input CSV: header line, then `real,imag` records
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output JSON file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Evaluate DFT bins on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Reorder input points into a nearest-neighbour path first
    #[arg(long)]
    pub reorder: bool,

    /// Also write the epicycle reconstruction as CSV
    #[arg(long, value_name = "PATH")]
    pub trace: Option<PathBuf>,

    /// Points sampled along the trace
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TRACE_FRAMES)]
    pub frames: usize,

    /// Epicycle arms used for the trace (DC offset excluded)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_COMPONENTS)]
    pub max_components: usize,
}

impl Args {
    /// Build the pipeline configuration
    pub fn to_config(&self) -> PipelineConfig {
        let execution = if self.parallel {
            Execution::Parallel
        } else {
            Execution::Serial
        };

        PipelineConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            analyzer: AnalyzerConfig { execution },
            reorder: self.reorder,
            trace: self.trace.as_ref().map(|path| TraceConfig {
                path: path.clone(),
                frames: self.frames,
                max_components: self.max_components,
            }),
        }
    }
}
