//! Pipeline configuration

use std::path::PathBuf;

use crate::spectrum::AnalyzerConfig;

pub const DEFAULT_INPUT: &str = "input.csv";
pub const DEFAULT_OUTPUT: &str = "output.json";
pub const DEFAULT_TRACE_FRAMES: usize = 1000;
pub const DEFAULT_MAX_COMPONENTS: usize = 200;

/// Epicycle trace output settings
#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    /// Destination CSV
    pub path: PathBuf,

    /// Number of points sampled over one period
    pub frames: usize,

    /// Arms kept after the DC offset
    pub max_components: usize,
}

/// Everything one pipeline run needs
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub analyzer: AnalyzerConfig,

    /// Reorder samples into a nearest-neighbour walk before analysis
    pub reorder: bool,

    /// Write an epicycle trace after the components
    pub trace: Option<TraceConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            analyzer: AnalyzerConfig::default(),
            reorder: false,
            trace: None,
        }
    }
}
