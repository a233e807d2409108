//! Loader → analyzer → writer, run once per invocation

use std::path::PathBuf;

use log::info;

use crate::config::PipelineConfig;
use crate::epicycle::{save_trace, EpicycleChain};
use crate::error::{DftError, Result};
use crate::io::{load_samples, save_components};
use crate::path::reorder_nearest_neighbour;
use crate::spectrum::SpectralAnalyzer;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub samples: usize,
    pub components: usize,
    pub output: PathBuf,
    pub trace: Option<PathBuf>,
}

/// Run the full pipeline
///
/// Nothing is written unless at least one sample was loaded.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let mut samples = load_samples(&config.input)?;
    if samples.is_empty() {
        return Err(DftError::EmptySequence {
            path: config.input.clone(),
        });
    }
    info!("Loaded {} samples from {}", samples.len(), config.input.display());

    if config.reorder {
        samples = reorder_nearest_neighbour(&samples);
        info!("Reordered samples into nearest-neighbour path");
    }

    let analyzer = SpectralAnalyzer::new(config.analyzer.clone());
    info!(
        "Analyzing {} samples ({:?} execution)",
        samples.len(),
        analyzer.config().execution
    );
    let components = analyzer.analyze(&samples);

    save_components(&components, &config.output)?;
    info!("Saved {} components to {}", components.len(), config.output.display());

    let trace = match &config.trace {
        Some(trace) => {
            let chain = EpicycleChain::new(&components, trace.max_components);
            save_trace(&chain.trace(trace.frames), &trace.path)?;
            info!(
                "Traced {} arms over {} frames to {}",
                chain.arms().len(),
                trace.frames,
                trace.path.display()
            );
            Some(trace.path.clone())
        }
        None => None,
    };

    Ok(RunSummary {
        samples: samples.len(),
        components: components.len(),
        output: config.output.clone(),
        trace,
    })
}
