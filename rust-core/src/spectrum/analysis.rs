//! High-level spectral analyzer
//!
//! Runs the direct DFT over a sample sequence and orders the resulting
//! components by amplitude

use log::debug;

use super::component::FrequencyComponent;
use super::dft::{compute_components, compute_components_parallel, sort_by_amplitude};
use crate::Sample;

/// How the per-bin sums are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One bin after another on the calling thread
    #[default]
    Serial,

    /// Bins distributed over the rayon thread pool
    Parallel,
}

/// Spectral analyzer configuration
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Bin evaluation strategy (does not affect the output)
    pub execution: Execution,
}

/// DFT analyzer producing amplitude-ordered components
pub struct SpectralAnalyzer {
    config: AnalyzerConfig,
}

impl SpectralAnalyzer {
    /// Create new spectral analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze a sample sequence
    ///
    /// # Arguments
    /// * `samples` - Time-domain sequence, index order is time order. Must
    ///   not be empty; an empty sequence yields no components.
    ///
    /// # Returns
    /// One component per sample, sorted by `amp` descending. Equal amplitudes
    /// stay in ascending bin order.
    pub fn analyze(&self, samples: &[Sample]) -> Vec<FrequencyComponent> {
        debug!(
            "Computing {}-point DFT ({:?})",
            samples.len(),
            self.config.execution
        );

        let mut components = match self.config.execution {
            Execution::Serial => compute_components(samples),
            Execution::Parallel => compute_components_parallel(samples),
        };

        sort_by_amplitude(&mut components);
        components
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for SpectralAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
