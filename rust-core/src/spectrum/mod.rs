//! Spectral analysis with a direct DFT

pub mod analysis;
pub mod component;
pub mod dft;

pub use analysis::{AnalyzerConfig, Execution, SpectralAnalyzer};
pub use component::FrequencyComponent;
