//! Epicycle DFT - direct Fourier analysis of point sequences
//!
//! Reads a CSV sequence of complex samples, computes its DFT with the direct
//! O(N²) sum, and writes the components ordered by amplitude as JSON.

pub mod cli;
pub mod config;
pub mod epicycle;
pub mod error;
pub mod io;
pub mod logger;
pub mod path;
pub mod pipeline;
pub mod spectrum;

/// One time-domain observation
pub type Sample = num_complex::Complex<f64>;

pub use config::PipelineConfig;
pub use error::{DftError, Result};
pub use spectrum::{FrequencyComponent, SpectralAnalyzer};
