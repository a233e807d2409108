//! File boundaries of the pipeline: CSV samples in, JSON components out

pub mod loader;
pub mod number;
pub mod writer;

pub use loader::{load_samples, read_samples};
pub use writer::{save_components, write_components};
