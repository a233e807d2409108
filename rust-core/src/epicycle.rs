//! Epicycle reconstruction of the analysed path
//!
//! Every component is an arm of radius `amp` that turns `freq` times per
//! period, starting at angle `phase`. Chained tip to tip from the DC offset
//! they retrace the original samples.

use std::f64::consts::PI;
use std::path::Path;

use csv::Writer;
use log::debug;

use crate::error::{DftError, Result};
use crate::spectrum::FrequencyComponent;
use crate::Sample;

/// Chain of rotating arms anchored at the DC offset
#[derive(Debug, Clone)]
pub struct EpicycleChain {
    origin: Sample,
    arms: Vec<FrequencyComponent>,
}

impl EpicycleChain {
    /// Build a chain from amplitude-ordered components
    ///
    /// # Arguments
    /// * `components` - Components, largest first
    /// * `max_components` - Number of arms kept after the DC offset is taken out
    pub fn new(components: &[FrequencyComponent], max_components: usize) -> Self {
        let dc = components.iter().position(|c| c.freq == 0);

        let origin = dc
            .map(|i| components[i].coefficient())
            .unwrap_or_else(|| Sample::new(0.0, 0.0));

        let arms = components
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != dc)
            .map(|(_, c)| *c)
            .take(max_components)
            .collect();

        Self { origin, arms }
    }

    /// Starting point of the chain
    pub fn origin(&self) -> Sample {
        self.origin
    }

    /// Rotating arms, in drawing order
    pub fn arms(&self) -> &[FrequencyComponent] {
        &self.arms
    }

    /// Largest distance the tip can reach from (0, 0)
    pub fn max_radius(&self) -> f64 {
        self.arms.iter().map(|c| c.amp).sum::<f64>() + self.origin.norm()
    }

    /// Tip position at normalized time `t` (one period spans 0..1)
    pub fn position_at(&self, t: f64) -> Sample {
        self.arms.iter().fold(self.origin, |tip, arm| {
            let angle = 2.0 * PI * arm.freq as f64 * t + arm.phase;
            tip + Sample::from_polar(arm.amp, angle)
        })
    }

    /// Sample the tip at `frames` evenly spaced times over one period
    pub fn trace(&self, frames: usize) -> Vec<Sample> {
        (0..frames)
            .map(|frame| self.position_at(frame as f64 / frames as f64))
            .collect()
    }
}

/// Write traced points as `x,y` CSV
///
/// The file is valid input for the sequence loader. Any failure, from
/// creating the file to the final flush, is a `TraceWrite` error.
pub fn save_trace(points: &[Sample], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let trace_error = |source| DftError::TraceWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = Writer::from_path(path).map_err(trace_error)?;
    writer.write_record(["x", "y"]).map_err(trace_error)?;
    for point in points {
        writer
            .write_record(&[point.re.to_string(), point.im.to_string()])
            .map_err(trace_error)?;
    }
    writer.flush().map_err(|e| trace_error(e.into()))?;

    debug!("Wrote {} trace points to {}", points.len(), path.display());
    Ok(())
}
