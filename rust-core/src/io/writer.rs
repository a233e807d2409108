//! Component writer: serializes the spectrum as a JSON array
//!
//! Each element carries `freq`, `amp`, `phase`, `re` and `im`, in that order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{DftError, Result};
use crate::spectrum::FrequencyComponent;

/// Write components to any sink as pretty-printed JSON
pub fn write_components<W: Write>(components: &[FrequencyComponent], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, components)?;
    Ok(())
}

/// Write components to a file, replacing any previous content
///
/// # Arguments
/// * `components` - Components in the order they should appear
/// * `path` - Destination file
pub fn save_components(components: &[FrequencyComponent], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let sink_error = |source| DftError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(sink_error)?;
    let mut writer = BufWriter::new(file);

    write_components(components, &mut writer).map_err(|err| match err {
        DftError::Serialize(e) if e.is_io() => sink_error(e.into()),
        other => other,
    })?;
    writer.write_all(b"\n").map_err(sink_error)?;
    writer.flush().map_err(sink_error)?;

    debug!("Wrote {} components to {}", components.len(), path.display());
    Ok(())
}
