//! Sequence loader: comma-delimited numeric pairs into complex samples
//!
//! The first line is always dropped as a header, whatever it contains. Every
//! following line is split on commas, with no quoting, and contributes one
//! sample `(real, imag)` from its first two fields:
//!
//! - fewer than two fields: the line is skipped
//! - a field without a leading number: the line becomes `(0.0, 0.0)`
//!
//! Text after a field's leading number is ignored, so `1.5abc` reads as 1.5.
//! Both policies are fixed. They are not reported as errors.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use log::{debug, trace};

use super::number::parse_leading_f64;
use crate::error::{DftError, Result};
use crate::Sample;

/// Load samples from a CSV file
///
/// # Arguments
/// * `path` - Location of the CSV source
///
/// # Returns
/// Samples in file order. An empty vector means the file held no usable
/// records; the caller decides whether that is fatal.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DftError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let samples = read_samples(file).map_err(|source| DftError::MalformedSource {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parse samples from any reader holding CSV text
pub fn read_samples<R: Read>(reader: R) -> std::result::Result<Vec<Sample>, csv::Error> {
    let mut reader = BufReader::new(reader);
    let mut header = Vec::new();
    reader.read_until(b'\n', &mut header)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut samples = Vec::new();
    let mut record = ByteRecord::new();

    while rdr.read_byte_record(&mut record)? {
        if let Some(sample) = record_to_sample(&record) {
            samples.push(sample);
        }
    }

    Ok(samples)
}

/// Convert one record, or `None` when it lacks a second field
fn record_to_sample(record: &ByteRecord) -> Option<Sample> {
    let (re_field, im_field) = match (record.get(0), record.get(1)) {
        (Some(re), Some(im)) => (re, im),
        _ => {
            trace!("Skipping record with {} field(s)", record.len());
            return None;
        }
    };

    // "1.0," ends on the delimiter: nothing follows it, so the second field
    // counts as missing rather than empty.
    if record.len() == 2 && im_field.is_empty() {
        trace!("Skipping record with trailing delimiter");
        return None;
    }

    match (parse_leading_f64(re_field), parse_leading_f64(im_field)) {
        (Some(re), Some(im)) => Some(Sample::new(re, im)),
        _ => {
            trace!("Unparseable record {:?}, using (0, 0)", record);
            Some(Sample::new(0.0, 0.0))
        }
    }
}
