//! JSON sample export

use crate::error::InspectResult;
use crate::types::Dataset;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Write the first `limit` rows of `dataset` to `path` as a JSON array of
/// objects (column name → value). Returns the number of objects written.
pub fn write_sample(dataset: &Dataset, limit: usize, path: &Path) -> InspectResult<usize> {
    let records = dataset.records(limit);
    debug!(path = %path.display(), records = records.len(), "writing JSON sample");

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;

    info!(path = %path.display(), records = records.len(), "sample written");
    Ok(records.len())
}
