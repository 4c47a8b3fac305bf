//! Loads job records from a CSV or JSON data source.

use crate::error::{Error, Result};
use crate::record::{FieldValue, JobCollection, JobRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads every job record from `path`.
///
/// Files ending in `.json` are decoded as an array of objects; anything else
/// is read as CSV with a header row. Each call reads the file again.
pub fn read(path: impl AsRef<Path>) -> Result<JobCollection> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let jobs = if is_json {
        serde_json::from_reader(reader)?
    } else {
        read_csv(reader)?
    };

    tracing::debug!(path = %path.display(), count = jobs.len(), "read job records");
    Ok(jobs)
}

/// Reads CSV job records from any reader.
///
/// Every cell becomes text. Columns missing from a short row are null, and
/// cells past the last header are dropped.
pub fn read_csv<R: Read>(source: R) -> Result<JobCollection> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers()?.clone();

    let mut jobs = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = result?;

        if row.len() > headers.len() {
            tracing::debug!(
                row = index + 1,
                extra = row.len() - headers.len(),
                "dropping cells past the header"
            );
        }

        let job: JobRecord = headers
            .iter()
            .enumerate()
            .map(|(column, name)| {
                let value = row
                    .get(column)
                    .map_or(FieldValue::Null, FieldValue::from);
                (name, value)
            })
            .collect();
        jobs.push(job);
    }

    Ok(jobs)
}
