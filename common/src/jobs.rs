//! Job type and industry listings.

use crate::error::Result;
use crate::reader;
use crate::record::JobRecord;
use std::collections::BTreeSet;
use std::path::Path;

pub const JOB_TYPE: &str = "job_type";
pub const INDUSTRY: &str = "industry";

/// Distinct job types in the data source at `path`, sorted.
pub fn get_unique_job_types(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(unique_values(&reader::read(path)?, JOB_TYPE))
}

/// Distinct industries in the data source at `path`, sorted. Blank
/// industries are left out.
pub fn get_unique_industries(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(unique_values(&reader::read(path)?, INDUSTRY))
}

pub fn filter_by_job_type<'a>(jobs: &'a [JobRecord], job_type: &str) -> Vec<&'a JobRecord> {
    filter_by_field(jobs, JOB_TYPE, job_type)
}

pub fn filter_by_industry<'a>(jobs: &'a [JobRecord], industry: &str) -> Vec<&'a JobRecord> {
    filter_by_field(jobs, INDUSTRY, industry)
}

/// Distinct non-empty text values of `field`, sorted.
pub fn unique_values(jobs: &[JobRecord], field: &str) -> Vec<String> {
    jobs.iter()
        .filter_map(|job| job.text(field))
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn filter_by_field<'a>(jobs: &'a [JobRecord], field: &str, wanted: &str) -> Vec<&'a JobRecord> {
    jobs.iter()
        .filter(|job| job.text(field) == Some(wanted))
        .collect()
}
