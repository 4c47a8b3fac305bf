//! Combined filter-and-sort over a job collection.

use crate::error::Result;
use crate::jobs::{INDUSTRY, JOB_TYPE};
use crate::record::{FieldValue, JobCollection};
use crate::salaries::{job_contains, salary_value};
use crate::sorting::{SortCriteria, sort_by};

/// Optional filters and ordering shared by the CLI and the HTTP API.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub salary: Option<FieldValue>,
    pub job_type: Option<String>,
    pub industry: Option<String>,
    pub sort_by: Option<SortCriteria>,
}

impl JobQuery {
    /// Applies job type, industry and salary filters in that order, then sorts.
    pub fn apply(&self, mut jobs: JobCollection) -> Result<JobCollection> {
        if let Some(job_type) = &self.job_type {
            jobs.retain(|job| job.text(JOB_TYPE) == Some(job_type.as_str()));
        }
        if let Some(industry) = &self.industry {
            jobs.retain(|job| job.text(INDUSTRY) == Some(industry.as_str()));
        }
        if let Some(salary) = &self.salary {
            let salary = salary_value(salary)?;
            jobs.retain(|job| job_contains(job, salary));
        }
        if let Some(criteria) = self.sort_by {
            sort_by(&mut jobs, criteria);
        }
        Ok(jobs)
    }
}
