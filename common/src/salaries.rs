//! Salary aggregates and salary-range matching.

use crate::error::{Error, Result};
use crate::reader;
use crate::record::{FieldValue, JobRecord};
use std::path::Path;

pub const MIN_SALARY: &str = "min_salary";
pub const MAX_SALARY: &str = "max_salary";

/// A validated closed salary interval. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

impl SalaryRange {
    /// Validates a job's `min_salary`/`max_salary` pair.
    pub fn from_job(job: &JobRecord) -> Result<Self> {
        let (min, max) = range_fields(job)?;
        Self::from_fields(min, max)
    }

    fn from_fields(min: &FieldValue, max: &FieldValue) -> Result<Self> {
        if !max.is_int_or_text() || !min.is_int_or_text() {
            let (field, value) = if !max.is_int_or_text() {
                (MAX_SALARY, max)
            } else {
                (MIN_SALARY, min)
            };
            return Err(Error::InvalidType {
                field,
                found: value.type_name().to_string(),
            });
        }

        // Null is neither integer nor text, so the check above already
        // rejects it. Kept so a looser type check cannot let nulls through.
        if min.is_null() || max.is_null() {
            let field = if min.is_null() { MIN_SALARY } else { MAX_SALARY };
            return Err(Error::NullField { field });
        }

        let min = coerce(min, MIN_SALARY)?;
        let max = coerce(max, MAX_SALARY)?;
        if min > max {
            return Err(Error::InvertedRange { min, max });
        }

        Ok(SalaryRange { min, max })
    }

    pub fn contains(&self, salary: i64) -> bool {
        self.min <= salary && salary <= self.max
    }
}

/// Highest digit-only `max_salary` in the data source at `path`.
pub fn get_max_salary(path: impl AsRef<Path>) -> Result<i64> {
    max_salary(&reader::read(path)?)
}

/// Lowest digit-only `min_salary` in the data source at `path`.
pub fn get_min_salary(path: impl AsRef<Path>) -> Result<i64> {
    min_salary(&reader::read(path)?)
}

/// Highest digit-only `max_salary` among `jobs`. Other values are skipped.
pub fn max_salary(jobs: &[JobRecord]) -> Result<i64> {
    digit_values(jobs, MAX_SALARY)
        .max()
        .ok_or(Error::EmptyAggregate { field: MAX_SALARY })
}

/// Lowest digit-only `min_salary` among `jobs`. Other values are skipped.
pub fn min_salary(jobs: &[JobRecord]) -> Result<i64> {
    digit_values(jobs, MIN_SALARY)
        .min()
        .ok_or(Error::EmptyAggregate { field: MIN_SALARY })
}

fn digit_values(jobs: &[JobRecord], field: &'static str) -> std::vec::IntoIter<i64> {
    let values: Vec<i64> = jobs
        .iter()
        .filter_map(|job| job.get(field).and_then(FieldValue::digit_value))
        .collect();

    let skipped = jobs.len() - values.len();
    if skipped > 0 {
        tracing::debug!(field, skipped, "skipped records without a digit value");
    }
    values.into_iter()
}

/// Checks whether `salary` falls within the salary range of `job`.
///
/// Validation runs in a fixed order and the first failure is returned:
/// missing fields, then the type of `salary`, then the types of the range
/// fields, then nulls, then an inverted range. Every failure satisfies
/// [`Error::is_invalid_salary_range`].
pub fn matches_salary_range(job: &JobRecord, salary: &FieldValue) -> Result<bool> {
    let (min, max) = range_fields(job)?;
    check_salary_type(salary)?;
    let range = SalaryRange::from_fields(min, max)?;
    Ok(range.contains(coerce(salary, "salary")?))
}

/// Jobs whose salary range contains `salary`, in input order.
///
/// An invalid `salary` is an error. Jobs whose own range fails validation
/// are skipped.
pub fn filter_by_salary_range<'a>(
    jobs: &'a [JobRecord],
    salary: &FieldValue,
) -> Result<Vec<&'a JobRecord>> {
    let salary = salary_value(salary)?;
    Ok(jobs.iter().filter(|job| job_contains(job, salary)).collect())
}

/// Validates and coerces a target salary.
pub fn salary_value(salary: &FieldValue) -> Result<i64> {
    check_salary_type(salary)?;
    coerce(salary, "salary")
}

pub(crate) fn job_contains(job: &JobRecord, salary: i64) -> bool {
    match SalaryRange::from_job(job) {
        Ok(range) => range.contains(salary),
        Err(err) => {
            tracing::debug!(error = %err, "skipping job with an invalid salary range");
            false
        }
    }
}

fn range_fields(job: &JobRecord) -> Result<(&FieldValue, &FieldValue)> {
    let min = job
        .get(MIN_SALARY)
        .ok_or(Error::MissingField { field: MIN_SALARY })?;
    let max = job
        .get(MAX_SALARY)
        .ok_or(Error::MissingField { field: MAX_SALARY })?;
    Ok((min, max))
}

fn check_salary_type(salary: &FieldValue) -> Result<()> {
    if salary.is_int_or_text() {
        Ok(())
    } else {
        Err(Error::InvalidType {
            field: "salary",
            found: salary.type_name().to_string(),
        })
    }
}

fn coerce(value: &FieldValue, field: &'static str) -> Result<i64> {
    value.to_integer().ok_or_else(|| Error::InvalidType {
        field,
        found: value.describe(),
    })
}
