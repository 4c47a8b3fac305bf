//! Ordering jobs by salary or posting date.

use crate::error::Error;
use crate::record::{FieldValue, JobRecord};
use crate::salaries::{MAX_SALARY, MIN_SALARY};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const DATE_POSTED: &str = "date_posted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriteria {
    /// Highest `max_salary` first.
    MaxSalary,
    /// Lowest `min_salary` first.
    MinSalary,
    /// Most recent `date_posted` first.
    DatePosted,
}

impl SortCriteria {
    pub fn field(self) -> &'static str {
        match self {
            SortCriteria::MaxSalary => MAX_SALARY,
            SortCriteria::MinSalary => MIN_SALARY,
            SortCriteria::DatePosted => DATE_POSTED,
        }
    }
}

impl FromStr for SortCriteria {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MAX_SALARY => Ok(SortCriteria::MaxSalary),
            MIN_SALARY => Ok(SortCriteria::MinSalary),
            DATE_POSTED => Ok(SortCriteria::DatePosted),
            other => Err(Error::InvalidCriteria(other.to_string())),
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Sorts `jobs` in place by `criteria`.
///
/// The sort is stable. Jobs whose key is missing or does not parse go last,
/// in their original order.
pub fn sort_by(jobs: &mut [JobRecord], criteria: SortCriteria) {
    match criteria {
        SortCriteria::MaxSalary => jobs.sort_by(|a, b| {
            missing_last(salary_key(a, MAX_SALARY), salary_key(b, MAX_SALARY), true)
        }),
        SortCriteria::MinSalary => jobs.sort_by(|a, b| {
            missing_last(salary_key(a, MIN_SALARY), salary_key(b, MIN_SALARY), false)
        }),
        SortCriteria::DatePosted => {
            jobs.sort_by(|a, b| missing_last(date_key(a), date_key(b), true));
        }
    }
}

fn salary_key(job: &JobRecord, field: &str) -> Option<i64> {
    job.get(field).and_then(FieldValue::to_integer)
}

fn date_key(job: &JobRecord) -> Option<NaiveDate> {
    job.text(DATE_POSTED)
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

fn missing_last<T: Ord>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn job(id: &str, min: &str, max: &str, date: &str) -> JobRecord {
        [
            ("id", id),
            (MIN_SALARY, min),
            (MAX_SALARY, max),
            (DATE_POSTED, date),
        ]
        .into_iter()
        .collect()
    }

    fn ids(jobs: &[JobRecord]) -> Vec<&str> {
        jobs.iter().filter_map(|job| job.text("id")).collect()
    }

    fn sample() -> Vec<JobRecord> {
        vec![
            job("1", "10", "", "2020-05-08"),
            job("2", "", "50", "2020-05-10"),
            job("3", "30", "80", "not a date"),
            job("4", "5", "50", "2020-01-01"),
            job("5", "x", "y", ""),
        ]
    }

    #[rstest]
    #[case::max_salary(SortCriteria::MaxSalary, vec!["3", "2", "4", "1", "5"])]
    #[case::min_salary(SortCriteria::MinSalary, vec!["4", "1", "3", "2", "5"])]
    #[case::date_posted(SortCriteria::DatePosted, vec!["2", "1", "4", "3", "5"])]
    fn test_sort_by(#[case] criteria: SortCriteria, #[case] expected: Vec<&str>) {
        let mut jobs = sample();
        sort_by(&mut jobs, criteria);
        assert_eq!(ids(&jobs), expected);
    }

    #[test]
    fn test_parse_criteria() {
        assert_eq!("max_salary".parse::<SortCriteria>().unwrap(), SortCriteria::MaxSalary);
        assert_eq!("date_posted".parse::<SortCriteria>().unwrap(), SortCriteria::DatePosted);

        let err = "rating".parse::<SortCriteria>().unwrap_err();
        assert_eq!(err.to_string(), "invalid sorting criteria: rating");
    }
}
