//! Job Insights
//!
//! Aggregate and filter queries over a dataset of job postings: salary
//! extremes, salary-range matching, keyword counts, job type and industry
//! listings, and sorting.

pub mod counter;
pub mod error;
pub mod jobs;
pub mod query;
pub mod reader;
pub mod record;
pub mod salaries;
pub mod sorting;

pub use counter::count_occurrences;
pub use error::{Error, Result};
pub use jobs::{filter_by_industry, filter_by_job_type, get_unique_industries, get_unique_job_types};
pub use query::JobQuery;
pub use reader::read;
pub use record::{FieldValue, JobCollection, JobRecord};
pub use salaries::{
    SalaryRange, filter_by_salary_range, get_max_salary, get_min_salary, matches_salary_range,
};
pub use sorting::{SortCriteria, sort_by};
