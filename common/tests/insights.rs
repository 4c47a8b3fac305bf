//! End-to-end queries against file-backed data sources.

use common::{
    Error, FieldValue, JobQuery, JobRecord, SortCriteria, count_occurrences, filter_by_industry,
    filter_by_job_type, filter_by_salary_range, get_max_salary, get_min_salary,
    get_unique_industries, get_unique_job_types, matches_salary_range, read,
};
use rstest::rstest;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/jobs.csv")
}

fn ids(jobs: &[JobRecord]) -> Vec<&str> {
    jobs.iter().map(|job| job.text("id").unwrap_or("-")).collect()
}

#[test]
fn test_fixture_shape() {
    let jobs = read(fixture()).unwrap();

    assert_eq!(jobs.len(), 7);
    assert_eq!(jobs[2].text("max_salary"), Some(""));
    assert_eq!(jobs[6].get("min_salary"), Some(&FieldValue::Null));
}

#[test]
fn test_salary_extremes() {
    assert_eq!(get_max_salary(fixture()).unwrap(), 120000);
    assert_eq!(get_min_salary(fixture()).unwrap(), 15000);
}

#[test]
fn test_max_salary_skips_null_json_values() {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    write!(
        file,
        r#"[{{"max_salary": "50000"}}, {{"max_salary": "70000"}}, {{"max_salary": null}}]"#
    )
    .unwrap();

    assert_eq!(get_max_salary(file.path()).unwrap(), 70000);
}

#[test]
fn test_aggregate_without_values() {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    write!(file, "job_title,min_salary,max_salary\nDev,,\n").unwrap();

    let err = get_min_salary(file.path()).unwrap_err();
    assert!(matches!(err, Error::EmptyAggregate { field: "min_salary" }));
}

#[rstest]
#[case::upper("PYTHON", 4)]
#[case::mixed("JavaSCRIPT", 2)]
#[case::lower("java", 4)]
#[case::absent("haskell", 0)]
fn test_count_occurrences(#[case] word: &str, #[case] expected: usize) {
    assert_eq!(count_occurrences(fixture(), word).unwrap(), expected);
}

#[test]
fn test_count_occurrences_missing_file() {
    let err = count_occurrences("no/such/file.csv", "python").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_salary_range_end_to_end() {
    let job: JobRecord = [("min_salary", "50000"), ("max_salary", "90000")]
        .into_iter()
        .collect();

    assert!(matches_salary_range(&job, &FieldValue::from(60000_i64)).unwrap());
    assert!(!matches_salary_range(&job, &FieldValue::from(40000_i64)).unwrap());
}

#[test]
fn test_filter_fixture_by_salary() {
    let jobs = read(fixture()).unwrap();
    let found: Vec<JobRecord> = filter_by_salary_range(&jobs, &"65000".into())
        .unwrap()
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(ids(&found), vec!["1", "2"]);
}

#[test]
fn test_listings() {
    assert_eq!(
        get_unique_job_types(fixture()).unwrap(),
        vec!["CONTRACTOR", "FULL_TIME", "INTERN", "PART_TIME"]
    );
    assert_eq!(
        get_unique_industries(fixture()).unwrap(),
        vec!["Finance", "Healthcare", "Technology"]
    );

    let jobs = read(fixture()).unwrap();
    assert_eq!(filter_by_job_type(&jobs, "FULL_TIME").len(), 3);
    assert_eq!(filter_by_industry(&jobs, "Technology").len(), 2);
}

#[rstest]
#[case::max_salary(SortCriteria::MaxSalary, vec!["4", "1", "2", "6", "3", "5", "-"])]
#[case::min_salary(SortCriteria::MinSalary, vec!["5", "6", "1", "2", "4", "3", "-"])]
#[case::date_posted(SortCriteria::DatePosted, vec!["5", "2", "1", "4", "3", "6", "-"])]
fn test_sorted_fixture(#[case] criteria: SortCriteria, #[case] expected: Vec<&str>) {
    let query = JobQuery {
        sort_by: Some(criteria),
        ..JobQuery::default()
    };
    let jobs = query.apply(read(fixture()).unwrap()).unwrap();

    assert_eq!(ids(&jobs), expected);
}

#[test]
fn test_combined_query() {
    let query = JobQuery {
        salary: Some("60000".into()),
        industry: Some("Finance".into()),
        ..JobQuery::default()
    };
    let jobs = query.apply(read(fixture()).unwrap()).unwrap();

    assert_eq!(ids(&jobs), vec!["1"]);
}
