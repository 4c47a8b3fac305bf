//! Job Insights CLI
//!
//! Answers salary, keyword and listing questions about a job postings
//! dataset (CSV or JSON) from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use common::{FieldValue, JobQuery, JobRecord, SortCriteria};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "job-insights", version, about = "Query a job postings dataset")]
struct Cli {
    /// Path to the jobs dataset (.csv or .json)
    #[arg(short, long, global = true, default_value = "data/jobs.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Highest max_salary in the dataset
    MaxSalary,
    /// Lowest min_salary in the dataset
    MinSalary,
    /// Check whether a salary falls within a min/max range
    Matches {
        /// Lower bound; omitted means the field is missing
        #[arg(long)]
        min: Option<String>,
        /// Upper bound; omitted means the field is missing
        #[arg(long)]
        max: Option<String>,
        salary: String,
    },
    /// List jobs, optionally filtered and sorted
    Jobs {
        /// Keep only jobs whose salary range contains this salary
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        job_type: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        /// max_salary, min_salary or date_posted
        #[arg(long)]
        sort_by: Option<SortCriteria>,
    },
    /// Count case-insensitive occurrences of a word in the dataset file
    Count { word: String },
    /// Distinct job types
    JobTypes,
    /// Distinct industries
    Industries,
}

fn run(cli: &Cli) -> Result<String> {
    let data = &cli.data;

    let output = match &cli.command {
        Command::MaxSalary => common::get_max_salary(data)
            .with_context(|| format!("computing max salary of {}", data.display()))?
            .to_string(),
        Command::MinSalary => common::get_min_salary(data)
            .with_context(|| format!("computing min salary of {}", data.display()))?
            .to_string(),
        Command::Matches { min, max, salary } => {
            let mut job = JobRecord::new();
            if let Some(min) = min {
                job.insert("min_salary", min.as_str());
            }
            if let Some(max) = max {
                job.insert("max_salary", max.as_str());
            }
            common::matches_salary_range(&job, &FieldValue::from(salary.as_str()))
                .context("invalid salary range input")?
                .to_string()
        }
        Command::Jobs {
            salary,
            job_type,
            industry,
            sort_by,
        } => {
            let query = JobQuery {
                salary: salary.as_deref().map(FieldValue::from),
                job_type: job_type.clone(),
                industry: industry.clone(),
                sort_by: *sort_by,
            };
            let jobs = common::read(data)
                .with_context(|| format!("reading {}", data.display()))?;
            let jobs = query.apply(jobs)?;

            let json = serde_json::to_string_pretty(&jobs).context("serializing jobs")?;
            format!("{json}\n📊 {} matching jobs", jobs.len())
        }
        Command::Count { word } => common::count_occurrences(data, word)
            .with_context(|| format!("counting {word:?} in {}", data.display()))?
            .to_string(),
        Command::JobTypes => common::get_unique_job_types(data)?.join("\n"),
        Command::Industries => common::get_unique_industries(data)?.join("\n"),
    };

    Ok(output)
}

fn main() -> Result<()> {
    // RUST_LOG=common=debug shows skipped records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("job_insights=info,common=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, data = %cli.data.display(), "running");

    println!("{}", run(&cli)?);
    Ok(())
}
