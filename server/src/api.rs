//! HTTP handlers over the job insight queries.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use common::{FieldValue, JobQuery, JobRecord, SortCriteria};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub data_path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct SalaryResponse {
    field: &'static str,
    value: i64,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    job: JobRecord,
    salary: FieldValue,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    matches: bool,
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    total_results: usize,
    results: Vec<T>,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(results: Vec<T>) -> Self {
        Self {
            total_results: results.len(),
            results,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    word: String,
    count: usize,
}

/// Query parameters for the jobs endpoint
#[derive(Debug, Default, Deserialize)]
pub struct JobsParams {
    salary: Option<String>,
    job_type: Option<String>,
    industry: Option<String>,
    sort_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CountParams {
    word: String,
}

#[derive(Debug)]
pub enum ApiError {
    Insights(common::Error),
    Task(tokio::task::JoinError),
}

impl From<common::Error> for ApiError {
    fn from(err: common::Error) -> Self {
        ApiError::Insights(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Insights(err) if err.is_invalid_salary_range() => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            ApiError::Insights(err @ common::Error::InvalidCriteria(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            ApiError::Insights(err @ common::Error::EmptyAggregate { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::Insights(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Task(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        tracing::warn!(%status, error = %message, "request failed");
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Runs a blocking read of the data source off the async workers.
async fn blocking<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(PathBuf) -> common::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let path = state.data_path.clone();
    let result = tokio::task::spawn_blocking(move || f(path))
        .await
        .map_err(ApiError::Task)?;
    Ok(result?)
}

/// Handler for GET / (root)
async fn root_handler() -> &'static str {
    "📊 Job Insights API\n\nEndpoints:\n  GET  /salary/max\n  GET  /salary/min\n  POST /salary/matches  {\"job\": {...}, \"salary\": ...}\n  GET  /jobs?salary=&job_type=&industry=&sort_by=\n  GET  /count?word=<keyword>\n  GET  /job-types\n  GET  /industries\n\nExample:\n  curl 'http://127.0.0.1:3000/jobs?salary=60000&sort_by=max_salary'"
}

/// Handler for GET /salary/max
async fn max_salary_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SalaryResponse>, ApiError> {
    let value = blocking(&state, common::get_max_salary).await?;
    Ok(Json(SalaryResponse {
        field: "max_salary",
        value,
    }))
}

/// Handler for GET /salary/min
async fn min_salary_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SalaryResponse>, ApiError> {
    let value = blocking(&state, common::get_min_salary).await?;
    Ok(Json(SalaryResponse {
        field: "min_salary",
        value,
    }))
}

/// Handler for POST /salary/matches
async fn matches_handler(
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let matches = common::matches_salary_range(&request.job, &request.salary)?;
    Ok(Json(MatchResponse { matches }))
}

/// Handler for GET /jobs
async fn jobs_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<JobsParams>,
) -> Result<Json<ListResponse<JobRecord>>, ApiError> {
    let query = JobQuery {
        salary: params.salary.map(FieldValue::from),
        job_type: params.job_type,
        industry: params.industry,
        sort_by: params
            .sort_by
            .as_deref()
            .map(str::parse::<SortCriteria>)
            .transpose()?,
    };

    let jobs = blocking(&state, move |path| query.apply(common::read(path)?)).await?;
    Ok(Json(jobs.into()))
}

/// Handler for GET /count?word=<keyword>
async fn count_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountParams>,
) -> Result<Json<CountResponse>, ApiError> {
    let word = params.word;
    let needle = word.clone();
    let count = blocking(&state, move |path| common::count_occurrences(path, &needle)).await?;
    Ok(Json(CountResponse { word, count }))
}

/// Handler for GET /job-types
async fn job_types_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<String>>, ApiError> {
    let types = blocking(&state, common::get_unique_job_types).await?;
    Ok(Json(types.into()))
}

/// Handler for GET /industries
async fn industries_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<String>>, ApiError> {
    let industries = blocking(&state, common::get_unique_industries).await?;
    Ok(Json(industries.into()))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/salary/max", get(max_salary_handler))
        .route("/salary/min", get(min_salary_handler))
        .route("/salary/matches", post(matches_handler))
        .route("/jobs", get(jobs_handler))
        .route("/count", get(count_handler))
        .route("/job-types", get(job_types_handler))
        .route("/industries", get(industries_handler))
        .with_state(state)
}
