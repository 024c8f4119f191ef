// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use clap::Parser;
use refstat_api::{
    ApiError, CsvExport, DatasetInfoResponse, DatasetLoadResponse, StatisticsRequest,
    StatisticsResponse, dataset_info, export_statistics_csv, get_statistics, load_dataset,
};
use refstat_domain::MatchDataset;
use refstat_ingest::{IngestError, LoadedDataset, load_dataset_from_path};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

/// Upload size accepted by `PUT /dataset` unless overridden on the command line.
const DEFAULT_MAX_UPLOAD_MB: usize = 64;

/// `RefStat` Server - HTTP server for referee match statistics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a match CSV file to load at startup. If not provided, the
    /// server starts empty and waits for an upload.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Largest CSV upload accepted by `PUT /dataset`, in MiB
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_MB)]
    max_upload_mb: usize,
}

/// Application state shared across handlers.
///
/// The dataset is replaced wholesale on upload. Readers clone the inner
/// `Arc` and compute without holding the lock.
#[derive(Clone)]
struct AppState {
    /// The currently loaded dataset.
    dataset: Arc<RwLock<Arc<MatchDataset>>>,
    /// Body size limit for dataset uploads, in bytes.
    max_upload_bytes: usize,
}

impl AppState {
    fn new(dataset: MatchDataset) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(Arc::new(dataset))),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }

    const fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    async fn snapshot(&self) -> Arc<MatchDataset> {
        Arc::clone(&*self.dataset.read().await)
    }

    async fn replace(&self, dataset: MatchDataset) {
        *self.dataset.write().await = Arc::new(dataset);
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidCriteria { .. }
            | ApiError::InvalidInput { .. }
            | ApiError::InvalidCsvFormat { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NoData => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/dataset` endpoint.
///
/// Describes the loaded dataset and the values each filter can take.
async fn handle_get_dataset(
    AxumState(app_state): AxumState<AppState>,
) -> Json<DatasetInfoResponse> {
    info!("Handling get_dataset request");

    let dataset: Arc<MatchDataset> = app_state.snapshot().await;
    Json(dataset_info(&dataset))
}

/// Handler for PUT `/dataset` endpoint.
///
/// Replaces the loaded dataset with the uploaded CSV document.
async fn handle_put_dataset(
    AxumState(app_state): AxumState<AppState>,
    body: String,
) -> Result<Json<DatasetLoadResponse>, HttpError> {
    info!(bytes = body.len(), "Handling put_dataset request");

    let (dataset, response) = load_dataset(&body)?;
    app_state.replace(dataset).await;

    Ok(Json(response))
}

/// Handler for GET `/statistics` endpoint.
///
/// Computes the leaderboard, summary and timeline for a period.
async fn handle_get_statistics(
    AxumState(app_state): AxumState<AppState>,
    Query(request): Query<StatisticsRequest>,
) -> Result<Json<StatisticsResponse>, HttpError> {
    info!(
        start_date = ?request.start_date,
        end_date = ?request.end_date,
        "Handling get_statistics request"
    );

    let dataset: Arc<MatchDataset> = app_state.snapshot().await;
    let response: StatisticsResponse = get_statistics(&dataset, &request)?;

    Ok(Json(response))
}

/// Handler for GET `/statistics/export` endpoint.
///
/// Returns the displayed leaderboard as a CSV attachment.
async fn handle_export_statistics(
    AxumState(app_state): AxumState<AppState>,
    Query(request): Query<StatisticsRequest>,
) -> Result<Response, HttpError> {
    info!("Handling export_statistics request");

    let dataset: Arc<MatchDataset> = app_state.snapshot().await;
    let export: CsvExport = export_statistics_csv(&dataset, &request)?;

    Ok((
        [
            (header::CONTENT_TYPE, String::from("text/csv; charset=utf-8")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            ),
        ],
        export.content,
    )
        .into_response())
}

fn build_router(app_state: AppState) -> Router {
    let upload_limit: DefaultBodyLimit = DefaultBodyLimit::max(app_state.max_upload_bytes);

    Router::new()
        .route(
            "/dataset",
            get(handle_get_dataset).merge(put(handle_put_dataset).layer(upload_limit)),
        )
        .route("/statistics", get(handle_get_statistics))
        .route("/statistics/export", get(handle_export_statistics))
        .with_state(app_state)
}

/// Loads the startup dataset, if one was given.
fn load_initial_dataset(path: Option<&Path>) -> Result<MatchDataset, IngestError> {
    let Some(path) = path else {
        info!("No data file given, starting with an empty dataset");
        return Ok(MatchDataset::default());
    };

    info!("Loading match data from: {}", path.display());
    let loaded: LoadedDataset = load_dataset_from_path(path)?;

    for rejected in &loaded.rejected_rows {
        warn!(
            row_number = rejected.row_number,
            reason = %rejected.reason,
            "Row excluded from dataset"
        );
    }

    Ok(loaded.dataset)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing RefStat Server");

    let dataset: MatchDataset = load_initial_dataset(args.data.as_deref())?;
    let max_upload_bytes: usize = args.max_upload_mb.saturating_mul(1024 * 1024);
    let app_state: AppState = AppState::new(dataset).with_max_upload_bytes(max_upload_bytes);
    info!("Accepting dataset uploads up to {} MiB", args.max_upload_mb);

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
