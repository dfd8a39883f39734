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
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use comp_block_api::{
    ApiError, ListMovementsResponse, ListSnapshotsResponse, MovementBatchRequest,
    MovementBatchResponse, PromotionBatchRequest, SnapshotInfo, get_employee_snapshot,
    list_employee_movements, list_employee_snapshots, process_movement_batch,
    process_promotion_batch,
};
use comp_block_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Compensation Block Server - HTTP server for the compensation block engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for employees, movements, and snapshots.
    persistence: Arc<Mutex<Persistence>>,
}

/// API response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
    status: String,
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
        match err {
            ApiError::InvalidInput { .. } | ApiError::InvalidCsvFormat { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal API error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Handler for POST /movements/batch endpoint.
///
/// Records a batch of movement rows and propagates each accepted movement
/// through the affected employee timelines.
async fn handle_movement_batch(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<MovementBatchRequest>,
) -> Result<Json<MovementBatchResponse>, HttpError> {
    info!(
        rows = req.movements.len(),
        created_by = %req.created_by,
        "Handling movement batch request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: MovementBatchResponse = process_movement_batch(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /promotions/batch endpoint.
///
/// Records a promotion-only batch with no store scoping.
async fn handle_promotion_batch(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<PromotionBatchRequest>,
) -> Result<Json<MovementBatchResponse>, HttpError> {
    info!(
        rows = req.promotions.len(),
        created_by = %req.created_by,
        "Handling promotion batch request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: MovementBatchResponse = process_promotion_batch(&mut persistence, &req, None)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/stores/{store_id}/promotions/batch` endpoint.
///
/// Records a promotion-only batch scoped to a single store. Rows whose
/// employee belongs to a different store are rejected per row.
async fn handle_store_promotion_batch(
    AxumState(app_state): AxumState<AppState>,
    Path(store_id): Path<String>,
    Json(req): Json<PromotionBatchRequest>,
) -> Result<Json<MovementBatchResponse>, HttpError> {
    info!(
        store_id = %store_id,
        rows = req.promotions.len(),
        created_by = %req.created_by,
        "Handling store-scoped promotion batch request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: MovementBatchResponse =
        process_promotion_batch(&mut persistence, &req, Some(&store_id))?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/employees/{code}/movements` endpoint.
///
/// Returns the movement history for an employee in chronological order.
async fn handle_list_movements(
    AxumState(app_state): AxumState<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ListMovementsResponse>, HttpError> {
    info!(employee_code = %code, "Handling list movements request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListMovementsResponse = list_employee_movements(&mut persistence, &code)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/employees/{code}/snapshots` endpoint.
///
/// Returns all monthly snapshots for an employee in chronological order.
async fn handle_list_snapshots(
    AxumState(app_state): AxumState<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ListSnapshotsResponse>, HttpError> {
    info!(employee_code = %code, "Handling list snapshots request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListSnapshotsResponse = list_employee_snapshots(&mut persistence, &code)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/employees/{code}/snapshots/{year_month}` endpoint.
///
/// Returns a single monthly snapshot for an employee.
async fn handle_get_snapshot(
    AxumState(app_state): AxumState<AppState>,
    Path((code, year_month)): Path<(String, String)>,
) -> Result<Json<SnapshotInfo>, HttpError> {
    info!(
        employee_code = %code,
        year_month = %year_month,
        "Handling get snapshot request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let snapshot: SnapshotInfo = get_employee_snapshot(&mut persistence, &code, &year_month)?;
    drop(persistence);

    Ok(Json(snapshot))
}

/// Handler for GET /health endpoint.
///
/// Confirms the service is up and the persistence lock is reachable.
async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    let persistence = app_state.persistence.lock().await;
    drop(persistence);

    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/movements/batch", post(handle_movement_batch))
        .route("/promotions/batch", post(handle_promotion_batch))
        .route(
            "/stores/{store_id}/promotions/batch",
            post(handle_store_promotion_batch),
        )
        .route("/employees/{code}/movements", get(handle_list_movements))
        .route("/employees/{code}/snapshots", get(handle_list_snapshots))
        .route(
            "/employees/{code}/snapshots/{year_month}",
            get(handle_get_snapshot),
        )
        .route("/health", get(handle_health))
        .with_state(app_state)
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

    info!("Initializing Compensation Block Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
