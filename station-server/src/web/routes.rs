//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::schedule::{QueryError, Submission, ValidationError};

use super::dto::*;
use super::state::AppState;

const INVALID_POST_FORMAT: &str = "Invalid Post Format";
const INVALID_TIME_FORMAT: &str = "Invalid Time Format";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedule-new-line", post(schedule_new_line))
        .route("/next-simultaneous-arrival", get(next_simultaneous_arrival))
        .route("/lines", get(list_lines))
        .route("/lines/:name", get(get_line))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Register or replace a line's schedule.
async fn schedule_new_line(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, AppError> {
    // Parse JSON manually so a bad body is a 400 rather than axum's 422
    let req: ScheduleLineRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "unparseable schedule body");
        AppError::BadRequest {
            message: INVALID_POST_FORMAT.to_string(),
        }
    })?;

    let outcome = state
        .schedule
        .submit_schedule(&req.line_name, &req.arrival_times)
        .await?;

    if let Submission::Replaced { previous_times } = outcome {
        info!(
            line = %req.line_name,
            previous = previous_times.len(),
            "replaced existing schedule"
        );
    }

    Ok("Schedule Added")
}

/// Find the next time two or more trains arrive in the same minute.
async fn next_simultaneous_arrival(
    State(state): State<AppState>,
    Query(req): Query<NextArrivalRequest>,
) -> Result<String, AppError> {
    let current_time = req.current_time.ok_or_else(|| AppError::BadRequest {
        message: INVALID_TIME_FORMAT.to_string(),
    })?;

    let next = state
        .schedule
        .query_next_simultaneous(&current_time)
        .await?;

    Ok(next.to_clock_string())
}

/// List the names of all known lines.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state.schedule.list_line_names().await.into_iter().collect();
    Json(LinesResponse { lines })
}

/// Show one line's schedule as submitted.
async fn get_line(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state
        .schedule
        .line(&name)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: "Line Not Found".to_string(),
        })?;

    Ok(Json(LineResponse::from_line(&line)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        let message = match e {
            ValidationError::LineName(_) => INVALID_POST_FORMAT,
            ValidationError::ArrivalTime { .. } => INVALID_TIME_FORMAT,
        };
        AppError::BadRequest {
            message: message.to_string(),
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::InvalidFormat(_) => AppError::BadRequest {
                message: INVALID_TIME_FORMAT.to_string(),
            },
            QueryError::NoSchedulesAvailable => AppError::NotFound {
                message: "No Schedules Available".to_string(),
            },
            QueryError::NoSimultaneousArrivals => AppError::NotFound {
                message: "No Simultaneous Arrivals".to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
