//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    DashboardQuery, DashboardView, FilterOptions, GeneratorParams, HealthResponse,
    RecordsResponse, SessionResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::{build_view, Session};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn fetch_session(state: &AppState, session_id: &str) -> Result<Arc<Session>, AppError> {
    state
        .sessions
        .get_session(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        sessions: state.sessions.len(),
    }))
}

/// GET /v1/config
///
/// Generator parameters every new session uses.
pub async fn get_config(State(state): State<AppState>) -> HandlerResult<GeneratorParams> {
    Ok(Json(state.sessions.params().clone()))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /v1/sessions
///
/// Start a session: generates the flight table for the window ending today.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let session = state.sessions.create_session()?;
    Ok((StatusCode::CREATED, Json(SessionResponse::from(session.as_ref()))))
}

/// GET /v1/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<SessionResponse> {
    let session = fetch_session(&state, &session_id)?;
    Ok(Json(SessionResponse::from(session.as_ref())))
}

/// DELETE /v1/sessions/{session_id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove_session(&session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {} not found", session_id)))
    }
}

/// GET /v1/sessions/{session_id}/records
pub async fn get_records(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<RecordsResponse> {
    let session = fetch_session(&state, &session_id)?;
    let records = session.records.to_vec();
    Ok(Json(RecordsResponse {
        session_id: session.session_id.clone(),
        total: records.len(),
        records,
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/sessions/{session_id}/dashboard
///
/// Chart series, statistics and totals for the given airline and date
/// selection. Selections that produce nothing to draw still return 200 with
/// a non-`ready` status and a message.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> HandlerResult<DashboardView> {
    let session = fetch_session(&state, &session_id)?;
    let Query(query) = query?;
    let options = FilterOptions::from_records(&session.records);

    let airlines = query.selected_airlines(&options.airlines)?;
    let endpoints = query.date_endpoints(options.full_range())?;

    let view = build_view(&session.records, &airlines, &endpoints);
    tracing::debug!(
        session_id = %session_id,
        status = ?view.status,
        rows = view.records.len(),
        "Built dashboard view"
    );
    Ok(Json(view))
}
