//! Data Transfer Objects for the HTTP API.
//!
//! The dashboard payload itself is [`DashboardView`], re-exported from the
//! service layer since it already derives Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::services::dashboard::{
    ChartData, ChartPoint, ChartSeries, DashboardMeta, DashboardView, FilterOptions, ViewStatus,
};
pub use crate::services::GeneratorParams;

use super::error::AppError;
use crate::models::{Airline, DateRange, FlightRecord};
use crate::services::Session;

/// Query parameters for the dashboard endpoint.
///
/// - `airlines`: comma-separated names. Absent means every airline; present
///   but blank means none.
/// - `start` / `end`: `YYYY-MM-DD`. Both absent means the full window; only
///   one present is an incomplete selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardQuery {
    #[serde(default)]
    pub airlines: Option<String>,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl DashboardQuery {
    /// Resolve the airline selection against the airlines present in the table.
    pub fn selected_airlines(&self, available: &[Airline]) -> Result<Vec<Airline>, AppError> {
        let Some(raw) = self.airlines.as_deref() else {
            return Ok(available.to_vec());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                available
                    .iter()
                    .find(|a| a.as_str() == name)
                    .cloned()
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown airline: {}", name)))
            })
            .collect()
    }

    /// Date-picker endpoints in the order given, defaulting to `window` when
    /// neither end was supplied. Endpoints outside `window` are rejected.
    pub fn date_endpoints(&self, window: Option<DateRange>) -> Result<Vec<NaiveDate>, AppError> {
        let endpoints: Vec<NaiveDate> = match (self.start, self.end, window) {
            (None, None, Some(window)) => vec![window.start, window.end],
            (start, end, _) => start.into_iter().chain(end).collect(),
        };

        if let Some(window) = window {
            if let Some(outside) = endpoints.iter().find(|d| !window.contains(**d)) {
                return Err(AppError::BadRequest(format!(
                    "Date {} is outside the available range {} to {}",
                    outside, window.start, window.end
                )));
            }
        }
        Ok(endpoints)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of live sessions
    pub sessions: usize,
}

/// Session summary returned on creation and lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub today: NaiveDate,
    pub record_count: usize,
    pub filters: FilterOptions,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.session_id.clone(),
            created_at: session.created_at,
            today: session.today,
            record_count: session.records.len(),
            filters: FilterOptions::from_records(&session.records),
        }
    }
}

/// Full generated table of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub session_id: String,
    pub records: Vec<FlightRecord>,
    pub total: usize,
}
