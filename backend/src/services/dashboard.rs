//! Dashboard view assembly.
//!
//! Turns a generated flight table plus the current widget state (selected
//! airlines, date-picker endpoints) into one payload a front end can render
//! without further computation: chart series, the statistics table, the
//! totals table, and a status with the message to show when there is
//! nothing to draw.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregation::{aggregate, totals};
use super::filtering::{filter_records, EmptyReason, FilterOutcome};
use super::generator::{airlines_in, date_bounds};
use crate::models::{Airline, AirlineStats, DateRange, FlightRecord, SelectionError};

pub const DASHBOARD_TITLE: &str = "DFW Airport Flight Frequency Analysis";
pub const DASHBOARD_DESCRIPTION: &str =
    "Analysis of daily flights departing from Dallas/Fort Worth International Airport";
pub const DASHBOARD_CAPTION: &str =
    "Note: This visualization uses simulated data for demonstration purposes.";

pub const CHART_TITLE: &str = "Daily Flights by Airline from DFW";
pub const CHART_X_LABEL: &str = "Date";
pub const CHART_Y_LABEL: &str = "Number of Flights";
pub const CHART_LEGEND_TITLE: &str = "Airline";
pub const CHART_HOVER_MODE: &str = "x unified";

pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";
pub const INCOMPLETE_SELECTION_MESSAGE: &str = "Please select both start and end dates.";
pub const INVALID_SELECTION_MESSAGE: &str = "Please select a valid date range.";

/// Overall state of a dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    /// Chart and tables are populated.
    Ready,
    /// Valid selection, nothing to show. Rendered as a warning.
    NoData,
    /// Range starts after it ends. Rendered as an error.
    InvalidSelection,
    /// Fewer than two dates picked; the pipeline did not run. Rendered as an error.
    IncompleteSelection,
}

impl ViewStatus {
    /// User-facing message for statuses that replace the chart.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ViewStatus::Ready => None,
            ViewStatus::NoData => Some(NO_DATA_MESSAGE),
            ViewStatus::InvalidSelection => Some(INVALID_SELECTION_MESSAGE),
            ViewStatus::IncompleteSelection => Some(INCOMPLETE_SELECTION_MESSAGE),
        }
    }
}

impl From<EmptyReason> for ViewStatus {
    fn from(reason: EmptyReason) -> Self {
        match reason {
            EmptyReason::NoAirlinesSelected | EmptyReason::NoMatchingRecords => ViewStatus::NoData,
            EmptyReason::InvertedRange => ViewStatus::InvalidSelection,
        }
    }
}

impl From<&SelectionError> for ViewStatus {
    fn from(err: &SelectionError) -> Self {
        match err {
            SelectionError::Incomplete { .. } => ViewStatus::IncompleteSelection,
            SelectionError::TooMany { .. } => ViewStatus::InvalidSelection,
        }
    }
}

/// Static page text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMeta {
    pub title: String,
    pub description: String,
    pub caption: String,
}

impl Default for DashboardMeta {
    fn default() -> Self {
        Self {
            title: DASHBOARD_TITLE.to_string(),
            description: DASHBOARD_DESCRIPTION.to_string(),
            caption: DASHBOARD_CAPTION.to_string(),
        }
    }
}

/// Widget options and defaults derived from the full table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub airlines: Vec<Airline>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl FilterOptions {
    pub fn from_records(records: &[FlightRecord]) -> Self {
        let bounds = date_bounds(records);
        Self {
            airlines: airlines_in(records),
            min_date: bounds.map(|b| b.start),
            max_date: bounds.map(|b| b.end),
        }
    }

    /// The default (full-window) range, if the table is non-empty.
    pub fn full_range(&self) -> Option<DateRange> {
        Some(DateRange::new(self.min_date?, self.max_date?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub flights: u32,
}

/// One line of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub airline: Airline,
    pub points: Vec<ChartPoint>,
}

/// Multi-series line chart: x = date, y = flights, one series per airline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub hover_mode: String,
    pub markers: bool,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    /// Series follow the first-seen airline order of `records`; points within
    /// a series are sorted by date ascending.
    pub fn from_records(records: &[FlightRecord]) -> Self {
        let series = airlines_in(records)
            .into_iter()
            .map(|airline| {
                let mut points: Vec<ChartPoint> = records
                    .iter()
                    .filter(|r| r.airline == airline)
                    .map(|r| ChartPoint {
                        date: r.date,
                        flights: r.flights,
                    })
                    .collect();
                points.sort_by_key(|p| p.date);
                ChartSeries { airline, points }
            })
            .collect();

        Self {
            title: CHART_TITLE.to_string(),
            x_label: CHART_X_LABEL.to_string(),
            y_label: CHART_Y_LABEL.to_string(),
            legend_title: CHART_LEGEND_TITLE.to_string(),
            hover_mode: CHART_HOVER_MODE.to_string(),
            markers: true,
            series,
        }
    }
}

/// Everything the front end needs to draw the page for one widget state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub meta: DashboardMeta,
    pub filters: FilterOptions,
    pub status: ViewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Range the pipeline ran with; absent when the selection was incomplete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartData>,
    pub records: Vec<FlightRecord>,
    pub statistics: BTreeMap<Airline, AirlineStats>,
    pub totals: BTreeMap<Airline, u64>,
}

impl DashboardView {
    fn without_data(filters: FilterOptions, status: ViewStatus, range: Option<DateRange>) -> Self {
        Self {
            meta: DashboardMeta::default(),
            filters,
            status,
            message: status.message().map(str::to_string),
            range,
            chart: None,
            records: Vec::new(),
            statistics: BTreeMap::new(),
            totals: BTreeMap::new(),
        }
    }
}

/// Build the dashboard for the given airline selection and date-picker endpoints.
///
/// Unless exactly two endpoints are supplied the filter and aggregation
/// steps are skipped entirely.
pub fn build_view(
    records: &[FlightRecord],
    selected_airlines: &[Airline],
    date_endpoints: &[NaiveDate],
) -> DashboardView {
    let filters = FilterOptions::from_records(records);

    let range = match DateRange::from_endpoints(date_endpoints) {
        Ok(range) => range,
        Err(err) => {
            log::debug!("Skipping pipeline: {}", err);
            return DashboardView::without_data(filters, ViewStatus::from(&err), None);
        }
    };

    match filter_records(records, selected_airlines, range) {
        FilterOutcome::Empty(reason) => {
            DashboardView::without_data(filters, ViewStatus::from(reason), Some(range))
        }
        FilterOutcome::Matched(filtered) => {
            let statistics = aggregate(&filtered);
            let flight_totals = totals(&filtered);
            DashboardView {
                meta: DashboardMeta::default(),
                filters,
                status: ViewStatus::Ready,
                message: None,
                range: Some(range),
                chart: Some(ChartData::from_records(&filtered)),
                records: filtered,
                statistics,
                totals: flight_totals,
            }
        }
    }
}
