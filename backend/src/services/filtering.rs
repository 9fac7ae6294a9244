//! Airline and date-range filtering over a generated flight table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Airline, DateRange, FlightRecord};

/// Why a filter produced no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// No airline was selected.
    NoAirlinesSelected,
    /// The range starts after it ends.
    InvertedRange,
    /// Valid parameters, but no record matched them.
    NoMatchingRecords,
}

/// Result of applying a filter to a flight table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// At least one record matched, in original table order.
    Matched(Vec<FlightRecord>),
    Empty(EmptyReason),
}

impl FilterOutcome {
    pub fn records(&self) -> &[FlightRecord] {
        match self {
            FilterOutcome::Matched(records) => records,
            FilterOutcome::Empty(_) => &[],
        }
    }

    pub fn into_records(self) -> Vec<FlightRecord> {
        match self {
            FilterOutcome::Matched(records) => records,
            FilterOutcome::Empty(_) => Vec::new(),
        }
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            FilterOutcome::Matched(_) => None,
            FilterOutcome::Empty(reason) => Some(*reason),
        }
    }
}

/// Keep records whose airline is selected and whose date lies in `range`
/// (both ends inclusive). Relative order is preserved.
pub fn filter_records(
    records: &[FlightRecord],
    selected_airlines: &[Airline],
    range: DateRange,
) -> FilterOutcome {
    if selected_airlines.is_empty() {
        return FilterOutcome::Empty(EmptyReason::NoAirlinesSelected);
    }
    if range.is_inverted() {
        return FilterOutcome::Empty(EmptyReason::InvertedRange);
    }

    let selected: HashSet<&Airline> = selected_airlines.iter().collect();
    let filtered: Vec<FlightRecord> = records
        .iter()
        .filter(|r| selected.contains(&r.airline) && range.contains(r.date))
        .cloned()
        .collect();

    log::debug!(
        "Filtered {} of {} records ({} airlines, {} to {})",
        filtered.len(),
        records.len(),
        selected.len(),
        range.start,
        range.end
    );

    if filtered.is_empty() {
        FilterOutcome::Empty(EmptyReason::NoMatchingRecords)
    } else {
        FilterOutcome::Matched(filtered)
    }
}
