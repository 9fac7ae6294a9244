//! Core flight-count types shared by the generator, the pipeline and the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::define_name_type;

define_name_type!(Airline);

/// One row of the flight table: the number of departures for one airline on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub date: NaiveDate,
    pub airline: Airline,
    pub flights: u32,
}

impl FlightRecord {
    pub fn new(date: NaiveDate, airline: impl Into<Airline>, flights: u32) -> Self {
        Self {
            date,
            airline: airline.into(),
            flights,
        }
    }
}

/// Inclusive integer bounds for a synthetic flight count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct FlightRange {
    min: u32,
    max: u32,
}

impl FlightRange {
    /// Returns `None` when `min > max`.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// Const constructor for fixed bounds; fails to compile when `min > max`
    /// is used in a `const` item.
    pub const fn new_const(min: u32, max: u32) -> Self {
        assert!(min <= max, "range lower bound exceeds upper bound");
        Self { min, max }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl TryFrom<[u32; 2]> for FlightRange {
    type Error = String;

    fn try_from([min, max]: [u32; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max).ok_or_else(|| format!("range lower bound {} exceeds upper bound {}", min, max))
    }
}

impl From<FlightRange> for [u32; 2] {
    fn from(range: FlightRange) -> Self {
        [range.min, range.max]
    }
}

impl std::fmt::Display for FlightRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Inclusive calendar-date range.
///
/// `start > end` is representable; the filter reports an inverted range as
/// its own outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Build a range from the endpoints a date picker hands back.
    ///
    /// A picker that is still mid-selection reports zero or one endpoint;
    /// that is an incomplete selection, not an empty range.
    pub fn from_endpoints(endpoints: &[NaiveDate]) -> Result<Self, SelectionError> {
        match endpoints {
            [start, end] => Ok(Self::new(*start, *end)),
            [] | [_] => Err(SelectionError::Incomplete {
                supplied: endpoints.len(),
            }),
            _ => Err(SelectionError::TooMany {
                supplied: endpoints.len(),
            }),
        }
    }
}

/// The date selection could not be turned into a range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("date range needs both a start and an end date ({supplied} supplied)")]
    Incomplete { supplied: usize },

    #[error("date range takes exactly two dates ({supplied} supplied)")]
    TooMany { supplied: usize },
}

/// Descriptive statistics for one airline over a filtered period.
///
/// `mean` is rounded to two decimals; `min` and `max` are whole counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineStats {
    pub count: usize,
    pub mean: f64,
    pub min: u32,
    pub max: u32,
    pub sum: u64,
}
