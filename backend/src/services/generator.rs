//! Synthetic flight-count generator.
//!
//! Produces one [`FlightRecord`] per (date, airline) pair over a trailing
//! window of days. Counts are drawn from a `ChaCha8Rng` seeded explicitly
//! from [`GeneratorParams::seed`], so the same parameters and reference day
//! always yield the same table, independent of any other generation running
//! in the process.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Airline, DateRange, FlightRange, FlightRecord};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_WINDOW_DAYS: i64 = 30;
/// Longest accepted window, roughly one hundred years.
pub const MAX_WINDOW_DAYS: i64 = 36_525;
pub const DEFAULT_HUB_AIRLINE: &str = "American Airlines";
pub const DEFAULT_AIRLINES: [&str; 3] = ["American Airlines", "Delta", "Alaska Airlines"];
pub const DEFAULT_HUB_RANGE: FlightRange = FlightRange::new_const(150, 200);
pub const DEFAULT_OTHER_RANGE: FlightRange = FlightRange::new_const(20, 50);

/// Parameters for one synthetic table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorParams {
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of trailing days, ending at the reference day inclusive.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    /// Airlines in draw order.
    #[serde(default = "default_airlines")]
    pub airlines: Vec<Airline>,
    #[serde(default = "default_hub_airline")]
    pub hub_airline: Airline,
    #[serde(default = "default_hub_range")]
    pub hub_range: FlightRange,
    #[serde(default = "default_other_range")]
    pub other_range: FlightRange,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_window_days() -> i64 {
    DEFAULT_WINDOW_DAYS
}

fn default_airlines() -> Vec<Airline> {
    DEFAULT_AIRLINES.iter().map(|a| Airline::from(*a)).collect()
}

fn default_hub_airline() -> Airline {
    Airline::from(DEFAULT_HUB_AIRLINE)
}

fn default_hub_range() -> FlightRange {
    DEFAULT_HUB_RANGE
}

fn default_other_range() -> FlightRange {
    DEFAULT_OTHER_RANGE
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            window_days: default_window_days(),
            airlines: default_airlines(),
            hub_airline: default_hub_airline(),
            hub_range: default_hub_range(),
            other_range: default_other_range(),
        }
    }
}

/// Invalid generator parameters. Fatal to generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error(
        "window must cover between 1 and {max} days (got {window_days})",
        max = MAX_WINDOW_DAYS
    )]
    InvalidWindow { window_days: i64 },

    #[error("at least one airline is required")]
    NoAirlines,

    #[error("airline '{0}' is listed more than once")]
    DuplicateAirline(Airline),

    #[error("hub airline '{0}' is not one of the configured airlines")]
    UnknownHub(Airline),

    #[error("hub range {hub} must lie strictly above the other range {other}")]
    HubNotDominant { hub: FlightRange, other: FlightRange },

    #[error("a {window_days}-day window ending at {today} runs past the calendar")]
    DateOutOfRange { today: NaiveDate, window_days: i64 },
}

impl GeneratorParams {
    /// Check every precondition of [`generate`].
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(1..=MAX_WINDOW_DAYS).contains(&self.window_days) {
            return Err(GeneratorError::InvalidWindow {
                window_days: self.window_days,
            });
        }
        if self.airlines.is_empty() {
            return Err(GeneratorError::NoAirlines);
        }

        let mut seen = HashSet::with_capacity(self.airlines.len());
        for airline in &self.airlines {
            if !seen.insert(airline) {
                return Err(GeneratorError::DuplicateAirline(airline.clone()));
            }
        }

        if !seen.contains(&self.hub_airline) {
            return Err(GeneratorError::UnknownHub(self.hub_airline.clone()));
        }
        if self.hub_range.min() <= self.other_range.max() {
            return Err(GeneratorError::HubNotDominant {
                hub: self.hub_range,
                other: self.other_range,
            });
        }
        Ok(())
    }

    fn range_for(&self, airline: &Airline) -> FlightRange {
        if *airline == self.hub_airline {
            self.hub_range
        } else {
            self.other_range
        }
    }
}

/// Generate the flight table for the window ending at `today`.
///
/// Records are emitted date-major (offset 0, i.e. `today`, first) and
/// airline-minor in `params.airlines` order; draws are consumed in that
/// same order.
pub fn generate(params: &GeneratorParams, today: NaiveDate) -> Result<Vec<FlightRecord>, GeneratorError> {
    params.validate()?;

    // validate() bounds window_days to 1..=MAX_WINDOW_DAYS
    let window_days = params.window_days as u64;
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let mut records =
        Vec::with_capacity((window_days as usize).saturating_mul(params.airlines.len()));

    for offset in 0..window_days {
        let date = today
            .checked_sub_days(Days::new(offset))
            .ok_or(GeneratorError::DateOutOfRange {
                today,
                window_days: params.window_days,
            })?;

        for airline in &params.airlines {
            let range = params.range_for(airline);
            let flights = rng.gen_range(range.min()..=range.max());
            records.push(FlightRecord {
                date,
                airline: airline.clone(),
                flights,
            });
        }
    }

    log::info!(
        "Generated {} flight records ({} days x {} airlines, seed={}, ending {})",
        records.len(),
        params.window_days,
        params.airlines.len(),
        params.seed,
        today
    );

    Ok(records)
}

/// Earliest and latest date in a table; `None` for an empty table.
pub fn date_bounds(records: &[FlightRecord]) -> Option<DateRange> {
    let start = records.iter().map(|r| r.date).min()?;
    let end = records.iter().map(|r| r.date).max()?;
    Some(DateRange::new(start, end))
}

/// Distinct airlines in first-seen order.
pub fn airlines_in(records: &[FlightRecord]) -> Vec<Airline> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(&r.airline))
        .map(|r| r.airline.clone())
        .collect()
}
