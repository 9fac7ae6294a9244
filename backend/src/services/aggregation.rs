//! Per-airline statistics and totals over a filtered flight table.

use std::collections::BTreeMap;

use crate::models::{Airline, AirlineStats, FlightRecord};

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy)]
struct Accumulator {
    count: usize,
    sum: u64,
    min: u32,
    max: u32,
}

impl Accumulator {
    fn new(flights: u32) -> Self {
        Self {
            count: 1,
            sum: u64::from(flights),
            min: flights,
            max: flights,
        }
    }

    fn push(&mut self, flights: u32) {
        self.count += 1;
        self.sum += u64::from(flights);
        self.min = self.min.min(flights);
        self.max = self.max.max(flights);
    }

    fn finish(self) -> AirlineStats {
        AirlineStats {
            count: self.count,
            mean: round2(self.sum as f64 / self.count as f64),
            min: self.min,
            max: self.max,
            sum: self.sum,
        }
    }
}

/// Group records by airline and compute mean/min/max/sum for each group.
///
/// Airlines without records are absent. The result depends only on the
/// multiset of records, not on their order.
pub fn aggregate(records: &[FlightRecord]) -> BTreeMap<Airline, AirlineStats> {
    let mut groups: BTreeMap<&Airline, Accumulator> = BTreeMap::new();
    for record in records {
        groups
            .entry(&record.airline)
            .and_modify(|acc| acc.push(record.flights))
            .or_insert_with(|| Accumulator::new(record.flights));
    }

    groups
        .into_iter()
        .map(|(airline, acc)| (airline.clone(), acc.finish()))
        .collect()
}

/// Total flights per airline.
pub fn totals(records: &[FlightRecord]) -> BTreeMap<Airline, u64> {
    records.iter().fold(BTreeMap::new(), |mut acc, record| {
        *acc.entry(record.airline.clone()).or_insert(0) += u64::from(record.flights);
        acc
    })
}
