//! # DFW Flights Backend
//!
//! Synthetic daily flight counts for the airlines at Dallas/Fort Worth, with
//! the filtering and aggregation behind the flight-frequency dashboard.
//!
//! ## Features
//!
//! - **Data Generation**: Seeded, reproducible flight-count tables over a trailing window
//! - **Filtering**: Airline and inclusive date-range selection with distinct empty outcomes
//! - **Aggregation**: Per-airline mean/min/max and totals
//! - **Dashboard Views**: Chart series and tables ready for a front end
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! - [`models`]: Flight records, ranges and statistics types
//! - [`services`]: Generator, filter, aggregation, view assembly and sessions
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use dfw_flights::services::{build_view, generate, GeneratorParams, ViewStatus};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let params = GeneratorParams::default();
//! let records = generate(&params, today).unwrap();
//! assert_eq!(records.len(), 90);
//!
//! let start = NaiveDate::from_ymd_opt(2026, 9, 17).unwrap();
//! let view = build_view(&records, &params.airlines, &[start, today]);
//! assert_eq!(view.status, ViewStatus::Ready);
//! ```

pub mod config;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
