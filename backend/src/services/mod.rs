//! Service layer: data generation, filtering, aggregation and view assembly.
//!
//! Everything in here is synchronous and free of I/O apart from logging.
//! The HTTP layer calls into these functions and only adds transport
//! concerns.

pub mod aggregation;
pub mod dashboard;
pub mod filtering;
pub mod generator;
pub mod session_store;


pub use aggregation::{aggregate, totals};
pub use dashboard::{build_view, DashboardView, ViewStatus};
pub use filtering::{filter_records, EmptyReason, FilterOutcome};
pub use generator::{generate, GeneratorError, GeneratorParams};
pub use session_store::{Session, SessionStore};
