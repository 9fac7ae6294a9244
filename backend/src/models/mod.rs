pub mod flight;
pub mod macros;

pub use flight::*;
