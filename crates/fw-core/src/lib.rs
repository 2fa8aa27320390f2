//! fw-core: stable foundation for the freshwater crates.
//!
//! Contains:
//! - units (uom SI types + limnology constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FwError, FwResult};
pub use numeric::*;
pub use units::*;
