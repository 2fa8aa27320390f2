//! fw-eos: equation of state for fresh (low-salinity) lake water.
//!
//! Implements the Chen & Millero (1986) regressions for density, thermal
//! expansivity, temperature of maximum density, speed of sound, specific heat
//! capacity and freezing temperature as functions of temperature (°C), salinity
//! (g/kg) and gauge pressure (bar).
//!
//! Provides:
//! - The immutable coefficient table (`coefficients`)
//! - Horner evaluation of ascending-order polynomials (`poly`)
//! - The six property functions on scalars (`EquationOfState`)
//! - Scalar-or-sequence operands with broadcasting (`Field`)
//! - A unit-typed API on top of uom (`StateInput`, `WaterModel`)
//! - Parametric sweeps and profile files for batch evaluation
//!
//! # Validity
//!
//! The regressions are fitted over 0–30 °C, 0–0.6 g/kg and 0–180 bar. Inputs outside
//! that range are evaluated anyway and the result is an extrapolation.
//!
//! # Example
//!
//! ```
//! use fw_eos::EquationOfState;
//!
//! let eos = EquationOfState::new();
//! let rho = eos.density(10.0, 0.5, 0.0);
//! assert!((rho - 1000.0920).abs() < 1e-4);
//!
//! let rho_profile = eos.density_field(vec![4.0, 10.0, 20.0], 0.2, 0.0).unwrap();
//! assert_eq!(rho_profile.len(), 3);
//! ```

pub mod coefficients;
pub mod eos;
pub mod error;
pub mod field;
pub mod model;
pub mod poly;
pub mod profile;
pub mod property;
pub mod state;
pub mod sweeps;

// Re-exports for ergonomics
pub use coefficients::{CHEN_MILLERO_1986, CoefficientSet};
pub use eos::{EquationOfState, ValidityRange, WaterProperties};
pub use error::{EosError, EosResult};
pub use field::Field;
pub use model::WaterModel;
pub use poly::polyval;
pub use profile::{ProfileDef, ProfileReport, SampleDef, load_json, load_profile, load_yaml};
pub use property::Property;
pub use state::StateInput;
pub use sweeps::{SweepAxis, SweepDefinition, SweepResult, SweepType, execute_sweep};
