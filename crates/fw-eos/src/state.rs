//! Unit-typed lake water state.

use crate::error::{EosError, EosResult};
use fw_core::units::{Pressure, Salinity, Temperature, bar, degc, to_bar, to_degc};

/// Temperature, salinity and gauge pressure of a water parcel.
///
/// No range checks are applied; see [`crate::ValidityRange`] for where the
/// regressions hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateInput {
    t: Temperature,
    s: Salinity,
    p: Pressure,
}

impl StateInput {
    pub fn new(t: Temperature, s: Salinity, p: Pressure) -> Self {
        Self { t, s, p }
    }

    /// Create a state from °C, g/kg and bar (gauge).
    pub fn from_raw(t_c: f64, s_g_kg: f64, p_bar: f64) -> Self {
        Self::new(degc(t_c), s_g_kg, bar(p_bar))
    }

    /// Pure water at the surface.
    pub fn surface(t: Temperature) -> Self {
        Self::new(t, 0.0, bar(0.0))
    }

    /// Create a state, rejecting NaN or infinite components.
    pub fn try_from_raw(t_c: f64, s_g_kg: f64, p_bar: f64) -> EosResult<Self> {
        for (value, what) in [
            (t_c, "temperature"),
            (s_g_kg, "salinity"),
            (p_bar, "pressure"),
        ] {
            fw_core::ensure_finite(value, what).map_err(|e| EosError::InvalidArg {
                what: e.to_string(),
            })?;
        }
        Ok(Self::from_raw(t_c, s_g_kg, p_bar))
    }

    pub fn temperature(&self) -> Temperature {
        self.t
    }

    pub fn salinity(&self) -> Salinity {
        self.s
    }

    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Temperature in °C, as the regressions expect it.
    pub fn t_c(&self) -> f64 {
        to_degc(self.t)
    }

    /// Gauge pressure in bar, as the regressions expect it.
    pub fn p_bar(&self) -> f64 {
        to_bar(self.p)
    }
}
