//! Unit-typed water property model trait.

use crate::eos::{EquationOfState, WaterProperties};
use crate::state::StateInput;
use fw_core::units::{
    Density, SpecHeatCapacity, Temperature, ThermalExpansion, Velocity, degc, kg_m3, mps,
};

/// Trait for water property models.
///
/// Implementations must be thread-safe (Send + Sync) to support parallel evaluation.
/// Property functions are total: inputs outside the fitted range are extrapolated.
pub trait WaterModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Density at the given state.
    fn rho(&self, state: &StateInput) -> Density;

    /// Thermal expansion coefficient [(°C)⁻¹] at the given state.
    fn alpha(&self, state: &StateInput) -> ThermalExpansion;

    /// Temperature of maximum density for the state's salinity and pressure.
    fn tmd(&self, state: &StateInput) -> Temperature;

    /// Speed of sound at the given state.
    fn a(&self, state: &StateInput) -> Velocity;

    /// Specific heat capacity [J/(kg·°C)] at the given state.
    fn cp(&self, state: &StateInput) -> SpecHeatCapacity;

    /// Freezing temperature for the state's salinity and pressure.
    fn freezing_point(&self, state: &StateInput) -> Temperature;

    /// All six properties in plain units (kg/m³, 1/°C, °C, m/s, J/(kg·°C), °C).
    fn property_pack(&self, state: &StateInput) -> WaterProperties;
}

impl WaterModel for EquationOfState {
    fn name(&self) -> &str {
        "Chen-Millero 1986"
    }

    fn rho(&self, state: &StateInput) -> Density {
        kg_m3(self.density(state.t_c(), state.salinity(), state.p_bar()))
    }

    fn alpha(&self, state: &StateInput) -> ThermalExpansion {
        EquationOfState::alpha(self, state.t_c(), state.salinity(), state.p_bar())
    }

    fn tmd(&self, state: &StateInput) -> Temperature {
        degc(EquationOfState::tmd(
            self,
            state.t_c(),
            state.salinity(),
            state.p_bar(),
        ))
    }

    fn a(&self, state: &StateInput) -> Velocity {
        mps(self.sound_speed(state.t_c(), state.salinity(), state.p_bar()))
    }

    fn cp(&self, state: &StateInput) -> SpecHeatCapacity {
        self.heat_capacity(state.t_c(), state.salinity(), state.p_bar())
    }

    fn freezing_point(&self, state: &StateInput) -> Temperature {
        degc(EquationOfState::freezing_point(
            self,
            state.t_c(),
            state.salinity(),
            state.p_bar(),
        ))
    }

    fn property_pack(&self, state: &StateInput) -> WaterProperties {
        self.properties(state.t_c(), state.salinity(), state.p_bar())
    }
}
