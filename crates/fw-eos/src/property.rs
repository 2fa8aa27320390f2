//! Property identifiers.

use crate::error::EosError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six properties provided by the equation of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Density [kg/m³]
    Density,
    /// Thermal expansion coefficient [(°C)⁻¹]
    Alpha,
    /// Temperature of maximum density [°C]
    Tmd,
    /// Speed of sound [m/s]
    SoundSpeed,
    /// Specific heat capacity [J/(kg·°C)]
    HeatCapacity,
    /// Freezing temperature [°C]
    FreezingPoint,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::Density,
        Property::Alpha,
        Property::Tmd,
        Property::SoundSpeed,
        Property::HeatCapacity,
        Property::FreezingPoint,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Density => "density",
            Self::Alpha => "alpha",
            Self::Tmd => "tmd",
            Self::SoundSpeed => "sound_speed",
            Self::HeatCapacity => "heat_capacity",
            Self::FreezingPoint => "freezing_point",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Density => "kg/m³",
            Self::Alpha => "1/°C",
            Self::Tmd | Self::FreezingPoint => "°C",
            Self::SoundSpeed => "m/s",
            Self::HeatCapacity => "J/(kg·°C)",
        }
    }

    /// Whether the property depends on temperature at all.
    ///
    /// Temperature of maximum density and freezing point are functions of
    /// salinity and pressure only.
    pub fn depends_on_temperature(self) -> bool {
        !matches!(self, Self::Tmd | Self::FreezingPoint)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Property {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "density" | "rho" => Ok(Self::Density),
            "alpha" | "thermal_expansion" => Ok(Self::Alpha),
            "tmd" => Ok(Self::Tmd),
            "sound_speed" | "u" => Ok(Self::SoundSpeed),
            "heat_capacity" | "cp" => Ok(Self::HeatCapacity),
            "freezing_point" | "tf" => Ok(Self::FreezingPoint),
            _ => Err(EosError::InvalidArg {
                what: format!("unknown property '{}'", s),
            }),
        }
    }
}
