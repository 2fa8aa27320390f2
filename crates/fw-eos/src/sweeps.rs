//! Parametric property sweeps.
//!
//! A sweep varies one of temperature, salinity or pressure between two bounds while
//! holding the other two fixed, and evaluates one property at every point. Used for
//! plots, profile tables and sensitivity checks.

use crate::eos::EquationOfState;
use crate::error::{EosError, EosResult};
use crate::field::Field;
use crate::property::Property;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Input variable being swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepAxis {
    /// Temperature [°C]
    Temperature,
    /// Salinity [g/kg]
    Salinity,
    /// Gauge pressure [bar]
    Pressure,
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepDefinition {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a validated sweep.
    pub fn new(start: f64, end: f64, num_points: usize, sweep_type: SweepType) -> EosResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(EosError::InvalidSweep {
                what: "bounds must be finite",
            });
        }

        if num_points < 2 {
            return Err(EosError::InvalidSweep {
                what: "sweep must have at least 2 points",
            });
        }

        if (start - end).abs() < 1e-12 {
            return Err(EosError::InvalidSweep {
                what: "start and end values must be different",
            });
        }

        Ok(Self {
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    pub fn linear(start: f64, end: f64, num_points: usize) -> EosResult<Self> {
        Self::new(start, end, num_points, SweepType::Linear)
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // Both bounds must be positive; surface pressure (0 bar) sweeps fall back to linear
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[self.num_points - 1] = self.end;
        points
    }
}

/// Result of a property sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub axis: SweepAxis,
    pub property: Property,
    /// Independent variable values (the sweep parameter)
    pub independent_values: Vec<f64>,
    /// Property value at each independent value
    pub values: Vec<f64>,
}

impl SweepResult {
    /// (independent, value) pairs in sweep order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.independent_values
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Point with the largest property value, if any.
    pub fn max_point(&self) -> Option<(f64, f64)> {
        self.points().max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Execute a sweep along `axis`, holding the other inputs at `(t, s, p)`.
pub fn execute_sweep(
    eos: &EquationOfState,
    sweep_def: &SweepDefinition,
    axis: SweepAxis,
    (t, s, p): (f64, f64, f64),
    property: Property,
) -> EosResult<SweepResult> {
    let points = sweep_def.generate_points();
    let swept = Field::Array(points.clone());

    tracing::debug!(
        ?axis,
        %property,
        num_points = points.len(),
        "executing property sweep"
    );

    let values = match axis {
        SweepAxis::Temperature => eos.evaluate_field(property, swept, s, p)?,
        SweepAxis::Salinity => eos.evaluate_field(property, t, swept, p)?,
        SweepAxis::Pressure => eos.evaluate_field(property, t, s, swept)?,
    };

    Ok(SweepResult {
        axis,
        property,
        independent_values: points,
        values: values.into_vec(),
    })
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "t [°C]"),
            Self::Salinity => write!(f, "s [g/kg]"),
            Self::Pressure => write!(f, "p [bar]"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} to {} ({} points, {})",
            self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep = SweepDefinition::linear(0.0, 20.0, 5).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 0.0).abs() < 1e-12);
        assert!((points[2] - 10.0).abs() < 1e-12);
        assert_eq!(points[4], 20.0);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = SweepDefinition::new(1.0, 100.0, 3, SweepType::Logarithmic).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert!((points[0] - 1.0).abs() < 1e-9);
        assert!((points[1] - 10.0).abs() < 1e-9);
        assert_eq!(points[2], 100.0);
    }

    #[test]
    fn logarithmic_from_surface_falls_back_to_linear() {
        let sweep = SweepDefinition::new(0.0, 100.0, 3, SweepType::Logarithmic).unwrap();
        assert_eq!(sweep.generate_points(), vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn reject_invalid_point_count() {
        let result = SweepDefinition::linear(0.0, 10.0, 1);
        assert!(matches!(result, Err(EosError::InvalidSweep { .. })));
    }

    #[test]
    fn reject_identical_bounds() {
        assert!(SweepDefinition::linear(4.0, 4.0, 5).is_err());
    }

    #[test]
    fn reject_non_finite_bounds() {
        assert!(SweepDefinition::linear(f64::NAN, 4.0, 5).is_err());
    }

    #[test]
    fn temperature_sweep_finds_density_maximum() {
        let eos = EquationOfState::new();
        let sweep = SweepDefinition::linear(0.0, 8.0, 81).unwrap();
        let result = execute_sweep(
            &eos,
            &sweep,
            SweepAxis::Temperature,
            (0.0, 0.0, 0.0),
            Property::Density,
        )
        .unwrap();

        assert_eq!(result.values.len(), 81);
        let (t_max, _) = result.max_point().unwrap();
        // Pure water at the surface is densest near its tmd
        let tmd = eos.tmd(0.0, 0.0, 0.0);
        assert!((t_max - tmd).abs() < 0.2, "t_max = {t_max}, tmd = {tmd}");
    }

    #[test]
    fn pressure_sweep_matches_scalar_evaluation() {
        let eos = EquationOfState::new();
        let sweep = SweepDefinition::linear(0.0, 180.0, 7).unwrap();
        let result = execute_sweep(
            &eos,
            &sweep,
            SweepAxis::Pressure,
            (10.0, 0.5, 0.0),
            Property::SoundSpeed,
        )
        .unwrap();

        for (p, u) in result.points() {
            assert_eq!(u, eos.sound_speed(10.0, 0.5, p));
        }
    }

    #[test]
    fn salinity_sweep_lowers_freezing_point() {
        let eos = EquationOfState::new();
        let sweep = SweepDefinition::linear(0.0, 0.6, 4).unwrap();
        let result = execute_sweep(
            &eos,
            &sweep,
            SweepAxis::Salinity,
            (5.0, 0.0, 0.0),
            Property::FreezingPoint,
        )
        .unwrap();

        assert!(result.values.windows(2).all(|w| w[1] < w[0]));
    }
}
