//! The Chen & Millero (1986) property evaluator.
//!
//! All six properties take temperature `t` [°C], salinity `s` [g/kg] and gauge
//! pressure `p` [bar]. Where `p == 0.0` the pressure correction terms are skipped;
//! the result is identical to evaluating the full expression at zero pressure.

use crate::coefficients::{CHEN_MILLERO_1986, CoefficientSet};
use crate::error::EosResult;
use crate::field::{Field, zip_with};
use crate::poly::polyval;
use crate::property::Property;
use serde::{Deserialize, Serialize};

/// Stateless evaluator over an immutable coefficient table.
///
/// Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct EquationOfState {
    coeffs: &'static CoefficientSet,
}

impl Default for EquationOfState {
    fn default() -> Self {
        Self::new()
    }
}

impl EquationOfState {
    /// Evaluator over the published coefficients.
    pub fn new() -> Self {
        Self {
            coeffs: &CHEN_MILLERO_1986,
        }
    }

    /// Evaluator over an alternative coefficient table.
    pub fn with_coefficients(coeffs: &'static CoefficientSet) -> Self {
        Self { coeffs }
    }

    pub fn coefficients(&self) -> &'static CoefficientSet {
        self.coeffs
    }

    /// Density [kg/m³].
    ///
    /// A secant bulk modulus of zero, or one equal to `p`, is not guarded: the
    /// result follows IEEE-754 division (infinite, NaN or signed zero).
    pub fn density(&self, t: f64, s: f64, p: f64) -> f64 {
        let c = self.coeffs;
        let mut rho = polyval(&c.density_base, t) + polyval(&c.density_salinity, t) * s;
        if p != 0.0 {
            rho /= 1.0 - p / self.bulk_modulus(t, s, p);
        }
        rho * 1000.0
    }

    /// Secant bulk modulus K(t, s, p) [bar] used by [`Self::density`].
    pub fn bulk_modulus(&self, t: f64, s: f64, p: f64) -> f64 {
        let c = self.coeffs;
        let e = &c.bulk_salinity;
        polyval(&c.bulk_base, t)
            + polyval(&c.bulk_pressure, t) * p
            + (e[0] + e[1] * t + e[2] * p) * s
    }

    /// Thermal expansion coefficient [(°C)⁻¹].
    pub fn alpha(&self, t: f64, s: f64, p: f64) -> f64 {
        let c = self.coeffs;
        let h = &c.alpha_pressure;
        let mut alpha = polyval(&c.alpha_base, t) + polyval(&c.alpha_salinity, t) * s;
        if p != 0.0 {
            alpha += (polyval(&h[..3], t) + h[3] * s) * p;
        }
        alpha * 1e-6
    }

    /// Temperature of maximum density [°C]. Does not depend on `t`.
    pub fn tmd(&self, _t: f64, s: f64, p: f64) -> f64 {
        let i = &self.coeffs.tmd;
        i[0] + i[1] * p + i[2] * (p * p) - (i[3] + i[4] * p) * s
    }

    /// Speed of sound [m/s].
    pub fn sound_speed(&self, t: f64, s: f64, p: f64) -> f64 {
        let c = self.coeffs;
        let l = &c.sound_pressure;
        let mut u = polyval(&c.sound_base, t) + polyval(&c.sound_salinity, t) * s;
        if p != 0.0 {
            u += (polyval(&l[..3], t) + l[3] * s) * p;
            u += c.sound_pressure2[0] * (p * p);
        }
        u
    }

    /// Specific heat capacity [J/(kg·°C)].
    pub fn heat_capacity(&self, t: f64, s: f64, p: f64) -> f64 {
        let c = self.coeffs;
        let q = &c.cp_pressure;
        let mut cp = polyval(&c.cp_base, t) + polyval(&c.cp_salinity, t) * s;
        if p != 0.0 {
            cp += (polyval(&q[..3], t) + q[3] * s) * p;
            cp += c.cp_pressure2[0] * (p * p);
        }
        cp * 1000.0
    }

    /// Freezing temperature [°C]. Does not depend on `t`.
    pub fn freezing_point(&self, _t: f64, s: f64, p: f64) -> f64 {
        let r = &self.coeffs.freezing;
        r[0] + r[1] * s + r[2] * p
    }

    /// Evaluate one property by identifier.
    pub fn evaluate(&self, property: Property, t: f64, s: f64, p: f64) -> f64 {
        match property {
            Property::Density => self.density(t, s, p),
            Property::Alpha => self.alpha(t, s, p),
            Property::Tmd => self.tmd(t, s, p),
            Property::SoundSpeed => self.sound_speed(t, s, p),
            Property::HeatCapacity => self.heat_capacity(t, s, p),
            Property::FreezingPoint => self.freezing_point(t, s, p),
        }
    }

    /// Compute all six properties at one state.
    pub fn properties(&self, t: f64, s: f64, p: f64) -> WaterProperties {
        WaterProperties {
            rho: self.density(t, s, p),
            alpha: self.alpha(t, s, p),
            tmd: self.tmd(t, s, p),
            sound_speed: self.sound_speed(t, s, p),
            cp: self.heat_capacity(t, s, p),
            freezing_point: self.freezing_point(t, s, p),
        }
    }

    /// Evaluate one property element-wise over broadcast operands.
    pub fn evaluate_field(
        &self,
        property: Property,
        t: impl Into<Field>,
        s: impl Into<Field>,
        p: impl Into<Field>,
    ) -> EosResult<Field> {
        let (t, s, p) = (t.into(), s.into(), p.into());
        zip_with(&t, &s, &p, |t, s, p| self.evaluate(property, t, s, p))
    }

    pub fn density_field(
        &self,
        t: impl Into<Field>,
        s: impl Into<Field>,
        p: impl Into<Field>,
    ) -> EosResult<Field> {
        self.evaluate_field(Property::Density, t, s, p)
    }

    pub fn alpha_field(
        &self,
        t: impl Into<Field>,
        s: impl Into<Field>,
        p: impl Into<Field>,
    ) -> EosResult<Field> {
        self.evaluate_field(Property::Alpha, t, s, p)
    }

    pub fn tmd_field(
        &self,
        t: impl Into<Field>,
        s: impl Into<Field>,
        p: impl Into<Field>,
    ) -> EosResult<Field> {
        self.evaluate_field(Property::Tmd, t, s, p)
    }

    pub fn sound_speed_field(
        &self,
        t: impl Into<Field>,
        s: impl Into<Field>,
        p: impl Into<Field>,
    ) -> EosResult<Field> {
        self.evaluate_field(Property::SoundSpeed, t, s, p)
    }

    pub fn heat_capacity_field(
        &self,
        t: impl Into<Field>,
        s: impl Into<Field>,
        p: impl Into<Field>,
    ) -> EosResult<Field> {
        self.evaluate_field(Property::HeatCapacity, t, s, p)
    }

    pub fn freezing_point_field(
        &self,
        t: impl Into<Field>,
        s: impl Into<Field>,
        p: impl Into<Field>,
    ) -> EosResult<Field> {
        self.evaluate_field(Property::FreezingPoint, t, s, p)
    }
}

/// All six properties from a single state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterProperties {
    /// Density [kg/m³]
    pub rho: f64,
    /// Thermal expansion coefficient [(°C)⁻¹]
    pub alpha: f64,
    /// Temperature of maximum density [°C]
    pub tmd: f64,
    /// Speed of sound [m/s]
    pub sound_speed: f64,
    /// Specific heat capacity [J/(kg·°C)]
    pub cp: f64,
    /// Freezing temperature [°C]
    pub freezing_point: f64,
}

impl WaterProperties {
    pub fn get(&self, property: Property) -> f64 {
        match property {
            Property::Density => self.rho,
            Property::Alpha => self.alpha,
            Property::Tmd => self.tmd,
            Property::SoundSpeed => self.sound_speed,
            Property::HeatCapacity => self.cp,
            Property::FreezingPoint => self.freezing_point,
        }
    }

    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Props(ρ={:.4}kg/m³,α={:.2}e-6/°C,Tmd={:.4}°C,u={:.3}m/s,cp={:.2}J/kg·°C,Tf={:.4}°C)",
            self.rho,
            self.alpha * 1e6,
            self.tmd,
            self.sound_speed,
            self.cp,
            self.freezing_point
        )
    }
}

/// Range of conditions the regressions were fitted over.
///
/// Not enforced: evaluations outside the range are extrapolations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidityRange {
    pub t_min: f64,
    pub t_max: f64,
    pub s_min: f64,
    pub s_max: f64,
    pub p_min: f64,
    pub p_max: f64,
}

impl ValidityRange {
    pub const CHEN_MILLERO_1986: ValidityRange = ValidityRange {
        t_min: 0.0,
        t_max: 30.0,
        s_min: 0.0,
        s_max: 0.6,
        p_min: 0.0,
        p_max: 180.0,
    };

    pub fn contains(&self, t: f64, s: f64, p: f64) -> bool {
        (self.t_min..=self.t_max).contains(&t)
            && (self.s_min..=self.s_max).contains(&s)
            && (self.p_min..=self.p_max).contains(&p)
    }
}
