//! Regression coefficients from Chen & Millero (1986), Limnol. Oceanogr. 31(3), 657-662.
//!
//! Every vector is in ascending power order: element `i` multiplies `t^i`.
//! Vectors marked "linear" are read term by term rather than as a polynomial.

/// Immutable table of regression coefficients shared by all property evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet {
    /// `a`: one-atmosphere density of pure water [g/cm³] (Eq. 1)
    pub density_base: [f64; 7],
    /// `b`: salinity term of the one-atmosphere density (Eq. 1)
    pub density_salinity: [f64; 3],
    /// `c`: secant bulk modulus of pure water [bar] (Eq. 2)
    pub bulk_base: [f64; 5],
    /// `d`: pressure term of the bulk modulus (Eq. 2)
    pub bulk_pressure: [f64; 3],
    /// `e`: salinity term of the bulk modulus, linear in t and p (Eq. 2)
    pub bulk_salinity: [f64; 3],

    /// `f`: thermal expansivity of pure water [1e-6 / °C] (Eq. 5)
    pub alpha_base: [f64; 6],
    /// `g`: salinity term of the thermal expansivity (Eq. 5)
    pub alpha_salinity: [f64; 3],
    /// `h`: pressure term; three t-coefficients then a salinity coefficient (Eq. 5)
    pub alpha_pressure: [f64; 4],

    /// `i`: temperature of maximum density, linear in s and quadratic in p (Eq. 7)
    pub tmd: [f64; 5],

    /// `j`: speed of sound in pure water [m/s] (Eq. 15)
    pub sound_base: [f64; 6],
    /// `k`: salinity term of the speed of sound (Eq. 15)
    pub sound_salinity: [f64; 3],
    /// `l`: pressure term; three t-coefficients then a salinity coefficient (Eq. 15)
    pub sound_pressure: [f64; 4],
    /// `m`: pressure-squared term of the speed of sound (Eq. 15)
    pub sound_pressure2: [f64; 1],

    /// `n`: specific heat of pure water [J/(g·°C)] (Eq. 12)
    pub cp_base: [f64; 5],
    /// `o`: salinity term of the specific heat (Eq. 12)
    pub cp_salinity: [f64; 3],
    /// `p`: pressure term; three t-coefficients then a salinity coefficient (Eq. 12)
    pub cp_pressure: [f64; 4],
    /// `q`: pressure-squared term of the specific heat (Eq. 12)
    pub cp_pressure2: [f64; 1],

    /// `r`: freezing temperature, linear in s and p (Eq. 18)
    pub freezing: [f64; 3],
}

/// The published Chen & Millero (1986) coefficients.
pub static CHEN_MILLERO_1986: CoefficientSet = CoefficientSet {
    density_base: [
        0.9998395, 6.7914e-5, -9.0894e-6, 1.0171e-7, -1.2846e-9, 1.1592e-11, -5.0125e-14,
    ],
    density_salinity: [8.181e-4, -3.85e-6, 4.98e-8],
    bulk_base: [19652.17, 148.113, -2.293, 1.256e-2, -4.18e-5],
    bulk_pressure: [3.2726, -2.147e-4, 1.128e-4],
    bulk_salinity: [53.238, -0.313, 5.728e-3],

    alpha_base: [-68.00, 18.2091, -0.30866, 5.3445e-3, -6.0721e-5, 3.1441e-7],
    alpha_salinity: [4.599, -0.1999, 2.790e-3],
    alpha_pressure: [0.3682, -1.520e-2, 1.91e-4, -4.613e-3],

    tmd: [3.9839, -1.9911e-2, -5.822e-6, 0.2219, 1.106e-4],

    sound_base: [1402.388, 5.0371, -5.8085e-2, 3.342e-4, -1.478e-6, 3.146e-9],
    sound_salinity: [1.322, -7.01e-3, 4.9e-5],
    sound_pressure: [0.15564, 4.046e-4, -8.15e-7, -5.58e-5],
    sound_pressure2: [1.593e-5],

    cp_base: [4.2174, -3.6608e-3, 1.3129e-4, -2.210e-6, 1.508e-8],
    cp_salinity: [-6.616e-5, 9.28e-6, -2.39e-8],
    cp_pressure: [-4.917e-4, 1.335e-5, -2.177e-7, 3.441e-6],
    cp_pressure2: [1.50e-7],

    freezing: [-0.0137, -0.052, -7.48e-3],
};

impl Default for CoefficientSet {
    fn default() -> Self {
        CHEN_MILLERO_1986.clone()
    }
}
