use crate::FwError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// True when `a` and `b` agree after rounding their difference to `places` decimals.
///
/// This is how published regression check values are quoted (e.g. "1000.0920 to 4 places").
pub fn agrees_to_places(a: Real, b: Real, places: i32) -> bool {
    let scale = 10f64.powi(places);
    ((a - b) * scale).round() == 0.0
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FwError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FwError::NonFinite { what, value: v })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn value_agrees_with_itself(a in -1e4_f64..1e4, places in 0_i32..8) {
            prop_assert!(agrees_to_places(a, a, places));
        }
    }
}
