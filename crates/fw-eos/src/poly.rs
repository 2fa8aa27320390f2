//! Polynomial evaluation.

/// Evaluate `c[0] + c[1]*x + ... + c[n-1]*x^(n-1)` by Horner's rule.
///
/// Coefficients are in ascending power order. An empty slice evaluates to 0.
#[inline]
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
