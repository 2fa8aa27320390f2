//! Scalar-or-sequence operands with broadcasting.
//!
//! Each of `t`, `s`, `p` may be a single value or a sequence. Sequences of length 1
//! behave like scalars; all other sequences must share one length, which becomes the
//! length of the result. A result is a scalar only when every operand is a scalar.

use crate::error::{EosError, EosResult};
use rayon::prelude::*;

/// Sequences at least this long are evaluated in parallel.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// A scalar value or an element-wise sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Field {
    /// Number of elements (1 for a scalar).
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Array(_) => None,
        }
    }

    pub fn as_slice(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(v) => Some(v),
        }
    }

    /// Element `i` after broadcasting. Scalars and length-1 sequences repeat.
    #[inline]
    pub fn at(&self, i: usize) -> f64 {
        match self {
            Self::Scalar(v) => *v,
            Self::Array(v) if v.len() == 1 => v[0],
            Self::Array(v) => v[i],
        }
    }

    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Self::Scalar(v) => vec![v],
            Self::Array(v) => v,
        }
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for Field {
    fn from(v: Vec<f64>) -> Self {
        Self::Array(v)
    }
}

impl From<&[f64]> for Field {
    fn from(v: &[f64]) -> Self {
        Self::Array(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Field {
    fn from(v: [f64; N]) -> Self {
        Self::Array(v.to_vec())
    }
}

/// Common length of the operands, or `None` when all three are scalars.
pub fn broadcast_len(t: &Field, s: &Field, p: &Field) -> EosResult<Option<usize>> {
    if t.is_scalar() && s.is_scalar() && p.is_scalar() {
        return Ok(None);
    }

    let lens = [t, s, p]
        .iter()
        .filter(|f| !f.is_scalar())
        .map(|f| f.len())
        .collect::<Vec<_>>();
    let n = lens.iter().copied().find(|&len| len != 1).unwrap_or(1);

    if lens.iter().all(|&len| len == 1 || len == n) {
        Ok(Some(n))
    } else {
        Err(EosError::InputShape {
            t: t.len(),
            s: s.len(),
            p: p.len(),
        })
    }
}

/// Apply a scalar formula element-wise over broadcast operands.
pub fn zip_with<F>(t: &Field, s: &Field, p: &Field, f: F) -> EosResult<Field>
where
    F: Fn(f64, f64, f64) -> f64 + Sync,
{
    let Some(n) = broadcast_len(t, s, p)? else {
        return Ok(Field::Scalar(f(t.at(0), s.at(0), p.at(0))));
    };

    let values = if n >= PARALLEL_THRESHOLD {
        (0..n)
            .into_par_iter()
            .map(|i| f(t.at(i), s.at(i), p.at(i)))
            .collect()
    } else {
        (0..n).map(|i| f(t.at(i), s.at(i), p.at(i))).collect()
    };
    Ok(Field::Array(values))
}
