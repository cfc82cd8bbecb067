//! Exact rational coefficients using dashu
//!
//! Polynomial coefficients are small integers or simple fractions. Keeping
//! them exact makes tree diffs compose without floating-point drift; only
//! evaluation drops to f64.

use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for coefficient construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoefficientError {
    #[error("Invalid coefficient format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    ZeroDenominator,
}

/// Largest denominator tried when displaying a non-integer coefficient
pub const DISPLAY_MAX_DENOMINATOR: i128 = 10;

/// Exact rational coefficient of a power of π
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coefficient {
    inner: RBig,
}

impl Coefficient {
    // ========== Construction ==========

    pub fn zero() -> Self {
        Self { inner: RBig::ZERO }
    }

    pub fn one() -> Self {
        Self { inner: RBig::ONE }
    }

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self { inner: RBig::from(IBig::from(n)) }
    }

    /// Create from ratio (exact, reduced). A zero denominator yields zero;
    /// use `checked_ratio` when the input is not a table literal.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        Self::checked_ratio(num, den).unwrap_or_else(|_| Self::zero())
    }

    pub fn checked_ratio(num: i64, den: i64) -> Result<Self, CoefficientError> {
        if den == 0 {
            return Err(CoefficientError::ZeroDenominator);
        }
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        let den = UBig::from(den.unsigned_abs());
        Ok(Self { inner: RBig::from_parts(num, den) })
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.inner == RBig::ZERO
    }

    pub fn is_one(&self) -> bool {
        self.inner == RBig::ONE
    }

    pub fn is_minus_one(&self) -> bool {
        self.inner == -RBig::ONE
    }

    pub fn is_integer(&self) -> bool {
        *self.inner.denominator() == UBig::ONE
    }

    pub fn is_negative(&self) -> bool {
        self.inner < RBig::ZERO
    }

    // ========== Arithmetic ==========

    pub fn add(&self, other: &Coefficient) -> Coefficient {
        Coefficient { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Coefficient) -> Coefficient {
        Coefficient { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Coefficient) -> Coefficient {
        Coefficient { inner: &self.inner * &other.inner }
    }

    pub fn neg(&self) -> Coefficient {
        Coefficient { inner: -self.inner.clone() }
    }

    pub fn abs(&self) -> Coefficient {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    // ========== Conversion ==========

    /// Numerator and denominator, if both fit in i128
    pub fn to_parts(&self) -> Option<(i128, i128)> {
        let num = i128::try_from(self.inner.numerator()).ok()?;
        let den = i128::try_from(self.inner.denominator()).ok()?;
        Some((num, den))
    }

    /// Convert to i64 when the value is a whole number
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        i64::try_from(self.inner.numerator()).ok()
    }

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> f64 {
        match self.to_parts() {
            Some((num, den)) => num as f64 / den as f64,
            None => {
                let num: f64 = self.inner.numerator().to_string().parse().unwrap_or(f64::NAN);
                let den: f64 = self.inner.denominator().to_string().parse().unwrap_or(f64::NAN);
                num / den
            }
        }
    }

    /// Closest fraction p/q with 1 <= q <= max_den.
    ///
    /// Denominators are tried in increasing order and the first one with the
    /// smallest absolute error wins, so exact matches keep their lowest terms.
    pub fn limit_denominator(&self, max_den: i128) -> Coefficient {
        let Some((num, den)) = self.to_parts() else {
            return self.clone();
        };
        if den <= max_den {
            return self.clone();
        }

        // Compare |num/den - p/q| as |num*q - p*den| / (den*q) using integers.
        let mut best: Option<(i128, i128)> = None;
        let mut best_err: Option<(i128, i128)> = None;
        for q in 1..=max_den.max(1) {
            let scaled = num * q;
            let p = (2 * scaled + den).div_euclid(2 * den);
            let err_num = (scaled - p * den).abs();
            let err_den = den * q;
            let better = match best_err {
                None => true,
                Some((en, ed)) => err_num * ed < en * err_den,
            };
            if better {
                best = Some((p, q));
                best_err = Some((err_num, err_den));
            }
        }

        match best {
            Some((p, q)) => match (i64::try_from(p), i64::try_from(q)) {
                (Ok(p), Ok(q)) => Coefficient::from_ratio(p, q),
                _ => self.clone(),
            },
            None => self.clone(),
        }
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Coefficient {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

/// Parses "6", "-2", "6/5", "-1/2"
impl FromStr for Coefficient {
    type Err = CoefficientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |part: &str| -> Result<i64, CoefficientError> {
            part.trim()
                .parse::<i64>()
                .map_err(|_| CoefficientError::ParseError(s.to_string()))
        };

        match s.split_once('/') {
            Some((num, den)) => Self::checked_ratio(parse(num)?, parse(den)?),
            None => Ok(Self::from_i64(parse(s)?)),
        }
    }
}

/// Whole numbers render as integers, anything else as a reduced `a/b`
/// after limiting the denominator to 10.
impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.inner.numerator());
        }
        let limited = self.limit_denominator(DISPLAY_MAX_DENOMINATOR);
        if limited.is_integer() {
            write!(f, "{}", limited.inner.numerator())
        } else {
            write!(f, "{}/{}", limited.inner.numerator(), limited.inner.denominator())
        }
    }
}
