//! Sparse polynomials in π with exact coefficients

use crate::constants::pi_pow;
use crate::Coefficient;
use std::collections::BTreeMap;

/// Σ c_p · π^p over a sparse set of powers.
///
/// Zero coefficients are never stored, so two polynomials are equal exactly
/// when they have the same non-zero terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: BTreeMap<i32, Coefficient>,
}

impl Polynomial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from integer coefficients, e.g. `&[(5, 7), (3, 6)]` for 7π⁵ + 6π³
    pub fn from_ints(terms: &[(i32, i64)]) -> Self {
        terms
            .iter()
            .fold(Self::new(), |poly, &(power, c)| poly.with_term(power, Coefficient::from_i64(c)))
    }

    /// Builder: add `coefficient · π^power` to this polynomial
    pub fn with_term(mut self, power: i32, coefficient: Coefficient) -> Self {
        let sum = self.coefficient(power).add(&coefficient);
        if sum.is_zero() {
            self.terms.remove(&power);
        } else {
            self.terms.insert(power, sum);
        }
        self
    }

    /// Builder: add `(num/den) · π^power`
    pub fn with_ratio(self, power: i32, num: i64, den: i64) -> Self {
        self.with_term(power, Coefficient::from_ratio(num, den))
    }

    /// Coefficient of π^power (zero when absent)
    pub fn coefficient(&self, power: i32) -> Coefficient {
        self.terms.get(&power).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Non-zero terms, highest power first
    pub fn terms_descending(&self) -> impl Iterator<Item = (i32, &Coefficient)> {
        self.terms.iter().rev().map(|(p, c)| (*p, c))
    }

    pub fn leading_power(&self) -> Option<i32> {
        self.terms.keys().next_back().copied()
    }

    /// Numerical value in electron masses
    pub fn value(&self) -> f64 {
        self.terms.iter().map(|(p, c)| c.to_f64() * pi_pow(*p)).sum()
    }

    /// Per-power difference `self − parent`, zero terms dropped
    pub fn diff(&self, parent: &Polynomial) -> Polynomial {
        let mut out = self.clone();
        for (power, c) in &parent.terms {
            out = out.with_term(*power, c.neg());
        }
        out
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut out = self.clone();
        for (power, c) in &other.terms {
            out = out.with_term(*power, c.clone());
        }
        out
    }

    /// LaTeX source for the polynomial, e.g. `9\pi^5 + 2\pi^3 + \frac{1}{2}\pi^2 - \pi`
    pub fn to_latex(&self) -> String {
        let mut out = String::new();
        for (power, c) in self.terms_descending() {
            let body = term_latex(&c.abs(), power);
            if out.is_empty() {
                if c.is_negative() {
                    out.push('-');
                }
            } else {
                out.push_str(if c.is_negative() { " - " } else { " + " });
            }
            out.push_str(&body);
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

/// LaTeX for `c · π^power` with a non-negative coefficient
fn term_latex(c: &Coefficient, power: i32) -> String {
    let pi = match power {
        0 => String::new(),
        1 => r"\pi".to_string(),
        p => format!(r"\pi^{{{}}}", p),
    };

    if power < 0 {
        let (num, den) = c.to_parts().unwrap_or((1, 1));
        let pi_den = if power == -1 { r"\pi".to_string() } else { format!(r"\pi^{{{}}}", -power) };
        return if den == 1 {
            format!(r"\frac{{{}}}{{{}}}", num, pi_den)
        } else {
            format!(r"\frac{{{}}}{{{}{}}}", num, den, pi_den)
        };
    }

    if c.is_integer() {
        if c.is_one() && power != 0 {
            pi
        } else {
            format!("{}{}", c, pi)
        }
    } else {
        let (num, den) = c.to_parts().unwrap_or((1, 1));
        format!(r"\frac{{{}}}{{{}}}{}", num, den, pi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{pi_pow, PI};

    #[test]
    fn test_zero_terms_not_stored() {
        let p = Polynomial::from_ints(&[(5, 7), (3, 0)]);
        assert_eq!(p.len(), 1);
        assert_eq!(p, Polynomial::from_ints(&[(5, 7)]));
    }

    #[test]
    fn test_value() {
        let p = Polynomial::from_ints(&[(5, 7), (3, 6), (2, 1)]);
        let expected = 7.0 * pi_pow(5) + 6.0 * pi_pow(3) + pi_pow(2);
        assert!((p.value() - expected).abs() < 1e-9);

        let q = Polynomial::new().with_ratio(-1, 1, 2);
        assert!((q.value() - 1.0 / (2.0 * PI)).abs() < 1e-15);
    }

    #[test]
    fn test_diff() {
        let child = Polynomial::from_ints(&[(5, 8), (4, 6), (3, -1)]);
        let parent = Polynomial::from_ints(&[(5, 8)]);
        assert_eq!(child.diff(&parent), Polynomial::from_ints(&[(4, 6), (3, -1)]));
        assert!(child.diff(&child).is_empty());
    }

    #[test]
    fn test_diff_with_missing_child_power() {
        let child = Polynomial::from_ints(&[(5, 7)]);
        let parent = Polynomial::from_ints(&[(5, 7), (3, 6)]);
        assert_eq!(child.diff(&parent).coefficient(3).to_i64(), Some(-6));
    }

    #[test]
    fn test_terms_descending() {
        let p = Polynomial::from_ints(&[(2, 1), (5, 7), (3, 6)]);
        let powers: Vec<i32> = p.terms_descending().map(|(power, _)| power).collect();
        assert_eq!(powers, vec![5, 3, 2]);
        assert_eq!(p.leading_power(), Some(5));
    }

    #[test]
    fn test_to_latex() {
        let p = Polynomial::from_ints(&[(5, 7), (3, 6), (2, 1)]);
        assert_eq!(p.to_latex(), r"7\pi^{5} + 6\pi^{3} + \pi^{2}");

        let roper = Polynomial::from_ints(&[(5, 9), (3, 2), (1, -1)]).with_ratio(2, 1, 2);
        assert_eq!(roper.to_latex(), r"9\pi^{5} + 2\pi^{3} + \frac{1}{2}\pi^{2} - \pi");

        let lambda_1405 = Polynomial::from_ints(&[(5, 9), (1, -1), (0, -1), (-1, -1)]);
        assert_eq!(lambda_1405.to_latex(), r"9\pi^{5} - \pi - 1 - \frac{1}{\pi}");

        let half = Polynomial::new().with_ratio(-1, -1, 2);
        assert_eq!(half.to_latex(), r"-\frac{1}{2\pi}");

        assert_eq!(Polynomial::new().to_latex(), "0");
    }
}
