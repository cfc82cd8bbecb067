//! Closed-form correction terms
//!
//! A correction is a small expression tree over a fixed set of atoms. The
//! same tree is evaluated for the mass and rendered to LaTeX for display.

use crate::constants::{e_neg_pi, PHI, PI, Q2_PI};
use crate::Coefficient;

/// Transcendental building blocks of a correction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    One,
    Pi,
    InvPi,
    /// e^(−π)
    ExpNegPi,
    LnPi,
    Phi,
    /// 1/[2]_π = 1/(π + 1)
    InvQ2Pi,
}

impl Atom {
    pub fn value(self) -> f64 {
        match self {
            Atom::One => 1.0,
            Atom::Pi => PI,
            Atom::InvPi => 1.0 / PI,
            Atom::ExpNegPi => e_neg_pi(),
            Atom::LnPi => PI.ln(),
            Atom::Phi => PHI,
            Atom::InvQ2Pi => 1.0 / Q2_PI,
        }
    }

    /// LaTeX for `c · atom` with c > 0
    fn latex(self, c: &Coefficient) -> String {
        let (num, den) = c.to_parts().unwrap_or((1, 1));
        let whole = den == 1;
        match self {
            Atom::One => {
                if whole {
                    num.to_string()
                } else {
                    format!(r"\frac{{{}}}{{{}}}", num, den)
                }
            }
            // Fractions keep π inside the numerator: \frac{7\pi}{5}
            Atom::Pi => match (num, whole) {
                (1, true) => r"\pi".to_string(),
                (_, true) => format!(r"{}\pi", num),
                (1, false) => format!(r"\frac{{\pi}}{{{}}}", den),
                _ => format!(r"\frac{{{}\pi}}{{{}}}", num, den),
            },
            Atom::InvPi => {
                if whole {
                    format!(r"\frac{{{}}}{{\pi}}", num)
                } else {
                    format!(r"\frac{{{}}}{{{}\pi}}", num, den)
                }
            }
            Atom::InvQ2Pi => {
                if whole {
                    format!(r"\frac{{{}}}{{[2]_\pi}}", num)
                } else {
                    format!(r"\frac{{{}}}{{{}[2]_\pi}}", num, den)
                }
            }
            Atom::ExpNegPi => prefixed(num, den, r"e^{-\pi}"),
            Atom::LnPi => prefixed(num, den, r"\ln\pi"),
            Atom::Phi => prefixed(num, den, r"\varphi"),
        }
    }
}

fn prefixed(num: i128, den: i128, symbol: &str) -> String {
    match (num, den) {
        (1, 1) => symbol.to_string(),
        (_, 1) => format!("{}{}", num, symbol),
        _ => format!(r"\frac{{{}}}{{{}}}{}", num, den, symbol),
    }
}

/// Correction added to the base polynomial, in electron masses
#[derive(Debug, Clone, PartialEq)]
pub enum Correction {
    /// c · atom
    Term(Coefficient, Atom),
    Sum(Vec<Correction>),
    /// c · (inner), rendered with \left( \right)
    Scaled(Coefficient, Box<Correction>),
}

impl Correction {
    // ========== Construction ==========

    pub fn term(c: Coefficient, atom: Atom) -> Self {
        Correction::Term(c, atom)
    }

    /// Rational constant num/den
    pub fn constant(num: i64, den: i64) -> Self {
        Correction::Term(Coefficient::from_ratio(num, den), Atom::One)
    }

    /// (num/den) · atom
    pub fn ratio(num: i64, den: i64, atom: Atom) -> Self {
        Correction::Term(Coefficient::from_ratio(num, den), atom)
    }

    pub fn sum(terms: Vec<Correction>) -> Self {
        Correction::Sum(terms)
    }

    /// (num/den) · (inner)
    pub fn scaled(num: i64, den: i64, inner: Correction) -> Self {
        Correction::Scaled(Coefficient::from_ratio(num, den), Box::new(inner))
    }

    // ========== Evaluation ==========

    pub fn value(&self) -> f64 {
        match self {
            Correction::Term(c, atom) => c.to_f64() * atom.value(),
            Correction::Sum(terms) => terms.iter().map(Correction::value).sum(),
            Correction::Scaled(c, inner) => c.to_f64() * inner.value(),
        }
    }

    pub fn is_negative_leading(&self) -> bool {
        match self {
            Correction::Term(c, _) | Correction::Scaled(c, _) => c.is_negative(),
            Correction::Sum(terms) => terms.first().is_some_and(Correction::is_negative_leading),
        }
    }

    // ========== Rendering ==========

    pub fn to_latex(&self) -> String {
        match self {
            Correction::Term(c, atom) => {
                let body = atom.latex(&c.abs());
                if c.is_negative() {
                    format!("-{}", body)
                } else {
                    body
                }
            }
            Correction::Sum(terms) => {
                let mut out = String::new();
                for term in terms {
                    let latex = term.to_latex();
                    if out.is_empty() {
                        out.push_str(&latex);
                    } else if let Some(rest) = latex.strip_prefix('-') {
                        out.push_str(" - ");
                        out.push_str(rest);
                    } else {
                        out.push_str(" + ");
                        out.push_str(&latex);
                    }
                }
                if out.is_empty() {
                    out.push('0');
                }
                out
            }
            Correction::Scaled(c, inner) => {
                let sign = if c.is_negative() { "-" } else { "" };
                let abs = c.abs();
                let factor = match abs.to_parts() {
                    Some((1, 1)) => String::new(),
                    Some((num, 1)) => num.to_string(),
                    Some((num, den)) => format!(r"\frac{{{}}}{{{}}}", num, den),
                    None => abs.to_string(),
                };
                format!(r"{}{}\left({}\right)", sign, factor, inner.to_latex())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::e_neg_pi;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * b.abs().max(1.0)
    }

    #[test]
    fn test_term_value() {
        let c = Correction::ratio(4, 5, Atom::ExpNegPi);
        assert!(close(c.value(), 0.8 * e_neg_pi()));
        assert!(close(Correction::ratio(8, 1, Atom::InvPi).value(), 8.0 / PI));
    }

    #[test]
    fn test_scaled_value() {
        // (2/5)(4 - π - (5/4)e^(-π))
        let c = Correction::scaled(
            2,
            5,
            Correction::sum(vec![
                Correction::constant(4, 1),
                Correction::ratio(-1, 1, Atom::Pi),
                Correction::ratio(-5, 4, Atom::ExpNegPi),
            ]),
        );
        let expected = 0.4 * (4.0 - PI - 1.25 * e_neg_pi());
        assert!(close(c.value(), expected));
    }

    #[test]
    fn test_q_integer_value() {
        let c = Correction::ratio(1, 1, Atom::InvQ2Pi);
        assert!(close(c.value(), 1.0 / (PI + 1.0)));
    }

    #[test]
    fn test_simple_latex() {
        assert_eq!(Correction::ratio(4, 5, Atom::ExpNegPi).to_latex(), r"\frac{4}{5}e^{-\pi}");
        assert_eq!(Correction::ratio(8, 1, Atom::InvPi).to_latex(), r"\frac{8}{\pi}");
        assert_eq!(Correction::ratio(-4, 1, Atom::InvPi).to_latex(), r"-\frac{4}{\pi}");
        assert_eq!(Correction::constant(-23, 5).to_latex(), r"-\frac{23}{5}");
        assert_eq!(Correction::constant(2, 1).to_latex(), "2");
        assert_eq!(Correction::ratio(-7, 5, Atom::Pi).to_latex(), r"-\frac{7\pi}{5}");
        assert_eq!(Correction::ratio(-20, 1, Atom::ExpNegPi).to_latex(), r"-20e^{-\pi}");
    }

    #[test]
    fn test_grouped_latex() {
        let sigma_minus = Correction::scaled(
            1,
            5,
            Correction::sum(vec![
                Correction::ratio(11, 1, Atom::Pi),
                Correction::constant(-8, 1),
                Correction::ratio(-1, 1, Atom::ExpNegPi),
            ]),
        );
        assert_eq!(sigma_minus.to_latex(), r"\frac{1}{5}\left(11\pi - 8 - e^{-\pi}\right)");

        let sigma_zero = Correction::scaled(
            -4,
            5,
            Correction::sum(vec![
                Correction::ratio(1, 1, Atom::Pi),
                Correction::constant(2, 1),
                Correction::ratio(-1, 4, Atom::ExpNegPi),
            ]),
        );
        assert_eq!(
            sigma_zero.to_latex(),
            r"-\frac{4}{5}\left(\pi + 2 - \frac{1}{4}e^{-\pi}\right)"
        );
    }

    #[test]
    fn test_negative_leading() {
        assert!(Correction::constant(-9, 5).is_negative_leading());
        assert!(!Correction::ratio(6, 5, Atom::Pi).is_negative_leading());
        assert!(Correction::sum(vec![Correction::ratio(-18, 5, Atom::Pi)]).is_negative_leading());
    }
}
