//! Mesons and leptons
//!
//! Same formula shape as baryons, but the polynomial reaches down to π¹ and
//! the constant term, and those low coefficients are often fractions.

use crate::{Correction, MassFormula, Polynomial};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MesonKind {
    Meson,
    Lepton,
}

#[derive(Debug, Clone)]
pub struct Meson {
    pub key: String,
    pub name: String,
    pub symbol: String,
    pub latex_symbol: String,
    pub mass_exp: f64,
    /// Quark content in LaTeX, e.g. `u\bar{d}`
    pub quarks: String,
    pub polynomial: Polynomial,
    pub correction: Option<Correction>,
    /// J quantum number
    pub spin: u32,
    pub kind: MesonKind,
}

impl Meson {
    pub fn new(key: &str, name: &str, symbol: &str, latex_symbol: &str, mass_exp: f64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            latex_symbol: latex_symbol.to_string(),
            mass_exp,
            quarks: String::new(),
            polynomial: Polynomial::new(),
            correction: None,
            spin: 0,
            kind: MesonKind::Meson,
        }
    }

    pub fn with_quarks(mut self, quarks: &str) -> Self {
        self.quarks = quarks.to_string();
        self
    }

    pub fn with_polynomial(mut self, polynomial: Polynomial) -> Self {
        self.polynomial = polynomial;
        self
    }

    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = Some(correction);
        self
    }

    pub fn with_spin(mut self, spin: u32) -> Self {
        self.spin = spin;
        self
    }

    pub fn lepton(mut self) -> Self {
        self.kind = MesonKind::Lepton;
        self
    }

    /// π⁵ coefficient, which labels the meson's mass band
    pub fn c5(&self) -> i64 {
        self.polynomial.coefficient(5).to_i64().unwrap_or(0)
    }
}

impl MassFormula for Meson {
    fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    fn correction(&self) -> Option<&Correction> {
        self.correction.as_ref()
    }

    fn mass_exp(&self) -> f64 {
        self.mass_exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Atom, Polynomial};

    #[test]
    fn test_pion_formula() {
        let pion = Meson::new("pi_pm", "Pion±", "π±", r"\pi^\pm", 139.57039)
            .with_polynomial(Polynomial::from_ints(&[(5, 1), (3, -1), (1, -1), (0, 1)]))
            .with_correction(Correction::ratio(6, 1, Atom::ExpNegPi));
        assert_eq!(pion.formula_latex(), r"\pi^{5} - \pi^{3} - \pi + 1 + 6e^{-\pi}");
        assert!(pion.error_percent() < 0.01);
        assert_eq!(pion.c5(), 1);
    }

    #[test]
    fn test_fractional_rho() {
        let rho = Meson::new("rho", "Rho", "ρ", r"\rho", 775.11)
            .with_polynomial(
                Polynomial::from_ints(&[(5, 5), (2, -1)]).with_ratio(1, -6, 5).with_ratio(0, 2, 5),
            )
            .with_spin(1);
        assert_eq!(rho.formula_latex(), r"5\pi^{5} - \pi^{2} - \frac{6}{5}\pi + \frac{2}{5}");
        assert!(rho.error_percent() < 0.01);
    }

    #[test]
    fn test_lepton_kind() {
        let mu = Meson::new("muon", "Muon", "μ", r"\mu", 105.6583755).lepton();
        assert_eq!(mu.kind, MesonKind::Lepton);
    }
}
