//! Anomalous resonances
//!
//! Resonance formulas are pure polynomials: the terms that a ground-state
//! baryon would carry as a correction (1/π, constants, π/3) live directly in
//! the polynomial here.

use crate::{Correction, MassFormula, Polynomial};

#[derive(Debug, Clone)]
pub struct Resonance {
    pub key: String,
    pub name: String,
    pub symbol: String,
    pub mass_exp: f64,
    /// Spin-parity, e.g. "1/2-"
    pub jp: String,
    /// Width in MeV
    pub width: f64,
    pub quarks: String,
    pub polynomial: Polynomial,
    /// Why the state is considered anomalous
    pub anomaly: String,
    /// Ground-state particle key this resonance mirrors, if any
    pub mirrors: Option<String>,
}

impl Resonance {
    pub fn new(key: &str, name: &str, symbol: &str, mass_exp: f64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            mass_exp,
            jp: String::new(),
            width: 0.0,
            quarks: String::new(),
            polynomial: Polynomial::new(),
            anomaly: String::new(),
            mirrors: None,
        }
    }

    pub fn with_jp(mut self, jp: &str) -> Self {
        self.jp = jp.to_string();
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_quarks(mut self, quarks: &str) -> Self {
        self.quarks = quarks.to_string();
        self
    }

    pub fn with_polynomial(mut self, polynomial: Polynomial) -> Self {
        self.polynomial = polynomial;
        self
    }

    pub fn with_anomaly(mut self, anomaly: &str) -> Self {
        self.anomaly = anomaly.to_string();
        self
    }

    pub fn mirroring(mut self, particle_key: &str) -> Self {
        self.mirrors = Some(particle_key.to_string());
        self
    }
}

impl MassFormula for Resonance {
    fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    fn correction(&self) -> Option<&Correction> {
        None
    }

    fn mass_exp(&self) -> f64 {
        self.mass_exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{pi_pow, M_E, PI};

    #[test]
    fn test_lambda_1405() {
        let r = Resonance::new("Lambda_1405", "Lambda(1405)", "Λ(1405)", 1405.1)
            .with_polynomial(Polynomial::from_ints(&[(5, 9), (1, -1), (0, -1), (-1, -1)]))
            .mirroring("Lambda");
        let expected = (9.0 * pi_pow(5) - PI - 1.0 - 1.0 / PI) * M_E;
        assert!((r.mass_mev() - expected).abs() < 1e-9);
        assert_eq!(r.correction_value(), 0.0);
        assert_eq!(r.mirrors.as_deref(), Some("Lambda"));
    }

    #[test]
    fn test_fractional_terms() {
        // N(1535): 9π⁵ + 2π⁴ + π²/2 + π/3
        let r = Resonance::new("N_1535", "N(1535)", "N(1535)", 1510.0).with_polynomial(
            Polynomial::from_ints(&[(5, 9), (4, 2)]).with_ratio(2, 1, 2).with_ratio(1, 1, 3),
        );
        let expected = 9.0 * pi_pow(5) + 2.0 * pi_pow(4) + pi_pow(2) / 2.0 + PI / 3.0;
        assert!((r.mass_me() - expected).abs() < 1e-9);
    }
}
