//! Baryons with π-algebra mass formulas

use crate::{Correction, MassFormula, Polynomial};
use serde::{Deserialize, Serialize};

/// Baryon spin, which also decides the multiplet in the light sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spin {
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "3/2")]
    ThreeHalves,
}

impl Spin {
    pub fn label(self) -> &'static str {
        match self {
            Spin::Half => "1/2",
            Spin::ThreeHalves => "3/2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Multiplet {
    Octet,
    Decuplet,
}

/// Flavour family; each has its own coefficient tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Light,
    Charm,
    DoubleCharm,
    Bottom,
}

/// A baryon and its mass formula
#[derive(Debug, Clone)]
pub struct Particle {
    /// Table key, e.g. "Sigma+"
    pub key: String,
    pub name: String,
    /// Unicode symbol, e.g. "Σ⁺"
    pub symbol: String,
    pub latex_symbol: String,
    /// Experimental mass in MeV
    pub mass_exp: f64,
    pub polynomial: Polynomial,
    pub correction: Option<Correction>,
    pub spin: Spin,
    pub charge: i32,
    pub strangeness: i32,
    pub multiplet: Multiplet,
    pub family: Family,
    /// Id of this particle's node in its coefficient tree
    pub node_id: String,
    pub quarks: String,
}

impl Particle {
    pub fn new(key: &str, name: &str, symbol: &str, latex_symbol: &str, mass_exp: f64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            latex_symbol: latex_symbol.to_string(),
            mass_exp,
            polynomial: Polynomial::new(),
            correction: None,
            spin: Spin::Half,
            charge: 0,
            strangeness: 0,
            multiplet: Multiplet::Octet,
            family: Family::Light,
            node_id: key.to_string(),
            quarks: String::new(),
        }
    }

    pub fn with_polynomial(mut self, polynomial: Polynomial) -> Self {
        self.polynomial = polynomial;
        self
    }

    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = Some(correction);
        self
    }

    /// Builder: spin also sets the multiplet (1/2 → octet, 3/2 → decuplet)
    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = spin;
        self.multiplet = match spin {
            Spin::Half => Multiplet::Octet,
            Spin::ThreeHalves => Multiplet::Decuplet,
        };
        self
    }

    pub fn with_charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_strangeness(mut self, strangeness: i32) -> Self {
        self.strangeness = strangeness;
        self
    }

    pub fn in_family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }

    pub fn at_node(mut self, node_id: &str) -> Self {
        self.node_id = node_id.to_string();
        self
    }

    pub fn with_quarks(mut self, quarks: &str) -> Self {
        self.quarks = quarks.to_string();
        self
    }

    /// Full equation `m_{X} = …`
    pub fn full_latex(&self) -> String {
        format!("m_{{{}}} = {}", self.latex_symbol, self.formula_latex())
    }

    /// Signed charge label: "+2", "+1", "0", "-1"
    pub fn charge_label(&self) -> String {
        if self.charge > 0 {
            format!("+{}", self.charge)
        } else {
            self.charge.to_string()
        }
    }
}

impl MassFormula for Particle {
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
    use crate::constants::{e_neg_pi, pi_pow, M_E};
    use crate::Atom;

    fn proton() -> Particle {
        Particle::new("p", "Proton", "p", "p", 938.27208816)
            .with_polynomial(Polynomial::from_ints(&[(5, 6)]))
            .with_correction(Correction::ratio(4, 5, Atom::ExpNegPi))
            .with_charge(1)
            .with_quarks("uud")
    }

    #[test]
    fn test_mass_identity() {
        let p = proton();
        let expected = (6.0 * pi_pow(5) + 0.8 * e_neg_pi()) * M_E;
        assert!((p.mass_mev() - expected).abs() <= 1e-9 * expected);
    }

    #[test]
    fn test_proton_within_one_kev() {
        let p = proton();
        assert!(p.error_kev().abs() < 1.0, "proton error {} keV", p.error_kev());
    }

    #[test]
    fn test_error_units() {
        let p = proton();
        assert_eq!(p.error_kev(), p.error_mev() * 1000.0);
        assert_eq!(p.error_ev(), p.error_mev() * 1e6);
        assert_eq!(p.error_ppm(), 1e6 * p.error_mev() / p.mass_exp);
    }

    #[test]
    fn test_residual() {
        let p = proton();
        assert!((p.residual_me() - p.correction_value()).abs() < 1e-3);
    }

    #[test]
    fn test_spin_sets_multiplet() {
        let d = Particle::new("Delta++", "Delta++", "Δ⁺⁺", r"\Delta^{++}", 1232.0)
            .with_spin(Spin::ThreeHalves);
        assert_eq!(d.multiplet, Multiplet::Decuplet);
        assert_eq!(d.spin.label(), "3/2");
    }

    #[test]
    fn test_latex() {
        let p = proton();
        assert_eq!(p.full_latex(), r"m_{p} = 6\pi^{5} + \frac{4}{5}e^{-\pi}");
        assert_eq!(p.charge_label(), "+1");
    }
}
