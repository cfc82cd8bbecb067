//! Mass-formula evaluation shared by every entity with a π polynomial

use crate::constants::M_E;
use crate::{Correction, Polynomial};

/// `mass_me = Σ c_p·π^p + correction`, `mass_mev = mass_me · M_E`.
///
/// Implementors only supply the data; every derived quantity is a provided
/// method so all entities agree on units and sign conventions.
pub trait MassFormula {
    fn polynomial(&self) -> &Polynomial;

    fn correction(&self) -> Option<&Correction>;

    /// Experimental mass in MeV (non-zero by construction)
    fn mass_exp(&self) -> f64;

    /// Polynomial part in electron masses
    fn mass_base(&self) -> f64 {
        self.polynomial().value()
    }

    fn correction_value(&self) -> f64 {
        self.correction().map_or(0.0, Correction::value)
    }

    fn mass_me(&self) -> f64 {
        self.mass_base() + self.correction_value()
    }

    fn mass_mev(&self) -> f64 {
        self.mass_me() * M_E
    }

    fn error_mev(&self) -> f64 {
        self.mass_mev() - self.mass_exp()
    }

    fn error_kev(&self) -> f64 {
        self.error_mev() * 1000.0
    }

    fn error_ev(&self) -> f64 {
        self.error_mev() * 1e6
    }

    fn error_ppm(&self) -> f64 {
        1e6 * self.error_mev() / self.mass_exp()
    }

    fn error_percent(&self) -> f64 {
        100.0 * self.error_mev().abs() / self.mass_exp()
    }

    /// What the correction has to supply: `mass_exp / M_E − mass_base`
    fn residual_me(&self) -> f64 {
        self.mass_exp() / M_E - self.mass_base()
    }

    /// LaTeX for the full formula, polynomial then correction
    fn formula_latex(&self) -> String {
        let base = self.polynomial().to_latex();
        match self.correction() {
            Some(corr) => {
                let latex = corr.to_latex();
                if self.polynomial().is_empty() {
                    latex
                } else if let Some(rest) = latex.strip_prefix('-') {
                    format!("{} - {}", base, rest)
                } else {
                    format!("{} + {}", base, latex)
                }
            }
            None => base,
        }
    }
}
