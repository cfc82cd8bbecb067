//! Baryon magnetic moments as single π-fractions, in nuclear magnetons

use crate::constants::PI;

/// μ = N·π^k / D.
///
/// `pi_power` follows the table convention: negative means π sits in the
/// numerator (N·π^|k|/D), positive means N/π^k, zero means N/D.
#[derive(Debug, Clone)]
pub struct MagneticMoment {
    pub key: String,
    pub name: String,
    pub symbol: String,
    pub latex_symbol: String,
    /// Experimental moment in μ_N
    pub mu_exp: f64,
    pub numerator: i64,
    pub pi_power: i32,
    pub denominator: i64,
    pub charge: i32,
    pub strangeness: i32,
    /// Grouping such as "6-chain" or "20-family"
    pub family: String,
}

impl MagneticMoment {
    pub fn new(key: &str, name: &str, symbol: &str, latex_symbol: &str, mu_exp: f64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            latex_symbol: latex_symbol.to_string(),
            mu_exp,
            numerator: 1,
            pi_power: 0,
            denominator: 1,
            charge: 0,
            strangeness: 0,
            family: String::new(),
        }
    }

    /// Builder: formula N·π^k/D in table convention
    pub fn with_formula(mut self, numerator: i64, pi_power: i32, denominator: i64) -> Self {
        self.numerator = numerator;
        self.pi_power = pi_power;
        self.denominator = denominator;
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

    pub fn in_family(mut self, family: &str) -> Self {
        self.family = family.to_string();
        self
    }

    pub fn mu_calc(&self) -> f64 {
        let n = self.numerator as f64;
        match self.pi_power {
            k if k < 0 => n * PI.powi(-k) / self.denominator as f64,
            0 => n / self.denominator as f64,
            k => n / PI.powi(k),
        }
    }

    pub fn error_percent(&self) -> f64 {
        100.0 * (self.mu_calc() - self.mu_exp).abs() / self.mu_exp.abs()
    }

    pub fn formula_latex(&self) -> String {
        let sign = if self.mu_exp >= 0.0 { "" } else { "-" };
        let n = self.numerator.abs();
        match self.pi_power {
            -1 => format!(r"{}\frac{{{}\pi}}{{{}}}", sign, n, self.denominator),
            k if k < 0 => format!(r"{}\frac{{{}\pi^{}}}{{{}}}", sign, n, -k, self.denominator),
            0 => format!(r"{}\frac{{{}}}{{{}}}", sign, n, self.denominator),
            1 => format!(r"{}\frac{{{}}}{{\pi}}", sign, n),
            k => format!(r"{}\frac{{{}}}{{\pi^{}}}", sign, n, k),
        }
    }

    /// Compact Unicode form, e.g. "8π/9", "-6/π", "-20/π²"
    pub fn formula_display(&self) -> String {
        let sign = if self.mu_exp >= 0.0 { "" } else { "-" };
        let n = self.numerator.abs();
        match self.pi_power {
            k if k < 0 => format!("{}{}{}/{}", sign, n, pi_label(-k), self.denominator),
            0 => format!("{}{}/{}", sign, n, self.denominator),
            k => format!("{}{}/{}", sign, n, pi_label(k)),
        }
    }
}

fn pi_label(power: i32) -> String {
    match power {
        1 => "π".to_string(),
        2 => "π²".to_string(),
        3 => "π³".to_string(),
        k => format!("π^{}", k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proton() -> MagneticMoment {
        MagneticMoment::new("p", "Proton", "p", "p", 2.7928473508)
            .with_formula(8, -1, 9)
            .with_charge(1)
    }

    #[test]
    fn test_proton_moment() {
        let p = proton();
        assert!((p.mu_calc() - 8.0 * PI / 9.0).abs() < 1e-12);
        assert!((p.mu_calc() - 2.7925).abs() < 1e-4);
        assert!(p.error_percent() < 0.02);
    }

    #[test]
    fn test_inverse_power() {
        let omega = MagneticMoment::new("Omega", "Omega", "Ω⁻", r"\Omega^-", -2.02)
            .with_formula(-20, 2, 1);
        assert!((omega.mu_calc() + 20.0 / (PI * PI)).abs() < 1e-12);
        assert_eq!(omega.formula_latex(), r"-\frac{20}{\pi^2}");
        assert_eq!(omega.formula_display(), "-20/π²");
    }

    #[test]
    fn test_formula_strings() {
        let p = proton();
        assert_eq!(p.formula_latex(), r"\frac{8\pi}{9}");
        assert_eq!(p.formula_display(), "8π/9");

        let n = MagneticMoment::new("n", "Neutron", "n", "n", -1.9130427).with_formula(-6, 1, 1);
        assert_eq!(n.formula_latex(), r"-\frac{6}{\pi}");
    }
}
