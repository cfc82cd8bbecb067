//! Anomalous resonances
//!
//! The 9π⁵ family mirrors ground-state baryons with every structural "6"
//! replaced by "2": Σ (6π³) → N(1440) (2π³), Σ* (6π⁴) → N(1535) (2π⁴),
//! Ξ* (6π⁴ − π³) → Λ(1520) (2π⁴ + π³). Λ(1405) mirrors Λ with neither.

use lambda7_core::{Polynomial, Resonance};

fn poly(ints: &[(i32, i64)]) -> Polynomial {
    Polynomial::from_ints(ints)
}

pub fn resonances() -> Vec<Resonance> {
    vec![
        Resonance::new("Lambda_1405", "Lambda(1405)", "Λ(1405)", 1405.1)
            .with_jp("1/2-")
            .with_width(50.5)
            .with_quarks("uds")
            .with_polynomial(poly(&[(5, 9), (1, -1), (0, -1), (-1, -1)]))
            .with_anomaly("Too light by ~100-200 MeV; may be K̄N molecular state")
            .mirroring("Lambda"),
        Resonance::new("Roper", "Roper N(1440)", "N(1440)", 1440.0)
            .with_jp("1/2+")
            .with_width(300.0)
            .with_quarks("uud")
            .with_polynomial(poly(&[(5, 9), (3, 2), (1, -1)]).with_ratio(2, 1, 2))
            .with_anomaly("First radial excitation appears below orbital excitations")
            .mirroring("Sigma0"),
        Resonance::new("N_1535", "N(1535)", "N(1535)", 1510.0)
            .with_jp("1/2-")
            .with_width(170.0)
            .with_quarks("uud")
            .with_polynomial(poly(&[(5, 9), (4, 2)]).with_ratio(2, 1, 2).with_ratio(1, 1, 3))
            .with_anomaly("Nearly degenerate with opposite-parity Roper")
            .mirroring("Sigma*0"),
        Resonance::new("Lambda_1520", "Lambda(1520)", "Λ(1520)", 1519.5)
            .with_jp("3/2-")
            .with_width(15.6)
            .with_quarks("uds")
            .with_polynomial(poly(&[(5, 9), (4, 2), (3, 1), (1, -2)]).with_ratio(-1, 1, 2))
            .with_anomaly("Unusually narrow width; well-established D-wave state")
            .mirroring("Xi*0"),
        Resonance::new("N_1680", "N(1680)", "N(1680)", 1685.0)
            .with_jp("5/2+")
            .with_width(130.0)
            .with_quarks("uud")
            .with_polynomial(poly(&[(5, 9), (4, 6), (3, -1), (2, -1), (-1, -1)]))
            .with_anomaly("F15 resonance; shares 9π⁵ + 6π⁴ base structure"),
        Resonance::new("Delta_1700", "Δ(1700)", "Δ(1700)", 1700.0)
            .with_jp("3/2-")
            .with_width(300.0)
            .with_quarks("uud")
            .with_polynomial(poly(&[(5, 9), (4, 6), (2, -1), (0, -2)]))
            .with_anomaly("D33 resonance; shares 9π⁵ + 6π⁴ base structure"),
        Resonance::new("X_3872", "X(3872)", "X(3872)", 3871.65)
            .with_jp("1++")
            .with_width(1.19)
            .with_quarks("cc̄ + DD̄*")
            .with_polynomial(poly(&[(6, 8), (5, -1), (4, 2), (1, -1)]).with_ratio(-1, -1, 2))
            .with_anomaly("Sits exactly at D⁰D̄*⁰ threshold; likely molecular or tetraquark"),
        Resonance::new("N_2190", "N(2190)", "N(2190)", 2190.0)
            .with_jp("7/2-")
            .with_width(500.0)
            .with_quarks("uud")
            .with_polynomial(poly(&[(7, 1), (6, 1), (5, 1), (0, -2)]))
            .with_anomaly("High-spin G17 resonance; mass equals [3]_π · π⁵ - 2 (q-integer structure)"),
    ]
}

/// Rows of the 9π⁵ term comparison: power, row label, display scale.
/// The π² row is read in units of π²/2.
pub const TERM_ROWS: &[(i32, &str, i64)] = &[
    (5, "π⁵", 1),
    (4, "π⁴", 1),
    (3, "π³", 1),
    (2, "π²/2", 2),
    (1, "π", 1),
    (0, "const", 1),
    (-1, "1/π", 1),
];

pub const MIRROR_RULE: &str = "Ground-state \"6\" coefficients become \"2\" in mirror states (6/3 = 2).";

/// Which ground-state structure a mirror resonance copies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorNote {
    pub key: &'static str,
    pub kind: &'static str,
    pub note: &'static str,
}

pub fn mirror_notes() -> Vec<MirrorNote> {
    let note = |key, kind, note| MirrorNote { key, kind, note };
    vec![
        note("Lambda_1405", "λ-type", "stripped (neither π⁴ nor π³)"),
        note("Roper", "σ-type", "+2π³ (mirrors Σ with 6π³ → 2π³)"),
        note("N_1535", "η-type", "+2π⁴ (mirrors Σ* with 6π⁴ → 2π⁴)"),
        note("Lambda_1520", "η′-type", "+2π⁴ + π³ (mirrors Ξ* with 6π⁴ - π³ → 2π⁴ + π³)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda7_core::MassFormula;

    #[test]
    fn test_resonance_accuracy() {
        for r in resonances() {
            assert!(r.error_mev().abs() < 0.2, "{}: {} MeV", r.key, r.error_mev());
        }
    }

    #[test]
    fn test_lambda_1520_offset() {
        let r = resonances()
            .into_iter()
            .find(|r| r.key == "Lambda_1520")
            .expect("Λ(1520)");
        assert!((r.error_mev().abs() - 0.148).abs() < 0.001, "{} MeV", r.error_mev());
    }

    #[test]
    fn test_mirror_notes_name_mirrors() {
        let table = resonances();
        for n in mirror_notes() {
            let r = table.iter().find(|r| r.key == n.key).expect("resonance");
            assert!(r.mirrors.is_some(), "{}", n.key);
        }
        assert_eq!(table.iter().filter(|r| r.mirrors.is_some()).count(), mirror_notes().len());
    }

    #[test]
    fn test_term_rows_cover_mirror_polynomials() {
        for r in resonances().iter().filter(|r| r.mirrors.is_some()) {
            for power in r.polynomial.terms_descending().map(|(p, _)| p) {
                assert!(TERM_ROWS.iter().any(|&(row, _, _)| row == power), "{}: π^{}", r.key, power);
            }
        }
    }

    #[test]
    fn test_mirror_family_shares_base() {
        for r in resonances().iter().filter(|r| r.mirrors.is_some()) {
            assert_eq!(r.polynomial.coefficient(5).to_i64(), Some(9), "{}", r.key);
        }
    }
}
