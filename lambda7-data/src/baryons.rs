//! Light baryons: the spin-1/2 octet and spin-3/2 decuplet
//!
//! Octet: c4 = 0 except Ξ (c4 = 1). Decuplet: c4 = 6 throughout.
//! Strangeness shifts the base: c5 = 6 + |S|.

use lambda7_core::{Atom, Correction, Particle, Polynomial, Spin};

fn sum(terms: Vec<Correction>) -> Correction {
    Correction::sum(terms)
}

fn pi(num: i64, den: i64) -> Correction {
    Correction::ratio(num, den, Atom::Pi)
}

fn e(num: i64, den: i64) -> Correction {
    Correction::ratio(num, den, Atom::ExpNegPi)
}

fn k(num: i64, den: i64) -> Correction {
    Correction::constant(num, den)
}

pub fn light_baryons() -> Vec<Particle> {
    let mut out = octet();
    out.extend(decuplet());
    out
}

fn octet() -> Vec<Particle> {
    vec![
        Particle::new("p", "Proton", "p", "p", 938.27208816)
            .with_polynomial(Polynomial::from_ints(&[(5, 6)]))
            .with_correction(e(4, 5))
            .with_charge(1)
            .at_node("p")
            .with_quarks("uud"),
        Particle::new("n", "Neutron", "n", "n", 939.56542052)
            .with_polynomial(Polynomial::from_ints(&[(5, 6)]))
            .with_correction(Correction::ratio(8, 1, Atom::InvPi))
            .at_node("n")
            .with_quarks("udd"),
        Particle::new("Lambda", "Lambda", "Λ", r"\Lambda", 1115.683)
            .with_polynomial(Polynomial::from_ints(&[(5, 7), (3, 1), (2, 1)]))
            .with_correction(Correction::scaled(2, 5, sum(vec![k(4, 1), pi(-1, 1), e(-5, 4)])))
            .with_strangeness(-1)
            .at_node("L0")
            .with_quarks("uds"),
        Particle::new("Sigma+", "Sigma+", "Σ⁺", r"\Sigma^+", 1189.37)
            .with_polynomial(Polynomial::from_ints(&[(5, 7), (3, 6), (2, 1)]))
            .with_correction(sum(vec![pi(-18, 5), k(4, 5)]))
            .with_charge(1)
            .with_strangeness(-1)
            .at_node("Sp")
            .with_quarks("uus"),
        Particle::new("Sigma0", "Sigma0", "Σ⁰", r"\Sigma^0", 1192.642)
            .with_polynomial(Polynomial::from_ints(&[(5, 7), (3, 6), (2, 1)]))
            .with_correction(Correction::scaled(-4, 5, sum(vec![pi(1, 1), k(2, 1), e(-1, 4)])))
            .with_strangeness(-1)
            .at_node("S0")
            .with_quarks("uds"),
        Particle::new("Sigma-", "Sigma-", "Σ⁻", r"\Sigma^-", 1197.449)
            .with_polynomial(Polynomial::from_ints(&[(5, 7), (3, 6), (2, 1)]))
            .with_correction(Correction::scaled(1, 5, sum(vec![pi(11, 1), k(-8, 1), e(-1, 1)])))
            .with_charge(-1)
            .with_strangeness(-1)
            .at_node("Sm")
            .with_quarks("dds"),
        Particle::new("Xi0", "Xi0", "Ξ⁰", r"\Xi^0", 1314.86)
            .with_polynomial(Polynomial::from_ints(&[(5, 8), (4, 1), (3, 1)]))
            .with_correction(Correction::scaled(3, 5, sum(vec![e(1, 1), pi(-1, 1), k(-8, 3)])))
            .with_strangeness(-2)
            .at_node("X0")
            .with_quarks("uss"),
        Particle::new("Xi-", "Xi-", "Ξ⁻", r"\Xi^-", 1321.71)
            .with_polynomial(Polynomial::from_ints(&[(5, 8), (4, 1), (3, 1)]))
            .with_correction(sum(vec![
                Correction::scaled(2, 5, sum(vec![pi(9, 1), k(-4, 1)])),
                Correction::ratio(1, 1, Atom::InvQ2Pi),
            ]))
            .with_charge(-1)
            .with_strangeness(-2)
            .at_node("Xm")
            .with_quarks("dss"),
    ]
}

fn delta(key: &str, symbol: &str, latex: &str, charge: i32, node: &str, quarks: &str) -> Particle {
    Particle::new(key, key, symbol, latex, 1232.0)
        .with_polynomial(Polynomial::from_ints(&[(5, 6), (4, 6), (2, -1)]))
        .with_correction(Correction::scaled(1, 5, sum(vec![pi(1, 1), k(-2, 1), e(4, 1)])))
        .with_spin(Spin::ThreeHalves)
        .with_charge(charge)
        .at_node(node)
        .with_quarks(quarks)
}

fn decuplet() -> Vec<Particle> {
    let sigma_star = Polynomial::from_ints(&[(5, 7), (4, 6), (2, -2)]);
    let xi_star = Polynomial::from_ints(&[(5, 8), (4, 6), (3, -1)]);

    vec![
        delta("Delta++", "Δ⁺⁺", r"\Delta^{++}", 2, "Dpp", "uuu"),
        delta("Delta+", "Δ⁺", r"\Delta^+", 1, "Dp", "uud"),
        delta("Delta0", "Δ⁰", r"\Delta^0", 0, "D0", "udd"),
        delta("Delta-", "Δ⁻", r"\Delta^-", -1, "Dm", "ddd"),
        Particle::new("Sigma*+", "Sigma*+", "Σ*⁺", r"\Sigma^{*+}", 1382.80)
            .with_polynomial(sigma_star.clone())
            .with_correction(Correction::scaled(1, 5, sum(vec![pi(1, 1), k(-7, 1), e(-1, 1)])))
            .with_spin(Spin::ThreeHalves)
            .with_charge(1)
            .with_strangeness(-1)
            .at_node("Ssp")
            .with_quarks("uus"),
        Particle::new("Sigma*0", "Sigma*0", "Σ*⁰", r"\Sigma^{*0}", 1383.7)
            .with_polynomial(sigma_star.clone())
            .with_correction(Correction::scaled(1, 5, sum(vec![k(8, 1), pi(-1, 1), e(1, 1)])))
            .with_spin(Spin::ThreeHalves)
            .with_strangeness(-1)
            .at_node("Ss0")
            .with_quarks("uds"),
        Particle::new("Sigma*-", "Sigma*-", "Σ*⁻", r"\Sigma^{*-}", 1387.2)
            .with_polynomial(sigma_star)
            .with_correction(Correction::scaled(1, 5, sum(vec![pi(15, 1), k(-8, 1)])))
            .with_spin(Spin::ThreeHalves)
            .with_charge(-1)
            .with_strangeness(-1)
            .at_node("Ssm")
            .with_quarks("dds"),
        Particle::new("Xi*0", "Xi*0", "Ξ*⁰", r"\Xi^{*0}", 1531.80)
            .with_polynomial(xi_star.clone())
            .with_correction(Correction::scaled(-1, 5, sum(vec![k(4, 1), pi(5, 1)])))
            .with_spin(Spin::ThreeHalves)
            .with_strangeness(-2)
            .at_node("Xs0")
            .with_quarks("uss"),
        Particle::new("Xi*-", "Xi*-", "Ξ*⁻", r"\Xi^{*-}", 1535.0)
            .with_polynomial(xi_star)
            .with_correction(Correction::scaled(1, 5, sum(vec![pi(4, 1), k(-1, 1)])))
            .with_spin(Spin::ThreeHalves)
            .with_charge(-1)
            .with_strangeness(-2)
            .at_node("Xsm")
            .with_quarks("dss"),
        Particle::new("Omega", "Omega", "Ω⁻", r"\Omega^-", 1672.45)
            .with_polynomial(Polynomial::from_ints(&[(5, 9), (4, 6), (3, -2)]))
            .with_correction(Correction::scaled(6, 5, sum(vec![e(1, 1), pi(-1, 1)])))
            .with_spin(Spin::ThreeHalves)
            .with_charge(-1)
            .with_strangeness(-3)
            .at_node("Om")
            .with_quarks("sss"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda7_core::{MassFormula, Multiplet};

    #[test]
    fn test_counts() {
        let all = light_baryons();
        assert_eq!(all.iter().filter(|p| p.multiplet == Multiplet::Octet).count(), 8);
        assert_eq!(all.iter().filter(|p| p.multiplet == Multiplet::Decuplet).count(), 10);
    }

    #[test]
    fn test_base_tracks_strangeness() {
        for p in light_baryons() {
            let c5 = p.polynomial.coefficient(5).to_i64().unwrap();
            assert_eq!(c5, 6 - p.strangeness as i64, "{}", p.key);
        }
    }

    #[test]
    fn test_decuplet_marker() {
        for p in light_baryons().iter().filter(|p| p.multiplet == Multiplet::Decuplet) {
            assert_eq!(p.polynomial.coefficient(4).to_i64(), Some(6), "{}", p.key);
        }
    }

    #[test]
    fn test_octet_accuracy() {
        for p in light_baryons().iter().filter(|p| p.multiplet == Multiplet::Octet) {
            assert!(p.error_kev().abs() < 20.0, "{}: {} keV", p.key, p.error_kev());
        }
    }

    #[test]
    fn test_decuplet_accuracy() {
        for p in light_baryons().iter().filter(|p| p.multiplet == Multiplet::Decuplet) {
            assert!(p.error_mev().abs() < 0.5, "{}: {} MeV", p.key, p.error_mev());
        }
    }
}
