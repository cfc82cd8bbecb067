//! Heavy-flavour baryons: charm (14π⁵ base), double charm, bottom (36π⁵ base)

use lambda7_core::{Atom, Correction, Family, Particle, Polynomial, Spin};

fn k(num: i64, den: i64) -> Correction {
    Correction::constant(num, den)
}

fn charm(key: &str, name: &str, symbol: &str, latex: &str, mass: f64) -> Particle {
    Particle::new(key, name, symbol, latex, mass).in_family(Family::Charm)
}

fn bottom(key: &str, name: &str, symbol: &str, latex: &str, mass: f64) -> Particle {
    Particle::new(key, name, symbol, latex, mass).in_family(Family::Bottom)
}

pub fn charm_baryons() -> Vec<Particle> {
    let sigma_c = Polynomial::from_ints(&[(5, 14), (4, 5), (3, 1)]);
    let sigma_c_star = Polynomial::from_ints(&[(5, 14), (4, 6), (3, 2)]);
    let xi_c_star = Polynomial::from_ints(&[(5, 15), (4, 6)]);

    vec![
        charm("Lc+", "Lambda_c+", "Λc⁺", r"\Lambda_c^+", 2286.46)
            .with_polynomial(Polynomial::from_ints(&[(5, 14), (4, 2)]))
            .with_correction(k(-23, 5))
            .with_charge(1)
            .at_node("Lc")
            .with_quarks("udc"),
        charm("Sc++", "Sigma_c++", "Σc⁺⁺", r"\Sigma_c^{++}", 2453.97)
            .with_polynomial(sigma_c.clone())
            .with_correction(Correction::ratio(-3, 5, Atom::ExpNegPi))
            .with_charge(2)
            .at_node("Scpp")
            .with_quarks("uuc"),
        charm("Sc+", "Sigma_c+", "Σc⁺", r"\Sigma_c^+", 2452.65)
            .with_polynomial(sigma_c.clone())
            .with_correction(k(-13, 5))
            .with_charge(1)
            .at_node("Scp")
            .with_quarks("udc"),
        charm("Sc0", "Sigma_c0", "Σc⁰", r"\Sigma_c^0", 2453.75)
            .with_polynomial(sigma_c)
            .with_correction(k(-2, 5))
            .at_node("Sc0")
            .with_quarks("ddc"),
        charm("Sc*++", "Sigma_c*++", "Σc*⁺⁺", r"\Sigma_c^{*++}", 2518.41)
            .with_polynomial(sigma_c_star.clone())
            .with_correction(k(-12, 5))
            .with_spin(Spin::ThreeHalves)
            .with_charge(2)
            .at_node("Scspp")
            .with_quarks("uuc"),
        charm("Sc*+", "Sigma_c*+", "Σc*⁺", r"\Sigma_c^{*+}", 2517.4)
            .with_polynomial(sigma_c_star.clone())
            .with_correction(Correction::ratio(-7, 5, Atom::Pi))
            .with_spin(Spin::ThreeHalves)
            .with_charge(1)
            .at_node("Scsp")
            .with_quarks("udc"),
        charm("Sc*0", "Sigma_c*0", "Σc*⁰", r"\Sigma_c^{*0}", 2518.48)
            .with_polynomial(sigma_c_star)
            .with_correction(k(-11, 5))
            .with_spin(Spin::ThreeHalves)
            .at_node("Scs0")
            .with_quarks("ddc"),
        charm("Xc+", "Xi_c+", "Ξc⁺", r"\Xi_c^+", 2467.71)
            .with_polynomial(Polynomial::from_ints(&[(5, 15), (4, 2), (3, 1), (2, 1)]))
            .with_correction(k(16, 5))
            .with_charge(1)
            .with_strangeness(-1)
            .at_node("Xcp")
            .with_quarks("usc"),
        charm("Xc0", "Xi_c0", "Ξc⁰", r"\Xi_c^0", 2470.44)
            .with_polynomial(Polynomial::from_ints(&[(5, 15), (4, 2), (3, 1), (2, 2)]))
            .with_correction(Correction::ratio(-4, 1, Atom::InvPi))
            .with_strangeness(-1)
            .at_node("Xc0")
            .with_quarks("dsc"),
        charm("Xc*+", "Xi_c*+", "Ξc*⁺", r"\Xi_c^{*+}", 2645.10)
            .with_polynomial(xi_c_star.clone())
            .with_correction(Correction::ratio(5, 1, Atom::InvPi))
            .with_spin(Spin::ThreeHalves)
            .with_charge(1)
            .with_strangeness(-1)
            .at_node("Xcsp")
            .with_quarks("usc"),
        charm("Xc*0", "Xi_c*0", "Ξc*⁰", r"\Xi_c^{*0}", 2646.16)
            .with_polynomial(xi_c_star)
            .with_correction(k(18, 5))
            .with_spin(Spin::ThreeHalves)
            .with_strangeness(-1)
            .at_node("Xcs0")
            .with_quarks("dsc"),
        charm("Oc0", "Omega_c0", "Ωc⁰", r"\Omega_c^0", 2695.2)
            .with_polynomial(Polynomial::from_ints(&[(5, 16), (4, 4), (2, -1)]))
            .with_correction(k(-9, 5))
            .with_strangeness(-2)
            .at_node("Oc0")
            .with_quarks("ssc"),
        charm("Oc*0", "Omega_c*0", "Ωc*⁰", r"\Omega_c^{*0}", 2765.9)
            .with_polynomial(Polynomial::from_ints(&[(5, 16), (4, 5), (2, 3)]))
            .with_correction(Correction::ratio(-28, 5, Atom::ExpNegPi))
            .with_spin(Spin::ThreeHalves)
            .with_strangeness(-2)
            .at_node("Ocs0")
            .with_quarks("ssc"),
    ]
}

/// Ξcc⁺⁺ is the only member and the only baryon needing a π⁶ term
pub fn double_charm_baryons() -> Vec<Particle> {
    vec![Particle::new("Xcc++", "Xi_cc++", "Ξcc⁺⁺", r"\Xi_{cc}^{++}", 3621.6)
        .with_polynomial(Polynomial::from_ints(&[(6, 3), (5, 14), (3, -2), (2, -2)]))
        .with_correction(k(3, 5))
        .with_charge(2)
        .in_family(Family::DoubleCharm)
        .at_node("Xccpp")
        .with_quarks("ucc")]
}

pub fn bottom_baryons() -> Vec<Particle> {
    vec![
        bottom("Lb0", "Lambda_b0", "Λb⁰", r"\Lambda_b^0", 5619.60)
            .with_polynomial(Polynomial::from_ints(&[(5, 36), (2, -2)]))
            .with_correction(Correction::ratio(36, 5, Atom::ExpNegPi))
            .at_node("Lb")
            .with_quarks("udb"),
        bottom("Sb+", "Sigma_b+", "Σb⁺", r"\Sigma_b^+", 5810.56)
            .with_polynomial(Polynomial::from_ints(&[(5, 36), (4, 3), (3, 2)]))
            .with_correction(Correction::ratio(4, 5, Atom::ExpNegPi))
            .with_charge(1)
            .at_node("Sbp")
            .with_quarks("uub"),
        bottom("Sb-", "Sigma_b-", "Σb⁻", r"\Sigma_b^-", 5815.64)
            .with_polynomial(Polynomial::from_ints(&[(5, 36), (4, 5), (3, -4)]))
            .with_correction(k(6, 5))
            .with_charge(-1)
            .at_node("Sbm")
            .with_quarks("ddb"),
        bottom("Xb0", "Xi_b0", "Ξb⁰", r"\Xi_b^0", 5791.9)
            .with_polynomial(Polynomial::from_ints(&[(5, 37), (2, 1)]))
            .with_correction(Correction::ratio(3, 5, Atom::Pi))
            .with_strangeness(-1)
            .at_node("Xb0")
            .with_quarks("usb"),
        bottom("Xb-", "Xi_b-", "Ξb⁻", r"\Xi_b^-", 5797.0)
            .with_polynomial(Polynomial::from_ints(&[(5, 37), (2, 2)]))
            .with_correction(k(2, 1))
            .with_charge(-1)
            .with_strangeness(-1)
            .at_node("Xbm")
            .with_quarks("dsb"),
        bottom("Ob-", "Omega_b-", "Ωb⁻", r"\Omega_b^-", 6045.2)
            .with_polynomial(Polynomial::from_ints(&[(5, 38), (4, 4), (3, -6)]))
            .with_correction(k(-11, 5))
            .with_charge(-1)
            .with_strangeness(-2)
            .at_node("Obm")
            .with_quarks("ssb"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda7_core::MassFormula;

    #[test]
    fn test_heavy_accuracy() {
        let all = charm_baryons()
            .into_iter()
            .chain(double_charm_baryons())
            .chain(bottom_baryons());
        for p in all {
            assert!(p.error_kev().abs() < 50.0, "{}: {} keV", p.key, p.error_kev());
        }
    }

    #[test]
    fn test_families() {
        assert!(charm_baryons().iter().all(|p| p.family == Family::Charm));
        assert!(bottom_baryons().iter().all(|p| p.family == Family::Bottom));
        assert_eq!(double_charm_baryons()[0].polynomial.leading_power(), Some(6));
    }
}
