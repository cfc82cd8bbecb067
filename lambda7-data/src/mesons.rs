//! Mesons and leptons
//!
//! The π⁵ coefficient tracks flavour content: 1 for the pion, 3 with one
//! strange quark, 5 for vector mesons, 12 = 2×6 for D, 20 = 4×5 for J/ψ,
//! 34 = 6²−2 for B and 61 = 64−3 for Υ.

use lambda7_core::{Atom, Correction, Meson, Polynomial};

fn poly(ints: &[(i32, i64)]) -> Polynomial {
    Polynomial::from_ints(ints)
}

pub fn mesons() -> Vec<Meson> {
    vec![
        // Light
        Meson::new("pi_pm", "Pion±", "π±", r"\pi^\pm", 139.57039)
            .with_quarks(r"u\bar{d}")
            .with_polynomial(poly(&[(5, 1), (3, -1), (1, -1), (0, 1)]))
            .with_correction(Correction::ratio(6, 1, Atom::ExpNegPi)),
        Meson::new("pi_0", "Pion⁰", "π⁰", r"\pi^0", 134.9768)
            .with_quarks(r"u\bar{u}, d\bar{d}")
            .with_polynomial(poly(&[(5, 1), (3, -1), (2, -1), (0, -1)])),
        Meson::new("rho", "Rho", "ρ", r"\rho", 775.11)
            .with_quarks(r"u\bar{d}")
            .with_polynomial(poly(&[(5, 5), (2, -1)]).with_ratio(1, -6, 5).with_ratio(0, 2, 5))
            .with_spin(1),
        Meson::new("omega", "Omega", "ω", r"\omega", 782.66)
            .with_quarks(r"u\bar{u}, d\bar{d}")
            .with_polynomial(poly(&[(5, 5)]).with_ratio(1, 3, 5).with_ratio(0, -2, 5))
            .with_spin(1),
        // Strange
        Meson::new("K_pm", "Kaon±", "K±", r"K^\pm", 493.677)
            .with_quarks(r"u\bar{s}")
            .with_polynomial(poly(&[(5, 3), (3, 1), (2, 2)]).with_ratio(1, -4, 5)),
        Meson::new("K_0", "Kaon⁰", "K⁰", r"K^0", 497.611)
            .with_quarks(r"d\bar{s}")
            .with_polynomial(poly(&[(5, 3), (3, 2), (1, -2)])),
        Meson::new("eta", "Eta", "η", r"\eta", 547.862)
            .with_quarks(r"u\bar{u}, d\bar{d}, s\bar{s}")
            .with_polynomial(poly(&[(5, 3), (4, 1), (3, 2), (1, -2), (0, 1)])),
        Meson::new("eta_prime", "Eta'", "η'", r"\eta'", 957.78)
            .with_quarks(r"u\bar{u}, d\bar{d}, s\bar{s}")
            .with_polynomial(poly(&[(5, 6), (3, 1), (1, 2), (0, 1)])),
        Meson::new("phi", "Phi", "φ", r"\phi", 1019.461)
            .with_quarks(r"s\bar{s}")
            .with_polynomial(
                poly(&[(5, 6), (4, 2), (3, -1)]).with_ratio(1, -7, 5).with_ratio(0, -2, 5),
            )
            .with_spin(1),
        // Charm
        Meson::new("D_pm", "D±", "D±", r"D^\pm", 1869.66)
            .with_quarks(r"c\bar{d}")
            .with_polynomial(poly(&[(5, 12), (2, -2), (1, 2)])),
        Meson::new("D_0", "D⁰", "D⁰", r"D^0", 1864.84)
            .with_quarks(r"c\bar{u}")
            .with_polynomial(poly(&[(5, 12), (2, -2), (1, -1)])),
        Meson::new("D_s", "Ds", "Ds", r"D_s", 1968.35)
            .with_quarks(r"c\bar{s}")
            .with_polynomial(
                poly(&[(5, 13), (4, -1), (3, -1)]).with_ratio(1, 4, 5).with_ratio(0, -2, 5),
            ),
        Meson::new("J_psi", "J/ψ", "J/ψ", r"J/\psi", 3096.900)
            .with_quarks(r"c\bar{c}")
            .with_polynomial(poly(&[(5, 20), (3, -2)]).with_ratio(1, 4, 5).with_ratio(0, -2, 5))
            .with_spin(1),
        // Bottom
        Meson::new("B_pm", "B±", "B±", r"B^\pm", 5279.34)
            .with_quarks(r"u\bar{b}")
            .with_polynomial(poly(&[(5, 34), (3, -2), (1, -3)]).with_ratio(0, -9, 5)),
        Meson::new("B_0", "B⁰", "B⁰", r"B^0", 5279.65)
            .with_quarks(r"d\bar{b}")
            .with_polynomial(poly(&[(5, 34), (3, -2), (1, -3)]).with_ratio(0, -6, 5)),
        Meson::new("B_s", "Bs", "Bs", r"B_s", 5366.92)
            .with_quarks(r"s\bar{b}")
            .with_polynomial(poly(&[(5, 34), (4, 1)]).with_ratio(1, 4, 5).with_ratio(0, -9, 5)),
        Meson::new("Upsilon", "Υ(1S)", "Υ", r"\Upsilon(1S)", 9460.30)
            .with_quarks(r"b\bar{b}")
            .with_polynomial(
                poly(&[(5, 61), (4, -1), (3, -2)]).with_ratio(1, 6, 5).with_ratio(0, 9, 5),
            )
            .with_spin(1),
    ]
}

pub fn leptons() -> Vec<Meson> {
    vec![Meson::new("muon", "Muon", "μ", r"\mu", 105.6583755)
        .with_quarks("lepton")
        .with_polynomial(poly(&[(5, 1), (4, -1), (0, -1)]))
        .with_correction(Correction::ratio(-20, 1, Atom::ExpNegPi))
        .lepton()]
}
