//! Magnetic moments in nuclear magnetons
//!
//! Q > 0: μ = Nπ/9. Q ≤ 0: μ = N/π^k with k growing with strangeness.

use lambda7_core::MagneticMoment;

pub fn magnetic_moments() -> Vec<MagneticMoment> {
    vec![
        MagneticMoment::new("p", "Proton", "p", "p", 2.7928473508)
            .with_formula(8, -1, 9)
            .with_charge(1)
            .in_family("positive"),
        MagneticMoment::new("Sigma+", "Sigma+", "Σ⁺", r"\Sigma^+", 2.458)
            .with_formula(7, -1, 9)
            .with_charge(1)
            .with_strangeness(-1)
            .in_family("positive"),
        MagneticMoment::new("n", "Neutron", "n", "n", -1.9130427)
            .with_formula(-6, 1, 1)
            .in_family("6-chain"),
        MagneticMoment::new("Lambda", "Lambda", "Λ", r"\Lambda", -0.613)
            .with_formula(-6, 2, 1)
            .with_strangeness(-1)
            .in_family("6-chain"),
        MagneticMoment::new("Xi0", "Xi0", "Ξ⁰", r"\Xi^0", -1.250)
            .with_formula(-4, 1, 1)
            .with_strangeness(-2)
            .in_family("neutral"),
        MagneticMoment::new("Sigma-", "Sigma-", "Σ⁻", r"\Sigma^-", -1.160)
            .with_formula(-36, 3, 1)
            .with_charge(-1)
            .with_strangeness(-1)
            .in_family("6-chain"),
        MagneticMoment::new("Xi-", "Xi-", "Ξ⁻", r"\Xi^-", -0.6507)
            .with_formula(-20, 3, 1)
            .with_charge(-1)
            .with_strangeness(-2)
            .in_family("20-family"),
        MagneticMoment::new("Omega", "Omega", "Ω⁻", r"\Omega^-", -2.02)
            .with_formula(-20, 2, 1)
            .with_charge(-1)
            .with_strangeness(-3)
            .in_family("20-family"),
    ]
}

/// An integer that recurs as a moment numerator, with its q-calculus reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QTerm {
    pub n: i64,
    pub expression: &'static str,
    pub appears_in: &'static str,
}

pub fn q_vocabulary() -> Vec<QTerm> {
    let term = |n, expression, appears_in| QTerm { n, expression, appears_in };
    vec![
        term(4, r"\lfloor [2]_\pi \rfloor = \lfloor \pi + 1 \rfloor", r"\Xi^0"),
        term(6, r"\lfloor 2\pi \rfloor", r"n, \Lambda"),
        term(7, r"\lceil 2\pi \rceil", r"\Sigma^+"),
        term(8, r"\lfloor 2\pi \rfloor + 2", "p"),
        term(9, r"3^2 = \lfloor \pi^2 \rfloor", r"\text{denominator for } Q > 0"),
        term(20, r"2 \times \lceil \pi^2 \rceil = 4 \times 5", r"\Xi^-, \Omega^-"),
        term(36, r"6^2 = \lfloor 2\pi \rfloor^2", r"\Sigma^-"),
    ]
}

/// How a moment numerator relates to the particle's π⁵ mass coefficient.
/// Both numbers come from the registry tables; only the relation is stated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MassMuRelation {
    pub key: &'static str,
    pub relation: &'static str,
}

pub fn mass_vs_mu() -> Vec<MassMuRelation> {
    let rel = |key, relation| MassMuRelation { key, relation };
    vec![
        rel("p", r"\mu = m + 2"),
        rel("n", r"\mu = m"),
        rel("Lambda", r"\mu = m - 1 \text{ (inherits from n)}"),
        rel("Sigma+", r"\mu = m"),
        rel("Sigma-", r"\mu = 6^2"),
        rel("Omega", r"\mu = 2 \times \lceil \pi^2 \rceil"),
    ]
}
