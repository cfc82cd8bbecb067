//! Experimental mass uncertainties in MeV (PDG), keyed by particle key

/// Used when a particle has no entry
pub const DEFAULT_UNCERTAINTY_MEV: f64 = 1.0;

/// One tabulated uncertainty
#[derive(Debug, Clone, PartialEq)]
pub struct Uncertainty {
    pub key: String,
    pub mev: f64,
}

impl Uncertainty {
    pub fn new(key: impl Into<String>, mev: f64) -> Self {
        Self { key: key.into(), mev }
    }
}

pub const UNCERTAINTIES: &[(&str, f64)] = &[
    // Proton and neutron are known to better than a meV
    ("p", 0.00000029e-3),
    ("n", 0.00000054e-3),
    ("Lambda", 0.006),
    ("Sigma+", 0.03),
    ("Sigma0", 0.03),
    ("Sigma-", 0.04),
    ("Sigma*+", 0.9),
    ("Sigma*0", 0.9),
    ("Sigma*-", 0.9),
    ("Xi0", 0.08),
    ("Xi-", 0.06),
    ("Xi*0", 0.8),
    ("Xi*-", 0.9),
    ("Omega", 0.21),
    // Δ mass is only known to the resonance width scale
    ("Delta++", 2.0),
    ("Delta+", 2.0),
    ("Delta0", 2.0),
    ("Delta-", 2.0),
    ("Lc+", 0.14),
    ("Sc++", 0.14),
    ("Sc+", 0.4),
    ("Sc0", 0.14),
    ("Sc*++", 0.4),
    ("Sc*+", 0.5),
    ("Sc*0", 0.4),
    ("Xc+", 0.31),
    ("Xc0", 0.28),
    ("Xc*+", 0.5),
    ("Xc*0", 0.5),
    ("Oc0", 0.21),
    ("Oc*0", 0.5),
    ("Xcc++", 0.4),
    ("Lb0", 0.06),
    ("Sb+", 0.5),
    ("Sb-", 0.5),
    ("Xb0", 0.4),
    ("Xb-", 0.4),
    ("Ob-", 0.22),
];
