//! Particle Registry
//!
//! Read-only tables built once per process. Insertion order is preserved so
//! every listing is stable; a repeated key replaces the earlier entry in
//! place and is logged, so the last declaration is the one that counts.

use crate::cycles::{self, CycleDecl};
use crate::uncertainties::{Uncertainty, DEFAULT_UNCERTAINTY_MEV, UNCERTAINTIES};
use crate::{baryons, heavy, magnetic, mesons, resonances};
use lambda7_core::{Family, MagneticMoment, Meson, MesonKind, Multiplet, Particle, Resonance};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

/// Process-wide registry with every standard table loaded
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::standard);

pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Anything stored in a registry table
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Particle {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for Meson {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for Resonance {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for MagneticMoment {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for Uncertainty {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for CycleDecl {
    fn key(&self) -> &str {
        &self.key
    }
}

/// Ordered table with key lookup
#[derive(Debug, Clone)]
pub struct Table<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
    kind: &'static str,
}

impl<T: Keyed> Table<T> {
    fn new(kind: &'static str) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            kind,
        }
    }

    fn insert(&mut self, entry: T) {
        let key = entry.key().to_string();
        match self.index.get(&key) {
            Some(&pos) => {
                warn!(kind = self.kind, key = %key, "duplicate entry, later declaration replaces earlier");
                self.entries[pos] = entry;
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Central particle registry
#[derive(Debug, Clone)]
pub struct Registry {
    particles: Table<Particle>,
    mesons: Table<Meson>,
    resonances: Table<Resonance>,
    moments: Table<MagneticMoment>,
    cycles: Table<CycleDecl>,
    uncertainties: Table<Uncertainty>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            particles: Table::new("particle"),
            mesons: Table::new("meson"),
            resonances: Table::new("resonance"),
            moments: Table::new("magnetic moment"),
            cycles: Table::new("cycle"),
            uncertainties: Table::new("uncertainty"),
        }
    }

    /// Registry with every standard table
    pub fn standard() -> Self {
        UNCERTAINTIES
            .iter()
            .fold(Self::new(), |reg, &(key, mev)| reg.with_uncertainty(key, mev))
            .with_particles(baryons::light_baryons())
            .with_particles(heavy::charm_baryons())
            .with_particles(heavy::double_charm_baryons())
            .with_particles(heavy::bottom_baryons())
            .with_mesons(mesons::mesons())
            .with_mesons(mesons::leptons())
            .with_resonances(resonances::resonances())
            .with_moments(magnetic::magnetic_moments())
            .with_cycles(cycles::all_cycles())
    }

    // ========== Builders ==========

    pub fn with_particle(mut self, p: Particle) -> Self {
        self.particles.insert(p);
        self
    }

    pub fn with_particles(self, ps: impl IntoIterator<Item = Particle>) -> Self {
        ps.into_iter().fold(self, Self::with_particle)
    }

    pub fn with_meson(mut self, m: Meson) -> Self {
        self.mesons.insert(m);
        self
    }

    pub fn with_mesons(self, ms: impl IntoIterator<Item = Meson>) -> Self {
        ms.into_iter().fold(self, Self::with_meson)
    }

    pub fn with_resonance(mut self, r: Resonance) -> Self {
        self.resonances.insert(r);
        self
    }

    pub fn with_resonances(self, rs: impl IntoIterator<Item = Resonance>) -> Self {
        rs.into_iter().fold(self, Self::with_resonance)
    }

    pub fn with_moment(mut self, m: MagneticMoment) -> Self {
        self.moments.insert(m);
        self
    }

    pub fn with_moments(self, ms: impl IntoIterator<Item = MagneticMoment>) -> Self {
        ms.into_iter().fold(self, Self::with_moment)
    }

    pub fn with_cycle(mut self, c: CycleDecl) -> Self {
        self.cycles.insert(c);
        self
    }

    pub fn with_cycles(self, cs: impl IntoIterator<Item = CycleDecl>) -> Self {
        cs.into_iter().fold(self, Self::with_cycle)
    }

    pub fn with_uncertainty(mut self, key: &str, mev: f64) -> Self {
        self.uncertainties.insert(Uncertainty::new(key, mev));
        self
    }

    // ========== Particles ==========

    pub fn particle(&self, key: &str) -> Option<&Particle> {
        self.particles.get(key)
    }

    pub fn particle_by_node(&self, node_id: &str) -> Option<&Particle> {
        self.particles.iter().find(|p| p.node_id == node_id)
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn family(&self, family: Family) -> Vec<&Particle> {
        self.particles.iter().filter(|p| p.family == family).collect()
    }

    /// Family members of one multiplet, sorted by experimental mass
    pub fn multiplet(&self, family: Family, multiplet: Multiplet) -> Vec<&Particle> {
        let mut out: Vec<&Particle> = self
            .particles
            .iter()
            .filter(|p| p.family == family && p.multiplet == multiplet)
            .collect();
        out.sort_by(|a, b| a.mass_exp.total_cmp(&b.mass_exp));
        out
    }

    /// Light spin-1/2 baryons sorted by mass
    pub fn octet(&self) -> Vec<&Particle> {
        self.multiplet(Family::Light, Multiplet::Octet)
    }

    /// Light spin-3/2 baryons sorted by mass
    pub fn decuplet(&self) -> Vec<&Particle> {
        self.multiplet(Family::Light, Multiplet::Decuplet)
    }

    pub fn by_strangeness(&self, family: Family, strangeness: i32) -> Vec<&Particle> {
        self.particles
            .iter()
            .filter(|p| p.family == family && p.strangeness == strangeness)
            .collect()
    }

    /// Experimental uncertainty in MeV, 1 MeV when not tabulated
    pub fn uncertainty(&self, key: &str) -> f64 {
        self.uncertainties.get(key).map_or(DEFAULT_UNCERTAINTY_MEV, |u| u.mev)
    }

    // ========== Mesons, resonances, moments ==========

    pub fn meson(&self, key: &str) -> Option<&Meson> {
        self.mesons.get(key).filter(|m| m.kind == MesonKind::Meson)
    }

    pub fn lepton(&self, key: &str) -> Option<&Meson> {
        self.mesons.get(key).filter(|m| m.kind == MesonKind::Lepton)
    }

    /// Mesons and leptons sorted by experimental mass
    pub fn mesons(&self) -> Vec<&Meson> {
        let mut out: Vec<&Meson> = self.mesons.iter().collect();
        out.sort_by(|a, b| a.mass_exp.total_cmp(&b.mass_exp));
        out
    }

    pub fn resonance(&self, key: &str) -> Option<&Resonance> {
        self.resonances.get(key)
    }

    /// Resonances sorted by experimental mass
    pub fn resonances(&self) -> Vec<&Resonance> {
        let mut out: Vec<&Resonance> = self.resonances.iter().collect();
        out.sort_by(|a, b| a.mass_exp.total_cmp(&b.mass_exp));
        out
    }

    pub fn magnetic_moment(&self, key: &str) -> Option<&MagneticMoment> {
        self.moments.get(key)
    }

    /// Moments sorted by strangeness, then descending charge
    pub fn magnetic_moments(&self) -> Vec<&MagneticMoment> {
        let mut out: Vec<&MagneticMoment> = self.moments.iter().collect();
        out.sort_by_key(|m| (m.strangeness, -m.charge));
        out
    }

    // ========== Cycles ==========

    pub fn cycle(&self, key: &str) -> Option<&CycleDecl> {
        self.cycles.get(key)
    }

    pub fn cycles(&self) -> impl Iterator<Item = &CycleDecl> {
        self.cycles.iter()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda7_core::{MassFormula, Polynomial};

    #[test]
    fn test_standard_counts() {
        let reg = registry();
        assert_eq!(reg.family(Family::Light).len(), 18);
        assert_eq!(reg.family(Family::Charm).len(), 13);
        assert_eq!(reg.family(Family::DoubleCharm).len(), 1);
        assert_eq!(reg.family(Family::Bottom).len(), 6);
        assert_eq!(reg.mesons().len(), 18);
        assert_eq!(reg.resonances().len(), 8);
        assert_eq!(reg.magnetic_moments().len(), 8);
        assert_eq!(reg.cycles().count(), 3);
    }

    #[test]
    fn test_lookup() {
        let reg = registry();
        assert_eq!(reg.particle("Sigma+").map(|p| p.symbol.as_str()), Some("Σ⁺"));
        assert_eq!(reg.particle_by_node("L0").map(|p| p.key.as_str()), Some("Lambda"));
        assert!(reg.meson("muon").is_none());
        assert!(reg.lepton("muon").is_some());
        assert!(reg.particle("Sigma++").is_none());
    }

    #[test]
    fn test_octet_sorted_by_mass() {
        let octet = registry().octet();
        assert_eq!(octet.len(), 8);
        assert_eq!(octet.first().map(|p| p.key.as_str()), Some("p"));
        assert!(octet.windows(2).all(|w| w[0].mass_exp <= w[1].mass_exp));
    }

    #[test]
    fn test_uncertainty_default() {
        let reg = registry();
        assert_eq!(reg.uncertainty("Lambda"), 0.006);
        assert_eq!(reg.uncertainty("Delta0"), 2.0);
        assert_eq!(reg.uncertainty("nope"), DEFAULT_UNCERTAINTY_MEV);
    }

    #[test]
    fn test_later_uncertainty_wins() {
        let reg = Registry::new()
            .with_uncertainty("p", 0.5)
            .with_uncertainty("n", 0.25)
            .with_uncertainty("p", 0.75);
        assert_eq!(reg.uncertainty("p"), 0.75);
        assert_eq!(reg.uncertainty("n"), 0.25);
        assert_eq!(reg.uncertainties.len(), 2);
    }

    #[test]
    fn test_by_strangeness() {
        let reg = registry();
        let keys: Vec<&str> = reg
            .by_strangeness(Family::Light, -2)
            .iter()
            .map(|p| p.key.as_str())
            .collect();
        assert_eq!(keys, vec!["Xi0", "Xi-", "Xi*0", "Xi*-"]);
        assert_eq!(reg.by_strangeness(Family::Light, -3).len(), 1);
        assert_eq!(reg.by_strangeness(Family::Light, 0).len(), 6);
    }

    #[test]
    fn test_later_declaration_wins() {
        let first = Particle::new("X", "X", "X", "X", 100.0)
            .with_polynomial(Polynomial::from_ints(&[(5, 1)]));
        let second = Particle::new("X", "X", "X", "X", 200.0)
            .with_polynomial(Polynomial::from_ints(&[(5, 2)]));
        let reg = Registry::new()
            .with_particle(first)
            .with_particle(Particle::new("Y", "Y", "Y", "Y", 1.0))
            .with_particle(second);
        assert_eq!(reg.particles().count(), 2);
        assert_eq!(reg.particle("X").map(|p| p.mass_exp), Some(200.0));
        // Replacement keeps the original slot
        assert_eq!(reg.particles().next().map(|p| p.key.as_str()), Some("X"));
    }

    #[test]
    fn test_moments_order() {
        let keys: Vec<&str> = registry().magnetic_moments().iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys.first(), Some(&"Omega"));
        assert_eq!(keys.last(), Some(&"n"));
    }

    #[test]
    fn test_every_particle_evaluates() {
        for p in registry().particles() {
            assert!(p.mass_mev().is_finite(), "{}", p.key);
        }
    }
}
