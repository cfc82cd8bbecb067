//! Lambda7 Data - Static tables
//!
//! Baryon, meson, resonance and magnetic-moment tables, the coefficient-tree
//! declarations, the light-cycle level notes, and the read-only [`Registry`]
//! that holds the keyed tables.

pub mod baryons;
pub mod cycles;
pub mod heavy;
pub mod levels;
pub mod magnetic;
pub mod mesons;
pub mod registry;
pub mod resonances;
pub mod uncertainties;

pub use cycles::{all_cycles, bottom_cycle, charm_cycle, light_cycle, CycleDecl, NodeDecl};
pub use levels::{baryon_levels, symmetries, CycleLevel, Symmetry};
pub use magnetic::{mass_vs_mu, q_vocabulary, MassMuRelation, QTerm};
pub use registry::{registry, Keyed, Registry, Table, REGISTRY};
pub use resonances::{mirror_notes, MirrorNote, MIRROR_RULE, TERM_ROWS};
pub use uncertainties::{Uncertainty, DEFAULT_UNCERTAINTY_MEV};
