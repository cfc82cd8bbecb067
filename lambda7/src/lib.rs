//! Lambda7 - π-algebra mass formulas
//!
//! Builds the coefficient trees declared in `lambda7-data`, formats what
//! each node adds beyond its parent, and renders views and HTML fragments.
//!
//! ```no_run
//! let engine = lambda7::Lambda7::standard().expect("tables are consistent");
//! let page = engine.tree_page().expect("viewer page");
//! ```

pub mod diff;
pub mod display;
pub mod render;
pub mod tree;
pub mod view;

pub use diff::{compact_label, format_correction, format_diff, format_polynomial, format_term};
pub use display::latex_to_display;
pub use tree::{Forest, ParticleNode, Tree, TreeNode, VirtualNode};
pub use view::{EdgeView, NodeView, SigmaBucket, TreeView};

use lambda7_core::{Family, Lambda7Error};
use lambda7_data::Registry;
use std::collections::BTreeMap;
use tracing::info;

/// Main engine: a registry plus the validated forest built from it
pub struct Lambda7<'a> {
    registry: &'a Registry,
    forest: Forest,
}

impl<'a> Lambda7<'a> {
    pub fn new(registry: &'a Registry) -> Result<Self, Lambda7Error> {
        let forest = Forest::build(registry)?;
        info!(trees = forest.trees().count(), "coefficient forest ready");
        Ok(Self { registry, forest })
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn tree_views(&self) -> Vec<TreeView> {
        self.forest
            .trees()
            .map(|t| TreeView::from_tree(t, self.registry))
            .collect()
    }

    pub fn tree_page(&self) -> Result<String, Lambda7Error> {
        render::tree_page(&self.tree_views())
    }

    /// Named HTML fragments for `{{ name }}` placeholders in page templates
    pub fn fragments(&self) -> Result<BTreeMap<String, String>, Lambda7Error> {
        let reg = self.registry;
        let mut charm = reg.family(Family::Charm);
        charm.extend(reg.family(Family::DoubleCharm));
        let particle_count = reg.particles().count() + reg.mesons().len() + reg.resonances().len();

        let mut out = BTreeMap::new();
        out.insert("octet_table".to_string(), render::baryon_table(&reg.octet(), reg));
        out.insert("decuplet_table".to_string(), render::baryon_table(&reg.decuplet(), reg));
        out.insert("charm_table".to_string(), render::baryon_table(&charm, reg));
        out.insert("bottom_table".to_string(), render::baryon_table(&reg.family(Family::Bottom), reg));
        out.insert("meson_table".to_string(), render::meson_table(&reg.mesons()));
        out.insert("resonance_table".to_string(), render::resonance_table(&reg.resonances(), reg));
        out.insert("magnetic_table".to_string(), render::magnetic_table(&reg.magnetic_moments()));
        out.insert("cycle_summary".to_string(), render::cycle_summary(reg));
        out.insert("cycle_levels".to_string(), render::cycle_levels(reg));
        out.insert("q_vocabulary".to_string(), render::q_vocabulary_table());
        out.insert("mass_vs_mu".to_string(), render::mass_vs_mu_table(reg));
        out.insert("term_structure".to_string(), render::term_structure(reg));
        out.insert("particle_count".to_string(), particle_count.to_string());
        out.insert("tree_datasets".to_string(), render::datasets_json(&self.tree_views())?);
        Ok(out)
    }
}

impl Lambda7<'static> {
    /// Engine over the process-wide registry
    pub fn standard() -> Result<Self, Lambda7Error> {
        Self::new(lambda7_data::registry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda7_core::constants::M_E;
    use lambda7_core::{MagneticMoment, MassFormula, Polynomial};
    use lambda7_data::registry;

    fn rel_close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_round_trip_arithmetic() {
        for p in registry().particles() {
            let expected = (p.polynomial.value() + p.correction_value()) * M_E;
            assert!(rel_close(p.mass_mev(), expected), "{}", p.key);
        }
        for m in registry().mesons() {
            let expected = (m.polynomial.value() + m.correction_value()) * M_E;
            assert!(rel_close(m.mass_mev(), expected), "{}", m.key);
        }
    }

    #[test]
    fn test_error_consistency() {
        for p in registry().particles() {
            assert!(rel_close(p.error_kev(), p.error_mev() * 1000.0), "{}", p.key);
            assert!(rel_close(p.error_ev(), p.error_mev() * 1e6), "{}", p.key);
            assert!(rel_close(p.error_ppm(), 1e6 * p.error_mev() / p.mass_exp), "{}", p.key);
        }
    }

    #[test]
    fn test_self_diff_is_empty() {
        let engine = Lambda7::standard().expect("engine");
        for tree in engine.forest().trees() {
            for node in tree.nodes() {
                assert_eq!(format_diff(node.coefficients(), node.coefficients()), "", "{}", node.id());
            }
        }
    }

    #[test]
    fn test_sign_rendering_cases() {
        let poly = Polynomial::from_ints;
        assert_eq!(format_diff(&poly(&[(5, 7), (3, 6)]), &poly(&[(5, 7)])), "6π³");
        assert_eq!(format_diff(&poly(&[(5, 8), (4, 6), (3, -1)]), &poly(&[(5, 8)])), "6π⁴ - π³");

        let engine = Lambda7::standard().expect("engine");
        let views = engine.tree_views();
        let proton = views
            .iter()
            .find_map(|v| v.node("p"))
            .expect("proton in light tree");
        assert_eq!(proton.diff_display, "(4/5)e⁻ᵖⁱ");
    }

    #[test]
    fn test_proton_magnetic_moment() {
        let mu = MagneticMoment::new("p", "Proton", "p", "p", 2.7928473508).with_formula(8, -1, 9);
        assert!((mu.mu_calc() - 8.0 * std::f64::consts::PI / 9.0).abs() < 1e-12);
        assert!((mu.mu_calc() - 2.7925).abs() < 1e-4);
        assert!(mu.error_percent() < 0.1);
        assert_eq!(mu.formula_display(), "8π/9");
    }

    #[test]
    fn test_fragments() {
        let engine = Lambda7::standard().expect("engine");
        let fragments = engine.fragments().expect("fragments");
        assert!(fragments["octet_table"].contains("<table"));
        assert!(fragments["charm_table"].contains(r#"id="Xcc++""#));
        assert_eq!(fragments["particle_count"], "64");
        for key in ["cycle_levels", "q_vocabulary", "mass_vs_mu", "term_structure"] {
            assert!(fragments[key].contains("<table"), "{}", key);
        }
    }
}
