//! Serializable views of evaluated trees
//!
//! A view is the flat node/edge list a graph-drawing library consumes. Each
//! particle node carries its evaluated mass and error; virtual nodes carry
//! only labels and coefficients.

use crate::diff::{compact_label, format_correction, format_diff, format_polynomial};
use crate::display::latex_to_display;
use crate::tree::{Tree, TreeNode};
use lambda7_core::{MassFormula, Particle, Polynomial};
use lambda7_data::Registry;
use serde::Serialize;

/// How far a prediction sits from experiment, in experimental σ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SigmaBucket {
    Within1,
    Within2,
    Within3,
    Beyond3,
}

impl SigmaBucket {
    pub fn of(sigma: f64) -> Self {
        if sigma < 1.0 {
            SigmaBucket::Within1
        } else if sigma < 2.0 {
            SigmaBucket::Within2
        } else if sigma < 3.0 {
            SigmaBucket::Within3
        } else {
            SigmaBucket::Beyond3
        }
    }

    /// CSS class used by the pages and the viewer
    pub fn css_class(self) -> &'static str {
        match self {
            SigmaBucket::Within1 => "sigma-1",
            SigmaBucket::Within2 => "sigma-2",
            SigmaBucket::Within3 => "sigma-3",
            SigmaBucket::Beyond3 => "sigma-high",
        }
    }
}

/// `|error_mev| / uncertainty_mev`
pub fn sigma_deviation(error_mev: f64, uncertainty_mev: f64) -> f64 {
    error_mev.abs() / uncertainty_mev
}

/// Compact Unicode display of a correction, if its LaTeX has one
pub fn correction_display<M: MassFormula>(entity: &M) -> Option<String> {
    entity.correction().and_then(|c| latex_to_display(&c.to_latex()))
}

/// Whole formula: polynomial then correction
pub fn formula_display<M: MassFormula>(entity: &M) -> String {
    let base = format_polynomial(entity.polynomial());
    let corr = correction_display(entity).unwrap_or_default();
    if entity.polynomial().is_empty() && !corr.is_empty() {
        format_correction(&corr, false)
    } else {
        format!("{}{}", base, format_correction(&corr, true))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub formula_display: String,
    pub diff_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_mass_mev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental_mass_mev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma_deviation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma_class: Option<&'static str>,

    pub sublabel: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin: Option<String>,
    pub strangeness: i32,
    /// Correction as compact Unicode, when the parser understands it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latex: Option<String>,
    /// Polynomial part in electron masses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_me: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual_me: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty_mev: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resonances: Vec<String>,
}

impl NodeView {
    pub fn from_node(node: &TreeNode, parent: Option<&TreeNode>, registry: &Registry) -> Self {
        let empty = Polynomial::new();
        let parent_coefficients = parent.map_or(&empty, TreeNode::coefficients);
        let diff = format_diff(node.coefficients(), parent_coefficients);

        match node {
            TreeNode::Virtual(v) => {
                let label = match parent {
                    None => format_polynomial(&v.anchor),
                    Some(_) if diff.is_empty() && !v.sublabel.is_empty() => v.sublabel.clone(),
                    Some(_) if diff.is_empty() => v.id.clone(),
                    Some(_) => compact_label(&diff),
                };
                let resonances = v
                    .resonances
                    .iter()
                    .filter_map(|key| registry.resonance(key))
                    .map(|r| r.symbol.clone())
                    .collect();
                NodeView {
                    id: v.id.clone(),
                    label,
                    kind: node.kind().to_string(),
                    formula_display: format_polynomial(&v.anchor),
                    diff_display: diff,
                    calculated_mass_mev: None,
                    experimental_mass_mev: None,
                    error_kev: None,
                    sigma_deviation: None,
                    sigma_class: None,
                    sublabel: v.sublabel.clone(),
                    description: v.description.clone(),
                    name: None,
                    charge: None,
                    spin: None,
                    strangeness: v.strangeness,
                    correction: None,
                    latex: None,
                    mass_me: None,
                    residual_me: None,
                    uncertainty_mev: None,
                    resonances,
                }
            }
            TreeNode::Particle(p) => Self::particle(&p.id, &p.particle, &diff, node.kind(), registry),
        }
    }

    fn particle(id: &str, p: &Particle, diff: &str, kind: &str, registry: &Registry) -> Self {
        let correction = correction_display(p);
        let diff_display = format!(
            "{}{}",
            diff,
            format_correction(correction.as_deref().unwrap_or_default(), !diff.is_empty())
        );
        let uncertainty = registry.uncertainty(&p.key);
        let sigma = sigma_deviation(p.error_mev(), uncertainty);

        NodeView {
            id: id.to_string(),
            label: p.symbol.clone(),
            kind: kind.to_string(),
            formula_display: formula_display(p),
            sublabel: diff_display.clone(),
            diff_display,
            calculated_mass_mev: Some(p.mass_mev()),
            experimental_mass_mev: Some(p.mass_exp),
            error_kev: Some(p.error_kev()),
            sigma_deviation: Some(sigma),
            sigma_class: Some(SigmaBucket::of(sigma).css_class()),
            description: p.name.clone(),
            name: Some(p.name.clone()),
            charge: Some(p.charge),
            spin: Some(p.spin.label().to_string()),
            strangeness: p.strangeness,
            correction,
            latex: Some(p.full_latex()),
            mass_me: Some(p.mass_base()),
            residual_me: Some(p.residual_me()),
            uncertainty_mev: Some(uncertainty),
            resonances: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreeView {
    pub key: String,
    pub name: String,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl TreeView {
    pub fn from_tree(tree: &Tree, registry: &Registry) -> Self {
        let nodes = tree
            .nodes()
            .map(|n| NodeView::from_node(n, tree.parent_of(n.id()), registry))
            .collect();
        let edges = tree
            .edges()
            .into_iter()
            .map(|(source, target)| EdgeView {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect();
        TreeView {
            key: tree.key.clone(),
            name: tree.name.clone(),
            nodes,
            edges,
        }
    }

    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Forest;
    use lambda7_core::constants::M_E;
    use lambda7_data::{registry, CycleDecl, NodeDecl};

    fn light_view() -> TreeView {
        let forest = Forest::standard().expect("standard forest");
        let tree = forest.tree("light").expect("light tree");
        TreeView::from_tree(tree, registry())
    }

    #[test]
    fn test_sigma_buckets() {
        assert_eq!(SigmaBucket::of(0.2), SigmaBucket::Within1);
        assert_eq!(SigmaBucket::of(1.0), SigmaBucket::Within2);
        assert_eq!(SigmaBucket::of(2.5), SigmaBucket::Within3);
        assert_eq!(SigmaBucket::of(7.0).css_class(), "sigma-high");
    }

    #[test]
    fn test_proton_view() {
        let view = light_view();
        let p = view.node("p").expect("proton node");
        assert_eq!(p.kind, "particle");
        assert_eq!(p.diff_display, "(4/5)e⁻ᵖⁱ");
        assert_eq!(p.formula_display, "6π⁵ + (4/5)e⁻ᵖⁱ");
        assert_eq!(p.correction.as_deref(), Some("+(4/5)e⁻ᵖⁱ"));
    }

    #[test]
    fn test_neutron_view() {
        let n = light_view().node("n").cloned().expect("neutron node");
        assert_eq!(n.diff_display, "8/π");
    }

    #[test]
    fn test_unparsed_correction_is_omitted() {
        let view = light_view();
        let sm = view.node("Sm").expect("Σ⁻ node");
        assert_eq!(sm.correction, None);
        assert_eq!(sm.diff_display, "π²");
        assert!(sm.latex.as_deref().is_some_and(|l| l.contains(r"\left(")));
    }

    #[test]
    fn test_virtual_labels() {
        let view = light_view();
        assert_eq!(view.node("root6").map(|n| n.label.as_str()), Some("6π⁵"));
        assert_eq!(view.node("vD6pi4").map(|n| n.label.as_str()), Some("+6π⁴"));
        assert_eq!(view.node("vXs6pi4").map(|n| n.label.as_str()), Some("+6π⁴-π³"));
        let v = view.node("v7").expect("v7");
        assert_eq!(v.kind, "virtual");
        assert!(v.calculated_mass_mev.is_none());
    }

    #[test]
    fn test_empty_diff_label_uses_sublabel() {
        let decl = CycleDecl::new("t", "Test", "r")
            .with_node(NodeDecl::new("r", &[(5, 6)]))
            .with_node(NodeDecl::new("same", &[(5, 6)]).under("r").with_sublabel("S=0"))
            .with_node(NodeDecl::new("bare", &[(5, 6)]).under("r"));
        let tree = Tree::build(&decl, registry()).expect("tree");
        let view = TreeView::from_tree(&tree, registry());
        let same = view.node("same").expect("same");
        assert_eq!(same.label, "S=0");
        assert_eq!(same.diff_display, "");
        assert_eq!(view.node("bare").map(|n| n.label.as_str()), Some("bare"));
    }

    #[test]
    fn test_numbers_match_evaluator() {
        let reg = registry();
        for node in light_view().nodes.iter().filter(|n| n.kind != "virtual") {
            let p = reg.particle_by_node(&node.id).expect("particle");
            let calc = node.calculated_mass_mev.unwrap_or_default();
            let expected = (p.polynomial.value() + p.correction_value()) * M_E;
            assert!((calc - expected).abs() <= 1e-9 * expected, "{}", p.key);

            let err_kev = node.error_kev.unwrap_or_default();
            assert!((err_kev - p.error_mev() * 1000.0).abs() < 1e-9, "{}", p.key);

            let sigma = node.sigma_deviation.unwrap_or_default();
            assert!((sigma - p.error_mev().abs() / reg.uncertainty(&p.key)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_edges_follow_declaration() {
        let view = light_view();
        assert_eq!(view.edges.len(), view.nodes.len() - 1);
        assert_eq!(
            view.edges.first(),
            Some(&EdgeView { source: "root6".into(), target: "p".into() })
        );
    }

    #[test]
    fn test_serializes_type_field() {
        let view = light_view();
        let json = serde_json::to_value(view.node("Ssp").expect("Σ*⁺")).expect("json");
        assert_eq!(json["type"], "spin-3/2-particle");
        assert!(json.get("calculated_mass_mev").is_some());
        let json = serde_json::to_value(view.node("v8").expect("v8")).expect("json");
        assert!(json.get("error_kev").is_none());
    }
}
