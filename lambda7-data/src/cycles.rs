//! Coefficient-tree declarations
//!
//! Each cycle is a table of nodes. A node anchors the coefficients shared by
//! everything beneath it, names its parent, and lists its member particles
//! in display order. Grouping is declared here, never inferred.

use lambda7_core::Polynomial;

/// One declared tree node (always virtual; particles hang off it)
#[derive(Debug, Clone)]
pub struct NodeDecl {
    pub id: String,
    pub sublabel: String,
    /// Coefficients shared by every particle under this node
    pub anchor: Polynomial,
    pub strangeness: i32,
    pub parent: Option<String>,
    /// Particle keys, in display order
    pub particles: Vec<String>,
    /// Resonance keys whose structure mirrors this node
    pub resonances: Vec<String>,
    pub description: String,
}

impl NodeDecl {
    pub fn new(id: &str, anchor: &[(i32, i64)]) -> Self {
        Self {
            id: id.to_string(),
            sublabel: String::new(),
            anchor: Polynomial::from_ints(anchor),
            strangeness: 0,
            parent: None,
            particles: Vec::new(),
            resonances: Vec::new(),
            description: String::new(),
        }
    }

    pub fn under(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn with_sublabel(mut self, sublabel: &str) -> Self {
        self.sublabel = sublabel.to_string();
        self
    }

    pub fn with_strangeness(mut self, strangeness: i32) -> Self {
        self.strangeness = strangeness;
        self
    }

    pub fn with_particles(mut self, keys: &[&str]) -> Self {
        self.particles = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_resonances(mut self, keys: &[&str]) -> Self {
        self.resonances = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// A whole family tree declaration
#[derive(Debug, Clone)]
pub struct CycleDecl {
    /// Short key used for output datasets: "light", "charm", "bottom"
    pub key: String,
    pub name: String,
    pub root: String,
    pub nodes: Vec<NodeDecl>,
}

impl CycleDecl {
    pub fn new(key: &str, name: &str, root: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            root: root.to_string(),
            nodes: Vec::new(),
        }
    }

    pub fn with_node(mut self, node: NodeDecl) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn node(&self, id: &str) -> Option<&NodeDecl> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

pub fn light_cycle() -> CycleDecl {
    CycleDecl::new("light", "Light Baryons", "root6")
        .with_node(
            NodeDecl::new("root6", &[(5, 6)])
                .with_sublabel("S=0")
                .with_particles(&["p", "n"])
                .described("Light baryon base (S=0)"),
        )
        .with_node(
            NodeDecl::new("vD6pi4", &[(5, 6), (4, 6)])
                .under("root6")
                .with_sublabel("Δ base")
                .with_particles(&["Delta++", "Delta+", "Delta0", "Delta-"])
                .with_resonances(&["Delta_1700"])
                .described("Delta decuplet base (6π⁴)"),
        )
        .with_node(
            NodeDecl::new("v7", &[(5, 7)])
                .under("root6")
                .with_sublabel("S=-1")
                .with_strangeness(-1)
                .with_particles(&["Lambda"])
                .with_resonances(&["Lambda_1405"])
                .described("Strangeness -1 level"),
        )
        .with_node(
            NodeDecl::new("vS6pi3", &[(5, 7), (3, 6)])
                .under("v7")
                .with_sublabel("Σ base")
                .with_strangeness(-1)
                .with_particles(&["Sigma+", "Sigma0", "Sigma-"])
                .with_resonances(&["Roper"])
                .described("Sigma octet base (6π³)"),
        )
        .with_node(
            NodeDecl::new("vSs6pi4", &[(5, 7), (4, 6)])
                .under("v7")
                .with_sublabel("Σ* base")
                .with_strangeness(-1)
                .with_particles(&["Sigma*+", "Sigma*0", "Sigma*-"])
                .with_resonances(&["N_1535"])
                .described("Sigma* decuplet base (6π⁴)"),
        )
        .with_node(
            NodeDecl::new("v8", &[(5, 8)])
                .under("v7")
                .with_sublabel("S=-2")
                .with_strangeness(-2)
                .described("Strangeness -2 level (Xi)"),
        )
        .with_node(
            NodeDecl::new("vXpi4pi3", &[(5, 8), (4, 1), (3, 1)])
                .under("v8")
                .with_sublabel("Ξ base")
                .with_strangeness(-2)
                .with_particles(&["Xi0", "Xi-"])
                .described("Xi octet base"),
        )
        .with_node(
            NodeDecl::new("vXs6pi4", &[(5, 8), (4, 6), (3, -1)])
                .under("v8")
                .with_sublabel("Ξ* base")
                .with_strangeness(-2)
                .with_particles(&["Xi*0", "Xi*-"])
                .with_resonances(&["Lambda_1520"])
                .described("Xi* decuplet base"),
        )
        .with_node(
            NodeDecl::new("v9", &[(5, 9)])
                .under("v8")
                .with_sublabel("S=-3")
                .with_strangeness(-3)
                .described("Strangeness -3 level (Omega)"),
        )
        .with_node(
            NodeDecl::new("vOm6pi4", &[(5, 9), (4, 6), (3, -2)])
                .under("v9")
                .with_sublabel("Ω base")
                .with_strangeness(-3)
                .with_particles(&["Omega"])
                .with_resonances(&["N_1680", "Delta_1700"])
                .described("Omega decuplet apex"),
        )
}

pub fn charm_cycle() -> CycleDecl {
    CycleDecl::new("charm", "Charm Baryons", "root14")
        .with_node(
            NodeDecl::new("root14", &[(5, 14)])
                .with_sublabel("C=1")
                .with_particles(&["Lc+", "Xcc++"])
                .described("Charm baryon base (14 = [3]π)"),
        )
        .with_node(
            NodeDecl::new("vSc", &[(5, 14), (4, 5), (3, 1)])
                .under("root14")
                .with_sublabel("Σc base")
                .with_particles(&["Sc++", "Sc+", "Sc0"])
                .described("Sigma_c octet base"),
        )
        .with_node(
            NodeDecl::new("vScs", &[(5, 14), (4, 6), (3, 2)])
                .under("root14")
                .with_sublabel("Σc* base")
                .with_particles(&["Sc*++", "Sc*+", "Sc*0"])
                .described("Sigma_c* decuplet base (6π⁴)"),
        )
        .with_node(
            NodeDecl::new("v15", &[(5, 15)])
                .under("root14")
                .with_sublabel("S=-1")
                .with_strangeness(-1)
                .described("Charm-strange level"),
        )
        .with_node(
            NodeDecl::new("vXc", &[(5, 15), (4, 2), (3, 1)])
                .under("v15")
                .with_sublabel("Ξc base")
                .with_strangeness(-1)
                .with_particles(&["Xc+", "Xc0"])
                .described("Xi_c octet base"),
        )
        .with_node(
            NodeDecl::new("vXcs", &[(5, 15), (4, 6)])
                .under("v15")
                .with_sublabel("Ξc* base")
                .with_strangeness(-1)
                .with_particles(&["Xc*+", "Xc*0"])
                .described("Xi_c* decuplet base (6π⁴)"),
        )
        .with_node(
            NodeDecl::new("v16", &[(5, 16)])
                .under("v15")
                .with_sublabel("S=-2")
                .with_strangeness(-2)
                .with_particles(&["Oc0", "Oc*0"])
                .described("Double-strange charm level"),
        )
}

pub fn bottom_cycle() -> CycleDecl {
    CycleDecl::new("bottom", "Bottom Baryons", "root36")
        .with_node(
            NodeDecl::new("root36", &[(5, 36)])
                .with_sublabel("B=-1")
                .with_particles(&["Lb0", "Sb+", "Sb-"])
                .described("Bottom baryon base (36 = 6²)"),
        )
        .with_node(
            NodeDecl::new("v37", &[(5, 37)])
                .under("root36")
                .with_sublabel("S=-1")
                .with_strangeness(-1)
                .with_particles(&["Xb0", "Xb-"])
                .described("Bottom-strange level"),
        )
        .with_node(
            NodeDecl::new("v38", &[(5, 38)])
                .under("v37")
                .with_sublabel("S=-2")
                .with_strangeness(-2)
                .with_particles(&["Ob-"])
                .described("Double-strange bottom level"),
        )
}

pub fn all_cycles() -> Vec<CycleDecl> {
    vec![light_cycle(), charm_cycle(), bottom_cycle()]
}
