//! Coefficient trees
//!
//! A tree is built from a [`CycleDecl`]: each declared node becomes a
//! virtual node anchoring shared coefficients, and each particle it lists
//! becomes a particle node directly beneath it. The builder only validates
//! and indexes; grouping comes entirely from the declaration.

use lambda7_core::{codes, Lambda7Error, Particle, Polynomial, Severity, Spin};
use lambda7_data::{CycleDecl, NodeDecl, Registry};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Grouping node with no physical particle
#[derive(Debug, Clone)]
pub struct VirtualNode {
    pub id: String,
    pub parent_id: Option<String>,
    pub sublabel: String,
    pub anchor: Polynomial,
    pub strangeness: i32,
    pub description: String,
    /// Resonance keys mirroring this node
    pub resonances: Vec<String>,
}

/// Concrete particle attached to its declaring node
#[derive(Debug, Clone)]
pub struct ParticleNode {
    pub id: String,
    pub parent_id: String,
    pub particle: Particle,
}

#[derive(Debug, Clone)]
pub enum TreeNode {
    Virtual(VirtualNode),
    Particle(ParticleNode),
}

impl TreeNode {
    pub fn id(&self) -> &str {
        match self {
            TreeNode::Virtual(v) => &v.id,
            TreeNode::Particle(p) => &p.id,
        }
    }

    pub fn parent_id(&self) -> Option<&str> {
        match self {
            TreeNode::Virtual(v) => v.parent_id.as_deref(),
            TreeNode::Particle(p) => Some(&p.parent_id),
        }
    }

    /// Anchored coefficients for a virtual node, the full formula for a particle
    pub fn coefficients(&self) -> &Polynomial {
        match self {
            TreeNode::Virtual(v) => &v.anchor,
            TreeNode::Particle(p) => &p.particle.polynomial,
        }
    }

    pub fn particle(&self) -> Option<&Particle> {
        match self {
            TreeNode::Virtual(_) => None,
            TreeNode::Particle(p) => Some(&p.particle),
        }
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self, TreeNode::Virtual(_))
    }

    /// Node type as emitted to the viewer
    pub fn kind(&self) -> &'static str {
        match self {
            TreeNode::Virtual(_) => "virtual",
            TreeNode::Particle(p) if p.particle.spin == Spin::ThreeHalves => "spin-3/2-particle",
            TreeNode::Particle(_) => "particle",
        }
    }
}

/// One validated family tree
#[derive(Debug, Clone)]
pub struct Tree {
    pub key: String,
    pub name: String,
    root: String,
    nodes: Vec<TreeNode>,
    index: HashMap<String, usize>,
}

impl Tree {
    /// Build and validate a tree. Any structural problem is fatal and names
    /// the offending id.
    pub fn build(decl: &CycleDecl, registry: &Registry) -> Result<Self, Lambda7Error> {
        Self::assemble(decl, registry).map_err(|e| e.in_tree(decl.key.as_str()))
    }

    fn assemble(decl: &CycleDecl, registry: &Registry) -> Result<Self, Lambda7Error> {
        let mut tree = Tree {
            key: decl.key.clone(),
            name: decl.name.clone(),
            root: decl.root.clone(),
            nodes: Vec::new(),
            index: HashMap::new(),
        };

        for node in &decl.nodes {
            tree.push(TreeNode::Virtual(virtual_node(node)))?;

            for key in &node.resonances {
                if registry.resonance(key).is_none() {
                    return Err(Lambda7Error::unknown_resonance(&node.id, key));
                }
            }

            for key in &node.particles {
                let particle = registry
                    .particle(key)
                    .ok_or_else(|| Lambda7Error::unknown_particle(&node.id, key))?;
                tree.push(TreeNode::Particle(ParticleNode {
                    id: particle.node_id.clone(),
                    parent_id: node.id.clone(),
                    particle: particle.clone(),
                }))?;
            }
        }

        tree.check_parents()?;
        tree.check_acyclic()?;
        debug!(tree = %tree.key, nodes = tree.nodes.len(), "built coefficient tree");
        Ok(tree)
    }

    fn push(&mut self, node: TreeNode) -> Result<(), Lambda7Error> {
        let id = node.id().to_string();
        if self.index.contains_key(&id) {
            return Err(Lambda7Error::duplicate_node(&id));
        }
        self.index.insert(id, self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    fn check_parents(&self) -> Result<(), Lambda7Error> {
        match self.get_node(&self.root) {
            Some(root) if root.parent_id().is_none() => {}
            Some(root) => {
                return Err(Lambda7Error::missing_root(&self.root)
                    .with_note(format!("'{}' names parent '{}'", root.id(), root.parent_id().unwrap_or_default())))
            }
            None => return Err(Lambda7Error::missing_root(&self.root)),
        }

        for node in &self.nodes {
            match node.parent_id() {
                Some(parent) if !self.index.contains_key(parent) => {
                    return Err(Lambda7Error::unknown_parent(node.id(), parent));
                }
                None if node.id() != self.root => {
                    return Err(Lambda7Error::new(
                        codes::UNKNOWN_PARENT,
                        format!("Node '{}' has no parent but the root is '{}'", node.id(), self.root),
                    )
                    .with_suggestion("Every node except the root must name a parent")
                    .with_severity(Severity::Fatal)
                    .at_node(node.id()));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn check_acyclic(&self) -> Result<(), Lambda7Error> {
        for node in &self.nodes {
            let mut seen = HashSet::new();
            let mut path = vec![node.id().to_string()];
            seen.insert(node.id());
            let mut current = node;
            while let Some(parent) = current.parent_id().and_then(|p| self.get_node(p)) {
                path.push(parent.id().to_string());
                if !seen.insert(parent.id()) {
                    return Err(Lambda7Error::tree_cycle(&path).at_node(node.id()));
                }
                current = parent;
            }
        }
        Ok(())
    }

    // ========== Queries ==========

    pub fn get_node(&self, id: &str) -> Option<&TreeNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.get_node(&self.root)
    }

    pub fn root_id(&self) -> &str {
        &self.root
    }

    /// All nodes in declaration order; each virtual node is followed by its particles
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children in declaration order
    pub fn children_of(&self, id: &str) -> Vec<&TreeNode> {
        self.nodes.iter().filter(|n| n.parent_id() == Some(id)).collect()
    }

    pub fn parent_of(&self, id: &str) -> Option<&TreeNode> {
        self.get_node(id)?.parent_id().and_then(|p| self.get_node(p))
    }

    /// Parent first, root last
    pub fn ancestors(&self, id: &str) -> Vec<&TreeNode> {
        let mut out = Vec::new();
        let mut current = self.parent_of(id);
        while let Some(node) = current {
            out.push(node);
            current = self.parent_of(node.id());
        }
        out
    }

    /// Particles anywhere below `id`, in declaration order
    pub fn particles_under(&self, id: &str) -> Vec<&Particle> {
        self.nodes
            .iter()
            .filter(|n| self.ancestors(n.id()).iter().any(|a| a.id() == id))
            .filter_map(TreeNode::particle)
            .collect()
    }

    /// (parent, child) pairs in declaration order
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.nodes
            .iter()
            .filter_map(|n| n.parent_id().map(|p| (p, n.id())))
            .collect()
    }
}

fn virtual_node(decl: &NodeDecl) -> VirtualNode {
    VirtualNode {
        id: decl.id.clone(),
        parent_id: decl.parent.clone(),
        sublabel: decl.sublabel.clone(),
        anchor: decl.anchor.clone(),
        strangeness: decl.strangeness,
        description: decl.description.clone(),
        resonances: decl.resonances.clone(),
    }
}

/// Every family tree declared in a registry
#[derive(Debug, Clone)]
pub struct Forest {
    trees: Vec<Tree>,
}

impl Forest {
    pub fn build(registry: &Registry) -> Result<Self, Lambda7Error> {
        let trees = registry
            .cycles()
            .map(|decl| Tree::build(decl, registry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { trees })
    }

    pub fn standard() -> Result<Self, Lambda7Error> {
        Self::build(lambda7_data::registry())
    }

    pub fn tree(&self, key: &str) -> Option<&Tree> {
        self.trees.iter().find(|t| t.key == key)
    }

    pub fn trees(&self) -> impl Iterator<Item = &Tree> {
        self.trees.iter()
    }
}
