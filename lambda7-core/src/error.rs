//! Structured errors for table and tree configuration
//!
//! Configuration mistakes in the static tables are fatal and always name the
//! offending id. Display degradations are not errors at all; they surface as
//! `None` from the display layer.

use crate::CoefficientError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_PARENT: &str = "UNKNOWN_PARENT";
    pub const UNKNOWN_PARTICLE: &str = "UNKNOWN_PARTICLE";
    pub const UNKNOWN_RESONANCE: &str = "UNKNOWN_RESONANCE";
    pub const DUPLICATE_NODE: &str = "DUPLICATE_NODE";
    pub const TREE_CYCLE: &str = "TREE_CYCLE";
    pub const MISSING_ROOT: &str = "MISSING_ROOT";
    pub const INVALID_COEFFICIENT: &str = "INVALID_COEFFICIENT";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A single artifact could not be produced
    Error,
    /// The build cannot proceed
    Fatal,
}

/// Where in the tables an error was found
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Tree (cycle) being built
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<String>,

    /// Node id that carried the bad reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Structured error with a machine code and a human fix-it hint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lambda7Error {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    pub severity: Severity,
}

impl Lambda7Error {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set tree context
    pub fn in_tree(mut self, tree: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.tree = Some(tree.into());
        self
    }

    /// Builder: set node context
    pub fn at_node(mut self, node: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.node = Some(node.into());
        self
    }

    /// Builder: add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn unknown_parent(node: &str, parent: &str) -> Self {
        Self::new(
            codes::UNKNOWN_PARENT,
            format!("Node '{}' names undeclared parent '{}'", node, parent),
        )
        .with_suggestion(format!("Declare '{}' or fix the parent of '{}'", parent, node))
        .with_severity(Severity::Fatal)
        .at_node(node)
    }

    pub fn unknown_particle(node: &str, key: &str) -> Self {
        Self::new(
            codes::UNKNOWN_PARTICLE,
            format!("Node '{}' lists particle '{}' which is not in the particle table", node, key),
        )
        .with_suggestion("Check the particle key spelling against the registry")
        .with_severity(Severity::Fatal)
        .at_node(node)
    }

    pub fn unknown_resonance(node: &str, key: &str) -> Self {
        Self::new(
            codes::UNKNOWN_RESONANCE,
            format!("Node '{}' mirrors resonance '{}' which is not in the resonance table", node, key),
        )
        .with_severity(Severity::Fatal)
        .at_node(node)
    }

    pub fn duplicate_node(id: &str) -> Self {
        Self::new(codes::DUPLICATE_NODE, format!("Node id '{}' declared twice", id))
            .with_suggestion("Node ids must be unique within a tree")
            .with_severity(Severity::Fatal)
            .at_node(id)
    }

    pub fn tree_cycle(path: &[String]) -> Self {
        Self::new(codes::TREE_CYCLE, format!("Parent chain loops: {}", path.join(" → ")))
            .with_suggestion("Remove the circular parent reference")
            .with_severity(Severity::Fatal)
    }

    pub fn missing_root(root: &str) -> Self {
        Self::new(codes::MISSING_ROOT, format!("Root node '{}' is not declared", root))
            .with_severity(Severity::Fatal)
            .at_node(root)
    }

    pub fn invalid_coefficient(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_COEFFICIENT, format!("Invalid coefficient: {}", details.into()))
            .with_suggestion("Use an integer or a fraction like 6/5")
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for Lambda7Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for Lambda7Error {}

impl From<CoefficientError> for Lambda7Error {
    fn from(err: CoefficientError) -> Self {
        match err {
            CoefficientError::ParseError(s) => Self::invalid_coefficient(s),
            CoefficientError::ZeroDenominator => {
                Self::new(codes::DIV_ZERO, "Coefficient with zero denominator")
                    .with_suggestion("Ensure the denominator is not zero")
            }
        }
    }
}
