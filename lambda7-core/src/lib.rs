//! Lambda7 Core - Fundamental types
//!
//! This crate provides the numeric model shared by the data tables and the
//! tree engine:
//! - `Coefficient`: exact rational coefficient of a power of π
//! - `Polynomial`: sparse Σ c_p·π^p
//! - `Correction`: closed-form correction term (evaluated and rendered from one tree)
//! - `MassFormula`: evaluation and error quantities for any entity with a polynomial
//! - `Lambda7Error`: structured configuration errors

mod coefficient;
mod error;
mod expr;
mod formula;
mod magnetic;
mod meson;
mod particle;
mod polynomial;
mod resonance;

pub mod constants;

pub use coefficient::{Coefficient, CoefficientError, DISPLAY_MAX_DENOMINATOR};
pub use error::{codes, ErrorContext, Lambda7Error, Severity};
pub use expr::{Atom, Correction};
pub use formula::MassFormula;
pub use magnetic::MagneticMoment;
pub use meson::{Meson, MesonKind};
pub use particle::{Family, Multiplet, Particle, Spin};
pub use polynomial::Polynomial;
pub use resonance::Resonance;

#[cfg(test)]
mod tests {
    use super::*;

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_construction() {
            let err = Lambda7Error::unknown_parent("vS6pi3", "v77");
            assert_eq!(err.code, codes::UNKNOWN_PARENT);
            assert_eq!(err.severity, Severity::Fatal);
            assert!(err.message.contains("v77"));
        }

        #[test]
        fn test_error_with_context() {
            let err = Lambda7Error::unknown_particle("vXs6pi4", "Xi*9").in_tree("light");
            let ctx = err.context.unwrap();
            assert_eq!(ctx.tree, Some("light".to_string()));
            assert_eq!(ctx.node, Some("vXs6pi4".to_string()));
        }

        #[test]
        fn test_error_with_note() {
            let err = Lambda7Error::duplicate_node("v7").with_note("second declaration ignored");
            let ctx = err.context.unwrap();
            assert_eq!(ctx.notes, vec!["second declaration ignored".to_string()]);
        }

        #[test]
        fn test_error_display() {
            let err = Lambda7Error::tree_cycle(&["a".to_string(), "b".to_string(), "a".to_string()]);
            let display = format!("{}", err);
            assert!(display.starts_with("[TREE_CYCLE]"));
            assert!(display.contains("a → b → a"));
        }

        #[test]
        fn test_from_coefficient_error() {
            let err: Lambda7Error = CoefficientError::ZeroDenominator.into();
            assert_eq!(err.code, codes::DIV_ZERO);
            let err: Lambda7Error = CoefficientError::ParseError("x".into()).into();
            assert_eq!(err.code, codes::INVALID_COEFFICIENT);
        }
    }
}
