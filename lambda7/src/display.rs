//! LaTeX → Unicode for correction terms
//!
//! Only a handful of shapes are understood. Anything else yields `None` and
//! callers leave the correction out of the compact display; the numeric
//! value never depends on this.

use regex::Regex;
use std::sync::OnceLock;

/// Irreducible forms matched verbatim
const LITERALS: &[(&str, &str)] = &[(r"-\pi - \frac{1}{\pi}", "-π - 1/π")];

static INTEGER: OnceLock<Option<Regex>> = OnceLock::new();
static FRACTION: OnceLock<Option<Regex>> = OnceLock::new();
static FRACTION_EXP: OnceLock<Option<Regex>> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Option<Regex>>, source: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(source).ok()).as_ref()
}

fn unicode_pi(s: &str) -> String {
    s.replace(r"\pi", "π").replace(' ', "")
}

/// Compact display for a correction's LaTeX, e.g. `\frac{4}{5}e^{-\pi}` → `+(4/5)e⁻ᵖⁱ`.
///
/// Results always carry an explicit leading sign except for the literal forms.
pub fn latex_to_display(latex: &str) -> Option<String> {
    let s = latex.trim();
    if s.is_empty() || s.contains(r"\left") || s.contains(r"\right") {
        return None;
    }

    if let Some((_, display)) = LITERALS.iter().find(|(lit, _)| *lit == s) {
        return Some(display.to_string());
    }

    if pattern(&INTEGER, r"^[+-]?\d+$")?.is_match(s) {
        return Some(if s.starts_with(['+', '-']) { s.to_string() } else { format!("+{}", s) });
    }

    if let Some(caps) = pattern(&FRACTION, r"^([+-])?\\frac\{([^}]+)\}\{([^}]+)\}$")?.captures(s) {
        let sign = caps.get(1).map_or("+", |m| m.as_str());
        return Some(format!("{}{}/{}", sign, unicode_pi(&caps[2]), unicode_pi(&caps[3])));
    }

    let exp = pattern(&FRACTION_EXP, r"^([+-])?\\frac\{([^}]+)\}\{([^}]+)\}e\^\{-\\pi\}$")?;
    if let Some(caps) = exp.captures(s) {
        let sign = caps.get(1).map_or("+", |m| m.as_str());
        return Some(format!("{}({}/{})e⁻ᵖⁱ", sign, &caps[2], &caps[3]));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        assert_eq!(latex_to_display("6").as_deref(), Some("+6"));
        assert_eq!(latex_to_display("-4").as_deref(), Some("-4"));
        assert_eq!(latex_to_display(" +2 ").as_deref(), Some("+2"));
    }

    #[test]
    fn test_fraction() {
        assert_eq!(latex_to_display(r"\frac{8}{\pi}").as_deref(), Some("+8/π"));
        assert_eq!(latex_to_display(r"-\frac{7\pi}{5}").as_deref(), Some("-7π/5"));
        assert_eq!(latex_to_display(r"\frac{1}{2}").as_deref(), Some("+1/2"));
    }

    #[test]
    fn test_fraction_exp() {
        assert_eq!(latex_to_display(r"\frac{4}{5}e^{-\pi}").as_deref(), Some("+(4/5)e⁻ᵖⁱ"));
        assert_eq!(latex_to_display(r"-\frac{1}{4}e^{-\pi}").as_deref(), Some("-(1/4)e⁻ᵖⁱ"));
    }

    #[test]
    fn test_literal() {
        assert_eq!(latex_to_display(r"-\pi - \frac{1}{\pi}").as_deref(), Some("-π - 1/π"));
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(latex_to_display(""), None);
        assert_eq!(latex_to_display(r"\frac{1}{5}\left(11\pi - 8 - e^{-\pi}\right)"), None);
        assert_eq!(latex_to_display(r"\ln\pi"), None);
        assert_eq!(latex_to_display(r"\pi + 2"), None);
    }
}
