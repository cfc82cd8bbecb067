//! Coefficient-diff formatter
//!
//! Renders what a tree node adds beyond its parent as compact Unicode,
//! highest power first: `6π⁴ - π³`, `" + 2π²"`, `""` for no change.

use lambda7_core::{Coefficient, Polynomial};

/// Unicode label for π^power; power 0 has none
pub fn power_label(power: i32) -> String {
    match power {
        0 => String::new(),
        1 => "π".to_string(),
        p => format!("π{}", superscript(p)),
    }
}

fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

/// Magnitude and power without sign: `π³`, `6π⁴`, `(6/5)π`, `1`, `2/5`
fn term_body(magnitude: &Coefficient, power: i32) -> String {
    let label = power_label(power);
    if magnitude.is_one() && !label.is_empty() {
        label
    } else if magnitude.is_integer() || label.is_empty() {
        format!("{}{}", magnitude, label)
    } else {
        format!("({}){}", magnitude, label)
    }
}

/// One signed term. The first term of a string carries no leading `+`
/// and no spacing; later terms are joined with ` + ` / ` - `.
pub fn format_term(coefficient: &Coefficient, power: i32, first: bool) -> String {
    let body = term_body(&coefficient.abs(), power);
    match (first, coefficient.is_negative()) {
        (true, false) => body,
        (true, true) => format!("-{}", body),
        (false, false) => format!(" + {}", body),
        (false, true) => format!(" - {}", body),
    }
}

fn format_terms(poly: &Polynomial) -> String {
    poly.terms_descending()
        .enumerate()
        .map(|(i, (power, c))| format_term(c, power, i == 0))
        .collect()
}

/// Whole polynomial; `"0"` when empty
pub fn format_polynomial(poly: &Polynomial) -> String {
    if poly.is_empty() {
        "0".to_string()
    } else {
        format_terms(poly)
    }
}

/// Terms of `child − parent`; empty when the two agree on every power
pub fn format_diff(child: &Polynomial, parent: &Polynomial) -> String {
    format_terms(&child.diff(parent))
}

/// Append a correction display to a polynomial string.
///
/// After a polynomial the sign becomes a spaced operator; standing alone
/// a leading `+` is dropped and a leading `-` is kept.
pub fn format_correction(display: &str, has_poly: bool) -> String {
    if display.is_empty() {
        return String::new();
    }
    if let Some(rest) = display.strip_prefix('+') {
        if has_poly {
            format!(" + {}", rest)
        } else {
            rest.to_string()
        }
    } else if let Some(rest) = display.strip_prefix('-') {
        if has_poly {
            format!(" - {}", rest)
        } else {
            format!("-{}", rest)
        }
    } else if has_poly {
        format!(" + {}", display)
    } else {
        display.to_string()
    }
}

/// Diff in node-label form: no spaces, explicit leading sign (`+6π⁴-π³`)
pub fn compact_label(diff: &str) -> String {
    let compact: String = diff.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() || compact.starts_with('-') || compact.starts_with('+') {
        compact
    } else {
        format!("+{}", compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(ints: &[(i32, i64)]) -> Polynomial {
        Polynomial::from_ints(ints)
    }

    #[test]
    fn test_power_labels() {
        assert_eq!(power_label(7), "π⁷");
        assert_eq!(power_label(2), "π²");
        assert_eq!(power_label(1), "π");
        assert_eq!(power_label(0), "");
        assert_eq!(power_label(-1), "π⁻¹");
    }

    #[test]
    fn test_first_term() {
        assert_eq!(format_term(&Coefficient::from_i64(1), 4, true), "π⁴");
        assert_eq!(format_term(&Coefficient::from_i64(-1), 3, true), "-π³");
        assert_eq!(format_term(&Coefficient::from_i64(6), 3, true), "6π³");
        assert_eq!(format_term(&Coefficient::from_i64(-2), 2, true), "-2π²");
    }

    #[test]
    fn test_later_terms() {
        assert_eq!(format_term(&Coefficient::from_i64(1), 2, false), " + π²");
        assert_eq!(format_term(&Coefficient::from_i64(-1), 3, false), " - π³");
        assert_eq!(format_term(&Coefficient::from_i64(6), 4, false), " + 6π⁴");
        assert_eq!(format_term(&Coefficient::from_i64(-6), 4, false), " - 6π⁴");
    }

    #[test]
    fn test_constant_and_fraction_terms() {
        assert_eq!(format_term(&Coefficient::from_i64(1), 0, true), "1");
        assert_eq!(format_term(&Coefficient::from_i64(-2), 0, false), " - 2");
        assert_eq!(format_term(&Coefficient::from_ratio(-6, 5), 1, false), " - (6/5)π");
        assert_eq!(format_term(&Coefficient::from_ratio(2, 5), 0, false), " + 2/5");
        assert_eq!(format_term(&Coefficient::from_ratio(1, 2), 2, true), "(1/2)π²");
    }

    #[test]
    fn test_diff_single_term() {
        assert_eq!(format_diff(&poly(&[(5, 7), (3, 6)]), &poly(&[(5, 7)])), "6π³");
    }

    #[test]
    fn test_diff_unit_term() {
        // The only emitted term is also the first, so no leading operator
        assert_eq!(format_diff(&poly(&[(5, 7), (3, 6), (2, 1)]), &poly(&[(5, 7), (3, 6)])), "π²");
    }

    #[test]
    fn test_diff_two_terms() {
        assert_eq!(format_diff(&poly(&[(5, 8), (4, 6), (3, -1)]), &poly(&[(5, 8)])), "6π⁴ - π³");
    }

    #[test]
    fn test_diff_against_self_is_empty() {
        let p = poly(&[(5, 6), (4, 6), (2, -1)]);
        assert_eq!(format_diff(&p, &p), "");
    }

    #[test]
    fn test_diff_negative_and_missing_powers() {
        // Power present only in the parent becomes a negative term
        assert_eq!(format_diff(&poly(&[(5, 7)]), &poly(&[(5, 6), (3, 2)])), "π⁵ - 2π³");
    }

    #[test]
    fn test_format_polynomial() {
        let rho = poly(&[(5, 5), (2, -1)]).with_ratio(1, -6, 5).with_ratio(0, 2, 5);
        assert_eq!(format_polynomial(&rho), "5π⁵ - π² - (6/5)π + 2/5");
        assert_eq!(format_polynomial(&Polynomial::new()), "0");
    }

    #[test]
    fn test_format_correction() {
        assert_eq!(format_correction("+(4/5)e⁻ᵖⁱ", false), "(4/5)e⁻ᵖⁱ");
        assert_eq!(format_correction("+(4/5)e⁻ᵖⁱ", true), " + (4/5)e⁻ᵖⁱ");
        assert_eq!(format_correction("-4", false), "-4");
        assert_eq!(format_correction("-4", true), " - 4");
        assert_eq!(format_correction("8/π", true), " + 8/π");
        assert_eq!(format_correction("", true), "");
    }

    #[test]
    fn test_compact_label() {
        assert_eq!(compact_label("6π⁴ - π³"), "+6π⁴-π³");
        assert_eq!(compact_label("-π³"), "-π³");
        assert_eq!(compact_label(""), "");
    }
}
