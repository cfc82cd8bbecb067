//! HTML renderers
//!
//! Produces the interactive tree page and the table fragments substituted
//! into page templates. Formulas are emitted as `\( … \)` LaTeX for the
//! page's math renderer.

use crate::view::{formula_display, sigma_deviation, SigmaBucket, TreeView};
use lambda7_core::{
    Coefficient, Family, Lambda7Error, MagneticMoment, MassFormula, Meson, MesonKind, Particle, Resonance,
};
use lambda7_data::{
    baryon_levels, mass_vs_mu, mirror_notes, q_vocabulary, symmetries, Registry, MIRROR_RULE, TERM_ROWS,
};
use serde_json::{json, Map, Value};
use std::fmt::Write;

const TREE_SHELL: &str = include_str!("../assets/baryon_tree.html");

/// Light-baryon π⁵ levels shown in the cycle summary
pub const CYCLE_LEVELS: std::ops::RangeInclusive<i64> = 6..=9;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

fn math(latex: &str) -> String {
    format!(r"\({}\)", escape_html(latex))
}

// ========== Tree viewer ==========

/// `{key: {name, nodes, edges}}` for the viewer script
pub fn datasets_json(views: &[TreeView]) -> Result<String, Lambda7Error> {
    let mut datasets = Map::new();
    for view in views {
        let nodes = serde_json::to_value(&view.nodes).map_err(|e| Lambda7Error::internal(e.to_string()))?;
        let edges = serde_json::to_value(&view.edges).map_err(|e| Lambda7Error::internal(e.to_string()))?;
        datasets.insert(view.key.clone(), json!({ "name": view.name, "nodes": nodes, "edges": edges }));
    }
    serde_json::to_string(&Value::Object(datasets)).map_err(|e| Lambda7Error::internal(e.to_string()))
}

/// Standalone interactive tree page, one tab per tree
pub fn tree_page(views: &[TreeView]) -> Result<String, Lambda7Error> {
    let tabs: String = views
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let active = if i == 0 { " active" } else { "" };
            format!(
                r#"<button class="tab{}" data-tree="{}">{}</button>"#,
                active,
                escape_html(&v.key),
                escape_html(&v.name)
            )
        })
        .collect();
    let initial = views.first().map_or("", |v| v.key.as_str());

    Ok(TREE_SHELL
        .replace("__TABS__", &tabs)
        .replace("__INITIAL__", initial)
        .replace("__DATASETS__", &datasets_json(views)?))
}

// ========== Tables ==========

fn sigma_cell(error_mev: f64, uncertainty_mev: f64) -> String {
    let sigma = sigma_deviation(error_mev, uncertainty_mev);
    format!(
        r#"<td class="{}">{:.2}σ</td>"#,
        SigmaBucket::of(sigma).css_class(),
        sigma
    )
}

/// Baryon table: symbol, formula, calculated and experimental mass, error, σ
pub fn baryon_table(particles: &[&Particle], registry: &Registry) -> String {
    let mut out = String::from(
        "<table class=\"particles\">\n<thead><tr><th>Particle</th><th>Formula</th>\
         <th>Calc (MeV)</th><th>Exp (MeV)</th><th>Error (keV)</th><th>σ</th></tr></thead>\n<tbody>\n",
    );
    for p in particles {
        let _ = writeln!(
            out,
            r#"<tr id="{}"><td>{}</td><td>{}</td><td>{:.3}</td><td>{:.3}</td><td>{:+.1}</td>{}</tr>"#,
            escape_html(&p.key),
            math(&p.latex_symbol),
            math(&p.formula_latex()),
            p.mass_mev(),
            p.mass_exp,
            p.error_kev(),
            sigma_cell(p.error_mev(), registry.uncertainty(&p.key)),
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// Mesons and leptons with quark content and relative error
pub fn meson_table(mesons: &[&Meson]) -> String {
    let mut out = String::from(
        "<table class=\"mesons\">\n<thead><tr><th>Particle</th><th>Quarks</th><th>J</th>\
         <th>Formula</th><th>Calc (MeV)</th><th>Exp (MeV)</th><th>Error</th></tr></thead>\n<tbody>\n",
    );
    for m in mesons {
        let class = match m.kind {
            MesonKind::Meson => "meson",
            MesonKind::Lepton => "lepton",
        };
        let _ = writeln!(
            out,
            r#"<tr class="{}"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.3}</td><td>{:.3}</td><td>{:.4}%</td></tr>"#,
            class,
            math(&m.latex_symbol),
            math(&m.quarks),
            m.spin,
            math(&m.formula_latex()),
            m.mass_mev(),
            m.mass_exp,
            m.error_percent(),
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// Resonances with J^P, width, anomaly note and mirrored ground state
pub fn resonance_table(resonances: &[&Resonance], registry: &Registry) -> String {
    let mut out = String::from(
        "<table class=\"resonances\">\n<thead><tr><th>State</th><th>J<sup>P</sup></th><th>Γ (MeV)</th>\
         <th>Formula</th><th>Calc (MeV)</th><th>Exp (MeV)</th><th>Mirrors</th><th>Note</th></tr></thead>\n<tbody>\n",
    );
    for r in resonances {
        let mirror = r
            .mirrors
            .as_deref()
            .and_then(|key| registry.particle(key))
            .map(|p| escape_html(&p.symbol))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            r#"<tr><td>{}</td><td>{}</td><td>{:.1}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td><td>{}</td></tr>"#,
            escape_html(&r.symbol),
            escape_html(&r.jp),
            r.width,
            escape_html(&formula_display(*r)),
            r.mass_mev(),
            r.mass_exp,
            mirror,
            escape_html(&r.anomaly),
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// Magnetic moments in nuclear magnetons
pub fn magnetic_table(moments: &[&MagneticMoment]) -> String {
    let mut out = String::from(
        "<table class=\"magnetic\">\n<thead><tr><th>Baryon</th><th>Formula</th><th>μ calc</th>\
         <th>μ exp</th><th>Error</th><th>Family</th></tr></thead>\n<tbody>\n",
    );
    for m in moments {
        let _ = writeln!(
            out,
            r#"<tr><td>{}</td><td>{}</td><td>{:.4}</td><td>{:.4}</td><td>{:.2}%</td><td>{}</td></tr>"#,
            math(&m.latex_symbol),
            math(&m.formula_latex()),
            m.mu_calc(),
            m.mu_exp,
            m.error_percent(),
            escape_html(&m.family),
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// Light baryons grouped by their π⁵ coefficient
pub fn cycle_summary(registry: &Registry) -> String {
    let light = registry.family(Family::Light);
    let mut out = String::from(
        "<table class=\"cycle-summary\">\n<thead><tr><th>c<sub>5</sub></th><th>Strangeness</th>\
         <th>Members</th><th>Mean |error| (keV)</th></tr></thead>\n<tbody>\n",
    );
    for level in CYCLE_LEVELS {
        let members: Vec<&&Particle> = light
            .iter()
            .filter(|p| p.polynomial.coefficient(5).to_i64() == Some(level))
            .collect();
        if members.is_empty() {
            continue;
        }
        let symbols: Vec<String> = members.iter().map(|p| escape_html(&p.symbol)).collect();
        let mean = members.iter().map(|p| p.error_kev().abs()).sum::<f64>() / members.len() as f64;
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>",
            level,
            6 - level,
            symbols.join(" "),
            mean,
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

// ========== Reference tables ==========

fn signed(n: i32) -> String {
    if n > 0 {
        format!("+{}", n)
    } else {
        n.to_string()
    }
}

/// Light-cycle levels from the apex down, followed by the cross-level symmetries
pub fn cycle_levels(registry: &Registry) -> String {
    let mut out = String::from(
        "<table class=\"cycle-levels\">\n<thead><tr><th>Level</th><th>S</th><th>Angle</th><th>Members</th>\
         <th>Charges</th><th>Decuplet term</th><th>Octet term</th><th>μ family</th><th>μ</th><th>Notes</th></tr></thead>\n<tbody>\n",
    );
    for level in baryon_levels() {
        let members = registry.by_strangeness(Family::Light, level.strangeness());
        let symbols: Vec<String> = members.iter().map(|p| escape_html(&p.symbol)).collect();
        let mut charges: Vec<i32> = members.iter().map(|p| p.charge).collect();
        charges.sort_unstable_by(|a, b| b.cmp(a));
        charges.dedup();
        let charges: Vec<String> = charges.into_iter().map(signed).collect();
        let _ = writeln!(
            out,
            r#"<tr id="c5-{}"><td>{}</td><td>{}</td><td>{}° {}</td><td>{}</td><td>Q = {}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            level.c5,
            math(&level.pi5_latex()),
            level.strangeness(),
            level.angle_degrees(),
            math(&level.angle_latex()),
            symbols.join(" "),
            charges.join(", "),
            math(&level.decuplet_term),
            level.octet_term.as_deref().map(math).unwrap_or_else(|| "-".to_string()),
            escape_html(&level.mu_family),
            math(&level.mu_formula),
            escape_html(&level.description),
        );
    }
    out.push_str("</tbody>\n</table>\n<dl class=\"symmetries\">\n");
    for sym in symmetries() {
        let _ = writeln!(out, "<dt>{}</dt><dd>{}</dd>", escape_html(sym.name), math(sym.latex));
    }
    out.push_str("</dl>\n");
    out
}

/// Integers recurring in moment formulas and their q-calculus readings
pub fn q_vocabulary_table() -> String {
    let mut out = String::from(
        "<table class=\"q-vocabulary\">\n<thead><tr><th>N</th><th>Expression</th><th>Appears in</th></tr></thead>\n<tbody>\n",
    );
    for term in q_vocabulary() {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            term.n,
            math(term.expression),
            math(term.appears_in),
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// π⁵ mass coefficient next to the moment numerator for the same baryon
pub fn mass_vs_mu_table(registry: &Registry) -> String {
    let mut out = String::from(
        "<table class=\"mass-vs-mu\">\n<thead><tr><th>Baryon</th><th>Mass c<sub>5</sub></th>\
         <th>μ numerator</th><th>Relation</th></tr></thead>\n<tbody>\n",
    );
    for rel in mass_vs_mu() {
        let (Some(p), Some(mu)) = (registry.particle(rel.key), registry.magnetic_moment(rel.key)) else {
            continue;
        };
        let c5 = p.polynomial.coefficient(5);
        let _ = writeln!(
            out,
            r#"<tr id="mu-{}"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            escape_html(rel.key),
            math(&p.latex_symbol),
            c5,
            mu.numerator.abs(),
            math(rel.relation),
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn term_cell(c: &Coefficient, power: i32) -> String {
    if c.is_zero() {
        "0".to_string()
    } else if power == 5 || c.is_negative() {
        c.to_string()
    } else {
        format!("+{}", c)
    }
}

/// Term-by-term comparison of the 9π⁵ mirror family
pub fn term_structure(registry: &Registry) -> String {
    let family: Vec<&Resonance> = registry
        .resonances()
        .into_iter()
        .filter(|r| r.mirrors.is_some())
        .collect();

    let mut out = String::from("<table class=\"term-structure\">\n<thead><tr><th>Term</th>");
    for r in &family {
        let _ = write!(out, "<th>{}</th>", escape_html(&r.symbol));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for &(power, label, scale) in TERM_ROWS {
        let _ = write!(out, "<tr><td>{}</td>", label);
        for r in &family {
            let c = r.polynomial.coefficient(power).mul(&Coefficient::from_i64(scale));
            let _ = write!(out, "<td>{}</td>", term_cell(&c, power));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n<ul class=\"mirrors\">\n");
    for note in mirror_notes() {
        let Some(r) = registry.resonance(note.key) else {
            continue;
        };
        let _ = writeln!(
            out,
            "<li>{} {}: {}</li>",
            escape_html(&r.symbol),
            escape_html(note.kind),
            escape_html(note.note)
        );
    }
    let _ = writeln!(out, "</ul>\n<p class=\"mirror-rule\">{}</p>", escape_html(MIRROR_RULE));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Forest;
    use lambda7_data::registry;

    fn views() -> Vec<TreeView> {
        let forest = Forest::standard().expect("standard forest");
        forest.trees().map(|t| TreeView::from_tree(t, registry())).collect()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_datasets_json_shape() {
        let json: Value = serde_json::from_str(&datasets_json(&views()).expect("json")).expect("parse");
        for key in ["light", "charm", "bottom"] {
            assert!(json[key]["nodes"].is_array(), "{}", key);
            assert!(json[key]["edges"].is_array(), "{}", key);
        }
        assert_eq!(json["light"]["edges"][0]["source"], "root6");
    }

    #[test]
    fn test_tree_page_fills_shell() {
        let page = tree_page(&views()).expect("page");
        assert!(!page.contains("__DATASETS__"));
        assert!(!page.contains("__TABS__"));
        assert!(page.contains(r#"data-tree="charm""#));
        assert!(page.contains("cytoscape"));
    }

    #[test]
    fn test_baryon_table_rows() {
        let reg = registry();
        let html = baryon_table(&reg.octet(), reg);
        assert_eq!(html.matches("<tr id=").count(), 8);
        assert!(html.contains(r#"<tr id="p">"#));
        assert!(html.contains("sigma-"));
    }

    #[test]
    fn test_meson_table_marks_leptons() {
        let html = meson_table(&registry().mesons());
        assert_eq!(html.matches(r#"class="lepton""#).count(), 1);
    }

    #[test]
    fn test_resonance_table_mirrors() {
        let reg = registry();
        let html = resonance_table(&reg.resonances(), reg);
        assert!(html.contains("<td>Λ</td>"));
        assert!(html.contains("N(1440)"));
    }

    #[test]
    fn test_magnetic_table() {
        let html = magnetic_table(&registry().magnetic_moments());
        assert!(html.contains(r"\frac{8\pi}{9}"));
        assert!(html.contains("2.7925"));
    }

    #[test]
    fn test_cycle_levels() {
        let html = cycle_levels(registry());
        assert_eq!(html.matches(r#"<tr id="c5-"#).count(), 4);
        assert!(html.contains(r"\(9\pi^5\)"));
        assert!(html.contains("324°"));
        assert!(html.contains("<td>Ω⁻</td><td>Q = -1</td>"));
        assert!(html.contains("Q = +2, +1, 0, -1"));
        assert_eq!(html.matches("<dt>").count(), 3);
    }

    #[test]
    fn test_q_vocabulary_table() {
        let html = q_vocabulary_table();
        assert_eq!(html.matches("<tr><td>").count(), 7);
        assert!(html.contains(r"<tr><td>36</td>"));
    }

    #[test]
    fn test_mass_vs_mu_reads_registry() {
        let html = mass_vs_mu_table(registry());
        assert_eq!(html.matches(r#"<tr id="mu-"#).count(), 6);
        assert!(html.contains(r#"<tr id="mu-p"><td>\(p\)</td><td>6</td><td>8</td>"#));
        assert!(html.contains(r#"<tr id="mu-Sigma-">"#));
        assert!(html.contains("<td>7</td><td>36</td>"));
        assert!(html.contains("<td>9</td><td>20</td>"));
    }

    #[test]
    fn test_term_structure_columns() {
        let html = term_structure(registry());
        assert!(html.contains("<th>Λ(1405)</th><th>N(1440)</th><th>N(1535)</th><th>Λ(1520)</th>"));
        assert!(html.contains("<tr><td>π⁵</td><td>9</td><td>9</td><td>9</td><td>9</td></tr>"));
        assert!(html.contains("<tr><td>π²/2</td><td>0</td><td>+1</td><td>+1</td><td>0</td></tr>"));
        assert!(html.contains("<tr><td>π</td><td>-1</td><td>-1</td><td>+1/3</td><td>-2</td></tr>"));
        assert!(html.contains("<tr><td>1/π</td><td>-1</td><td>0</td><td>0</td><td>-1/2</td></tr>"));
        assert_eq!(html.matches("<li>").count(), 4);
    }

    #[test]
    fn test_cycle_summary_levels() {
        let html = cycle_summary(registry());
        assert_eq!(html.matches("<tr><td>").count(), 4);
        assert!(html.contains("<tr><td>9</td><td>-3</td>"));
    }
}
