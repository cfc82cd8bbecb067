//! Static site build
//!
//! Copies `static/`, renders each known page template with the engine's
//! fragments, and always writes the interactive tree page. A page whose
//! template is missing is skipped with a warning.

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::template;
use lambda7::Lambda7;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Page templates, rendered to a file of the same name
pub const PAGES: &[&str] = &[
    "index.html",
    "baryon_cycle.html",
    "charm_cycle.html",
    "bottom_cycle.html",
    "mesons.html",
    "magnetic.html",
    "formulas.html",
    "framework.html",
    "lorentz.html",
    "q_calculus.html",
    "seven.html",
];

pub const TREE_PAGE: &str = "baryon_tree.html";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub built: Vec<String>,
    pub skipped: Vec<String>,
}

pub fn build(config: &SiteConfig, engine: &Lambda7) -> Result<BuildReport, SiteError> {
    info!(dist = %config.dist.display(), "building site");
    fs::create_dir_all(&config.dist).map_err(|e| SiteError::io(&config.dist, e))?;

    let static_dist = config.dist.join("static");
    if config.static_dir.is_dir() {
        if static_dist.exists() {
            fs::remove_dir_all(&static_dist).map_err(|e| SiteError::io(&static_dist, e))?;
        }
        copy_dir(&config.static_dir, &static_dist)?;
        info!("copied static files");
    } else {
        warn!(path = %config.static_dir.display(), "no static directory");
    }

    let fragments = engine.fragments()?;
    let mut report = BuildReport::default();

    for page in PAGES {
        let source = config.templates.join(page);
        if !source.is_file() {
            warn!(page, "skipping page, template not found");
            report.skipped.push(page.to_string());
            continue;
        }
        let text = fs::read_to_string(&source).map_err(|e| SiteError::io(&source, e))?;
        let target = config.dist.join(page);
        fs::write(&target, template::render(&text, &fragments)).map_err(|e| SiteError::io(&target, e))?;
        info!(page, "built");
        report.built.push(page.to_string());
    }

    let tree_target = config.dist.join(TREE_PAGE);
    fs::write(&tree_target, engine.tree_page()?).map_err(|e| SiteError::io(&tree_target, e))?;
    info!(page = TREE_PAGE, "built");
    report.built.push(TREE_PAGE.to_string());

    info!(
        built = report.built.len(),
        skipped = report.skipped.len(),
        "done, open {}",
        config.dist.join("index.html").display()
    );
    Ok(report)
}

fn copy_dir(from: &Path, to: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(to).map_err(|e| SiteError::io(to, e))?;
    for entry in fs::read_dir(from).map_err(|e| SiteError::io(from, e))? {
        let entry = entry.map_err(|e| SiteError::io(from, e))?;
        let path = entry.path();
        let dest = to.join(entry.file_name());
        if path.is_dir() {
            copy_dir(&path, &dest)?;
        } else {
            fs::copy(&path, &dest).map_err(|e| SiteError::io(&path, e))?;
            debug!(file = %dest.display(), "copied");
        }
    }
    Ok(())
}
