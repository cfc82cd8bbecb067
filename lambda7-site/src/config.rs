//! Build configuration
//!
//! `LAMBDA7_ROOT` sets the project root (default: current directory),
//! `LAMBDA7_DIST` the output directory (default: `<root>/dist`).

use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub root: PathBuf,
    pub templates: PathBuf,
    pub static_dir: PathBuf,
    pub dist: PathBuf,
    pub watch: bool,
}

impl SiteConfig {
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            templates: root.join("templates"),
            static_dir: root.join("static"),
            dist: root.join("dist"),
            root,
            watch: false,
        }
    }

    pub fn from_env() -> Self {
        let root = env::var("LAMBDA7_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        let config = Self::from_root(root);
        match env::var("LAMBDA7_DIST") {
            Ok(dist) => config.with_dist(dist),
            Err(_) => config,
        }
    }

    pub fn with_dist(mut self, dist: impl Into<PathBuf>) -> Self {
        self.dist = dist.into();
        self
    }

    pub fn with_watch(mut self, watch: bool) -> Self {
        self.watch = watch;
        self
    }

    /// Directories whose changes trigger a rebuild
    pub fn watched_dirs(&self) -> Vec<&Path> {
        vec![self.templates.as_path(), self.static_dir.as_path()]
    }
}
