//! Lambda7 site builder
//!
//! Usage:
//!   lambda7-site           # build once into dist/
//!   lambda7-site --watch   # build, then rebuild on template/static changes
//!
//! Environment:
//!   LAMBDA7_ROOT  project root holding templates/ and static/ (default: cwd)
//!   LAMBDA7_DIST  output directory (default: <root>/dist)
//!   RUST_LOG      log filter (default: info)

mod config;
mod error;
mod site;
mod template;
mod watch;

use config::SiteConfig;
use error::SiteError;
use lambda7::Lambda7;
use std::env;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &SiteConfig) -> Result<(), SiteError> {
    let engine = Lambda7::standard()?;
    site::build(config, &engine)?;

    if config.watch {
        watch::watch(config, || site::build(config, &engine).map(|_| ()))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let mut watch_mode = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--watch" | "-w" => watch_mode = true,
            other => warn!(arg = other, "ignoring unknown argument"),
        }
    }

    let config = SiteConfig::from_env().with_watch(watch_mode);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        root = %config.root.display(),
        "lambda7-site"
    );

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
