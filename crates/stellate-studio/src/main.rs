//! stellate studio: an interactive parametric star.
//!
//! Opens a window with a star polygon in the middle and a parameter panel on
//! the left. Set `RUST_LOG` to change log verbosity.

mod app;
mod config;
mod panel;

use anyhow::Context;
use stellate_engine::device::GpuInit;
use stellate_engine::logging::{init_logging, LoggingConfig};
use stellate_engine::window::Runtime;

use crate::app::StudioApp;
use crate::config::StudioConfig;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::default();
    log::info!(
        "stellate studio {}: {}-point star, size {}",
        env!("CARGO_PKG_VERSION"),
        config.star.point_count,
        config.star.size,
    );
    log::info!("keys: Up/Down select, Left/Right adjust, Space toggle, W/R/+/- shortcuts, Esc quit");

    let runtime = config.runtime.clone();
    let app = StudioApp::new(config).context("invalid initial star parameters")?;

    Runtime::run(runtime, GpuInit::default(), app)
}
