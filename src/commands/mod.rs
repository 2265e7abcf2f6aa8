//! # Command Implementations
//!
//! Each submodule handles one CLI command (recommend, resolve, info, check).
//! Commands are the presentation shell: they resolve input, call the engine
//! and print. No ranking logic lives here.

pub mod check;
pub mod info;
pub mod recommend;
pub mod resolve;

use anyhow::{Context, Result};
use std::time::Instant;

use crate::config;
use crate::engine::Engine;
use crate::ui;

/// Locate the data directory and load a full engine from it
pub(crate) fn load_engine() -> Result<Engine> {
	let dir = config::data_dir()
		.context("Data directory not found. Pass --data-dir or set CURATOR_DATA_DIR")?;

	ui::debug(&format!("Loading artifacts from {}", dir.display()));
	let start = Instant::now();
	let engine = Engine::load(&dir)?;
	ui::debug(&format!("Engine ready in {:.2}s", start.elapsed().as_secs_f32()));

	Ok(engine)
}
