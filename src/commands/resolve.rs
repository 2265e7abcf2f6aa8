//! Resolve command - map a name to its canonical id

use anyhow::Result;
use colored::*;

use crate::ui;

pub fn run(query: &str) -> Result<()> {
	let engine = super::load_engine()?;

	match engine.resolve(query) {
		Ok(id) => {
			// resolve guarantees the id exists in the catalog
			let name = engine.item(id).map(|item| item.name.as_str()).unwrap_or("?");
			println!("{} {}", id.to_string().bright_blue().bold(), name.bright_white());
			Ok(())
		}
		Err(e) => {
			ui::error(&e.to_string());
			std::process::exit(1);
		}
	}
}
