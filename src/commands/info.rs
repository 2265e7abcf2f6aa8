//! Info command - show one catalog entry

use anyhow::Result;
use colored::*;

use crate::config::DESCRIPTION_EXCERPT;
use crate::ui;

pub fn run(query: &str) -> Result<()> {
	let engine = super::load_engine()?;

	let id = match engine.resolve(query) {
		Ok(id) => id,
		Err(e) => {
			ui::error(&e.to_string());
			std::process::exit(1);
		}
	};

	let Some(item) = engine.item(id) else {
		// unreachable after resolve, but don't panic over it
		ui::error(&format!("No catalog entry for id {}", id));
		std::process::exit(1);
	};

	let eligible = engine.eligible().iter().any(|e| e.id == id);

	ui::header(&item.name);
	println!("  {} {}", "Id:".bright_blue(), item.id);
	println!("  {} ${:.2}", "Price:".bright_blue(), item.price);
	println!("  {} {:.3}", "Quality:".bright_blue(), item.quality);
	println!("  {} {:.0} days", "Age:".bright_blue(), item.age_days);
	println!(
		"  {} {}",
		"Eligible:".bright_blue(),
		if eligible { "yes".green() } else { "no (never recommended)".yellow() }
	);

	let excerpt: String = item.description.chars().take(DESCRIPTION_EXCERPT).collect();
	let ellipsis = if item.description.chars().count() > DESCRIPTION_EXCERPT { "…" } else { "" };
	println!("\n  {}{}", excerpt.dimmed(), ellipsis.dimmed());
	println!();

	Ok(())
}
