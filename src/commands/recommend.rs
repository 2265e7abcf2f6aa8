//! Recommend command - rank the catalog against seed games

use anyhow::Result;
use colored::*;
use std::time::Instant;

use crate::core::FilterCriteria;
use crate::ui;

pub fn run(
	seeds: &[String],
	limit: usize,
	max_price: Option<f32>,
	min_quality: Option<f32>,
	json: bool,
) -> Result<()> {
	let engine = super::load_engine()?;

	// Typed input gets strict resolution: a typo or ambiguous name is a
	// hard error here, unlike a stale id inside the engine which is only
	// skipped with a warning.
	let mut ids = Vec::with_capacity(seeds.len());
	for seed in seeds {
		match engine.resolve(seed) {
			Ok(id) => ids.push(id),
			Err(e) => {
				ui::error(&e.to_string());
				std::process::exit(1);
			}
		}
	}

	let filters = FilterCriteria::new(max_price, min_quality);

	if !json {
		let names: Vec<String> = ids
			.iter()
			.map(|&id| match engine.item(id) {
				Some(item) => format!("\"{}\"", item.name),
				None => id.to_string(),
			})
			.collect();
		ui::info(&format!("Seeds: {}", names.join(", ").bright_blue()));
		if !filters.is_unbounded() {
			ui::debug(&format!("Filters: {:?}", filters));
		}
	}

	let start = Instant::now();
	let results = match engine.recommend(&ids, limit, &filters) {
		Ok(results) => results,
		Err(e) => {
			ui::error(&e.to_string());
			std::process::exit(1);
		}
	};
	let elapsed_ms = start.elapsed().as_millis();

	if json {
		let payload: Vec<serde_json::Value> = results
			.iter()
			.enumerate()
			.map(|(rank, r)| {
				let item = &engine.eligible()[r.index];
				serde_json::json!({
					"rank": rank + 1,
					"id": item.id,
					"name": item.name,
					"price": item.price,
					"quality": item.quality,
					"score": r.score,
				})
			})
			.collect();
		println!("{}", serde_json::to_string_pretty(&payload)?);
		return Ok(());
	}

	ui::header("Recommendations");

	for (rank, r) in results.iter().enumerate() {
		let item = &engine.eligible()[r.index];
		let percentage = (r.score * 100.0).round() as i32;

		println!(
			"{}. {} {} {}",
			format!("{:2}", rank + 1).bright_blue().bold(),
			item.name.bright_white(),
			format!("${:.2}", item.price).yellow(),
			format!("{}%", percentage).dimmed(),
		);
	}

	println!();
	ui::success(&format!(
		"Ranked {} games in {}ms",
		engine.eligible().len(),
		elapsed_ms
	));

	Ok(())
}
