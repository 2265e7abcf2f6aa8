use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config;

fn parse_quality(s: &str) -> Result<f32, String> {
	let val: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !(0.0..=1.0).contains(&val) {
		Err(format!("quality must be between 0.0 and 1.0, got {}", val))
	} else {
		Ok(val)
	}
}

fn parse_price(s: &str) -> Result<f32, String> {
	let val: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if val < 0.0 {
		Err(format!("price must be non-negative, got {}", val))
	} else {
		Ok(val)
	}
}

fn parse_limit(s: &str) -> Result<usize, String> {
	let val: usize = s.parse().map_err(|_| format!("'{}' is not a valid count", s))?;
	if val == 0 {
		Err("limit must be at least 1".to_string())
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "curator",
	author,
	version,
	about = "Content-based game recommendations",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {curator} {recommend} {rec_args}   {rec_desc}
  {curator} {recommend} {rec_filter_args}   {rec_filter_desc}
  {curator} {resolve} {resolve_args}              {resolve_desc}
  {curator} {info} {info_args}                    {info_desc}
  {curator} {check}                            {check_desc}",
		title = "Examples:".bright_blue().bold(),
		curator = "curator".bright_blue(),
		recommend = "recommend".yellow(),
		rec_args = "\"Portal 2\" 620 -n 10",
		rec_desc = "Rank against two seed games".dimmed(),
		rec_filter_args = "440 --max-price 20",
		rec_filter_desc = "Only games at 20 or less".dimmed(),
		resolve = "resolve".yellow(),
		resolve_args = "\"Portal 2\"",
		resolve_desc = "Print the canonical id".dimmed(),
		info = "info".yellow(),
		info_args = "620",
		info_desc = "Show a catalog entry".dimmed(),
		check = "check".yellow(),
		check_desc = "Verify the artifact set".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Directory containing the model artifacts
	#[arg(long = "data-dir", global = true, value_name = "DIR")]
	pub data_dir: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Recommend games similar to the given seeds
	Recommend {
		/// Seed games (names or ids)
		#[arg(value_name = "SEED", required = true)]
		seeds: Vec<String>,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = config::DEFAULT_LIMIT, value_parser = parse_limit)]
		limit: usize,

		/// Inclusive price ceiling
		#[arg(long = "max-price", value_name = "PRICE", value_parser = parse_price)]
		max_price: Option<f32>,

		/// Inclusive quality floor (0.0-1.0)
		#[arg(long = "min-quality", value_name = "SCORE", value_parser = parse_quality)]
		min_quality: Option<f32>,

		/// Print results as JSON
		#[arg(long = "json")]
		json: bool,
	},

	/// Resolve a game name to its canonical id
	Resolve {
		/// Game name or id
		#[arg(value_name = "NAME_OR_ID")]
		query: String,
	},

	/// Show the catalog entry for a game
	Info {
		/// Game name or id
		#[arg(value_name = "NAME_OR_ID")]
		query: String,
	},

	/// Verify the artifact set on disk
	Check {
		/// Re-stamp the manifest after a successful check
		#[arg(long = "update")]
		update: bool,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
