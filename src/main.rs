//! Curator - content-based game recommendations
//!
//! Thin shell around the recommendation engine: commands resolve input,
//! call the engine and print. Seeds can be names or ids; results come back
//! ranked by cosine similarity against the precomputed feature matrix.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use curator::cli::{Cli, Command};
use curator::commands;
use curator::config;
use curator::ui;

fn main() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	if let Some(dir) = cli.data_dir {
		config::set_data_dir(dir);
	}

	match cli.command {
		Command::Recommend { seeds, limit, max_price, min_quality, json } => {
			commands::recommend::run(&seeds, limit, max_price, min_quality, json)
		}
		Command::Resolve { query } => commands::resolve::run(&query),
		Command::Info { query } => commands::info::run(&query),
		Command::Check { update } => commands::check::run(update),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help().unwrap();
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help().unwrap();
				}
			} else {
				cmd.print_help().unwrap();
			}
			Ok(())
		}
	}
}
