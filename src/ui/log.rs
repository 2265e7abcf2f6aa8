//! Unified logging system

use colored::*;
use rand::RngExt;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
   ______                 __
  / ____/_  ___________ _/ /_____  _____
 / /   / / / / ___/ __ `/ __/ __ \/ ___/
/ /___/ /_/ / /  / /_/ / /_/ /_/ / /
\____/\__,_/_/   \__,_/\__/\____/_/     "#;

const SLOGANS: &[&str] = &[
	"Your backlog called, it wants company",
	"Statistically, you'll like this one",
	"Five games you'll wishlist and never launch",
	"Cosine similarity, but make it fun",
	"Trained on everything you already finished",
	"Skip the demo, trust the vector",
	"No microtransactions were harmed",
	"Better taste than the storefront carousel",
	"\"Just one more recommendation\" - you, at 3am",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}
