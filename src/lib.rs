//! # Curator Library
//!
//! Content-based game recommendation over a precomputed feature space.
//! Builds an averaged query vector from user-selected seed games and ranks
//! the catalog by cosine similarity against a weighted feature matrix.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;
pub mod ui;
