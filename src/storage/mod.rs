//! Artifact storage
//!
//! The engine consumes a pre-built artifact set (tables, fitted transforms,
//! feature matrix) produced by the offline model build. Everything here is
//! load-once, read-only.

pub mod artifacts;
pub mod manifest;

pub use artifacts::{load, load_unverified, save, Artifacts};
pub use manifest::Manifest;
