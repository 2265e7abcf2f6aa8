//! Terminal output helpers

pub mod log;

pub use log::{debug, error, header, info, print_logo, success, warn, Log};
