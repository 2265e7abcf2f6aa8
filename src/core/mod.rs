//! Core domain types

pub mod filter;
pub mod item;
pub mod vector;

pub use filter::FilterCriteria;
pub use item::{EligibleItem, Item, ItemId};
