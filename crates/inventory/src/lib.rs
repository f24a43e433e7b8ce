//! Inventory aging domain.
//!
//! This crate contains the end-of-day aging rules for shop inventory,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Items are classified by name into a closed set of behavioral
//! categories; each category has one transition applied per simulated day.

pub mod aging;
pub mod category;
pub mod item;

pub use aging::{advance_day, age};
pub use category::{AGED_BRIE, BACKSTAGE_PASS, ItemCategory, SULFURAS};
pub use item::Item;
