//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the bounded quality score, the sell-in counter, and the value-object marker
//! trait they share.

pub mod quality;
pub mod sell_in;
pub mod value_object;

pub use quality::Quality;
pub use sell_in::SellIn;
pub use value_object::ValueObject;
