use serde::{Deserialize, Serialize};

use gildedrose_core::{Quality, SellIn};

/// A single inventory line: name, days left to sell, quality score.
///
/// Records are built by the caller, aged in place by the engine, and read
/// back through the accessors. Initial values are taken as-is — invariants
/// are maintained from the first aging step onward, not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: SellIn,
    quality: Quality,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in: SellIn::new(sell_in),
            quality: Quality::new(quality),
        }
    }

    /// The item's name, which also determines its behavioral category.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in.value()
    }

    pub fn quality(&self) -> i32 {
        self.quality.value()
    }

    // Mutators are crate-internal: only the aging rules move these fields.

    pub(crate) fn raise_quality(&mut self) {
        self.quality = self.quality.raised();
    }

    pub(crate) fn lower_quality(&mut self) {
        self.quality = self.quality.lowered();
    }

    /// Direct assignment to zero, bypassing the bounded step.
    pub(crate) fn zero_quality(&mut self) {
        self.quality = Quality::ZERO;
    }

    pub(crate) fn advance_sell_in(&mut self) {
        self.sell_in = self.sell_in.advanced();
    }

    pub(crate) fn is_past_due(&self) -> bool {
        self.sell_in.is_past_due()
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
