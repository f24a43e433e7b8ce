//! Sell-in counter.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Days remaining before an item's listed expiry.
///
/// Strictly negative values are permitted and meaningful: they encode days
/// past the sell-by date and drive double-rate decay/growth. The counter is
/// never clamped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellIn(i32);

impl SellIn {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// One elapsed day.
    #[must_use]
    pub fn advanced(self) -> Self {
        Self(self.0 - 1)
    }

    /// Past the sell-by date (strictly negative).
    pub fn is_past_due(self) -> bool {
        self.0 < 0
    }
}

impl ValueObject for SellIn {}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advanced_drops_by_exactly_one() {
        assert_eq!(SellIn::new(10).advanced(), SellIn::new(9));
        assert_eq!(SellIn::new(0).advanced(), SellIn::new(-1));
        assert_eq!(SellIn::new(-4).advanced(), SellIn::new(-5));
    }

    #[test]
    fn past_due_is_strictly_negative() {
        assert!(!SellIn::new(1).is_past_due());
        assert!(!SellIn::new(0).is_past_due());
        assert!(SellIn::new(-1).is_past_due());
    }
}
