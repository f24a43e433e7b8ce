//! Bounded quality score.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Desirability score of an inventory item.
///
/// Ordinary items live in the closed range `[0, 50]`. The bound is enforced on
/// every individual step ([`Quality::raised`] / [`Quality::lowered`]), not on
/// construction: callers may build an out-of-range value (legendary items
/// conventionally carry 80) and the stepped operations simply refuse to move
/// further in the bounded direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    /// Upper bound for ordinary categories.
    pub const MAX: i32 = 50;

    /// Lowest possible score. Event tickets land here once the event is over.
    pub const ZERO: Quality = Quality(0);

    /// Wrap a raw score. No range validation happens here.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// One bounded step up: `+1` unless the score is already at [`Quality::MAX`]
    /// or above.
    #[must_use]
    pub fn raised(self) -> Self {
        if self.0 < Self::MAX { Self(self.0 + 1) } else { self }
    }

    /// One bounded step down: `-1` unless the score is already at zero or below.
    #[must_use]
    pub fn lowered(self) -> Self {
        if self.0 > 0 { Self(self.0 - 1) } else { self }
    }
}

impl ValueObject for Quality {}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
