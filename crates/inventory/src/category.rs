use serde::{Deserialize, Serialize};

/// Name of the ripening cheese: gains quality as it ages.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the event ticket: quality ramps up toward the concert, then drops
/// to zero once it has passed.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name of the legendary item: never has to be sold, never changes.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Behavioral category of an item, derived from its name.
///
/// The set is closed: aging behavior exists for exactly these four
/// categories, and extending it means extending this enum and its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Normal,
    AgedBrie,
    BackstagePass,
    Legendary,
}

impl ItemCategory {
    /// Classify a name by exact match.
    ///
    /// Total: unrecognized names fall through to [`ItemCategory::Normal`] and
    /// age like any ordinary item rather than failing.
    pub fn of(name: &str) -> Self {
        match name {
            SULFURAS => Self::Legendary,
            AGED_BRIE => Self::AgedBrie,
            BACKSTAGE_PASS => Self::BackstagePass,
            _ => Self::Normal,
        }
    }
}
