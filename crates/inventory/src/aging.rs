//! End-of-day aging transitions, one per item category.
//!
//! Each transition is a pure function of the item's current `(sell_in,
//! quality)` pair. Quality moves through the bounded steps on
//! [`gildedrose_core::Quality`], so the `[0, 50]` bound is enforced on every
//! individual increment or decrement, not on the final result of a step.

use crate::category::ItemCategory;
use crate::item::Item;

/// Apply one day of aging to a single item.
///
/// The category is re-derived from the (immutable) name on every step, so N
/// calls simulate N elapsed days.
pub fn age(item: &mut Item) {
    match ItemCategory::of(item.name()) {
        ItemCategory::Normal => age_normal(item),
        ItemCategory::AgedBrie => age_brie(item),
        ItemCategory::BackstagePass => age_backstage_pass(item),
        // Legendary items never have to be sold and never alter in quality.
        ItemCategory::Legendary => {}
    }
}

/// Age every item in the collection by one simulated day.
///
/// Items are independent: no cross-item interaction exists, so processing
/// order is irrelevant. The collection stays owned by the caller.
pub fn advance_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        age(item);
        tracing::trace!(
            name = item.name(),
            sell_in = item.sell_in(),
            quality = item.quality(),
            "aged item"
        );
    }
    tracing::debug!(items = items.len(), "end-of-day aging pass complete");
}

fn age_normal(item: &mut Item) {
    item.lower_quality();
    item.advance_sell_in();
    if item.is_past_due() {
        item.lower_quality();
    }
}

fn age_brie(item: &mut Item) {
    item.raise_quality();
    item.advance_sell_in();
    if item.is_past_due() {
        item.raise_quality();
    }
}

fn age_backstage_pass(item: &mut Item) {
    // Tier bonuses are judged against the sell-in *before* today's decrement.
    item.raise_quality();
    if item.sell_in() < 11 {
        item.raise_quality();
    }
    if item.sell_in() < 6 {
        item.raise_quality();
    }
    item.advance_sell_in();
    if item.is_past_due() {
        item.zero_quality();
    }
}
