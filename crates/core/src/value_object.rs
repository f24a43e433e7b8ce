//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by
/// value** — they have no identity of their own. [`crate::Quality`] is a value
/// object: two scores of 42 are simply the same score. An inventory item, by
/// contrast, is an entity: it keeps its identity (its name) while its values
/// change day by day.
///
/// "Mutation" of a value object means producing a new one, which is why the
/// stepped operations on `Quality` and `SellIn` consume `self` and return the
/// next value.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy (they're values, not references)
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
