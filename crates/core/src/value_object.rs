//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. An
/// `Item` is an entity (it has an `ItemId`); the record describing an item
/// before it gets one is a value object.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
