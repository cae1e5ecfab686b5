//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances with the same attribute
/// values are the same value. They are immutable; to "modify" one, build a
/// new one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
