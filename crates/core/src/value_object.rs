//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are
//! defined entirely by their attribute values. Two value objects with the same
//! values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// create a new one carrying the new values. A price of `1999` cents is the
/// same price wherever it appears; a product with identical fields is still a
/// different product if its id differs - that distinction is what separates a
/// value object from an [`Entity`](crate::Entity).
///
/// The bounds keep value objects cheap to copy, comparable by value, and
/// debuggable in logs and tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
