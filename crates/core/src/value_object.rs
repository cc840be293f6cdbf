//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two of them with the same attribute values
/// are equal. Resolver outputs (`PriceInfo`, `Availability`, label plans) are
/// value objects: running a resolver twice on the same snapshot must produce
/// equal values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceInfo { regular_price: Option<Decimal>, has_discount: bool }
///
/// impl ValueObject for PriceInfo {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
