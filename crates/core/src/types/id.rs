//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `u32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_u32()`, `next()`
/// - `From<u32>` and `Into<u32>` implementations
///
/// IDs are ordered so that stores keyed by ID iterate in assignment order.
///
/// # Example
///
/// ```rust
/// # use otthub_core::define_id;
/// define_id!(InvoiceId);
///
/// let first = InvoiceId::new(1);
/// assert_eq!(first.next(), InvoiceId::new(2));
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID from a u32 value.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the underlying u32 value.
            #[must_use]
            pub const fn as_u32(&self) -> u32 {
                self.0
            }

            /// The ID assigned after this one.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(PlanId);

impl PlanId {
    /// The ID given to the first plan of an empty catalog.
    pub const FIRST: Self = Self(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_id_ordering_follows_value() {
        assert!(PlanId::new(2) < PlanId::new(10));
        assert_eq!(PlanId::new(4).next(), PlanId::new(5));
    }

    #[test]
    fn test_plan_id_next_saturates() {
        assert_eq!(PlanId::new(u32::MAX).next(), PlanId::new(u32::MAX));
    }

    #[test]
    fn test_plan_id_serde_is_transparent() {
        let json = serde_json::to_string(&PlanId::new(7)).unwrap_or_default();
        assert_eq!(json, "7");
    }
}
