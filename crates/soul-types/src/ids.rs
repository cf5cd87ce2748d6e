//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Deeds and garden items each get their own id type so the two can never
//! be mixed up. All ids use UUID v7, which is time-ordered: ids created
//! later in the process compare greater, giving garden items a creation
//! order independent of their position in the collection.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a good or bad deed in the deed catalog.
    DeedId
}

define_id! {
    /// Unique identifier for an item growing in the garden.
    GardenItemId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_ids_sort_after_earlier_ones() {
        let first = GardenItemId::new();
        let second = GardenItemId::new();
        assert!(first < second);
    }

    #[test]
    fn id_roundtrips_through_uuid() {
        let deed = DeedId::new();
        let raw: Uuid = deed.into();
        assert_eq!(DeedId::from(raw), deed);
        assert_eq!(deed.to_string(), raw.to_string());
    }
}
