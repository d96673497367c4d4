//! Opaque identities for mesh and routing entities.
//!
//! Identities are assigned once, when the entity is created, and are never
//! derived from coordinates. Capacity bookkeeping, edge endpoints and path
//! membership all key on these values.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw value
            #[inline]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Raw value
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

opaque_id!(
    /// Identity of a mesh leaf node
    NodeId,
    "n"
);

opaque_id!(
    /// Identity of an adjacency edge
    EdgeId,
    "e"
);

opaque_id!(
    /// Identity of a routing objective
    ObjectiveId,
    "o"
);
