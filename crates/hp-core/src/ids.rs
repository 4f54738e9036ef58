//! Strongly typed identifier wrappers.
//!
//! Buildings live in an arena owned by the spatial index, people and families
//! in the population; all cross references are plain indices wrapped in one
//! of these types.  `.index()` turns an id back into a `Vec` position.

use std::fmt;

/// Declare one or more `u32` id newtypes.
macro_rules! typed_ids {
    ($($(#[$attr:meta])* $name:ident;)+) => {$(
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Placeholder for "not set"; never a real arena slot.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    )+};
}

typed_ids! {
    /// Index of a person in the population.
    PersonId;

    /// Index of a family (household) in the population.
    FamilyId;

    /// Index of a building in the spatial index's arena.  Transit hubs are
    /// buildings too, so transit time slots carry a `BuildingId` as well.
    BuildingId;
}
