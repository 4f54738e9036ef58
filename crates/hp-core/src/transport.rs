//! Transportation modes of the coarse travel-time model.

use serde::{Deserialize, Serialize};

use crate::Role;

/// How a person moves between two cells.
///
/// Private transport is never radius- or deadline-constrained; public
/// transport and walking each have a maximum distance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum TransportMode {
    Public,
    #[default]
    Private,
    Walk,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [TransportMode::Public, TransportMode::Private, TransportMode::Walk];

    /// The transit role stamped on slots emitted while travelling in this mode.
    #[inline]
    pub fn transit_role(self) -> Role {
        match self {
            TransportMode::Public  => Role::TransitPublic,
            TransportMode::Private => Role::TransitPrivate,
            TransportMode::Walk    => Role::TransitWalk,
        }
    }

    pub fn from_role(role: Role) -> Option<TransportMode> {
        match role {
            Role::TransitPublic  => Some(TransportMode::Public),
            Role::TransitPrivate => Some(TransportMode::Private),
            Role::TransitWalk    => Some(TransportMode::Walk),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Public  => "public",
            TransportMode::Private => "private",
            TransportMode::Walk    => "walk",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
