//! The occupancy tag attached to every time slot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a person occupies a building during a time slot.
///
/// Stationary roles count against a building's per-role capacity; the three
/// transit roles mark a person passing through a cell's transit hub.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Home,
    Employee,
    Visitor,
    Student,
    Patient,
    DaycareChild,
    TransitPublic,
    TransitPrivate,
    TransitWalk,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::Home,
        Role::Employee,
        Role::Visitor,
        Role::Student,
        Role::Patient,
        Role::DaycareChild,
        Role::TransitPublic,
        Role::TransitPrivate,
        Role::TransitWalk,
    ];

    #[inline]
    pub fn is_transit(self) -> bool {
        matches!(self, Role::TransitPublic | Role::TransitPrivate | Role::TransitWalk)
    }

    #[inline]
    pub fn is_stationary(self) -> bool {
        !self.is_transit()
    }

    /// Single-character code used by the CSV schedule format.
    pub fn code(self) -> char {
        match self {
            Role::Home           => 'H',
            Role::Employee       => 'E',
            Role::Visitor        => 'V',
            Role::Student        => 'S',
            Role::Patient        => 'P',
            Role::DaycareChild   => 'D',
            Role::TransitPublic  => 'T',
            Role::TransitPrivate => 'C',
            Role::TransitWalk    => 'W',
        }
    }

    pub fn from_code(c: char) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.code() == c)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Home           => "home",
            Role::Employee       => "employee",
            Role::Visitor        => "visitor",
            Role::Student        => "student",
            Role::Patient        => "patient",
            Role::DaycareChild   => "daycare_child",
            Role::TransitPublic  => "transit_public",
            Role::TransitPrivate => "transit_private",
            Role::TransitWalk    => "transit_walk",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
