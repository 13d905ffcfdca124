//! Identifier types used throughout the contacts engine.
//!
//! Every source table keys its rows by a 64-bit integer. The newtypes keep a
//! contact id from being passed where a raw contact id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ids at or above this value belong to the device owner's profile rather
/// than to the regular contacts store.
pub const PROFILE_ID_BASE: i64 = 9_223_372_034_707_292_160;

/// Returns true if the given row id belongs to the profile.
#[must_use]
pub const fn is_profile_id(id: i64) -> bool {
    id >= PROFILE_ID_BASE
}

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an id from a raw row id.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw row id.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns true if this id belongs to the profile.
            #[must_use]
            pub const fn is_profile(&self) -> bool {
                is_profile_id(self.0)
            }

            /// Parses an id from a string.
            pub fn parse(s: &str) -> crate::Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

row_id!(
    /// Identifier of a row in the Contacts source (an aggregate contact).
    ContactId
);

row_id!(
    /// Identifier of a row in the RawContacts source.
    RawContactId
);

row_id!(
    /// Identifier of a row in the Data source.
    DataId
);

row_id!(
    /// Identifier of a group a raw contact can be a member of.
    GroupId
);
