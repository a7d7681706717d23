//! Unique identifier types for the visit admission engine
//!
//! Every entity carries a UUID-backed identifier newtype. Identifiers
//! render and serialize with a short entity prefix (`VIS_…`, `INM_…`) and
//! deserialize from either the prefixed form or a raw UUID.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0.simple())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                let raw = s.strip_prefix($prefix).unwrap_or(&s);
                Uuid::parse_str(raw).map($name).map_err(serde::de::Error::custom)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a visitor.
    VisitorId,
    "VIS_"
);

entity_id!(
    /// Unique identifier for an inmate.
    InmateId,
    "INM_"
);

entity_id!(
    /// Unique identifier for a facility.
    FacilityId,
    "FAC_"
);

entity_id!(
    /// Unique identifier for a visit authorization.
    AuthorizationId,
    "AUT_"
);

entity_id!(
    /// Unique identifier for a restriction.
    RestrictionId,
    "RST_"
);

entity_id!(
    /// Unique identifier for a visit session.
    SessionId,
    "SES_"
);

entity_id!(
    /// Unique identifier for an operator station user.
    OperatorId,
    "OP_"
);
