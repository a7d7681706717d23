//! Roster datasets for the gatehouse CLI and tests
//!
//! A roster bundles one facility with its visitors, inmates,
//! authorizations, and restrictions into a single serializable unit. The
//! CLI loads one from JSON (or generates a sample with
//! [`RosterGenerator`]) and installs it into an in-memory store.
//!
//! # Usage Example
//!
//! ```rust
//! use visitgate::roster::{RosterConfig, RosterGenerator};
//! use visitgate::repository::memory::InMemoryStore;
//! use chrono::Utc;
//!
//! let mut generator = RosterGenerator::seeded(42);
//! let roster = generator.generate(&RosterConfig::default(), Utc::now()).unwrap();
//!
//! let store = InMemoryStore::new();
//! roster.install(&store).unwrap();
//! assert!(!roster.visitors.is_empty());
//! ```

pub mod generator;

pub use generator::{RosterConfig, RosterGenerator};

use serde::{Deserialize, Serialize};

use crate::authorization::Authorization;
use crate::facility::Facility;
use crate::people::{Inmate, Visitor};
use crate::repository::memory::InMemoryStore;
use crate::repository::{
    AuthorizationRepository, FacilityRepository, InmateRepository, RepositoryResult,
    RestrictionRepository, VisitorRepository,
};
use crate::restriction::Restriction;

/// A complete dataset for one facility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// The facility receiving visits
    pub facility: Facility,
    /// Registered visitors
    pub visitors: Vec<Visitor>,
    /// Inmates in custody at the facility
    pub inmates: Vec<Inmate>,
    /// Authorizations on file
    pub authorizations: Vec<Authorization>,
    /// Restrictions on file
    pub restrictions: Vec<Restriction>,
}

impl Roster {
    /// Serialize the roster to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a roster from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Save every record into an in-memory store bundle.
    pub fn install(&self, store: &InMemoryStore) -> RepositoryResult<()> {
        store.facilities.save(&self.facility)?;
        for visitor in &self.visitors {
            store.visitors.save(visitor)?;
        }
        for inmate in &self.inmates {
            store.inmates.save(inmate)?;
        }
        for authorization in &self.authorizations {
            store.authorizations.save(authorization)?;
        }
        for restriction in &self.restrictions {
            store.restrictions.save(restriction)?;
        }
        Ok(())
    }

    /// One-line description of the roster's contents.
    pub fn describe(&self) -> String {
        format!(
            "facility {} with {} visitors, {} inmates, {} authorizations, {} restrictions",
            self.facility.name,
            self.visitors.len(),
            self.inmates.len(),
            self.authorizations.len(),
            self.restrictions.len()
        )
    }
}
