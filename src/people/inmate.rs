//! Inmate custody records
//!
//! This module contains the Inmate entity, its housing assignment, and the
//! availability rule for receiving visits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, EngineResult};
use crate::types::{AuditInfo, FacilityId, InmateId, InmateStatus};

/// Wing and floor where an inmate is currently housed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingAssignment {
    /// Wing designation (e.g. "B")
    pub wing: String,
    /// Floor number within the wing
    pub floor: u8,
}

impl HousingAssignment {
    /// Create a housing assignment.
    pub fn new(wing: impl Into<String>, floor: u8) -> Self {
        Self { wing: wing.into(), floor }
    }
}

impl fmt::Display for HousingAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wing {}, floor {}", self.wing, self.floor)
    }
}

/// A person in custody who may receive visits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inmate {
    /// Unique identifier for the inmate
    pub id: InmateId,
    /// Facility file number (unique system-wide)
    pub file_number: String,
    /// Full legal name
    pub full_name: String,
    /// Custody status
    pub status: InmateStatus,
    /// Current wing and floor
    pub housing: HousingAssignment,
    /// Facility holding the inmate
    pub facility_id: FacilityId,
    /// Audit timestamps
    pub audit: AuditInfo,
}

impl Inmate {
    /// Register a new inmate at a facility. Fails on an empty file number.
    pub fn new(
        file_number: impl Into<String>,
        full_name: impl Into<String>,
        housing: HousingAssignment,
        facility_id: FacilityId,
        now: DateTime<Utc>,
    ) -> EngineResult<Self> {
        let file_number = file_number.into();
        if file_number.trim().is_empty() {
            return Err(EngineError::validation("inmate file number is required"));
        }

        Ok(Self {
            id: InmateId::new(),
            file_number,
            full_name: full_name.into(),
            status: InmateStatus::Active,
            housing,
            facility_id,
            audit: AuditInfo::new(now),
        })
    }

    /// Check whether the inmate may currently receive visits.
    ///
    /// Only inmates in active custody at their facility receive visits;
    /// transferred and discharged inmates never do.
    pub fn available_for_visits(&self) -> bool {
        self.status == InmateStatus::Active
    }

    /// Move the inmate to a different wing/floor within the facility.
    pub fn rehouse(&mut self, housing: HousingAssignment, now: DateTime<Utc>) {
        self.housing = housing;
        self.audit.touch(now);
    }

    /// Mark the inmate transferred to another facility.
    pub fn transfer(&mut self, destination: FacilityId, now: DateTime<Utc>) {
        self.status = InmateStatus::Transferred;
        self.facility_id = destination;
        self.audit.touch(now);
    }

    /// Mark the inmate released from custody.
    pub fn discharge(&mut self, now: DateTime<Utc>) {
        self.status = InmateStatus::Discharged;
        self.audit.touch(now);
    }
}
