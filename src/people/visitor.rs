//! Visitor identity records
//!
//! This module contains the Visitor entity and its creation invariants.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::types::{AuditInfo, VisitorId, VisitorStatus};

/// Minimum age, in whole years, required to register as a visitor
pub const MINIMUM_VISITOR_AGE: u32 = 18;

/// Shortest accepted national-id length
pub const NATIONAL_ID_MIN_DIGITS: usize = 7;

/// Longest accepted national-id length
pub const NATIONAL_ID_MAX_DIGITS: usize = 8;

/// A person registered to visit inmates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visitor {
    /// Unique identifier for the visitor
    pub id: VisitorId,
    /// National identity document number (7-8 digits, unique system-wide)
    pub national_id: String,
    /// Full legal name
    pub full_name: String,
    /// Administrative status
    pub status: VisitorStatus,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Audit timestamps
    pub audit: AuditInfo,
}

impl Visitor {
    /// Register a new visitor.
    ///
    /// Fails if the national id is not 7-8 numeric digits, or if the birth
    /// date implies an age below [`MINIMUM_VISITOR_AGE`] at registration
    /// time. Age is checked here once and never re-validated.
    pub fn new(
        national_id: impl Into<String>,
        full_name: impl Into<String>,
        birth_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> EngineResult<Self> {
        let national_id = national_id.into();
        validate_national_id(&national_id)?;

        let age = now.date_naive().years_since(birth_date).unwrap_or(0);
        if age < MINIMUM_VISITOR_AGE {
            return Err(EngineError::validation(format!(
                "visitor must be at least {} years old at registration (is {})",
                MINIMUM_VISITOR_AGE, age
            )));
        }

        Ok(Self {
            id: VisitorId::new(),
            national_id,
            full_name: full_name.into(),
            status: VisitorStatus::Active,
            birth_date,
            audit: AuditInfo::new(now),
        })
    }

    /// Check whether the visitor may currently request admission.
    pub fn is_active(&self) -> bool {
        self.status == VisitorStatus::Active
    }

    /// Suspend the visitor's visiting privileges.
    pub fn suspend(&mut self, now: DateTime<Utc>) {
        self.status = VisitorStatus::Suspended;
        self.audit.touch(now);
    }

    /// Restore a suspended visitor to active.
    pub fn reinstate(&mut self, now: DateTime<Utc>) {
        self.status = VisitorStatus::Active;
        self.audit.touch(now);
    }

    /// Retire the record; the visitor no longer visits.
    pub fn retire(&mut self, now: DateTime<Utc>) {
        self.status = VisitorStatus::Inactive;
        self.audit.touch(now);
    }
}

fn validate_national_id(national_id: &str) -> EngineResult<()> {
    let digits_only = national_id.chars().all(|c| c.is_ascii_digit());
    let length_ok =
        (NATIONAL_ID_MIN_DIGITS..=NATIONAL_ID_MAX_DIGITS).contains(&national_id.len());

    if digits_only && length_ok {
        Ok(())
    } else {
        Err(EngineError::validation(format!(
            "national id must be {}-{} numeric digits, got {:?}",
            NATIONAL_ID_MIN_DIGITS, NATIONAL_ID_MAX_DIGITS, national_id
        )))
    }
}
