//! Admission decision values
//!
//! A denied admission is an ordinary value, not an error: the result
//! carries every blocking reason found (one per matching restriction, for
//! the restriction step) plus advisory notes that inform without blocking.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::session::VisitSession;
use crate::types::{FacilityId, InmateId, VisitorId};

/// Category of a blocking reason
///
/// Distinguishes "the record does not exist" from "the rules say no", so
/// callers can route the two differently. An infrastructure failure is
/// never represented here — it surfaces as an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockingCause {
    /// A referenced record (visitor, inmate, authorization, facility) is
    /// absent
    NotFound,
    /// An admission rule denied the visit
    PolicyDenied,
}

impl fmt::Display for BlockingCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockingCause::NotFound => write!(f, "Not Found"),
            BlockingCause::PolicyDenied => write!(f, "Policy Denied"),
        }
    }
}

/// One human-readable reason an admission was denied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockingReason {
    /// Whether the reason is an absence or a rule denial
    pub cause: BlockingCause,
    /// Operator-facing explanation
    pub message: String,
}

impl BlockingReason {
    /// A reason for a missing record.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self { cause: BlockingCause::NotFound, message: message.into() }
    }

    /// A reason for a rule denial.
    pub fn policy(message: impl Into<String>) -> Self {
        Self { cause: BlockingCause::PolicyDenied, message: message.into() }
    }
}

impl fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.cause, self.message)
    }
}

/// Resolved identities handed to the session surface after a successful
/// evaluation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdmissionClearance {
    /// The admitted visitor
    pub visitor_id: VisitorId,
    /// The inmate to be visited
    pub inmate_id: InmateId,
    /// The facility hosting the visit
    pub facility_id: FacilityId,
}

/// Outcome of one admission evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionResult {
    /// Whether the visitor may check in
    pub admitted: bool,
    /// Every reason standing in the way; empty iff admitted
    pub blocking_reasons: Vec<BlockingReason>,
    /// Non-blocking notes for the operator
    pub advisories: Vec<String>,
    /// Present iff admitted; feeds `schedule_visit`
    pub clearance: Option<AdmissionClearance>,
}

impl AdmissionResult {
    /// Build a successful admission.
    pub fn admitted(clearance: AdmissionClearance, advisories: Vec<String>) -> Self {
        Self { admitted: true, blocking_reasons: Vec::new(), advisories, clearance: Some(clearance) }
    }

    /// Build a denial from one or more blocking reasons.
    pub fn denied(blocking_reasons: Vec<BlockingReason>, advisories: Vec<String>) -> Self {
        Self { admitted: false, blocking_reasons, advisories, clearance: None }
    }

    /// Build a denial from a single blocking reason.
    pub fn denied_for(reason: BlockingReason) -> Self {
        Self::denied(vec![reason], Vec::new())
    }
}

/// Outcome of committing a check-in against live facility occupancy
///
/// The capacity ceiling is re-verified atomically at commit time, so a
/// check-in that passed evaluation can still find the facility full.
#[derive(Debug, Clone)]
pub enum CheckInOutcome {
    /// The visitor is inside; the updated session is returned
    CheckedIn(VisitSession),
    /// The facility hit its concurrent-visit ceiling; nothing was written
    FacilityFull,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clearance() -> AdmissionClearance {
        AdmissionClearance {
            visitor_id: VisitorId::new(),
            inmate_id: InmateId::new(),
            facility_id: FacilityId::new(),
        }
    }

    #[test]
    fn test_admitted_result_has_no_reasons() {
        let result = AdmissionResult::admitted(clearance(), vec!["relationship on file: Friend".into()]);

        assert!(result.admitted);
        assert!(result.blocking_reasons.is_empty());
        assert!(result.clearance.is_some());
        assert_eq!(result.advisories.len(), 1);
    }

    #[test]
    fn test_denied_result_carries_reasons() {
        let result = AdmissionResult::denied_for(BlockingReason::policy("restriction in force"));

        assert!(!result.admitted);
        assert!(result.clearance.is_none());
        assert_eq!(result.blocking_reasons.len(), 1);
        assert_eq!(result.blocking_reasons[0].cause, BlockingCause::PolicyDenied);
    }

    #[test]
    fn test_reason_display_names_cause() {
        let reason = BlockingReason::not_found("no visitor with national id 33333333");
        assert_eq!(reason.to_string(), "[Not Found] no visitor with national id 33333333");
    }

    #[test]
    fn test_result_serializes() {
        let result = AdmissionResult::denied_for(BlockingReason::policy("outside visiting hours"));
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("PolicyDenied"));

        let back: AdmissionResult = serde_json::from_str(&json).unwrap();
        assert!(!back.admitted);
    }
}
