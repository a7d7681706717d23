//! Visit session lifecycle
//!
//! One VisitSession records one physical visit from check-in to check-out.
//! Its state machine is strict: SCHEDULED → IN_PROGRESS → COMPLETED, with
//! CANCELLED reachable from the two non-terminal states. Terminal states
//! are permanent — sessions are never deleted, only transitioned. Every
//! successful transition bumps the version counter the storage layer uses
//! to reject concurrent stale writes.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::types::{AuditInfo, FacilityId, InmateId, OperatorId, SessionId, SessionState, VisitorId};

/// One check-in-to-check-out visit occurrence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitSession {
    /// Unique identifier for the session
    pub id: SessionId,
    /// The visiting person
    pub visitor_id: VisitorId,
    /// The inmate being visited
    pub inmate_id: InmateId,
    /// Facility where the visit takes place
    pub facility_id: FacilityId,
    /// Calendar day of the visit
    pub visit_date: NaiveDate,
    /// When the visitor entered; stamped by check-in
    pub checked_in_at: Option<DateTime<Utc>>,
    /// When the visitor left; stamped by check-out (or by cancel, to close
    /// out partial occupancy)
    pub checked_out_at: Option<DateTime<Utc>>,
    /// Lifecycle state
    pub state: SessionState,
    /// Operator who performed the check-in
    pub check_in_operator: Option<OperatorId>,
    /// Operator who performed the check-out
    pub check_out_operator: Option<OperatorId>,
    /// Free-text notes; cancellation reasons are appended here
    pub notes: String,
    /// Optimistic-concurrency counter, bumped on every transition
    pub version: u64,
    /// Audit timestamps
    pub audit: AuditInfo,
}

impl VisitSession {
    /// Schedule a new visit.
    pub fn new(
        visitor_id: VisitorId,
        inmate_id: InmateId,
        facility_id: FacilityId,
        visit_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            visitor_id,
            inmate_id,
            facility_id,
            visit_date,
            checked_in_at: None,
            checked_out_at: None,
            state: SessionState::Scheduled,
            check_in_operator: None,
            check_out_operator: None,
            notes: String::new(),
            version: 0,
            audit: AuditInfo::new(now),
        }
    }

    /// Check the visitor in: SCHEDULED → IN_PROGRESS.
    ///
    /// Stamps the check-in time and the performing operator. Any other
    /// starting state is a state error.
    pub fn check_in(&mut self, operator: OperatorId, now: DateTime<Utc>) -> EngineResult<()> {
        if self.state != SessionState::Scheduled {
            return Err(EngineError::state(format!(
                "cannot check in a session in state {}",
                self.state
            )));
        }

        self.state = SessionState::InProgress;
        self.checked_in_at = Some(now);
        self.check_in_operator = Some(operator);
        self.bump(now);
        Ok(())
    }

    /// Check the visitor out: IN_PROGRESS → COMPLETED.
    ///
    /// Requires an existing check-in time; stamps the check-out time and
    /// operator. Any other starting state is a state error.
    pub fn check_out(&mut self, operator: OperatorId, now: DateTime<Utc>) -> EngineResult<()> {
        if self.state != SessionState::InProgress {
            return Err(EngineError::state(format!(
                "cannot check out a session in state {}",
                self.state
            )));
        }
        if self.checked_in_at.is_none() {
            return Err(EngineError::state("cannot check out a session that was never checked in"));
        }

        self.state = SessionState::Completed;
        self.checked_out_at = Some(now);
        self.check_out_operator = Some(operator);
        self.bump(now);
        Ok(())
    }

    /// Cancel the visit: SCHEDULED or IN_PROGRESS → CANCELLED.
    ///
    /// Requires a non-empty reason, recorded in the notes. When the visitor
    /// was already inside (check-in stamped, no check-out), the check-out
    /// time is stamped as a side effect so the session stops counting
    /// toward facility occupancy. Terminal states are a state error.
    pub fn cancel(&mut self, reason: &str, now: DateTime<Utc>) -> EngineResult<()> {
        if reason.trim().is_empty() {
            return Err(EngineError::validation("cancellation reason is required"));
        }
        if self.state.is_terminal() {
            return Err(EngineError::state(format!(
                "cannot cancel a session in state {}",
                self.state
            )));
        }

        if self.checked_in_at.is_some() && self.checked_out_at.is_none() {
            self.checked_out_at = Some(now);
        }

        self.state = SessionState::Cancelled;
        if !self.notes.is_empty() {
            self.notes.push_str("; ");
        }
        self.notes.push_str("cancelled: ");
        self.notes.push_str(reason.trim());
        self.bump(now);
        Ok(())
    }

    /// Time spent inside, defined only once both timestamps exist.
    pub fn duration(&self) -> Option<Duration> {
        match (self.checked_in_at, self.checked_out_at) {
            (Some(entered), Some(left)) => Some(left - entered),
            _ => None,
        }
    }

    /// Check whether the session currently counts toward facility occupancy.
    pub fn is_in_progress(&self) -> bool {
        self.state == SessionState::InProgress
    }

    fn bump(&mut self, now: DateTime<Utc>) {
        self.version += 1;
        self.audit.touch(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled_session() -> VisitSession {
        VisitSession::new(
            VisitorId::new(),
            InmateId::new(),
            FacilityId::new(),
            Utc::now().date_naive(),
            Utc::now(),
        )
    }

    #[test]
    fn test_new_session_is_scheduled_unstamped() {
        let session = scheduled_session();

        assert_eq!(session.state, SessionState::Scheduled);
        assert!(session.checked_in_at.is_none());
        assert!(session.checked_out_at.is_none());
        assert!(session.check_in_operator.is_none());
        assert_eq!(session.version, 0);
        assert!(session.duration().is_none());
    }

    #[test]
    fn test_check_in_stamps_time_and_operator() {
        let mut session = scheduled_session();
        let operator = OperatorId::new();
        let now = Utc::now();

        session.check_in(operator, now).unwrap();

        assert_eq!(session.state, SessionState::InProgress);
        assert_eq!(session.checked_in_at, Some(now));
        assert_eq!(session.check_in_operator, Some(operator));
        assert_eq!(session.version, 1);
        assert!(session.is_in_progress());
    }

    #[test]
    fn test_check_in_fails_from_any_other_state() {
        let mut in_progress = scheduled_session();
        in_progress.check_in(OperatorId::new(), Utc::now()).unwrap();
        let result = in_progress.check_in(OperatorId::new(), Utc::now());
        assert!(matches!(result, Err(EngineError::State(_))));

        let mut cancelled = scheduled_session();
        cancelled.cancel("visitor left", Utc::now()).unwrap();
        assert!(cancelled.check_in(OperatorId::new(), Utc::now()).is_err());
    }

    #[test]
    fn test_check_out_completes_and_computes_duration() {
        let mut session = scheduled_session();
        let entered = Utc::now();
        session.check_in(OperatorId::new(), entered).unwrap();

        let operator = OperatorId::new();
        let left = entered + Duration::minutes(45);
        session.check_out(operator, left).unwrap();

        assert_eq!(session.state, SessionState::Completed);
        assert_eq!(session.checked_out_at, Some(left));
        assert_eq!(session.check_out_operator, Some(operator));
        assert_eq!(session.duration(), Some(Duration::minutes(45)));
        assert_eq!(session.version, 2);
    }

    #[test]
    fn test_check_out_fails_from_scheduled() {
        let mut session = scheduled_session();
        let result = session.check_out(OperatorId::new(), Utc::now());
        assert!(matches!(result, Err(EngineError::State(_))));
    }

    #[test]
    fn test_check_out_fails_from_terminal_states() {
        let mut completed = scheduled_session();
        completed.check_in(OperatorId::new(), Utc::now()).unwrap();
        completed.check_out(OperatorId::new(), Utc::now()).unwrap();
        assert!(completed.check_out(OperatorId::new(), Utc::now()).is_err());

        let mut cancelled = scheduled_session();
        cancelled.cancel("no-show", Utc::now()).unwrap();
        assert!(cancelled.check_out(OperatorId::new(), Utc::now()).is_err());
    }

    #[test]
    fn test_cancel_requires_reason() {
        let mut session = scheduled_session();

        let result = session.cancel("   ", Utc::now());
        assert!(matches!(result, Err(EngineError::Validation(_))));
        assert_eq!(session.state, SessionState::Scheduled);
    }

    #[test]
    fn test_cancel_from_scheduled_leaves_no_stamps() {
        let mut session = scheduled_session();
        session.cancel("visitor did not arrive", Utc::now()).unwrap();

        assert_eq!(session.state, SessionState::Cancelled);
        assert!(session.checked_in_at.is_none());
        assert!(session.checked_out_at.is_none());
        assert!(session.notes.contains("visitor did not arrive"));
    }

    #[test]
    fn test_cancel_mid_visit_stamps_check_out() {
        let mut session = scheduled_session();
        let entered = Utc::now();
        session.check_in(OperatorId::new(), entered).unwrap();

        let aborted = entered + Duration::minutes(10);
        session.cancel("emergency lockdown", aborted).unwrap();

        assert_eq!(session.state, SessionState::Cancelled);
        assert_eq!(session.checked_out_at, Some(aborted));
        assert_eq!(session.duration(), Some(Duration::minutes(10)));
        assert!(session.check_out_operator.is_none());
    }

    #[test]
    fn test_cancel_fails_from_terminal_states() {
        let mut session = scheduled_session();
        session.check_in(OperatorId::new(), Utc::now()).unwrap();
        session.check_out(OperatorId::new(), Utc::now()).unwrap();

        let result = session.cancel("too late", Utc::now());
        assert!(matches!(result, Err(EngineError::State(_))));

        let mut cancelled = scheduled_session();
        cancelled.cancel("first", Utc::now()).unwrap();
        assert!(cancelled.cancel("second", Utc::now()).is_err());
    }

    #[test]
    fn test_every_transition_bumps_version() {
        let mut session = scheduled_session();
        assert_eq!(session.version, 0);

        session.check_in(OperatorId::new(), Utc::now()).unwrap();
        assert_eq!(session.version, 1);

        session.cancel("lockdown", Utc::now()).unwrap();
        assert_eq!(session.version, 2);
    }
}
