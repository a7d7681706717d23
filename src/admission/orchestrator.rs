//! Admission orchestration
//!
//! The [`AdmissionEngine`] composes the evaluators into one ordered
//! decision procedure and exposes the session call surface. Each
//! evaluation is a pure pass over freshly-fetched entities and the given
//! instant; the engine keeps no state of its own between calls beyond the
//! injected repository handles.
//!
//! Evaluation order, each step short-circuiting on failure:
//!
//! 1. visitor exists and is Active
//! 2. visitor has no other visit currently in progress
//! 3. inmate exists and is available for visits
//! 4. no restriction in force (the one step that can report several
//!    reasons at once)
//! 5. an authorization exists for the pair and is vigent
//! 6. the facility receives visits at this instant
//! 7. the facility's concurrent-visit ceiling is not reached

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::{debug, info, instrument, warn};

use crate::admission::result::{
    AdmissionClearance, AdmissionResult, BlockingReason, CheckInOutcome,
};
use crate::error::{EngineError, EngineResult};
use crate::repository::{
    AuthorizationRepository, FacilityRepository, InmateRepository, RepositoryError,
    RestrictionRepository, VisitSessionRepository, VisitorRepository,
};
use crate::repository::memory::InMemoryStore;
use crate::restriction::blocking_restrictions;
use crate::session::VisitSession;
use crate::types::{OperatorId, SessionId, VisitDay};

/// Composes the admission evaluators and the session lifecycle
///
/// Repositories are chosen once at startup and injected here; nothing in
/// the engine switches storage modes at runtime.
pub struct AdmissionEngine {
    visitors: Arc<dyn VisitorRepository>,
    inmates: Arc<dyn InmateRepository>,
    authorizations: Arc<dyn AuthorizationRepository>,
    restrictions: Arc<dyn RestrictionRepository>,
    facilities: Arc<dyn FacilityRepository>,
    sessions: Arc<dyn VisitSessionRepository>,
}

impl fmt::Debug for AdmissionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdmissionEngine").finish_non_exhaustive()
    }
}

impl AdmissionEngine {
    /// Create an engine over the given repository collaborators.
    pub fn new(
        visitors: Arc<dyn VisitorRepository>,
        inmates: Arc<dyn InmateRepository>,
        authorizations: Arc<dyn AuthorizationRepository>,
        restrictions: Arc<dyn RestrictionRepository>,
        facilities: Arc<dyn FacilityRepository>,
        sessions: Arc<dyn VisitSessionRepository>,
    ) -> Self {
        Self { visitors, inmates, authorizations, restrictions, facilities, sessions }
    }

    /// Create an engine over an in-memory store bundle.
    pub fn with_store(store: &InMemoryStore) -> Self {
        Self::new(
            store.visitors.clone(),
            store.inmates.clone(),
            store.authorizations.clone(),
            store.restrictions.clone(),
            store.facilities.clone(),
            store.sessions.clone(),
        )
    }

    /// Decide whether a visitor may be admitted right now.
    ///
    /// Runs the ordered procedure above against `now`. Denials — including
    /// unknown keys — come back as an [`AdmissionResult`] value; only a
    /// collaborator failure is an `Err`, and must never be presented as a
    /// denial.
    #[instrument(skip(self), fields(national_id = %national_id, file_number = %file_number))]
    pub fn evaluate_admission(
        &self,
        national_id: &str,
        file_number: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<AdmissionResult> {
        let today = now.date_naive();

        // 1. Visitor exists and is cleared to visit
        let visitor = self
            .visitors
            .find_by_national_id(national_id)
            .map_err(|e| EngineError::infrastructure("resolving visitor", e))?;
        let Some(visitor) = visitor else {
            debug!("admission denied: unknown visitor");
            return Ok(AdmissionResult::denied_for(BlockingReason::not_found(format!(
                "no visitor registered with national id {}",
                national_id
            ))));
        };
        if !visitor.is_active() {
            debug!(status = %visitor.status, "admission denied: visitor not active");
            return Ok(AdmissionResult::denied_for(BlockingReason::policy(format!(
                "visitor {} is {} and not cleared to visit",
                visitor.full_name, visitor.status
            ))));
        }

        // 2. No other visit already in progress for this visitor
        let open = self
            .sessions
            .find_in_progress_for_visitor(visitor.id)
            .map_err(|e| EngineError::infrastructure("checking open visits", e))?;
        if let Some(open) = open {
            debug!(session = %open.id, "admission denied: visit already in progress");
            return Ok(AdmissionResult::denied_for(BlockingReason::policy(format!(
                "visitor already has a visit in progress (session {})",
                open.id
            ))));
        }

        // 3. Inmate exists and may receive visits
        let inmate = self
            .inmates
            .find_by_file_number(file_number)
            .map_err(|e| EngineError::infrastructure("resolving inmate", e))?;
        let Some(inmate) = inmate else {
            debug!("admission denied: unknown inmate");
            return Ok(AdmissionResult::denied_for(BlockingReason::not_found(format!(
                "no inmate on file with file number {}",
                file_number
            ))));
        };
        if !inmate.available_for_visits() {
            debug!(status = %inmate.status, "admission denied: inmate unavailable");
            return Ok(AdmissionResult::denied_for(BlockingReason::policy(format!(
                "inmate {} is {} and cannot receive visits",
                inmate.full_name, inmate.status
            ))));
        }

        // 4. Restrictions in force — every match becomes its own reason
        let on_file = self
            .restrictions
            .find_applicable(visitor.id, inmate.id, today)
            .map_err(|e| EngineError::infrastructure("fetching restrictions", e))?;
        let hits = blocking_restrictions(&on_file, inmate.id, today);
        if !hits.is_empty() {
            debug!(count = hits.len(), "admission denied: restrictions in force");
            let reasons =
                hits.iter().map(|r| BlockingReason::policy(r.summary())).collect();
            return Ok(AdmissionResult::denied(reasons, Vec::new()));
        }

        // 5. Authorization exists and is vigent
        let authorization = self
            .authorizations
            .find_by_pair(visitor.id, inmate.id)
            .map_err(|e| EngineError::infrastructure("resolving authorization", e))?;
        let Some(authorization) = authorization else {
            debug!("admission denied: no authorization for pair");
            return Ok(AdmissionResult::denied_for(BlockingReason::not_found(
                "no authorization on file for this visitor and inmate",
            )));
        };
        if !authorization.is_vigent(today) {
            debug!(status = %authorization.status, "admission denied: authorization not vigent");
            let mut advisories = Vec::new();
            if let (true, Some(expired_on)) =
                (authorization.is_expired(today), authorization.expires_on)
            {
                advisories.push(format!("authorization expired on {}", expired_on));
            }
            return Ok(AdmissionResult::denied(
                vec![BlockingReason::policy(format!(
                    "authorization does not currently grant visits (status {})",
                    authorization.status
                ))],
                advisories,
            ));
        }

        // 6. Facility schedule
        let facility = self
            .facilities
            .find_by_id(inmate.facility_id)
            .map_err(|e| EngineError::infrastructure("resolving facility", e))?;
        let Some(facility) = facility else {
            warn!(facility = %inmate.facility_id, "admission denied: facility not on file");
            return Ok(AdmissionResult::denied_for(BlockingReason::not_found(format!(
                "facility {} is not on file",
                inmate.facility_id
            ))));
        };
        if !facility.permits_visit_at(now) {
            debug!("admission denied: outside facility schedule");
            return Ok(AdmissionResult::denied_for(schedule_denial(&facility, now)));
        }

        // 7. Capacity gate against the live in-progress count
        let occupancy = self
            .sessions
            .count_in_progress(facility.id)
            .map_err(|e| EngineError::infrastructure("counting visits in progress", e))?;
        if facility.capacity_reached(occupancy) {
            let max = facility.max_concurrent_visits.unwrap_or(0);
            debug!(occupancy, max, "admission denied: facility at capacity");
            return Ok(AdmissionResult::denied_for(BlockingReason::policy(format!(
                "facility {} is at capacity ({}/{})",
                facility.name, occupancy, max
            ))));
        }

        let mut advisories = Vec::new();
        if facility.near_capacity(occupancy) {
            let max = facility.max_concurrent_visits.unwrap_or(0);
            let percent = facility.occupancy_percent(occupancy).unwrap_or(0);
            advisories.push(format!(
                "facility {} nearing capacity: {}/{} ({}%)",
                facility.name, occupancy, max, percent
            ));
        }
        advisories.push(format!("relationship on file: {}", authorization.relationship));
        advisories.push(format!("inmate located in {}", inmate.housing));

        info!(visitor = %visitor.id, inmate = %inmate.id, "admission granted");
        Ok(AdmissionResult::admitted(
            AdmissionClearance {
                visitor_id: visitor.id,
                inmate_id: inmate.id,
                facility_id: facility.id,
            },
            advisories,
        ))
    }

    /// Persist a new scheduled session for a cleared admission.
    #[instrument(skip(self, clearance))]
    pub fn schedule_visit(
        &self,
        clearance: &AdmissionClearance,
        visit_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> EngineResult<VisitSession> {
        let session = VisitSession::new(
            clearance.visitor_id,
            clearance.inmate_id,
            clearance.facility_id,
            visit_date,
            now,
        );
        self.sessions
            .save(&session)
            .map_err(|e| EngineError::infrastructure("saving session", e))?;

        info!(session = %session.id, "visit scheduled");
        Ok(session)
    }

    /// Check a visitor in.
    ///
    /// Runs the state machine and commits through the storage layer's
    /// capacity-guarded conditional update, so the ceiling holds even when
    /// operators race. A full facility comes back as
    /// [`CheckInOutcome::FacilityFull`] with nothing written.
    #[instrument(skip(self))]
    pub fn check_in(
        &self,
        session_id: SessionId,
        operator: OperatorId,
        now: DateTime<Utc>,
    ) -> EngineResult<CheckInOutcome> {
        let mut session = self.load_session(session_id)?;

        let limit = self
            .facilities
            .find_by_id(session.facility_id)
            .map_err(|e| EngineError::infrastructure("resolving facility", e))?
            .and_then(|facility| facility.max_concurrent_visits);

        session.check_in(operator, now)?;

        let admitted = self
            .sessions
            .check_in_guarded(&session, limit)
            .map_err(|e| concurrent_or_infrastructure("committing check-in", e))?;

        if admitted {
            info!(session = %session.id, "visitor checked in");
            Ok(CheckInOutcome::CheckedIn(session))
        } else {
            info!(session = %session.id, "check-in refused: facility full");
            Ok(CheckInOutcome::FacilityFull)
        }
    }

    /// Check a visitor out, completing the session.
    #[instrument(skip(self))]
    pub fn check_out(
        &self,
        session_id: SessionId,
        operator: OperatorId,
        now: DateTime<Utc>,
    ) -> EngineResult<VisitSession> {
        let mut session = self.load_session(session_id)?;
        session.check_out(operator, now)?;
        self.sessions
            .update(&session)
            .map_err(|e| concurrent_or_infrastructure("committing check-out", e))?;

        info!(session = %session.id, "visitor checked out");
        Ok(session)
    }

    /// Cancel a scheduled or in-progress session.
    #[instrument(skip(self, reason))]
    pub fn cancel(
        &self,
        session_id: SessionId,
        reason: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<VisitSession> {
        let mut session = self.load_session(session_id)?;
        session.cancel(reason, now)?;
        self.sessions
            .update(&session)
            .map_err(|e| concurrent_or_infrastructure("committing cancellation", e))?;

        info!(session = %session.id, "visit cancelled");
        Ok(session)
    }

    fn load_session(&self, session_id: SessionId) -> EngineResult<VisitSession> {
        self.sessions
            .find_by_id(session_id)
            .map_err(|e| EngineError::infrastructure("loading session", e))?
            .ok_or_else(|| EngineError::validation(format!("no session {}", session_id)))
    }
}

fn schedule_denial(facility: &crate::facility::Facility, now: DateTime<Utc>) -> BlockingReason {
    if !facility.active {
        return BlockingReason::policy(format!("facility {} is closed to visitors", facility.name));
    }
    let Some(window) = &facility.visiting_window else {
        return BlockingReason::policy(format!(
            "facility {} has no visiting schedule configured",
            facility.name
        ));
    };

    let day = VisitDay::from(now.date_naive().weekday());
    BlockingReason::policy(format!(
        "outside visiting hours at {}: requested {} {}, window is {} on enabled days",
        facility.name,
        day,
        now.time().format("%H:%M"),
        window
    ))
}

fn concurrent_or_infrastructure(context: &str, error: RepositoryError) -> EngineError {
    match error {
        RepositoryError::Stale(detail) => {
            EngineError::state(format!("session changed concurrently, reload and retry: {}", detail))
        }
        other => EngineError::infrastructure(context, other),
    }
}
