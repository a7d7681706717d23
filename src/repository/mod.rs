//! Repository contracts for the engine's collaborators
//!
//! The core never talks to storage directly: every entity lookup and write
//! goes through one of the traits below, chosen once at startup and
//! injected into the engine. Implementations may be database-backed or
//! in-memory ([`memory`]); the core treats them as synchronous calls that
//! can fail with a [`RepositoryError`] at any point.
//!
//! Lookups return fully-hydrated entities — there is no lazy loading, so
//! the core never depends on incidental fetch behavior. Absence is an
//! `Ok(None)`, never an error: "not found" is an expected outcome for the
//! admission flow, while a `RepositoryError` always means "could not
//! determine".
//!
//! Two contracts carry concurrency obligations the storage layer must
//! honor rather than the application:
//!
//! - [`AuthorizationRepository::save`] enforces the (visitor, inmate) pair
//!   uniqueness, since two concurrent creation requests can both pass an
//!   application-level check.
//! - [`VisitSessionRepository::update`] rejects stale versions, and
//!   [`VisitSessionRepository::check_in_guarded`] performs the occupancy
//!   count and the IN_PROGRESS commit as one atomic step, closing the
//!   count-then-admit race on the capacity ceiling.

pub mod memory;

use chrono::NaiveDate;
use thiserror::Error;

use crate::authorization::Authorization;
use crate::facility::Facility;
use crate::people::{Inmate, Visitor};
use crate::restriction::Restriction;
use crate::session::VisitSession;
use crate::types::{FacilityId, InmateId, SessionId, VisitorId};

/// Failures surfaced by repository implementations
///
/// Always distinct from a policy outcome: a conflict or an outage must
/// never read as "access denied".
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A uniqueness constraint rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    /// An update referenced a record that does not exist.
    #[error("record not found: {0}")]
    Missing(String),

    /// An update carried a stale version and lost the race.
    #[error("stale write: {0}")]
    Stale(String),

    /// The backing store could not be reached or failed mid-call.
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage contract for visitor records.
pub trait VisitorRepository: Send + Sync {
    /// Look up a visitor by national id.
    fn find_by_national_id(&self, national_id: &str) -> RepositoryResult<Option<Visitor>>;

    /// Persist a new visitor; rejects a duplicate national id.
    fn save(&self, visitor: &Visitor) -> RepositoryResult<()>;

    /// Persist changes to an existing visitor.
    fn update(&self, visitor: &Visitor) -> RepositoryResult<()>;
}

/// Storage contract for inmate records.
pub trait InmateRepository: Send + Sync {
    /// Look up an inmate by facility file number.
    fn find_by_file_number(&self, file_number: &str) -> RepositoryResult<Option<Inmate>>;

    /// Persist a new inmate; rejects a duplicate file number.
    fn save(&self, inmate: &Inmate) -> RepositoryResult<()>;

    /// Persist changes to an existing inmate.
    fn update(&self, inmate: &Inmate) -> RepositoryResult<()>;
}

/// Storage contract for authorizations.
pub trait AuthorizationRepository: Send + Sync {
    /// Look up the authorization for a (visitor, inmate) pair.
    fn find_by_pair(
        &self,
        visitor_id: VisitorId,
        inmate_id: InmateId,
    ) -> RepositoryResult<Option<Authorization>>;

    /// Persist a new authorization.
    ///
    /// The storage layer, not the caller, enforces the pair uniqueness:
    /// a second authorization for the same (visitor, inmate) pair is a
    /// conflict even when two requests race.
    fn save(&self, authorization: &Authorization) -> RepositoryResult<()>;

    /// Persist changes to an existing authorization.
    fn update(&self, authorization: &Authorization) -> RepositoryResult<()>;
}

/// Storage contract for restrictions.
pub trait RestrictionRepository: Send + Sync {
    /// Fetch the restrictions on file for a visitor that could bear on a
    /// visit to the given inmate around `as_of`.
    ///
    /// Implementations may over-return (e.g. include a not-yet-started
    /// restriction); the matcher applies the authoritative active/date
    /// logic. They must never under-return a restriction that would block.
    fn find_applicable(
        &self,
        visitor_id: VisitorId,
        inmate_id: InmateId,
        as_of: NaiveDate,
    ) -> RepositoryResult<Vec<Restriction>>;

    /// Persist a new restriction.
    fn save(&self, restriction: &Restriction) -> RepositoryResult<()>;

    /// Persist changes to an existing restriction.
    fn update(&self, restriction: &Restriction) -> RepositoryResult<()>;
}

/// Storage contract for facilities.
pub trait FacilityRepository: Send + Sync {
    /// Look up a facility by id.
    fn find_by_id(&self, facility_id: FacilityId) -> RepositoryResult<Option<Facility>>;

    /// Persist a new facility.
    fn save(&self, facility: &Facility) -> RepositoryResult<()>;
}

/// Storage contract for visit sessions.
pub trait VisitSessionRepository: Send + Sync {
    /// Look up a session by id.
    fn find_by_id(&self, session_id: SessionId) -> RepositoryResult<Option<VisitSession>>;

    /// Number of sessions currently IN_PROGRESS at a facility.
    fn count_in_progress(&self, facility_id: FacilityId) -> RepositoryResult<u32>;

    /// The visitor's currently-open session, if any.
    fn find_in_progress_for_visitor(
        &self,
        visitor_id: VisitorId,
    ) -> RepositoryResult<Option<VisitSession>>;

    /// Persist a new session.
    fn save(&self, session: &VisitSession) -> RepositoryResult<()>;

    /// Persist a transition with an optimistic version check: the write is
    /// rejected as [`RepositoryError::Stale`] unless it carries exactly the
    /// stored version plus one.
    fn update(&self, session: &VisitSession) -> RepositoryResult<()>;

    /// Atomically commit a session's transition to IN_PROGRESS iff the
    /// facility's concurrent-visit ceiling (`limit`, unset or 0 =
    /// unlimited) has not been reached.
    ///
    /// The count and the conditional write happen as one step, so two
    /// racing check-ins cannot both observe a free slot. Returns `false`
    /// without writing when the facility is full.
    fn check_in_guarded(
        &self,
        session: &VisitSession,
        limit: Option<u32>,
    ) -> RepositoryResult<bool>;
}
