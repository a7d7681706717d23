//! Thread-safe in-memory repository implementations
//!
//! Used by the integration tests and the gatehouse CLI. Each store wraps a
//! `RwLock`-protected map; the session store additionally implements the
//! optimistic version check and the capacity-guarded check-in under a
//! single lock, which is what makes those operations atomic here.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::authorization::Authorization;
use crate::facility::Facility;
use crate::people::{Inmate, Visitor};
use crate::repository::{
    AuthorizationRepository, FacilityRepository, InmateRepository, RepositoryError,
    RepositoryResult, RestrictionRepository, VisitSessionRepository, VisitorRepository,
};
use crate::restriction::Restriction;
use crate::session::VisitSession;
use crate::types::{
    AuthorizationId, FacilityId, InmateId, RestrictionId, SessionId, SessionState, VisitorId,
};

/// In-memory visitor store keyed by id, unique on national id
#[derive(Debug, Default)]
pub struct InMemoryVisitors {
    records: RwLock<HashMap<VisitorId, Visitor>>,
}

impl InMemoryVisitors {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisitorRepository for InMemoryVisitors {
    fn find_by_national_id(&self, national_id: &str) -> RepositoryResult<Option<Visitor>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.values().find(|v| v.national_id == national_id).cloned())
    }

    fn save(&self, visitor: &Visitor) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        if records.values().any(|v| v.national_id == visitor.national_id) {
            return Err(RepositoryError::Conflict(format!(
                "visitor with national id {} already exists",
                visitor.national_id
            )));
        }
        records.insert(visitor.id, visitor.clone());
        Ok(())
    }

    fn update(&self, visitor: &Visitor) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        if !records.contains_key(&visitor.id) {
            return Err(RepositoryError::Missing(visitor.id.to_string()));
        }
        records.insert(visitor.id, visitor.clone());
        Ok(())
    }
}

/// In-memory inmate store keyed by id, unique on file number
#[derive(Debug, Default)]
pub struct InMemoryInmates {
    records: RwLock<HashMap<InmateId, Inmate>>,
}

impl InMemoryInmates {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl InmateRepository for InMemoryInmates {
    fn find_by_file_number(&self, file_number: &str) -> RepositoryResult<Option<Inmate>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.values().find(|i| i.file_number == file_number).cloned())
    }

    fn save(&self, inmate: &Inmate) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        if records.values().any(|i| i.file_number == inmate.file_number) {
            return Err(RepositoryError::Conflict(format!(
                "inmate with file number {} already exists",
                inmate.file_number
            )));
        }
        records.insert(inmate.id, inmate.clone());
        Ok(())
    }

    fn update(&self, inmate: &Inmate) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        if !records.contains_key(&inmate.id) {
            return Err(RepositoryError::Missing(inmate.id.to_string()));
        }
        records.insert(inmate.id, inmate.clone());
        Ok(())
    }
}

/// In-memory authorization store enforcing (visitor, inmate) uniqueness
#[derive(Debug, Default)]
pub struct InMemoryAuthorizations {
    records: RwLock<HashMap<AuthorizationId, Authorization>>,
}

impl InMemoryAuthorizations {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthorizationRepository for InMemoryAuthorizations {
    fn find_by_pair(
        &self,
        visitor_id: VisitorId,
        inmate_id: InmateId,
    ) -> RepositoryResult<Option<Authorization>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .values()
            .find(|a| a.visitor_id == visitor_id && a.inmate_id == inmate_id)
            .cloned())
    }

    fn save(&self, authorization: &Authorization) -> RepositoryResult<()> {
        // Uniqueness check and insert under one write lock: two racing
        // saves for the same pair cannot both pass.
        let mut records = self.records.write().map_err(poisoned)?;
        if records
            .values()
            .any(|a| a.visitor_id == authorization.visitor_id && a.inmate_id == authorization.inmate_id)
        {
            return Err(RepositoryError::Conflict(format!(
                "authorization for pair ({}, {}) already exists",
                authorization.visitor_id, authorization.inmate_id
            )));
        }
        records.insert(authorization.id, authorization.clone());
        Ok(())
    }

    fn update(&self, authorization: &Authorization) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        if !records.contains_key(&authorization.id) {
            return Err(RepositoryError::Missing(authorization.id.to_string()));
        }
        records.insert(authorization.id, authorization.clone());
        Ok(())
    }
}

/// In-memory restriction store
#[derive(Debug, Default)]
pub struct InMemoryRestrictions {
    records: RwLock<HashMap<RestrictionId, Restriction>>,
}

impl InMemoryRestrictions {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RestrictionRepository for InMemoryRestrictions {
    fn find_applicable(
        &self,
        visitor_id: VisitorId,
        inmate_id: InmateId,
        as_of: NaiveDate,
    ) -> RepositoryResult<Vec<Restriction>> {
        let records = self.records.read().map_err(poisoned)?;
        // Coarse pruning only; the matcher owns the authoritative
        // active/date logic and re-filters whatever comes back.
        Ok(records
            .values()
            .filter(|r| r.visitor_id == visitor_id)
            .filter(|r| r.applies_to(inmate_id))
            .filter(|r| r.ends_on.map_or(true, |ends| ends >= as_of))
            .cloned()
            .collect())
    }

    fn save(&self, restriction: &Restriction) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(restriction.id, restriction.clone());
        Ok(())
    }

    fn update(&self, restriction: &Restriction) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        if !records.contains_key(&restriction.id) {
            return Err(RepositoryError::Missing(restriction.id.to_string()));
        }
        records.insert(restriction.id, restriction.clone());
        Ok(())
    }
}

/// In-memory facility store
#[derive(Debug, Default)]
pub struct InMemoryFacilities {
    records: RwLock<HashMap<FacilityId, Facility>>,
}

impl InMemoryFacilities {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FacilityRepository for InMemoryFacilities {
    fn find_by_id(&self, facility_id: FacilityId) -> RepositoryResult<Option<Facility>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&facility_id).cloned())
    }

    fn save(&self, facility: &Facility) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(facility.id, facility.clone());
        Ok(())
    }
}

/// In-memory session store with versioned updates and guarded check-in
#[derive(Debug, Default)]
pub struct InMemorySessions {
    records: RwLock<HashMap<SessionId, VisitSession>>,
}

impl InMemorySessions {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn count_in_progress_locked(
        records: &HashMap<SessionId, VisitSession>,
        facility_id: FacilityId,
    ) -> u32 {
        records
            .values()
            .filter(|s| s.facility_id == facility_id && s.state == SessionState::InProgress)
            .count() as u32
    }

    fn versioned_insert(
        records: &mut HashMap<SessionId, VisitSession>,
        session: &VisitSession,
    ) -> RepositoryResult<()> {
        let stored = records
            .get(&session.id)
            .ok_or_else(|| RepositoryError::Missing(session.id.to_string()))?;

        if session.version != stored.version + 1 {
            return Err(RepositoryError::Stale(format!(
                "session {} is at version {}, write carried {}",
                session.id, stored.version, session.version
            )));
        }

        records.insert(session.id, session.clone());
        Ok(())
    }
}

impl VisitSessionRepository for InMemorySessions {
    fn find_by_id(&self, session_id: SessionId) -> RepositoryResult<Option<VisitSession>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&session_id).cloned())
    }

    fn count_in_progress(&self, facility_id: FacilityId) -> RepositoryResult<u32> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(Self::count_in_progress_locked(&records, facility_id))
    }

    fn find_in_progress_for_visitor(
        &self,
        visitor_id: VisitorId,
    ) -> RepositoryResult<Option<VisitSession>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .values()
            .find(|s| s.visitor_id == visitor_id && s.state == SessionState::InProgress)
            .cloned())
    }

    fn save(&self, session: &VisitSession) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        if records.contains_key(&session.id) {
            return Err(RepositoryError::Conflict(format!(
                "session {} already exists",
                session.id
            )));
        }
        records.insert(session.id, session.clone());
        Ok(())
    }

    fn update(&self, session: &VisitSession) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        Self::versioned_insert(&mut records, session)
    }

    fn check_in_guarded(
        &self,
        session: &VisitSession,
        limit: Option<u32>,
    ) -> RepositoryResult<bool> {
        // Count and conditional write under the same write lock: racing
        // check-ins serialize here instead of both seeing a free slot.
        let mut records = self.records.write().map_err(poisoned)?;

        if let Some(max) = limit {
            if max > 0 && Self::count_in_progress_locked(&records, session.facility_id) >= max {
                return Ok(false);
            }
        }

        Self::versioned_insert(&mut records, session)?;
        Ok(true)
    }
}

/// Bundle of all six in-memory stores, wired for injection into the engine
#[derive(Debug, Default)]
pub struct InMemoryStore {
    /// Visitor records
    pub visitors: Arc<InMemoryVisitors>,
    /// Inmate records
    pub inmates: Arc<InMemoryInmates>,
    /// Authorization records
    pub authorizations: Arc<InMemoryAuthorizations>,
    /// Restriction records
    pub restrictions: Arc<InMemoryRestrictions>,
    /// Facility records
    pub facilities: Arc<InMemoryFacilities>,
    /// Visit session records
    pub sessions: Arc<InMemorySessions>,
}

impl InMemoryStore {
    /// Create an empty store bundle.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> RepositoryError {
    RepositoryError::Unavailable("store lock poisoned".to_string())
}
