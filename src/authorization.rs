//! Visit authorizations and vigency evaluation
//!
//! An authorization ties one visitor to one inmate (the pair is unique
//! system-wide, enforced by the storage layer). Whether it currently grants
//! visits — its *vigency* — is derived from the stored status **and** the
//! expiration date. The evaluator never auto-transitions the stored status:
//! an authorization can sit at status Active while already expired by date,
//! and `is_vigent` is the single source of truth for admission decisions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::types::{AuditInfo, AuthorizationId, AuthorizationStatus, InmateId, RelationshipKind, VisitorId};

/// Permission for one visitor to visit one inmate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorization {
    /// Unique identifier for the authorization
    pub id: AuthorizationId,
    /// The visitor granted access
    pub visitor_id: VisitorId,
    /// The inmate who may be visited
    pub inmate_id: InmateId,
    /// Declared relationship between the two
    pub relationship: RelationshipKind,
    /// Date the authorization was granted
    pub granted_on: NaiveDate,
    /// Expiration date; `None` means indefinite
    pub expires_on: Option<NaiveDate>,
    /// Stored lifecycle status
    pub status: AuthorizationStatus,
    /// Operator notes accumulated across lifecycle changes
    pub notes: String,
    /// Audit timestamps
    pub audit: AuditInfo,
}

impl Authorization {
    /// Grant a new authorization, active as of today.
    pub fn new(
        visitor_id: VisitorId,
        inmate_id: InmateId,
        relationship: RelationshipKind,
        expires_on: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AuthorizationId::new(),
            visitor_id,
            inmate_id,
            relationship,
            granted_on: now.date_naive(),
            expires_on,
            status: AuthorizationStatus::Active,
            notes: String::new(),
            audit: AuditInfo::new(now),
        }
    }

    /// Check whether the authorization currently grants visits.
    ///
    /// Vigent iff the stored status is Active **and** there is either no
    /// expiration date or the expiration date is not before `today`.
    pub fn is_vigent(&self, today: NaiveDate) -> bool {
        self.status == AuthorizationStatus::Active
            && self.expires_on.map_or(true, |expires| expires >= today)
    }

    /// Check whether the authorization is expired by date.
    ///
    /// Independent of the stored status: a status-Active authorization with
    /// yesterday's expiration date reports expired here and not-vigent
    /// above, while the stored status stays untouched.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on.map_or(false, |expires| expires < today)
    }

    /// Renew the authorization with a new expiration date (`None` makes it
    /// indefinite).
    ///
    /// Fails on a suspended authorization (reactivate first) and on a
    /// revoked one (a revocation is permanent; grant a new authorization
    /// instead). Otherwise the status returns to Active with the new date.
    pub fn renew(&mut self, new_expiration: Option<NaiveDate>, now: DateTime<Utc>) -> EngineResult<()> {
        match self.status {
            AuthorizationStatus::Suspended => Err(EngineError::state(
                "cannot renew a suspended authorization; reactivate it first",
            )),
            AuthorizationStatus::Revoked => Err(EngineError::state(
                "cannot renew a revoked authorization; grant a new one",
            )),
            _ => {
                self.status = AuthorizationStatus::Active;
                self.expires_on = new_expiration;
                self.audit.touch(now);
                Ok(())
            }
        }
    }

    /// Suspend the authorization, recording the reason in the notes.
    ///
    /// Fails on a revoked authorization.
    pub fn suspend(&mut self, reason: &str, now: DateTime<Utc>) -> EngineResult<()> {
        if self.status == AuthorizationStatus::Revoked {
            return Err(EngineError::state("cannot suspend a revoked authorization"));
        }

        self.status = AuthorizationStatus::Suspended;
        self.append_note(reason);
        self.audit.touch(now);
        Ok(())
    }

    /// Revoke the authorization permanently, recording the reason.
    ///
    /// Always legal; there is no way back from Revoked.
    pub fn revoke(&mut self, reason: &str, now: DateTime<Utc>) {
        self.status = AuthorizationStatus::Revoked;
        self.append_note(reason);
        self.audit.touch(now);
    }

    /// Reactivate a suspended authorization.
    ///
    /// Fails unless the status is Suspended, and fails while the
    /// authorization is expired by date (renew first).
    pub fn reactivate(&mut self, today: NaiveDate, now: DateTime<Utc>) -> EngineResult<()> {
        if self.status != AuthorizationStatus::Suspended {
            return Err(EngineError::state(format!(
                "only a suspended authorization can be reactivated (status is {})",
                self.status
            )));
        }
        if self.is_expired(today) {
            return Err(EngineError::state(
                "authorization is expired by date; renew it instead of reactivating",
            ));
        }

        self.status = AuthorizationStatus::Active;
        self.audit.touch(now);
        Ok(())
    }

    fn append_note(&mut self, note: &str) {
        if note.is_empty() {
            return;
        }
        if !self.notes.is_empty() {
            self.notes.push_str("; ");
        }
        self.notes.push_str(note);
    }
}
