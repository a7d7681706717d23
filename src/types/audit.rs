//! Shared audit timestamps
//!
//! Every entity embeds an [`AuditInfo`] value instead of inheriting from a
//! common base record, so entities stay independent while carrying the same
//! created/updated bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and last-update timestamps embedded in each entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    /// When the entity was created
    pub created_at: DateTime<Utc>,
    /// When the entity was last mutated
    pub updated_at: DateTime<Utc>,
}

impl AuditInfo {
    /// Create audit info for a freshly-created entity.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { created_at: now, updated_at: now }
    }

    /// Record a mutation at the given instant.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
