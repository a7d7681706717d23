//! Core types and identifiers
//!
//! This module contains the identifier newtypes, status and classification
//! enums, and the shared audit timestamps used by every entity.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-backed newtypes with entity prefixes
//! - **Enums**: statuses, tags, session states, and the facility weekday type
//! - **AuditInfo**: created/updated timestamps embedded per entity
//!
//! # Usage Example
//!
//! ```rust
//! use visitgate::types::*;
//!
//! let visitor = VisitorId::new();
//! assert!(visitor.to_string().starts_with("VIS_"));
//!
//! let state = SessionState::Scheduled;
//! assert!(!state.is_terminal());
//! ```

pub mod audit;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use audit::AuditInfo;
pub use enums::{
    AuthorizationStatus, InmateStatus, OutputFormat, RelationshipKind, RestrictionKind,
    SessionState, VisitDay, VisitorStatus,
};
pub use identifiers::{
    AuthorizationId, FacilityId, InmateId, OperatorId, RestrictionId, SessionId, VisitorId,
};
