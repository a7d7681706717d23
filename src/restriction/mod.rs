//! Visitor restrictions and matching
//!
//! This module contains the Restriction entity (a behavioral or legal ban
//! against a visitor), its lifecycle, and the matcher that selects every
//! restriction blocking a given visit.
//!
//! # Overview
//!
//! - **Restriction**: ban with start/end dates, active flag, and a scope
//!   that carries the inmate reference only when the ban is specific
//! - **Matcher**: returns all active, applicable restrictions for a
//!   (visitor, inmate) pair on a given day
//!
//! # Usage Example
//!
//! ```rust
//! use visitgate::restriction::{blocking_restrictions, Restriction, RestrictionScope};
//! use visitgate::types::{InmateId, RestrictionKind, VisitorId};
//! use chrono::{NaiveDate, Utc};
//!
//! let ban = Restriction::new(
//!     VisitorId::new(),
//!     RestrictionKind::CourtOrder,
//!     "no-contact order",
//!     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
//!     None,
//!     RestrictionScope::AllInmates,
//!     Utc::now(),
//! );
//!
//! let on_file = vec![ban];
//! let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! let hits = blocking_restrictions(&on_file, InmateId::new(), today);
//! assert_eq!(hits.len(), 1);
//! ```

pub mod matcher;
#[allow(clippy::module_inception)]
pub mod restriction;

// Re-export all public types for convenience
pub use matcher::blocking_restrictions;
pub use restriction::{Restriction, RestrictionScope};
