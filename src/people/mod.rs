//! Visitor and inmate identity records
//!
//! This module contains the two person-shaped entities of the engine and
//! their single-entity invariants (no cross-entity lookups happen here).
//!
//! # Overview
//!
//! - **Visitor**: registered member of the public; adult-at-registration
//!   and national-id format enforced at construction
//! - **Inmate**: person in custody; only active custody admits visits
//!
//! # Usage Example
//!
//! ```rust
//! use visitgate::people::{HousingAssignment, Inmate, Visitor};
//! use chrono::{NaiveDate, Utc};
//!
//! let now = Utc::now();
//! let born = NaiveDate::from_ymd_opt(1985, 6, 15).unwrap();
//! let visitor = Visitor::new("33333333", "Ana Torres", born, now).unwrap();
//! assert!(visitor.is_active());
//!
//! let facility = visitgate::types::FacilityId::new();
//! let inmate = Inmate::new("1002", "Carlos Medina", HousingAssignment::new("B", 2), facility, now).unwrap();
//! assert!(inmate.available_for_visits());
//! ```

pub mod inmate;
pub mod visitor;

// Re-export all public types for convenience
pub use inmate::{HousingAssignment, Inmate};
pub use visitor::{Visitor, MINIMUM_VISITOR_AGE, NATIONAL_ID_MAX_DIGITS, NATIONAL_ID_MIN_DIGITS};
