//! Facility configuration and admission-time facility checks
//!
//! This module contains the Facility entity together with the two
//! facility-scoped policy checks: the visiting-schedule evaluation and the
//! concurrent-visit capacity gate.
//!
//! # Overview
//!
//! - **Facility**: schedule, capacity ceiling, and active flag
//! - **VisitingWindow**: inclusive daily time-of-day window
//! - **Schedule evaluation**: `permits_visit_at` fails closed
//! - **Capacity gate**: `capacity_reached` blocks, `near_capacity` advises
//!
//! # Usage Example
//!
//! ```rust
//! use visitgate::facility::{Facility, VisitingWindow};
//! use visitgate::types::VisitDay;
//! use chrono::{NaiveTime, Utc};
//!
//! let window = VisitingWindow::new(
//!     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
//! ).unwrap();
//!
//! let facility = Facility::new("North Unit", Utc::now())
//!     .with_schedule([VisitDay::Saturday, VisitDay::Sunday], window)
//!     .with_capacity(5);
//!
//! assert!(facility.near_capacity(4));
//! assert!(!facility.capacity_reached(4));
//! ```

pub mod capacity;
#[allow(clippy::module_inception)]
pub mod facility;
pub mod schedule;

// Re-export all public types for convenience
pub use capacity::NEAR_CAPACITY_PERCENT;
pub use facility::Facility;
pub use schedule::VisitingWindow;
