//! Admission decision procedure and session call surface
//!
//! This module contains the engine's two public call surfaces: the ordered
//! admission evaluation and the visit session lifecycle operations, plus
//! the value types those surfaces return.
//!
//! # Overview
//!
//! - **AdmissionEngine**: composes the evaluators in a fixed order over
//!   injected repositories
//! - **AdmissionResult**: admitted flag, blocking reasons (not-found vs
//!   policy), advisories, and the clearance handed to `schedule_visit`
//! - **CheckInOutcome**: a check-in can still find the facility full at
//!   commit time
//!
//! # Usage Example
//!
//! ```rust
//! use visitgate::admission::AdmissionEngine;
//! use visitgate::repository::memory::InMemoryStore;
//! use chrono::Utc;
//!
//! let store = InMemoryStore::new();
//! let engine = AdmissionEngine::with_store(&store);
//!
//! // Nothing on file yet: denied, not an error
//! let result = engine.evaluate_admission("33333333", "1002", Utc::now()).unwrap();
//! assert!(!result.admitted);
//! assert!(!result.blocking_reasons.is_empty());
//! ```

pub mod orchestrator;
pub mod result;

// Re-export all public types for convenience
pub use orchestrator::AdmissionEngine;
pub use result::{
    AdmissionClearance, AdmissionResult, BlockingCause, BlockingReason, CheckInOutcome,
};
