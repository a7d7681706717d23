//! Visit Admission Engine
//!
//! A policy engine for visitor access to secured facilities. At the moment
//! a visitor presents themselves, the engine composes four evaluations —
//! authorization vigency, restrictions on file, the facility's visiting
//! schedule, and the concurrent-visit capacity gate — into one ordered
//! admission decision, and then governs the admitted visit through a
//! strict check-in/check-out state machine.
//!
//! # Overview
//!
//! - **Domain model**: visitors, inmates, facilities, authorizations,
//!   restrictions, and visit sessions, each enforcing its own invariants
//! - **Admission evaluation**: ordered, short-circuiting, with denials as
//!   ordinary values carrying human-readable reasons and advisories
//! - **Session lifecycle**: SCHEDULED → IN_PROGRESS → COMPLETED/CANCELLED,
//!   committed through versioned, capacity-guarded storage updates
//! - **Repositories**: narrow storage contracts with in-memory
//!   implementations for tests and the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use visitgate::admission::AdmissionEngine;
//! use visitgate::repository::memory::InMemoryStore;
//! use visitgate::roster::{RosterConfig, RosterGenerator};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let roster = RosterGenerator::seeded(42)
//!     .generate(&RosterConfig::default(), now)
//!     .unwrap();
//!
//! let store = InMemoryStore::new();
//! roster.install(&store).unwrap();
//!
//! let engine = AdmissionEngine::with_store(&store);
//! let result = engine
//!     .evaluate_admission(&roster.visitors[0].national_id, &roster.inmates[0].file_number, now)
//!     .unwrap();
//!
//! // Admitted or not, the outcome is a value with reasons, never an error
//! if !result.admitted {
//!     assert!(!result.blocking_reasons.is_empty());
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`types`]: identifiers, enums, audit timestamps
//! - [`people`]: visitor and inmate entities
//! - [`facility`]: facility entity, visiting schedule, capacity gate
//! - [`authorization`]: authorization entity and vigency evaluation
//! - [`restriction`]: restriction entity and the blocking matcher
//! - [`session`]: the visit session state machine
//! - [`repository`]: storage contracts and in-memory implementations
//! - [`admission`]: the orchestrated decision procedure and session surface
//! - [`roster`]: serializable datasets and the sample generator
//! - [`logging`]: subscriber setup for the binary
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod admission;
pub mod authorization;
pub mod error;
pub mod facility;
pub mod logging;
pub mod people;
pub mod repository;
pub mod restriction;
pub mod roster;
pub mod session;
pub mod types;

// Re-export the main call surface for convenience
pub use admission::{
    AdmissionClearance, AdmissionEngine, AdmissionResult, BlockingCause, BlockingReason,
    CheckInOutcome,
};
pub use authorization::Authorization;
pub use error::{EngineError, EngineResult};
pub use facility::{Facility, VisitingWindow};
pub use people::{HousingAssignment, Inmate, Visitor};
pub use restriction::{blocking_restrictions, Restriction, RestrictionScope};
pub use session::VisitSession;
