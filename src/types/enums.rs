//! Enumeration types for the visit admission engine
//!
//! This module contains the status and classification enums used throughout
//! the engine: visitor/inmate/authorization statuses, restriction and
//! relationship tags, visit session states, and the facility's own weekday
//! representation.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative status of a visitor record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitorStatus {
    /// Cleared to request admission
    Active,
    /// Temporarily barred from requesting admission
    Suspended,
    /// Record retired; the visitor no longer visits
    Inactive,
}

impl fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitorStatus::Active => write!(f, "Active"),
            VisitorStatus::Suspended => write!(f, "Suspended"),
            VisitorStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

impl FromStr for VisitorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(VisitorStatus::Active),
            "suspended" => Ok(VisitorStatus::Suspended),
            "inactive" => Ok(VisitorStatus::Inactive),
            _ => Err(format!("Unknown visitor status: {}", s)),
        }
    }
}

/// Custody status of an inmate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InmateStatus {
    /// In custody at the owning facility; may receive visits
    Active,
    /// Moved to another facility
    Transferred,
    /// Released from custody
    Discharged,
}

impl fmt::Display for InmateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InmateStatus::Active => write!(f, "Active"),
            InmateStatus::Transferred => write!(f, "Transferred"),
            InmateStatus::Discharged => write!(f, "Discharged"),
        }
    }
}

impl FromStr for InmateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(InmateStatus::Active),
            "transferred" => Ok(InmateStatus::Transferred),
            "discharged" => Ok(InmateStatus::Discharged),
            _ => Err(format!("Unknown inmate status: {}", s)),
        }
    }
}

/// Stored status of a visit authorization
///
/// Vigency is derived from this status plus the expiration date; the
/// `Expired` value only appears when an operator explicitly marks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    /// Grants visits while not expired by date
    Active,
    /// Paused; can be reactivated
    Suspended,
    /// Permanently withdrawn
    Revoked,
    /// Marked expired by an operator
    Expired,
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationStatus::Active => write!(f, "Active"),
            AuthorizationStatus::Suspended => write!(f, "Suspended"),
            AuthorizationStatus::Revoked => write!(f, "Revoked"),
            AuthorizationStatus::Expired => write!(f, "Expired"),
        }
    }
}

impl FromStr for AuthorizationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(AuthorizationStatus::Active),
            "suspended" => Ok(AuthorizationStatus::Suspended),
            "revoked" => Ok(AuthorizationStatus::Revoked),
            "expired" => Ok(AuthorizationStatus::Expired),
            _ => Err(format!("Unknown authorization status: {}", s)),
        }
    }
}

/// Declared relationship between a visitor and an inmate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    /// Parent or guardian
    Parent,
    /// Spouse or domestic partner
    Partner,
    /// Sibling
    Sibling,
    /// Adult child
    Child,
    /// Friend or acquaintance
    Friend,
    /// Attorney of record
    LegalCounsel,
    /// Religious counselor
    Clergy,
    /// Any other declared relationship
    Other,
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipKind::Parent => write!(f, "Parent"),
            RelationshipKind::Partner => write!(f, "Partner"),
            RelationshipKind::Sibling => write!(f, "Sibling"),
            RelationshipKind::Child => write!(f, "Child"),
            RelationshipKind::Friend => write!(f, "Friend"),
            RelationshipKind::LegalCounsel => write!(f, "Legal Counsel"),
            RelationshipKind::Clergy => write!(f, "Clergy"),
            RelationshipKind::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for RelationshipKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parent" => Ok(RelationshipKind::Parent),
            "partner" | "spouse" => Ok(RelationshipKind::Partner),
            "sibling" => Ok(RelationshipKind::Sibling),
            "child" => Ok(RelationshipKind::Child),
            "friend" => Ok(RelationshipKind::Friend),
            "legal counsel" | "legalcounsel" | "attorney" => Ok(RelationshipKind::LegalCounsel),
            "clergy" => Ok(RelationshipKind::Clergy),
            "other" => Ok(RelationshipKind::Other),
            _ => Err(format!("Unknown relationship kind: {}", s)),
        }
    }
}

/// Classification of a restriction against a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestrictionKind {
    /// Imposed after misconduct during a prior visit
    Behavioral,
    /// Ordered by a court
    CourtOrder,
    /// Imposed by facility administration
    Disciplinary,
    /// Raised by the security office
    Security,
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestrictionKind::Behavioral => write!(f, "Behavioral"),
            RestrictionKind::CourtOrder => write!(f, "Court Order"),
            RestrictionKind::Disciplinary => write!(f, "Disciplinary"),
            RestrictionKind::Security => write!(f, "Security"),
        }
    }
}

impl FromStr for RestrictionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "behavioral" => Ok(RestrictionKind::Behavioral),
            "court order" | "courtorder" => Ok(RestrictionKind::CourtOrder),
            "disciplinary" => Ok(RestrictionKind::Disciplinary),
            "security" => Ok(RestrictionKind::Security),
            _ => Err(format!("Unknown restriction kind: {}", s)),
        }
    }
}

/// Lifecycle state of a visit session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Created, visitor not yet inside
    Scheduled,
    /// Visitor checked in and currently inside
    InProgress,
    /// Visitor checked out; terminal
    Completed,
    /// Aborted before completion; terminal
    Cancelled,
}

impl SessionState {
    /// Check whether this state admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Completed | SessionState::Cancelled)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Scheduled => write!(f, "Scheduled"),
            SessionState::InProgress => write!(f, "In Progress"),
            SessionState::Completed => write!(f, "Completed"),
            SessionState::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for SessionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(SessionState::Scheduled),
            "in progress" | "inprogress" => Ok(SessionState::InProgress),
            "completed" => Ok(SessionState::Completed),
            "cancelled" | "canceled" => Ok(SessionState::Cancelled),
            _ => Err(format!("Unknown session state: {}", s)),
        }
    }
}

/// Day of week in the facility's own representation
///
/// Visiting schedules compare against this enum rather than a numeric
/// day-of-week, so there is no zero- vs one-based ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitDay {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl From<Weekday> for VisitDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => VisitDay::Monday,
            Weekday::Tue => VisitDay::Tuesday,
            Weekday::Wed => VisitDay::Wednesday,
            Weekday::Thu => VisitDay::Thursday,
            Weekday::Fri => VisitDay::Friday,
            Weekday::Sat => VisitDay::Saturday,
            Weekday::Sun => VisitDay::Sunday,
        }
    }
}

impl fmt::Display for VisitDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitDay::Monday => write!(f, "Monday"),
            VisitDay::Tuesday => write!(f, "Tuesday"),
            VisitDay::Wednesday => write!(f, "Wednesday"),
            VisitDay::Thursday => write!(f, "Thursday"),
            VisitDay::Friday => write!(f, "Friday"),
            VisitDay::Saturday => write!(f, "Saturday"),
            VisitDay::Sunday => write!(f, "Sunday"),
        }
    }
}

impl FromStr for VisitDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" | "mon" => Ok(VisitDay::Monday),
            "tuesday" | "tue" => Ok(VisitDay::Tuesday),
            "wednesday" | "wed" => Ok(VisitDay::Wednesday),
            "thursday" | "thu" => Ok(VisitDay::Thursday),
            "friday" | "fri" => Ok(VisitDay::Friday),
            "saturday" | "sat" => Ok(VisitDay::Saturday),
            "sunday" | "sun" => Ok(VisitDay::Sunday),
            _ => Err(format!("Unknown visit day: {}", s)),
        }
    }
}

/// Output format options for the gatehouse CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON for structured consumers
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
