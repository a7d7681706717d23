//! Restriction entity and lifecycle
//!
//! A restriction is a ban against a visitor, either across the board or
//! toward one specific inmate. The scope carries the inmate reference only
//! in the specific case, so an all-inmates ban can never point at anyone.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::types::{AuditInfo, InmateId, RestrictionId, RestrictionKind, VisitorId};

/// Who a restriction blocks the visitor from visiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestrictionScope {
    /// The visitor may not visit anyone
    AllInmates,
    /// The visitor may not visit this one inmate
    SpecificInmate(InmateId),
}

/// A behavioral or legal ban against a visitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restriction {
    /// Unique identifier for the restriction
    pub id: RestrictionId,
    /// The visitor the ban applies to
    pub visitor_id: VisitorId,
    /// Classification of the ban
    pub kind: RestrictionKind,
    /// Free-text motive, extended when the restriction is lifted
    pub reason: String,
    /// First day the ban is in force
    pub starts_on: NaiveDate,
    /// Last day the ban is in force; `None` means indefinite
    pub ends_on: Option<NaiveDate>,
    /// Whether the ban covers all inmates or one specific inmate
    pub scope: RestrictionScope,
    /// False once lifted; a lifted restriction never comes back
    pub active: bool,
    /// Audit timestamps
    pub audit: AuditInfo,
}

impl Restriction {
    /// Impose a new restriction, active immediately.
    pub fn new(
        visitor_id: VisitorId,
        kind: RestrictionKind,
        reason: impl Into<String>,
        starts_on: NaiveDate,
        ends_on: Option<NaiveDate>,
        scope: RestrictionScope,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RestrictionId::new(),
            visitor_id,
            kind,
            reason: reason.into(),
            starts_on,
            ends_on,
            scope,
            active: true,
            audit: AuditInfo::new(now),
        }
    }

    /// Check whether the ban is in force on the given day.
    ///
    /// In force iff the active flag is set, the start date is not after
    /// `today`, and there is either no end date or the end date is not
    /// before `today`.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.active
            && self.starts_on <= today
            && self.ends_on.map_or(true, |ends| ends >= today)
    }

    /// Check whether the ban covers a visit to the given inmate.
    pub fn applies_to(&self, inmate_id: InmateId) -> bool {
        match self.scope {
            RestrictionScope::AllInmates => true,
            RestrictionScope::SpecificInmate(target) => target == inmate_id,
        }
    }

    /// Check whether the ban blocks a visit to the given inmate today.
    pub fn blocks(&self, inmate_id: InmateId, today: NaiveDate) -> bool {
        self.is_active_on(today) && self.applies_to(inmate_id)
    }

    /// Lift the restriction: clears the active flag, stamps `today` as the
    /// end date, and appends the lift reason to the motive text.
    ///
    /// Permanent — lifting an already-lifted restriction is a state error;
    /// a new restriction must be created instead.
    pub fn lift(&mut self, reason: &str, today: NaiveDate, now: DateTime<Utc>) -> EngineResult<()> {
        if !self.active {
            return Err(EngineError::state("restriction is already lifted"));
        }

        self.active = false;
        self.ends_on = Some(today);
        if !reason.is_empty() {
            self.reason.push_str(" / lifted: ");
            self.reason.push_str(reason);
        }
        self.audit.touch(now);
        Ok(())
    }

    /// Move the end date of a still-active restriction.
    ///
    /// `None` makes the ban indefinite. Fails on a lifted restriction and
    /// on an end date before the start date.
    pub fn extend(&mut self, new_end: Option<NaiveDate>, now: DateTime<Utc>) -> EngineResult<()> {
        if !self.active {
            return Err(EngineError::state("cannot extend a lifted restriction"));
        }
        if let Some(end) = new_end {
            if end < self.starts_on {
                return Err(EngineError::validation(format!(
                    "restriction cannot end ({}) before it starts ({})",
                    end, self.starts_on
                )));
            }
        }

        self.ends_on = new_end;
        self.audit.touch(now);
        Ok(())
    }

    /// One-line description naming the ban's type and motive, used in
    /// admission denial reasons.
    pub fn summary(&self) -> String {
        format!("{} restriction: {}", self.kind, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_ended_restriction() -> Restriction {
        Restriction::new(
            VisitorId::new(),
            RestrictionKind::Behavioral,
            "altercation during visit",
            date(2026, 1, 1),
            None,
            RestrictionScope::AllInmates,
            Utc::now(),
        )
    }

    #[test]
    fn test_active_window_bounds() {
        let mut restriction = open_ended_restriction();
        restriction.ends_on = Some(date(2026, 8, 31));

        assert!(!restriction.is_active_on(date(2025, 12, 31)));
        assert!(restriction.is_active_on(date(2026, 1, 1)));
        assert!(restriction.is_active_on(date(2026, 8, 31)));
        assert!(!restriction.is_active_on(date(2026, 9, 1)));
    }

    #[test]
    fn test_indefinite_restriction_never_lapses() {
        let restriction = open_ended_restriction();
        assert!(restriction.is_active_on(date(2099, 12, 31)));
    }

    #[test]
    fn test_scope_all_inmates_applies_to_everyone() {
        let restriction = open_ended_restriction();
        assert!(restriction.applies_to(InmateId::new()));
        assert!(restriction.applies_to(InmateId::new()));
    }

    #[test]
    fn test_scope_specific_inmate_applies_only_to_target() {
        let target = InmateId::new();
        let mut restriction = open_ended_restriction();
        restriction.scope = RestrictionScope::SpecificInmate(target);

        assert!(restriction.applies_to(target));
        assert!(!restriction.applies_to(InmateId::new()));
    }

    #[test]
    fn test_lift_stamps_end_date_and_motive() {
        let mut restriction = open_ended_restriction();
        let today = date(2026, 8, 6);

        restriction.lift("completed anger management", today, Utc::now()).unwrap();

        assert!(!restriction.active);
        assert_eq!(restriction.ends_on, Some(today));
        assert_eq!(
            restriction.reason,
            "altercation during visit / lifted: completed anger management"
        );
        assert!(!restriction.is_active_on(today));
    }

    #[test]
    fn test_lift_is_permanent() {
        let mut restriction = open_ended_restriction();
        restriction.lift("first lift", date(2026, 8, 6), Utc::now()).unwrap();

        let result = restriction.lift("second lift", date(2026, 8, 7), Utc::now());
        assert!(matches!(result, Err(EngineError::State(_))));
    }

    #[test]
    fn test_extend_moves_end_date_while_active() {
        let mut restriction = open_ended_restriction();

        restriction.extend(Some(date(2026, 12, 31)), Utc::now()).unwrap();
        assert_eq!(restriction.ends_on, Some(date(2026, 12, 31)));
        assert!(restriction.active);

        restriction.extend(None, Utc::now()).unwrap();
        assert_eq!(restriction.ends_on, None);
    }

    #[test]
    fn test_extend_rejects_end_before_start() {
        let mut restriction = open_ended_restriction();
        let result = restriction.extend(Some(date(2025, 12, 31)), Utc::now());
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_extend_fails_after_lift() {
        let mut restriction = open_ended_restriction();
        restriction.lift("done", date(2026, 8, 6), Utc::now()).unwrap();

        assert!(restriction.extend(Some(date(2026, 12, 31)), Utc::now()).is_err());
    }

    #[test]
    fn test_summary_names_kind_and_motive() {
        let restriction = open_ended_restriction();
        assert_eq!(restriction.summary(), "Behavioral restriction: altercation during visit");
    }
}
