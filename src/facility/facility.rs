//! Facility entity
//!
//! This module contains the Facility struct: the visiting schedule
//! configuration, the concurrent-visit ceiling, and the active flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::facility::schedule::VisitingWindow;
use crate::types::{AuditInfo, FacilityId, VisitDay};

/// A secured facility that receives visitors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    /// Unique identifier for the facility
    pub id: FacilityId,
    /// Human-readable name
    pub name: String,
    /// Weekdays on which visits are received
    pub visit_days: HashSet<VisitDay>,
    /// Daily visiting window; `None` means visits are not configured
    pub visiting_window: Option<VisitingWindow>,
    /// Ceiling on concurrent in-progress visits; unset or 0 = unlimited
    pub max_concurrent_visits: Option<u32>,
    /// Whether the facility currently receives visitors at all
    pub active: bool,
    /// Audit timestamps
    pub audit: AuditInfo,
}

impl Facility {
    /// Create a new active facility with no schedule configured.
    ///
    /// A facility without a visiting window denies every admission until a
    /// schedule is configured.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: FacilityId::new(),
            name: name.into(),
            visit_days: HashSet::new(),
            visiting_window: None,
            max_concurrent_visits: None,
            active: true,
            audit: AuditInfo::new(now),
        }
    }

    /// Configure the visiting schedule.
    pub fn with_schedule(
        mut self,
        days: impl IntoIterator<Item = VisitDay>,
        window: VisitingWindow,
    ) -> Self {
        self.visit_days = days.into_iter().collect();
        self.visiting_window = Some(window);
        self
    }

    /// Configure the concurrent-visit ceiling.
    pub fn with_capacity(mut self, max_concurrent_visits: u32) -> Self {
        self.max_concurrent_visits = Some(max_concurrent_visits);
        self
    }

    /// Check whether a weekday is an enabled visit day.
    pub fn receives_visits_on(&self, day: VisitDay) -> bool {
        self.visit_days.contains(&day)
    }

    /// Stop receiving visitors.
    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.active = false;
        self.audit.touch(now);
    }

    /// Resume receiving visitors.
    pub fn activate(&mut self, now: DateTime<Utc>) {
        self.active = true;
        self.audit.touch(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_new_facility_has_no_schedule() {
        let facility = Facility::new("North Unit", Utc::now());

        assert!(facility.active);
        assert!(facility.visiting_window.is_none());
        assert!(facility.visit_days.is_empty());
        assert!(facility.max_concurrent_visits.is_none());
    }

    #[test]
    fn test_with_schedule_sets_days_and_window() {
        let window = VisitingWindow::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        )
        .unwrap();

        let facility = Facility::new("North Unit", Utc::now())
            .with_schedule([VisitDay::Saturday, VisitDay::Sunday], window);

        assert!(facility.receives_visits_on(VisitDay::Saturday));
        assert!(facility.receives_visits_on(VisitDay::Sunday));
        assert!(!facility.receives_visits_on(VisitDay::Monday));
        assert!(facility.visiting_window.is_some());
    }

    #[test]
    fn test_activate_deactivate() {
        let mut facility = Facility::new("North Unit", Utc::now());

        facility.deactivate(Utc::now());
        assert!(!facility.active);

        facility.activate(Utc::now());
        assert!(facility.active);
    }
}
