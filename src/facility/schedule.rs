//! Facility visiting schedule evaluation
//!
//! This module contains the visiting window type and the schedule check:
//! whether a point in time falls on an enabled visit day inside the
//! facility's configured window. The check fails closed — an inactive
//! facility or a missing window denies everything.

use chrono::{DateTime, Datelike, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, EngineResult};
use crate::facility::Facility;
use crate::types::VisitDay;

/// Daily time-of-day window during which visits may start
///
/// Both bounds are inclusive: a visit presenting at exactly the opening or
/// closing minute is inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitingWindow {
    /// Opening time-of-day (inclusive)
    pub start: NaiveTime,
    /// Closing time-of-day (inclusive)
    pub end: NaiveTime,
}

impl VisitingWindow {
    /// Create a visiting window. Fails if the window would close before it
    /// opens.
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::validation(format!(
                "visiting window closes ({}) before it opens ({})",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Check whether a time-of-day falls inside the window, bounds included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time <= self.end
    }
}

impl fmt::Display for VisitingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl Facility {
    /// Check whether the facility receives visits at the given instant.
    ///
    /// Fails closed: an inactive facility, or one without a configured
    /// window, denies every instant. Otherwise the instant's weekday must be
    /// an enabled visit day and its time-of-day must fall inside the window,
    /// both bounds inclusive. The weekday comparison goes through
    /// [`VisitDay`], the facility's own day representation.
    pub fn permits_visit_at(&self, instant: DateTime<Utc>) -> bool {
        if !self.active {
            return false;
        }
        let Some(window) = &self.visiting_window else {
            return false;
        };

        let day = VisitDay::from(instant.date_naive().weekday());
        if !self.receives_visits_on(day) {
            return false;
        }

        // Window bounds are whole minutes; ignore stray seconds on the clock
        // so a 17:00:59 arrival still counts as 17:00.
        let time = instant
            .time()
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or_else(|| instant.time());
        window.contains(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn facility_9_to_17() -> Facility {
        let window = VisitingWindow::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        )
        .unwrap();

        Facility::new("North Unit", Utc::now()).with_schedule(
            [VisitDay::Monday, VisitDay::Wednesday, VisitDay::Saturday],
            window,
        )
    }

    fn at(date: (i32, u32, u32), time: (u32, u32)) -> DateTime<Utc> {
        let (y, m, d) = date;
        let (h, min) = time;
        Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap(),
        )
    }

    #[test]
    fn test_window_rejects_inverted_bounds() {
        let start = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(VisitingWindow::new(start, end).is_err());
    }

    #[test]
    fn test_permits_inside_window_on_enabled_day() {
        let facility = facility_9_to_17();
        // 2026-08-03 is a Monday
        assert!(facility.permits_visit_at(at((2026, 8, 3), (10, 30))));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let facility = facility_9_to_17();

        assert!(facility.permits_visit_at(at((2026, 8, 3), (9, 0))));
        assert!(facility.permits_visit_at(at((2026, 8, 3), (17, 0))));
    }

    #[test]
    fn test_one_minute_outside_is_denied() {
        let facility = facility_9_to_17();

        assert!(!facility.permits_visit_at(at((2026, 8, 3), (8, 59))));
        assert!(!facility.permits_visit_at(at((2026, 8, 3), (17, 1))));
    }

    #[test]
    fn test_disabled_day_is_denied() {
        let facility = facility_9_to_17();
        // 2026-08-04 is a Tuesday, not an enabled day
        assert!(!facility.permits_visit_at(at((2026, 8, 4), (10, 30))));
    }

    #[test]
    fn test_inactive_facility_fails_closed() {
        let mut facility = facility_9_to_17();
        facility.deactivate(Utc::now());
        assert!(!facility.permits_visit_at(at((2026, 8, 3), (10, 30))));
    }

    #[test]
    fn test_missing_window_fails_closed() {
        let facility = Facility::new("Unconfigured", Utc::now());
        assert!(!facility.permits_visit_at(at((2026, 8, 3), (10, 30))));
    }
}
