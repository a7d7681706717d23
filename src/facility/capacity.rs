//! Concurrent-visit capacity gate
//!
//! This module contains the facility capacity checks: whether the
//! concurrent-visit ceiling has been reached (blocking) and whether the
//! facility is near saturation (advisory only).

use crate::facility::Facility;

/// Occupancy percentage at or above which the near-capacity advisory fires
pub const NEAR_CAPACITY_PERCENT: u32 = 80;

impl Facility {
    /// Check whether the concurrent-visit ceiling has been reached.
    ///
    /// A facility with no ceiling, or a ceiling of 0, is never full. The
    /// count passed in must be the number of sessions in progress at the
    /// instant of the check; see the repository's guarded check-in for the
    /// race this otherwise opens.
    pub fn capacity_reached(&self, in_progress: u32) -> bool {
        match self.max_concurrent_visits {
            Some(max) if max > 0 => in_progress >= max,
            _ => false,
        }
    }

    /// Check whether occupancy is at or above [`NEAR_CAPACITY_PERCENT`].
    ///
    /// Advisory only; never blocks an admission.
    pub fn near_capacity(&self, in_progress: u32) -> bool {
        self.occupancy_percent(in_progress)
            .map(|percent| percent >= NEAR_CAPACITY_PERCENT)
            .unwrap_or(false)
    }

    /// Current occupancy as an integer-truncated percentage of the ceiling.
    ///
    /// `None` when the facility has no ceiling.
    pub fn occupancy_percent(&self, in_progress: u32) -> Option<u32> {
        match self.max_concurrent_visits {
            Some(max) if max > 0 => Some(in_progress.saturating_mul(100) / max),
            _ => None,
        }
    }
}
