//! Restriction matching for admission decisions
//!
//! Given the restrictions on file for a visitor, the matcher selects every
//! one that blocks a visit to a given inmate on a given day. Admission
//! denials report each match separately, so an operator sees the full set
//! of bans standing in the way rather than only the first.

use chrono::NaiveDate;

use crate::restriction::Restriction;
use crate::types::InmateId;

/// Select every restriction that blocks a visit to `inmate_id` on `today`.
///
/// A restriction blocks when it is in force on `today` (active flag set,
/// start date reached, end date not passed) **and** its scope covers the
/// inmate. A non-empty result denies admission; a lapsed or lifted
/// restriction never appears in the result.
pub fn blocking_restrictions<'a>(
    restrictions: &'a [Restriction],
    inmate_id: InmateId,
    today: NaiveDate,
) -> Vec<&'a Restriction> {
    restrictions.iter().filter(|restriction| restriction.blocks(inmate_id, today)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restriction::RestrictionScope;
    use crate::types::{RestrictionKind, VisitorId};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn restriction(scope: RestrictionScope, ends_on: Option<NaiveDate>) -> Restriction {
        Restriction::new(
            VisitorId::new(),
            RestrictionKind::Security,
            "threat assessment pending",
            date(2026, 1, 1),
            ends_on,
            scope,
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_input_matches_nothing() {
        assert!(blocking_restrictions(&[], InmateId::new(), date(2026, 8, 6)).is_empty());
    }

    #[test]
    fn test_all_inmates_restriction_blocks_any_target() {
        let restrictions = vec![restriction(RestrictionScope::AllInmates, None)];
        let hits = blocking_restrictions(&restrictions, InmateId::new(), date(2026, 8, 6));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_specific_restriction_only_blocks_its_inmate() {
        let target = InmateId::new();
        let restrictions = vec![restriction(RestrictionScope::SpecificInmate(target), None)];

        assert_eq!(blocking_restrictions(&restrictions, target, date(2026, 8, 6)).len(), 1);
        assert!(blocking_restrictions(&restrictions, InmateId::new(), date(2026, 8, 6)).is_empty());
    }

    #[test]
    fn test_lifted_restriction_never_matches() {
        let mut lifted = restriction(RestrictionScope::AllInmates, None);
        lifted.lift("resolved", date(2026, 8, 1), Utc::now()).unwrap();

        let restrictions = vec![lifted];
        assert!(blocking_restrictions(&restrictions, InmateId::new(), date(2026, 8, 6)).is_empty());
    }

    #[test]
    fn test_lapsed_restriction_never_matches() {
        let restrictions = vec![restriction(RestrictionScope::AllInmates, Some(date(2026, 6, 30)))];
        assert!(blocking_restrictions(&restrictions, InmateId::new(), date(2026, 8, 6)).is_empty());
    }

    #[test]
    fn test_multiple_hits_all_reported() {
        let target = InmateId::new();
        let restrictions = vec![
            restriction(RestrictionScope::AllInmates, None),
            restriction(RestrictionScope::SpecificInmate(target), None),
            restriction(RestrictionScope::SpecificInmate(InmateId::new()), None),
        ];

        let hits = blocking_restrictions(&restrictions, target, date(2026, 8, 6));
        assert_eq!(hits.len(), 2);
    }
}
