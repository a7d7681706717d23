//! Roster generation, serialization, and installation
//!
//! Covers the JSON round trip through a real file, deterministic seeded
//! generation, and installing a generated roster into the in-memory store
//! for evaluation.

use std::fs;

use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::tempdir;
use visitgate::admission::AdmissionEngine;
use visitgate::repository::memory::InMemoryStore;
use visitgate::roster::{Roster, RosterConfig, RosterGenerator};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(2026, 8, 3).unwrap().and_hms_opt(10, 0, 0).unwrap(),
    )
}

#[test]
fn test_roster_round_trips_through_a_file() {
    let roster = RosterGenerator::seeded(42)
        .generate(&RosterConfig::default(), fixed_now())
        .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, roster.to_json().unwrap()).unwrap();

    let reloaded = Roster::from_json(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(reloaded.facility.id, roster.facility.id);
    assert_eq!(reloaded.visitors.len(), roster.visitors.len());
    assert_eq!(reloaded.inmates.len(), roster.inmates.len());
    assert_eq!(reloaded.authorizations.len(), roster.authorizations.len());
    assert_eq!(reloaded.restrictions.len(), roster.restrictions.len());

    // Spot-check a nested record survives intact
    assert_eq!(reloaded.visitors[0].national_id, roster.visitors[0].national_id);
    assert_eq!(reloaded.inmates[0].housing, roster.inmates[0].housing);
}

#[test]
fn test_seeded_generation_is_deterministic() {
    let config = RosterConfig { visitor_count: 20, inmate_count: 10, ..Default::default() };

    let first = RosterGenerator::seeded(7).generate(&config, fixed_now()).unwrap();
    let second = RosterGenerator::seeded(7).generate(&config, fixed_now()).unwrap();

    let ids = |roster: &Roster| {
        roster.visitors.iter().map(|v| v.national_id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));

    let third = RosterGenerator::seeded(8).generate(&config, fixed_now()).unwrap();
    assert_ne!(ids(&first), ids(&third));
}

#[test]
fn test_installed_roster_is_evaluable() {
    let roster = RosterGenerator::seeded(42)
        .generate(&RosterConfig::default(), fixed_now())
        .unwrap();

    let store = InMemoryStore::new();
    roster.install(&store).unwrap();
    let engine = AdmissionEngine::with_store(&store);

    // Every authorization pair must evaluate to a decision, never an error
    for authorization in &roster.authorizations {
        let visitor = roster
            .visitors
            .iter()
            .find(|v| v.id == authorization.visitor_id)
            .expect("authorization points at a rostered visitor");
        let inmate = roster
            .inmates
            .iter()
            .find(|i| i.id == authorization.inmate_id)
            .expect("authorization points at a rostered inmate");

        let result = engine
            .evaluate_admission(&visitor.national_id, &inmate.file_number, fixed_now())
            .unwrap();
        if !result.admitted {
            assert!(!result.blocking_reasons.is_empty());
        }
    }
}

#[test]
fn test_double_install_conflicts() {
    let roster = RosterGenerator::seeded(42)
        .generate(&RosterConfig::default(), fixed_now())
        .unwrap();

    let store = InMemoryStore::new();
    roster.install(&store).unwrap();

    // Same records again: the visitor uniqueness constraint fires
    assert!(roster.install(&store).is_err());
}
