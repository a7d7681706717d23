//! Schedule boundaries and capacity gating through the engine
//!
//! Covers the inclusive window bounds, disabled days, the 80% advisory,
//! the capacity denial, and the guarded check-in that re-verifies the
//! ceiling at commit time.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use visitgate::admission::{AdmissionEngine, CheckInOutcome};
use visitgate::authorization::Authorization;
use visitgate::facility::{Facility, VisitingWindow};
use visitgate::people::{HousingAssignment, Inmate, Visitor};
use visitgate::repository::memory::InMemoryStore;
use visitgate::repository::{
    AuthorizationRepository, FacilityRepository, InmateRepository, VisitSessionRepository,
    VisitorRepository,
};
use visitgate::session::VisitSession;
use visitgate::types::{OperatorId, RelationshipKind, VisitDay};

fn monday_at(hour: u32, minute: u32) -> chrono::DateTime<Utc> {
    Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(2026, 8, 3).unwrap().and_hms_opt(hour, minute, 0).unwrap(),
    )
}

/// Facility open Mondays 09:00-17:00 with the given ceiling, one cleared
/// visitor/inmate pair.
fn store_with_capacity(max: Option<u32>) -> (InMemoryStore, Facility) {
    let now = monday_at(8, 0);
    let store = InMemoryStore::new();

    let window = VisitingWindow::new(
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    )
    .unwrap();
    let mut facility = Facility::new("North Unit", now).with_schedule([VisitDay::Monday], window);
    if let Some(max) = max {
        facility = facility.with_capacity(max);
    }
    store.facilities.save(&facility).unwrap();

    let visitor = Visitor::new(
        "33333333",
        "Ana Torres",
        NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
        now,
    )
    .unwrap();
    store.visitors.save(&visitor).unwrap();

    let inmate = Inmate::new(
        "1002",
        "Carlos Medina",
        HousingAssignment::new("B", 2),
        facility.id,
        now,
    )
    .unwrap();
    store.inmates.save(&inmate).unwrap();

    store
        .authorizations
        .save(&Authorization::new(visitor.id, inmate.id, RelationshipKind::Friend, None, now))
        .unwrap();

    (store, facility)
}

/// Put `count` unrelated sessions in progress at the facility.
fn occupy(store: &InMemoryStore, facility: &Facility, count: usize) {
    for _ in 0..count {
        let mut session = VisitSession::new(
            visitgate::types::VisitorId::new(),
            visitgate::types::InmateId::new(),
            facility.id,
            monday_at(9, 0).date_naive(),
            monday_at(9, 0),
        );
        store.sessions.save(&session).unwrap();
        session.check_in(OperatorId::new(), monday_at(9, 0)).unwrap();
        store.sessions.update(&session).unwrap();
    }
}

#[test]
fn test_window_boundary_minutes() {
    let (store, _) = store_with_capacity(None);
    let engine = AdmissionEngine::with_store(&store);

    // Exactly at the bounds: permitted
    assert!(engine.evaluate_admission("33333333", "1002", monday_at(9, 0)).unwrap().admitted);
    assert!(engine.evaluate_admission("33333333", "1002", monday_at(17, 0)).unwrap().admitted);

    // One minute outside either bound: denied
    assert!(!engine.evaluate_admission("33333333", "1002", monday_at(8, 59)).unwrap().admitted);
    assert!(!engine.evaluate_admission("33333333", "1002", monday_at(17, 1)).unwrap().admitted);
}

#[test]
fn test_disabled_weekday_is_denied() {
    let (store, _) = store_with_capacity(None);
    let engine = AdmissionEngine::with_store(&store);

    // Tuesday 2026-08-04, same time of day
    let tuesday = Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(2026, 8, 4).unwrap().and_hms_opt(10, 0, 0).unwrap(),
    );
    let result = engine.evaluate_admission("33333333", "1002", tuesday).unwrap();

    assert!(!result.admitted);
    assert!(result.blocking_reasons[0].message.contains("visiting hours"));
}

#[test]
fn test_inactive_facility_denies_inside_window() {
    let (store, facility) = store_with_capacity(None);

    let mut closed = facility.clone();
    closed.deactivate(monday_at(8, 0));
    store.facilities.save(&closed).unwrap();

    let engine = AdmissionEngine::with_store(&store);
    let result = engine.evaluate_admission("33333333", "1002", monday_at(10, 0)).unwrap();

    assert!(!result.admitted);
    assert!(result.blocking_reasons[0].message.contains("closed"));
}

#[test]
fn test_occupancy_four_of_five_admits_with_advisory() {
    let (store, facility) = store_with_capacity(Some(5));
    occupy(&store, &facility, 4);

    let engine = AdmissionEngine::with_store(&store);
    let result = engine.evaluate_admission("33333333", "1002", monday_at(10, 0)).unwrap();

    assert!(result.admitted);
    assert!(result.advisories.iter().any(|a| a.contains("4/5") && a.contains("80%")));
}

#[test]
fn test_occupancy_five_of_five_denies() {
    let (store, facility) = store_with_capacity(Some(5));
    occupy(&store, &facility, 5);

    let engine = AdmissionEngine::with_store(&store);
    let result = engine.evaluate_admission("33333333", "1002", monday_at(10, 0)).unwrap();

    assert!(!result.admitted);
    assert!(result.blocking_reasons[0].message.contains("5/5"));
}

#[test]
fn test_unlimited_capacity_never_denies_or_advises() {
    let (store, facility) = store_with_capacity(None);
    occupy(&store, &facility, 50);

    let engine = AdmissionEngine::with_store(&store);
    let result = engine.evaluate_admission("33333333", "1002", monday_at(10, 0)).unwrap();

    assert!(result.admitted);
    assert!(!result.advisories.iter().any(|a| a.contains("capacity")));
}

#[test]
fn test_guarded_check_in_refuses_when_facility_fills_after_evaluation() {
    let (store, facility) = store_with_capacity(Some(5));
    occupy(&store, &facility, 4);

    let engine = AdmissionEngine::with_store(&store);
    let result = engine.evaluate_admission("33333333", "1002", monday_at(10, 0)).unwrap();
    assert!(result.admitted);

    let session = engine
        .schedule_visit(&result.clearance.unwrap(), monday_at(10, 0).date_naive(), monday_at(10, 0))
        .unwrap();

    // The last free slot is taken between evaluation and check-in
    occupy(&store, &facility, 1);

    let outcome = engine.check_in(session.id, OperatorId::new(), monday_at(10, 5)).unwrap();
    assert!(matches!(outcome, CheckInOutcome::FacilityFull));

    // Nothing was written: the session is still scheduled and the count
    // still shows five
    let stored = store.sessions.find_by_id(session.id).unwrap().unwrap();
    assert_eq!(stored.state, visitgate::types::SessionState::Scheduled);
    assert_eq!(store.sessions.count_in_progress(facility.id).unwrap(), 5);
}

#[test]
fn test_check_in_takes_the_last_slot() {
    let (store, facility) = store_with_capacity(Some(5));
    occupy(&store, &facility, 4);

    let engine = AdmissionEngine::with_store(&store);
    let result = engine.evaluate_admission("33333333", "1002", monday_at(10, 0)).unwrap();
    let session = engine
        .schedule_visit(&result.clearance.unwrap(), monday_at(10, 0).date_naive(), monday_at(10, 0))
        .unwrap();

    let outcome = engine.check_in(session.id, OperatorId::new(), monday_at(10, 5)).unwrap();
    assert!(matches!(outcome, CheckInOutcome::CheckedIn(_)));
    assert_eq!(store.sessions.count_in_progress(facility.id).unwrap(), 5);
}
