//! Sample roster generation
//!
//! Produces a plausible facility population for demonstrations and tests:
//! every visitor gets an authorization toward a random inmate, a slice of
//! the authorizations carry past expiration dates, and a slice of the
//! visitors carry restrictions. Generation is deterministic under a seed.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::authorization::Authorization;
use crate::error::{EngineError, EngineResult};
use crate::facility::{Facility, VisitingWindow};
use crate::people::{HousingAssignment, Inmate, Visitor};
use crate::restriction::{Restriction, RestrictionScope};
use crate::roster::Roster;
use crate::types::{RelationshipKind, RestrictionKind, VisitDay};

const FIRST_NAMES: &[&str] = &[
    "Ana", "Carlos", "Lucia", "Miguel", "Sofia", "Diego", "Valentina", "Javier", "Camila",
    "Andres", "Paula", "Ricardo", "Elena", "Marcos", "Isabel", "Tomas",
];

const LAST_NAMES: &[&str] = &[
    "Torres", "Medina", "Alvarez", "Rojas", "Fuentes", "Navarro", "Castillo", "Paredes",
    "Molina", "Vega", "Campos", "Herrera", "Soto", "Miranda", "Ortega", "Salazar",
];

const WINGS: &[&str] = &["A", "B", "C", "D"];

const RELATIONSHIPS: &[RelationshipKind] = &[
    RelationshipKind::Parent,
    RelationshipKind::Partner,
    RelationshipKind::Sibling,
    RelationshipKind::Child,
    RelationshipKind::Friend,
    RelationshipKind::LegalCounsel,
];

const RESTRICTION_MOTIVES: &[(RestrictionKind, &str)] = &[
    (RestrictionKind::Behavioral, "altercation during prior visit"),
    (RestrictionKind::CourtOrder, "active no-contact order"),
    (RestrictionKind::Disciplinary, "attempted contraband handoff"),
    (RestrictionKind::Security, "pending threat assessment"),
];

/// Generation parameters for a sample roster
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Number of visitors to generate
    pub visitor_count: usize,
    /// Number of inmates to generate
    pub inmate_count: usize,
    /// Fraction of authorizations given an already-passed expiration date
    pub expired_authorization_rate: f64,
    /// Fraction of visitors given an active restriction
    pub restriction_rate: f64,
    /// Concurrent-visit ceiling for the generated facility
    pub facility_capacity: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            visitor_count: 12,
            inmate_count: 8,
            expired_authorization_rate: 0.15,
            restriction_rate: 0.2,
            facility_capacity: 5,
        }
    }
}

/// Seeded generator for sample rosters
#[derive(Debug)]
pub struct RosterGenerator {
    rng: StdRng,
}

impl RosterGenerator {
    /// Create a generator seeded from entropy.
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Create a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        info!(seed, "using deterministic roster seed");
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Generate a full roster.
    pub fn generate(&mut self, config: &RosterConfig, now: DateTime<Utc>) -> EngineResult<Roster> {
        if config.inmate_count == 0 || config.visitor_count == 0 {
            return Err(EngineError::validation(
                "roster generation needs at least one visitor and one inmate",
            ));
        }

        let facility = self.generate_facility(config, now);
        let inmates = self.generate_inmates(config, &facility, now)?;
        let visitors = self.generate_visitors(config, now)?;
        let authorizations = self.generate_authorizations(config, &visitors, &inmates, now);
        let restrictions = self.generate_restrictions(config, &visitors, &inmates, now);

        let roster = Roster { facility, visitors, inmates, authorizations, restrictions };
        debug!("generated {}", roster.describe());
        Ok(roster)
    }

    fn generate_facility(&mut self, config: &RosterConfig, now: DateTime<Utc>) -> Facility {
        let window = VisitingWindow {
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("valid opening time"),
            end: NaiveTime::from_hms_opt(17, 0, 0).expect("valid closing time"),
        };

        Facility::new("North Visitation Hall", now)
            .with_schedule(
                [
                    VisitDay::Monday,
                    VisitDay::Wednesday,
                    VisitDay::Friday,
                    VisitDay::Saturday,
                    VisitDay::Sunday,
                ],
                window,
            )
            .with_capacity(config.facility_capacity)
    }

    fn generate_inmates(
        &mut self,
        config: &RosterConfig,
        facility: &Facility,
        now: DateTime<Utc>,
    ) -> EngineResult<Vec<Inmate>> {
        (0..config.inmate_count)
            .map(|index| {
                let housing = HousingAssignment::new(
                    *WINGS.choose(&mut self.rng).expect("non-empty wing pool"),
                    self.rng.gen_range(1..=3),
                );
                Inmate::new(
                    format!("{}", 1001 + index),
                    self.full_name(),
                    housing,
                    facility.id,
                    now,
                )
            })
            .collect()
    }

    fn generate_visitors(
        &mut self,
        config: &RosterConfig,
        now: DateTime<Utc>,
    ) -> EngineResult<Vec<Visitor>> {
        let mut national_ids = HashSet::new();
        let mut visitors = Vec::with_capacity(config.visitor_count);

        while visitors.len() < config.visitor_count {
            // Anything in this range is 7 or 8 digits wide
            let national_id = format!("{}", self.rng.gen_range(1_000_000u32..99_999_999));
            if !national_ids.insert(national_id.clone()) {
                continue;
            }

            let birth_date = self.adult_birth_date(now);
            visitors.push(Visitor::new(national_id, self.full_name(), birth_date, now)?);
        }

        Ok(visitors)
    }

    fn generate_authorizations(
        &mut self,
        config: &RosterConfig,
        visitors: &[Visitor],
        inmates: &[Inmate],
        now: DateTime<Utc>,
    ) -> Vec<Authorization> {
        // One authorization per visitor keeps every (visitor, inmate) pair
        // unique without bookkeeping.
        visitors
            .iter()
            .map(|visitor| {
                let inmate = inmates.choose(&mut self.rng).expect("non-empty inmate pool");
                let relationship =
                    *RELATIONSHIPS.choose(&mut self.rng).expect("non-empty relationship pool");

                let expires_on = if self.rng.gen_bool(config.expired_authorization_rate) {
                    Some(now.date_naive() - Duration::days(self.rng.gen_range(1..180)))
                } else if self.rng.gen_bool(0.3) {
                    Some(now.date_naive() + Duration::days(self.rng.gen_range(30..365)))
                } else {
                    None
                };

                Authorization::new(visitor.id, inmate.id, relationship, expires_on, now)
            })
            .collect()
    }

    fn generate_restrictions(
        &mut self,
        config: &RosterConfig,
        visitors: &[Visitor],
        inmates: &[Inmate],
        now: DateTime<Utc>,
    ) -> Vec<Restriction> {
        let mut restrictions = Vec::new();
        for visitor in visitors {
            if !self.rng.gen_bool(config.restriction_rate) {
                continue;
            }

            let (kind, motive) =
                *RESTRICTION_MOTIVES.choose(&mut self.rng).expect("non-empty motive pool");

            let scope = if self.rng.gen_bool(0.5) {
                RestrictionScope::AllInmates
            } else {
                let inmate = inmates.choose(&mut self.rng).expect("non-empty inmate pool");
                RestrictionScope::SpecificInmate(inmate.id)
            };

            let starts_on = now.date_naive() - Duration::days(self.rng.gen_range(1..90));
            let ends_on = if self.rng.gen_bool(0.5) {
                Some(now.date_naive() + Duration::days(self.rng.gen_range(30..365)))
            } else {
                None
            };

            restrictions.push(Restriction::new(
                visitor.id, kind, motive, starts_on, ends_on, scope, now,
            ));
        }
        restrictions
    }

    fn full_name(&mut self) -> String {
        format!(
            "{} {}",
            FIRST_NAMES.choose(&mut self.rng).expect("non-empty name pool"),
            LAST_NAMES.choose(&mut self.rng).expect("non-empty name pool"),
        )
    }

    fn adult_birth_date(&mut self, now: DateTime<Utc>) -> NaiveDate {
        // 19-70 years back keeps every generated visitor safely adult
        let days_old = self.rng.gen_range((19 * 366)..(70 * 365));
        now.date_naive() - Duration::days(days_old)
    }
}

impl Default for RosterGenerator {
    fn default() -> Self {
        Self::new()
    }
}
