// 🚦 Registry - Rule validation and state transitions
// Record creation, guarded personal-detail updates, and demerit-point accrual
// with age-dependent suspension. Every operation loads the full set from the
// store, mutates in memory, and writes the full set back on success.

use crate::person::{Offense, Person};
use crate::store::PersonStore;
use crate::validation::{is_valid_address, is_valid_date, is_valid_person_id, parse_date};
use chrono::{Datelike, Local, NaiveDate};
use std::path::PathBuf;

/// Offenses inside this many days (absolute distance from the triggering
/// offense date, inclusive) count toward the suspension total
const POINT_WINDOW_DAYS: i64 = 730;

/// Point ceiling for drivers under 21 at the offense date
const UNDER_21_LIMIT: u32 = 6;

/// Point ceiling for drivers 21 or older at the offense date
const OVER_21_LIMIT: u32 = 12;

/// Minimum age (today, from the stored birth date) to change address
const ADDRESS_CHANGE_MIN_AGE: i32 = 18;

/// Valid demerit-point range for a single offense
const POINT_RANGE: std::ops::RangeInclusive<u32> = 1..=6;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Two-valued outcome of `add_demerit_points`, matching the legacy
/// "Success"/"Failed" sentinel strings exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemeritOutcome {
    Success,
    Failed,
}

impl DemeritOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemeritOutcome::Success => "Success",
            DemeritOutcome::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for DemeritOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Internal failure causes.
///
/// The public surface collapses all of these to `false` / `Failed`: callers
/// cannot tell a malformed input from a missing id, and for demerit points
/// that collapse is deliberate. The `try_*` methods expose the cause for
/// tests and embedders.
#[derive(Debug)]
pub enum RegistryError {
    InvalidId,
    InvalidAddress,
    InvalidDate,
    InvalidPoints,
    DuplicateId,
    NotFound,
    RuleViolation(&'static str),
    Store(anyhow::Error),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::InvalidId => write!(f, "person id fails format rules"),
            RegistryError::InvalidAddress => write!(f, "address fails format rules"),
            RegistryError::InvalidDate => write!(f, "date is not in dd-MM-yyyy form"),
            RegistryError::InvalidPoints => write!(f, "demerit points outside 1-6"),
            RegistryError::DuplicateId => write!(f, "person id already registered"),
            RegistryError::NotFound => write!(f, "no person with that id"),
            RegistryError::RuleViolation(rule) => write!(f, "rule violation: {}", rule),
            RegistryError::Store(err) => write!(f, "store failure: {}", err),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<anyhow::Error> for RegistryError {
    fn from(err: anyhow::Error) -> Self {
        RegistryError::Store(err)
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// The person registry. Holds no record state of its own: each operation
/// reads the backing store fresh and writes it back in full, so the store
/// file is the single source of truth between calls.
///
/// Single-writer discipline is the caller's job; there is no locking here.
pub struct Registry {
    store: PersonStore,
}

impl Registry {
    /// Create a registry over the given store file.
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Registry {
            store: PersonStore::new(store_path),
        }
    }

    // ========================================================================
    // ADD PERSON
    // ========================================================================

    /// Add a new person. Legacy boolean surface over [`try_add_person`].
    ///
    /// [`try_add_person`]: Registry::try_add_person
    pub fn add_person(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
        address: &str,
        birth_date: &str,
    ) -> bool {
        self.try_add_person(id, first_name, last_name, address, birth_date)
            .is_ok()
    }

    /// Add a new person, reporting the failure cause.
    ///
    /// Validates id, address and birth date, rejects duplicate ids, then
    /// appends an unsuspended person with no offenses and saves the set.
    pub fn try_add_person(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
        address: &str,
        birth_date: &str,
    ) -> Result<(), RegistryError> {
        if !is_valid_person_id(id) {
            return Err(RegistryError::InvalidId);
        }
        if !is_valid_address(address) {
            return Err(RegistryError::InvalidAddress);
        }
        if !is_valid_date(birth_date) {
            return Err(RegistryError::InvalidDate);
        }

        let mut people = self.store.load()?;
        if people.iter().any(|p| p.id == id) {
            return Err(RegistryError::DuplicateId);
        }

        people.push(Person::new(id, first_name, last_name, address, birth_date));
        self.store.save(&people)?;
        Ok(())
    }

    // ========================================================================
    // UPDATE PERSONAL DETAILS
    // ========================================================================

    /// Update personal details. Legacy boolean surface over
    /// [`try_update_personal_details`].
    ///
    /// [`try_update_personal_details`]: Registry::try_update_personal_details
    pub fn update_personal_details(
        &self,
        old_id: &str,
        new_id: &str,
        first_name: &str,
        last_name: &str,
        address: &str,
        birth_date: &str,
    ) -> bool {
        self.try_update_personal_details(old_id, new_id, first_name, last_name, address, birth_date)
            .is_ok()
    }

    /// Update the five personal fields of an existing person, reporting the
    /// failure cause. Offenses and the suspended flag are never touched.
    ///
    /// Rules, in order:
    /// 1. the birth date may only change in isolation (every other field
    ///    byte-identical to the stored values; raw strings, no date
    ///    normalization before comparing)
    /// 2. under-18s (age from the STORED birth date, as of today) may not
    ///    change address
    /// 3. an id whose first character is an even digit may never be changed
    /// 4. the new field values must pass the same format rules as at add time
    pub fn try_update_personal_details(
        &self,
        old_id: &str,
        new_id: &str,
        first_name: &str,
        last_name: &str,
        address: &str,
        birth_date: &str,
    ) -> Result<(), RegistryError> {
        let mut people = self.store.load()?;
        let index = people
            .iter()
            .position(|p| p.id == old_id)
            .ok_or(RegistryError::NotFound)?;

        // Age is taken from the stored birth date, before any change applies
        let stored = &people[index];
        let stored_birth = parse_date(&stored.birth_date).ok_or(RegistryError::InvalidDate)?;
        let current_age = whole_years_between(stored_birth, Local::now().date_naive());

        let birthday_changed = birth_date != stored.birth_date;
        if birthday_changed
            && (new_id != stored.id
                || first_name != stored.first_name
                || last_name != stored.last_name
                || address != stored.address)
        {
            return Err(RegistryError::RuleViolation(
                "birth date may only change on its own",
            ));
        }

        if current_age < ADDRESS_CHANGE_MIN_AGE && address != stored.address {
            return Err(RegistryError::RuleViolation(
                "under-18s may not change address",
            ));
        }

        if new_id != old_id && starts_with_even_digit(old_id) {
            return Err(RegistryError::RuleViolation(
                "ids starting with an even digit are permanent",
            ));
        }

        if !is_valid_person_id(new_id) {
            return Err(RegistryError::InvalidId);
        }
        if !is_valid_address(address) {
            return Err(RegistryError::InvalidAddress);
        }
        if !is_valid_date(birth_date) {
            return Err(RegistryError::InvalidDate);
        }

        let person = &mut people[index];
        person.id = new_id.to_string();
        person.first_name = first_name.to_string();
        person.last_name = last_name.to_string();
        person.address = address.to_string();
        person.birth_date = birth_date.to_string();

        self.store.save(&people)?;
        Ok(())
    }

    // ========================================================================
    // ADD DEMERIT POINTS
    // ========================================================================

    /// Record a demerit-point offense. Legacy sentinel surface over
    /// [`try_add_demerit_points`]: every failure cause reads as `Failed`.
    ///
    /// [`try_add_demerit_points`]: Registry::try_add_demerit_points
    pub fn add_demerit_points(&self, id: &str, date: &str, points: u32) -> DemeritOutcome {
        match self.try_add_demerit_points(id, date, points) {
            Ok(()) => DemeritOutcome::Success,
            Err(_) => DemeritOutcome::Failed,
        }
    }

    /// Record a demerit-point offense, reporting the failure cause.
    ///
    /// Date and point range are checked before the lookup happens. Once the
    /// person is found the offense is appended unconditionally, then the
    /// suspension rule runs: sum the points of every offense within
    /// [`POINT_WINDOW_DAYS`] (absolute distance) of the offense date and
    /// suspend when the age-dependent ceiling is exceeded. Age is measured at
    /// the OFFENSE date, not today. Suspension is monotonic.
    pub fn try_add_demerit_points(
        &self,
        id: &str,
        date: &str,
        points: u32,
    ) -> Result<(), RegistryError> {
        let offense_date = parse_date(date).ok_or(RegistryError::InvalidDate)?;
        if !POINT_RANGE.contains(&points) {
            return Err(RegistryError::InvalidPoints);
        }

        let mut people = self.store.load()?;
        let index = people
            .iter()
            .position(|p| p.id == id)
            .ok_or(RegistryError::NotFound)?;
        let person = &mut people[index];

        person.offenses.push(Offense::new(date, points));

        let birth = parse_date(&person.birth_date).ok_or(RegistryError::InvalidDate)?;
        let age_at_offense = whole_years_between(birth, offense_date);

        let total: u32 = person
            .offenses
            .iter()
            .filter_map(|o| parse_date(&o.date).map(|d| (d, o.points)))
            .filter(|(d, _)| (*d - offense_date).num_days().abs() <= POINT_WINDOW_DAYS)
            .map(|(_, p)| p)
            .sum();

        let limit = if age_at_offense < 21 {
            UNDER_21_LIMIT
        } else {
            OVER_21_LIMIT
        };
        if total > limit {
            person.suspended = true;
        }

        self.store.save(&people)?;
        Ok(())
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    /// Find a person by id.
    pub fn find_person(&self, id: &str) -> anyhow::Result<Option<Person>> {
        let people = self.store.load()?;
        Ok(people.into_iter().find(|p| p.id == id))
    }

    /// All persons in store order.
    pub fn all(&self) -> anyhow::Result<Vec<Person>> {
        self.store.load()
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Whole calendar years from `from` to `to` (negative if `to` precedes `from`).
fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// True when the first character of `id` is an even decimal digit.
fn starts_with_even_digit(id: &str) -> bool {
    id.chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map_or(false, |d| d % 2 == 0)
}

// ============================================================================
// TESTS
// ============================================================================
