// 🪪 Person Entity - Licensed individual + offense history
// Flat-line encoding shared with the legacy store:
//
//   id,firstName,lastName,address,birthDate,suspended[,date:points]*
//
// Raw-string fields:
// - address stays in its pipe-delimited form ("32|Main St|Melbourne|Victoria|Australia")
// - birth_date / offense dates stay in their dd-MM-yyyy form
// Update rules compare these fields byte-for-byte, so no normalization happens
// on the way in or out.

use serde::{Deserialize, Serialize};

// ============================================================================
// OFFENSE
// ============================================================================

/// A dated demerit-point event attached to a person.
///
/// Owned exclusively by its `Person`; there is no independent offense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offense {
    /// Offense date in dd-MM-yyyy form (validated at entry)
    pub date: String,

    /// Demerit points (1–6 at entry)
    pub points: u32,
}

impl Offense {
    pub fn new(date: impl Into<String>, points: u32) -> Self {
        Offense {
            date: date.into(),
            points,
        }
    }
}

// ============================================================================
// ADDRESS
// ============================================================================

/// Parsed five-field view of a pipe-delimited address string.
///
/// The `Person` record keeps the raw string; this type exists for validation
/// and display. Only the state field carries a rule (must be "Victoria").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Address {
    /// Parse `number|street|city|state|country`. Returns None unless the
    /// string splits into exactly five fields.
    pub fn parse(raw: &str) -> Option<Address> {
        let parts: Vec<&str> = raw.split('|').collect();
        if parts.len() != 5 {
            return None;
        }

        Some(Address {
            street_number: parts[0].to_string(),
            street_name: parts[1].to_string(),
            city: parts[2].to_string(),
            state: parts[3].to_string(),
            country: parts[4].to_string(),
        })
    }
}

// ============================================================================
// PERSON
// ============================================================================

/// A licensed individual in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique 10-character id (format rules in `validation`)
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    /// Raw pipe-delimited address string
    pub address: String,

    /// Raw dd-MM-yyyy birth date string
    pub birth_date: String,

    /// Monotonic: once set by the demerit rules it is never cleared
    pub suspended: bool,

    /// Insertion-ordered offense history (entry order, not date order)
    pub offenses: Vec<Offense>,
}

impl Person {
    /// Create a new, unsuspended person with no offense history.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Person {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            birth_date: birth_date.into(),
            suspended: false,
            offenses: Vec::new(),
        }
    }

    /// Total demerit points over the whole history, window ignored.
    pub fn total_points(&self) -> u32 {
        self.offenses.iter().map(|o| o.points).sum()
    }

    // ========================================================================
    // FLAT-LINE ENCODING
    // ========================================================================

    /// Encode as one store line.
    ///
    /// Known limitation: a literal comma inside any field value corrupts the
    /// line. The legacy format has no escaping and downstream readers depend
    /// on the exact layout, so this is preserved rather than fixed.
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{},{},{},{},{},{}",
            self.id, self.first_name, self.last_name, self.address, self.birth_date, self.suspended
        );
        for offense in &self.offenses {
            line.push_str(&format!(",{}:{}", offense.date, offense.points));
        }
        line
    }

    /// Decode one store line. Returns None if the line has fewer than the six
    /// fixed fields; malformed offense tokens within a line are skipped.
    pub fn from_line(line: &str) -> Option<Person> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 6 {
            return None;
        }

        let mut person = Person::new(parts[0], parts[1], parts[2], parts[3], parts[4]);
        person.suspended = parts[5].eq_ignore_ascii_case("true");

        for token in &parts[6..] {
            let pieces: Vec<&str> = token.split(':').collect();
            if pieces.len() == 2 {
                if let Ok(points) = pieces[1].parse::<u32>() {
                    person.offenses.push(Offense::new(pieces[0], points));
                }
            }
        }

        Some(person)
    }
}

// ============================================================================
// TESTS
// ============================================================================
