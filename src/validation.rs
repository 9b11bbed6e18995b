// 📏 Validation Rules - Pure field-format checks
// No I/O here; the registry calls these before touching the store.

use crate::person::Address;
use chrono::NaiveDate;

/// The one accepted date layout: zero-padded dd-MM-yyyy (e.g. "15-11-2000")
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Special characters that count toward the id's middle-section requirement
const ID_SPECIALS: &str = "!@#$%^&*()_+=[]{};':\"\\|,.<>/?~-";

/// Required length of a person id
const ID_LEN: usize = 10;

// ============================================================================
// PERSON ID
// ============================================================================

/// Validate a person id.
///
/// Exactly 10 characters:
/// - chars 0–1: each a digit in 2–9
/// - chars 2–7: at least two characters drawn from the special set
/// - chars 8–9: uppercase A–Z
pub fn is_valid_person_id(id: &str) -> bool {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() != ID_LEN {
        return false;
    }

    if !chars[..2].iter().all(|c| matches!(c, '2'..='9')) {
        return false;
    }

    let special_count = chars[2..8].iter().filter(|c| ID_SPECIALS.contains(**c)).count();
    if special_count < 2 {
        return false;
    }

    chars[8..].iter().all(|c| c.is_ascii_uppercase())
}

// ============================================================================
// ADDRESS
// ============================================================================

/// Validate a raw address string: five pipe-delimited fields with the state
/// field equal to "Victoria". No other field is checked.
pub fn is_valid_address(raw: &str) -> bool {
    match Address::parse(raw) {
        Some(address) => address.state == "Victoria",
        None => false,
    }
}

// ============================================================================
// DATE
// ============================================================================

/// Parse a date strictly as dd-MM-yyyy.
///
/// chrono alone accepts non-padded day/month values ("5-1-2000"), so the
/// shape is checked first: ten characters, dashes at positions 2 and 5,
/// digits everywhere else. Returns None on any deviation.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }

    let well_shaped = value.chars().enumerate().all(|(i, c)| {
        if i == 2 || i == 5 {
            c == '-'
        } else {
            c.is_ascii_digit()
        }
    });
    if !well_shaped {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Convenience wrapper for callers that only need pass/fail.
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

// ============================================================================
// TESTS
// ============================================================================
