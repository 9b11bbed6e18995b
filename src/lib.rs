// Driver Registry - Core Library
// Licensed-person records, guarded detail updates, and demerit-point accrual
// with age-dependent suspension, over a line-oriented flat-file store.

pub mod person;
pub mod registry;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use person::{Address, Offense, Person};
pub use registry::{DemeritOutcome, Registry, RegistryError};
pub use store::PersonStore;
pub use validation::{is_valid_address, is_valid_date, is_valid_person_id, parse_date, DATE_FORMAT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
