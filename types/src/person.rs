//! A person with sanitized, encapsulated name fields.
//!
//! Names are sanitized on every write (see [`sanitize_name`]) and capitalized
//! on every read. The stored form is never capitalized, so reads are views.
//!
//! Invariant: stored names only contain `[A-Za-z0-9'-]`. Deserialization goes
//! through the same sanitizer, so the invariant holds for persisted values too.

use serde::{Deserialize, Serialize};

use crate::sanitize::sanitize_name;
use crate::text::capitalize_first;

#[derive(Deserialize)]
struct RawPerson {
    first_name: String,
    last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPerson")]
pub struct SanitizedPerson {
    first_name: String,
    last_name: String,
}

impl From<RawPerson> for SanitizedPerson {
    fn from(raw: RawPerson) -> Self {
        Self::new(&raw.first_name, &raw.last_name)
    }
}

impl SanitizedPerson {
    /// Never fails. A name made only of disallowed characters is stored empty.
    #[must_use]
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: sanitize_name(first_name).into_owned(),
            last_name: sanitize_name(last_name).into_owned(),
        }
    }

    #[must_use]
    pub fn first_name(&self) -> String {
        capitalize_first(&self.first_name)
    }

    #[must_use]
    pub fn last_name(&self) -> String {
        capitalize_first(&self.last_name)
    }

    pub fn set_first_name(&mut self, first_name: &str) {
        self.first_name = sanitize_name(first_name).into_owned();
    }

    pub fn set_last_name(&mut self, last_name: &str) {
        self.last_name = sanitize_name(last_name).into_owned();
    }

    /// Stored (sanitized, uncapitalized) first name.
    #[must_use]
    pub fn raw_first_name(&self) -> &str {
        &self.first_name
    }

    /// Stored (sanitized, uncapitalized) last name.
    #[must_use]
    pub fn raw_last_name(&self) -> &str {
        &self.last_name
    }
}
