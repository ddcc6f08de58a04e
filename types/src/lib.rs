//! Value types for Accessors.
//!
//! This crate contains pure value types with no IO, no async, and minimal dependencies:
//! squares whose area is derived from (or drives) their side length, a person whose
//! names are sanitized on write and capitalized on read, and a few stateless math helpers.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::float_cmp)] // Tests compare exactly representable areas

pub mod math;
mod person;
mod sanitize;
mod square;
mod text;

pub use person::SanitizedPerson;
pub use sanitize::{is_name_char, sanitize_name};
pub use square::{AreaUpdate, DerivedAreaShape, EagerSquare, ShapeError, SideLength, Square};
pub use text::capitalize_first;
