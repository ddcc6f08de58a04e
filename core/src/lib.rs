//! Demonstration logic for Accessors.
//!
//! Builds the textual walkthrough of the value types in `accessors-types`
//! as a [`TraceLog`]. Printing is left to the binary.

pub mod demo;
mod trace;

pub use demo::{DemoError, run as run_demo};
pub use trace::{TraceLine, TraceLog};
