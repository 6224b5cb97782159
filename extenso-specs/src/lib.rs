//! Fixture-driven regression harness for the extenso crates.
//!
//! Test cases live in TOML fixture files under `fixtures/`, one verbalizer
//! kind per file. Every case pins the exact text an input must produce, so
//! any change in connectors, plurals or capitalization shows up as a
//! regression.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture types and TOML parsing
//! - [`loader`] - Fixture file loading
//! - [`runner`] - Runs cases through the verbalizers
//! - [`config`] - Selects which case kinds run
//! - [`failures`] - Expected failures tracking via TOML
//! - [`formatter`] - Failure and summary formatting
//! - [`errors`] - Error types for the harness

pub mod config;
pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use config::RunConfig;
pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, Case, CaseKind, Fixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{run_all, run_case, run_fixture, verbalize, CaseOutcome};
