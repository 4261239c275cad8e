//! Black-box test suite for the `posts` resource of a JSONPlaceholder style API
//!
//! - [`fixtures`] - named, immutable inputs shared by every case
//! - [`assertions`] - predicates over decoded response bodies
//! - [`scenarios`] - the declared cases as a data table
//! - [`runner`] - sequential execution with a pass/fail report
//! - [`logging`] - subscriber setup for the binary
//!
//! # Environment Variables
//!
//! - `POSTCHECK_BASE_URL`: service under test (default: JSONPlaceholder)
//! - `POSTCHECK_TIMEOUT` / `POSTCHECK_CONNECT_TIMEOUT`: seconds
//! - `POSTCHECK_LIVE`: integration tests hit the real service instead of the mock
//! - `RUST_LOG`: tracing filter; `LOG_LEVEL` (default `info`) applies when unset or invalid

pub mod assertions;
pub mod fixtures;
pub mod logging;
pub mod runner;
pub mod scenarios;

pub use assertions::{AssertionError, AssertionResult};
pub use runner::{CaseError, CaseOutcome, RunReport, Runner};
pub use scenarios::{Check, Scenario};
