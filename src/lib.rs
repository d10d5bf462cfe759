//! Loan approval decisions from a fixed applicant schema.
//!
//! The [`workflows::loan`] module carries the decision engine; [`cli`] exposes it as a
//! command-line tool that reads one applicant as JSON and prints the decision as JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
