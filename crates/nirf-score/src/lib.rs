//! Cohort-relative institutional ranking.
//!
//! The [`ranking`] module holds the scoring engine proper: a two-pass batch computation that
//! turns a cohort of raw institution records into percentile-normalized category scores and a
//! weighted composite. Everything else in the crate (intake, configuration, telemetry) exists
//! to feed that engine or to present what it produces.

pub mod config;
pub mod error;
pub mod intake;
pub mod ranking;
pub mod telemetry;
