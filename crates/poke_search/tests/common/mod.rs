//! Shared test utilities.
//!
//! Builders for battle states used across the integration tests, and the
//! fixture format read by the damage harness.

#![allow(dead_code)]

pub mod builders;
pub mod fixtures;
