//! Shared test utilities for cli-showcase integration tests
//!
//! Offline fixtures and content assertions for the template pipeline.

pub mod assertions;
pub mod fixtures;
