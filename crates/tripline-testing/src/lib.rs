//! Testing infrastructure for tripline integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated data directory plus a pre-wired CLI command builder
//! - `fixtures`: Well-formed timestamp log lines

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
