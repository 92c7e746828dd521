//! MySensors Test Harness - Codec fuzzing and shared fixtures
//!
//! This crate provides:
//! - Seeded message fuzzing over every payload type
//! - Sample messages used by the integration tests and benchmarks

pub mod fixtures;
pub mod message_fuzzer;

pub use fixtures::*;
pub use message_fuzzer::*;
