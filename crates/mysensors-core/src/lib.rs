//! MySensors Core - Protocol constants and wire enumerations
//!
//! This crate defines the vocabulary shared by everything that touches a
//! MySensors message:
//! - Protocol constants (header size, payload capacity, version)
//! - Command and payload type tags carried in the header bitfields
//! - Sensor, data, internal and stream sub-types
//! - The error type for the fallible decode paths

pub mod command;
pub mod constants;
pub mod error;
pub mod types;

pub use command::*;
pub use constants::*;
pub use error::*;
pub use types::*;
