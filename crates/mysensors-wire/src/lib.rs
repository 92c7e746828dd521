//! MySensors Wire - Binary message format
//!
//! This crate implements the message exchanged between sensor nodes:
//! - Fixed 7-byte header with sub-byte bitfields
//! - Typed payload of up to 25 bytes selected by a tag
//! - Chained builder and typed getters
//! - Binary and hex encode / decode

pub mod bitfield;
pub mod config;
pub mod header;
pub mod hex;
pub mod message;
pub mod payload;

pub use bitfield::*;
pub use config::*;
pub use header::*;
pub use message::*;
pub use payload::*;
