//! Protocol constants

/// The version of the protocol carried in the 2-bit version sub-field
pub const PROTOCOL_VERSION: u8 = 2;

/// Maximum size of a message on the air, header included
pub const MAX_MESSAGE_LENGTH: usize = 32;

/// Fixed header size in bytes
pub const HEADER_SIZE: usize = 7;

/// Payload capacity
pub const MAX_PAYLOAD: usize = MAX_MESSAGE_LENGTH - HEADER_SIZE;

/// Length of the hex form of a maximum-size message (terminator excluded)
pub const MAX_HEX_LENGTH: usize = 2 * MAX_MESSAGE_LENGTH;

/// Upper bound on decimals when rendering a float payload
pub const MAX_FLOAT_PRECISION: u8 = 8;
