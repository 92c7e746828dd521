//! Header tag definitions
//!
//! Two 3-bit tags live in the `command_ack_payload` header byte:
//! - Command: what kind of message this is
//! - Payload type: how the payload bytes are to be interpreted

/// Top-level message kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Sent by a node when it presents attached sensors, usually at startup
    Presentation = 0,
    /// Sent from or to a sensor when a value should be updated
    Set = 1,
    /// Requests a variable value
    Req = 2,
    /// Messages generated by the protocol library itself
    Internal = 3,
    /// Firmware and other larger chunks of data split into pieces
    Stream = 4,
}

impl Default for Command {
    fn default() -> Self {
        Command::Presentation
    }
}

impl Command {
    /// Parse from the 3-bit wire value
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Command::Presentation),
            1 => Some(Command::Set),
            2 => Some(Command::Req),
            3 => Some(Command::Internal),
            4 => Some(Command::Stream),
            _ => None,
        }
    }

    /// Convert to wire value
    #[inline]
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

/// Payload representation tag
///
/// All eight 3-bit values are assigned, so decoding a tag never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PayloadType {
    /// Raw characters, terminated locally but not on the air
    String = 0,
    /// Single unsigned byte (also used for booleans)
    Byte = 1,
    Int16 = 2,
    UInt16 = 3,
    Long32 = 4,
    ULong32 = 5,
    /// Opaque binary, no fixed width
    Custom = 6,
    /// 32-bit float plus a local decimal precision byte
    Float32 = 7,
}

impl Default for PayloadType {
    fn default() -> Self {
        PayloadType::String
    }
}

impl PayloadType {
    /// Decode from the low three bits of `b`
    pub fn from_bits(b: u8) -> Self {
        match b & 0x07 {
            0 => PayloadType::String,
            1 => PayloadType::Byte,
            2 => PayloadType::Int16,
            3 => PayloadType::UInt16,
            4 => PayloadType::Long32,
            5 => PayloadType::ULong32,
            6 => PayloadType::Custom,
            _ => PayloadType::Float32,
        }
    }

    #[inline]
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Transmitted width of the representation, `None` for variable-width tags
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            PayloadType::Byte => Some(1),
            PayloadType::Int16 | PayloadType::UInt16 => Some(2),
            PayloadType::Long32 | PayloadType::ULong32 | PayloadType::Float32 => Some(4),
            PayloadType::String | PayloadType::Custom => None,
        }
    }
}
