//! Sub-byte header fields
//!
//! Two header bytes multiplex several small fields, least significant bit
//! first:
//! - `version_length`: version (2) | signed (1) | length (5)
//! - `command_ack_payload`: command (3) | request ack (1) | is ack (1) | payload type (3)
//!
//! Inserting a value wider than its field keeps only the low-order bits.
//! There is no range check on purpose: callers on constrained nodes rely on
//! the masking behaviour.

use mysensors_core::{Command, PayloadType};

/// A `len`-bit field starting at bit `start` of a byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitField {
    pub start: u8,
    pub len: u8,
}

impl BitField {
    pub const VERSION: BitField = BitField::new(0, 2);
    pub const SIGNED: BitField = BitField::new(2, 1);
    pub const LENGTH: BitField = BitField::new(3, 5);

    pub const COMMAND: BitField = BitField::new(0, 3);
    pub const REQUEST_ACK: BitField = BitField::new(3, 1);
    pub const ACK: BitField = BitField::new(4, 1);
    pub const PAYLOAD_TYPE: BitField = BitField::new(5, 3);

    /// `start + len` must not exceed 8
    #[inline]
    pub const fn new(start: u8, len: u8) -> Self {
        BitField { start, len }
    }

    /// Mask of `len` low-order bits
    #[inline]
    pub const fn value_mask(self) -> u8 {
        ((1u16 << self.len) - 1) as u8
    }

    /// Mask of the field in place
    #[inline]
    pub const fn mask(self) -> u8 {
        self.value_mask() << self.start
    }

    /// Extract the field from `container`
    #[inline]
    pub const fn get(self, container: u8) -> u8 {
        (container >> self.start) & self.value_mask()
    }

    /// Return `container` with the field replaced by the low bits of `value`
    #[inline]
    pub const fn insert(self, container: u8, value: u8) -> u8 {
        (container & !self.mask()) | ((value & self.value_mask()) << self.start)
    }

    /// In-place variant of [`BitField::insert`]
    #[inline]
    pub fn set(self, container: &mut u8, value: u8) {
        *container = self.insert(*container, value);
    }
}

/// Header byte 3: version, signed flag and payload length
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VersionLength(pub u8);

impl VersionLength {
    #[inline]
    pub fn new(bits: u8) -> Self {
        VersionLength(bits)
    }

    #[inline]
    pub fn version(self) -> u8 {
        BitField::VERSION.get(self.0)
    }

    #[inline]
    pub fn is_signed(self) -> bool {
        BitField::SIGNED.get(self.0) != 0
    }

    #[inline]
    pub fn length(self) -> u8 {
        BitField::LENGTH.get(self.0)
    }

    #[inline]
    pub fn set_version(&mut self, version: u8) {
        BitField::VERSION.set(&mut self.0, version);
    }

    #[inline]
    pub fn set_signed(&mut self, value: bool) {
        BitField::SIGNED.set(&mut self.0, value as u8);
    }

    #[inline]
    pub fn set_length(&mut self, length: u8) {
        BitField::LENGTH.set(&mut self.0, length);
    }
}

/// Header byte 4: command, ack flags and payload type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandAckPayload(pub u8);

impl CommandAckPayload {
    #[inline]
    pub fn new(bits: u8) -> Self {
        CommandAckPayload(bits)
    }

    /// Raw 3-bit command, which may hold values no [`Command`] maps to
    #[inline]
    pub fn command_bits(self) -> u8 {
        BitField::COMMAND.get(self.0)
    }

    #[inline]
    pub fn command(self) -> Option<Command> {
        Command::from_byte(self.command_bits())
    }

    #[inline]
    pub fn request_ack(self) -> bool {
        BitField::REQUEST_ACK.get(self.0) != 0
    }

    #[inline]
    pub fn is_ack(self) -> bool {
        BitField::ACK.get(self.0) != 0
    }

    #[inline]
    pub fn payload_type(self) -> PayloadType {
        PayloadType::from_bits(BitField::PAYLOAD_TYPE.get(self.0))
    }

    #[inline]
    pub fn set_command_bits(&mut self, command: u8) {
        BitField::COMMAND.set(&mut self.0, command);
    }

    #[inline]
    pub fn set_command(&mut self, command: Command) {
        self.set_command_bits(command.to_byte());
    }

    #[inline]
    pub fn set_request_ack(&mut self, value: bool) {
        BitField::REQUEST_ACK.set(&mut self.0, value as u8);
    }

    #[inline]
    pub fn set_ack(&mut self, value: bool) {
        BitField::ACK.set(&mut self.0, value as u8);
    }

    #[inline]
    pub fn set_payload_type(&mut self, payload_type: PayloadType) {
        BitField::PAYLOAD_TYPE.set(&mut self.0, payload_type.to_byte());
    }
}

impl From<u8> for VersionLength {
    fn from(bits: u8) -> Self {
        VersionLength(bits)
    }
}

impl From<VersionLength> for u8 {
    fn from(field: VersionLength) -> Self {
        field.0
    }
}

impl From<u8> for CommandAckPayload {
    fn from(bits: u8) -> Self {
        CommandAckPayload(bits)
    }
}

impl From<CommandAckPayload> for u8 {
    fn from(field: CommandAckPayload) -> Self {
        field.0
    }
}
