//! Typed payload store
//!
//! The payload is a fixed 26-byte region: 25 transmittable bytes plus one
//! byte for a string terminator that never goes on the air. The payload
//! type tag in the header selects how the region is read. Multi-byte values
//! are stored little-endian.
//!
//! Shared layouts:
//! - Bytes 0..4: 16/32-bit integers and the float value
//! - Byte 4: float decimal precision (local only, not transmitted)
//! - Bytes 0..2: library version and sensor type of a presentation

use std::borrow::Cow;

use mysensors_core::{PayloadType, SensorType, MAX_FLOAT_PRECISION, MAX_PAYLOAD};

use crate::hex;

/// Region size including the local terminator byte
pub const PAYLOAD_CAPACITY: usize = MAX_PAYLOAD + 1;

/// Offset of the float precision byte
const PRECISION_OFFSET: usize = 4;

/// A payload value together with its representation tag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PayloadValue<'a> {
    Str(&'a [u8]),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Long32(i32),
    ULong32(u32),
    Custom(&'a [u8]),
    Float32 { value: f32, precision: u8 },
}

impl PayloadValue<'_> {
    pub fn payload_type(&self) -> PayloadType {
        match self {
            PayloadValue::Str(_) => PayloadType::String,
            PayloadValue::Byte(_) => PayloadType::Byte,
            PayloadValue::Int16(_) => PayloadType::Int16,
            PayloadValue::UInt16(_) => PayloadType::UInt16,
            PayloadValue::Long32(_) => PayloadType::Long32,
            PayloadValue::ULong32(_) => PayloadType::ULong32,
            PayloadValue::Custom(_) => PayloadType::Custom,
            PayloadValue::Float32 { .. } => PayloadType::Float32,
        }
    }
}

/// Text ends at the first NUL, as it would on the node
impl<'a> From<&'a str> for PayloadValue<'a> {
    fn from(s: &'a str) -> Self {
        let bytes = s.as_bytes();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        PayloadValue::Str(&bytes[..end])
    }
}

impl<'a> From<&'a [u8]> for PayloadValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        PayloadValue::Custom(bytes)
    }
}

impl From<bool> for PayloadValue<'_> {
    fn from(v: bool) -> Self {
        PayloadValue::Byte(v as u8)
    }
}

impl From<u8> for PayloadValue<'_> {
    fn from(v: u8) -> Self {
        PayloadValue::Byte(v)
    }
}

/// Stored as its two's-complement byte
impl From<i8> for PayloadValue<'_> {
    fn from(v: i8) -> Self {
        PayloadValue::Byte(v as u8)
    }
}

impl From<i16> for PayloadValue<'_> {
    fn from(v: i16) -> Self {
        PayloadValue::Int16(v)
    }
}

impl From<u16> for PayloadValue<'_> {
    fn from(v: u16) -> Self {
        PayloadValue::UInt16(v)
    }
}

impl From<i32> for PayloadValue<'_> {
    fn from(v: i32) -> Self {
        PayloadValue::Long32(v)
    }
}

impl From<u32> for PayloadValue<'_> {
    fn from(v: u32) -> Self {
        PayloadValue::ULong32(v)
    }
}

/// Backing bytes of a message payload.
///
/// Reads never check the tag: asking for an `i16` out of a string payload
/// returns whatever the first two bytes happen to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payload {
    data: [u8; PAYLOAD_CAPACITY],
}

impl Default for Payload {
    fn default() -> Self {
        Payload::new()
    }
}

impl Payload {
    pub const fn new() -> Self {
        Payload {
            data: [0u8; PAYLOAD_CAPACITY],
        }
    }

    /// Store `value`, returning the tag and the transmitted length.
    ///
    /// Variable-width values longer than `MAX_PAYLOAD` are cut off.
    pub fn write(&mut self, value: PayloadValue<'_>) -> (PayloadType, u8) {
        self.data = [0u8; PAYLOAD_CAPACITY];

        let len = match value {
            PayloadValue::Str(bytes) | PayloadValue::Custom(bytes) => {
                let len = bytes.len().min(MAX_PAYLOAD);
                if len < bytes.len() {
                    tracing::trace!(
                        requested = bytes.len(),
                        stored = len,
                        "payload truncated to capacity"
                    );
                }
                self.data[..len].copy_from_slice(&bytes[..len]);
                // data[len] stays zero as the terminator
                len
            }
            PayloadValue::Byte(v) => self.put(&[v]),
            PayloadValue::Int16(v) => self.put(&v.to_le_bytes()),
            PayloadValue::UInt16(v) => self.put(&v.to_le_bytes()),
            PayloadValue::Long32(v) => self.put(&v.to_le_bytes()),
            PayloadValue::ULong32(v) => self.put(&v.to_le_bytes()),
            PayloadValue::Float32 { value, precision } => {
                self.data[PRECISION_OFFSET] = precision;
                self.put(&value.to_le_bytes())
            }
        };

        (value.payload_type(), len as u8)
    }

    fn put(&mut self, bytes: &[u8]) -> usize {
        self.data[..bytes.len()].copy_from_slice(bytes);
        bytes.len()
    }

    /// Replace the region with received bytes, zeroing the remainder
    pub(crate) fn load(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(MAX_PAYLOAD);
        self.data = [0u8; PAYLOAD_CAPACITY];
        self.data[..len].copy_from_slice(&bytes[..len]);
    }

    /// Read the payload the way `payload_type` says it was written
    pub fn read(&self, payload_type: PayloadType, len: u8) -> PayloadValue<'_> {
        match payload_type {
            PayloadType::String => PayloadValue::Str(self.bytes(len)),
            PayloadType::Byte => PayloadValue::Byte(self.byte()),
            PayloadType::Int16 => PayloadValue::Int16(self.int16()),
            PayloadType::UInt16 => PayloadValue::UInt16(self.uint16()),
            PayloadType::Long32 => PayloadValue::Long32(self.long32()),
            PayloadType::ULong32 => PayloadValue::ULong32(self.ulong32()),
            PayloadType::Custom => PayloadValue::Custom(self.bytes(len)),
            PayloadType::Float32 => PayloadValue::Float32 {
                value: self.float32(),
                precision: self.precision(),
            },
        }
    }

    /// First `len` bytes, capped at `MAX_PAYLOAD`
    #[inline]
    pub fn bytes(&self, len: u8) -> &[u8] {
        &self.data[..(len as usize).min(MAX_PAYLOAD)]
    }

    /// Whole region including the terminator byte
    #[inline]
    pub fn raw(&self) -> &[u8; PAYLOAD_CAPACITY] {
        &self.data
    }

    #[inline]
    pub fn byte(&self) -> u8 {
        self.data[0]
    }

    #[inline]
    pub fn bool(&self) -> bool {
        self.data[0] != 0
    }

    #[inline]
    pub fn int16(&self) -> i16 {
        i16::from_le_bytes([self.data[0], self.data[1]])
    }

    #[inline]
    pub fn uint16(&self) -> u16 {
        u16::from_le_bytes([self.data[0], self.data[1]])
    }

    #[inline]
    pub fn long32(&self) -> i32 {
        i32::from_le_bytes(self.quad())
    }

    #[inline]
    pub fn ulong32(&self) -> u32 {
        u32::from_le_bytes(self.quad())
    }

    #[inline]
    pub fn float32(&self) -> f32 {
        f32::from_le_bytes(self.quad())
    }

    /// Decimals used when rendering a float
    #[inline]
    pub fn precision(&self) -> u8 {
        self.data[PRECISION_OFFSET]
    }

    #[inline]
    fn quad(&self) -> [u8; 4] {
        [self.data[0], self.data[1], self.data[2], self.data[3]]
    }

    /// Library version byte of a presentation payload
    #[inline]
    pub fn presentation_version(&self) -> u8 {
        self.data[0]
    }

    /// Sensor type byte of a presentation payload, if it names a known type
    #[inline]
    pub fn presentation_sensor_type(&self) -> Option<SensorType> {
        SensorType::from_byte(self.data[1])
    }

    /// Render the payload as text.
    ///
    /// Strings are borrowed when they are valid UTF-8. Custom payloads come
    /// out as hex, floats with their stored precision capped at
    /// `MAX_FLOAT_PRECISION`.
    pub fn render(&self, payload_type: PayloadType, len: u8) -> Cow<'_, str> {
        match self.read(payload_type, len) {
            PayloadValue::Str(bytes) => String::from_utf8_lossy(bytes),
            PayloadValue::Byte(v) => Cow::Owned(v.to_string()),
            PayloadValue::Int16(v) => Cow::Owned(v.to_string()),
            PayloadValue::UInt16(v) => Cow::Owned(v.to_string()),
            PayloadValue::Long32(v) => Cow::Owned(v.to_string()),
            PayloadValue::ULong32(v) => Cow::Owned(v.to_string()),
            PayloadValue::Custom(bytes) => Cow::Owned(hex::encode(bytes)),
            PayloadValue::Float32 { value, precision } => {
                let decimals = precision.min(MAX_FLOAT_PRECISION) as usize;
                Cow::Owned(format!("{:.*}", decimals, value))
            }
        }
    }
}
