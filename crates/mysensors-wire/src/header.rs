//! Fixed message header
//!
//! Header is 7 bytes:
//! - Byte 0: Last relay node id
//! - Byte 1: Sender node id
//! - Byte 2: Destination node id
//! - Byte 3: Version (2 bits) + Signed (1 bit) + Length (5 bits)
//! - Byte 4: Command (3 bits) + Request ack (1 bit) + Is ack (1 bit) + Payload type (3 bits)
//! - Byte 5: Sub-type, meaning depends on command
//! - Byte 6: Child sensor id

use mysensors_core::{MessageError, MessageResult, HEADER_SIZE};

use crate::{CommandAckPayload, VersionLength};

/// Fixed header structure
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    /// Id of the last node this message passed
    pub last: u8,
    /// Id of the origin node
    pub sender: u8,
    /// Id of the target node
    pub destination: u8,
    pub version_length: VersionLength,
    pub command_ack_payload: CommandAckPayload,
    /// Sub-type, see [`mysensors_core::SubType`]
    pub msg_type: u8,
    /// Child sensor id within the node
    pub sensor: u8,
}

impl Header {
    /// Parse header from bytes
    ///
    /// Only the size is checked here; the payload length is validated by
    /// the message parser.
    pub fn parse(buf: &[u8]) -> MessageResult<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(MessageError::BufferTooShort {
                expected: HEADER_SIZE,
                actual: buf.len(),
            });
        }

        Ok(Header {
            last: buf[0],
            sender: buf[1],
            destination: buf[2],
            version_length: VersionLength::new(buf[3]),
            command_ack_payload: CommandAckPayload::new(buf[4]),
            msg_type: buf[5],
            sensor: buf[6],
        })
    }

    /// Serialize header to bytes
    pub fn serialize(&self, buf: &mut [u8]) -> MessageResult<()> {
        if buf.len() < HEADER_SIZE {
            return Err(MessageError::BufferTooShort {
                expected: HEADER_SIZE,
                actual: buf.len(),
            });
        }

        buf[..HEADER_SIZE].copy_from_slice(&self.to_array());
        Ok(())
    }

    /// Header bytes in wire order
    #[inline]
    pub fn to_array(&self) -> [u8; HEADER_SIZE] {
        [
            self.last,
            self.sender,
            self.destination,
            self.version_length.0,
            self.command_ack_payload.0,
            self.msg_type,
            self.sensor,
        ]
    }
}
