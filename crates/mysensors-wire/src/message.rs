//! MySensors message: header plus typed payload
//!
//! A message is a plain value. It is filled in through chained setters,
//! handed to a transport as bytes or hex, and then dropped or reused.

use std::borrow::Cow;
use std::io::IoSlice;

use bytes::{Buf, BufMut};
use mysensors_core::{
    Command, MessageError, MessageResult, PayloadType, SensorType, SubType, HEADER_SIZE,
    MAX_HEX_LENGTH, MAX_PAYLOAD, PROTOCOL_VERSION,
};

use crate::{hex, Header, ParseConfig, Payload, PayloadValue};

/// A complete message
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Message {
    header: Header,
    payload: Payload,
}

impl Message {
    /// All fields zero
    pub fn new() -> Self {
        Message::default()
    }

    /// A set message for `sensor` carrying sub-type `msg_type`
    pub fn with_sensor(sensor: u8, msg_type: u8) -> Self {
        let mut msg = Message::new();
        msg.header.sensor = sensor;
        msg.header.msg_type = msg_type;
        msg.header.command_ack_payload.set_command(Command::Set);
        msg.header
            .command_ack_payload
            .set_payload_type(PayloadType::String);
        msg
    }

    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    // Routing fields

    #[inline]
    pub fn last(&self) -> u8 {
        self.header.last
    }

    #[inline]
    pub fn sender(&self) -> u8 {
        self.header.sender
    }

    #[inline]
    pub fn destination(&self) -> u8 {
        self.header.destination
    }

    #[inline]
    pub fn sensor(&self) -> u8 {
        self.header.sensor
    }

    #[inline]
    pub fn msg_type(&self) -> u8 {
        self.header.msg_type
    }

    pub fn set_type(&mut self, msg_type: u8) -> &mut Self {
        self.header.msg_type = msg_type;
        self
    }

    pub fn set_sensor(&mut self, sensor: u8) -> &mut Self {
        self.header.sensor = sensor;
        self
    }

    pub fn set_destination(&mut self, destination: u8) -> &mut Self {
        self.header.destination = destination;
        self
    }

    pub fn set_sender(&mut self, sender: u8) -> &mut Self {
        self.header.sender = sender;
        self
    }

    pub fn set_last(&mut self, last: u8) -> &mut Self {
        self.header.last = last;
        self
    }

    // Bitfields

    #[inline]
    pub fn version(&self) -> u8 {
        self.header.version_length.version()
    }

    /// Only the low two bits are kept
    pub fn set_version(&mut self, version: u8) -> &mut Self {
        self.header.version_length.set_version(version);
        self
    }

    #[inline]
    pub fn is_signed(&self) -> bool {
        self.header.version_length.is_signed()
    }

    pub fn set_signed(&mut self, signed: bool) -> &mut Self {
        self.header.version_length.set_signed(signed);
        self
    }

    /// Number of payload bytes that go on the air
    #[inline]
    pub fn length(&self) -> u8 {
        self.header.version_length.length()
    }

    /// Raw 3-bit command field
    #[inline]
    pub fn get_command(&self) -> u8 {
        self.header.command_ack_payload.command_bits()
    }

    #[inline]
    pub fn command(&self) -> Option<Command> {
        self.header.command_ack_payload.command()
    }

    pub fn set_command(&mut self, command: Command) -> &mut Self {
        self.header.command_ack_payload.set_command(command);
        self
    }

    #[inline]
    pub fn request_ack(&self) -> bool {
        self.header.command_ack_payload.request_ack()
    }

    pub fn set_request_ack(&mut self, request: bool) -> &mut Self {
        self.header.command_ack_payload.set_request_ack(request);
        self
    }

    /// True if this message is itself an acknowledgement
    #[inline]
    pub fn is_ack(&self) -> bool {
        self.header.command_ack_payload.is_ack()
    }

    pub fn set_ack(&mut self, ack: bool) -> &mut Self {
        self.header.command_ack_payload.set_ack(ack);
        self
    }

    #[inline]
    pub fn payload_type(&self) -> PayloadType {
        self.header.command_ack_payload.payload_type()
    }

    /// The `type` byte decoded against the command
    pub fn sub_type(&self) -> Option<SubType> {
        SubType::decode(self.command()?, self.header.msg_type)
    }

    /// Version matches `PROTOCOL_VERSION` and length fits the payload
    pub fn is_valid(&self) -> bool {
        self.version() == PROTOCOL_VERSION && self.length() as usize <= MAX_PAYLOAD
    }

    // Payload setters

    /// Store a typed value and update payload type and length to match
    pub fn set<'a>(&mut self, value: impl Into<PayloadValue<'a>>) -> &mut Self {
        let (payload_type, len) = self.payload.write(value.into());
        self.header
            .command_ack_payload
            .set_payload_type(payload_type);
        self.header.version_length.set_length(len);
        self
    }

    /// Store a float rendered with `decimals` digits after the point
    pub fn set_float(&mut self, value: f32, decimals: u8) -> &mut Self {
        self.set(PayloadValue::Float32 {
            value,
            precision: decimals,
        })
    }

    /// Store raw binary data as a custom payload
    pub fn set_custom(&mut self, data: &[u8]) -> &mut Self {
        self.set(PayloadValue::Custom(data))
    }

    // Payload getters. None of these look at the payload type.

    /// The payload as tagged by the header
    pub fn value(&self) -> PayloadValue<'_> {
        self.payload.read(self.payload_type(), self.length())
    }

    #[inline]
    pub fn get_bool(&self) -> bool {
        self.payload.bool()
    }

    #[inline]
    pub fn get_byte(&self) -> u8 {
        self.payload.byte()
    }

    #[inline]
    pub fn get_int(&self) -> i16 {
        self.payload.int16()
    }

    #[inline]
    pub fn get_uint(&self) -> u16 {
        self.payload.uint16()
    }

    #[inline]
    pub fn get_long(&self) -> i32 {
        self.payload.long32()
    }

    #[inline]
    pub fn get_ulong(&self) -> u32 {
        self.payload.ulong32()
    }

    #[inline]
    pub fn get_float(&self) -> f32 {
        self.payload.float32()
    }

    /// Payload bytes that go on the air
    #[inline]
    pub fn get_custom(&self) -> &[u8] {
        self.payload.bytes(self.length())
    }

    /// Payload rendered as text according to its type.
    ///
    /// A string payload is borrowed without copying.
    pub fn get_string(&self) -> Cow<'_, str> {
        self.payload.render(self.payload_type(), self.length())
    }

    /// Hex of the payload bytes, only for stream messages
    pub fn get_stream(&self) -> Option<String> {
        match self.command() {
            Some(Command::Stream) => Some(hex::encode(self.get_custom())),
            _ => None,
        }
    }

    #[inline]
    pub fn presentation_version(&self) -> u8 {
        self.payload.presentation_version()
    }

    #[inline]
    pub fn presentation_sensor_type(&self) -> Option<SensorType> {
        self.payload.presentation_sensor_type()
    }

    // Binary form

    /// Header plus `length` payload bytes
    #[inline]
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.length() as usize
    }

    /// Write the wire form into `buf`, returning the number of bytes used
    pub fn serialize(&self, buf: &mut [u8]) -> MessageResult<usize> {
        let size = self.wire_size();
        if buf.len() < size {
            return Err(MessageError::BufferTooShort {
                expected: size,
                actual: buf.len(),
            });
        }

        self.header.serialize(buf)?;
        buf[HEADER_SIZE..size].copy_from_slice(self.get_custom());
        Ok(size)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.wire_size());
        self.encode(&mut buf);
        buf
    }

    /// Append the wire form to `buf`
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.header.to_array());
        buf.put_slice(self.get_custom());
    }

    /// Parse with the default (lenient) configuration
    pub fn parse(buf: &[u8]) -> MessageResult<Self> {
        Self::parse_with(buf, &ParseConfig::default())
    }

    /// Parse a message from the start of `buf`.
    ///
    /// Bytes past `HEADER_SIZE + length` are ignored, so fixed-size radio
    /// frames can be passed in whole.
    pub fn parse_with(buf: &[u8], config: &ParseConfig) -> MessageResult<Self> {
        let header = Header::parse(buf)?;
        let len = check_header(&header, config)?;

        let end = HEADER_SIZE + len;
        if buf.len() < end {
            tracing::debug!(expected = end, actual = buf.len(), "truncated message");
            return Err(MessageError::BufferTooShort {
                expected: end,
                actual: buf.len(),
            });
        }

        let mut payload = Payload::new();
        payload.load(&buf[HEADER_SIZE..end]);
        Ok(Message { header, payload })
    }

    /// Read one message from `buf`, consuming exactly its wire size.
    ///
    /// On error nothing is consumed, so a partial frame can be retried once
    /// more bytes arrive.
    pub fn decode<B: Buf>(buf: &mut B, config: &ParseConfig) -> MessageResult<Self> {
        let head = peek_header(buf)?;
        let header = Header::parse(&head)?;
        let len = check_header(&header, config)?;

        let size = HEADER_SIZE + len;
        if buf.remaining() < size {
            tracing::debug!(expected = size, actual = buf.remaining(), "truncated payload");
            return Err(MessageError::BufferTooShort {
                expected: size,
                actual: buf.remaining(),
            });
        }

        buf.advance(HEADER_SIZE);
        let mut body = [0u8; MAX_PAYLOAD];
        buf.copy_to_slice(&mut body[..len]);

        let mut payload = Payload::new();
        payload.load(&body[..len]);
        Ok(Message { header, payload })
    }

    // Hex form

    /// Header and payload bytes as lowercase hex, two characters per byte
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.wire_size() * 2);
        hex::encode_into(&self.header.to_array(), &mut out);
        hex::encode_into(self.get_custom(), &mut out);
        out
    }

    pub fn from_hex(text: &str) -> MessageResult<Self> {
        Self::from_hex_with(text, &ParseConfig::default())
    }

    /// Parse the hex form, which must hold exactly `HEADER_SIZE + length` bytes
    pub fn from_hex_with(text: &str, config: &ParseConfig) -> MessageResult<Self> {
        if text.len() > MAX_HEX_LENGTH {
            tracing::debug!(length = text.len(), "hex message too long");
            return Err(MessageError::HexTooLong(text.len()));
        }

        let bytes = hex::decode(text).map_err(|e| {
            tracing::debug!(error = %e, "rejected hex message");
            e
        })?;
        let msg = Self::parse_with(&bytes, config)?;

        if bytes.len() != msg.wire_size() {
            tracing::debug!(
                expected = msg.wire_size(),
                actual = bytes.len(),
                "trailing bytes in hex message"
            );
            return Err(MessageError::LengthMismatch {
                expected: msg.wire_size(),
                actual: bytes.len(),
            });
        }

        Ok(msg)
    }
}

/// Copy the header out of `buf` without advancing it
fn peek_header<B: Buf>(buf: &B) -> MessageResult<[u8; HEADER_SIZE]> {
    let mut head = [0u8; HEADER_SIZE];

    let chunk = buf.chunk();
    if chunk.len() >= HEADER_SIZE {
        head.copy_from_slice(&chunk[..HEADER_SIZE]);
        return Ok(head);
    }

    // Header split across chunks
    let mut slices = [IoSlice::new(&[]); HEADER_SIZE];
    let count = buf.chunks_vectored(&mut slices);
    let mut filled = 0;
    for slice in &slices[..count] {
        let take = (HEADER_SIZE - filled).min(slice.len());
        head[filled..filled + take].copy_from_slice(&slice[..take]);
        filled += take;
        if filled == HEADER_SIZE {
            return Ok(head);
        }
    }

    Err(MessageError::BufferTooShort {
        expected: HEADER_SIZE,
        actual: filled,
    })
}

/// Validate the header fields that bound the payload, returning its length
fn check_header(header: &Header, config: &ParseConfig) -> MessageResult<usize> {
    let version = header.version_length.version();
    if config.require_version && version != PROTOCOL_VERSION {
        tracing::debug!(version, "unsupported protocol version");
        return Err(MessageError::UnsupportedVersion(version));
    }

    let len = header.version_length.length();
    if len as usize > MAX_PAYLOAD {
        tracing::debug!(length = len, "payload length exceeds capacity");
        return Err(MessageError::InvalidLength(len));
    }

    Ok(len as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mysensors_core::{DataType, InternalType, StreamType, MAX_MESSAGE_LENGTH};
    use proptest::prelude::*;

    #[test]
    fn test_default_is_zero() {
        let msg = Message::new();
        assert_eq!(msg.to_bytes(), vec![0u8; HEADER_SIZE]);
        assert_eq!(msg.command(), Some(Command::Presentation));
        assert_eq!(msg.payload_type(), PayloadType::String);
        assert_eq!(msg.length(), 0);
    }

    #[test]
    fn test_with_sensor_defaults() {
        let msg = Message::with_sensor(3, 5);
        assert_eq!(msg.sensor(), 3);
        assert_eq!(msg.msg_type(), 5);
        assert_eq!(msg.command(), Some(Command::Set));
        assert_eq!(msg.payload_type(), PayloadType::String);
        assert_eq!(msg.destination(), 0);
        assert!(!msg.is_ack());
    }

    #[test]
    fn test_uint16_end_to_end() {
        let mut msg = Message::with_sensor(3, 5);
        msg.set(1234u16).set_destination(10);

        assert_eq!(msg.payload_type(), PayloadType::UInt16);
        assert_eq!(msg.length(), 2);
        assert_eq!(msg.get_uint(), 1234);
        assert_eq!(msg.destination(), 10);

        // 1234 = 0x04d2, little-endian on the wire
        let hex = msg.to_hex();
        assert_eq!(hex.len(), 2 * (HEADER_SIZE + 2));
        assert_eq!(&hex[2 * HEADER_SIZE..], "d204");
        assert_eq!(hex, "00000a10610503d204");
    }

    #[test]
    fn test_string_end_to_end() {
        let mut msg = Message::with_sensor(1, DataType::Text.to_byte());
        msg.set("hello");

        assert_eq!(msg.length(), 5);
        assert_eq!(msg.payload_type(), PayloadType::String);
        assert_eq!(msg.get_string(), "hello");
        assert!(matches!(msg.get_string(), Cow::Borrowed(_)));
        assert_eq!(msg.payload().raw()[5], 0);
        assert_eq!(msg.to_bytes().len(), HEADER_SIZE + 5);
    }

    #[test]
    fn test_chained_setters() {
        let mut msg = Message::new();
        msg.set_sensor(9)
            .set_type(DataType::Temp.to_byte())
            .set_destination(0)
            .set_sender(42)
            .set_last(7)
            .set_command(Command::Set)
            .set_request_ack(true)
            .set_float(21.56, 1);

        assert_eq!(msg.sensor(), 9);
        assert_eq!(msg.sender(), 42);
        assert_eq!(msg.last(), 7);
        assert!(msg.request_ack());
        assert_eq!(msg.payload_type(), PayloadType::Float32);
        assert_eq!(msg.length(), 4);
        assert_eq!(msg.get_float(), 21.56);
        assert_eq!(msg.get_string(), "21.6");
        assert_eq!(msg.sub_type(), Some(SubType::Data(DataType::Temp)));
    }

    #[test]
    fn test_every_setter_width() {
        let mut msg = Message::new();
        assert_eq!(msg.set(true).length(), 1);
        assert!(msg.get_bool());
        assert_eq!(msg.set(200u8).length(), 1);
        assert_eq!(msg.get_byte(), 200);
        assert_eq!(msg.set(-2i16).length(), 2);
        assert_eq!(msg.get_int(), -2);
        assert_eq!(msg.set(-70_000i32).length(), 4);
        assert_eq!(msg.get_long(), -70_000);
        assert_eq!(msg.set(70_000u32).length(), 4);
        assert_eq!(msg.get_ulong(), 70_000);
        assert_eq!(msg.set_custom(&[1, 2, 3]).length(), 3);
        assert_eq!(msg.get_custom(), &[1, 2, 3]);
        assert_eq!(msg.payload_type(), PayloadType::Custom);
    }

    #[test]
    fn test_payload_does_not_touch_flags() {
        let mut msg = Message::with_sensor(1, 2);
        msg.set_command(Command::Internal).set_ack(true);

        msg.set("some text").set(-5i32).set_float(1.0, 2).set_custom(&[0xFF; 25]);

        assert!(msg.is_ack());
        assert_eq!(msg.get_command(), Command::Internal.to_byte());
    }

    #[test]
    fn test_flags_do_not_touch_payload() {
        let mut msg = Message::new();
        msg.set(0xBEEFu16);
        msg.set_ack(true)
            .set_request_ack(true)
            .set_command(Command::Stream)
            .set_signed(true)
            .set_version(PROTOCOL_VERSION);

        assert_eq!(msg.get_uint(), 0xBEEF);
        assert_eq!(msg.length(), 2);
        assert_eq!(msg.payload_type(), PayloadType::UInt16);
    }

    #[test]
    fn test_version_truncation() {
        let mut msg = Message::new();
        msg.set_version(6); // 0b110
        assert_eq!(msg.version(), 2);
        assert!(msg.is_valid());
    }

    #[test]
    fn test_stream_hex() {
        let mut msg = Message::with_sensor(255, StreamType::FirmwareResponse.to_byte());
        msg.set_custom(&[0x0A, 0xBC]);
        assert_eq!(msg.get_stream(), None);

        msg.set_command(Command::Stream);
        assert_eq!(msg.get_stream().as_deref(), Some("0abc"));
    }

    #[test]
    fn test_presentation_payload() {
        let mut msg = Message::new();
        msg.set_command(Command::Presentation)
            .set_type(SensorType::Hum.to_byte())
            .set_custom(&[2, SensorType::Hum.to_byte()]);

        assert_eq!(msg.sub_type(), Some(SubType::Sensor(SensorType::Hum)));
        assert_eq!(msg.presentation_version(), 2);
        assert_eq!(msg.presentation_sensor_type(), Some(SensorType::Hum));
    }

    #[test]
    fn test_internal_sub_type() {
        let mut msg = Message::new();
        msg.set_command(Command::Internal)
            .set_type(InternalType::BatteryLevel.to_byte())
            .set(87u8);
        assert_eq!(
            msg.sub_type(),
            Some(SubType::Internal(InternalType::BatteryLevel))
        );
        assert_eq!(msg.get_string(), "87");
    }

    #[test]
    fn test_parse_roundtrip() {
        let mut msg = Message::with_sensor(4, DataType::Hum.to_byte());
        msg.set_sender(12).set_version(PROTOCOL_VERSION).set(-321i16);

        let bytes = msg.to_bytes();
        let parsed = Message::parse_with(&bytes, &ParseConfig::strict()).unwrap();
        assert_eq!(parsed, msg);
        assert_eq!(parsed.get_int(), -321);
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let mut msg = Message::new();
        msg.set("ab");
        let mut frame = [0xAAu8; MAX_MESSAGE_LENGTH];
        let used = msg.serialize(&mut frame).unwrap();
        assert_eq!(used, HEADER_SIZE + 2);

        let parsed = Message::parse(&frame).unwrap();
        assert_eq!(parsed.get_string(), "ab");
        assert_eq!(parsed.payload().raw()[2], 0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Message::parse(&[0u8; 3]),
            Err(MessageError::BufferTooShort {
                expected: HEADER_SIZE,
                actual: 3
            })
        );

        // length = 26
        let bytes: [u8; 7] = [0, 0, 0, 26 << 3, 0, 0, 0];
        assert_eq!(Message::parse(&bytes), Err(MessageError::InvalidLength(26)));

        // length = 4, only 2 present
        let bytes: [u8; 9] = [0, 0, 0, 4 << 3, 0, 0, 0, 1, 2];
        assert_eq!(
            Message::parse(&bytes),
            Err(MessageError::BufferTooShort {
                expected: 11,
                actual: 9
            })
        );

        let bytes = [0u8; HEADER_SIZE];
        assert_eq!(
            Message::parse_with(&bytes, &ParseConfig::strict()),
            Err(MessageError::UnsupportedVersion(0))
        );
        assert!(Message::parse(&bytes).is_ok());
    }

    #[test]
    fn test_serialize_too_small() {
        let mut msg = Message::new();
        msg.set(1u32);
        let mut buf = [0u8; 10];
        assert_eq!(
            msg.serialize(&mut buf),
            Err(MessageError::BufferTooShort {
                expected: 11,
                actual: 10
            })
        );
    }

    #[test]
    fn test_decode_back_to_back() {
        let mut first = Message::with_sensor(1, 0);
        first.set(1u8);
        let mut second = Message::with_sensor(2, 0);
        second.set("xyz");

        let mut stream = Vec::new();
        first.encode(&mut stream);
        second.encode(&mut stream);

        let mut cursor = &stream[..];
        let a = Message::decode(&mut cursor, &ParseConfig::default()).unwrap();
        let b = Message::decode(&mut cursor, &ParseConfig::default()).unwrap();
        assert_eq!(a.sensor(), 1);
        assert_eq!(b.get_string(), "xyz");
        assert!(cursor.is_empty());
        assert!(Message::decode(&mut cursor, &ParseConfig::default()).is_err());
    }

    #[test]
    fn test_decode_partial_frame_consumes_nothing() {
        let mut msg = Message::with_sensor(3, 0);
        msg.set(0x0102_0304u32);
        let bytes = msg.to_bytes();

        // Header present, payload short
        let mut cursor = &bytes[..bytes.len() - 1];
        assert_eq!(
            Message::decode(&mut cursor, &ParseConfig::default()),
            Err(MessageError::BufferTooShort {
                expected: bytes.len(),
                actual: bytes.len() - 1
            })
        );
        assert_eq!(cursor.len(), bytes.len() - 1);

        // Header itself short
        let mut cursor = &bytes[..HEADER_SIZE - 2];
        assert!(Message::decode(&mut cursor, &ParseConfig::default()).is_err());
        assert_eq!(cursor.len(), HEADER_SIZE - 2);

        // Rejected header
        let mut cursor = &bytes[..];
        assert_eq!(
            Message::decode(&mut cursor, &ParseConfig::strict()),
            Err(MessageError::UnsupportedVersion(0))
        );
        assert_eq!(cursor.len(), bytes.len());
    }

    #[test]
    fn test_decode_header_split_across_chunks() {
        let mut msg = Message::with_sensor(9, 1);
        msg.set("split");
        let bytes = msg.to_bytes();

        let mut chained = (&bytes[..3]).chain(&bytes[3..]);
        let decoded = Message::decode(&mut chained, &ParseConfig::default()).unwrap();
        assert_eq!(decoded, msg);
        assert!(!chained.has_remaining());
    }

    #[test]
    fn test_from_hex_requires_exact_size() {
        let mut msg = Message::with_sensor(1, 2);
        msg.set(7u16);
        let text = msg.to_hex();

        let padded = format!("{text}00");
        assert_eq!(
            Message::from_hex(&padded),
            Err(MessageError::LengthMismatch {
                expected: msg.wire_size(),
                actual: msg.wire_size() + 1
            })
        );

        let huge = format!("{text}{}", "00".repeat(100));
        assert_eq!(
            Message::from_hex(&huge),
            Err(MessageError::HexTooLong(huge.len()))
        );

        // A full-size message still fits
        let mut full = Message::new();
        full.set_custom(&[0xEE; MAX_PAYLOAD]);
        assert_eq!(full.to_hex().len(), MAX_HEX_LENGTH);
        assert_eq!(Message::from_hex(&full.to_hex()).unwrap(), full);
    }

    #[test]
    fn test_hex_roundtrip() {
        let mut msg = Message::with_sensor(0, DataType::Status.to_byte());
        msg.set_destination(0).set_sender(1).set(true);

        let text = msg.to_hex();
        assert_eq!(text.len(), 2 * msg.wire_size());
        let parsed = Message::from_hex(&text).unwrap();
        assert_eq!(parsed.to_bytes(), msg.to_bytes());
        assert!(parsed.get_bool());

        assert_eq!(
            Message::from_hex(&text[1..]),
            Err(MessageError::OddHexLength(text.len() - 1))
        );
    }

    fn arb_message() -> impl Strategy<Value = Message> {
        (
            any::<[u8; HEADER_SIZE]>(),
            proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD),
        )
            .prop_map(|(mut head, body)| {
                crate::BitField::LENGTH.set(&mut head[3], body.len() as u8);
                let mut bytes = head.to_vec();
                bytes.extend_from_slice(&body);
                Message::parse(&bytes).unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_binary_roundtrip(msg in arb_message()) {
            let bytes = msg.to_bytes();
            prop_assert_eq!(bytes.len(), msg.wire_size());
            prop_assert_eq!(Message::parse(&bytes).unwrap(), msg);
        }

        #[test]
        fn prop_hex_roundtrip(msg in arb_message()) {
            let text = msg.to_hex();
            prop_assert_eq!(text.len(), 2 * (HEADER_SIZE + msg.length() as usize));
            prop_assert_eq!(Message::from_hex(&text).unwrap().to_bytes(), msg.to_bytes());
        }

        #[test]
        fn prop_string_length(s in "[a-z0-9 ]{0,40}") {
            let mut msg = Message::new();
            msg.set(s.as_str());
            prop_assert_eq!(msg.length() as usize, s.len().min(MAX_PAYLOAD));
            prop_assert_eq!(msg.get_string(), &s[..s.len().min(MAX_PAYLOAD)]);
        }
    }
}
