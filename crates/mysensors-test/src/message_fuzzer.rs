//! Message Fuzzer - Randomized checks of the message codec
//!
//! Tests:
//! - Binary and hex round-trips over header + payload bytes
//! - Length matches the width of the value written
//! - Payload writes leave command and ack flags alone
//! - Typed values read back through their own accessor

use mysensors_core::{Command, HEADER_SIZE, MAX_PAYLOAD};
use mysensors_wire::{Message, ParseConfig, PayloadValue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of messages to generate
    pub message_count: usize,
    /// Probability of a variable-width (string/custom) payload
    pub variable_prob: f64,
    /// Probability that a variable-width payload overflows capacity
    pub overflow_prob: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            message_count: 1000,
            variable_prob: 0.3,
            overflow_prob: 0.1,
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            message_count: 100,
            variable_prob: 0.3,
            overflow_prob: 0.0,
            seed: 42,
        }
    }

    /// Heavy fuzzing for thorough testing
    pub fn heavy() -> Self {
        FuzzerConfig {
            message_count: 100_000,
            variable_prob: 0.5,
            overflow_prob: 0.2,
            seed: 42,
        }
    }
}

/// Owned copy of a generated value, kept to compare against the read-back
#[derive(Clone, Debug, PartialEq)]
pub enum FuzzValue {
    Bool(bool),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Long32(i32),
    ULong32(u32),
    Float32(f32, u8),
    Text(String),
    Custom(Vec<u8>),
}

impl FuzzValue {
    pub fn as_payload(&self) -> PayloadValue<'_> {
        match self {
            FuzzValue::Bool(v) => (*v).into(),
            FuzzValue::Byte(v) => (*v).into(),
            FuzzValue::Int16(v) => (*v).into(),
            FuzzValue::UInt16(v) => (*v).into(),
            FuzzValue::Long32(v) => (*v).into(),
            FuzzValue::ULong32(v) => (*v).into(),
            FuzzValue::Float32(value, precision) => PayloadValue::Float32 {
                value: *value,
                precision: *precision,
            },
            FuzzValue::Text(s) => s.as_str().into(),
            FuzzValue::Custom(bytes) => PayloadValue::Custom(bytes.as_slice()),
        }
    }

    /// Length the header should carry after writing this value
    pub fn expected_length(&self) -> usize {
        match self {
            FuzzValue::Text(s) => s.len().min(MAX_PAYLOAD),
            FuzzValue::Custom(b) => b.len().min(MAX_PAYLOAD),
            other => other
                .as_payload()
                .payload_type()
                .fixed_width()
                .unwrap_or(0),
        }
    }

    /// Read the value back through the matching accessor
    fn matches(&self, msg: &Message) -> bool {
        match self {
            FuzzValue::Bool(v) => msg.get_bool() == *v,
            FuzzValue::Byte(v) => msg.get_byte() == *v,
            FuzzValue::Int16(v) => msg.get_int() == *v,
            FuzzValue::UInt16(v) => msg.get_uint() == *v,
            FuzzValue::Long32(v) => msg.get_long() == *v,
            FuzzValue::ULong32(v) => msg.get_ulong() == *v,
            FuzzValue::Float32(v, _) => msg.get_float().to_bits() == v.to_bits(),
            FuzzValue::Text(s) => msg.get_custom() == &s.as_bytes()[..self.expected_length()],
            FuzzValue::Custom(b) => msg.get_custom() == &b[..self.expected_length()],
        }
    }
}

/// Result of a fuzzing run
#[derive(Clone, Debug, Default)]
pub struct FuzzResult {
    pub messages: usize,
    pub binary_failures: usize,
    pub hex_failures: usize,
    pub length_violations: usize,
    pub flag_violations: usize,
    pub value_mismatches: usize,
}

impl FuzzResult {
    pub fn is_clean(&self) -> bool {
        self.binary_failures == 0
            && self.hex_failures == 0
            && self.length_violations == 0
            && self.flag_violations == 0
            && self.value_mismatches == 0
    }
}

/// Message fuzzer
pub struct MessageFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl MessageFuzzer {
    /// Create a new fuzzer
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        MessageFuzzer { config, rng }
    }

    /// Generate a random value of any payload type
    pub fn generate_value(&mut self) -> FuzzValue {
        if self.rng.gen_bool(self.config.variable_prob) {
            let max = if self.rng.gen_bool(self.config.overflow_prob) {
                MAX_PAYLOAD * 2
            } else {
                MAX_PAYLOAD
            };
            let len = self.rng.gen_range(0..=max);
            if self.rng.gen_bool(0.5) {
                let text: String = (0..len)
                    .map(|_| self.rng.gen_range(b'a'..=b'z') as char)
                    .collect();
                FuzzValue::Text(text)
            } else {
                FuzzValue::Custom((0..len).map(|_| self.rng.gen()).collect())
            }
        } else {
            match self.rng.gen_range(0..7) {
                0 => FuzzValue::Bool(self.rng.gen()),
                1 => FuzzValue::Byte(self.rng.gen()),
                2 => FuzzValue::Int16(self.rng.gen()),
                3 => FuzzValue::UInt16(self.rng.gen()),
                4 => FuzzValue::Long32(self.rng.gen()),
                5 => FuzzValue::ULong32(self.rng.gen()),
                _ => FuzzValue::Float32(
                    self.rng.gen_range(-1.0e4f32..1.0e4f32),
                    self.rng.gen_range(0..=8),
                ),
            }
        }
    }

    /// Generate a message with random routing, flags and payload
    pub fn generate_message(&mut self) -> (Message, FuzzValue) {
        let mut msg = Message::with_sensor(self.rng.gen(), self.rng.gen());
        let command = Command::from_byte(self.rng.gen_range(0..5)).unwrap_or_default();
        msg.set_sender(self.rng.gen())
            .set_last(self.rng.gen())
            .set_destination(self.rng.gen())
            .set_version(self.rng.gen())
            .set_signed(self.rng.gen())
            .set_command(command)
            .set_request_ack(self.rng.gen())
            .set_ack(self.rng.gen());

        let value = self.generate_value();
        msg.set(value.as_payload());
        (msg, value)
    }

    /// Check one message, recording any violated property
    fn check(
        &self,
        msg: &Message,
        value: &FuzzValue,
        before: (u8, bool, bool),
        result: &mut FuzzResult,
    ) {
        let after = (msg.get_command(), msg.is_ack(), msg.request_ack());
        if before != after {
            tracing::debug!(?before, ?after, "payload write changed header flags");
            result.flag_violations += 1;
        }

        let len = msg.length() as usize;
        if len != value.expected_length() || len > MAX_PAYLOAD {
            result.length_violations += 1;
        }

        if msg.payload_type() != value.as_payload().payload_type() || !value.matches(msg) {
            result.value_mismatches += 1;
        }

        let bytes = msg.to_bytes();
        match Message::parse_with(&bytes, &ParseConfig::default()) {
            Ok(parsed) if parsed.to_bytes() == bytes && bytes.len() == HEADER_SIZE + len => {}
            other => {
                tracing::debug!(?other, "binary round-trip failed");
                result.binary_failures += 1;
            }
        }

        match Message::from_hex(&msg.to_hex()) {
            Ok(parsed) if parsed.to_bytes() == bytes => {}
            other => {
                tracing::debug!(?other, "hex round-trip failed");
                result.hex_failures += 1;
            }
        }
    }

    /// Run the fuzzer
    pub fn run(&mut self) -> FuzzResult {
        let mut result = FuzzResult::default();

        for _ in 0..self.config.message_count {
            let (mut msg, _) = self.generate_message();
            let before = (msg.get_command(), msg.is_ack(), msg.request_ack());

            // Overwrite the payload once more to exercise reuse
            let value = self.generate_value();
            msg.set(value.as_payload());

            self.check(&msg, &value, before, &mut result);
            result.messages += 1;
        }

        result
    }
}
