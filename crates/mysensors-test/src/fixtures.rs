//! Sample messages as a node would send them

use mysensors_core::{Command, DataType, InternalType, SensorType, PROTOCOL_VERSION};
use mysensors_wire::Message;

/// Temperature reading from node 12, child 1
pub fn temperature_reading() -> Message {
    let mut msg = Message::with_sensor(1, DataType::Temp.to_byte());
    msg.set_sender(12)
        .set_last(12)
        .set_destination(0)
        .set_version(PROTOCOL_VERSION)
        .set_float(21.5, 1);
    msg
}

/// Node 12 presenting a humidity sensor on child 2
pub fn presentation() -> Message {
    let mut msg = Message::new();
    msg.set_sender(12)
        .set_last(12)
        .set_sensor(2)
        .set_version(PROTOCOL_VERSION)
        .set_command(Command::Presentation)
        .set_type(SensorType::Hum.to_byte())
        .set_custom(&[PROTOCOL_VERSION, SensorType::Hum.to_byte()]);
    msg
}

/// Battery report relayed through repeater 7
pub fn battery_level() -> Message {
    let mut msg = Message::with_sensor(255, InternalType::BatteryLevel.to_byte());
    msg.set_sender(21)
        .set_last(7)
        .set_version(PROTOCOL_VERSION)
        .set_command(Command::Internal)
        .set(87u8);
    msg
}

/// Full 25-byte text payload
pub fn full_text() -> Message {
    let mut msg = Message::with_sensor(3, DataType::Text.to_byte());
    msg.set_sender(5)
        .set_version(PROTOCOL_VERSION)
        .set_request_ack(true)
        .set("abcdefghijklmnopqrstuvwxy");
    msg
}

/// Every fixture, for table-driven tests and benchmarks
pub fn all_fixtures() -> Vec<(&'static str, Message)> {
    vec![
        ("temperature", temperature_reading()),
        ("presentation", presentation()),
        ("battery", battery_level()),
        ("full_text", full_text()),
    ]
}
