//! Message sub-types
//!
//! The header `type` byte means different things depending on the command:
//! - Presentation: the kind of sensor being presented
//! - Set / Req: the sensor variable being carried
//! - Internal: the internal message id
//! - Stream: the kind of data stream

use crate::Command;

/// Declares a `u8`-backed wire enum with `from_byte` / `to_byte`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Parse from wire byte
            pub fn from_byte(b: u8) -> Option<Self> {
                match b {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Convert to wire byte
            #[inline]
            pub fn to_byte(self) -> u8 {
                self as u8
            }
        }
    };
}

wire_enum! {
    /// Type of sensor, sent with presentation messages
    pub enum SensorType {
        Door = 0,
        Motion = 1,
        Smoke = 2,
        /// Binary light or relay
        Light = 3,
        Dimmer = 4,
        Cover = 5,
        Temp = 6,
        Hum = 7,
        Baro = 8,
        Wind = 9,
        Rain = 10,
        Uv = 11,
        Weight = 12,
        Power = 13,
        Heater = 14,
        Distance = 15,
        LightLevel = 16,
        /// Used internally when presenting a non-repeating node
        ArduinoNode = 17,
        /// Used internally when presenting a repeating node
        ArduinoRepeaterNode = 18,
        Lock = 19,
        Ir = 20,
        Water = 21,
        AirQuality = 22,
        Custom = 23,
        Dust = 24,
        SceneController = 25,
        RgbLight = 26,
        RgbwLight = 27,
        ColorSensor = 28,
        Hvac = 29,
        Multimeter = 30,
        Sprinkler = 31,
        WaterLeak = 32,
        Sound = 33,
        Vibration = 34,
        Moisture = 35,
        /// LCD text device or simple information device
        Info = 36,
        Gas = 37,
        Gps = 38,
        WaterQuality = 39,
    }
}

impl SensorType {
    /// Same wire value as [`SensorType::Light`]
    pub const BINARY: SensorType = SensorType::Light;
}

wire_enum! {
    /// Type of sensor variable, carried by set / req messages
    pub enum DataType {
        Temp = 0,
        Hum = 1,
        /// Binary on/off status
        Status = 2,
        /// Percentage 0-100
        Percentage = 3,
        Pressure = 4,
        /// Weather forecast string
        Forecast = 5,
        Rain = 6,
        RainRate = 7,
        Wind = 8,
        Gust = 9,
        /// Wind direction in degrees
        Direction = 10,
        Uv = 11,
        Weight = 12,
        Distance = 13,
        Impedance = 14,
        Armed = 15,
        Tripped = 16,
        Watt = 17,
        Kwh = 18,
        SceneOn = 19,
        SceneOff = 20,
        HvacFlowState = 21,
        HvacSpeed = 22,
        /// Uncalibrated light level in percent
        LightLevel = 23,
        Var1 = 24,
        Var2 = 25,
        Var3 = 26,
        Var4 = 27,
        Var5 = 28,
        Up = 29,
        Down = 30,
        Stop = 31,
        IrSend = 32,
        IrReceive = 33,
        Flow = 34,
        Volume = 35,
        LockStatus = 36,
        Level = 37,
        Voltage = 38,
        Current = 39,
        /// ASCII hex RRGGBB
        Rgb = 40,
        /// ASCII hex RRGGBBWW
        Rgbw = 41,
        /// Sensor hardware id
        Id = 42,
        UnitPrefix = 43,
        HvacSetpointCool = 44,
        HvacSetpointHeat = 45,
        HvacFlowMode = 46,
        Text = 47,
        Custom = 48,
        /// "latitude;longitude;altitude"
        Position = 49,
        IrRecord = 50,
        Ph = 51,
        Orp = 52,
        Ec = 53,
    }
}

impl DataType {
    pub const LIGHT: DataType = DataType::Status;
    pub const DIMMER: DataType = DataType::Percentage;
    /// Deprecated alias of [`DataType::HvacFlowState`]
    pub const HEATER: DataType = DataType::HvacFlowState;
}

wire_enum! {
    /// Internal message id
    pub enum InternalType {
        BatteryLevel = 0,
        Time = 1,
        Version = 2,
        IdRequest = 3,
        IdResponse = 4,
        InclusionMode = 5,
        Config = 6,
        FindParent = 7,
        FindParentResponse = 8,
        LogMessage = 9,
        Children = 10,
        SketchName = 11,
        SketchVersion = 12,
        Reboot = 13,
        GatewayReady = 14,
        /// Signing preferences, first byte is the preference version
        SigningPresentation = 15,
        NonceRequest = 16,
        NonceResponse = 17,
        Heartbeat = 18,
        Presentation = 19,
        Discover = 20,
        DiscoverResponse = 21,
        HeartbeatResponse = 22,
        /// Node is locked, reason in the string payload
        Locked = 23,
        /// Payload is an incremental hop counter
        Ping = 24,
        Pong = 25,
        RegisterRequest = 26,
        RegisterResponse = 27,
        Debug = 28,
    }
}

wire_enum! {
    /// Kind of data carried by stream messages
    pub enum StreamType {
        FirmwareConfigRequest = 0,
        FirmwareConfigResponse = 1,
        FirmwareRequest = 2,
        FirmwareResponse = 3,
        Sound = 4,
        Image = 5,
    }
}

/// The header `type` byte decoded against its command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubType {
    Sensor(SensorType),
    Data(DataType),
    Internal(InternalType),
    Stream(StreamType),
}

impl SubType {
    /// Interpret `b` in the namespace selected by `command`
    pub fn decode(command: Command, b: u8) -> Option<Self> {
        match command {
            Command::Presentation => SensorType::from_byte(b).map(SubType::Sensor),
            Command::Set | Command::Req => DataType::from_byte(b).map(SubType::Data),
            Command::Internal => InternalType::from_byte(b).map(SubType::Internal),
            Command::Stream => StreamType::from_byte(b).map(SubType::Stream),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            SubType::Sensor(t) => t.to_byte(),
            SubType::Data(t) => t.to_byte(),
            SubType::Internal(t) => t.to_byte(),
            SubType::Stream(t) => t.to_byte(),
        }
    }
}

impl From<SensorType> for SubType {
    fn from(t: SensorType) -> Self {
        SubType::Sensor(t)
    }
}

impl From<DataType> for SubType {
    fn from(t: DataType) -> Self {
        SubType::Data(t)
    }
}

impl From<InternalType> for SubType {
    fn from(t: InternalType) -> Self {
        SubType::Internal(t)
    }
}

impl From<StreamType> for SubType {
    fn from(t: StreamType) -> Self {
        SubType::Stream(t)
    }
}
