//! Parser configuration

/// Controls how strictly received messages are checked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Reject messages whose version sub-field is not `PROTOCOL_VERSION`
    pub require_version: bool,
}

impl Default for ParseConfig {
    /// Lenient: locally built messages carry version 0 until the transport
    /// stamps them
    fn default() -> Self {
        ParseConfig {
            require_version: false,
        }
    }
}

impl ParseConfig {
    /// For frames taken off the air
    pub fn strict() -> Self {
        ParseConfig {
            require_version: true,
        }
    }
}
