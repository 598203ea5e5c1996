//! Protocol command and response codes

use std::fmt;

/// Request command codes
///
/// Only the two parameterless queries of protocol 100 are supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Read current weight
    GetMassa = 0x23,

    /// Read metrological parameters
    GetScalePar = 0x75,
}

impl Command {
    /// Response code the scale sends back on success
    pub fn success_code(self) -> ResponseCode {
        match self {
            Self::GetMassa => ResponseCode::AckMassa,
            Self::GetScalePar => ResponseCode::AckScalePar,
        }
    }

    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::GetMassa => "CMD_GET_MASSA",
            Self::GetScalePar => "CMD_GET_SCALE_PAR",
        }
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd as u8
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}

/// Response codes echoed in byte 5 of a scale response
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResponseCode {
    /// Weight report follows
    AckMassa = 0x24,

    /// Scale parameters follow
    AckScalePar = 0x76,

    /// Command execution failed, detail code follows
    ExecError = 0x28,

    /// Command not recognized, detail code follows
    Nack = 0xF0,
}

impl ResponseCode {
    /// Check if this is a success response
    pub fn is_success(self) -> bool {
        matches!(self, Self::AckMassa | Self::AckScalePar)
    }

    /// Check if the real meaning is carried in the following detail byte
    pub fn is_wrapper(self) -> bool {
        matches!(self, Self::ExecError | Self::Nack)
    }

    /// Get response name
    pub fn name(self) -> &'static str {
        match self {
            Self::AckMassa => "CMD_ACK_MASSA",
            Self::AckScalePar => "CMD_ACK_SCALE_PAR",
            Self::ExecError => "CMD_ERROR",
            Self::Nack => "CMD_NACK",
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> u8 {
        code as u8
    }
}

impl TryFrom<u8> for ResponseCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0x24 => Ok(Self::AckMassa),
            0x76 => Ok(Self::AckScalePar),
            0x28 => Ok(Self::ExecError),
            0xF0 => Ok(Self::Nack),
            _ => Err(value),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}
