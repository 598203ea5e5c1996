//! Device-reported error codes
//!
//! A scale reports failures with one of two wrapper response codes
//! (`CMD_ERROR` 0x28 or `CMD_NACK` 0xF0) followed by a one-byte detail code.

use std::fmt;

use crate::command::{Command, ResponseCode};

/// Detail codes documented by the protocol
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    CommandNotSupported = 0x07,
    Overload = 0x08,
    NotWeighingMode = 0x09,
    InputData = 0x0A,
    SaveData = 0x0B,
    WifiNotSupported = 0x10,
    EthernetNotSupported = 0x11,
    SetZeroImpossible = 0x15,
    NoWeighingModule = 0x17,
    LoadAtStartup = 0x18,
    DeviceFault = 0x19,
}

impl ErrorCode {
    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Self::CommandNotSupported => "Command is not supported",
            Self::Overload => "Load on the scale exceeds maximum capacity",
            Self::NotWeighingMode => "Scale is not in weighing mode",
            Self::InputData => "Input data error",
            Self::SaveData => "Error saving data",
            Self::WifiNotSupported => "WiFi interface is not supported",
            Self::EthernetNotSupported => "Ethernet interface is not supported",
            Self::SetZeroImpossible => "Setting >0< is impossible",
            Self::NoWeighingModule => "No connection with the weighing module",
            Self::LoadAtStartup => "Platform was loaded when the scale was switched on",
            Self::DeviceFault => "Scale is faulty",
        }
    }

    /// Codes the protocol documents as possible replies to `command`
    pub fn documented_for(command: Command) -> &'static [ErrorCode] {
        match command {
            Command::GetMassa => &[
                Self::Overload,
                Self::NotWeighingMode,
                Self::NoWeighingModule,
                Self::LoadAtStartup,
                Self::DeviceFault,
            ],
            Command::GetScalePar => &[Self::NoWeighingModule],
        }
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> u8 {
        code as u8
    }
}

impl TryFrom<u8> for ErrorCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0x07 => Ok(Self::CommandNotSupported),
            0x08 => Ok(Self::Overload),
            0x09 => Ok(Self::NotWeighingMode),
            0x0A => Ok(Self::InputData),
            0x0B => Ok(Self::SaveData),
            0x10 => Ok(Self::WifiNotSupported),
            0x11 => Ok(Self::EthernetNotSupported),
            0x15 => Ok(Self::SetZeroImpossible),
            0x17 => Ok(Self::NoWeighingModule),
            0x18 => Ok(Self::LoadAtStartup),
            0x19 => Ok(Self::DeviceFault),
            _ => Err(value),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}: {}", *self as u8, self.description())
    }
}

/// Problem reported by the scale itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// CMD_ERROR with a documented detail code
    #[error("Command execution error {0}")]
    Execution(ErrorCode),

    /// CMD_ERROR with a detail code outside the documented table
    #[error("Unmapped error code: 0x{0:02X}")]
    UnmappedCode(u8),

    /// CMD_NACK: the scale did not recognize the command
    #[error(
        "Unknown command (NACK) 0x{code:02X}: {}",
        .kind.map_or("unmapped error code", ErrorCode::description)
    )]
    UnknownCommand { code: u8, kind: Option<ErrorCode> },

    /// Response code that is neither a success nor a wrapper code
    #[error("Unexpected response code: 0x{0:02X}")]
    UnexpectedResponseCode(u8),

    /// Wrapper response without the detail byte
    #[error("Response 0x{0:02X} carries no error code")]
    MissingDetail(u8),
}

impl DeviceError {
    /// Documented detail code, if any
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Execution(code) => Some(*code),
            Self::UnknownCommand { kind, .. } => *kind,
            _ => None,
        }
    }
}

/// Resolve an error response into a [`DeviceError`]
///
/// `echo` is the response code (frame byte 5), `detail` the byte after it.
///
/// # Examples
///
/// ```
/// use scale100_core::device_error::{translate, DeviceError, ErrorCode};
///
/// assert_eq!(translate(0x28, 0x08), DeviceError::Execution(ErrorCode::Overload));
/// assert_eq!(translate(0x28, 0x42), DeviceError::UnmappedCode(0x42));
/// ```
pub fn translate(echo: u8, detail: u8) -> DeviceError {
    match ResponseCode::try_from(echo) {
        Ok(ResponseCode::ExecError) => match ErrorCode::try_from(detail) {
            Ok(code) => DeviceError::Execution(code),
            Err(code) => DeviceError::UnmappedCode(code),
        },
        Ok(ResponseCode::Nack) => DeviceError::UnknownCommand {
            code: detail,
            kind: ErrorCode::try_from(detail).ok(),
        },
        _ => DeviceError::UnexpectedResponseCode(echo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overload_under_execution_error() {
        let err = translate(0x28, 0x08);

        assert_eq!(err, DeviceError::Execution(ErrorCode::Overload));
        assert_eq!(
            err.to_string(),
            "Command execution error 0x08: Load on the scale exceeds maximum capacity"
        );
    }

    #[test]
    fn test_detail_outside_wrapper_is_not_mapped() {
        assert_eq!(translate(0x08, 0x00), DeviceError::UnexpectedResponseCode(0x08));
        assert_eq!(translate(0x08, 0x08).code(), None);
    }

    #[test]
    fn test_unmapped_detail() {
        assert_eq!(translate(0x28, 0x42), DeviceError::UnmappedCode(0x42));
    }

    #[test]
    fn test_nack() {
        let err = translate(0xF0, 0x07);

        assert_eq!(
            err,
            DeviceError::UnknownCommand {
                code: 0x07,
                kind: Some(ErrorCode::CommandNotSupported),
            }
        );
        assert_eq!(err.to_string(), "Unknown command (NACK) 0x07: Command is not supported");
    }

    #[test]
    fn test_nack_unmapped() {
        let err = translate(0xF0, 0x99);

        assert_eq!(err, DeviceError::UnknownCommand { code: 0x99, kind: None });
        assert_eq!(err.to_string(), "Unknown command (NACK) 0x99: unmapped error code");
    }

    #[test]
    fn test_every_code_round_trips() {
        for raw in 0u8..=0xFF {
            if let Ok(code) = ErrorCode::try_from(raw) {
                assert_eq!(u8::from(code), raw);
                assert!(!code.description().is_empty());
            }
        }
    }

    #[test]
    fn test_documented_for() {
        assert!(ErrorCode::documented_for(Command::GetMassa).contains(&ErrorCode::Overload));
        assert_eq!(
            ErrorCode::documented_for(Command::GetScalePar),
            &[ErrorCode::NoWeighingModule]
        );
    }
}
