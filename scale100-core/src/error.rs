//! Error types for scale100-core

use crate::device_error::DeviceError;

/// Result type alias for scale100 protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Integrity failures of a received frame
///
/// The transmission was corrupted or does not conform to the wire format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// Not even a complete header was received
    #[error("Frame too short: {actual} bytes")]
    TooShort { actual: usize },

    /// Magic header mismatch
    #[error("Bad frame header: {:02X?}", .0)]
    BadHeader([u8; 3]),

    /// Frame size outside the bounds allowed for its response code
    #[error("Bad frame size for response 0x{code:02X}: {actual} bytes (allowed {min}..={max})")]
    BadLength {
        code: u8,
        actual: usize,
        min: usize,
        max: usize,
    },

    /// Length field does not match the received byte count
    #[error("Length field mismatch: declared {declared}, received {actual}")]
    LengthMismatch { declared: u16, actual: usize },

    /// Checksum verification failed
    #[error("Checksum mismatch: expected 0x{expected:04X}, received 0x{received:04X}")]
    BadChecksum { expected: u16, received: u16 },
}

/// Payload shape not recognized for its response kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Payload length outside the expected set
    #[error("Bad payload length: {actual} bytes (expected one of {expected:?})")]
    BadPayloadLength {
        expected: &'static [usize],
        actual: usize,
    },

    /// Text field without CRLF terminator
    #[error("Parameter field {index} at offset {offset} is not terminated")]
    UnterminatedField { index: usize, offset: usize },
}

/// Core protocol errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Device error: {0}")]
    Device(#[from] DeviceError),
}

impl Error {
    /// Check if error is recoverable (retry might succeed)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Frame(_))
    }

    /// Check if the scale reported a problem (needs operator action)
    pub fn is_device_fault(&self) -> bool {
        matches!(self, Self::Device(_))
    }

    /// Check if the response shape is not one this library understands
    pub fn is_protocol_mismatch(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_error::ErrorCode;

    #[test]
    fn test_classification() {
        let frame: Error = FrameError::BadHeader([0, 0, 0]).into();
        let decode: Error = DecodeError::UnterminatedField { index: 2, offset: 10 }.into();
        let device: Error = DeviceError::Execution(ErrorCode::DeviceFault).into();

        assert!(frame.is_recoverable());
        assert!(!frame.is_device_fault());
        assert!(decode.is_protocol_mismatch());
        assert!(!decode.is_recoverable());
        assert!(device.is_device_fault());
        assert!(!device.is_protocol_mismatch());
    }

    #[test]
    fn test_display() {
        let err = Error::from(FrameError::BadChecksum {
            expected: 0x1234,
            received: 0xABCD,
        });

        assert_eq!(
            err.to_string(),
            "Frame error: Checksum mismatch: expected 0x1234, received 0xABCD"
        );
        assert_eq!(
            FrameError::BadHeader([0xF8, 0x00, 0xCE]).to_string(),
            "Bad frame header: [F8, 00, CE]"
        );
    }
}
