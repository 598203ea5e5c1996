//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] scale100_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] scale100_transport::Error),

    #[error("Scale not connected")]
    NotConnected,

    #[error("Short write: sent {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },
}

impl Error {
    /// Check if error is recoverable (retry might succeed)
    ///
    /// Transport failures and corrupted frames may be transient. Problems
    /// reported by the scale itself need operator action.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Core(err) => err.is_recoverable(),
            Self::Transport(_) | Self::ShortWrite { .. } => true,
            Self::NotConnected => false,
        }
    }

    /// Check if the scale reported a problem
    pub fn is_device_fault(&self) -> bool {
        matches!(self, Self::Core(err) if err.is_device_fault())
    }

    /// Device-reported error, if this is one
    pub fn device_error(&self) -> Option<&scale100_core::DeviceError> {
        match self {
            Self::Core(scale100_core::Error::Device(err)) => Some(err),
            _ => None,
        }
    }
}
