//! # scale100-core
//!
//! Core implementation of weighing-scale protocol 100.
//!
//! This crate provides the low-level protocol primitives:
//! - Frame construction and validation
//! - Checksum calculation (CRC-16/SPI-FUJITSU)
//! - Payload decoding for weight and scale parameter responses
//! - Device error code taxonomy
//! - Protocol constants
//!
//! Everything here is synchronous and works on in-memory buffers. Moving
//! bytes to and from a scale is the job of `scale100-transport`.

pub mod checksum;
pub mod command;
pub mod constants;
pub mod device_error;
pub mod error;
pub mod frame;
pub mod payload;
pub mod response;

pub use command::{Command, ResponseCode};
pub use device_error::{DeviceError, ErrorCode};
pub use error::{DecodeError, Error, FrameError, Result};
pub use frame::Frame;
pub use response::Response;

pub use scale100_types::{ScaleParameters, WeightReading};

/// Protocol version information
pub const PROTOCOL_VERSION: &str = "100";
