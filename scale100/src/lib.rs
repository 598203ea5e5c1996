//! # scale100
//!
//! Rust client for weighing scales speaking binary protocol 100.
//!
//! ## Features
//!
//! - Type-safe frame codec with CRC-16 validation
//! - Async/await API using Tokio
//! - Structured errors that tell transport, frame and device problems apart
//! - Current weight (CMD_GET_MASSA) and scale parameters (CMD_GET_SCALE_PAR)
//!
//! ## Quick Start
//!
//! ```no_run
//! use scale100::Scale;
//!
//! #[tokio::main]
//! async fn main() -> scale100::Result<()> {
//!     // Connect to scale
//!     let mut scale = Scale::new("192.168.1.10", 5001);
//!     scale.connect().await?;
//!
//!     // Read weight
//!     let reading = scale.read_weight().await?;
//!     println!("{}", reading);
//!
//!     // Disconnect
//!     scale.disconnect().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod scale;

// Re-exports
pub use error::{Error, Result};
pub use scale::Scale;

// Re-export types
pub use scale100_core::{Command, DeviceError, ErrorCode, Response};
pub use scale100_transport::{TcpTransport, Transport};
pub use scale100_types::{ScaleParameters, WeightReading};
