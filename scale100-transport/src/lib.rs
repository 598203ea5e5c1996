//! Transport layer for scale100
//!
//! Moves protocol frames between the host and a scale. The protocol core
//! only needs "send bytes / receive bytes"; connection lifecycle and
//! timeouts live here.

pub mod error;
pub mod tcp;

pub use error::{Error, Result};
pub use tcp::TcpTransport;

use std::time::Duration;

use async_trait::async_trait;
use bytes::BytesMut;

/// Transport trait for different communication methods
#[async_trait]
pub trait Transport: Send + Sync {
    /// Connect to device
    async fn connect(&mut self) -> Result<()>;

    /// Disconnect from device
    async fn disconnect(&mut self) -> Result<()>;

    /// Check if connected
    fn is_connected(&self) -> bool;

    /// Send raw bytes, returning how many were written
    async fn send(&mut self, data: &[u8]) -> Result<usize>;

    /// Receive one response (single read, bounded by `timeout`)
    async fn receive(&mut self, timeout: Duration) -> Result<BytesMut>;

    /// Get remote address
    fn remote_addr(&self) -> String;
}
