//! High-level scale interface

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use scale100_core::{
    Command, DeviceError, ErrorCode, Response,
    constants::DEFAULT_READ_TIMEOUT_MS,
    frame,
};
use scale100_transport::{TcpTransport, Transport};
use scale100_types::{ScaleParameters, WeightReading};

use crate::error::{Error, Result};

/// Weighing scale speaking protocol 100
///
/// One request is in flight at a time: every method takes `&mut self`, sends
/// a single command and reads a single response.
///
/// # Examples
///
/// ```no_run
/// use scale100::Scale;
///
/// #[tokio::main]
/// async fn main() -> scale100::Result<()> {
///     let mut scale = Scale::new("192.168.1.10", 5001);
///
///     scale.connect().await?;
///
///     let reading = scale.read_weight().await?;
///     println!("Weight: {}", reading);
///
///     scale.disconnect().await?;
///     Ok(())
/// }
/// ```
pub struct Scale {
    transport: Box<dyn Transport>,
    timeout: Duration,
}

impl Scale {
    /// Create a new scale instance (TCP transport)
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self::with_transport(Box::new(TcpTransport::new(ip, port)))
    }

    /// Create a scale instance over any transport
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
        }
    }

    /// Set response timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if connected
    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Connect to scale
    pub async fn connect(&mut self) -> Result<()> {
        info!("Connecting to {}...", self.transport.remote_addr());

        self.transport.connect().await?;

        info!("Connected to {}", self.transport.remote_addr());
        Ok(())
    }

    /// Disconnect from scale
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConnected`] if there is no open connection.
    pub async fn disconnect(&mut self) -> Result<()> {
        self.ensure_connected()?;

        info!("Disconnecting from {}...", self.transport.remote_addr());

        self.transport.disconnect().await?;

        info!("Disconnected");
        Ok(())
    }

    /// Read current weight (CMD_GET_MASSA)
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The scale is not connected or the transport fails
    /// - The response frame is corrupted
    /// - The scale reports an error (see [`Error::device_error`])
    pub async fn read_weight(&mut self) -> Result<WeightReading> {
        debug!("Reading weight...");

        let response = self.exchange(Command::GetMassa).await?;
        let reading = response.into_weight()?;

        debug!("Weight: {}", reading);
        Ok(reading)
    }

    /// Read metrological parameters (CMD_GET_SCALE_PAR)
    pub async fn read_scale_parameters(&mut self) -> Result<ScaleParameters> {
        debug!("Reading scale parameters...");

        let response = self.exchange(Command::GetScalePar).await?;
        let params = response.into_scale_parameters()?;

        debug!("Scale parameters: {}", params);
        Ok(params)
    }

    // Helper methods

    fn ensure_connected(&self) -> Result<()> {
        if !self.is_connected() {
            return Err(Error::NotConnected);
        }
        Ok(())
    }

    async fn exchange(&mut self, command: Command) -> Result<Response> {
        self.ensure_connected()?;

        let request = frame::build_request(command);
        trace!("Sending: {}", command);

        let written = self.transport.send(&request).await?;
        if written != request.len() {
            return Err(Error::ShortWrite {
                expected: request.len(),
                written,
            });
        }

        let buf = self.transport.receive(self.timeout).await?;
        let response = Response::parse(&buf, buf.len())?;

        trace!("Received: {}", response);

        if let Response::Device(DeviceError::Execution(code)) = &response {
            if !ErrorCode::documented_for(command).contains(code) {
                warn!("{} answered with undocumented error code {}", command, code);
            }
        }

        Ok(response)
    }
}
