//! Print the metrological parameters of a scale

use std::time::Duration;

use anyhow::Context;
use scale100::{Scale, TcpTransport};
use scale100_core::constants::DEFAULT_PORT;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let ip = std::env::var("SCALE_IP").unwrap_or_else(|_| "192.168.1.10".to_string());

    let transport = TcpTransport::new(ip.clone(), DEFAULT_PORT)
        .with_connect_timeout(Duration::from_secs(3));
    let mut scale = Scale::with_transport(Box::new(transport)).with_timeout(Duration::from_secs(3));

    scale
        .connect()
        .await
        .with_context(|| format!("connecting to {}", ip))?;

    let params = scale
        .read_scale_parameters()
        .await
        .context("reading scale parameters")?;

    println!("Max capacity:          {}", params.max_capacity);
    println!("Min capacity:          {}", params.min_capacity);
    println!("Verification interval: {}", params.verification_interval);
    println!("Max tare:              {}", params.max_tare);
    println!("Fix:                   {}", params.fix);
    println!("Calibration code:      {}", params.calibration_code);
    println!("Software version:      {}", params.software_version);
    println!("Parameters checksum:   {}", params.parameters_checksum);

    scale.disconnect().await?;

    Ok(())
}
