//! Read the current weight once

use scale100::Scale;
use scale100_core::constants::DEFAULT_PORT;

#[tokio::main]
async fn main() -> scale100::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("scale100=debug")),
        )
        .init();

    // Change to your scale IP
    let ip = std::env::var("SCALE_IP").unwrap_or_else(|_| "192.168.1.10".to_string());
    let port = std::env::var("SCALE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    println!("Connecting to {}:{}...", ip, port);

    let mut scale = Scale::new(ip, port);

    // Connect
    scale.connect().await?;
    println!("✓ Connected!");

    // Read weight
    match scale.read_weight().await {
        Ok(reading) => println!("✓ {}", reading),
        Err(e) if e.is_device_fault() => println!("✗ Scale reported: {}", e),
        Err(e) => return Err(e),
    }

    // Disconnect
    scale.disconnect().await?;
    println!("✓ Disconnected");

    Ok(())
}
