//! Frame checksum algorithm
//!
//! CRC-16 with polynomial 0x1021 and no bit reflection. The register starts
//! as if 0xFFFF had been prepended to the message ("augmented" CCITT), which
//! is the same as a direct initial value of 0x1D0F. This is the
//! CRC-16/SPI-FUJITSU catalogue entry, not the common CCITT-FALSE variant
//! (init 0xFFFF applied directly).
//!
//! The checksum covers the command byte and payload only. Header and length
//! bytes are excluded.

use crc::{CRC_16_SPI_FUJITSU, Crc};
use tracing::trace;

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_SPI_FUJITSU);

/// Calculate the checksum of `data`
///
/// # Examples
///
/// ```
/// use scale100_core::checksum;
///
/// assert_eq!(checksum::calculate(b"123456789"), 0xE5CC);
/// ```
pub fn calculate(data: &[u8]) -> u16 {
    let checksum = CRC16.checksum(data);

    trace!(
        len = data.len(),
        checksum = format!("0x{:04X}", checksum),
        "Calculated checksum"
    );

    checksum
}

/// Verify checksum
pub fn verify(data: &[u8], expected: u16) -> bool {
    calculate(data) == expected
}
