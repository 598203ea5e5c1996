//! Protocol constants

/// Frame magic header
pub const HEADER: [u8; 3] = [0xF8, 0x55, 0xCE];

/// Offset of the little-endian length field
pub const LEN_OFFSET: usize = 3;

/// Offset of the command byte
pub const COMMAND_OFFSET: usize = 5;

/// Offset of the first payload byte
pub const PAYLOAD_OFFSET: usize = 6;

/// Size of the trailing checksum
pub const CHECKSUM_SIZE: usize = 2;

/// Bytes of a frame not counted by the length field (header, length, checksum)
pub const FRAME_OVERHEAD: usize = HEADER.len() + 2 + CHECKSUM_SIZE;

/// Smallest possible frame: header, length, command and checksum
pub const MIN_FRAME_SIZE: usize = FRAME_OVERHEAD + 1;

/// Size of a request frame (requests never carry a payload)
pub const REQUEST_SIZE: usize = MIN_FRAME_SIZE;

/// Largest CMD_ACK_MASSA frame
pub const MAX_MASSA_RESPONSE: usize = 20;

/// Largest CMD_ACK_SCALE_PAR frame
pub const MAX_SCALE_PAR_RESPONSE: usize = 104;

/// Largest frame a scale sends
pub const MAX_RESPONSE_SIZE: usize = MAX_SCALE_PAR_RESPONSE;

/// Default TCP port of the scale
pub const DEFAULT_PORT: u16 = 5001;

/// Default connection timeout (milliseconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 1_000;

/// Default read timeout (milliseconds)
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 2_000;

/// Default write timeout (milliseconds)
pub const DEFAULT_WRITE_TIMEOUT_MS: u64 = 2_000;

/// Scale parameter payload layout
pub mod parameters {
    /// Field terminator
    pub const DELIMITER: [u8; 2] = [0x0D, 0x0A];

    /// Longest field text before the terminator
    pub const MAX_FIELD_LEN: usize = 19;

    /// Number of fields in the payload
    pub const FIELD_COUNT: usize = 8;
}

/// Weight payload layout
pub mod weight {
    /// Payload without the optional tare
    pub const SHORT_PAYLOAD: usize = 8;

    /// Payload including tare
    pub const FULL_PAYLOAD: usize = 12;
}
