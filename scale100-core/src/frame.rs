//! Protocol 100 frame encoding and validation

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};
use bytes::{BufMut, BytesMut};
use tracing::{debug, trace};

use crate::{
    checksum,
    command::{Command, ResponseCode},
    constants::{
        CHECKSUM_SIZE, COMMAND_OFFSET, FRAME_OVERHEAD, HEADER, LEN_OFFSET, MAX_MASSA_RESPONSE,
        MAX_SCALE_PAR_RESPONSE, MIN_FRAME_SIZE, PAYLOAD_OFFSET, REQUEST_SIZE,
    },
    error::FrameError,
};

/// Largest payload the 16-bit length field can describe
pub const MAX_PAYLOAD_SIZE: usize = u16::MAX as usize - 1;

/// A validated frame borrowed from the receive buffer
///
/// # Frame Structure
///
/// ```text
/// ┌──────────────┬─────────────┬─────────────┬─────────────┬─────────────┐
/// │    Header    │   Length    │   Command   │   Payload   │  Checksum   │
/// │   3 bytes    │   2 bytes   │   1 byte    │   N bytes   │   2 bytes   │
/// │  F8 55 CE    │  (LE u16)   │             │             │  (LE u16)   │
/// └──────────────┴─────────────┴─────────────┴─────────────┴─────────────┘
/// ```
///
/// Length counts the command byte and payload. The checksum covers the same
/// bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Command or response code (byte 5)
    pub code: u8,

    /// Bytes between the code and the checksum
    pub payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Known response code, if any
    pub fn response_code(&self) -> Option<ResponseCode> {
        ResponseCode::try_from(self.code).ok()
    }

    /// Get total frame size
    pub fn size(&self) -> usize {
        MIN_FRAME_SIZE + self.payload.len()
    }
}

impl fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("code", &format!("0x{:02X}", self.code))
            .field("payload", &hex::encode(self.payload))
            .finish()
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.response_code() {
            Some(code) => write!(f, "Frame[{}](len={})", code, self.payload.len()),
            None => write!(f, "Frame[0x{:02X}](len={})", self.code, self.payload.len()),
        }
    }
}

/// Build a request frame
///
/// Requests carry no payload, so the frame is always 8 bytes with the
/// length field set to 1.
///
/// # Examples
///
/// ```
/// use scale100_core::{checksum, frame, Command};
///
/// let request = frame::build_request(Command::GetMassa);
/// assert_eq!(request[..6], [0xF8, 0x55, 0xCE, 0x01, 0x00, 0x23]);
/// assert_eq!(request[6..], checksum::calculate(&[0x23]).to_le_bytes());
/// ```
pub fn build_request(command: Command) -> [u8; REQUEST_SIZE] {
    let code = u8::from(command);
    let mut msg = [0u8; REQUEST_SIZE];

    msg[..LEN_OFFSET].copy_from_slice(&HEADER);
    LittleEndian::write_u16(&mut msg[LEN_OFFSET..COMMAND_OFFSET], 1);
    msg[COMMAND_OFFSET] = code;

    let crc = checksum::calculate(&msg[COMMAND_OFFSET..PAYLOAD_OFFSET]);
    LittleEndian::write_u16(&mut msg[PAYLOAD_OFFSET..], crc);

    trace!(command = %command, frame = %hex::encode(msg), "Built request");

    msg
}

/// CMD_GET_MASSA request
pub fn get_massa() -> [u8; REQUEST_SIZE] {
    build_request(Command::GetMassa)
}

/// CMD_GET_SCALE_PAR request
pub fn get_scale_par() -> [u8; REQUEST_SIZE] {
    build_request(Command::GetScalePar)
}

/// Encode a frame with an arbitrary code and payload
///
/// Responses share the request layout, so this is what a scale (or a
/// simulator standing in for one) puts on the wire.
///
/// # Panics
///
/// Panics if `payload` is longer than [`MAX_PAYLOAD_SIZE`].
pub fn encode(code: u8, payload: &[u8]) -> BytesMut {
    assert!(
        payload.len() <= MAX_PAYLOAD_SIZE,
        "payload of {} bytes does not fit the length field",
        payload.len()
    );

    let mut buf = BytesMut::with_capacity(MIN_FRAME_SIZE + payload.len());

    buf.put_slice(&HEADER);
    buf.put_u16_le((payload.len() + 1) as u16);
    buf.put_u8(code);
    buf.put_slice(payload);

    let crc = checksum::calculate(&buf[COMMAND_OFFSET..]);
    buf.put_u16_le(crc);

    buf
}

/// Allowed total frame size for a response code, `None` if unbounded
fn size_bounds(code: u8) -> Option<(usize, usize)> {
    match ResponseCode::try_from(code) {
        Ok(ResponseCode::AckMassa) => Some((MIN_FRAME_SIZE, MAX_MASSA_RESPONSE)),
        Ok(ResponseCode::AckScalePar) => Some((MIN_FRAME_SIZE, MAX_SCALE_PAR_RESPONSE)),
        _ => None,
    }
}

/// Validate a received frame
///
/// `raw` is the receive buffer and `received` the number of bytes the
/// transport reported. Checks run in order and stop at the first failure:
///
/// 1. magic header
/// 2. total size against the bounds of the echoed response code
/// 3. length field equals `received - 7`
/// 4. checksum over command byte and payload
///
/// On success the payload is trusted to be well-formed.
///
/// # Errors
///
/// Returns the [`FrameError`] of the first failed check.
pub fn validate(raw: &[u8], received: usize) -> Result<Frame<'_>, FrameError> {
    // Buffer holds fewer bytes than the transport claims
    let buf = raw
        .get(..received)
        .ok_or(FrameError::TooShort { actual: raw.len() })?;

    trace!(len = buf.len(), frame = %hex::encode(buf), "Validating frame");

    if buf.len() < HEADER.len() {
        return Err(FrameError::TooShort { actual: buf.len() });
    }

    let header = [buf[0], buf[1], buf[2]];
    if header != HEADER {
        debug!(header = ?header, "Bad frame header");
        return Err(FrameError::BadHeader(header));
    }

    // Bounded codes report their size error as soon as the code byte is in
    if let Some(&code) = buf.get(COMMAND_OFFSET) {
        if let Some((min, max)) = size_bounds(code) {
            if buf.len() < min || buf.len() > max {
                debug!(code, len = buf.len(), "Frame size out of bounds");
                return Err(FrameError::BadLength {
                    code,
                    actual: buf.len(),
                    min,
                    max,
                });
            }
        }
    }

    if buf.len() < MIN_FRAME_SIZE {
        return Err(FrameError::TooShort { actual: buf.len() });
    }

    let code = buf[COMMAND_OFFSET];

    let declared = LittleEndian::read_u16(&buf[LEN_OFFSET..COMMAND_OFFSET]);
    if usize::from(declared) != buf.len() - FRAME_OVERHEAD {
        debug!(declared, len = buf.len(), "Length field mismatch");
        return Err(FrameError::LengthMismatch {
            declared,
            actual: buf.len(),
        });
    }

    let end = buf.len() - CHECKSUM_SIZE;
    let received_crc = LittleEndian::read_u16(&buf[end..]);
    let expected_crc = checksum::calculate(&buf[COMMAND_OFFSET..end]);
    if expected_crc != received_crc {
        debug!(
            expected = format!("0x{:04X}", expected_crc),
            received = format!("0x{:04X}", received_crc),
            "Checksum mismatch"
        );
        return Err(FrameError::BadChecksum {
            expected: expected_crc,
            received: received_crc,
        });
    }

    Ok(Frame {
        code,
        payload: &buf[PAYLOAD_OFFSET..end],
    })
}
