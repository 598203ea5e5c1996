//! Payload decoders for the two success responses
//!
//! Both decoders run on the payload of a frame that already passed
//! [`frame::validate`](crate::frame::validate), so they only check the
//! payload shape.

use byteorder::{ByteOrder, LittleEndian};
use tracing::debug;

use scale100_types::{ScaleParameters, WeightReading};

use crate::{
    constants::{parameters, weight},
    error::DecodeError,
};

/// Payload lengths accepted for CMD_ACK_MASSA
pub const WEIGHT_PAYLOAD_LENGTHS: &[usize] = &[weight::SHORT_PAYLOAD, weight::FULL_PAYLOAD];

/// Decode a CMD_ACK_MASSA payload
///
/// # Layout
///
/// ```text
/// 0..4   weight   (LE i32)
/// 4      division
/// 5      stable
/// 6      net
/// 7      zero
/// 8..12  tare     (LE i32, optional)
/// ```
///
/// # Errors
///
/// Returns [`DecodeError::BadPayloadLength`] unless the payload is 8 or 12
/// bytes long.
pub fn decode_weight(payload: &[u8]) -> Result<WeightReading, DecodeError> {
    if !WEIGHT_PAYLOAD_LENGTHS.contains(&payload.len()) {
        return Err(DecodeError::BadPayloadLength {
            expected: WEIGHT_PAYLOAD_LENGTHS,
            actual: payload.len(),
        });
    }

    let tare = if payload.len() == weight::FULL_PAYLOAD {
        LittleEndian::read_i32(&payload[8..12])
    } else {
        0
    };

    let reading = WeightReading {
        weight: LittleEndian::read_i32(&payload[0..4]),
        division: payload[4],
        stable: payload[5],
        net: payload[6],
        zero: payload[7],
        tare,
    };

    debug!(%reading, "Decoded weight");

    Ok(reading)
}

/// Scan one CRLF-terminated field at the start of `buf`
///
/// Looks for the delimiter within the first
/// [`MAX_FIELD_LEN`](parameters::MAX_FIELD_LEN) + 2 bytes. Returns the field
/// text and the number of bytes consumed including the delimiter, or `None`
/// as consumed length if no delimiter was found. In that case the text is
/// the (at most `MAX_FIELD_LEN` bytes long) prefix that was scanned.
pub fn scan_field(buf: &[u8]) -> (&[u8], Option<usize>) {
    let delimiter = parameters::DELIMITER.as_slice();
    let window = &buf[..buf.len().min(parameters::MAX_FIELD_LEN + delimiter.len())];

    match window.windows(delimiter.len()).position(|w| w == delimiter) {
        Some(pos) => (&buf[..pos], Some(pos + delimiter.len())),
        None => (&buf[..buf.len().min(parameters::MAX_FIELD_LEN)], None),
    }
}

/// Decode a CMD_ACK_SCALE_PAR payload
///
/// The payload is eight CRLF-terminated text fields in fixed order:
/// PMax, PMin, PE, PT, Fix, Calcode, PO version and PO checksum. Bytes
/// after the eighth delimiter are ignored. Field bytes are read as UTF-8,
/// invalid sequences are replaced.
///
/// # Errors
///
/// Returns [`DecodeError::UnterminatedField`] if any of the eight fields
/// has no delimiter within reach.
pub fn decode_scale_parameters(payload: &[u8]) -> Result<ScaleParameters, DecodeError> {
    let mut fields: [String; parameters::FIELD_COUNT] = Default::default();
    let mut offset = 0;

    for (index, field) in fields.iter_mut().enumerate() {
        let (text, consumed) = scan_field(&payload[offset..]);
        let consumed = consumed.ok_or(DecodeError::UnterminatedField { index, offset })?;

        *field = String::from_utf8_lossy(text).into_owned();
        offset += consumed;
    }

    if offset < payload.len() {
        debug!(trailing = payload.len() - offset, "Ignoring bytes after last field");
    }

    let params = ScaleParameters::from_fields(fields);

    debug!(%params, "Decoded scale parameters");

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const FIELDS: [&str; 8] = [
        "PMaxValue",
        "PMinValue",
        "PEValue",
        "PTValue",
        "FixValue",
        "CalcodeValue",
        "PoVerValue",
        "PoSummValue",
    ];

    fn join_fields(fields: &[&str]) -> Vec<u8> {
        let mut payload = Vec::new();
        for field in fields {
            payload.extend_from_slice(field.as_bytes());
            payload.extend_from_slice(b"\r\n");
        }
        payload
    }

    fn weight_payload(weight: i32, tare: Option<i32>) -> Vec<u8> {
        let mut payload = weight.to_le_bytes().to_vec();
        payload.extend_from_slice(&[3, 1, 1, 0]);
        if let Some(tare) = tare {
            payload.extend_from_slice(&tare.to_le_bytes());
        }
        payload
    }

    #[test]
    fn test_decode_weight_short() {
        let reading = decode_weight(&weight_payload(-1500, None)).unwrap();

        assert_eq!(
            reading,
            WeightReading {
                weight: -1500,
                division: 3,
                stable: 1,
                net: 1,
                zero: 0,
                tare: 0,
            }
        );
    }

    #[test]
    fn test_decode_weight_short_ignores_following_bytes() {
        // Bytes after an 8-byte payload are never read as tare
        let buf = weight_payload(10, Some(777));
        let reading = decode_weight(&buf[..8]).unwrap();

        assert_eq!(reading.tare, 0);
        assert_eq!(reading.weight, 10);
    }

    #[test]
    fn test_decode_weight_full() {
        let reading = decode_weight(&weight_payload(25_000, Some(-300))).unwrap();

        assert_eq!(reading.weight, 25_000);
        assert_eq!(reading.tare, -300);
        assert_eq!(reading.division, 3);
    }

    #[test]
    fn test_decode_weight_bad_length() {
        for len in [0, 4, 7, 9, 11, 13, 16] {
            let payload = vec![0u8; len];
            assert_eq!(
                decode_weight(&payload),
                Err(DecodeError::BadPayloadLength {
                    expected: &[8, 12],
                    actual: len,
                })
            );
        }
    }

    #[test]
    fn test_decode_scale_parameters() {
        let params = decode_scale_parameters(&join_fields(&FIELDS)).unwrap();

        assert_eq!(params.max_capacity, "PMaxValue");
        assert_eq!(params.min_capacity, "PMinValue");
        assert_eq!(params.verification_interval, "PEValue");
        assert_eq!(params.max_tare, "PTValue");
        assert_eq!(params.fix, "FixValue");
        assert_eq!(params.calibration_code, "CalcodeValue");
        assert_eq!(params.software_version, "PoVerValue");
        assert_eq!(params.parameters_checksum, "PoSummValue");
    }

    #[test]
    fn test_decode_scale_parameters_empty_fields() {
        let params = decode_scale_parameters(&[b'\r', b'\n'].repeat(8)).unwrap();
        assert_eq!(params, ScaleParameters::default());
    }

    #[test]
    fn test_decode_scale_parameters_trailing_bytes() {
        let mut payload = join_fields(&FIELDS);
        payload.extend_from_slice(b"extra");

        let params = decode_scale_parameters(&payload).unwrap();
        assert_eq!(params.parameters_checksum, "PoSummValue");
    }

    #[test]
    fn test_decode_scale_parameters_missing_field() {
        let payload = join_fields(&FIELDS[..7]);

        assert_eq!(
            decode_scale_parameters(&payload),
            Err(DecodeError::UnterminatedField {
                index: 7,
                offset: payload.len(),
            })
        );
    }

    #[test]
    fn test_decode_scale_parameters_overlong_field() {
        let long = "A".repeat(20);
        let fields = ["15", long.as_str(), "e", "T", "F", "C", "V", "S"];

        assert_eq!(
            decode_scale_parameters(&join_fields(&fields)),
            Err(DecodeError::UnterminatedField { index: 1, offset: 4 })
        );
    }

    #[test]
    fn test_scan_field() {
        assert_eq!(scan_field(b"15\r\nrest"), (&b"15"[..], Some(4)));
        assert_eq!(scan_field(b"\r\n"), (&b""[..], Some(2)));
        assert_eq!(scan_field(b""), (&b""[..], None));
        assert_eq!(scan_field(b"no delimiter"), (&b"no delimiter"[..], None));
    }

    #[test]
    fn test_scan_field_max_length() {
        let mut buf = vec![b'9'; 19];
        buf.extend_from_slice(b"\r\n");
        assert_eq!(scan_field(&buf), (&buf[..19], Some(21)));

        // 20 bytes of text: not found, truncated to 19
        let mut buf = vec![b'9'; 20];
        buf.extend_from_slice(b"\r\n");
        assert_eq!(scan_field(&buf), (&buf[..19], None));
    }

    #[test]
    fn test_scan_field_lone_cr() {
        assert_eq!(scan_field(b"1\r2\r\n"), (&b"1\r2"[..], Some(5)));
    }

    proptest! {
        #[test]
        fn prop_weight_and_tare_round_trip(weight in any::<i32>(), tare in any::<i32>()) {
            let reading = decode_weight(&weight_payload(weight, Some(tare))).unwrap();

            prop_assert_eq!(reading.weight, weight);
            prop_assert_eq!(reading.tare, tare);
        }

        #[test]
        fn prop_short_payload_has_no_tare(weight in any::<i32>()) {
            let reading = decode_weight(&weight_payload(weight, None)).unwrap();

            prop_assert_eq!(reading.weight, weight);
            prop_assert_eq!(reading.tare, 0);
        }

        #[test]
        fn prop_fields_round_trip(fields in proptest::array::uniform8("[ -~]{0,19}")) {
            let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
            let params = decode_scale_parameters(&join_fields(&refs)).unwrap();

            prop_assert_eq!(params, ScaleParameters::from_fields(fields));
        }
    }
}
