//! Response dispatch
//!
//! A validated frame is turned into a [`Response`] with a single match on
//! the echoed response code.

use std::fmt;

use scale100_types::{ScaleParameters, WeightReading};

use crate::{
    command::ResponseCode,
    device_error::{DeviceError, translate},
    error::Result,
    frame::{self, Frame},
    payload,
};

/// Decoded scale response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// CMD_ACK_MASSA
    Weight(WeightReading),

    /// CMD_ACK_SCALE_PAR
    ScaleParameters(ScaleParameters),

    /// The scale reported an error, or answered with an unknown code
    Device(DeviceError),
}

impl Response {
    /// Decode a validated frame
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) if a success payload
    /// has the wrong shape. Device-reported problems are not errors at this
    /// level; they come back as [`Response::Device`].
    pub fn decode(frame: &Frame<'_>) -> Result<Self> {
        let response = match ResponseCode::try_from(frame.code) {
            Ok(ResponseCode::AckMassa) => Self::Weight(payload::decode_weight(frame.payload)?),
            Ok(ResponseCode::AckScalePar) => {
                Self::ScaleParameters(payload::decode_scale_parameters(frame.payload)?)
            }
            Ok(ResponseCode::ExecError | ResponseCode::Nack) => match frame.payload.first() {
                Some(&detail) => Self::Device(translate(frame.code, detail)),
                None => Self::Device(DeviceError::MissingDetail(frame.code)),
            },
            Err(code) => Self::Device(DeviceError::UnexpectedResponseCode(code)),
        };

        Ok(response)
    }

    /// Validate raw bytes and decode them
    ///
    /// # Examples
    ///
    /// ```
    /// use scale100_core::{frame, Response};
    ///
    /// let mut payload = 1500i32.to_le_bytes().to_vec();
    /// payload.extend_from_slice(&[1, 1, 0, 0]);
    /// let raw = frame::encode(0x24, &payload);
    ///
    /// match Response::parse(&raw, raw.len()).unwrap() {
    ///     Response::Weight(reading) => assert_eq!(reading.weight, 1500),
    ///     other => panic!("unexpected {other}"),
    /// }
    /// ```
    pub fn parse(raw: &[u8], received: usize) -> Result<Self> {
        let frame = frame::validate(raw, received)?;
        Self::decode(&frame)
    }

    /// Extract a weight reading
    ///
    /// A device error or the wrong success response becomes an error.
    pub fn into_weight(self) -> Result<WeightReading> {
        match self {
            Self::Weight(reading) => Ok(reading),
            Self::ScaleParameters(_) => Err(Self::unexpected(ResponseCode::AckScalePar)),
            Self::Device(err) => Err(err.into()),
        }
    }

    /// Extract scale parameters
    ///
    /// A device error or the wrong success response becomes an error.
    pub fn into_scale_parameters(self) -> Result<ScaleParameters> {
        match self {
            Self::ScaleParameters(params) => Ok(params),
            Self::Weight(_) => Err(Self::unexpected(ResponseCode::AckMassa)),
            Self::Device(err) => Err(err.into()),
        }
    }

    fn unexpected(code: ResponseCode) -> crate::Error {
        DeviceError::UnexpectedResponseCode(code.into()).into()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weight(reading) => write!(f, "{}", reading),
            Self::ScaleParameters(params) => write!(f, "{}", params),
            Self::Device(err) => write!(f, "{}", err),
        }
    }
}
