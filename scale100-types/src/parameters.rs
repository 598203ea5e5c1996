//! Scale parameter structures

use std::fmt;

/// Metrological parameters of the scale (CMD_ACK_SCALE_PAR payload)
///
/// Every field is reported by the scale as text. Values are stored as sent,
/// without the CRLF terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScaleParameters {
    /// Maximum capacity (PMax)
    pub max_capacity: String,

    /// Minimum capacity (PMin)
    pub min_capacity: String,

    /// Verification scale interval (PE)
    pub verification_interval: String,

    /// Maximum tare that can be taken (PT)
    pub max_tare: String,

    /// Calibration fix flag
    pub fix: String,

    /// Calibration code
    pub calibration_code: String,

    /// Firmware version
    pub software_version: String,

    /// Checksum over the parameter table, as reported by the scale
    pub parameters_checksum: String,
}

impl ScaleParameters {
    /// Number of text fields in the wire representation
    pub const FIELD_COUNT: usize = 8;

    /// Build from the eight fields in wire order
    pub fn from_fields(fields: [String; Self::FIELD_COUNT]) -> Self {
        let [
            max_capacity,
            min_capacity,
            verification_interval,
            max_tare,
            fix,
            calibration_code,
            software_version,
            parameters_checksum,
        ] = fields;

        Self {
            max_capacity,
            min_capacity,
            verification_interval,
            max_tare,
            fix,
            calibration_code,
            software_version,
            parameters_checksum,
        }
    }
}

impl fmt::Display for ScaleParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale[max: {}, min: {}, e: {}, T: {}, FW: {}]",
            self.max_capacity,
            self.min_capacity,
            self.verification_interval,
            self.max_tare,
            self.software_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_fields_order() {
        let params = ScaleParameters::from_fields([
            "15".into(),
            "0.04".into(),
            "0.002".into(),
            "5".into(),
            "1".into(),
            "A7".into(),
            "2.10".into(),
            "8C1F".into(),
        ]);

        assert_eq!(params.max_capacity, "15");
        assert_eq!(params.min_capacity, "0.04");
        assert_eq!(params.verification_interval, "0.002");
        assert_eq!(params.max_tare, "5");
        assert_eq!(params.fix, "1");
        assert_eq!(params.calibration_code, "A7");
        assert_eq!(params.software_version, "2.10");
        assert_eq!(params.parameters_checksum, "8C1F");
    }
}
