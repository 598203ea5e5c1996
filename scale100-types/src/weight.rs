//! Weight report structures

use std::fmt;

/// Current weight report (CMD_ACK_MASSA payload)
///
/// Flag bytes are kept exactly as the scale sent them. Interpreting them
/// against capacity limits belongs to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeightReading {
    /// Net/gross weight in units of the current division
    pub weight: i32,

    /// Division (scale interval) code
    pub division: u8,

    /// Stability flag, non-zero when the reading is stable
    pub stable: u8,

    /// Net flag, non-zero when `weight` is a net weight
    pub net: u8,

    /// Zero flag, non-zero when the scale indicates zero
    pub zero: u8,

    /// Tare weight. The scale may omit it, in which case it is 0.
    pub tare: i32,
}

impl WeightReading {
    /// Reading is stable
    pub fn is_stable(&self) -> bool {
        self.stable != 0
    }

    /// Reading is a net weight (tare applied)
    pub fn is_net(&self) -> bool {
        self.net != 0
    }

    /// Scale reports zero
    pub fn is_zero(&self) -> bool {
        self.zero != 0
    }
}

impl fmt::Display for WeightReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weight[{} (div={}), tare={}, stable={}, net={}, zero={}]",
            self.weight,
            self.division,
            self.tare,
            self.is_stable(),
            self.is_net(),
            self.is_zero()
        )
    }
}
