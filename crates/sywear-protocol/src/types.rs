//! Common types used in the protocol.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// A reverse-engineered opcode: the four fixed fields of a command
/// frame, without payload.
///
/// Known combinations are enumerated in [`crate::constants`]; the opcode
/// space has no generic validity rule, so arbitrary tuples are sendable
/// too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    /// Command identifier.
    pub command_id: u8,
    /// Sub-command identifier.
    pub sub_id: u8,
    /// Action byte.
    pub action: u8,
    /// Terminator byte.
    pub terminator: u8,
}

impl Opcode {
    /// Create an opcode tuple.
    pub const fn new(command_id: u8, sub_id: u8, action: u8, terminator: u8) -> Self {
        Opcode {
            command_id,
            sub_id,
            action,
            terminator,
        }
    }
}

/// Device wall-clock encoding used by the time-sync command.
///
/// Serialized as `YY MM DD HH mm SS` with the year counted from 2000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDateTime {
    /// Full calendar year (2000..=2255 representable).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-59).
    pub second: u8,
}

impl DeviceDateTime {
    /// Build from a calendar date-time in the device's display zone.
    ///
    /// Years outside the representable range are clamped.
    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        DeviceDateTime {
            year: dt.year().clamp(2000, 2255) as u16,
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
        }
    }

    /// Serialize to the six payload bytes.
    pub fn to_payload(&self) -> [u8; 6] {
        [
            self.year.saturating_sub(2000) as u8,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ]
    }
}
