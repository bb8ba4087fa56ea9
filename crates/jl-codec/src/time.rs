//! Timestamp normalization.
//!
//! The device stamps records with a 32-bit counter of seconds since
//! 2000-01-01T00:00:00 instead of the Unix epoch. The vendor app also
//! subtracts the observer's local UTC offset (raw zone offset plus DST)
//! at conversion time, to compensate for devices that store local rather
//! than UTC time, but ships with that subtraction disabled. Whether a
//! given device needs it is an open question, so the correction is an
//! explicit per-call parameter here, never read from ambient state and
//! never enabled by default.

use chrono::{DateTime, Utc};

/// Seconds between 2000-01-01T00:00:00Z and the Unix epoch.
pub const EPOCH_2000_OFFSET: i64 = 946_684_800;

/// Convert a raw device counter to seconds since the Unix epoch.
///
/// `local_offset` is the local-time correction in seconds east of UTC
/// (raw zone offset plus any DST adjustment); pass `None` to leave the
/// correction disabled. Total over all counter values.
pub fn to_epoch_seconds(raw: u32, local_offset: Option<i32>) -> i64 {
    raw as i64 + EPOCH_2000_OFFSET - local_offset.unwrap_or(0) as i64
}

/// Convert a raw device counter to a UTC instant.
pub fn to_utc(raw: u32, local_offset: Option<i32>) -> DateTime<Utc> {
    // The counter spans 2000..2136 and the correction is bounded by a
    // day, both inside chrono's representable range.
    DateTime::from_timestamp(to_epoch_seconds(raw, local_offset), 0)
        .unwrap_or(DateTime::UNIX_EPOCH)
}
