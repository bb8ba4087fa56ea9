//! Heart-rate history record extraction.
//!
//! ## Frame Format
//!
//! | Field      | Size (bytes) | Description                              |
//! |------------|--------------|------------------------------------------|
//! | command id | 3            | Record-type tag (not carried on the wire) |
//! | records    | 6 × N        | Fixed-size record run                    |
//!
//! Each record:
//!
//! | Field     | Size (bytes) | Description                               |
//! |-----------|--------------|-------------------------------------------|
//! | timestamp | 4            | Device epoch counter, big-endian          |
//! | bpm       | 1            | Heart-rate sample                         |
//! | padding   | 1            | Ignored                                   |
//!
//! A trailing fragment shorter than one record is discarded without
//! error, and samples outside the physiological range are dropped as
//! sensor noise rather than reported. Truncated or garbled frames
//! simply yield fewer records.

use chrono::{DateTime, Utc};

use crate::time::to_utc;

/// Size of a JL command id in bytes.
pub const JL_CMD_ID_SIZE: usize = 3;

/// Records start at this offset within the full JL frame.
pub const JL_BODY_OFFSET: usize = 3;

/// Size of one history record in bytes.
pub const JL_RECORD_SIZE: usize = 6;

/// Lowest heart rate accepted as a real sample.
pub const BPM_MIN: u8 = 30;

/// Highest heart rate accepted as a real sample.
pub const BPM_MAX: u8 = 220;

/// The command id tagging heart-rate history frames.
///
/// Extracted from the vendor's reference application.
pub const JL_CMD_HR_HISTORY: JlCommandId = JlCommandId([0x02, 0x24, 0x00]);

/// A 3-byte JL command identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JlCommandId(pub [u8; JL_CMD_ID_SIZE]);

impl JlCommandId {
    /// Create a command id from bytes.
    pub const fn new(bytes: [u8; JL_CMD_ID_SIZE]) -> Self {
        JlCommandId(bytes)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; JL_CMD_ID_SIZE] {
        &self.0
    }
}

/// One decoded heart-rate observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HrRecord {
    /// When the sample was taken.
    pub timestamp: DateTime<Utc>,
    /// Heart rate in beats per minute.
    pub bpm: u8,
}

/// Decode the heart-rate records carried in a history-dump payload.
///
/// `sub_frame` is the notification payload starting at the JL boundary;
/// `command_id` is the record-type tag the caller recovered out of band
/// ([`JL_CMD_HR_HISTORY`] for heart rate). The full JL frame is the tag
/// followed by the payload, with records starting at [`JL_BODY_OFFSET`].
/// `local_offset` is threaded to the timestamp normalizer (see
/// [`crate::to_epoch_seconds`]).
///
/// Records are returned eagerly in frame order. The device emits them
/// with monotonically increasing counters, but that is not enforced
/// here. There are no error outcomes: malformed frames yield fewer
/// (possibly zero) records.
pub fn decode_hr_history(
    sub_frame: &[u8],
    command_id: JlCommandId,
    local_offset: Option<i32>,
) -> Vec<HrRecord> {
    let mut frame = Vec::with_capacity(JL_CMD_ID_SIZE + sub_frame.len());
    frame.extend_from_slice(command_id.as_bytes());
    frame.extend_from_slice(sub_frame);

    let mut records = Vec::new();
    let mut i = JL_BODY_OFFSET;
    while i + JL_RECORD_SIZE <= frame.len() {
        let raw = u32::from_be_bytes([frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]);
        let bpm = frame[i + 4];
        // frame[i + 5] is padding
        if (BPM_MIN..=BPM_MAX).contains(&bpm) {
            records.push(HrRecord {
                timestamp: to_utc(raw, local_offset),
                bpm,
            });
        }
        i += JL_RECORD_SIZE;
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(counter: u32, bpm: u8) -> [u8; 6] {
        let c = counter.to_be_bytes();
        [c[0], c[1], c[2], c[3], bpm, 0x00]
    }

    #[test]
    fn test_single_record() {
        // Counter 100, 60 bpm.
        let sub_frame = [0x00, 0x00, 0x00, 0x64, 0x3C, 0x00];
        let records = decode_hr_history(&sub_frame, JL_CMD_HR_HISTORY, None);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp.timestamp(), 946_684_900);
        assert_eq!(records[0].bpm, 60);
    }

    #[test]
    fn test_empty_payload_yields_no_records() {
        assert!(decode_hr_history(&[], JL_CMD_HR_HISTORY, None).is_empty());
    }

    #[test]
    fn test_trailing_fragment_is_discarded() {
        let mut sub_frame = Vec::new();
        sub_frame.extend_from_slice(&record(100, 60));
        sub_frame.extend_from_slice(&record(160, 62));
        // Five stray bytes, one short of a record.
        sub_frame.extend_from_slice(&[0x00, 0x00, 0x00, 0xC8, 0x40]);

        let records = decode_hr_history(&sub_frame, JL_CMD_HR_HISTORY, None);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_bpm_range_filter_boundaries() {
        let mut sub_frame = Vec::new();
        sub_frame.extend_from_slice(&record(100, 29));
        sub_frame.extend_from_slice(&record(160, 30));
        sub_frame.extend_from_slice(&record(220, 220));
        sub_frame.extend_from_slice(&record(280, 221));

        let records = decode_hr_history(&sub_frame, JL_CMD_HR_HISTORY, None);
        let bpms: Vec<u8> = records.iter().map(|r| r.bpm).collect();
        assert_eq!(bpms, vec![30, 220]);
    }

    #[test]
    fn test_records_kept_in_frame_order() {
        // Counters deliberately out of order; the decoder does not sort.
        let mut sub_frame = Vec::new();
        sub_frame.extend_from_slice(&record(500, 80));
        sub_frame.extend_from_slice(&record(100, 70));

        let records = decode_hr_history(&sub_frame, JL_CMD_HR_HISTORY, None);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].bpm, 80);
        assert_eq!(records[1].bpm, 70);
        assert!(records[0].timestamp > records[1].timestamp);
    }

    #[test]
    fn test_local_offset_shifts_timestamps() {
        let sub_frame = record(100, 60);
        let utc = decode_hr_history(&sub_frame, JL_CMD_HR_HISTORY, None);
        let shifted = decode_hr_history(&sub_frame, JL_CMD_HR_HISTORY, Some(3600));

        assert_eq!(
            utc[0].timestamp.timestamp() - 3600,
            shifted[0].timestamp.timestamp()
        );
    }
}
