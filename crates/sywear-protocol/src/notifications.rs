//! Inbound notification classification.
//!
//! Device → host frames arrive as short push notifications with no
//! self-describing structure. Classification is a total function: every
//! byte sequence maps deterministically to exactly one variant, nothing
//! panics, and nothing is discarded. Unknown shapes are carried through
//! opaque so the caller can inspect or log them, and so new frame types
//! can be added without re-deriving the router.

use jl_codec::{decode_hr_history, HrRecord, JL_CMD_HR_HISTORY};

use crate::constants::*;

/// Classification of one raw notification buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Too short to possibly be a history dump. Echo/ack frames land
    /// here; the bytes are carried through unchanged.
    TooShort(Vec<u8>),

    /// Does not start with the notification header. Opaque.
    Unrecognized(Vec<u8>),

    /// A well-formed notification that is not a history dump (an
    /// unknown sub-tag). Opaque.
    Other(Vec<u8>),

    /// A history dump wrapping a JL sub-frame.
    HistoryDump {
        /// The nested JL payload, from the sub-frame boundary to the
        /// end of the notification.
        sub_frame: Vec<u8>,
    },
}

impl Notification {
    /// Classify a raw notification buffer.
    pub fn classify(raw: &[u8]) -> Notification {
        if raw.len() < MIN_HISTORY_DUMP_SIZE {
            return Notification::TooShort(raw.to_vec());
        }
        if raw[..3] != NOTIFY_HEADER {
            return Notification::Unrecognized(raw.to_vec());
        }
        if raw[HISTORY_SUB_TAG_OFFSET..HISTORY_SUB_TAG_OFFSET + 3] != HISTORY_SUB_TAG {
            return Notification::Other(raw.to_vec());
        }
        Notification::HistoryDump {
            sub_frame: raw[HISTORY_PAYLOAD_OFFSET..].to_vec(),
        }
    }

    /// Decode the heart-rate records from a history dump.
    ///
    /// Returns `None` for every other variant. `local_offset` is
    /// threaded through to the timestamp normalizer, per decode call.
    pub fn hr_records(&self, local_offset: Option<i32>) -> Option<Vec<HrRecord>> {
        match self {
            Notification::HistoryDump { sub_frame } => Some(decode_hr_history(
                sub_frame,
                JL_CMD_HR_HISTORY,
                local_offset,
            )),
            _ => None,
        }
    }
}
