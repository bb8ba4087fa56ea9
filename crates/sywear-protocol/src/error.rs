//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when parsing SY protocol frames.
///
/// Inbound notifications are never errors: classification is total and
/// unknown shapes come back as opaque variants. Errors arise only from
/// the strict parsers: [`crate::CommandFrame::decode`] and
/// [`crate::BpMeasurement::decode`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Frame is too short to contain the fixed fields.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// Frame does not start with the expected tag bytes.
    #[error("invalid frame header: expected {expected:02X?}, got {actual:02X?}")]
    InvalidHeader {
        /// Expected header prefix.
        expected: [u8; 3],
        /// Bytes actually received.
        actual: [u8; 3],
    },

    /// The declared length field disagrees with the bytes present.
    #[error("length mismatch: header declares {declared}, frame carries {actual}")]
    LengthMismatch {
        /// Value of the length field.
        declared: usize,
        /// Equivalent length of the frame as received.
        actual: usize,
    },
}
