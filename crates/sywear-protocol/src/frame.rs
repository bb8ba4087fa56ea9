//! Command frame encoding/decoding and stream reassembly.
//!
//! Every outbound request shares one wire layout:
//!
//! ```text
//! +------+------+------+-------+--------+--------+--------+------------+-----------+
//! | 0xAB | 0x01 | 0x00 | <len> | cmd id | sub id | action | terminator | payload…  |
//! +------+------+------+-------+--------+--------+--------+------------+-----------+
//! ```
//!
//! `<len>` is `3 + payload.len()`, so a payload-free frame declares 3.
//! The `AB 01` tag and the zero length high byte are protocol-fixed.

use bytes::{Buf, BytesMut};

use crate::constants::*;
use crate::error::ProtocolError;
use crate::types::Opcode;

/// An outbound request frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    /// Command identifier.
    pub command_id: u8,
    /// Sub-command identifier.
    pub sub_id: u8,
    /// Action byte.
    pub action: u8,
    /// Terminator byte.
    pub terminator: u8,
    /// Extra payload bytes, may be empty.
    pub payload: Vec<u8>,
}

impl CommandFrame {
    /// Create a payload-free frame from an opcode.
    pub fn from_opcode(opcode: Opcode) -> Self {
        CommandFrame::with_payload(opcode, Vec::new())
    }

    /// Create a frame from an opcode and payload.
    pub fn with_payload(opcode: Opcode, payload: Vec<u8>) -> Self {
        CommandFrame {
            command_id: opcode.command_id,
            sub_id: opcode.sub_id,
            action: opcode.action,
            terminator: opcode.terminator,
            payload,
        }
    }

    /// Encode the frame to bytes.
    ///
    /// Total over all field values. Payloads longer than
    /// [`MAX_CMD_PAYLOAD`] cannot be declared by the one-byte length
    /// field.
    pub fn encode(&self) -> Vec<u8> {
        debug_assert!(self.payload.len() <= MAX_CMD_PAYLOAD);

        let mut buf = Vec::with_capacity(CMD_FIXED_SIZE + self.payload.len());
        buf.extend_from_slice(&CMD_HEADER);
        buf.push((CMD_LEN_BASE + self.payload.len()) as u8);
        buf.push(self.command_id);
        buf.push(self.sub_id);
        buf.push(self.action);
        buf.push(self.terminator);
        buf.extend_from_slice(&self.payload);
        buf
    }

    /// Parse a frame back from bytes, the inverse of [`encode`].
    ///
    /// [`encode`]: CommandFrame::encode
    pub fn decode(frame: &[u8]) -> Result<Self, ProtocolError> {
        if frame.len() < CMD_FIXED_SIZE {
            return Err(ProtocolError::FrameTooShort {
                expected: CMD_FIXED_SIZE,
                actual: frame.len(),
            });
        }
        if frame[..3] != CMD_HEADER {
            return Err(ProtocolError::InvalidHeader {
                expected: CMD_HEADER,
                actual: [frame[0], frame[1], frame[2]],
            });
        }

        let declared = frame[3] as usize;
        let actual = frame.len() - CMD_FIXED_SIZE + CMD_LEN_BASE;
        if declared != actual {
            return Err(ProtocolError::LengthMismatch { declared, actual });
        }

        Ok(CommandFrame {
            command_id: frame[4],
            sub_id: frame[5],
            action: frame[6],
            terminator: frame[7],
            payload: frame[CMD_FIXED_SIZE..].to_vec(),
        })
    }
}

/// Encode a command frame from its parts.
///
/// Total over all byte values; the caller is responsible for supplying a
/// protocol-correct opcode (see [`crate::constants`] for the recovered
/// ones).
pub fn encode_command(
    command_id: u8,
    sub_id: u8,
    action: u8,
    terminator: u8,
    payload: &[u8],
) -> Vec<u8> {
    CommandFrame {
        command_id,
        sub_id,
        action,
        terminator,
        payload: payload.to_vec(),
    }
    .encode()
}

/// A codec for reassembling frames from a fragmented byte stream.
///
/// BLE-class transports cap notification payloads well below the maximum
/// frame size, so a frame can arrive split across several deliveries.
/// Feed each delivery with [`push`] and drain complete frames with
/// [`decode`], one codec instance per notification source (keying by
/// source identity is the caller's concern).
///
/// The codec understands the command wire layout (the only one with a
/// declared length field) and is the extension point for reassembling
/// further frame shapes as their length rules are discovered.
///
/// [`push`]: FrameCodec::push
/// [`decode`]: FrameCodec::decode
#[derive(Debug, Default)]
pub struct FrameCodec {
    /// Buffer for accumulating incoming data.
    buffer: BytesMut,
}

impl FrameCodec {
    /// Create a new frame codec.
    pub fn new() -> Self {
        FrameCodec {
            buffer: BytesMut::with_capacity(MAX_FRAME_SIZE),
        }
    }

    /// Add received data to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to extract one complete frame from the buffer.
    ///
    /// Scans to the next `AB` tag byte, discarding any preceding
    /// garbage, then waits until the declared length worth of bytes is
    /// buffered. Returns `Some(frame)` with the complete frame (header
    /// included), or `None` if more data is needed.
    pub fn decode(&mut self) -> Option<Vec<u8>> {
        loop {
            let mut skipped = 0usize;
            while !self.buffer.is_empty() && self.buffer[0] != FRAME_TAG {
                self.buffer.advance(1);
                skipped += 1;
            }
            if skipped > 0 {
                log::trace!("discarded {} bytes before frame tag", skipped);
            }

            // Tag + direction byte + 2-byte length field
            if self.buffer.len() < 4 {
                return None;
            }

            let declared = self.buffer[3] as usize;
            if declared < CMD_LEN_BASE {
                // The tag byte was a false start; drop it and rescan.
                self.buffer.advance(1);
                continue;
            }

            let total = declared - CMD_LEN_BASE + CMD_FIXED_SIZE;
            if self.buffer.len() < total {
                return None;
            }

            return Some(self.buffer.split_to(total).to_vec());
        }
    }

    /// Get the number of buffered bytes.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_auth_start() {
        let encoded = encode_command(0xAD, 0x1A, 0x1A, 0x10, &[]);
        assert_eq!(encoded, [0xAB, 0x01, 0x00, 0x03, 0xAD, 0x1A, 0x1A, 0x10]);
    }

    #[test]
    fn test_length_field_counts_payload() {
        let encoded = encode_command(0x3C, 0x92, 0x02, 0x06, &[0x19, 0x0B, 0x09]);
        assert_eq!(encoded[3], 0x06);
        assert_eq!(encoded.len(), 11);
    }

    #[test]
    fn test_roundtrip() {
        let frames = [
            CommandFrame::from_opcode(OP_AUTH_START),
            CommandFrame::with_payload(OP_TIME_SYNC, vec![0x19, 0x0B, 0x09, 0x16, 0x14, 0x00]),
            CommandFrame::with_payload(OP_ENABLE_DATA, vec![0x01]),
            CommandFrame {
                command_id: 0x00,
                sub_id: 0xFF,
                action: 0xAB,
                terminator: 0x00,
                payload: vec![0xDE, 0xAD, 0xBE, 0xEF],
            },
        ];

        for frame in frames {
            let decoded = CommandFrame::decode(&frame.encode()).expect("roundtrip");
            assert_eq!(decoded, frame);
        }
    }

    #[test]
    fn test_decode_rejects_short_frame() {
        let err = CommandFrame::decode(&[0xAB, 0x01, 0x00, 0x03]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::FrameTooShort {
                expected: CMD_FIXED_SIZE,
                actual: 4,
            }
        );
    }

    #[test]
    fn test_decode_rejects_bad_header() {
        let err =
            CommandFrame::decode(&[0xAB, 0x11, 0x00, 0x03, 0xAD, 0x1A, 0x1A, 0x10]).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidHeader { .. }));
    }

    #[test]
    fn test_decode_rejects_length_mismatch() {
        // Declares one payload byte that never arrives.
        let err =
            CommandFrame::decode(&[0xAB, 0x01, 0x00, 0x04, 0xAD, 0x1A, 0x1A, 0x10]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::LengthMismatch {
                declared: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_codec_reassembles_split_frame() {
        let frame = encode_command(0x3C, 0x92, 0x02, 0x06, &[0x19, 0x0B, 0x09, 0x16, 0x14, 0x00]);

        let mut codec = FrameCodec::new();
        codec.push(&frame[..5]);
        assert!(codec.decode().is_none());

        codec.push(&frame[5..]);
        assert_eq!(codec.decode().expect("complete frame"), frame);
        assert_eq!(codec.buffered_len(), 0);
    }

    #[test]
    fn test_codec_skips_leading_garbage() {
        let frame = encode_command(0xAD, 0x1A, 0x1A, 0x10, &[]);

        let mut codec = FrameCodec::new();
        codec.push(&[0x00, 0x42, 0x13]);
        codec.push(&frame);
        assert_eq!(codec.decode().expect("complete frame"), frame);
    }

    #[test]
    fn test_codec_recovers_from_false_tag() {
        // A stray AB with an impossible length byte must not wedge the
        // stream.
        let frame = encode_command(0xAD, 0x1A, 0x1A, 0x10, &[]);

        let mut codec = FrameCodec::new();
        codec.push(&[0xAB, 0x00, 0x00, 0x00]);
        codec.push(&frame);
        assert_eq!(codec.decode().expect("complete frame"), frame);
    }

    #[test]
    fn test_codec_emits_back_to_back_frames() {
        let first = encode_command(0xAD, 0x1A, 0x1A, 0x10, &[]);
        let second = encode_command(0xCC, 0x8F, 0x68, 0x10, &[]);

        let mut codec = FrameCodec::new();
        codec.push(&first);
        codec.push(&second);

        assert_eq!(codec.decode().expect("first frame"), first);
        assert_eq!(codec.decode().expect("second frame"), second);
        assert!(codec.decode().is_none());
    }

    #[test]
    fn test_codec_clear() {
        let mut codec = FrameCodec::new();
        codec.push(&[0xAB, 0x01]);
        codec.clear();
        assert_eq!(codec.buffered_len(), 0);
        assert!(codec.decode().is_none());
    }
}
