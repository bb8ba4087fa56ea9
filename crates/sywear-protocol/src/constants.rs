//! Protocol constants
//!
//! Frame tags, size bounds, and the reverse-engineered opcode table for
//! the SY wearable protocol. The device assigns opcodes no generic
//! validity rule. These are the combinations with a known meaning,
//! recovered by replaying captured vendor-app traffic. Anything else is
//! still a well-formed frame.

use crate::types::Opcode;

// ============================================================================
// Frame Tags
// ============================================================================

/// First byte of every frame in either direction.
pub const FRAME_TAG: u8 = 0xAB;

/// Fixed prefix of host → device command frames, including the
/// always-zero high byte of the length field.
pub const CMD_HEADER: [u8; 3] = [0xAB, 0x01, 0x00];

/// Fixed prefix of device → host notification frames.
pub const NOTIFY_HEADER: [u8; 3] = [0xAB, 0x11, 0x00];

/// Sub-tag marking a notification as a history dump.
pub const HISTORY_SUB_TAG: [u8; 3] = [0x05, 0x03, 0x10];

// ============================================================================
// Frame Layout
// ============================================================================

/// Offset of the history-dump sub-tag within a notification frame.
pub const HISTORY_SUB_TAG_OFFSET: usize = 6;

/// Offset of the nested JL payload within a history-dump frame.
pub const HISTORY_PAYLOAD_OFFSET: usize = 9;

/// Shortest buffer that can possibly be a history dump.
pub const MIN_HISTORY_DUMP_SIZE: usize = 15;

/// The length byte counts this many bytes beyond the payload.
pub const CMD_LEN_BASE: usize = 3;

/// Size of a command frame with an empty payload: 4-byte header plus the
/// four fixed fields.
pub const CMD_FIXED_SIZE: usize = 8;

/// Longest payload the one-byte length field can declare.
pub const MAX_CMD_PAYLOAD: usize = 0xFF - CMD_LEN_BASE;

/// Maximum size of a command frame on the wire.
pub const MAX_FRAME_SIZE: usize = CMD_FIXED_SIZE + MAX_CMD_PAYLOAD;

// ============================================================================
// Ring Opcodes (host → device)
// ============================================================================

/// Begin a session after connecting.
pub const OP_SESSION_START: Opcode = Opcode::new(0xB8, 0xF0, 0x02, 0x20);
/// Query static device information.
pub const OP_DEVICE_INFO: Opcode = Opcode::new(0xCC, 0xA2, 0x04, 0x10);
/// Set the device wall clock. Payload: `YY MM DD HH mm SS`.
pub const OP_TIME_SYNC: Opcode = Opcode::new(0x3C, 0x92, 0x02, 0x06);
/// Enable periodic data collection. Payload: one enable byte.
pub const OP_ENABLE_DATA: Opcode = Opcode::new(0xBB, 0xA1, 0x0E, 0x00);
/// Request the daily activity summary.
pub const OP_DAILY_SUMMARY: Opcode = Opcode::new(0xFC, 0x88, 0x63, 0x10);
/// Request the step history.
pub const OP_STEPS: Opcode = Opcode::new(0xAC, 0x8B, 0x66, 0x10);
/// Request the sleep history.
pub const OP_SLEEP: Opcode = Opcode::new(0xCC, 0x8A, 0x64, 0x10);
/// Request the heart-rate history dump.
pub const OP_HR_HISTORY: Opcode = Opcode::new(0xCC, 0x8F, 0x68, 0x10);
/// Handshake: start authentication. First command of the HR sequence.
pub const OP_AUTH_START: Opcode = Opcode::new(0xAD, 0x1A, 0x1A, 0x10);
/// Handshake: request device capabilities.
pub const OP_INFO_REQUEST: Opcode = Opcode::new(0x75, 0x1B, 0x1A, 0x30);
/// Handshake: request the supported function list.
pub const OP_FUNCTION_LIST: Opcode = Opcode::new(0xAD, 0x10, 0x02, 0x10);
/// Enable the heart-rate sensor.
pub const OP_ENABLE_HR: Opcode = Opcode::new(0x9D, 0x12, 0x05, 0x10);
/// Start live measurement streaming.
pub const OP_START_STREAM: Opcode = Opcode::new(0x3D, 0x11, 0x03, 0x10);

// ============================================================================
// Cuff Control (blood-pressure measurement)
// ============================================================================

/// Start a cuff measurement (written to the cuff control characteristic).
pub const BP_CTRL_START: [u8; 2] = [0xF1, 0x01];
/// Cancel an in-progress cuff measurement.
pub const BP_CTRL_CANCEL: [u8; 2] = [0xF1, 0x02];

/// Shortest valid blood-pressure measurement frame.
pub const BP_MIN_FRAME_SIZE: usize = 8;
