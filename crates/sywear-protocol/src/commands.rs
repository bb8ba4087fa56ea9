//! Commands that can be sent to the wearable.

use crate::constants::*;
use crate::frame::CommandFrame;
use crate::types::{DeviceDateTime, Opcode};

/// Commands with a known meaning on SY-family rings.
///
/// The opcode space is undocumented; these are the combinations
/// recovered by replaying the vendor app, and anything outside the set
/// can be sent with [`Command::Raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Begin a session after connecting.
    SessionStart,

    /// Query static device information.
    DeviceInfo,

    /// Set the device wall clock.
    TimeSync(DeviceDateTime),

    /// Enable periodic data collection.
    EnableData,

    /// Request the daily activity summary.
    DailySummary,

    /// Request the step history.
    Steps,

    /// Request the sleep history.
    Sleep,

    /// Request the heart-rate history dump.
    ///
    /// The device answers with history-dump notifications carrying JL
    /// sub-frames.
    HeartRateHistory,

    /// Handshake: start authentication.
    AuthStart,

    /// Handshake: request device capabilities.
    InfoRequest,

    /// Handshake: request the supported function list.
    FunctionList,

    /// Enable the heart-rate sensor.
    EnableHeartRate,

    /// Start live measurement streaming.
    StartStream,

    /// An opcode outside the recovered set.
    Raw {
        /// Opcode tuple to send.
        opcode: Opcode,
        /// Extra payload bytes, may be empty.
        payload: Vec<u8>,
    },
}

impl Command {
    /// Get the opcode tuple for this command.
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::SessionStart => OP_SESSION_START,
            Command::DeviceInfo => OP_DEVICE_INFO,
            Command::TimeSync(_) => OP_TIME_SYNC,
            Command::EnableData => OP_ENABLE_DATA,
            Command::DailySummary => OP_DAILY_SUMMARY,
            Command::Steps => OP_STEPS,
            Command::Sleep => OP_SLEEP,
            Command::HeartRateHistory => OP_HR_HISTORY,
            Command::AuthStart => OP_AUTH_START,
            Command::InfoRequest => OP_INFO_REQUEST,
            Command::FunctionList => OP_FUNCTION_LIST,
            Command::EnableHeartRate => OP_ENABLE_HR,
            Command::StartStream => OP_START_STREAM,
            Command::Raw { opcode, .. } => *opcode,
        }
    }

    /// Lower the command to its wire frame.
    pub fn frame(&self) -> CommandFrame {
        let payload = match self {
            Command::TimeSync(dt) => dt.to_payload().to_vec(),
            Command::EnableData => vec![0x01],
            Command::Raw { payload, .. } => payload.clone(),
            _ => Vec::new(),
        };
        CommandFrame::with_payload(self.opcode(), payload)
    }

    /// Encode the command to bytes.
    pub fn encode(&self) -> Vec<u8> {
        self.frame().encode()
    }
}
