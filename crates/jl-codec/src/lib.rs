//! JL vendor sub-protocol decoding.
//!
//! SY-family rings deliver historical sensor data as a nested "JL" frame
//! carried inside certain notification frames. A JL frame is a 3-byte
//! command id tagging the record type, followed by a body of fixed-size
//! records, each stamped with the device's own epoch counter (seconds
//! since 2000-01-01 rather than the Unix epoch).
//!
//! The command id is not recoverable from the frame bytes themselves
//! (it was extracted from the vendor's reference application), so
//! callers inject the tag for the record type they requested.
//!
//! # Example
//!
//! ```rust,ignore
//! use jl_codec::{decode_hr_history, JL_CMD_HR_HISTORY};
//!
//! // sub_frame: the history-dump payload from the outer protocol
//! let records = decode_hr_history(&sub_frame, JL_CMD_HR_HISTORY, None);
//! for r in &records {
//!     println!("{} {} bpm", r.timestamp, r.bpm);
//! }
//! ```

mod history;
mod time;

pub use history::*;
pub use time::*;
