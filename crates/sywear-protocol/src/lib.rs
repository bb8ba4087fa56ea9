//! SY Wearable BLE Protocol
//!
//! This crate provides types and utilities for talking to SY-family
//! wearables (smart rings, blood-pressure cuffs) over their BLE
//! notification protocol. The ring exposes a write characteristic for
//! framed requests and a notify characteristic for framed push messages:
//!
//! - **Commands** (host → device): frames tagged `AB 01 00`
//! - **Notifications** (device → host): frames tagged `AB 11 00`
//!
//! The protocol is undocumented; everything here was recovered by
//! replaying captured vendor-app traffic. Inbound classification is
//! therefore total: unknown frames are carried through opaque rather
//! than rejected, so new frame shapes can be added without touching the
//! router.
//!
//! History-dump notifications nest a second, independently-timestamped
//! vendor sub-protocol handled by the `jl-codec` crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use sywear_protocol::{Command, Notification};
//!
//! // Build a request for the transport to write
//! let request = Command::HeartRateHistory.encode();
//!
//! // Classify each notification buffer the transport delivers
//! let notification = Notification::classify(&buffer);
//! if let Some(records) = notification.hr_records(None) {
//!     for r in records {
//!         println!("{} {} bpm", r.timestamp, r.bpm);
//!     }
//! }
//! ```

mod bp;
mod commands;
mod constants;
mod error;
mod frame;
mod notifications;
mod types;

pub use bp::*;
pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use notifications::*;
pub use types::*;

pub use jl_codec;
