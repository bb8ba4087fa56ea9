//! Blood-pressure cuff measurement frames.
//!
//! The cuff member of the family reports over the standard Blood
//! Pressure Measurement characteristic rather than the ring's vendor
//! framing. Measurements are started and cancelled by writing
//! [`BP_CTRL_START`]/[`BP_CTRL_CANCEL`] to the cuff's control
//! characteristic.
//!
//! ## Frame Format
//!
//! | Field     | Offset | Description                                    |
//! |-----------|--------|------------------------------------------------|
//! | flags     | 0      | Bit 4 clear = intermediate (in-progress) value |
//! | systolic  | 1      | mmHg                                           |
//! | diastolic | 3      | mmHg                                           |
//! | pulse     | 7      | Beats per minute                               |
//!
//! [`BP_CTRL_START`]: crate::BP_CTRL_START
//! [`BP_CTRL_CANCEL`]: crate::BP_CTRL_CANCEL

use crate::constants::BP_MIN_FRAME_SIZE;
use crate::error::ProtocolError;

/// One blood-pressure reading from the cuff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BpMeasurement {
    /// Raw flags byte.
    pub flags: u8,
    /// Systolic pressure in mmHg.
    pub systolic: u8,
    /// Diastolic pressure in mmHg.
    pub diastolic: u8,
    /// Pulse rate in beats per minute.
    pub pulse: u8,
}

impl BpMeasurement {
    /// Decode a measurement frame.
    pub fn decode(frame: &[u8]) -> Result<BpMeasurement, ProtocolError> {
        if frame.len() < BP_MIN_FRAME_SIZE {
            return Err(ProtocolError::FrameTooShort {
                expected: BP_MIN_FRAME_SIZE,
                actual: frame.len(),
            });
        }

        Ok(BpMeasurement {
            flags: frame[0],
            systolic: frame[1],
            diastolic: frame[3],
            pulse: frame[7],
        })
    }

    /// Whether this is an intermediate reading taken while the cuff is
    /// still inflating, rather than the final result.
    pub fn is_intermediate(&self) -> bool {
        self.flags & 0x10 == 0
    }

    /// Whether the cuff is signalling a failed measurement (an
    /// out-of-range systolic value with no detected pulse).
    pub fn is_failed(&self) -> bool {
        self.pulse == 0 && self.systolic >= 250
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_final_measurement() {
        let frame = [0x10, 120, 0x00, 80, 0x00, 0x00, 0x00, 72];
        let m = BpMeasurement::decode(&frame).expect("valid frame");

        assert_eq!(m.systolic, 120);
        assert_eq!(m.diastolic, 80);
        assert_eq!(m.pulse, 72);
        assert!(!m.is_intermediate());
        assert!(!m.is_failed());
    }

    #[test]
    fn test_flags_bit_four_clear_means_intermediate() {
        let frame = [0x00, 110, 0x00, 70, 0x00, 0x00, 0x00, 0];
        let m = BpMeasurement::decode(&frame).expect("valid frame");
        assert!(m.is_intermediate());
    }

    #[test]
    fn test_failed_measurement_heuristic() {
        let frame = [0x10, 255, 0x00, 0, 0x00, 0x00, 0x00, 0];
        let m = BpMeasurement::decode(&frame).expect("valid frame");
        assert!(m.is_failed());

        // A zero pulse alone is not failure while systolic is sane.
        let frame = [0x00, 120, 0x00, 80, 0x00, 0x00, 0x00, 0];
        let m = BpMeasurement::decode(&frame).expect("valid frame");
        assert!(!m.is_failed());
    }

    #[test]
    fn test_short_frame_is_an_error() {
        let err = BpMeasurement::decode(&[0x10, 120, 0x00]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::FrameTooShort {
                expected: BP_MIN_FRAME_SIZE,
                actual: 3,
            }
        );
    }
}
