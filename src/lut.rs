//! Waveform Look-Up Tables for refresh modes
//!
//! The IL3829 drives each pixel transition with a waveform described by a
//! 30-byte LUT loaded via [`WRITE_LUT_REGISTER`](crate::command::WRITE_LUT_REGISTER).
//! Two vendor tables exist for GDEP015OC1 panels:
//!
//! - [`LUT_FULL_UPDATE`]: slow, ghost-free refresh of the whole panel
//! - [`LUT_PARTIAL_UPDATE`]: fast refresh that may leave slight ghosting
//!
//! The byte values are panel calibration data and must be sent verbatim.

/// LUT size required by the IL3829 controller, in bytes
pub const LUT_SIZE: usize = 30;

/// Waveform table for full updates (slowest, best quality, no ghosting)
#[rustfmt::skip]
pub const LUT_FULL_UPDATE: [u8; LUT_SIZE] = [
    0x02, 0x02, 0x01, 0x11, 0x12, 0x12, 0x22, 0x22,
    0x66, 0x69, 0x69, 0x59, 0x58, 0x99, 0x99, 0x88,
    0x00, 0x00, 0x00, 0x00, 0xF8, 0xB4, 0x13, 0x51,
    0x35, 0x51, 0x51, 0x19, 0x01, 0x00,
];

/// Waveform table for partial updates (fast, may leave visual ghosting)
#[rustfmt::skip]
pub const LUT_PARTIAL_UPDATE: [u8; LUT_SIZE] = [
    0x10, 0x18, 0x18, 0x08, 0x18, 0x18, 0x08, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x13, 0x14, 0x44, 0x12,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lut_lengths() {
        assert_eq!(LUT_FULL_UPDATE.len(), LUT_SIZE);
        assert_eq!(LUT_PARTIAL_UPDATE.len(), LUT_SIZE);
    }

    #[test]
    fn test_tables_differ() {
        assert_ne!(LUT_FULL_UPDATE, LUT_PARTIAL_UPDATE);
    }
}
