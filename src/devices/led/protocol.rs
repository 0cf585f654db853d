//! LED command-frame definitions
//!
//! Wire format shared with the FPGA slave. Every transaction is exactly one
//! 24-bit frame, full-duplex, MSB first:
//!
//! | Byte | SET              | READ (tx) | READ (rx)        |
//! |------|------------------|-----------|------------------|
//! | 0    | 0x01             | 0x02      | echo/undefined   |
//! | 1    | channel address  | address   | echo/undefined   |
//! | 2    | brightness << 1  | 0x00      | brightness << 1  |
//!
//! Brightness is a 7-bit value carried in bits [7:1] of the payload byte.
//! Bit 0 is reserved and always clear on transmit, which leaves room for a
//! future flag bit without changing the frame length.

/// Number of bytes per command frame
pub const FRAME_LEN: usize = 3;

/// Number of addressable LED channels on the slave
pub const LED_COUNT: u8 = 8;

/// Maximum brightness value (7-bit)
pub const BRIGHTNESS_MAX: u8 = 127;

/// Payload shift placing brightness in bits [7:1]
pub const BRIGHTNESS_SHIFT: u8 = 1;

/// Address filler for frames that carry no channel
pub const ADDR_NONE: u8 = 0x0D;

/// Payload filler for frames that carry no data
pub const PAYLOAD_NONE: u8 = 0x00;

/// One command frame on the wire
pub type Frame = [u8; FRAME_LEN];

/// Command codes (frame byte 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// No operation
    Nop = 0x00,
    /// Set channel brightness
    Set = 0x01,
    /// Read back channel brightness
    Read = 0x02,
}

impl Command {
    /// Wire encoding of the command
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Build a SET frame: `[0x01, addr, brightness << 1]`
///
/// Only the low 7 bits of `brightness` reach the wire; the shift drops bit 7,
/// matching the 8-bit payload encoding of the slave.
pub const fn set_frame(addr: u8, brightness: u8) -> Frame {
    [Command::Set.code(), addr, brightness << BRIGHTNESS_SHIFT]
}

/// Build a READ request frame: `[0x02, addr, 0x00]`
pub const fn read_frame(addr: u8) -> Frame {
    [Command::Read.code(), addr, PAYLOAD_NONE]
}

/// Build a NO-OP frame: `[0x00, 0x0D, 0x00]`
///
/// Clocks a frame through the slave without touching any channel; the
/// address slot carries the `ADDR_NONE` filler.
pub const fn nop_frame() -> Frame {
    [Command::Nop.code(), ADDR_NONE, PAYLOAD_NONE]
}

/// Extract the 7-bit brightness from a READ response frame
///
/// The value sits in bits [7:1] of the payload byte; the reserved bit 0 is
/// discarded.
pub const fn brightness_from(rx: &Frame) -> u8 {
    rx[FRAME_LEN - 1] >> BRIGHTNESS_SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_frame_layout() {
        assert_eq!(set_frame(0, 64), [0x01, 0x00, 0x80]);
        assert_eq!(set_frame(7, 127), [0x01, 0x07, 0xFE]);
        assert_eq!(set_frame(3, 0), [0x01, 0x03, 0x00]);
    }

    #[test]
    fn test_read_frame_layout() {
        assert_eq!(read_frame(0), [0x02, 0x00, 0x00]);
        assert_eq!(read_frame(7), [0x02, 0x07, 0x00]);
    }

    #[test]
    fn test_nop_frame_layout() {
        assert_eq!(nop_frame(), [0x00, 0x0D, 0x00]);
    }

    #[test]
    fn test_payload_bit0_always_clear() {
        for b in 0..=BRIGHTNESS_MAX {
            assert_eq!(set_frame(0, b)[2] & 0x01, 0);
        }
    }

    #[test]
    fn test_brightness_round_trip() {
        for addr in 0..LED_COUNT {
            for b in 0..=BRIGHTNESS_MAX {
                let frame = set_frame(addr, b);
                assert_eq!(brightness_from(&frame), b);
            }
        }
    }

    #[test]
    fn test_decode_known_payloads() {
        assert_eq!(brightness_from(&[0x00, 0x00, 0x80]), 64);
        assert_eq!(brightness_from(&[0xAA, 0x55, 0xFE]), 127);
        assert_eq!(brightness_from(&[0x00, 0x00, 0x00]), 0);
    }

    #[test]
    fn test_command_codes() {
        assert_eq!(Command::Nop.code(), 0x00);
        assert_eq!(Command::Set.code(), 0x01);
        assert_eq!(Command::Read.code(), 0x02);
    }
}
