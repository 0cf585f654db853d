//! LED transaction driver
//!
//! Blocking driver for the FPGA LED bank. Owns the initialized SPI handle and
//! the chip-select line; every operation is one synchronous 3-byte full-duplex
//! exchange. There is no retry, no queueing, and no state carried between
//! transactions.

use super::protocol::{self, Frame, FRAME_LEN, LED_COUNT};
use crate::platform::{
    traits::{GpioInterface, SpiInterface},
    PlatformError,
};
use core::fmt;

/// LED driver error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum LedError {
    /// Channel address outside [0, LED_COUNT)
    InvalidAddress,
    /// Underlying bus failure, propagated verbatim
    Bus(PlatformError),
}

impl From<PlatformError> for LedError {
    fn from(error: PlatformError) -> Self {
        LedError::Bus(error)
    }
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::InvalidAddress => write!(f, "invalid LED address"),
            LedError::Bus(e) => write!(f, "bus error: {}", e),
        }
    }
}

/// FPGA LED bank driver
///
/// Generic over the platform SPI and GPIO traits, so the same driver runs on
/// hardware and against the mock platform in host tests. Holding the SPI and
/// CS instances by value makes this the single owner of the bus session:
/// `&mut self` on every operation rules out overlapping transactions.
pub struct LedDriver<SPI, CS>
where
    SPI: SpiInterface,
    CS: GpioInterface,
{
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> LedDriver<SPI, CS>
where
    SPI: SpiInterface,
    CS: GpioInterface,
{
    /// Create a new LED driver from an initialized bus
    ///
    /// Deasserts chip select so the slave starts idle.
    ///
    /// # Arguments
    ///
    /// * `spi` - Initialized SPI bus (mode 0, MSB first)
    /// * `cs` - Chip-select output pin, active low
    pub fn new(spi: SPI, mut cs: CS) -> Result<Self, LedError> {
        cs.set_high()?;
        Ok(Self { spi, cs })
    }

    /// Number of addressable LED channels
    pub const fn led_count(&self) -> u8 {
        LED_COUNT
    }

    /// Set the brightness of one LED channel
    ///
    /// Transmits `[0x01, addr, brightness << 1]`. The slave drives the bus
    /// during the exchange but its data has no defined meaning for SET, so
    /// the received bytes are discarded.
    ///
    /// # Arguments
    ///
    /// * `addr` - Channel address in [0, LED_COUNT)
    /// * `brightness` - 7-bit brightness (0-127); bit 7 never reaches the wire
    ///
    /// # Errors
    ///
    /// `LedError::InvalidAddress` for an out-of-range channel (no bus
    /// activity), or `LedError::Bus` with the exact transport error.
    pub fn set(&mut self, addr: u8, brightness: u8) -> Result<(), LedError> {
        if addr >= LED_COUNT {
            return Err(LedError::InvalidAddress);
        }

        let frame = protocol::set_frame(addr, brightness);
        self.exchange(&frame, None)?;
        Ok(())
    }

    /// Read back the brightness of one LED channel
    ///
    /// Transmits `[0x02, addr, 0x00]` and decodes the brightness from byte 2
    /// of the simultaneously received frame.
    ///
    /// # Arguments
    ///
    /// * `addr` - Channel address in [0, LED_COUNT)
    ///
    /// # Errors
    ///
    /// `LedError::InvalidAddress` for an out-of-range channel (no bus
    /// activity), or `LedError::Bus` with the exact transport error, in which
    /// case no brightness is produced.
    pub fn read(&mut self, addr: u8) -> Result<u8, LedError> {
        if addr >= LED_COUNT {
            return Err(LedError::InvalidAddress);
        }

        let tx = protocol::read_frame(addr);
        let mut rx: Frame = [0; FRAME_LEN];
        self.exchange(&tx, Some(&mut rx))?;
        Ok(protocol::brightness_from(&rx))
    }

    /// Release the underlying bus and chip-select pin
    pub fn free(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    /// Run one chip-selected frame exchange
    ///
    /// CS is deasserted again whether or not the transfer succeeded; a
    /// transfer error takes precedence over a CS error when both occur.
    fn exchange(&mut self, tx: &Frame, rx: Option<&mut Frame>) -> Result<(), LedError> {
        self.cs.set_low()?;
        let result = match rx {
            Some(rx) => self.spi.transfer(tx, rx),
            None => self.spi.write(tx),
        };
        let cs_result = self.cs.set_high();
        result?;
        cs_result?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::SpiError;
    use crate::platform::mock::{MockGpio, MockSpi, SpiTransaction};
    use crate::platform::traits::SpiConfig;

    fn driver() -> LedDriver<MockSpi, MockGpio> {
        LedDriver::new(MockSpi::new(SpiConfig::default()), MockGpio::new_output()).unwrap()
    }

    #[test]
    fn test_new_deasserts_cs() {
        let d = driver();
        assert!(d.cs.read());
    }

    #[test]
    fn test_set_transmits_exact_frame() {
        let mut d = driver();
        d.set(0, 64).unwrap();

        let transactions = d.spi.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            SpiTransaction::Write {
                data: vec![0x01, 0x00, 0x80]
            }
        );
    }

    #[test]
    fn test_set_max_brightness() {
        let mut d = driver();
        d.set(7, 127).unwrap();

        assert_eq!(
            d.spi.transactions()[0],
            SpiTransaction::Write {
                data: vec![0x01, 0x07, 0xFE]
            }
        );
    }

    #[test]
    fn test_set_invalid_address_no_bus_activity() {
        let mut d = driver();
        assert_eq!(d.set(8, 10).unwrap_err(), LedError::InvalidAddress);
        assert_eq!(d.set(255, 0).unwrap_err(), LedError::InvalidAddress);
        assert!(d.spi.transactions().is_empty());
        // CS never asserted either
        assert!(d.cs.read());
    }

    #[test]
    fn test_read_transmits_request_and_decodes_reply() {
        let mut d = driver();
        d.spi.set_read_data(&[0x00, 0x00, 0x80]);

        assert_eq!(d.read(0).unwrap(), 64);

        let transactions = d.spi.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            SpiTransaction::Transfer {
                write: vec![0x02, 0x00, 0x00],
                read: vec![0x00, 0x00, 0x80]
            }
        );
    }

    #[test]
    fn test_read_max_brightness() {
        let mut d = driver();
        d.spi.set_read_data(&[0xFF, 0xFF, 0xFE]);
        assert_eq!(d.read(7).unwrap(), 127);
    }

    #[test]
    fn test_read_invalid_address_no_bus_activity() {
        let mut d = driver();
        assert_eq!(d.read(8).unwrap_err(), LedError::InvalidAddress);
        assert!(d.spi.transactions().is_empty());
    }

    #[test]
    fn test_set_propagates_transport_error() {
        let mut d = driver();
        d.spi.fail_next(PlatformError::Spi(SpiError::Timeout));

        assert_eq!(
            d.set(0, 1).unwrap_err(),
            LedError::Bus(PlatformError::Spi(SpiError::Timeout))
        );
        // CS released after the failed transfer
        assert!(d.cs.read());
    }

    #[test]
    fn test_read_propagates_transport_error() {
        let mut d = driver();
        d.spi.fail_next(PlatformError::Spi(SpiError::TransferFailed));

        assert_eq!(
            d.read(3).unwrap_err(),
            LedError::Bus(PlatformError::Spi(SpiError::TransferFailed))
        );
        assert!(d.cs.read());
    }

    #[test]
    fn test_set_then_read_round_trip_via_loopback() {
        let mut d = driver();
        for addr in 0..LED_COUNT {
            let brightness = (addr * 16) & 0x7F;
            d.set(addr, brightness).unwrap();

            // Echo the SET payload back as the READ response.
            let sent = match &d.spi.transactions()[addr as usize * 2] {
                SpiTransaction::Write { data } => data[2],
                other => panic!("unexpected transaction {:?}", other),
            };
            d.spi.set_read_data(&[0x00, 0x00, sent]);
            assert_eq!(d.read(addr).unwrap(), brightness);
        }
    }

    #[test]
    fn test_free_returns_bus() {
        let d = driver();
        let (spi, cs) = d.free();
        assert!(spi.transactions().is_empty());
        assert!(cs.read());
    }
}
