//! LED bus initialization
//!
//! Configures the SPI1 peripheral and chip-select pin for the FPGA LED slave
//! and returns the wrapped platform handles. This must run once before any
//! LED transaction; feeding the returned pair into
//! [`LedDriver::new`](crate::devices::led::LedDriver::new) makes the driver
//! the single owner of the bus session.
//!
//! # Pinout
//!
//! | Signal | GPIO |
//! |--------|------|
//! | SCK    | 10   |
//! | MOSI   | 11   |
//! | MISO   | 12   |
//! | CS     | 13   |

use crate::platform::{
    traits::{GpioInterface, GpioMode, SpiConfig},
    Result,
};
use rp235x_hal::{
    self as hal,
    fugit::{HertzU32, RateExtU32},
    gpio::{
        bank0::{Gpio10, Gpio11, Gpio12, Gpio13},
        FunctionNull, FunctionSioOutput, FunctionSpi, Pin, PullDown, PullNone,
    },
    pac,
    spi::Spi,
};

use super::{Rp2350Gpio, Rp2350Spi};

/// Peak SPI clock for the FPGA slave (26 MHz)
pub const SCLK_FREQ_HZ: u32 = 26_000_000;

/// The initialized LED bus SPI handle (SPI1, TX=GPIO11 RX=GPIO12 SCK=GPIO10)
pub type LedBusSpi = Rp2350Spi<
    pac::SPI1,
    (
        Pin<Gpio11, FunctionSpi, PullNone>,
        Pin<Gpio12, FunctionSpi, PullNone>,
        Pin<Gpio10, FunctionSpi, PullNone>,
    ),
>;

/// The LED bus chip-select line (GPIO13, active low)
pub type LedBusCs = Rp2350Gpio<Gpio13, FunctionSioOutput, PullNone>;

/// Initialize the LED SPI bus
///
/// Takes the pins in their reset state, routes them to SPI1 (CS stays a plain
/// SIO output), enables the peripheral at 26 MHz in Motorola SPI mode 0 with
/// 8-bit frames, and deasserts chip select.
///
/// # Arguments
///
/// * `spi1` - The SPI1 peripheral block
/// * `mosi`/`miso`/`sclk`/`cs` - Bus pins in reset state
/// * `resets` - The RESETS peripheral block
/// * `peri_frequency` - Peripheral clock feeding the SPI baud generator
///
/// # Errors
///
/// Propagates any chip-select configuration failure. Pin routing and
/// peripheral enablement are infallible on this HAL.
pub fn init_led_bus(
    spi1: pac::SPI1,
    mosi: Pin<Gpio11, FunctionNull, PullDown>,
    miso: Pin<Gpio12, FunctionNull, PullDown>,
    sclk: Pin<Gpio10, FunctionNull, PullDown>,
    cs: Pin<Gpio13, FunctionNull, PullDown>,
    resets: &mut pac::RESETS,
    peri_frequency: HertzU32,
) -> Result<(LedBusSpi, LedBusCs)> {
    let mosi: Pin<Gpio11, FunctionSpi, PullNone> = mosi.reconfigure();
    let miso: Pin<Gpio12, FunctionSpi, PullNone> = miso.reconfigure();
    let sclk: Pin<Gpio10, FunctionSpi, PullNone> = sclk.reconfigure();

    let spi = Spi::<_, _, _, 8>::new(spi1, (mosi, miso, sclk)).init(
        resets,
        peri_frequency,
        SCLK_FREQ_HZ.Hz(),
        hal::spi::FrameFormat::MotorolaSpi(embedded_hal::spi::MODE_0),
    );

    let cs_pin: Pin<Gpio13, FunctionSioOutput, PullNone> = cs.reconfigure();
    let mut cs = Rp2350Gpio::new(cs_pin, GpioMode::OutputPushPull);
    cs.set_high()?;

    defmt::info!("LED SPI bus initialized at {} Hz", SCLK_FREQ_HZ);

    Ok((Rp2350Spi::new(spi, SpiConfig::default()), cs))
}
