//! LED set/read polling demo for RP2350
//!
//! Initializes the LED SPI bus, then loops forever setting and reading back
//! two channels, logging each result over RTT.
//!
//! # Hardware
//!
//! Raspberry Pi Pico 2 W wired to the FPGA slave:
//! SCK=GPIO10, MOSI=GPIO11, MISO=GPIO12, CS=GPIO13
//!
//! # Usage
//!
//! ```bash
//! cargo build --release --example led_poll \
//!     --no-default-features --features pico2_w \
//!     --target thumbv8m.main-none-eabihf
//! # Flash target/led_poll.uf2 in BOOTSEL mode
//! ```

#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use embedded_hal::blocking::delay::DelayMs;
use panic_halt as _;

use ledlink::devices::led::{LedDriver, BRIGHTNESS_MAX};
use ledlink::platform::rp2350::init_led_bus;
use rp235x_hal::{self as hal, clocks::init_clocks_and_plls, pac, watchdog::Watchdog, Clock, Sio};

/// Tell the boot ROM about our application
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: hal::block::ImageDef = hal::block::ImageDef::secure_exe();

/// External crystal frequency on the Pico 2 W
const XTAL_FREQ_HZ: u32 = 12_000_000;

#[hal::entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = match init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    ) {
        Ok(clocks) => clocks,
        Err(_) => halt("clock init failed"),
    };

    let mut timer = hal::Timer::new_timer0(pac.TIMER0, &mut pac.RESETS, &clocks);
    let sio = Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let (spi, cs) = match init_led_bus(
        pac.SPI1,
        pins.gpio11,
        pins.gpio12,
        pins.gpio10,
        pins.gpio13,
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
    ) {
        Ok(bus) => bus,
        Err(e) => {
            error!("LED bus init failed: {}", e);
            halt("init failure");
        }
    };

    let mut leds = match LedDriver::new(spi, cs) {
        Ok(leds) => leds,
        Err(e) => {
            error!("LED driver setup failed: {}", e);
            halt("init failure");
        }
    };

    loop {
        poll_channel(&mut leds, 0, 64);
        poll_channel(&mut leds, 7, BRIGHTNESS_MAX);

        timer.delay_ms(1000u32);
    }
}

/// Set one channel, read it back, log both results
fn poll_channel<SPI, CS>(leds: &mut LedDriver<SPI, CS>, addr: u8, brightness: u8)
where
    SPI: ledlink::platform::SpiInterface,
    CS: ledlink::platform::GpioInterface,
{
    match leds.set(addr, brightness) {
        Ok(()) => info!("set LED {} to {}", addr, brightness),
        Err(e) => error!("set LED {} failed: {}", addr, e),
    }

    match leds.read(addr) {
        Ok(value) => info!("LED {} brightness: {}", addr, value),
        Err(e) => error!("read LED {} failed: {}", addr, e),
    }
}

/// Log and park the core; transactions are pointless without a working bus
fn halt(reason: &str) -> ! {
    error!("halting: {}", reason);
    loop {
        hal::arch::wfi();
    }
}
