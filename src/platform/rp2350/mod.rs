//! RP2350 platform implementation for Raspberry Pi Pico 2 W
//!
//! This module provides concrete implementations of the platform abstraction
//! traits for the RP2350 microcontroller using the `rp235x-hal` crate.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico2_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! ledlink = { version = "0.1", default-features = false, features = ["pico2_w"] }
//! ```

pub mod bus;
mod gpio;
mod spi;

pub use bus::{init_led_bus, LedBusCs, LedBusSpi, SCLK_FREQ_HZ};
pub use gpio::Rp2350Gpio;
pub use spi::Rp2350Spi;
