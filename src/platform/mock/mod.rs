//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be
//! used for unit testing the LED driver without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use ledlink::platform::mock::MockSpi;
//! use ledlink::platform::traits::{SpiConfig, SpiInterface};
//!
//! let mut spi = MockSpi::new(SpiConfig::default());
//! spi.write(&[0x01, 0x00, 0x80]).unwrap();
//! assert_eq!(spi.transactions().len(), 1);
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod spi;

pub use gpio::MockGpio;
pub use spi::{MockSpi, SpiTransaction};
