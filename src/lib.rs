#![cfg_attr(not(test), no_std)]

//! ledlink - SPI master driver for an FPGA LED brightness controller
//!
//! This library provides platform abstraction and a command-frame driver for an
//! FPGA slave that exposes a small bank of LED channels over a full-duplex SPI
//! link (fixed 3-byte frames, mode 0).

// The mock platform keeps heap-backed transaction logs.
#[cfg(any(test, feature = "mock"))]
extern crate std;

// Platform abstraction layer (SPI/GPIO traits, mock and RP2350 implementations)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;
