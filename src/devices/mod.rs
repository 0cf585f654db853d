//! Device drivers
//!
//! This module contains device drivers that use the platform abstraction
//! traits, keeping them hardware-independent and testable on the host.
//!
//! ## Modules
//!
//! - `led`: FPGA LED bank driver (3-byte SPI command frames)

pub mod led;
