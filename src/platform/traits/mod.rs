//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod gpio;
pub mod spi;

// Re-export trait interfaces
pub use gpio::{GpioInterface, GpioMode};
pub use spi::{SpiBitOrder, SpiConfig, SpiInterface, SpiMode};
