//! Platform abstraction layer
//!
//! This module provides hardware abstraction so the LED driver can run against
//! real silicon or against a mock transport in host tests. All platform-specific
//! code must stay isolated to this module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{GpioInterface, SpiInterface};
