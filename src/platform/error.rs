//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum PlatformError {
    /// SPI operation failed
    Spi(SpiError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Platform initialization failed
    InitializationFailed,
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource not available
    ResourceUnavailable,
}

/// SPI-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum SpiError {
    /// Transfer failed
    TransferFailed,
    /// Timeout occurred
    Timeout,
    /// Mode fault
    ModeFault,
    /// Overrun error
    Overrun,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum GpioError {
    /// Invalid pin number
    InvalidPin,
    /// Invalid mode for operation
    InvalidMode,
    /// Hardware-level pin failure
    HardwareError,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Spi(e) => write!(f, "SPI error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::InitializationFailed => write!(f, "Platform initialization failed"),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "Resource not available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlatformError::Spi(SpiError::TransferFailed);
        assert_eq!(std::format!("{}", err), "SPI error: TransferFailed");

        let err = PlatformError::InitializationFailed;
        assert_eq!(std::format!("{}", err), "Platform initialization failed");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            PlatformError::Spi(SpiError::Timeout),
            PlatformError::Spi(SpiError::Timeout)
        );
        assert_ne!(
            PlatformError::Spi(SpiError::Timeout),
            PlatformError::Gpio(GpioError::InvalidMode)
        );
    }
}
