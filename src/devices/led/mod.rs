//! FPGA LED bank driver
//!
//! Driver for an FPGA slave exposing a small bank of LED channels over SPI.
//! Each transaction is one fixed 3-byte frame: command, channel address,
//! payload. `protocol` holds the pure frame codec, `driver` the blocking
//! transaction driver built on `SpiInterface`/`GpioInterface`.

pub mod driver;
pub mod protocol;

pub use driver::{LedDriver, LedError};
pub use protocol::{Command, Frame, BRIGHTNESS_MAX, LED_COUNT};
