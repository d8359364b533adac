//! Platform agnostic driver for the Bosch BMA423 accelerometer.
//!
//! The driver talks to the sensor through [`embedded_hal::i2c::I2c`] and
//! exposes the accelerometer registers as typed operations. With the `accel`
//! feature (on by default) it also implements the [`Accelerometer`][acc-trait]
//! and [`RawAccelerometer`][raw-trait] traits from the [accelerometer] crate.
//!
//! [accelerometer]: https://docs.rs/accelerometer
//! [acc-trait]: https://docs.rs/accelerometer/latest/accelerometer/trait.Accelerometer.html
//! [raw-trait]: https://docs.rs/accelerometer/latest/accelerometer/trait.RawAccelerometer.html

#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

#[cfg(feature = "accel")]
mod accel;
mod config;
mod driver;
mod error;
mod register;
mod utils;

pub use config::{AccelConfig, AccelRange, FilterPerformance, OutputDataRate, OversampleRate};
pub use driver::{Bma423, CHIP_ID, DEFAULT_ADDRESS, GRAVITY_EARTH, TEMPERATURE_SETTLE_MS};
pub use error::{Error, InvalidSetting};
pub use register::Register;

#[cfg(feature = "accel")]
pub use accelerometer::{Accelerometer, RawAccelerometer, vector::{F32x3, I16x3}};
