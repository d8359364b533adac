//! `accelerometer` crate trait implementations

use core::fmt::Debug;

use accelerometer::{
    Accelerometer, Error as AccelError, ErrorKind, RawAccelerometer,
    vector::{F32x3, I16x3},
};
use embedded_hal::i2c::I2c;

use crate::{driver::Bma423, error::Error};

fn accel_error<E: Debug>(error: Error<E>) -> AccelError<Error<E>> {
    let kind = match error {
        Error::Communication(_) => ErrorKind::Bus,
        Error::DeviceNotFound(_) | Error::InvalidSetting => ErrorKind::Device,
    };
    AccelError::new_with_cause(kind, error)
}

impl<I2C, E> RawAccelerometer<I16x3> for Bma423<I2C>
where
    I2C: I2c<Error = E>,
    E: Debug,
{
    type Error = Error<E>;

    /// Sign-extended 12-bit counts
    fn accel_raw(&mut self) -> Result<I16x3, AccelError<Self::Error>> {
        let [x, y, z] = self.raw_acceleration().map_err(accel_error)?;
        Ok(I16x3::new(x, y, z))
    }
}

impl<I2C, E> Accelerometer for Bma423<I2C>
where
    I2C: I2c<Error = E>,
    E: Debug,
{
    type Error = Error<E>;

    /// Acceleration in g, scaled by the cached range
    fn accel_norm(&mut self) -> Result<F32x3, AccelError<Self::Error>> {
        let [x, y, z] = self.acceleration().map_err(accel_error)?;
        Ok(F32x3::new(x, y, z))
    }

    /// Output data rate currently programmed into the sensor, in Hz
    fn sample_rate(&mut self) -> Result<f32, AccelError<Self::Error>> {
        self.output_data_rate()
            .map(crate::config::OutputDataRate::hertz)
            .map_err(accel_error)
    }
}
