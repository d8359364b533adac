//! Blocking driver for the BMA423 accelerometer

use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::{
    config::{AccelConfig, AccelRange, FilterPerformance, OutputDataRate, OversampleRate},
    error::Error,
    register::{ACC_ENABLE, ACC_FILTER_PERF, ACC_ODR, ACC_OSR, ACC_RANGE, Field, Register},
    utils,
};

/// Default 7-bit I2C address (SDO pulled high)
pub const DEFAULT_ADDRESS: u8 = 0x19;

/// Value of the chip identification register
pub const CHIP_ID: u8 = 0x13;

/// Settling time required after a temperature read, in milliseconds
pub const TEMPERATURE_SETTLE_MS: u32 = 160;

/// Standard gravity in m/s²
pub const GRAVITY_EARTH: f32 = 9.806_65;

const TEMPERATURE_OFFSET: f32 = 23.0;

/// BMA423 driver instance
///
/// The handle caches the configured measurement range so that acceleration
/// reads cost a single bus transaction. The cache is only correct while this
/// handle is the sole writer of ACC_RANGE; call [`Self::refresh_range`] after
/// anything else may have reconfigured the device.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bma423<I2C> {
    i2c: I2C,
    address: u8,
    range: AccelRange,
}

impl<I2C, E> Bma423<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Probe the sensor at [`DEFAULT_ADDRESS`] and enable the accelerometer
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if the chip id does not match, or a
    /// communication error if the bus fails
    pub fn new(i2c: I2C) -> Result<Self, Error<E>> {
        Self::new_with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Probe the sensor at `address` and enable the accelerometer
    ///
    /// Reads the identity register, sets the accelerometer enable bit and
    /// loads the current measurement range into the cache. Nothing is
    /// written when the identity check fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if the chip id does not match, or a
    /// communication error if the bus fails
    pub fn new_with_address(i2c: I2C, address: u8) -> Result<Self, Error<E>> {
        let mut bma = Self {
            i2c,
            address,
            range: AccelRange::default(),
        };

        let id = bma.chip_id()?;
        if id != CHIP_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unexpected chip id 0x{:02X} at 0x{:02X}", id, address);
            return Err(Error::DeviceNotFound(id));
        }

        bma.set_accel_enabled(true)?;
        bma.refresh_range()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("BMA423 ready, range {}", bma.range.name());

        Ok(bma)
    }

    /// Release the I2C bus, consuming the driver
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_registers(&mut self, register: Register, buf: &mut [u8]) -> Result<(), Error<E>> {
        let address = u8::from(register);
        self.i2c
            .write_read(self.address, &[address], buf)
            .map_err(Error::Communication)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Read 0x{:02X}: {:02X}", address, buf);

        Ok(())
    }

    fn read_register(&mut self, register: Register) -> Result<u8, Error<E>> {
        let mut buf = [0u8; 1];
        self.read_registers(register, &mut buf)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, register: Register, data: u8) -> Result<(), Error<E>> {
        let address = u8::from(register);

        #[cfg(feature = "defmt")]
        defmt::trace!("Writing 0x{:02X} to register 0x{:02X}", data, address);

        self.i2c
            .write(self.address, &[address, data])
            .map_err(Error::Communication)
    }

    fn modify_register<R>(
        &mut self,
        register: Register,
        f: impl FnOnce(&mut u8) -> R,
    ) -> Result<R, Error<E>> {
        let mut data = self.read_register(register)?;

        let result = f(&mut data);

        self.write_register(register, data)?;

        Ok(result)
    }

    fn read_field(&mut self, field: Field) -> Result<u8, Error<E>> {
        self.read_register(field.register)
            .map(|byte| field.extract(byte))
    }

    fn write_field(&mut self, field: Field, value: u8) -> Result<(), Error<E>> {
        self.modify_register(field.register, |byte: &mut u8| {
            *byte = field.insert(*byte, value);
        })
    }

    /// Read the chip identification register
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn chip_id(&mut self) -> Result<u8, Error<E>> {
        self.read_register(Register::ChipId)
    }

    /// Switch the accelerometer on or off
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn set_accel_enabled(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.write_field(ACC_ENABLE, u8::from(enabled))
    }

    /// Whether the accelerometer is powered
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn accel_enabled(&mut self) -> Result<bool, Error<E>> {
        self.read_field(ACC_ENABLE).map(|bit| bit != 0)
    }

    /// Read the three axes as sign-extended 12-bit counts
    ///
    /// All six data registers are fetched in one burst so the axes belong to
    /// the same sample.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn raw_acceleration(&mut self) -> Result<[i16; 3], Error<E>> {
        let mut buf = [0u8; 6];
        self.read_registers(Register::AccXLsb, &mut buf)?;

        Ok([
            utils::axis_from_bytes(buf[0], buf[1]),
            utils::axis_from_bytes(buf[2], buf[3]),
            utils::axis_from_bytes(buf[4], buf[5]),
        ])
    }

    /// Read the acceleration in g, scaled by the cached range
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn acceleration(&mut self) -> Result<[f32; 3], Error<E>> {
        let raw = self.raw_acceleration()?;
        let factor = f32::from(self.range.scale_factor());
        Ok(raw.map(|count| f32::from(count) / factor))
    }

    /// Read the acceleration in m/s²
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn acceleration_ms2(&mut self) -> Result<[f32; 3], Error<E>> {
        self.acceleration()
            .map(|g| g.map(|axis| axis * GRAVITY_EARTH))
    }

    /// Read the die temperature in °C (±5 °C)
    ///
    /// Blocks for [`TEMPERATURE_SETTLE_MS`] after the register read, as
    /// required by the sensor timing.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn temperature(&mut self, delay: &mut impl DelayNs) -> Result<f32, Error<E>> {
        let raw = self.read_register(Register::Temperature)?;
        delay.delay_ms(TEMPERATURE_SETTLE_MS);

        let celsius = utils::sign_extend(u16::from(raw), 8);
        Ok(f32::from(celsius) + TEMPERATURE_OFFSET)
    }

    /// The cached measurement range
    #[must_use]
    pub fn range(&self) -> AccelRange {
        self.range
    }

    /// Re-read ACC_RANGE from the device into the cache
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn refresh_range(&mut self) -> Result<AccelRange, Error<E>> {
        let code = self.read_field(ACC_RANGE)?;
        self.range = AccelRange::try_from(code)?;
        Ok(self.range)
    }

    /// Set the measurement range and update the cache
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails; the cache is left as is
    pub fn set_range(&mut self, range: AccelRange) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Setting range {}", range.name());

        self.write_field(ACC_RANGE, range.into())?;
        self.range = range;
        Ok(())
    }

    /// Set the measurement range from its raw register code
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] without touching the bus if `code`
    /// is not a legal range
    pub fn set_range_raw(&mut self, code: u8) -> Result<(), Error<E>> {
        let range = AccelRange::try_from(code)?;
        self.set_range(range)
    }

    /// Read the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails, or
    /// [`Error::InvalidSetting`] if the device holds a reserved code
    pub fn output_data_rate(&mut self) -> Result<OutputDataRate, Error<E>> {
        let code = self.read_field(ACC_ODR)?;
        Ok(OutputDataRate::try_from(code)?)
    }

    /// Set the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn set_output_data_rate(&mut self, odr: OutputDataRate) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Setting output data rate {}", odr);

        self.write_field(ACC_ODR, odr.into())
    }

    /// Set the output data rate from its raw register code
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] without touching the bus if `code`
    /// is not a legal rate
    pub fn set_output_data_rate_raw(&mut self, code: u8) -> Result<(), Error<E>> {
        let odr = OutputDataRate::try_from(code)?;
        self.set_output_data_rate(odr)
    }

    /// Read the oversample rate
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn oversample_rate(&mut self) -> Result<OversampleRate, Error<E>> {
        let code = self.read_field(ACC_OSR)?;
        Ok(OversampleRate::try_from(code)?)
    }

    /// Set the oversample rate
    ///
    /// The sensor only honours the oversample rate in continuous filter
    /// mode, so the filter performance bit is set in the same register write.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn set_oversample_rate(&mut self, osr: OversampleRate) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Setting oversample rate {}", osr);

        self.modify_register(Register::AccConf, |byte: &mut u8| {
            let with_osr = ACC_OSR.insert(*byte, osr.into());
            *byte = ACC_FILTER_PERF.insert(with_osr, FilterPerformance::Continuous.into());
        })
    }

    /// Set the oversample rate from its raw register code
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] without touching the bus if `code`
    /// is not a legal oversample rate
    pub fn set_oversample_rate_raw(&mut self, code: u8) -> Result<(), Error<E>> {
        let osr = OversampleRate::try_from(code)?;
        self.set_oversample_rate(osr)
    }

    /// Read the filter performance mode
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn filter_performance(&mut self) -> Result<FilterPerformance, Error<E>> {
        let code = self.read_field(ACC_FILTER_PERF)?;
        Ok(FilterPerformance::try_from(code)?)
    }

    /// Set the filter performance mode
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn set_filter_performance(&mut self, perf: FilterPerformance) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Setting filter performance {}", perf);

        self.write_field(ACC_FILTER_PERF, perf.into())
    }

    /// Set the filter performance mode from its raw register code
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] without touching the bus if `code`
    /// is neither 0 nor 1
    pub fn set_filter_performance_raw(&mut self, code: u8) -> Result<(), Error<E>> {
        let perf = FilterPerformance::try_from(code)?;
        self.set_filter_performance(perf)
    }

    /// Read and decode the whole ACC_CONF register
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails, or
    /// [`Error::InvalidSetting`] if the output data rate field holds a
    /// reserved code
    pub fn accel_config(&mut self) -> Result<AccelConfig, Error<E>> {
        let conf = self.read_register(Register::AccConf)?;
        Ok(AccelConfig {
            output_data_rate: OutputDataRate::try_from(ACC_ODR.extract(conf))?,
            oversample_rate: OversampleRate::try_from(ACC_OSR.extract(conf))?,
            filter_performance: FilterPerformance::try_from(ACC_FILTER_PERF.extract(conf))?,
        })
    }
}
