/// Error type for BMA423 operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the sensor
    Communication(E),
    /// The identity register did not hold the BMA423 chip id (carries the
    /// byte that was read)
    DeviceNotFound(u8),
    /// A raw setting code outside the legal set was supplied
    InvalidSetting,
}

/// A raw register code that does not map to any legal setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidSetting;

impl<E> From<InvalidSetting> for Error<E> {
    fn from(_: InvalidSetting) -> Self {
        Error::InvalidSetting
    }
}
