//! Register map and bit-field descriptors for the BMA423.

/// Register addresses for BMA423
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u8)]
pub enum Register {
    /// Chip identification, reads `0x13`
    ChipId = 0x00,

    /// X axis, low nibble in bits 7:4
    AccXLsb = 0x12,
    /// X axis, bits 11:4
    AccXMsb = 0x13,
    /// Y axis, low nibble in bits 7:4
    AccYLsb = 0x14,
    /// Y axis, bits 11:4
    AccYMsb = 0x15,
    /// Z axis, low nibble in bits 7:4
    AccZLsb = 0x16,
    /// Z axis, bits 11:4
    AccZMsb = 0x17,

    /// Temperature, two's complement, 0 = 23 °C
    Temperature = 0x22,

    /// Output data rate, oversampling and filter performance
    AccConf = 0x40,
    /// Measurement range
    AccRange = 0x41,

    /// Power control
    PwrCtrl = 0x7D,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

/// A contiguous bit range inside a single byte-wide register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field {
    pub register: Register,
    offset: u8,
    width: u8,
}

impl Field {
    /// Describe a field of `width` bits starting at bit `offset`
    ///
    /// The field must lie inside the register byte.
    pub const fn new(register: Register, offset: u8, width: u8) -> Self {
        assert!(width > 0 && offset + width <= 8, "field outside register");
        Self {
            register,
            offset,
            width,
        }
    }

    /// Mask selecting the field inside the register byte
    #[allow(clippy::cast_possible_truncation)]
    pub const fn mask(&self) -> u8 {
        (((1u16 << self.width) - 1) << self.offset) as u8
    }

    /// Extract the field value from a register byte, right aligned
    pub const fn extract(&self, byte: u8) -> u8 {
        (byte & self.mask()) >> self.offset
    }

    /// Replace the field inside `byte` with `value`, leaving the other bits
    /// untouched. Bits of `value` above the field width are dropped.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn insert(&self, byte: u8, value: u8) -> u8 {
        let shifted = ((value as u16) << self.offset) as u8;
        (byte & !self.mask()) | (shifted & self.mask())
    }
}

/// ACC_CONF bits 3:0
pub(crate) const ACC_ODR: Field = Field::new(Register::AccConf, 0, 4);
/// ACC_CONF bits 6:4
pub(crate) const ACC_OSR: Field = Field::new(Register::AccConf, 4, 3);
/// ACC_CONF bit 7
pub(crate) const ACC_FILTER_PERF: Field = Field::new(Register::AccConf, 7, 1);
/// ACC_RANGE bits 1:0
pub(crate) const ACC_RANGE: Field = Field::new(Register::AccRange, 0, 2);
/// PWR_CTRL bit 2
pub(crate) const ACC_ENABLE: Field = Field::new(Register::PwrCtrl, 2, 1);
