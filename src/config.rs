//! Enumerated accelerometer settings and their register codes.

use crate::error::InvalidSetting;

/// Accelerometer measurement range (ACC_RANGE bits 1:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelRange {
    /// ±2g
    G2 = 0x00,
    /// ±4g
    #[default]
    G4 = 0x01,
    /// ±8g
    G8 = 0x02,
    /// ±16g
    G16 = 0x03,
}

impl AccelRange {
    /// Every legal range, in register code order
    pub const ALL: [Self; 4] = [Self::G2, Self::G4, Self::G8, Self::G16];

    /// Counts per g for a 12-bit sample at this range
    #[must_use]
    pub const fn scale_factor(self) -> u16 {
        match self {
            Self::G2 => 1024,
            Self::G4 => 512,
            Self::G8 => 256,
            Self::G16 => 128,
        }
    }

    /// Symbolic name of the setting
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::G2 => "ACC_RANGE_2",
            Self::G4 => "ACC_RANGE_4",
            Self::G8 => "ACC_RANGE_8",
            Self::G16 => "ACC_RANGE_16",
        }
    }
}

impl From<AccelRange> for u8 {
    fn from(range: AccelRange) -> u8 {
        range as u8
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = InvalidSetting;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::G2),
            0x01 => Ok(Self::G4),
            0x02 => Ok(Self::G8),
            0x03 => Ok(Self::G16),
            _ => Err(InvalidSetting),
        }
    }
}

/// Output data rate (ACC_CONF bits 3:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputDataRate {
    /// 25/32 Hz
    Hz0_78 = 0x01,
    /// 25/16 Hz
    Hz1_5 = 0x02,
    /// 25/8 Hz
    Hz3_1 = 0x03,
    /// 25/4 Hz
    Hz6_25 = 0x04,
    /// 25/2 Hz
    Hz12_5 = 0x05,
    /// 25 Hz
    Hz25 = 0x06,
    /// 50 Hz
    Hz50 = 0x07,
    /// 100 Hz
    #[default]
    Hz100 = 0x08,
    /// 200 Hz
    Hz200 = 0x09,
    /// 400 Hz
    Hz400 = 0x0A,
    /// 800 Hz
    Hz800 = 0x0B,
    /// 1600 Hz
    Hz1600 = 0x0C,
}

impl OutputDataRate {
    /// Every legal rate, in register code order
    pub const ALL: [Self; 12] = [
        Self::Hz0_78,
        Self::Hz1_5,
        Self::Hz3_1,
        Self::Hz6_25,
        Self::Hz12_5,
        Self::Hz25,
        Self::Hz50,
        Self::Hz100,
        Self::Hz200,
        Self::Hz400,
        Self::Hz800,
        Self::Hz1600,
    ];

    /// Nominal sampling frequency
    #[must_use]
    pub fn hertz(self) -> f32 {
        match self {
            Self::Hz0_78 => 25.0 / 32.0,
            Self::Hz1_5 => 25.0 / 16.0,
            Self::Hz3_1 => 25.0 / 8.0,
            Self::Hz6_25 => 25.0 / 4.0,
            Self::Hz12_5 => 25.0 / 2.0,
            Self::Hz25 => 25.0,
            Self::Hz50 => 50.0,
            Self::Hz100 => 100.0,
            Self::Hz200 => 200.0,
            Self::Hz400 => 400.0,
            Self::Hz800 => 800.0,
            Self::Hz1600 => 1600.0,
        }
    }
}

impl From<OutputDataRate> for u8 {
    fn from(odr: OutputDataRate) -> u8 {
        odr as u8
    }
}

impl TryFrom<u8> for OutputDataRate {
    type Error = InvalidSetting;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|odr| u8::from(*odr) == code)
            .ok_or(InvalidSetting)
    }
}

/// Oversampling / averaging depth (ACC_CONF bits 6:4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OversampleRate {
    /// OSR4, or no averaging in averaging mode
    Osr4Avg1 = 0x00,
    /// OSR2, or average of 2 samples
    Osr2Avg2 = 0x01,
    /// Normal mode, or average of 4 samples
    #[default]
    NormAvg4 = 0x02,
    /// CIC mode, or average of 8 samples
    CicAvg8 = 0x03,
    /// Average of 16 samples
    ResAvg16 = 0x04,
    /// Average of 32 samples
    ResAvg32 = 0x05,
    /// Average of 64 samples
    ResAvg64 = 0x06,
    /// Average of 128 samples
    ResAvg128 = 0x07,
}

impl OversampleRate {
    /// Every legal oversample rate, in register code order
    pub const ALL: [Self; 8] = [
        Self::Osr4Avg1,
        Self::Osr2Avg2,
        Self::NormAvg4,
        Self::CicAvg8,
        Self::ResAvg16,
        Self::ResAvg32,
        Self::ResAvg64,
        Self::ResAvg128,
    ];
}

impl From<OversampleRate> for u8 {
    fn from(osr: OversampleRate) -> u8 {
        osr as u8
    }
}

impl TryFrom<u8> for OversampleRate {
    type Error = InvalidSetting;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(InvalidSetting)
    }
}

/// Filter performance mode (ACC_CONF bit 7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FilterPerformance {
    /// Averaging (CIC) mode
    Averaging = 0x00,
    /// Continuous filter mode
    #[default]
    Continuous = 0x01,
}

impl From<FilterPerformance> for u8 {
    fn from(perf: FilterPerformance) -> u8 {
        perf as u8
    }
}

impl From<FilterPerformance> for bool {
    fn from(perf: FilterPerformance) -> bool {
        perf == FilterPerformance::Continuous
    }
}

impl From<bool> for FilterPerformance {
    fn from(continuous: bool) -> Self {
        if continuous {
            Self::Continuous
        } else {
            Self::Averaging
        }
    }
}

impl TryFrom<u8> for FilterPerformance {
    type Error = InvalidSetting;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::Averaging),
            0x01 => Ok(Self::Continuous),
            _ => Err(InvalidSetting),
        }
    }
}

/// Decoded contents of the ACC_CONF register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Output data rate
    pub output_data_rate: OutputDataRate,
    /// Oversample rate
    pub oversample_rate: OversampleRate,
    /// Filter performance mode
    pub filter_performance: FilterPerformance,
}
