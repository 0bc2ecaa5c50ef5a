use crate::filters::NoiseFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    InvalidReferenceVoltage,
    InvalidMaxCode,
    InvalidResolution,
    InvalidSlope,
    InvalidAlpha,
    InvalidProcessNoise,
    InvalidMeasurementNoise,
    InvalidInitialCovariance,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidReferenceVoltage => {
                write!(f, "vref must be finite and greater than zero")
            }
            ConfigError::InvalidMaxCode => write!(f, "max_code must be greater than zero"),
            ConfigError::InvalidResolution => write!(f, "ADC resolution must be 1..=32 bits"),
            ConfigError::InvalidSlope => write!(f, "sensor slope must be finite and non-zero"),
            ConfigError::InvalidAlpha => write!(f, "EMA alpha must be in range (0.0, 1.0]"),
            ConfigError::InvalidProcessNoise => {
                write!(f, "Kalman process noise must be finite and >= 0")
            }
            ConfigError::InvalidMeasurementNoise => {
                write!(f, "Kalman measurement noise must be finite and > 0")
            }
            ConfigError::InvalidInitialCovariance => {
                write!(f, "Kalman initial covariance must be finite and >= 0")
            }
        }
    }
}

/// Analog sensor wiring: ADC reference, ADC full-scale code and sensor slope.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// ADC reference voltage in volts.
    pub vref: f32,
    /// Largest code the ADC can produce (4095 for 12 bits).
    pub max_code: u32,
    /// Sensor output in volts per degree Celsius. Zero offset is assumed.
    pub slope: f32,
}

impl SensorConfig {
    /// TMP37 output slope: 20 mV/°C.
    pub const TMP37_SLOPE: f32 = 0.02;

    /// Full-scale code of a 12-bit converter.
    pub const MAX_CODE_12BIT: u32 = 4095;

    /// TMP37 on a 12-bit ADC.
    pub const fn tmp37(vref: f32) -> Self {
        Self {
            vref,
            max_code: Self::MAX_CODE_12BIT,
            slope: Self::TMP37_SLOPE,
        }
    }

    /// Sensor on an ADC with `bits` of resolution.
    pub fn with_resolution(vref: f32, bits: u8, slope: f32) -> Result<Self, ConfigError> {
        if bits == 0 || bits > 32 {
            return Err(ConfigError::InvalidResolution);
        }

        let max_code = if bits == 32 {
            u32::MAX
        } else {
            (1u32 << bits) - 1
        };

        let config = Self {
            vref,
            max_code,
            slope,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails both comparisons
        if !(self.vref.is_finite() && self.vref > 0.0) {
            return Err(ConfigError::InvalidReferenceVoltage);
        }

        if self.max_code == 0 {
            return Err(ConfigError::InvalidMaxCode);
        }

        // Zero slope would divide by zero in the converter
        if !self.slope.is_finite() || self.slope == 0.0 {
            return Err(ConfigError::InvalidSlope);
        }

        Ok(())
    }
}

/// How raw codes above `max_code` are handled before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangePolicy {
    /// Convert as-is; a faulty source yields an out-of-range temperature.
    Unchecked,

    /// Saturate to `max_code`.
    #[default]
    Clamp,

    /// Refuse the sample with [`SampleError::OutOfRange`](crate::SampleError::OutOfRange).
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub sensor: SensorConfig,
    pub filter: NoiseFilter,
    pub range: RangePolicy,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sensor.validate()?;
        self.filter.validate()?;
        Ok(())
    }
}
