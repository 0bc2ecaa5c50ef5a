//! Sensor transfer function.
//!
//! Maps a raw ADC code to volts, then volts to degrees Celsius with a
//! slope-only (zero offset) sensor model:
//!
//! ```text
//! volts   = raw / max_code * vref
//! celsius = volts / slope
//! ```

use num_traits::AsPrimitive;

use crate::config::SensorConfig;

impl SensorConfig {
    /// Sensor output voltage for a raw code. Codes above `max_code` are not rejected.
    #[inline]
    pub fn to_volts<R: AsPrimitive<f32>>(&self, raw: R) -> f32 {
        (raw.as_() / self.max_code as f32) * self.vref
    }

    /// Temperature in °C for a raw code.
    #[inline]
    pub fn to_celsius<R: AsPrimitive<f32>>(&self, raw: R) -> f32 {
        self.to_volts(raw) / self.slope
    }

    /// Temperature corresponding to the full-scale code.
    pub fn full_scale_celsius(&self) -> f32 {
        self.vref / self.slope
    }
}

/// Free-function form of [`SensorConfig::to_celsius`].
#[inline]
pub fn to_celsius<R: AsPrimitive<f32>>(raw: R, sensor: &SensorConfig) -> f32 {
    sensor.to_celsius(raw)
}
