use crate::config::{Config, ConfigError, RangePolicy};
use crate::error::{ReadError, SampleError};
#[cfg(feature = "filter-ema")]
use crate::filters::EmaFilter;
#[cfg(feature = "filter-kalman")]
use crate::filters::KalmanFilter;
use crate::source::AdcSource;
use crate::state::FilterState;

/// One sensor channel: transfer function plus the selected estimator.
///
/// Owns its estimator state, so independent channels need independent
/// instances.
pub struct Thermometer {
    config: Config,
    state: FilterState,
}

impl Thermometer {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: FilterState::new(&config.filter),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Acquire one code from `source` (blocking) and feed it through [`update`](Self::update).
    pub fn read<S: AdcSource>(&mut self, source: &mut S) -> Result<f32, ReadError<S::Error>> {
        let raw = source.read_raw().map_err(ReadError::Acquisition)?;
        Ok(self.update(raw)?)
    }

    /// Convert a raw code to °C and advance the estimator.
    pub fn update(&mut self, raw: u32) -> Result<f32, SampleError> {
        // Check range
        let raw = self.check_range(raw)?;

        // Convert to temperature
        let temperature = self.config.sensor.to_celsius(raw);

        // Apply filter
        Ok(self.state.apply(temperature))
    }

    /// Last estimate, `None` before the first sample or after [`reset`](Self::reset).
    pub fn estimate(&self) -> Option<f32> {
        self.state.value()
    }

    /// Drop the estimator back to its uninitialized state.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    #[cfg(feature = "filter-ema")]
    pub fn ema(&self) -> Option<&EmaFilter> {
        match &self.state {
            FilterState::Ema(filter) => Some(filter),
            _ => None,
        }
    }

    #[cfg(feature = "filter-kalman")]
    pub fn kalman(&self) -> Option<&KalmanFilter> {
        match &self.state {
            FilterState::Kalman(filter) => Some(filter),
            _ => None,
        }
    }

    fn check_range(&self, raw: u32) -> Result<u32, SampleError> {
        let max_code = self.config.sensor.max_code;
        if raw <= max_code {
            return Ok(raw);
        }

        match self.config.range {
            RangePolicy::Unchecked => Ok(raw),
            RangePolicy::Clamp => {
                #[cfg(feature = "defmt")]
                defmt::warn!("raw code {=u32} clamped to {=u32}", raw, max_code);
                Ok(max_code)
            }
            RangePolicy::Reject => {
                #[cfg(feature = "defmt")]
                defmt::warn!("raw code {=u32} rejected, full scale {=u32}", raw, max_code);
                Err(SampleError::OutOfRange { raw, max_code })
            }
        }
    }
}
