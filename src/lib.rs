#![no_std]

//! Noise-reduced temperature from an analog sensor read through an ADC.
//!
//! Raw codes pass through a linear transfer function (`volts / slope`) and
//! then one caller-selected estimator: an exponential moving average or a
//! scalar Kalman filter.

mod config;
mod error;
mod state;
mod thermometer;
pub mod filters;
pub mod source;
pub mod transfer;

pub use config::{Config, ConfigError, RangePolicy, SensorConfig};
pub use error::{ReadError, SampleError};
pub use thermometer::Thermometer;
pub use filters::NoiseFilter;
pub use source::AdcSource;
pub use transfer::to_celsius;

#[cfg(feature = "filter-ema")]
pub use filters::{EmaFilter, EmaState};

#[cfg(feature = "filter-kalman")]
pub use filters::{KalmanFilter, KalmanState};
