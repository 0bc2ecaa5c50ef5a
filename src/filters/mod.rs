/// Temperature estimators
///
/// Filters smooth the noisy temperature stream produced by the transfer
/// function. All filtering happens in °C, f32.
#[cfg(feature = "filter-ema")]
mod ema;

#[cfg(feature = "filter-kalman")]
mod kalman;

#[cfg(feature = "filter-ema")]
pub use ema::{EmaFilter, EmaState};

#[cfg(feature = "filter-kalman")]
pub use kalman::{KalmanFilter, KalmanState};

#[cfg(feature = "steady-state")]
pub use kalman::SteadyState;

use crate::config::ConfigError;

/// Reference EMA smoothing factor (very smooth, slow response)
pub const DEFAULT_ALPHA: f32 = 0.01;

/// Reference Kalman process noise (Q)
pub const DEFAULT_PROCESS_NOISE: f32 = 0.001;

/// Reference Kalman measurement noise (R)
pub const DEFAULT_MEASUREMENT_NOISE: f32 = 5.0;

/// Kalman covariance assigned on the first measurement
pub const INITIAL_COVARIANCE: f32 = 1.0;

/// Noise filter configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NoiseFilter {
    /// No filtering applied
    None,

    /// Exponential moving average: filtered += alpha * (input - filtered)
    /// Lower alpha = more smoothing, higher = more responsive
    /// Requires: 0.0 < alpha <= 1.0
    #[cfg(feature = "filter-ema")]
    ExponentialMovingAverage { alpha: f32 },

    /// Scalar Kalman filter with a constant-temperature process model
    /// Requires: process_noise >= 0.0, measurement_noise > 0.0
    #[cfg(feature = "filter-kalman")]
    Kalman {
        process_noise: f32,
        measurement_noise: f32,
    },
}

impl NoiseFilter {
    /// EMA with the reference alpha
    #[cfg(feature = "filter-ema")]
    pub const fn ema() -> Self {
        NoiseFilter::ExponentialMovingAverage {
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Kalman with the reference Q and R
    #[cfg(feature = "filter-kalman")]
    pub const fn kalman() -> Self {
        NoiseFilter::Kalman {
            process_noise: DEFAULT_PROCESS_NOISE,
            measurement_noise: DEFAULT_MEASUREMENT_NOISE,
        }
    }

    /// Validate filter configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            NoiseFilter::None => Ok(()),

            #[cfg(feature = "filter-ema")]
            NoiseFilter::ExponentialMovingAverage { alpha } => {
                // Negated so NaN is rejected too
                if !(*alpha > 0.0 && *alpha <= 1.0) {
                    return Err(ConfigError::InvalidAlpha);
                }
                Ok(())
            }

            #[cfg(feature = "filter-kalman")]
            NoiseFilter::Kalman {
                process_noise,
                measurement_noise,
            } => {
                if !(process_noise.is_finite() && *process_noise >= 0.0) {
                    return Err(ConfigError::InvalidProcessNoise);
                }
                // R = 0 with Q = 0 collapses the covariance to 0/0
                if !(measurement_noise.is_finite() && *measurement_noise > 0.0) {
                    return Err(ConfigError::InvalidMeasurementNoise);
                }
                Ok(())
            }
        }
    }
}
