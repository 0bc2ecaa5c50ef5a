//! Scalar Kalman filter.
//!
//! Identity state transition and identity observation: the temperature is
//! modeled as constant between samples, drifting only through process noise.
//!
//! ```text
//! predict:  P = P + Q
//! update:   K = P / (P + R)
//!           x = x + K * (z - x)
//!           P = (1 - K) * P
//! ```
//!
//! Low `Q` assumes a slowly changing temperature; high `R` trusts each raw
//! measurement less. Both yield a smoother, slower estimate.

use crate::config::ConfigError;

/// Kalman estimator state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KalmanState {
    /// No measurement seen yet
    #[default]
    Uninitialized,

    /// Estimate and its error covariance (always >= 0)
    Tracking { estimate: f32, covariance: f32 },
}

/// Covariance and gain the filter settles at under fixed `Q` and `R`
#[cfg(feature = "steady-state")]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SteadyState {
    /// Posterior covariance after each update
    pub covariance: f32,
    /// Gain applied to the residual
    pub gain: f32,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KalmanFilter {
    process_noise: f32,
    measurement_noise: f32,
    initial_covariance: f32,
    last_gain: Option<f32>,
    state: KalmanState,
}

impl KalmanFilter {
    /// Create new Kalman filter with uninitialized state
    ///
    /// `process_noise` (Q) must be >= 0, `measurement_noise` (R) must be > 0.
    pub const fn new(process_noise: f32, measurement_noise: f32) -> Self {
        Self {
            process_noise,
            measurement_noise,
            initial_covariance: super::INITIAL_COVARIANCE,
            last_gain: None,
            state: KalmanState::Uninitialized,
        }
    }

    /// Covariance assigned when the first measurement bootstraps the estimate
    ///
    /// Must be finite and >= 0, otherwise the gain leaves [0, 1).
    pub fn with_initial_covariance(mut self, covariance: f32) -> Result<Self, ConfigError> {
        if !(covariance.is_finite() && covariance >= 0.0) {
            return Err(ConfigError::InvalidInitialCovariance);
        }
        self.initial_covariance = covariance;
        Ok(self)
    }

    /// Feed one measurement and return the new estimate.
    ///
    /// The first measurement is taken as the estimate directly, without a
    /// predict/update cycle.
    pub fn apply(&mut self, measurement: f32) -> f32 {
        debug_assert!(
            self.process_noise >= 0.0 && self.measurement_noise > 0.0,
            "Kalman noise must satisfy Q >= 0 and R > 0, got Q={} R={}",
            self.process_noise,
            self.measurement_noise
        );

        let (estimate, covariance) = match self.state {
            KalmanState::Uninitialized => {
                #[cfg(feature = "defmt")]
                defmt::trace!("kalman: tracking from {=f32}", measurement);
                (measurement, self.initial_covariance)
            }
            KalmanState::Tracking {
                estimate,
                covariance,
            } => {
                // Predict: estimate unchanged, uncertainty grows
                let predicted = covariance + self.process_noise;

                // Update
                let gain = predicted / (predicted + self.measurement_noise);
                self.last_gain = Some(gain);
                (
                    estimate + gain * (measurement - estimate),
                    (1.0 - gain) * predicted,
                )
            }
        };

        self.state = KalmanState::Tracking {
            estimate,
            covariance,
        };
        estimate
    }

    pub fn process_noise(&self) -> f32 {
        self.process_noise
    }

    pub fn measurement_noise(&self) -> f32 {
        self.measurement_noise
    }

    pub fn state(&self) -> &KalmanState {
        &self.state
    }

    pub fn estimate(&self) -> Option<f32> {
        match self.state {
            KalmanState::Uninitialized => None,
            KalmanState::Tracking { estimate, .. } => Some(estimate),
        }
    }

    pub fn covariance(&self) -> Option<f32> {
        match self.state {
            KalmanState::Uninitialized => None,
            KalmanState::Tracking { covariance, .. } => Some(covariance),
        }
    }

    /// Gain used by the most recent update, `None` until the second measurement
    pub fn last_gain(&self) -> Option<f32> {
        self.last_gain
    }

    /// Closed-form fixed point of the covariance recursion.
    ///
    /// Posterior `P` satisfies `P = (P + Q) * R / (P + Q + R)`, i.e.
    /// `P^2 + Q*P - Q*R = 0`.
    #[cfg(feature = "steady-state")]
    pub fn steady_state(&self) -> SteadyState {
        let q = self.process_noise;
        let r = self.measurement_noise;

        let covariance = (-q + libm::sqrtf(q * q + 4.0 * q * r)) / 2.0;
        let predicted = covariance + q;

        SteadyState {
            covariance,
            gain: predicted / (predicted + r),
        }
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("kalman: reset");
        self.state = KalmanState::Uninitialized;
        self.last_gain = None;
    }
}

impl Default for KalmanFilter {
    fn default() -> Self {
        Self::new(super::DEFAULT_PROCESS_NOISE, super::DEFAULT_MEASUREMENT_NOISE)
    }
}
