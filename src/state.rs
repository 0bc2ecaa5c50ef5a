#[cfg(feature = "filter-ema")]
use crate::filters::EmaFilter;
#[cfg(feature = "filter-kalman")]
use crate::filters::KalmanFilter;
use crate::filters::NoiseFilter;

/// Runtime state of the selected estimator
#[derive(Debug, Clone, Copy)]
pub(crate) enum FilterState {
    /// Passthrough keeps only the last output
    None { last: Option<f32> },

    #[cfg(feature = "filter-ema")]
    Ema(EmaFilter),

    #[cfg(feature = "filter-kalman")]
    Kalman(KalmanFilter),
}

impl FilterState {
    pub(crate) fn new(filter: &NoiseFilter) -> Self {
        match *filter {
            NoiseFilter::None => FilterState::None { last: None },

            #[cfg(feature = "filter-ema")]
            NoiseFilter::ExponentialMovingAverage { alpha } => {
                FilterState::Ema(EmaFilter::new(alpha))
            }

            #[cfg(feature = "filter-kalman")]
            NoiseFilter::Kalman {
                process_noise,
                measurement_noise,
            } => FilterState::Kalman(KalmanFilter::new(process_noise, measurement_noise)),
        }
    }

    pub(crate) fn apply(&mut self, temperature: f32) -> f32 {
        match self {
            FilterState::None { last } => {
                *last = Some(temperature);
                temperature
            }

            #[cfg(feature = "filter-ema")]
            FilterState::Ema(filter) => filter.apply(temperature),

            #[cfg(feature = "filter-kalman")]
            FilterState::Kalman(filter) => filter.apply(temperature),
        }
    }

    pub(crate) fn value(&self) -> Option<f32> {
        match self {
            FilterState::None { last } => *last,

            #[cfg(feature = "filter-ema")]
            FilterState::Ema(filter) => filter.value(),

            #[cfg(feature = "filter-kalman")]
            FilterState::Kalman(filter) => filter.estimate(),
        }
    }

    pub(crate) fn reset(&mut self) {
        match self {
            FilterState::None { last } => *last = None,

            #[cfg(feature = "filter-ema")]
            FilterState::Ema(filter) => filter.reset(),

            #[cfg(feature = "filter-kalman")]
            FilterState::Kalman(filter) => filter.reset(),
        }
    }
}
