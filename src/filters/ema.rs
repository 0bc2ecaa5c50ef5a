/// Exponential Moving Average estimator state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EmaState {
    /// No sample seen yet
    #[default]
    Uninitialized,

    /// Smoothing the temperature stream
    Tracking { filtered: f32 },
}

/// Single-pole low-pass filter over a temperature stream
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmaFilter {
    alpha: f32,
    state: EmaState,
}

impl EmaFilter {
    /// Create new EMA filter with uninitialized state
    ///
    /// Lower alpha = more smoothing and more lag.
    pub const fn new(alpha: f32) -> Self {
        Self {
            alpha,
            state: EmaState::Uninitialized,
        }
    }

    /// Apply EMA filter: filtered += alpha * (input - filtered)
    ///
    /// First call initializes the filter to the input value.
    pub fn apply(&mut self, input: f32) -> f32 {
        debug_assert!(
            self.alpha > 0.0 && self.alpha <= 1.0,
            "EMA alpha must be in range (0.0, 1.0], got {}",
            self.alpha
        );

        let filtered = match self.state {
            EmaState::Uninitialized => {
                #[cfg(feature = "defmt")]
                defmt::trace!("ema: tracking from {=f32}", input);
                input
            }
            EmaState::Tracking { filtered } => filtered + self.alpha * (input - filtered),
        };

        self.state = EmaState::Tracking { filtered };
        filtered
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn state(&self) -> &EmaState {
        &self.state
    }

    /// Current filtered value, `None` before the first sample
    pub fn value(&self) -> Option<f32> {
        match self.state {
            EmaState::Uninitialized => None,
            EmaState::Tracking { filtered } => Some(filtered),
        }
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("ema: reset");
        self.state = EmaState::Uninitialized;
    }
}

impl Default for EmaFilter {
    fn default() -> Self {
        Self::new(super::DEFAULT_ALPHA)
    }
}
