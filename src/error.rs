use core::fmt;

/// A raw code refused before conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// Code above the ADC's full scale, only under [`RangePolicy::Reject`](crate::RangePolicy::Reject).
    OutOfRange { raw: u32, max_code: u32 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::OutOfRange { raw, max_code } => {
                write!(f, "raw code {} exceeds full scale {}", raw, max_code)
            }
        }
    }
}

/// Failure of a blocking [`Thermometer::read`](crate::Thermometer::read).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    /// The acquisition source failed.
    Acquisition(E),

    /// The acquired code was refused.
    Sample(SampleError),
}

impl<E> From<SampleError> for ReadError<E> {
    fn from(err: SampleError) -> Self {
        ReadError::Sample(err)
    }
}

impl<E: fmt::Display> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Acquisition(err) => write!(f, "acquisition failed: {}", err),
            ReadError::Sample(err) => write!(f, "{}", err),
        }
    }
}
