//! Raw sample acquisition.
//!
//! The estimators never own or configure the ADC. They only need something
//! that blocks until a conversion is ready and hands back the code.

use core::convert::Infallible;

/// Blocking source of raw ADC codes.
pub trait AdcSource {
    type Error;

    /// Start a conversion and wait for its result.
    fn read_raw(&mut self) -> Result<u32, Self::Error>;
}

/// Closures are infallible sources, handy for host-side tests and simulation.
impl<F> AdcSource for F
where
    F: FnMut() -> u32,
{
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<u32, Infallible> {
        Ok(self())
    }
}

#[cfg(feature = "embedded-hal")]
pub use self::one_shot::OneShotSource;

#[cfg(feature = "embedded-hal")]
mod one_shot {
    use core::marker::PhantomData;

    use embedded_hal::adc::{Channel, OneShot};

    use super::AdcSource;

    /// One ADC channel read through the `embedded-hal` 0.2 `OneShot` trait.
    pub struct OneShotSource<Adc, A, Word, Pin> {
        adc: Adc,
        pin: Pin,
        _marker: PhantomData<(A, Word)>,
    }

    impl<Adc, A, Word, Pin> OneShotSource<Adc, A, Word, Pin>
    where
        Adc: OneShot<A, Word, Pin>,
        Pin: Channel<A>,
        Word: Into<u32>,
    {
        pub fn new(adc: Adc, pin: Pin) -> Self {
            Self {
                adc,
                pin,
                _marker: PhantomData,
            }
        }

        /// Hand the peripheral and channel back
        pub fn release(self) -> (Adc, Pin) {
            (self.adc, self.pin)
        }
    }

    impl<Adc, A, Word, Pin> AdcSource for OneShotSource<Adc, A, Word, Pin>
    where
        Adc: OneShot<A, Word, Pin>,
        Pin: Channel<A>,
        Word: Into<u32>,
    {
        type Error = Adc::Error;

        fn read_raw(&mut self) -> Result<u32, Self::Error> {
            // Unbounded wait; timeouts belong to the HAL
            let word = nb::block!(self.adc.read(&mut self.pin))?;
            Ok(word.into())
        }
    }
}
