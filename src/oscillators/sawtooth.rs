//! Sawtooth wave oscillator implementation.

use super::Oscillator;
use crate::{Signal, Time};

/// A sawtooth wave oscillator.
///
/// The waveform rises linearly from -1.0 to 1.0 over each period, then
/// sharply drops back to -1.0.
///
/// # Examples
///
/// ```
/// use wavecraft::{Sawtooth, Signal, Time};
///
/// let osc = Sawtooth::new(1.0);
/// assert_eq!(osc.at(Time::ZERO), -1.0);
/// assert_eq!(osc.at(Time::from_millis(500)), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Sawtooth<F: Signal> {
    frequency: F,
}

impl<F: Signal> Sawtooth<F> {
    /// Creates a new sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency signal in Hz
    pub fn new(frequency: F) -> Self {
        Self { frequency }
    }
}

impl<F: Signal> Signal for Sawtooth<F> {
    fn at(&self, t: Time) -> f64 {
        2.0 * self.phase(t) - 1.0
    }
}

impl<F: Signal> Oscillator for Sawtooth<F> {
    type Frequency = F;

    fn frequency(&self) -> &F {
        &self.frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_shape() {
        let osc = Sawtooth::new(1.0);
        assert!((osc.at(Time::ZERO) + 1.0).abs() < 1e-12);
        assert!((osc.at(Time::from_millis(250)) + 0.5).abs() < 1e-12);
        assert!((osc.at(Time::from_millis(750)) - 0.5).abs() < 1e-12);
        // Wraps back down at the period boundary
        assert!((osc.at(Time::SECOND) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_range() {
        let osc = Sawtooth::new(440.0);
        for i in 0..44_100 {
            let sample = osc.at(Time::from_nanos(i * 22_676));
            assert!((-1.0..1.0).contains(&sample));
        }
    }
}
