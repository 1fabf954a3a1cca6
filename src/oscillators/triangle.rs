//! Triangle wave oscillator implementation.

use super::Oscillator;
use crate::{Signal, Time};

/// A triangle wave oscillator.
///
/// The waveform rises linearly from -1.0 to 1.0 over the first half of each
/// period, then falls linearly back to -1.0.
#[derive(Debug, Clone)]
pub struct Triangle<F: Signal> {
    frequency: F,
}

impl<F: Signal> Triangle<F> {
    pub fn new(frequency: F) -> Self {
        Self { frequency }
    }
}

impl<F: Signal> Signal for Triangle<F> {
    fn at(&self, t: Time) -> f64 {
        let phase = self.phase(t);
        if phase < 0.5 {
            4.0 * phase - 1.0
        } else {
            3.0 - 4.0 * phase
        }
    }
}

impl<F: Signal> Oscillator for Triangle<F> {
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
        let osc = Triangle::new(1.0);
        assert!((osc.at(Time::ZERO) + 1.0).abs() < 1e-12);
        assert!(osc.at(Time::from_millis(250)).abs() < 1e-12);
        assert!((osc.at(Time::from_millis(500)) - 1.0).abs() < 1e-12);
        assert!(osc.at(Time::from_millis(750)).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let osc = Triangle::new(2.0);
        let rising = osc.at(Time::from_millis(50));
        let falling = osc.at(Time::from_millis(450));
        assert!((rising - falling).abs() < 1e-12);
    }
}
