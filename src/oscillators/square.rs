//! Square wave oscillator implementation.

use super::Oscillator;
use crate::{Signal, Time};

/// A square wave oscillator: `1.0` for the first half of each period,
/// `-1.0` for the second.
#[derive(Debug, Clone)]
pub struct Square<F: Signal> {
    frequency: F,
}

impl<F: Signal> Square<F> {
    pub fn new(frequency: F) -> Self {
        Self { frequency }
    }
}

impl<F: Signal> Signal for Square<F> {
    fn at(&self, t: Time) -> f64 {
        if self.phase(t) < 0.5 { 1.0 } else { -1.0 }
    }
}

impl<F: Signal> Oscillator for Square<F> {
    type Frequency = F;

    fn frequency(&self) -> &F {
        &self.frequency
    }
}
