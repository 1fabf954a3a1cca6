//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::{Signal, Time};
use std::f64::consts::PI;

/// A sine wave oscillator.
///
/// Evaluates `sin(2π · t · frequency(t))`, with `t` in seconds. The
/// frequency is itself a signal, so it may vary over time.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, Sine, Time};
///
/// let osc = Sine::new(1.0);
/// assert!((osc.at(Time::from_millis(250)) - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Sine<F: Signal> {
    frequency: F,
}

impl<F: Signal> Sine<F> {
    /// Creates a new sine oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency signal in Hz
    pub fn new(frequency: F) -> Self {
        Self { frequency }
    }
}

impl<F: Signal> Signal for Sine<F> {
    fn at(&self, t: Time) -> f64 {
        (2.0 * PI * t.as_secs_f64() * self.frequency.at(t)).sin()
    }
}

impl<F: Signal> Oscillator for Sine<F> {
    type Frequency = F;

    fn frequency(&self) -> &F {
        &self.frequency
    }
}
