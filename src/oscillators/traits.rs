//! Core trait definitions for oscillators.

use crate::{Signal, Time};

/// Common interface for all oscillators.
///
/// An oscillator is driven by a frequency signal (in Hz), which may itself
/// vary with time for frequency modulation. The phase at `t` is the
/// fractional part of `t_seconds * frequency(t)`, in `[0, 1)`.
pub trait Oscillator: Signal {
    /// Signal providing the frequency in Hz.
    type Frequency: Signal;

    /// Gets the frequency signal driving the oscillator.
    fn frequency(&self) -> &Self::Frequency;

    /// Gets the phase at time `t`, in `[0, 1)`.
    fn phase(&self, t: Time) -> f64 {
        (t.as_secs_f64() * self.frequency().at(t)).rem_euclid(1.0)
    }
}
