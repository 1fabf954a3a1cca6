//! Core signal trait.
//!
//! This module provides the fundamental `Signal` trait: a pure function from a
//! time offset to a real value.

use crate::Time;
use std::sync::Arc;

/// Common interface for every waveform, envelope, and control signal.
///
/// A signal is a deterministic mapping from a [`Time`] offset to a value.
/// Evaluation takes `&self`, so a signal cannot carry hidden state between
/// calls: evaluating twice at the same offset yields the same value, and
/// evaluating out of order is always allowed. Combinators build larger
/// signals by owning smaller ones; nothing is computed until the graph is
/// evaluated.
///
/// The `Send + Sync` bound lets a composed graph be shared between threads
/// and rendered in parallel.
pub trait Signal: Send + Sync {
    /// Evaluates the signal at time offset `t`.
    ///
    /// # Returns
    ///
    /// The signal value, typically between -1.0 and 1.0 for audio signals
    fn at(&self, t: Time) -> f64;
}

/// A type-erased signal, used for heterogeneous operand lists.
pub type BoxedSignal = Box<dyn Signal>;

/// Implementation of `Signal` for `f64` representing a constant signal value.
///
/// This allows using constant values anywhere a `Signal` is expected,
/// which is useful for fixed frequencies, gain values, or testing.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, Time};
///
/// let constant = 0.5_f64;
/// assert_eq!(constant.at(Time::ZERO), 0.5);
/// assert_eq!(constant.at(Time::from_secs(3)), 0.5);
/// ```
impl Signal for f64 {
    fn at(&self, _t: Time) -> f64 {
        *self
    }
}

/// A signal that ignores time and always returns the same value.
///
/// Equivalent to using a bare `f64`, but reads better at the root of a graph.
///
/// # Examples
///
/// ```
/// use wavecraft::{Constant, Signal, Time};
///
/// let one = Constant(1.0);
/// assert_eq!(one.at(Time::from_millis(1234)), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl Signal for Constant {
    fn at(&self, _t: Time) -> f64 {
        self.0
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Constant(value)
    }
}

impl<S: Signal + ?Sized> Signal for &S {
    fn at(&self, t: Time) -> f64 {
        (**self).at(t)
    }
}

impl<S: Signal + ?Sized> Signal for Box<S> {
    fn at(&self, t: Time) -> f64 {
        (**self).at(t)
    }
}

// Shared graphs: one waveform can feed several parents without copying.
impl<S: Signal + ?Sized> Signal for Arc<S> {
    fn at(&self, t: Time) -> f64 {
        (**self).at(t)
    }
}
