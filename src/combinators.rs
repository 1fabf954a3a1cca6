//! Signal combinators for composing and transforming signals.
//!
//! Every combinator is a constructor: it takes ownership of its operand
//! signals and parameters and returns a new signal. Nothing is evaluated until
//! the resulting graph is sampled. Constructors that can be handed invalid
//! parameters (an empty operand list, a non-positive period or duration)
//! return a `Result` and fail immediately; evaluation itself never fails.

use crate::{BoxedSignal, Error, Result, Signal, Time};
use std::sync::Arc;

/// Multiplies a source signal by a modulating signal (amplitude modulation).
///
/// When the multiplier is a constant this is a plain gain; when it is an
/// envelope or slow oscillator it shapes the loudness of the source over time.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, Time, combinators::Amplitude};
///
/// let quieter = Amplitude::new(0.8, 0.5);
/// assert_eq!(quieter.at(Time::ZERO), 0.4);
/// ```
#[derive(Debug, Clone)]
pub struct Amplitude<S: Signal, M: Signal> {
    source: S,
    multiplier: M,
}

impl<S: Signal, M: Signal> Amplitude<S, M> {
    /// Creates a new Amplitude combinator.
    pub fn new(source: S, multiplier: M) -> Self {
        Self { source, multiplier }
    }
}

impl<S: Signal, M: Signal> Signal for Amplitude<S, M> {
    fn at(&self, t: Time) -> f64 {
        self.source.at(t) * self.multiplier.at(t)
    }
}

/// Adds two signals together without normalization.
///
/// Unlike [`Combine`], the result is the plain sum, so mixing full-scale
/// signals can exceed `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct Add<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Add<A, B> {
    /// Creates a new Add combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Add<A, B> {
    fn at(&self, t: Time) -> f64 {
        self.a.at(t) + self.b.at(t)
    }
}

/// Adds a fixed offset to a signal (DC offset).
///
/// Useful for shifting an oscillator from `[-1, 1]` into a positive range
/// before using it as a frequency or gain.
#[derive(Debug, Clone)]
pub struct Offset<S: Signal> {
    pub source: S,
    pub offset: f64,
}

impl<S: Signal> Signal for Offset<S> {
    fn at(&self, t: Time) -> f64 {
        self.source.at(t) + self.offset
    }
}

/// Clamps a signal to a range (hard clipping).
#[derive(Debug, Clone)]
pub struct Clamp<S: Signal> {
    pub source: S,
    pub min: f64,
    pub max: f64,
}

impl<S: Signal> Signal for Clamp<S> {
    fn at(&self, t: Time) -> f64 {
        self.source.at(t).clamp(self.min, self.max)
    }
}

/// Negates a signal.
#[derive(Debug, Clone)]
pub struct Invert<S: Signal> {
    pub source: S,
}

impl<S: Signal> Signal for Invert<S> {
    fn at(&self, t: Time) -> f64 {
        -self.source.at(t)
    }
}

/// Applies a pure function to each value of a signal.
///
/// The function must not keep state between calls; it is `Fn`, not `FnMut`.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, Time, combinators::Map};
///
/// let cubed = Map { source: 2.0, func: |x: f64| x * x * x };
/// assert_eq!(cubed.at(Time::ZERO), 8.0);
/// ```
pub struct Map<S: Signal, F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    pub source: S,
    pub func: F,
}

impl<S: Signal, F> Signal for Map<S, F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn at(&self, t: Time) -> f64 {
        (self.func)(self.source.at(t))
    }
}

/// Repeats the beginning of a signal every `period`.
///
/// Evaluates the source at `t mod period`. The modulo is Euclidean and exact,
/// so a time exactly on a period boundary wraps to the start of the next
/// period, negative times wrap into `[0, period)`, and there is no drift
/// after many periods.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, Time, combinators::{Lerp, Loop}};
///
/// let ramp = Lerp::new(0.0, 1.0, Time::SECOND).unwrap();
/// let saw = Loop::new(ramp, Time::SECOND).unwrap();
/// assert_eq!(saw.at(Time::from_millis(2500)), 0.5);
/// assert_eq!(saw.at(Time::from_secs(3)), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Loop<S: Signal> {
    source: S,
    period: Time,
}

impl<S: Signal> Loop<S> {
    /// Creates a new Loop combinator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPeriod`] if `period` is zero or negative.
    pub fn new(source: S, period: Time) -> Result<Self> {
        if !period.is_positive() {
            return Err(Error::InvalidPeriod(period));
        }
        Ok(Self { source, period })
    }

    pub fn period(&self) -> Time {
        self.period
    }
}

impl<S: Signal> Signal for Loop<S> {
    fn at(&self, t: Time) -> f64 {
        self.source.at(t % self.period)
    }
}

/// Switches from one signal to another once a threshold time is reached.
///
/// Returns `before(t)` while `t < threshold` and `after(t)` from the
/// threshold onwards. The switch is a hard cut with no crossfade.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, Time, combinators::Limit};
///
/// let gate = Limit::new(1.0, 0.0, Time::SECOND);
/// assert_eq!(gate.at(Time::from_millis(999)), 1.0);
/// assert_eq!(gate.at(Time::SECOND), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Limit<B: Signal, A: Signal> {
    before: B,
    after: A,
    threshold: Time,
}

impl<B: Signal, A: Signal> Limit<B, A> {
    /// Creates a new Limit combinator.
    pub fn new(before: B, after: A, threshold: Time) -> Self {
        Self {
            before,
            after,
            threshold,
        }
    }
}

impl<B: Signal, A: Signal> Signal for Limit<B, A> {
    fn at(&self, t: Time) -> f64 {
        if t >= self.threshold {
            self.after.at(t)
        } else {
            self.before.at(t)
        }
    }
}

/// Additive mix of one or more signals, normalized by the operand count.
///
/// The value at `t` is the arithmetic mean of every operand's value at `t`,
/// so mixing full-scale signals stays full-scale.
///
/// The operand type defaults to [`BoxedSignal`] so unrelated signal types can
/// be mixed; a homogeneous `Vec` of one concrete type works without boxing.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, SignalExt, Time, combinators::Combine};
///
/// let mix = Combine::new(vec![2.0.boxed(), 4.0.boxed()]).unwrap();
/// assert_eq!(mix.at(Time::ZERO), 3.0);
///
/// assert!(Combine::<f64>::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Combine<S: Signal = BoxedSignal> {
    sources: Vec<S>,
}

impl<S: Signal> Combine<S> {
    /// Creates a new Combine combinator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCombine`] if `sources` is empty.
    pub fn new(sources: Vec<S>) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::EmptyCombine);
        }
        Ok(Self { sources })
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    // Never empty after construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<S: Signal> Signal for Combine<S> {
    fn at(&self, t: Time) -> f64 {
        let sum: f64 = self.sources.iter().map(|s| s.at(t)).sum();
        sum / self.sources.len() as f64
    }
}

/// Linear ramp from `start` to `end` over `duration`.
///
/// Returns `start + (end - start) * (t / duration)`. The ramp is not clamped:
/// past `duration` (or before zero) it keeps extrapolating along the same
/// line. Wrap it in [`Limit`] or [`Clamp`] to hold the end value.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, Time, combinators::Lerp};
///
/// let sweep = Lerp::new(440.0, 880.0, Time::from_secs(2)).unwrap();
/// assert_eq!(sweep.at(Time::SECOND), 660.0);
/// assert_eq!(sweep.at(Time::from_secs(4)), 1320.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lerp {
    start: f64,
    end: f64,
    duration: Time,
}

impl Lerp {
    /// Creates a new linear ramp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] if `duration` is zero or negative.
    pub fn new(start: f64, end: f64, duration: Time) -> Result<Self> {
        if !duration.is_positive() {
            return Err(Error::InvalidDuration(duration));
        }
        Ok(Self {
            start,
            end,
            duration,
        })
    }
}

impl Signal for Lerp {
    fn at(&self, t: Time) -> f64 {
        self.start + (self.end - self.start) * t.ratio(self.duration)
    }
}

/// Shifts a signal in time: evaluates the source at `t + by`.
///
/// A positive shift starts the source part-way through; a negative shift
/// delays it.
#[derive(Debug, Clone)]
pub struct Shift<S: Signal> {
    source: S,
    by: Time,
}

impl<S: Signal> Shift<S> {
    /// Creates a new Shift combinator.
    pub fn new(source: S, by: Time) -> Self {
        Self { source, by }
    }
}

impl<S: Signal> Signal for Shift<S> {
    fn at(&self, t: Time) -> f64 {
        self.source.at(t + self.by)
    }
}

/// Changes the speed of time for a signal: evaluates the source at
/// `t * factor`.
///
/// Factors above one speed the source up, factors between zero and one slow
/// it down, zero freezes it at its value at `t = 0`, and negative factors play
/// it backwards.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, Time, combinators::{Lerp, Speed}};
///
/// let ramp = Lerp::new(0.0, 1.0, Time::SECOND).unwrap();
/// let fast = Speed::new(ramp, 2.0);
/// assert_eq!(fast.at(Time::from_millis(250)), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Speed<S: Signal> {
    source: S,
    factor: f64,
}

impl<S: Signal> Speed<S> {
    /// Creates a new Speed combinator.
    pub fn new(source: S, factor: f64) -> Self {
        Self { source, factor }
    }
}

impl<S: Signal> Signal for Speed<S> {
    fn at(&self, t: Time) -> f64 {
        self.source.at(t.scale(self.factor))
    }
}

/// Extension trait providing convenient combinator methods for all signals.
///
/// This trait is automatically implemented for all types that implement
/// `Signal`, allowing fluent chaining:
///
/// ```
/// use wavecraft::{Sine, Signal, SignalExt, Time};
///
/// let tone = Sine::new(440.0)
///     .amplitude(0.5)
///     .looped(Time::from_millis(500))
///     .unwrap()
///     .shift(Time::from_millis(10));
/// let _ = tone.at(Time::ZERO);
/// ```
pub trait SignalExt: Signal + Sized {
    /// Multiplies this signal by another signal.
    fn amplitude<M: Signal>(self, multiplier: M) -> Amplitude<Self, M> {
        Amplitude::new(self, multiplier)
    }

    /// Adds another signal to this signal.
    fn add<S: Signal>(self, other: S) -> Add<Self, S> {
        Add::new(self, other)
    }

    /// Adds a fixed offset to this signal.
    fn offset(self, offset: f64) -> Offset<Self> {
        Offset {
            source: self,
            offset,
        }
    }

    /// Clamps this signal to a range.
    fn clamp(self, min: f64, max: f64) -> Clamp<Self> {
        Clamp {
            source: self,
            min,
            max,
        }
    }

    /// Negates this signal.
    fn invert(self) -> Invert<Self> {
        Invert { source: self }
    }

    /// Applies a pure function to each value of this signal.
    fn map<F>(self, func: F) -> Map<Self, F>
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        Map { source: self, func }
    }

    /// Repeats this signal every `period`.
    fn looped(self, period: Time) -> Result<Loop<Self>> {
        Loop::new(self, period)
    }

    /// Plays this signal until `threshold`, then switches to `after`.
    fn until<A: Signal>(self, threshold: Time, after: A) -> Limit<Self, A> {
        Limit::new(self, after, threshold)
    }

    /// Shifts this signal in time.
    fn shift(self, by: Time) -> Shift<Self> {
        Shift::new(self, by)
    }

    /// Changes the speed of time for this signal.
    fn speed(self, factor: f64) -> Speed<Self> {
        Speed::new(self, factor)
    }

    /// Erases the concrete type, e.g. to mix unrelated signals with [`Combine`].
    fn boxed(self) -> BoxedSignal
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Wraps this signal for sharing between several parents or renders.
    fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

// Blanket implementation for all Signal types
impl<T: Signal> SignalExt for T {}
