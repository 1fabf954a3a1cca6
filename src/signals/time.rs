//! Time offsets with nanosecond resolution.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A signed time offset, stored as a whole number of nanoseconds.
///
/// Signals are evaluated at a `Time`. Offsets may be negative (a shifted or
/// time-reversed signal can look into the past), and all arithmetic except
/// [`Time::scale`] is exact integer arithmetic, so periodic signals never
/// drift however many periods have elapsed.
///
/// # Examples
///
/// ```
/// use wavecraft::Time;
///
/// let t = Time::from_millis(1500);
/// assert_eq!(t.as_secs_f64(), 1.5);
/// assert_eq!(t % Time::from_secs(1), Time::from_millis(500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time(i64);

impl Time {
    /// Zero offset.
    pub const ZERO: Time = Time(0);

    /// One second.
    pub const SECOND: Time = Time(NANOS_PER_SEC);

    pub const fn from_nanos(nanos: i64) -> Self {
        Time(nanos)
    }

    pub const fn from_micros(micros: i64) -> Self {
        Time(micros * 1_000)
    }

    pub const fn from_millis(millis: i64) -> Self {
        Time(millis * 1_000_000)
    }

    pub const fn from_secs(secs: i64) -> Self {
        Time(secs * NANOS_PER_SEC)
    }

    /// Creates a time offset from fractional seconds, rounded to the nearest
    /// nanosecond. Out-of-range values saturate.
    pub fn from_secs_f64(secs: f64) -> Self {
        Time((secs * NANOS_PER_SEC as f64).round() as i64)
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SEC as f64
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiplies the offset by a real factor, rounded to the nearest
    /// nanosecond. Saturates at the representable range.
    ///
    /// ```
    /// use wavecraft::Time;
    ///
    /// assert_eq!(Time::from_secs(2).scale(0.25), Time::from_millis(500));
    /// assert_eq!(Time::from_secs(1).scale(-1.0), Time::from_secs(-1));
    /// ```
    pub fn scale(self, factor: f64) -> Self {
        Time((self.0 as f64 * factor).round() as i64)
    }

    /// Returns `self / other` as a real number.
    pub fn ratio(self, other: Time) -> f64 {
        self.0 as f64 / other.0 as f64
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Time {
    type Output = Time;

    fn neg(self) -> Time {
        Time(self.0.saturating_neg())
    }
}

impl Mul<i64> for Time {
    type Output = Time;

    fn mul(self, rhs: i64) -> Time {
        Time(self.0.saturating_mul(rhs))
    }
}

/// Integer division, truncating toward zero.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Div<i64> for Time {
    type Output = Time;

    fn div(self, rhs: i64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Euclidean remainder: the result is always in `[0, |rhs|)`.
///
/// # Panics
///
/// Panics if `rhs` is zero. `Loop` rejects zero periods at construction.
impl Rem for Time {
    type Output = Time;

    fn rem(self, rhs: Time) -> Time {
        Time(self.0.rem_euclid(rhs.0))
    }
}

impl From<std::time::Duration> for Time {
    fn from(d: std::time::Duration) -> Self {
        Time(i64::try_from(d.as_nanos()).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_secs_f64())
    }
}
