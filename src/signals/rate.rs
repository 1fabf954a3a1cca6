//! Sample rates and the mapping between frame indices and time offsets.

use crate::{Error, Result, Time};
use std::fmt;
use std::num::NonZeroU32;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Number of frames per second used to discretize a signal.
///
/// A sample rate is always a positive integer; zero is rejected at
/// construction.
///
/// # Examples
///
/// ```
/// use wavecraft::{SampleRate, Time};
///
/// let rate = SampleRate::new(4).unwrap();
/// assert_eq!(rate.frame_time(1), Time::from_millis(250));
/// assert_eq!(rate.frame_index(Time::from_millis(600)), 2);
/// assert!(SampleRate::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleRate(NonZeroU32);

impl SampleRate {
    /// CD-quality rate used when the caller leaves the rate unspecified.
    pub const DEFAULT: SampleRate = SampleRate(NonZeroU32::new(44_100).unwrap());

    pub fn new(hz: u32) -> Result<Self> {
        NonZeroU32::new(hz)
            .map(SampleRate)
            .ok_or(Error::InvalidSampleRate(hz))
    }

    /// Resolves an optional rate: `None` opts into [`SampleRate::DEFAULT`],
    /// an explicit zero is still an error.
    pub fn resolve(hz: Option<u32>) -> Result<Self> {
        match hz {
            Some(hz) => Self::new(hz),
            None => Ok(Self::DEFAULT),
        }
    }

    pub fn hz(self) -> u32 {
        self.0.get()
    }

    /// Offset of frame `index`, i.e. `index / rate` seconds rounded to the
    /// nearest nanosecond.
    pub fn frame_time(self, index: u64) -> Time {
        let rate = self.hz() as i128;
        let nanos = (2 * index as i128 * NANOS_PER_SEC + rate) / (2 * rate);
        Time::from_nanos(nanos as i64)
    }

    /// Index of the frame containing `t` (floor). Inverse of
    /// [`SampleRate::frame_time`]: `frame_index(frame_time(i)) == i`.
    /// Negative offsets map to negative indices.
    pub fn frame_index(self, t: Time) -> i64 {
        let rate = self.hz() as i128;
        let t = t.as_nanos() as i128;
        (rate * (2 * t + 1) - 1).div_euclid(2 * NANOS_PER_SEC) as i64
    }

    /// Number of frames whose offset falls in `[0, duration)`.
    ///
    /// Counts against the rounded [`SampleRate::frame_time`] offsets, so no
    /// frame ever lands on `duration` itself and
    /// `frames_in(duration_of(n)) == n`.
    pub fn frames_in(self, duration: Time) -> usize {
        if !duration.is_positive() {
            return 0;
        }
        let last = self.frame_index(duration - Time::from_nanos(1));
        (last + 1) as usize
    }

    /// Duration of `frames` frames.
    pub fn duration_of(self, frames: usize) -> Time {
        self.frame_time(frames as u64)
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.hz())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_rejected() {
        assert!(matches!(SampleRate::new(0), Err(Error::InvalidSampleRate(0))));
        assert!(SampleRate::resolve(Some(0)).is_err());
    }

    #[test]
    fn test_unspecified_rate_defaults() {
        assert_eq!(SampleRate::resolve(None).unwrap().hz(), 44_100);
        assert_eq!(SampleRate::default(), SampleRate::DEFAULT);
        assert_eq!(SampleRate::resolve(Some(48_000)).unwrap().hz(), 48_000);
    }

    #[test]
    fn test_frame_index_inverts_frame_time() {
        for hz in [1, 3, 7, 10, 44_100, 48_000, 96_000] {
            let rate = SampleRate::new(hz).unwrap();
            for i in [0u64, 1, 2, 99, 44_099, 1_000_003] {
                let t = rate.frame_time(i);
                assert_eq!(rate.frame_index(t), i as i64, "rate {hz}, frame {i}");
                assert_eq!(
                    rate.frame_index(t - Time::from_nanos(1)),
                    i as i64 - 1,
                    "rate {hz}, just before frame {i}"
                );
            }
        }
    }

    #[test]
    fn test_negative_offsets_map_to_negative_indices() {
        let rate = SampleRate::new(10).unwrap();
        assert_eq!(rate.frame_index(Time::from_nanos(-1)), -1);
        assert_eq!(rate.frame_index(Time::from_millis(-150)), -2);
    }

    #[test]
    fn test_frames_in() {
        let rate = SampleRate::new(10).unwrap();
        assert_eq!(rate.frames_in(Time::from_millis(100)), 1);
        assert_eq!(rate.frames_in(Time::from_millis(101)), 2);
        assert_eq!(rate.frames_in(Time::from_secs(1)), 10);
        assert_eq!(rate.frames_in(Time::ZERO), 0);
        assert_eq!(SampleRate::DEFAULT.frames_in(Time::from_secs(2)), 88_200);
    }

    #[test]
    fn test_frames_stay_inside_half_open_range() {
        // 2/3 s rounds up to 666_666_667ns, which is also the offset of frame 2.
        let rate = SampleRate::new(3).unwrap();
        let d = Time::from_nanos(666_666_667);
        assert_eq!(rate.frame_time(2), d);
        assert_eq!(rate.frames_in(d), 2);
        assert_eq!(rate.frames_in(d + Time::from_nanos(1)), 3);

        for hz in [3, 7, 44_100, 48_000] {
            let rate = SampleRate::new(hz).unwrap();
            for n in [1usize, 2, 3, 999, 44_101] {
                let d = rate.duration_of(n);
                assert_eq!(rate.frames_in(d), n, "rate {hz}, {n} frames");
                assert!(rate.frame_time(n as u64 - 1) < d);
            }
        }
    }
}
