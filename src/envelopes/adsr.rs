//! ADSR (Attack, Decay, Sustain, Release) envelope.

use super::Curve;
use crate::{Error, Result, Signal, Time};

/// ADSR envelope for a note of fixed length.
///
/// The envelope follows the classic shape:
/// - **Attack**: ramps from 0 to peak level (1.0)
/// - **Decay**: ramps from peak to the sustain level
/// - **Sustain**: holds the sustain level until the gate closes
/// - **Release**: ramps from wherever the envelope was when the gate closed
///   down to 0
///
/// The gate closes at a fixed offset given at construction, so the value is a
/// function of `t` alone. Before `t = 0` and after the release ends the
/// envelope is 0.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, SignalExt, Sine, Time};
/// use wavecraft::envelopes::{Adsr, Curve};
///
/// // 10ms attack, 100ms decay to 0.7, note held for 500ms, 300ms release
/// let env = Adsr::new(
///     Time::from_millis(10),
///     Time::from_millis(100),
///     0.7,
///     Time::from_millis(300),
///     Time::from_millis(500),
/// )
/// .unwrap()
/// .with_release_curve(Curve::Exponential(2.0));
///
/// let note = Sine::new(440.0).amplitude(env);
/// assert_eq!(note.at(Time::from_secs(2)), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adsr {
    attack: Time,
    decay: Time,
    sustain: f64,
    release: Time,
    gate: Time,
    attack_curve: Curve,
    decay_curve: Curve,
    release_curve: Curve,
}

impl Adsr {
    /// Creates a new ADSR envelope with linear segments.
    ///
    /// # Arguments
    ///
    /// * `attack` - Time from 0 to peak
    /// * `decay` - Time from peak to sustain level
    /// * `sustain` - Sustain level, in `[0, 1]`
    /// * `release` - Time from gate close to silence
    /// * `gate` - Offset at which the note is released
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEnvelope`] if any time is negative or the
    /// sustain level is outside `[0, 1]`.
    pub fn new(attack: Time, decay: Time, sustain: f64, release: Time, gate: Time) -> Result<Self> {
        for (name, value) in [
            ("attack", attack),
            ("decay", decay),
            ("release", release),
            ("gate", gate),
        ] {
            if value < Time::ZERO {
                return Err(Error::InvalidEnvelope(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&sustain) {
            return Err(Error::InvalidEnvelope(format!(
                "sustain level must be within [0, 1], got {sustain}"
            )));
        }
        Ok(Self {
            attack,
            decay,
            sustain,
            release,
            gate,
            attack_curve: Curve::Linear,
            decay_curve: Curve::Linear,
            release_curve: Curve::Linear,
        })
    }

    pub fn with_attack_curve(mut self, curve: Curve) -> Self {
        self.attack_curve = curve;
        self
    }

    pub fn with_decay_curve(mut self, curve: Curve) -> Self {
        self.decay_curve = curve;
        self
    }

    pub fn with_release_curve(mut self, curve: Curve) -> Self {
        self.release_curve = curve;
        self
    }

    /// Offset at which the envelope reaches 0 for good.
    pub fn duration(&self) -> Time {
        self.gate + self.release
    }

    // Level as if the gate were held forever.
    fn held(&self, t: Time) -> f64 {
        if t < self.attack {
            return self.attack_curve.apply(t.ratio(self.attack));
        }
        let into_decay = t - self.attack;
        if into_decay < self.decay {
            return self
                .decay_curve
                .interpolate(1.0, self.sustain, into_decay.ratio(self.decay));
        }
        self.sustain
    }
}

impl Signal for Adsr {
    fn at(&self, t: Time) -> f64 {
        if t < Time::ZERO {
            return 0.0;
        }
        if t < self.gate {
            return self.held(t);
        }
        let into_release = t - self.gate;
        if into_release >= self.release {
            return 0.0;
        }
        self.release_curve
            .interpolate(self.held(self.gate), 0.0, into_release.ratio(self.release))
    }
}
