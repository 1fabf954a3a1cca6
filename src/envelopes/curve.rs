//! Shaping curves for envelope segments.
//!
//! A curve maps normalized progress through a segment, in `[0, 1]`, to a
//! normalized output in `[0, 1]`.

/// Interpolation curve types for envelope shaping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Curve {
    /// Constant rate of change
    #[default]
    Linear,

    /// Slow start, fast finish. The parameter is the exponent:
    /// `2.0` squares the progress, `3.0` cubes it.
    Exponential(f64),

    /// Fast start, slow finish. Mirror image of `Exponential`.
    Logarithmic(f64),

    /// Smoothstep ease-in/ease-out
    SCurve,
}

impl Curve {
    /// Applies the curve to a normalized progress value.
    ///
    /// Progress outside `[0, 1]` is clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavecraft::envelopes::Curve;
    ///
    /// assert_eq!(Curve::Linear.apply(0.5), 0.5);
    /// assert_eq!(Curve::Exponential(2.0).apply(0.5), 0.25);
    /// ```
    pub fn apply(&self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Curve::Linear => p,
            Curve::Exponential(exp) => p.powf(*exp),
            Curve::Logarithmic(exp) => 1.0 - (1.0 - p).powf(*exp),
            Curve::SCurve => p * p * (3.0 - 2.0 * p),
        }
    }

    /// Moves from `from` to `to` following this curve.
    ///
    /// ```
    /// use wavecraft::envelopes::Curve;
    ///
    /// assert_eq!(Curve::Linear.interpolate(1.0, 0.5, 0.5), 0.75);
    /// ```
    pub fn interpolate(&self, from: f64, to: f64, progress: f64) -> f64 {
        from + (to - from) * self.apply(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_endpoints_are_fixed() {
        for curve in [
            Curve::Linear,
            Curve::Exponential(3.0),
            Curve::Logarithmic(2.0),
            Curve::SCurve,
        ] {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?}");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn test_curve_shapes() {
        assert_eq!(Curve::Exponential(3.0).apply(0.5), 0.125);
        assert_eq!(Curve::Logarithmic(2.0).apply(0.5), 0.75);
        assert!(Curve::SCurve.apply(0.25) < 0.25);
        assert!(Curve::SCurve.apply(0.75) > 0.75);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Curve::Linear.apply(-0.5), 0.0);
        assert_eq!(Curve::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn test_exponential_mirrors_logarithmic() {
        let exp = Curve::Exponential(2.0);
        let log = Curve::Logarithmic(2.0);
        for p in [0.25, 0.5, 0.75] {
            assert!((exp.apply(p) + log.apply(1.0 - p) - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_interpolate_downwards() {
        let v = Curve::Exponential(2.0).interpolate(1.0, 0.0, 0.5);
        assert!((v - 0.75).abs() < EPSILON);
    }
}
