//! Rendering: sampling a signal into a sequence of frames.

use crate::{Error, Result, SampleRate, Signal, Time};

/// Samples signals at a fixed rate.
///
/// Frame `i` of a render starting at `start` is the signal evaluated at
/// `start + i / sample_rate`. Every frame is an independent evaluation; the
/// renderer keeps no cache between frames or renders.
///
/// # Examples
///
/// ```
/// use wavecraft::{Renderer, SampleRate, Time};
/// use wavecraft::combinators::Combine;
///
/// let mix = Combine::new(vec![2.0, 4.0]).unwrap();
/// let renderer = Renderer::new(SampleRate::new(10).unwrap());
/// let frames = renderer.render(&mix, Time::ZERO, Time::from_millis(100)).unwrap();
/// assert_eq!(frames, vec![3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Renderer {
    sample_rate: SampleRate,
}

impl Renderer {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Number of frames a render of `duration` produces.
    pub fn frame_count(&self, duration: Time) -> usize {
        self.sample_rate.frames_in(duration)
    }

    /// Renders the half-open range `[start, start + duration)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] if `duration` is zero or negative.
    pub fn render<S: Signal + ?Sized>(
        &self,
        signal: &S,
        start: Time,
        duration: Time,
    ) -> Result<Vec<f64>> {
        let mut frames = vec![0.0; self.checked_frame_count(duration)?];
        self.render_into(signal, start, &mut frames);
        tracing::debug!(
            sample_rate = self.sample_rate.hz(),
            frames = frames.len(),
            %start,
            %duration,
            "rendered signal"
        );
        Ok(frames)
    }

    /// Fills `frames` with consecutive frames starting at `start`.
    pub fn render_into<S: Signal + ?Sized>(&self, signal: &S, start: Time, frames: &mut [f64]) {
        self.fill(signal, start, 0, frames);
    }

    /// Renders like [`Renderer::render`], splitting the frame range across
    /// the rayon thread pool. The output is identical to the sequential
    /// render.
    #[cfg(feature = "parallel")]
    pub fn render_parallel<S: Signal + ?Sized>(
        &self,
        signal: &S,
        start: Time,
        duration: Time,
    ) -> Result<Vec<f64>> {
        use rayon::prelude::*;

        const CHUNK: usize = 4096;

        let mut frames = vec![0.0; self.checked_frame_count(duration)?];
        frames
            .par_chunks_mut(CHUNK)
            .enumerate()
            .for_each(|(chunk, out)| self.fill(signal, start, chunk * CHUNK, out));
        tracing::debug!(
            sample_rate = self.sample_rate.hz(),
            frames = frames.len(),
            "rendered signal in parallel"
        );
        Ok(frames)
    }

    fn checked_frame_count(&self, duration: Time) -> Result<usize> {
        if !duration.is_positive() {
            return Err(Error::InvalidDuration(duration));
        }
        Ok(self.frame_count(duration))
    }

    fn fill<S: Signal + ?Sized>(&self, signal: &S, start: Time, first: usize, out: &mut [f64]) {
        for (i, frame) in out.iter_mut().enumerate() {
            let index = (first + i) as u64;
            *frame = signal.at(start + self.sample_rate.frame_time(index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Constant;
    use crate::combinators::Lerp;

    fn renderer(hz: u32) -> Renderer {
        Renderer::new(SampleRate::new(hz).unwrap())
    }

    #[test]
    fn test_default_rate() {
        assert_eq!(Renderer::default().sample_rate().hz(), 44_100);
    }

    #[test]
    fn test_frame_count_covers_half_open_range() {
        let r = renderer(10);
        let frames = r.render(&Constant(1.0), Time::ZERO, Time::SECOND).unwrap();
        assert_eq!(frames.len(), 10);
        let frames = r
            .render(&Constant(1.0), Time::ZERO, Time::from_millis(1001))
            .unwrap();
        assert_eq!(frames.len(), 11);
    }

    #[test]
    fn test_frames_follow_time() {
        let ramp = Lerp::new(0.0, 1.0, Time::SECOND).unwrap();
        let frames = renderer(4).render(&ramp, Time::ZERO, Time::SECOND).unwrap();
        assert_eq!(frames, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_start_offset() {
        let ramp = Lerp::new(0.0, 1.0, Time::SECOND).unwrap();
        let frames = renderer(4)
            .render(&ramp, Time::from_secs(1), Time::from_millis(500))
            .unwrap();
        assert_eq!(frames, vec![1.0, 1.25]);
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let r = renderer(10);
        assert!(matches!(
            r.render(&Constant(1.0), Time::ZERO, Time::ZERO),
            Err(Error::InvalidDuration(_))
        ));
        assert!(r.render(&Constant(1.0), Time::ZERO, -Time::SECOND).is_err());
    }

    #[test]
    fn test_last_frame_before_end_at_uneven_rate() {
        let ramp = Lerp::new(0.0, 1.0, Time::SECOND).unwrap();
        let d = SampleRate::new(3).unwrap().frame_time(2);
        let frames = renderer(3).render(&ramp, Time::ZERO, d).unwrap();
        assert_eq!(frames.len(), 2);
        assert!(frames.iter().all(|&f| f < d.as_secs_f64()));
    }

    #[test]
    fn test_buffer_renders_over_own_duration() {
        let rate = SampleRate::new(44_100).unwrap();
        for n in [1, 2, 3, 441, 44_101] {
            let buffer = crate::SampleBuffer::new(vec![1.0; n], rate);
            let frames = Renderer::new(rate)
                .render(&buffer, Time::ZERO, buffer.duration())
                .unwrap();
            assert_eq!(frames, vec![1.0; n], "{n} frames");
        }
    }

    #[test]
    fn test_render_into() {
        let mut frames = [0.0; 3];
        renderer(2).render_into(&Constant(0.5), Time::ZERO, &mut frames);
        assert_eq!(frames, [0.5; 3]);
    }

    #[test]
    fn test_renders_trait_objects() {
        let boxed: crate::BoxedSignal = Box::new(Constant(2.0));
        let frames = renderer(10)
            .render(boxed.as_ref(), Time::ZERO, Time::from_millis(200))
            .unwrap();
        assert_eq!(frames, vec![2.0, 2.0]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let signal = crate::Sine::new(Lerp::new(100.0, 900.0, Time::SECOND).unwrap());
        let r = renderer(44_100);
        let sequential = r.render(&signal, Time::ZERO, Time::SECOND).unwrap();
        let parallel = r.render_parallel(&signal, Time::ZERO, Time::SECOND).unwrap();
        assert_eq!(sequential, parallel);
    }
}
