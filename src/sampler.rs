//! Sample-buffer playback: discrete audio as a continuous signal.

use crate::decode::DecodedAudio;
use crate::{Error, Result, SampleRate, Signal, Time, pcm};
use std::path::Path;
use std::sync::Arc;

/// A fixed array of frames plus its native sample rate, played back as a
/// signal.
///
/// Evaluating at `t` returns the frame whose interval contains `t` (floor
/// lookup, no interpolation). Before the first frame and from the end of the
/// buffer onwards the value is 0; the end offset itself is already past the
/// end.
///
/// Frames are held behind an `Arc`, so cloning a buffer is cheap and every
/// clone reads the same immutable data. One imported sample can appear many
/// times in a graph.
///
/// # Examples
///
/// ```
/// use wavecraft::{SampleBuffer, SampleRate, Signal, Time};
///
/// let rate = SampleRate::new(4).unwrap();
/// let buffer = SampleBuffer::new(vec![0.1, 0.2, 0.3], rate);
/// assert_eq!(buffer.at(Time::from_millis(300)), 0.2);
/// assert_eq!(buffer.at(Time::from_millis(500)), 0.3);
/// assert_eq!(buffer.at(Time::from_millis(750)), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    frames: Arc<[f64]>,
    sample_rate: SampleRate,
}

impl SampleBuffer {
    pub fn new(frames: impl Into<Arc<[f64]>>, sample_rate: SampleRate) -> Self {
        Self {
            frames: frames.into(),
            sample_rate,
        }
    }

    /// Builds a buffer from raw PCM bytes (see [`crate::pcm`]).
    pub fn from_pcm_bytes(bytes: &[u8], sample_rate: SampleRate) -> Self {
        Self::new(pcm::decode(bytes), sample_rate)
    }

    /// Loads a raw PCM file recorded at `sample_rate`.
    pub fn import_pcm(path: impl AsRef<Path>, sample_rate: SampleRate) -> Result<Self> {
        let frames = pcm::read_file(path)?;
        Ok(Self::new(frames, sample_rate))
    }

    /// Wraps decoded audio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannelLayout`] unless the audio is mono,
    /// or [`Error::InvalidSampleRate`] if the decoder reported a zero rate.
    pub fn from_decoded(audio: DecodedAudio) -> Result<Self> {
        if audio.channels != 1 {
            return Err(Error::UnsupportedChannelLayout {
                channels: audio.channels,
            });
        }
        let sample_rate = SampleRate::new(audio.sample_rate)?;
        Ok(Self::new(audio.samples, sample_rate))
    }

    /// Loads a mono WAV file (requires the `wav` feature).
    #[cfg(feature = "wav")]
    pub fn import_wav(path: impl AsRef<Path>) -> Result<Self> {
        use crate::decode::{AudioDecoder, WavDecoder};

        Self::from_decoded(WavDecoder.decode(path.as_ref())?)
    }

    pub fn frames(&self) -> &[f64] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Total playback duration; offsets at or beyond it evaluate to 0.
    pub fn duration(&self) -> Time {
        self.sample_rate.duration_of(self.frames.len())
    }
}

impl Signal for SampleBuffer {
    fn at(&self, t: Time) -> f64 {
        usize::try_from(self.sample_rate.frame_index(t))
            .ok()
            .and_then(|i| self.frames.get(i))
            .copied()
            .unwrap_or(0.0)
    }
}
