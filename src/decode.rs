//! Audio file decoding into raw sample arrays.
//!
//! Decoders turn a container format into interleaved samples plus the format
//! details needed to interpret them. They do no channel mixing: turning the
//! result into a signal is [`SampleBuffer::from_decoded`]'s job, and it only
//! accepts mono input.
//!
//! [`SampleBuffer::from_decoded`]: crate::SampleBuffer::from_decoded

use crate::Result;
use std::path::Path;

/// Samples decoded from an audio file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Interleaved samples, normalized to `[-1.0, 1.0]`.
    pub samples: Vec<f64>,
    /// Native sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

/// A provider of decoded audio for a file format.
pub trait AudioDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedAudio>;
}

#[cfg(feature = "wav")]
pub use wav::WavDecoder;

#[cfg(feature = "wav")]
mod wav {
    use super::{AudioDecoder, DecodedAudio};
    use crate::{Error, Result};
    use std::path::Path;

    /// WAV decoder backed by `hound` (requires the `wav` feature).
    ///
    /// Float files are read as-is; integer files are normalized by full
    /// scale, `2^(bits - 1)`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WavDecoder;

    impl AudioDecoder for WavDecoder {
        fn decode(&self, path: &Path) -> Result<DecodedAudio> {
            let mut reader =
                hound::WavReader::open(path).map_err(|e| Error::from_hound(path, e))?;
            let spec = reader.spec();

            let samples: std::result::Result<Vec<f64>, _> = match spec.sample_format {
                hound::SampleFormat::Float => reader
                    .samples::<f32>()
                    .map(|s| s.map(|v| v as f64))
                    .collect(),
                hound::SampleFormat::Int => {
                    let max_value = (1i64 << (spec.bits_per_sample - 1)) as f64;
                    reader
                        .samples::<i32>()
                        .map(|s| s.map(|v| v as f64 / max_value))
                        .collect()
                }
            };
            let samples = samples.map_err(|e| Error::from_hound(path, e))?;

            tracing::info!(
                path = %path.display(),
                frames = samples.len() / spec.channels.max(1) as usize,
                sample_rate = spec.sample_rate,
                channels = spec.channels,
                "decoded wav file"
            );
            Ok(DecodedAudio {
                samples,
                sample_rate: spec.sample_rate,
                channels: spec.channels,
            })
        }
    }
}

#[cfg(all(test, feature = "wav"))]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WavDecoder
            .decode(Path::new("/definitely/not/here.wav"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "got {err:?}");
        assert!(!err.is_unsupported_input());
    }

    #[test]
    fn test_garbage_is_unsupported_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"not a riff header at all").unwrap();
        let err = WavDecoder.decode(file.path()).unwrap_err();
        assert!(err.is_unsupported_input(), "got {err:?}");
    }
}
