//! Raw PCM codec: frames as little-endian IEEE-754 doubles.
//!
//! The layout is flat: no header, 8 bytes per frame, frames in time order,
//! mono. The sample rate is not stored and must be known out of band. The
//! encoding is lossless, so `decode(&to_bytes(frames)?) == frames` bit for bit.

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Size of one encoded frame.
pub const BYTES_PER_FRAME: usize = 8;

/// Writes `frames` to `sink` as little-endian doubles.
///
/// # Errors
///
/// Returns [`Error::EmptyFrames`] if `frames` is empty, or [`Error::Sink`] if
/// the sink rejects a write.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// wavecraft::pcm::encode(&[1.0, -1.0, 0.5], &mut out).unwrap();
/// assert_eq!(out.len(), 24);
/// ```
pub fn encode<W: Write>(frames: &[f64], mut sink: W) -> Result<()> {
    if frames.is_empty() {
        return Err(Error::EmptyFrames);
    }
    for frame in frames {
        sink.write_all(&frame.to_le_bytes()).map_err(Error::Sink)?;
    }
    sink.flush().map_err(Error::Sink)?;
    tracing::debug!(frames = frames.len(), "encoded PCM frames");
    Ok(())
}

/// Encodes `frames` into a new byte vector.
pub fn to_bytes(frames: &[f64]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(frames.len() * BYTES_PER_FRAME);
    encode(frames, &mut bytes)?;
    Ok(bytes)
}

/// Decodes little-endian doubles from `bytes`.
///
/// A trailing partial frame (fewer than 8 bytes) is dropped rather than
/// treated as an error, so a truncated dump still yields every complete frame.
///
/// # Examples
///
/// ```
/// let bytes = wavecraft::pcm::to_bytes(&[0.25, -0.75]).unwrap();
/// assert_eq!(wavecraft::pcm::decode(&bytes), vec![0.25, -0.75]);
/// ```
pub fn decode(bytes: &[u8]) -> Vec<f64> {
    let chunks = bytes.chunks_exact(BYTES_PER_FRAME);
    let trailing = chunks.remainder().len();
    if trailing != 0 {
        tracing::trace!(trailing, "dropping partial PCM frame");
    }
    chunks
        .map(|chunk| {
            let mut raw = [0u8; BYTES_PER_FRAME];
            raw.copy_from_slice(chunk);
            f64::from_le_bytes(raw)
        })
        .collect()
}

/// Reads and decodes a raw PCM file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Error::io("read", path, e))?;
    let frames = decode(&bytes);
    tracing::debug!(path = %path.display(), frames = frames.len(), "read PCM file");
    Ok(frames)
}

/// Encodes `frames` into a raw PCM file, replacing any existing file.
pub fn write_file(path: impl AsRef<Path>, frames: &[f64]) -> Result<()> {
    let path = path.as_ref();
    if frames.is_empty() {
        return Err(Error::EmptyFrames);
    }
    let file = File::create(path).map_err(|e| Error::io("create", path, e))?;
    encode(frames, BufWriter::new(file)).map_err(|e| match e {
        Error::Sink(source) => Error::io("write", path, source),
        other => other,
    })
}
