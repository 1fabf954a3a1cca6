//! Error types for signal construction, rendering, and audio I/O.

use crate::Time;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by wavecraft.
///
/// Variants fall into three groups that callers can branch on:
/// construction errors (bad parameters while building a signal or render
/// configuration), unsupported-input errors (a file that decodes fine but
/// cannot be used), and environment errors (I/O, missing or failing player).
#[derive(Debug, Error)]
pub enum Error {
    /// Sample rate was zero
    #[error("invalid sample rate: {0} (must be a positive integer)")]
    InvalidSampleRate(u32),

    /// Loop period was zero or negative
    #[error("invalid loop period: {0} (must be strictly positive)")]
    InvalidPeriod(Time),

    /// Render, ramp, or playback duration was zero or negative
    #[error("invalid duration: {0} (must be strictly positive)")]
    InvalidDuration(Time),

    /// `Combine` was given no operands
    #[error("cannot combine an empty list of signals")]
    EmptyCombine,

    /// Envelope parameters out of range
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),

    /// PCM encoder was given no frames
    #[error("no frames were provided")]
    EmptyFrames,

    /// Decoded audio has a channel count the sample buffer cannot use
    #[error("unsupported channel layout: {channels} channels (expected mono)")]
    UnsupportedChannelLayout {
        /// Channel count reported by the decoder.
        channels: u16,
    },

    /// Audio file could be opened but its format is not supported
    #[error("unsupported audio format in '{path}': {reason}")]
    UnsupportedFormat {
        /// File that was being decoded.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// I/O failure with the operation and path that caused it
    #[error("failed to {op} '{path}': {source}")]
    Io {
        /// Short description of the operation ("open", "write", ...).
        op: &'static str,
        /// Path involved in the operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to a caller-supplied sink failed
    #[error("failed to write PCM frames: {0}")]
    Sink(#[source] std::io::Error),

    /// External player executable could not be launched
    #[error("player executable '{program}' not found")]
    PlayerNotFound {
        /// Program that was looked up.
        program: String,
    },

    /// External player exited unsuccessfully
    #[error("player '{program}' failed: {status}")]
    PlayerFailed {
        /// Program that was run.
        program: String,
        /// Exit status or launch failure description.
        status: String,
    },

    /// External player exceeded its deadline and was killed
    #[error("player '{program}' timed out after {after:?}")]
    Timeout {
        /// Program that was run.
        program: String,
        /// Deadline that was exceeded.
        after: std::time::Duration,
    },
}

/// Result type for wavecraft operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an I/O error tagged with its operation and path.
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while validating constructor arguments.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::InvalidSampleRate(_)
                | Error::InvalidPeriod(_)
                | Error::InvalidDuration(_)
                | Error::EmptyCombine
                | Error::InvalidEnvelope(_)
                | Error::EmptyFrames
        )
    }

    /// True for inputs that were read successfully but cannot be used.
    pub fn is_unsupported_input(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedChannelLayout { .. } | Error::UnsupportedFormat { .. }
        )
    }
}

#[cfg(feature = "wav")]
impl Error {
    pub(crate) fn from_hound(path: impl Into<PathBuf>, e: hound::Error) -> Self {
        let path = path.into();
        match e {
            hound::Error::IoError(source) => Error::Io {
                op: "read wav",
                path,
                source,
            },
            other => Error::UnsupportedFormat {
                path,
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn test_io_display_includes_op_and_path() {
        let err = Error::io("open", "/a/b.pcm", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to open"), "got: {msg}");
        assert!(msg.contains("/a/b.pcm"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_construction_classification() {
        assert!(Error::EmptyCombine.is_construction());
        assert!(Error::InvalidSampleRate(0).is_construction());
        assert!(Error::InvalidPeriod(Time::ZERO).is_construction());
        assert!(!Error::EmptyCombine.is_unsupported_input());
    }

    #[test]
    fn test_unsupported_input_is_distinct_from_io() {
        let unsupported = Error::UnsupportedChannelLayout { channels: 2 };
        assert!(unsupported.is_unsupported_input());
        assert!(!unsupported.is_construction());

        let io = Error::io("read", "/x", mock_io_err());
        assert!(!io.is_unsupported_input());
        assert!(!io.is_construction());
    }

    #[test]
    fn test_channel_layout_display() {
        let err = Error::UnsupportedChannelLayout { channels: 2 };
        assert_eq!(
            err.to_string(),
            "unsupported channel layout: 2 channels (expected mono)"
        );
    }
}
