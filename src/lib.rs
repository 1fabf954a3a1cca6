//! Wavecraft - composable waveforms as pure functions of time
//!
//! A [`Signal`] maps a [`Time`] offset to a value. Oscillators, envelopes,
//! and combinators build larger signals out of smaller ones without
//! evaluating anything; a [`Renderer`] then samples the finished graph at a
//! fixed [`SampleRate`], and [`pcm`] turns the frames into a flat
//! little-endian `f64` dump that external players understand.
//!
//! ```
//! use wavecraft::{Renderer, Sine, SignalExt, Time, combinators::Lerp};
//!
//! let sweep = Lerp::new(440.0, 880.0, Time::from_secs(2))?;
//! let tone = Sine::new(sweep).amplitude(0.5).looped(Time::SECOND)?;
//! let frames = Renderer::default().render(&tone, Time::ZERO, Time::from_millis(10))?;
//! let bytes = wavecraft::pcm::to_bytes(&frames)?;
//! assert_eq!(bytes.len(), frames.len() * 8);
//! # Ok::<(), wavecraft::Error>(())
//! ```

pub mod combinators;
pub mod decode;
pub mod envelopes;
mod error;
pub mod noise;
pub mod oscillators;
pub mod pcm;
pub mod playback;
mod render;
mod sampler;
pub mod signals;

// Re-export commonly used types at the crate root
pub use combinators::{
    Add, Amplitude, Clamp, Combine, Invert, Lerp, Limit, Loop, Map, Offset, Shift, SignalExt,
    Speed,
};
pub use envelopes::{Adsr, Curve};
pub use error::{Error, Result};
pub use noise::WhiteNoise;
pub use oscillators::{Oscillator, Sawtooth, Sine, Square, Triangle};
pub use render::Renderer;
pub use sampler::SampleBuffer;
pub use signals::{BoxedSignal, Constant, SampleRate, Signal, Time};
