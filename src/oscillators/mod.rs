//! Oscillators: periodic waveforms driven by a frequency signal.
//!
//! Every oscillator is generic over its frequency, so a bare `f64` gives a
//! fixed pitch and any other signal gives frequency modulation.

mod sawtooth;
mod sine;
mod square;
mod traits;
mod triangle;

pub use sawtooth::Sawtooth;
pub use sine::Sine;
pub use square::Square;
pub use traits::Oscillator;
pub use triangle::Triangle;
