//! Signal abstraction and the types it is evaluated over.
//!
//! This module provides the core signal abstractions used throughout the
//! library, including:
//! - `Signal` trait, a pure function of time
//! - `Time`, an exact nanosecond offset
//! - `SampleRate`, the frame/time mapping used by rendering and playback
//! - `Constant` for fixed values

mod core;
mod rate;
mod time;

pub use self::core::{BoxedSignal, Constant, Signal};
pub use rate::SampleRate;
pub use time::Time;
