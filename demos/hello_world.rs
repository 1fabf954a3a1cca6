//! Plays a two-second 440 Hz sine through ffplay.
//!
//! Requires `ffplay` (part of FFmpeg) on the PATH.
//!
//! Run with: cargo run --example hello_world

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use wavecraft::playback::{Ffplay, Playback, PlaybackConfig};
use wavecraft::{Sine, SignalExt, Time};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let tone = Sine::new(440.0).amplitude(0.5);
    let config = PlaybackConfig::new(Time::from_secs(2));
    Playback::new(tone, config, Ffplay::new())?.play()?;
    Ok(())
}
