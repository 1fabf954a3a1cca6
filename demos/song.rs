//! A ten-second loop: a half-volume kick sample repeating every half second
//! over a half-volume sine sweeping 440 to 880 Hz across the first third,
//! with the whole mix repeating halfway through.
//!
//! Pass a mono WAV file to use as the kick:
//!
//! Run with: cargo run --example song -- path/to/kick.wav

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use wavecraft::playback::{Ffplay, Playback, PlaybackConfig};
use wavecraft::{Combine, Lerp, SampleBuffer, SignalExt, Sine, Time};

const TOTAL: Time = Time::from_secs(10);
const BEAT: Time = Time::from_millis(500);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let kick_path = std::env::args()
        .nth(1)
        .context("usage: song <kick.wav>")?;
    let kick = SampleBuffer::import_wav(&kick_path)
        .with_context(|| format!("loading {kick_path}"))?;
    tracing::info!(frames = kick.len(), duration = %kick.duration(), "loaded kick");

    let beat = kick.amplitude(0.5).looped(BEAT)?;
    let sweep = Lerp::new(440.0, 880.0, TOTAL / 3)?;
    let tone = Sine::new(sweep).amplitude(0.5);
    let mix = Combine::new(vec![tone.boxed(), beat.boxed()])?;
    let song = mix.looped(TOTAL / 2)?;

    let config = PlaybackConfig::new(TOTAL).with_sample_rate(44_100);
    Playback::new(song, config, Ffplay::new())?.play()?;
    Ok(())
}
