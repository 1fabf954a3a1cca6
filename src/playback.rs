//! Playback through an external raw-PCM player.
//!
//! Playback is split in two so the rest of the crate never depends on a
//! player binary being installed:
//! - [`PcmPlayer`] is the injected strategy that plays a raw PCM file.
//!   [`Ffplay`] is the stock implementation.
//! - [`play_pcm`] and [`Playback`] render, encode, and materialize the bytes
//!   into a temporary file, hand it to the player, and always remove the file
//!   afterwards.

use crate::{Error, Renderer, Result, SampleRate, Signal, Time, pcm};
use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Something that can play a raw PCM file (mono, little-endian f64).
pub trait PcmPlayer {
    /// Plays the file at `path`, blocking until playback completes.
    fn play_file(&self, path: &Path, sample_rate: SampleRate) -> Result<()>;
}

impl<P: PcmPlayer + ?Sized> PcmPlayer for &P {
    fn play_file(&self, path: &Path, sample_rate: SampleRate) -> Result<()> {
        (**self).play_file(path, sample_rate)
    }
}

/// Plays PCM files with the `ffplay` command-line player.
///
/// Runs `ffplay -f f64le -ar <rate> -autoexit -showmode 1 <path>` and waits
/// for it to exit. With a timeout set, a player still running at the deadline
/// is killed and [`Error::Timeout`] is returned.
#[derive(Debug, Clone)]
pub struct Ffplay {
    program: String,
    timeout: Option<Duration>,
}

impl Ffplay {
    pub fn new() -> Self {
        Self {
            program: "ffplay".to_string(),
            timeout: None,
        }
    }

    /// Uses a different executable name or path.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the player command for `path`.
    pub fn command(&self, path: &Path, sample_rate: SampleRate) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-f", "f64le", "-ar"])
            .arg(sample_rate.hz().to_string())
            .args(["-autoexit", "-showmode", "1"])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl Default for Ffplay {
    fn default() -> Self {
        Self::new()
    }
}

impl PcmPlayer for Ffplay {
    fn play_file(&self, path: &Path, sample_rate: SampleRate) -> Result<()> {
        let child = self.command(path, sample_rate).spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::PlayerNotFound {
                    program: self.program.clone(),
                }
            } else {
                Error::PlayerFailed {
                    program: self.program.clone(),
                    status: e.to_string(),
                }
            }
        })?;
        tracing::info!(
            program = %self.program,
            path = %path.display(),
            %sample_rate,
            "player started"
        );

        let status = wait_with_deadline(child, &self.program, self.timeout)?;
        if !status.success() {
            return Err(Error::PlayerFailed {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }
        tracing::info!(program = %self.program, "player finished");
        Ok(())
    }
}

fn wait_with_deadline(
    mut child: Child,
    program: &str,
    timeout: Option<Duration>,
) -> Result<ExitStatus> {
    let failed = |e: std::io::Error| Error::PlayerFailed {
        program: program.to_string(),
        status: e.to_string(),
    };

    let Some(timeout) = timeout else {
        return child.wait().map_err(failed);
    };
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait().map_err(failed)? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            tracing::warn!(program, ?timeout, "player exceeded deadline, killing it");
            // The child may exit on its own between try_wait and kill.
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::Timeout {
                program: program.to_string(),
                after: timeout,
            });
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

/// Writes `pcm` to a temporary `.pcm` file and plays it with `player`.
///
/// The temporary file is removed once the player returns, whether playback
/// succeeded or not. A player error takes precedence over a cleanup error.
pub fn play_pcm<P: PcmPlayer + ?Sized>(
    player: &P,
    pcm: &[u8],
    sample_rate: SampleRate,
) -> Result<()> {
    let mut file = tempfile::Builder::new()
        .prefix("audio_")
        .suffix(".pcm")
        .tempfile()
        .map_err(|e| Error::io("create temporary file in", std::env::temp_dir(), e))?;
    let path = file.path().to_path_buf();

    file.write_all(pcm)
        .and_then(|()| file.flush())
        .map_err(|e| Error::io("write", &path, e))?;
    tracing::debug!(path = %path.display(), bytes = pcm.len(), "materialized PCM buffer");

    let played = player.play_file(&path, sample_rate);
    let removed = file.close().map_err(|e| Error::io("remove", &path, e));
    played?;
    removed
}

/// Settings for [`Playback`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    /// Sample rate in Hz; `None` uses [`SampleRate::DEFAULT`].
    pub sample_rate: Option<u32>,
    /// How much of the signal to play, starting at `t = 0`.
    pub duration: Time,
}

impl PlaybackConfig {
    pub fn new(duration: Time) -> Self {
        Self {
            sample_rate: None,
            duration,
        }
    }

    pub fn with_sample_rate(mut self, hz: u32) -> Self {
        self.sample_rate = Some(hz);
        self
    }
}

/// Renders a signal and plays it through a [`PcmPlayer`].
///
/// # Examples
///
/// ```no_run
/// use wavecraft::{Sine, Time};
/// use wavecraft::playback::{Ffplay, Playback, PlaybackConfig};
///
/// let tone = Sine::new(440.0);
/// let playback = Playback::new(tone, PlaybackConfig::new(Time::SECOND), Ffplay::new())?;
/// playback.play()?;
/// # Ok::<(), wavecraft::Error>(())
/// ```
pub struct Playback<S: Signal, P: PcmPlayer> {
    signal: S,
    renderer: Renderer,
    duration: Time,
    player: P,
}

impl<S: Signal, P: PcmPlayer> Playback<S, P> {
    /// Validates `config` and prepares playback.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] for a zero or negative duration and
    /// [`Error::InvalidSampleRate`] for an explicit zero rate.
    pub fn new(signal: S, config: PlaybackConfig, player: P) -> Result<Self> {
        if !config.duration.is_positive() {
            return Err(Error::InvalidDuration(config.duration));
        }
        let sample_rate = SampleRate::resolve(config.sample_rate)?;
        Ok(Self {
            signal,
            renderer: Renderer::new(sample_rate),
            duration: config.duration,
            player,
        })
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.renderer.sample_rate()
    }

    /// Renders the configured range, encodes it, and plays it.
    pub fn play(&self) -> Result<()> {
        let frames = self.renderer.render(&self.signal, Time::ZERO, self.duration)?;
        let bytes = pcm::to_bytes(&frames)?;
        tracing::info!(
            duration = %self.duration,
            sample_rate = %self.sample_rate(),
            frames = frames.len(),
            "starting playback"
        );
        play_pcm(&self.player, &bytes, self.sample_rate())
    }
}
