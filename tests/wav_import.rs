//! Importing WAV files as sample buffers.
#![cfg(feature = "wav")]

use approx::assert_relative_eq;
use std::path::Path;
use wavecraft::decode::{AudioDecoder, WavDecoder};
use wavecraft::{Error, SampleBuffer, Signal, Time};

fn write_wav<S: hound::Sample + Copy>(path: &Path, spec: hound::WavSpec, samples: &[S]) {
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

fn int_spec(channels: u16, sample_rate: u32, bits: u16) -> hound::WavSpec {
    hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: bits,
        sample_format: hound::SampleFormat::Int,
    }
}

#[test]
fn mono_16bit_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kick.wav");
    write_wav(&path, int_spec(1, 1_000, 16), &[0i16, 16_384, -32_768, 32_767]);

    let buffer = SampleBuffer::import_wav(&path).unwrap();
    assert_eq!(buffer.sample_rate().hz(), 1_000);
    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer.duration(), Time::from_millis(4));

    assert_eq!(buffer.at(Time::ZERO), 0.0);
    assert_eq!(buffer.at(Time::from_millis(1)), 0.5);
    assert_eq!(buffer.at(Time::from_millis(2)), -1.0);
    assert_relative_eq!(buffer.at(Time::from_millis(3)), 32_767.0 / 32_768.0);
    assert_eq!(buffer.at(Time::from_millis(4)), 0.0);
}

#[test]
fn mono_float_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("float.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 48_000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    write_wav(&path, spec, &[0.25f32, -0.75]);

    let audio = WavDecoder.decode(&path).unwrap();
    assert_eq!(audio.channels, 1);
    assert_eq!(audio.sample_rate, 48_000);
    assert_eq!(audio.samples, vec![0.25, -0.75]);
}

#[test]
fn stereo_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereo.wav");
    write_wav(&path, int_spec(2, 44_100, 16), &[1i16, 2, 3, 4]);

    // The decoder itself is happy; only the buffer refuses to mix channels.
    let audio = WavDecoder.decode(&path).unwrap();
    assert_eq!(audio.channels, 2);
    assert_eq!(audio.samples.len(), 4);

    let err = SampleBuffer::import_wav(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedChannelLayout { channels: 2 }));
    assert!(err.is_unsupported_input());
}

#[test]
fn imported_sample_can_be_looped() {
    use wavecraft::SignalExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("click.wav");
    write_wav(&path, int_spec(1, 100, 8), &[64i8, 0]);

    let click = SampleBuffer::import_wav(&path)
        .unwrap()
        .looped(Time::from_millis(50))
        .unwrap();
    assert_eq!(click.at(Time::ZERO), 0.5);
    assert_eq!(click.at(Time::from_millis(10)), 0.0);
    assert_eq!(click.at(Time::from_millis(30)), 0.0);
    assert_eq!(click.at(Time::from_millis(50)), 0.5);
    assert_eq!(click.at(Time::from_millis(1_000)), 0.5);
}
