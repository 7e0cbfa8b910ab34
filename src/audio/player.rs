use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::{AudioCue, Cue};

const SAMPLE_RATE: u32 = 44_100;

// Fallback tones when no sound files are supplied
const EAT_TONE_HZ: f32 = 880.0;
const EAT_TONE_SECS: f32 = 0.08;
const GAME_OVER_TONE_HZ: f32 = 110.0;
const GAME_OVER_TONE_SECS: f32 = 0.25;

/// One decoded cue, kept in memory so a trigger never touches the filesystem
struct CueSamples {
    channels: u16,
    sample_rate: u32,
    samples: Vec<f32>,
}

impl CueSamples {
    /// Decode a sound file into a sample buffer
    fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open sound file {}", path.display()))?;
        let decoder = Decoder::new(BufReader::new(file))
            .with_context(|| format!("failed to decode sound file {}", path.display()))?;

        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Vec<f32> = decoder.convert_samples().collect();

        Ok(Self {
            channels,
            sample_rate,
            samples,
        })
    }

    /// Synthesize a mono sine tone with a linear fade-out
    fn sine(frequency_hz: f32, duration_secs: f32) -> Self {
        let count = (duration_secs * SAMPLE_RATE as f32) as usize;
        let mut samples = Vec::with_capacity(count);

        for n in 0..count {
            let t = n as f32 / SAMPLE_RATE as f32;
            let fade = 1.0 - t / duration_secs;
            samples.push((std::f32::consts::TAU * frequency_hz * t).sin() * 0.4 * fade);
        }

        Self {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            samples,
        }
    }

    fn source(&self) -> SamplesBuffer<f32> {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples.clone())
    }
}

/// Rodio-backed cue playback.
///
/// Sources are loaded by path at construction when given, otherwise short
/// synthesized tones are used. Playback happens on detached sinks, so a
/// trigger never blocks the tick loop.
pub struct CuePlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    eat: CueSamples,
    game_over: CueSamples,
}

impl CuePlayer {
    pub fn new(eat_path: Option<&Path>, game_over_path: Option<&Path>) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("failed to open audio output device")?;

        let eat = match eat_path {
            Some(path) => CueSamples::from_path(path)?,
            None => CueSamples::sine(EAT_TONE_HZ, EAT_TONE_SECS),
        };
        let game_over = match game_over_path {
            Some(path) => CueSamples::from_path(path)?,
            None => CueSamples::sine(GAME_OVER_TONE_HZ, GAME_OVER_TONE_SECS),
        };

        Ok(Self {
            _stream: stream,
            handle,
            eat,
            game_over,
        })
    }
}

impl AudioCue for CuePlayer {
    fn trigger(&self, cue: Cue) {
        let samples = match cue {
            Cue::Eat => &self.eat,
            Cue::GameOver => &self.game_over,
        };

        // Dropped triggers are acceptable; playback is best effort
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(samples.source());
            sink.detach();
        }
    }
}
