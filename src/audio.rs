// src/audio.rs

//! One-shot sound playback.

use crate::config::SoundConfig;
use anyhow::{anyhow, Result};
use log::{info, warn};
use sdl2::mixer::{Channel, Chunk};
use sdl2::{AudioSubsystem, Sdl};

pub trait SoundPlayer {
    /// Starts playback from the beginning.
    fn play(&mut self) -> Result<()>;

    /// True while the last started playback has not finished.
    fn is_playing(&self) -> bool;

    /// Sets the volume, 0-128.
    fn set_volume(&mut self, volume: i32);
}

/// Interleaved signed 16-bit samples of a sine tone with a short linear
/// fade-out, so the end of the tone does not click.
pub fn synthesize_tone(hz: f32, millis: u32, sample_rate: u32, channels: u16) -> Vec<i16> {
    let frames = (sample_rate as u64 * millis as u64 / 1000) as usize;
    let fade = (frames / 10).max(1);
    let amplitude = i16::MAX as f32 * 0.5;
    let mut samples = Vec::with_capacity(frames * channels as usize);
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let envelope = ((frames - i) as f32 / fade as f32).min(1.0);
        let value = (t * hz * std::f32::consts::TAU).sin() * amplitude * envelope;
        for _ in 0..channels {
            samples.push(value as i16);
        }
    }
    samples
}

/// Closes the mixer device on drop.
struct MixerDevice;

impl Drop for MixerDevice {
    fn drop(&mut self) {
        sdl2::mixer::close_audio();
    }
}

/// A sound chunk played through SDL_mixer.
pub struct SdlSound {
    // Must drop before `_device`.
    chunk: Chunk,
    channel: Option<Channel>,
    _device: MixerDevice,
    _audio: AudioSubsystem,
}

impl SdlSound {
    /// Opens the mixer and loads the configured WAV, or synthesizes a tone.
    /// The volume is left at the mixer default; see [`SoundPlayer::set_volume`].
    pub fn new(sdl: &Sdl, config: &SoundConfig) -> Result<Self> {
        let audio = sdl
            .audio()
            .map_err(|e| anyhow!("Failed to initialize audio subsystem: {}", e))?;
        sdl2::mixer::open_audio(44_100, sdl2::mixer::DEFAULT_FORMAT, 2, 1_024)
            .map_err(|e| anyhow!("Failed to open audio device: {}", e))?;
        let device = MixerDevice;
        sdl2::mixer::allocate_channels(4);

        let chunk = match &config.path {
            Some(path) => {
                info!("Loading sound from '{}'", path.display());
                Chunk::from_file(path)
                    .map_err(|e| anyhow!("Failed to load sound '{}': {}", path.display(), e))?
            }
            None => {
                let (frequency, _format, channels) = sdl2::mixer::query_spec()
                    .map_err(|e| anyhow!("Failed to query audio device: {}", e))?;
                let samples = synthesize_tone(
                    config.tone_hz,
                    config.tone_millis,
                    frequency as u32,
                    channels as u16,
                );
                info!(
                    "Synthesized {} Hz tone, {} ms at {} Hz",
                    config.tone_hz, config.tone_millis, frequency
                );
                Chunk::from_raw_buffer(samples.into_boxed_slice())
                    .map_err(|e| anyhow!("Failed to create sound chunk: {}", e))?
            }
        };
        Ok(Self {
            chunk,
            channel: None,
            _device: device,
            _audio: audio,
        })
    }
}

impl SoundPlayer for SdlSound {
    fn play(&mut self) -> Result<()> {
        let channel = Channel::all()
            .play(&self.chunk, 0)
            .map_err(|e| anyhow!("Failed to play sound: {}", e))?;
        self.channel = Some(channel);
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.channel.is_some_and(|c| c.is_playing())
    }

    fn set_volume(&mut self, volume: i32) {
        if !(0..=128).contains(&volume) {
            warn!("SdlSound: volume {} outside 0-128", volume);
        }
        self.chunk.set_volume(volume.clamp(0, 128));
    }
}

/// Player that only records calls. `playing` is set by `play` and cleared
/// with [`MockSound::finish`].
#[derive(Debug, Default)]
pub struct MockSound {
    pub plays: usize,
    pub playing: bool,
    pub volume: i32,
    pub fail: bool,
}

impl MockSound {
    pub fn finish(&mut self) {
        self.playing = false;
    }
}

impl SoundPlayer for MockSound {
    fn play(&mut self) -> Result<()> {
        if self.fail {
            return Err(anyhow!("MockSound: playback failed"));
        }
        self.plays += 1;
        self.playing = true;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_volume(&mut self, volume: i32) {
        self.volume = volume;
    }
}
