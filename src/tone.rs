use std::f32::consts::TAU;
use std::time::Duration;

use rodio::Source;

pub const SAMPLE_RATE: u32 = 48_000;

/// Peak amplitude of a freshly started tone (0.0..=1.0).
///
/// Kept low so overlapping effects do not clip even before sink volume is applied.
pub const TONE_PEAK: f32 = 0.3;

/// The envelope decays exponentially from `TONE_PEAK` to this by the end of the tone.
const TONE_FLOOR: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub waveform: Waveform,
}

impl ToneRequest {
    pub const fn new(frequency_hz: f32, duration: Duration, waveform: Waveform) -> Self {
        Self {
            frequency_hz,
            duration,
            waveform,
        }
    }
}

/// A finite mono source: `start_offset` of silence, then the requested tone
/// with an exponential-decay envelope, then end-of-stream.
///
/// The start offset is rendered as leading silence, so one source handed to
/// the output once covers the whole scheduled effect.
#[derive(Debug, Clone)]
pub struct ToneSource {
    request: ToneRequest,
    silence_frames: u64,
    tone_frames: u64,
    frame: u64,
    phase: f32,
}

impl ToneSource {
    pub fn new(request: ToneRequest, start_offset: Duration) -> Self {
        let silence_frames = (start_offset.as_secs_f64() * SAMPLE_RATE as f64).round() as u64;
        let tone_frames = (request.duration.as_secs_f64() * SAMPLE_RATE as f64).round() as u64;
        Self {
            request,
            silence_frames,
            tone_frames,
            frame: 0,
            phase: 0.0,
        }
    }

    fn total_frames(&self) -> u64 {
        self.silence_frames + self.tone_frames
    }
}

impl Iterator for ToneSource {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frame >= self.total_frames() {
            return None;
        }

        let sample = if self.frame < self.silence_frames {
            0.0
        } else {
            let pos_in_tone = self.frame - self.silence_frames;
            let t = pos_in_tone as f32 / self.tone_frames.max(1) as f32;
            let env = TONE_PEAK * (TONE_FLOOR / TONE_PEAK).powf(t);

            let base = waveform_sample(self.request.waveform, self.phase);
            let phase_delta = TAU * self.request.frequency_hz / SAMPLE_RATE as f32;
            self.phase = (self.phase + phase_delta) % TAU;

            base * env
        };

        self.frame += 1;
        Some(sample)
    }
}

impl Source for ToneSource {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f64(
            self.total_frames() as f64 / SAMPLE_RATE as f64,
        ))
    }
}

fn waveform_sample(wave: Waveform, phase: f32) -> f32 {
    match wave {
        Waveform::Sine => phase.sin(),
        Waveform::Square => {
            if phase.sin() >= 0.0 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Triangle => (2.0 / std::f32::consts::PI) * phase.sin().asin(),
        Waveform::Sawtooth => 2.0 * (phase / TAU) - 1.0,
    }
}
