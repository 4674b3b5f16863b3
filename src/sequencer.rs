use std::time::Duration;

use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::profiles::GameEvent;
use crate::settings::AudioSettings;
use crate::tone::{ToneRequest, ToneSource};

/// Seam between tone scheduling and the platform audio facility, so tests can
/// substitute a recording double.
pub trait AudioBackend {
    /// Schedule `request` to sound `start_offset` after now, scaled by `gain`.
    /// Fire-and-forget: implementations keep no handle to the scheduled sound.
    fn play(&self, request: ToneRequest, start_offset: Duration, gain: f32);
}

/// Default backend: one detached rodio sink per tone.
pub struct RodioBackend {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioBackend {
    /// `None` when the host has no usable audio output.
    pub fn new() -> Option<Self> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream: stream,
            handle,
        })
    }
}

impl AudioBackend for RodioBackend {
    fn play(&self, request: ToneRequest, start_offset: Duration, gain: f32) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.set_volume(gain);
        sink.append(ToneSource::new(request, start_offset));
        sink.detach();
    }
}

/// Plays the fixed per-event tone sequences.
///
/// The backend is acquired once at construction; if the host has no audio
/// output every call becomes a no-op and stays that way for the sequencer's
/// lifetime. Triggers are independent: nothing de-duplicates or cancels
/// overlapping playback.
pub struct ToneSequencer<B = RodioBackend> {
    backend: Option<B>,
    settings: AudioSettings,
}

impl ToneSequencer<RodioBackend> {
    pub fn new() -> Self {
        Self::with_backend(RodioBackend::new())
    }
}

impl Default for ToneSequencer<RodioBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: AudioBackend> ToneSequencer<B> {
    pub fn with_backend(backend: Option<B>) -> Self {
        Self {
            backend,
            settings: AudioSettings::default(),
        }
    }

    pub fn has_output(&self) -> bool {
        self.backend.is_some()
    }

    pub fn settings(&self) -> AudioSettings {
        self.settings
    }

    /// Applies to tones scheduled from now on; in-flight tones are untouched.
    pub fn set_settings(&mut self, settings: AudioSettings) {
        self.settings = settings.clamp();
    }

    pub fn play_tone(&self, request: ToneRequest, start_offset: Duration) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        let gain = self.settings.effective_sfx_gain();
        if gain <= 0.0 {
            return;
        }
        backend.play(request, start_offset, gain);
    }

    /// Schedules the whole profile for `event`. Never panics; without audio
    /// output this is a no-op.
    pub fn trigger(&self, event: GameEvent) {
        for step in event.profile() {
            self.play_tone(step.tone, step.delay);
        }
    }
}
