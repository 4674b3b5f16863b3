use std::sync::{Arc, Mutex};
use std::time::Duration;

use wordtones::profiles::GameEvent;
use wordtones::sequencer::{AudioBackend, ToneSequencer};
use wordtones::settings::AudioSettings;
use wordtones::tone::{ToneRequest, Waveform};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Played {
    frequency_hz: f32,
    duration: Duration,
    waveform: Waveform,
    start_offset: Duration,
    gain: f32,
}

/// Records every scheduling call instead of producing sound.
#[derive(Clone, Default)]
struct RecordingBackend {
    plays: Arc<Mutex<Vec<Played>>>,
}

impl RecordingBackend {
    fn plays(&self) -> Vec<Played> {
        self.plays.lock().unwrap().clone()
    }
}

impl AudioBackend for RecordingBackend {
    fn play(&self, request: ToneRequest, start_offset: Duration, gain: f32) {
        self.plays.lock().unwrap().push(Played {
            frequency_hz: request.frequency_hz,
            duration: request.duration,
            waveform: request.waveform,
            start_offset,
            gain,
        });
    }
}

fn recording_sequencer() -> (ToneSequencer<RecordingBackend>, RecordingBackend) {
    let backend = RecordingBackend::default();
    (ToneSequencer::with_backend(Some(backend.clone())), backend)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn word_found_plays_three_rising_sine_tones() {
    let (sequencer, backend) = recording_sequencer();
    sequencer.trigger(GameEvent::WordFound);

    let plays = backend.plays();
    assert_eq!(plays.len(), 3);

    let expected = [
        (523.25, ms(200), ms(0)),
        (659.25, ms(200), ms(100)),
        (783.99, ms(300), ms(200)),
    ];
    for (played, (freq, duration, offset)) in plays.iter().zip(expected) {
        assert_eq!(played.frequency_hz, freq);
        assert_eq!(played.duration, duration);
        assert_eq!(played.start_offset, offset);
        assert_eq!(played.waveform, Waveform::Sine);
    }
}

#[test]
fn game_complete_plays_four_tone_fanfare() {
    let (sequencer, backend) = recording_sequencer();
    sequencer.trigger(GameEvent::GameComplete);

    let plays = backend.plays();
    assert_eq!(plays.len(), 4);

    let expected_freqs = [523.25, 659.25, 783.99, 1046.50];
    let expected_offsets = [ms(0), ms(150), ms(300), ms(450)];
    for (i, played) in plays.iter().enumerate() {
        assert_eq!(played.frequency_hz, expected_freqs[i]);
        assert_eq!(played.start_offset, expected_offsets[i]);
        assert_eq!(played.duration, ms(400));
        assert_eq!(played.waveform, Waveform::Sine);
    }
}

#[test]
fn button_click_plays_one_square_blip() {
    let (sequencer, backend) = recording_sequencer();
    sequencer.trigger(GameEvent::ButtonClick);

    let plays = backend.plays();
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].frequency_hz, 800.0);
    assert_eq!(plays[0].duration, ms(100));
    assert_eq!(plays[0].waveform, Waveform::Square);
    assert_eq!(plays[0].start_offset, ms(0));
}

#[test]
fn hint_and_hover_play_single_tones() {
    let (sequencer, backend) = recording_sequencer();
    sequencer.trigger(GameEvent::HintUsed);
    sequencer.trigger(GameEvent::CellHover);

    let plays = backend.plays();
    assert_eq!(plays.len(), 2);
    assert_eq!(
        (plays[0].frequency_hz, plays[0].duration, plays[0].waveform),
        (440.0, ms(300), Waveform::Triangle)
    );
    assert_eq!(
        (plays[1].frequency_hz, plays[1].duration, plays[1].waveform),
        (1000.0, ms(50), Waveform::Sine)
    );
}

#[test]
fn repeated_triggers_schedule_independent_tone_sets() {
    let (sequencer, backend) = recording_sequencer();
    sequencer.trigger(GameEvent::WordFound);
    sequencer.trigger(GameEvent::WordFound);

    let plays = backend.plays();
    assert_eq!(plays.len(), 6);
    assert_eq!(plays[..3], plays[3..]);
}

#[test]
fn missing_backend_makes_every_trigger_a_quiet_no_op() {
    let sequencer = ToneSequencer::<RecordingBackend>::with_backend(None);
    assert!(!sequencer.has_output());

    for event in GameEvent::ALL {
        sequencer.trigger(event);
    }
    sequencer.play_tone(
        ToneRequest::new(440.0, ms(100), Waveform::Sine),
        Duration::ZERO,
    );
}

#[test]
fn construction_without_audio_device_does_not_panic() {
    // Deterministic on both audio-present and audio-absent hosts: either the
    // device opens or every call quietly no-ops.
    let sequencer = ToneSequencer::new();
    let _ = sequencer.has_output();
    for event in GameEvent::ALL {
        sequencer.trigger(event);
    }
}

#[test]
fn default_construction_behaves_like_new() {
    let sequencer = ToneSequencer::default();
    assert_eq!(sequencer.settings(), AudioSettings::default());
    sequencer.trigger(GameEvent::ButtonClick);
}

#[test]
fn mute_stops_future_triggers_from_reaching_the_backend() {
    let (mut sequencer, backend) = recording_sequencer();

    sequencer.set_settings(AudioSettings {
        mute_all: true,
        ..AudioSettings::default()
    });
    sequencer.trigger(GameEvent::WordFound);
    assert!(backend.plays().is_empty());

    sequencer.set_settings(AudioSettings::default());
    sequencer.trigger(GameEvent::ButtonClick);
    assert_eq!(backend.plays().len(), 1);
}

#[test]
fn volume_settings_scale_the_scheduled_gain() {
    let (mut sequencer, backend) = recording_sequencer();
    sequencer.set_settings(AudioSettings {
        master_volume: 0.5,
        sfx_volume: 0.5,
        mute_all: false,
    });

    sequencer.trigger(GameEvent::CellHover);
    let plays = backend.plays();
    assert!((plays[0].gain - 0.25).abs() < 1e-6);
}

#[test]
fn out_of_range_settings_are_clamped_on_the_way_in() {
    let (mut sequencer, _backend) = recording_sequencer();
    sequencer.set_settings(AudioSettings {
        master_volume: 5.0,
        sfx_volume: -1.0,
        mute_all: false,
    });
    assert_eq!(sequencer.settings().master_volume, 1.0);
    assert_eq!(sequencer.settings().sfx_volume, 0.0);
}
