use std::time::Duration;

use crate::tone::{ToneRequest, Waveform};

/// Game events that have a sound effect attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    WordFound,
    GameComplete,
    ButtonClick,
    HintUsed,
    CellHover,
}

/// One tone of an event profile, scheduled `delay` after the trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileStep {
    pub tone: ToneRequest,
    pub delay: Duration,
}

const fn step(
    frequency_hz: f32,
    duration_ms: u64,
    waveform: Waveform,
    delay_ms: u64,
) -> ProfileStep {
    ProfileStep {
        tone: ToneRequest::new(frequency_hz, Duration::from_millis(duration_ms), waveform),
        delay: Duration::from_millis(delay_ms),
    }
}

// C5-E5-G5 arpeggio.
const WORD_FOUND: [ProfileStep; 3] = [
    step(523.25, 200, Waveform::Sine, 0),
    step(659.25, 200, Waveform::Sine, 100),
    step(783.99, 300, Waveform::Sine, 200),
];

// Same arpeggio extended up to C6 for the finale.
const GAME_COMPLETE: [ProfileStep; 4] = [
    step(523.25, 400, Waveform::Sine, 0),
    step(659.25, 400, Waveform::Sine, 150),
    step(783.99, 400, Waveform::Sine, 300),
    step(1046.50, 400, Waveform::Sine, 450),
];

const BUTTON_CLICK: [ProfileStep; 1] = [step(800.0, 100, Waveform::Square, 0)];

const HINT_USED: [ProfileStep; 1] = [step(440.0, 300, Waveform::Triangle, 0)];

const CELL_HOVER: [ProfileStep; 1] = [step(1000.0, 50, Waveform::Sine, 0)];

impl GameEvent {
    pub const ALL: [GameEvent; 5] = [
        GameEvent::WordFound,
        GameEvent::GameComplete,
        GameEvent::ButtonClick,
        GameEvent::HintUsed,
        GameEvent::CellHover,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GameEvent::WordFound => "word-found",
            GameEvent::GameComplete => "game-complete",
            GameEvent::ButtonClick => "button-click",
            GameEvent::HintUsed => "hint-used",
            GameEvent::CellHover => "cell-hover",
        }
    }

    /// The fixed tone sequence played for this event.
    pub fn profile(self) -> &'static [ProfileStep] {
        match self {
            GameEvent::WordFound => &WORD_FOUND,
            GameEvent::GameComplete => &GAME_COMPLETE,
            GameEvent::ButtonClick => &BUTTON_CLICK,
            GameEvent::HintUsed => &HINT_USED,
            GameEvent::CellHover => &CELL_HOVER,
        }
    }
}
