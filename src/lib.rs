pub mod profiles;
pub mod sequencer;
pub mod settings;
pub mod tone;

pub use profiles::GameEvent;
pub use sequencer::ToneSequencer;
