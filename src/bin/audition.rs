use std::thread;
use std::time::Duration;

use wordtones::profiles::GameEvent;
use wordtones::sequencer::ToneSequencer;
use wordtones::settings::SettingsStore;

/// Plays every event profile once, in order, with a pause between them.
fn main() {
    let mut sequencer = ToneSequencer::new();
    if !sequencer.has_output() {
        eprintln!("audition: no audio output device, tones will be silent");
    }
    sequencer.set_settings(SettingsStore::from_env().load().audio);

    for event in GameEvent::ALL {
        println!("{}", event.name());
        sequencer.trigger(event);

        let profile_len = event
            .profile()
            .iter()
            .map(|step| step.delay + step.tone.duration)
            .max()
            .unwrap_or(Duration::ZERO);
        thread::sleep(profile_len + Duration::from_millis(400));
    }
}
