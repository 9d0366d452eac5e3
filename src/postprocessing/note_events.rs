use crate::constants::{MIDI_NOTE_MAX, MIDI_NOTE_MIN};
use crate::preprocessing::partials::Partial;

use super::{helpers::helpers::freq_to_note, velocity::VelocityScaler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEventKind {
    NoteOn,
    NoteOff,
}

/// A note-on or note-off at an absolute time in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    pub kind: NoteEventKind,
    pub time_seconds: f64,
    pub pitch_midi: u8,
    pub velocity: u8,
}

/// Reduce a partial to a note-on at its first sample and a note-off at its last.
///
/// Pitch comes from the mean frequency of every sample and velocity from the mean
/// amplitude. A single-sample partial gives a note-on and note-off at the same time.
///
/// # Arguments
///
/// * `partial` - The partial to reduce.
/// * `scaler` - Maps the mean amplitude to a velocity.
///
/// # Returns
///
/// * The `[note_on, note_off]` pair, or `None` if the pitch is outside MIDI notes 0..=127.
pub fn partial_to_note_events(partial: &Partial, scaler: &VelocityScaler) -> Option<[NoteEvent; 2]> {
    let note = freq_to_note(partial.mean_frequency())?;
    if !(MIDI_NOTE_MIN..=MIDI_NOTE_MAX).contains(&note) {
        return None;
    }

    let pitch_midi = note as u8;
    let velocity = scaler.velocity(partial.mean_amplitude());

    Some([
        NoteEvent {
            kind: NoteEventKind::NoteOn,
            time_seconds: partial.start_time(),
            pitch_midi,
            velocity,
        },
        NoteEvent {
            kind: NoteEventKind::NoteOff,
            time_seconds: partial.end_time(),
            pitch_midi,
            velocity,
        },
    ])
}
