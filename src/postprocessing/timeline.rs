use std::cmp::Ordering;

use crate::constants::MAX_DELTA_TICKS;
use crate::error::{ConversionError, Result};

use super::{
    helpers::ported::mido::second_to_tick,
    note_events::{NoteEvent, NoteEventKind},
};

/// A note-on or note-off timed relative to the event before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaEvent {
    pub kind: NoteEventKind,
    pub delta_ticks: u32,
    pub pitch_midi: u8,
    pub velocity: u8,
}

/// Merge note events into one timeline ordered by absolute time.
///
/// The sort is stable: events at the same time keep the order they were produced in,
/// note-on before note-off within a partial, then partial by partial. `-0.0` and `0.0`
/// are the same time. NaN times compare equal to everything here and are rejected by
/// [`convert_to_delta`].
pub fn build_timeline<I>(note_event_pairs: I) -> Vec<NoteEvent>
where
    I: IntoIterator<Item = [NoteEvent; 2]>,
{
    let mut timeline: Vec<NoteEvent> = note_event_pairs.into_iter().flatten().collect();
    timeline.sort_by(|a, b| a.time_seconds.partial_cmp(&b.time_seconds).unwrap_or(Ordering::Equal));
    timeline
}

/// Replace absolute times (in seconds) with delta times between events (in ticks).
///
/// Each absolute time is first quantised to the tick grid and deltas are taken between
/// neighbouring quantised times, so summing the deltas lands within half a tick of every
/// original time however long the timeline is. The first event is measured from zero.
///
/// # Arguments
///
/// * `timeline` - Events sorted by absolute time.
/// * `ticks_per_beat` - Resolution of the time base.
/// * `tempo` - Microseconds per quarter note.
///
/// # Returns
///
/// * The events in the same order with delta times, or an error if the timeline goes
///   backwards in time or a delta is too long for a MIDI file.
pub fn convert_to_delta(timeline: Vec<NoteEvent>, ticks_per_beat: u16, tempo: u32) -> Result<Vec<DeltaEvent>> {
    // Snapshot of the original absolute times, never written to.
    let absolute_seconds: Vec<f64> = timeline.iter().map(|e| e.time_seconds).collect();
    let absolute_ticks: Vec<f64> = absolute_seconds
        .iter()
        .map(|&seconds| second_to_tick(seconds, ticks_per_beat, tempo).round_ties_even())
        .collect();

    timeline
        .into_iter()
        .enumerate()
        .map(|(i, event)| {
            let (previous_seconds, previous_ticks) = if i == 0 {
                (0.0, 0.0)
            } else {
                (absolute_seconds[i - 1], absolute_ticks[i - 1])
            };

            let current_seconds = absolute_seconds[i];
            if !(current_seconds - previous_seconds >= 0.0) {
                return Err(ConversionError::NonMonotonicTimeline {
                    index: i,
                    previous: previous_seconds,
                    current: current_seconds,
                });
            }

            let ticks = absolute_ticks[i] - previous_ticks;
            if ticks > MAX_DELTA_TICKS as f64 {
                return Err(ConversionError::DeltaOverflow { index: i, ticks });
            }

            Ok(DeltaEvent {
                kind: event.kind,
                delta_ticks: ticks as u32,
                pitch_midi: event.pitch_midi,
                velocity: event.velocity,
            })
        })
        .collect()
}
