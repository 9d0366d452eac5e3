use midly::num::u7;
use midly::Format;
use midly::Header;
use midly::MetaMessage;
use midly::MidiMessage;
use midly::Smf;
use midly::Timing;
use midly::Track;
use midly::TrackEvent;
use midly::TrackEventKind;

use std::io::Cursor;

use crate::constants::{
    CLOCKS_PER_CLICK, NOTATED_32NDS_PER_BEAT, TIME_SIGNATURE_DENOMINATOR_POW2, TIME_SIGNATURE_NUMERATOR,
};
use crate::error::Result;

use super::note_events::NoteEventKind;
use super::timeline::DeltaEvent;

fn track_event(event: &DeltaEvent) -> TrackEvent<'static> {
    let key = u7::new(event.pitch_midi);
    let vel = u7::new(event.velocity);
    let message = match event.kind {
        NoteEventKind::NoteOn => MidiMessage::NoteOn { key, vel },
        NoteEventKind::NoteOff => MidiMessage::NoteOff { key, vel },
    };

    TrackEvent {
        delta: event.delta_ticks.into(),
        kind: TrackEventKind::Midi {
            channel: 0.into(),
            message,
        },
    }
}

/// Build the single track: tempo and 4/4 time signature, the note events, end of track.
pub fn build_track(events: &[DeltaEvent], tempo: u32) -> Track<'static> {
    let mut track = Track::new();

    track.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(tempo.into())),
    });
    track.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::TimeSignature(
            TIME_SIGNATURE_NUMERATOR,
            TIME_SIGNATURE_DENOMINATOR_POW2,
            CLOCKS_PER_CLICK,
            NOTATED_32NDS_PER_BEAT,
        )),
    });

    track.extend(events.iter().map(track_event));

    track.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    track
}

/// Generate MIDI file data from delta-timed note events.
///
/// # Arguments
///
/// * `events` - Note events in emission order, with delta times in ticks.
/// * `ticks_per_beat` - Resolution written to the header, the one the deltas were computed with.
/// * `tempo` - Microseconds per quarter note, the one the deltas were computed with.
///
/// # Returns
///
/// * A vector of bytes representing the MIDI file.
pub fn generate_midi_file_data(events: &[DeltaEvent], ticks_per_beat: u16, tempo: u32) -> Result<Vec<u8>> {
    let timing = Timing::Metrical(ticks_per_beat.into());

    let mut smf = Smf::new(
        Header {
            format: Format::SingleTrack,
            timing
        }
    );
    smf.tracks.push(build_track(events, tempo));

    let mut buffer = Vec::new();
    smf.write_std(&mut Cursor::new(&mut buffer))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta_event(kind: NoteEventKind, delta_ticks: u32, pitch_midi: u8, velocity: u8) -> DeltaEvent {
        DeltaEvent { kind, delta_ticks, pitch_midi, velocity }
    }

    #[test]
    fn test_generate_midi_file_data() {
        let events = vec![
            delta_event(NoteEventKind::NoteOn, 70, 69, 15),
            delta_event(NoteEventKind::NoteOff, 6, 69, 15),
        ];
        let buffer = generate_midi_file_data(&events, 480, 1_000_000).unwrap();
        let smf = Smf::parse(&buffer).unwrap();

        assert_eq!(smf.header.format, Format::SingleTrack);
        assert_eq!(smf.header.timing, Timing::Metrical(480.into()));
        assert_eq!(smf.tracks.len(), 1);

        let track = &smf.tracks[0];
        assert_eq!(track.len(), 5);
        assert_eq!(track[0].kind, TrackEventKind::Meta(MetaMessage::Tempo(1_000_000.into())));
        assert_eq!(track[1].kind, TrackEventKind::Meta(MetaMessage::TimeSignature(4, 2, 24, 8)));
        assert_eq!(track[2].delta.as_int(), 70);
        assert_eq!(
            track[2].kind,
            TrackEventKind::Midi {
                channel: 0.into(),
                message: MidiMessage::NoteOn { key: 69.into(), vel: 15.into() },
            }
        );
        assert_eq!(track[3].delta.as_int(), 6);
        assert_eq!(
            track[3].kind,
            TrackEventKind::Midi {
                channel: 0.into(),
                message: MidiMessage::NoteOff { key: 69.into(), vel: 15.into() },
            }
        );
        assert_eq!(track[4].kind, TrackEventKind::Meta(MetaMessage::EndOfTrack));
    }

    #[test]
    fn test_empty_timeline_is_a_valid_file() {
        let buffer = generate_midi_file_data(&[], 480, 1_000_000).unwrap();
        let smf = Smf::parse(&buffer).unwrap();
        assert_eq!(smf.tracks.len(), 1);
        let kinds: Vec<TrackEventKind> = smf.tracks[0].iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TrackEventKind::Meta(MetaMessage::Tempo(1_000_000.into())),
                TrackEventKind::Meta(MetaMessage::TimeSignature(4, 2, 24, 8)),
                TrackEventKind::Meta(MetaMessage::EndOfTrack),
            ]
        );
    }

    #[test]
    fn test_resolution_written_to_header() {
        let buffer = generate_midi_file_data(&[], 96, 500_000).unwrap();
        let smf = Smf::parse(&buffer).unwrap();
        assert_eq!(smf.header.timing, Timing::Metrical(96.into()));
        assert_eq!(smf.tracks[0][0].kind, TrackEventKind::Meta(MetaMessage::Tempo(500_000.into())));
    }
}
