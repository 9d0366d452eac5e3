/* PORTED MIDO FUNCTIONS */

use crate::constants::MICROSECONDS_PER_MINUTE;

/// Converts beats per minute to a MIDI tempo.
///
/// # Arguments
///
/// * `bpm` - Tempo in beats per minute. Must be non-zero.
///
/// # Returns
///
/// * The tempo in microseconds per quarter note, rounded half to even.
pub fn bpm_to_tempo(bpm: u32) -> u32 {
    (MICROSECONDS_PER_MINUTE / bpm as f64).round_ties_even() as u32
}

/// Converts a duration in seconds to (unrounded) ticks.
///
/// # Arguments
///
/// * `seconds` - The duration in seconds.
/// * `ticks_per_beat` - Resolution of the time base.
/// * `tempo` - Microseconds per quarter note.
///
/// # Returns
///
/// * The duration in ticks, before rounding.
pub fn second_to_tick(seconds: f64, ticks_per_beat: u16, tempo: u32) -> f64 {
    seconds * ticks_per_beat as f64 * 1_000_000.0 / tempo as f64
}

/// Converts a duration in ticks back to seconds.
///
/// # Arguments
///
/// * `ticks` - The duration in ticks.
/// * `ticks_per_beat` - Resolution of the time base.
/// * `tempo` - Microseconds per quarter note.
///
/// # Returns
///
/// * The duration in seconds.
pub fn tick_to_second(ticks: u64, ticks_per_beat: u16, tempo: u32) -> f64 {
    ticks as f64 * tempo as f64 / (ticks_per_beat as f64 * 1_000_000.0)
}
