use crate::constants::{A4_FREQUENCY, A4_MIDI};

/// Converts a frequency in Hz to the corresponding fractional MIDI pitch.
///
/// # Arguments
///
/// * `hz` - A frequency in Hz.
///
/// # Returns
///
/// * The corresponding MIDI pitch, A4 = 440 Hz = 69.
pub fn hz_to_midi(hz: f64) -> f64 {
    12.0 * (hz / A4_FREQUENCY).log2() + A4_MIDI
}

/// Returns the nearest MIDI note number to a frequency.
///
/// Ties round half to even, so a pitch of exactly 69.5 becomes 70 and 68.5 becomes 68.
///
/// # Arguments
///
/// * `hz` - A frequency in Hz.
///
/// # Returns
///
/// * The note number, or `None` if the frequency is not a positive finite number.
///   The note is not range checked, it may fall outside 0..=127.
pub fn freq_to_note(hz: f64) -> Option<i64> {
    if !hz.is_finite() || hz <= 0.0 {
        return None;
    }
    Some(hz_to_midi(hz).round_ties_even() as i64)
}

/// Linear scaling of `value` from the range `in_low..in_high` to `out_low..out_high`.
///
/// # Arguments
///
/// * `value` - The value to scale.
/// * `in_low` - Lower bound of the input range.
/// * `in_high` - Upper bound of the input range. Must differ from `in_low`.
/// * `out_low` - Lower bound of the output range.
/// * `out_high` - Upper bound of the output range.
///
/// # Returns
///
/// * The scaled value, unrounded.
pub fn linear_scale(value: f64, in_low: f64, in_high: f64, out_low: f64, out_high: f64) -> f64 {
    let in_range = in_high - in_low;
    let out_range = out_high - out_low;
    ((value - in_low) * out_range) / in_range + out_low
}
