use clap::ValueEnum;

use crate::constants::{DEFAULT_BPM, MAX_TEMPO, MAX_TICKS_PER_BEAT, MIN_LINE_LENGTH, TICKS_PER_BEAT};
use crate::error::{ConversionError, Result};
use crate::postprocessing::helpers::ported::mido::bpm_to_tempo;

/// Where the velocity scaler takes its input amplitude range from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScalingPolicy {
    /// Amplitudes are assumed to already lie in 0.0..=1.0.
    Fixed,
    /// Min and max of the per-partial mean amplitude over the whole input.
    Adaptive,
}

/// What to do with a data line that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MalformedPolicy {
    /// Fail the whole conversion on the first malformed line.
    Abort,
    /// Log the line and carry on without it.
    Skip,
}

/// Configuration for a SPEAR to MIDI conversion.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// MIDI ticks per quarter note (default: 480)
    pub ticks_per_quarter: u16,
    /// Tempo in beats per minute (default: 60)
    pub tempo_bpm: u32,
    /// Velocity scaling policy (default: adaptive)
    pub scaling: ScalingPolicy,
    /// Records shorter than this, terminator included, are headers (default: 57)
    pub min_line_length: usize,
    /// Malformed record handling (default: abort)
    pub on_malformed: MalformedPolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            ticks_per_quarter: TICKS_PER_BEAT,
            tempo_bpm: DEFAULT_BPM,
            scaling: ScalingPolicy::Adaptive,
            min_line_length: MIN_LINE_LENGTH,
            on_malformed: MalformedPolicy::Abort,
        }
    }
}

impl ConversionConfig {
    /// Tempo in microseconds per quarter note.
    ///
    /// This is the only place the tempo is derived from the BPM, so the tempo
    /// meta event and the tick conversion can never disagree.
    pub fn tempo_micros(&self) -> u32 {
        bpm_to_tempo(self.tempo_bpm)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ticks_per_quarter == 0 || self.ticks_per_quarter > MAX_TICKS_PER_BEAT {
            return Err(ConversionError::InvalidConfig(format!(
                "ticks per quarter note must be within 1..={MAX_TICKS_PER_BEAT}, got {}",
                self.ticks_per_quarter
            )));
        }
        if self.tempo_bpm == 0 {
            return Err(ConversionError::InvalidConfig("tempo must be at least 1 BPM".to_string()));
        }
        if self.tempo_micros() > MAX_TEMPO {
            return Err(ConversionError::InvalidConfig(format!(
                "{} BPM is too slow to be expressed as a MIDI tempo",
                self.tempo_bpm
            )));
        }
        Ok(())
    }
}
