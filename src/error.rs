use thiserror::Error;

/// Errors that can occur while converting partials to MIDI.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("amplitude range is degenerate (low {low}, high {high}), cannot scale velocities")]
    DegenerateAmplitudeRange { low: f64, high: f64 },

    #[error("timeline is not in ascending order at event {index} ({previous}s -> {current}s)")]
    NonMonotonicTimeline { index: usize, previous: f64, current: f64 },

    #[error("delta of {ticks} ticks at event {index} does not fit a MIDI variable-length quantity")]
    DeltaOverflow { index: usize, ticks: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
