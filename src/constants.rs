// Input
pub const DEFAULT_INPUT_PATH: &str = "SPEAR.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "output.mid";
pub const MIN_LINE_LENGTH: usize = 57;
pub const VALUES_PER_SAMPLE: usize = 3;

// Sample columns
pub const TIME: usize = 0;
pub const FREQUENCY: usize = 1;
pub const AMPLITUDE: usize = 2;

// Pitch
pub const A4_FREQUENCY: f64 = 440.0;
pub const A4_MIDI: f64 = 69.0;
pub const MIDI_NOTE_MIN: i64 = 0;
pub const MIDI_NOTE_MAX: i64 = 127;

// Velocity
pub const VELOCITY_MIN: u8 = 0;
pub const VELOCITY_MAX: u8 = 127;
pub const FIXED_AMPLITUDE_LOW: f64 = 0.0;
pub const FIXED_AMPLITUDE_HIGH: f64 = 1.0;

// MIDI Conversion
pub const TICKS_PER_BEAT: u16 = 480;
pub const DEFAULT_BPM: u32 = 60;
pub const MICROSECONDS_PER_MINUTE: f64 = 60_000_000.0;
pub const MAX_TICKS_PER_BEAT: u16 = 0x7FFF;
pub const MAX_TEMPO: u32 = 0xFF_FFFF;
pub const MAX_DELTA_TICKS: u32 = 0x0FFF_FFFF;
pub const TIME_SIGNATURE_NUMERATOR: u8 = 4;
// Denominator as a power of two: 2^2 = quarter note.
pub const TIME_SIGNATURE_DENOMINATOR_POW2: u8 = 2;
pub const CLOCKS_PER_CLICK: u8 = 24;
pub const NOTATED_32NDS_PER_BEAT: u8 = 8;
