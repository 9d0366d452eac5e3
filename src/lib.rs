//! Convert SPEAR "text - partials" exports to Standard MIDI Files.
//!
//! Each partial becomes one note: its mean frequency gives the pitch, its mean
//! amplitude the velocity, and its first and last samples the note-on and note-off.

pub mod config;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod preprocessing {
    pub mod load_text;
    pub mod partials;
}
pub mod postprocessing {
    pub mod helpers {
        pub mod ported {
            pub mod mido;
            pub mod numpy;
        }
        pub mod helpers;
    }
    pub mod note_events;
    pub mod velocity;
    pub mod timeline;
    pub mod midi;
}

pub use config::{ConversionConfig, MalformedPolicy, ScalingPolicy};
pub use conversion::{convert, Conversion, ConversionStats};
pub use error::ConversionError;
pub use postprocessing::midi::generate_midi_file_data;
