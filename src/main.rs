use std::{fs::File, io::Write, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spear_to_midi::constants::{DEFAULT_BPM, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, MIN_LINE_LENGTH, TICKS_PER_BEAT};
use spear_to_midi::preprocessing::load_text::read_text;
use spear_to_midi::{convert, generate_midi_file_data, ConversionConfig, MalformedPolicy, ScalingPolicy};

#[derive(Parser, Debug)]
#[command(name = "spear-to-midi")]
#[command(about = "Convert SPEAR text partials to a MIDI file", long_about = None)]
struct Args {
    /// SPEAR "text - partials" export to read
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// MIDI file to write
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Tempo in beats per minute
    #[arg(default_value_t = DEFAULT_BPM)]
    bpm: u32,

    /// Ticks per quarter note
    #[arg(long, default_value_t = TICKS_PER_BEAT)]
    ppqn: u16,

    /// Velocity scaling: fixed 0.0-1.0 amplitudes, or the range observed in the input
    #[arg(long, value_enum, default_value_t = ScalingPolicy::Adaptive)]
    scaling: ScalingPolicy,

    /// Lines shorter than this (line ending included) are treated as headers
    #[arg(long, default_value_t = MIN_LINE_LENGTH)]
    min_line_length: usize,

    /// What to do with a data line that does not parse
    #[arg(long, value_enum, default_value_t = MalformedPolicy::Abort)]
    on_malformed: MalformedPolicy,

    /// Suppress progress messages (only warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.quiet);

    let config = ConversionConfig {
        ticks_per_quarter: args.ppqn,
        tempo_bpm: args.bpm,
        scaling: args.scaling,
        min_line_length: args.min_line_length,
        on_malformed: args.on_malformed,
    };

    info!("--- SPEAR to MIDI ---");
    info!(path = %args.input.display(), "Reading file...");
    let start = Instant::now();
    let input = read_text(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    info!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "Complete");

    let conversion = convert(&input, &config)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    let midi_buffer = generate_midi_file_data(&conversion.events, config.ticks_per_quarter, config.tempo_micros())
        .context("Failed to encode MIDI data")?;

    let mut file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    file.write_all(&midi_buffer)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        path = %args.output.display(),
        notes = conversion.events.len() / 2,
        partials = conversion.stats.partials,
        "COMPLETE"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["spear-to-midi"]);
        assert_eq!(args.input, PathBuf::from("SPEAR.txt"));
        assert_eq!(args.output, PathBuf::from("output.mid"));
        assert_eq!(args.bpm, 60);
        assert_eq!(args.ppqn, 480);
        assert_eq!(args.scaling, ScalingPolicy::Adaptive);
        assert_eq!(args.min_line_length, 57);
        assert_eq!(args.on_malformed, MalformedPolicy::Abort);
        assert!(!args.quiet);
    }

    #[test]
    fn test_args_positional_and_options() {
        let args = Args::parse_from([
            "spear-to-midi",
            "in.txt",
            "out.mid",
            "90",
            "--ppqn",
            "960",
            "--scaling",
            "fixed",
            "--on-malformed",
            "skip",
            "-q",
        ]);
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.output, PathBuf::from("out.mid"));
        assert_eq!(args.bpm, 90);
        assert_eq!(args.ppqn, 960);
        assert_eq!(args.scaling, ScalingPolicy::Fixed);
        assert_eq!(args.on_malformed, MalformedPolicy::Skip);
        assert!(args.quiet);
    }
}
