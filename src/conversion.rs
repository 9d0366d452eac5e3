use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::{ConversionConfig, MalformedPolicy};
use crate::error::{ConversionError, Result};
use crate::postprocessing::helpers::ported::mido::tick_to_second;
use crate::postprocessing::note_events::partial_to_note_events;
use crate::postprocessing::timeline::{build_timeline, convert_to_delta, DeltaEvent};
use crate::postprocessing::velocity::VelocityScaler;
use crate::preprocessing::load_text::{split_records, Records};
use crate::preprocessing::partials::{parse_partial, Partial};

/// Counters describing what happened to the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub headers_skipped: usize,
    pub malformed_skipped: usize,
    pub partials: usize,
    pub partials_out_of_range: usize,
    pub note_events: usize,
}

/// The result of a conversion: delta-timed events ready for the MIDI writer.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub events: Vec<DeltaEvent>,
    pub stats: ConversionStats,
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Parse every data record, applying the malformed record policy.
///
/// Records are parsed in parallel but inspected in input order, so under
/// [`MalformedPolicy::Abort`] the reported line is always the first bad one.
pub fn parse_records(records: &Records, on_malformed: MalformedPolicy) -> Result<(Vec<Partial>, usize)> {
    let parsed: Vec<_> = records
        .data
        .par_iter()
        .map(|record| (record.line, parse_partial(record.text)))
        .collect();

    let mut partials = Vec::with_capacity(parsed.len());
    let mut skipped = 0;
    for (line, result) in parsed {
        match (result, on_malformed) {
            (Ok(partial), _) => partials.push(partial),
            (Err(reason), MalformedPolicy::Abort) => {
                return Err(ConversionError::MalformedRecord { line, reason });
            }
            (Err(reason), MalformedPolicy::Skip) => {
                warn!(line, %reason, "skipping malformed record");
                skipped += 1;
            }
        }
    }

    Ok((partials, skipped))
}

/// Convert a SPEAR "text - partials" export to delta-timed MIDI note events.
///
/// # Arguments
///
/// * `input` - The whole text export.
/// * `config` - Conversion settings.
///
/// # Returns
///
/// * The events in emission order plus counters. Input without any usable partial
///   gives an empty event list, not an error.
pub fn convert(input: &str, config: &ConversionConfig) -> Result<Conversion> {
    config.validate()?;
    let mut stats = ConversionStats::default();

    info!("Parsing data...");
    let start = Instant::now();
    let records = split_records(input, config.min_line_length);
    stats.headers_skipped = records.headers_skipped;
    let (partials, malformed_skipped) = parse_records(&records, config.on_malformed)?;
    stats.malformed_skipped = malformed_skipped;
    stats.partials = partials.len();
    info!(partials = stats.partials, elapsed_ms = elapsed_ms(start), "Complete");

    info!("Constructing MIDI events...");
    let start = Instant::now();
    let scaler = VelocityScaler::for_policy(config.scaling, &partials)?;
    if let Some(scaler) = &scaler {
        let range = scaler.range();
        info!(policy = ?config.scaling, low = range.low, high = range.high, "amplitude range");
    }
    let note_event_pairs: Vec<_> = match &scaler {
        Some(scaler) => partials
            .par_iter()
            .filter_map(|partial| partial_to_note_events(partial, scaler))
            .collect(),
        None => Vec::new(),
    };
    stats.partials_out_of_range = partials.len() - note_event_pairs.len();
    info!(
        notes = note_event_pairs.len(),
        dropped = stats.partials_out_of_range,
        elapsed_ms = elapsed_ms(start),
        "Complete"
    );

    info!("Sorting and processing events...");
    let start = Instant::now();
    let timeline = build_timeline(note_event_pairs);
    let events = convert_to_delta(timeline, config.ticks_per_quarter, config.tempo_micros())?;
    stats.note_events = events.len();
    let total_ticks: u64 = events.iter().map(|e| u64::from(e.delta_ticks)).sum();
    info!(
        events = stats.note_events,
        duration_seconds = tick_to_second(total_ticks, config.ticks_per_quarter, config.tempo_micros()),
        elapsed_ms = elapsed_ms(start),
        "Complete"
    );

    if events.is_empty() {
        warn!("no partials with a MIDI pitch found, output will contain no notes");
    }

    Ok(Conversion { events, stats })
}
